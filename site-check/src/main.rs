//! Site Check CLI Application
//!
//! A command-line interface for checking website availability concurrently.
//! This CLI application provides a user-friendly interface to the
//! site-check-lib library, using an HTTP GET as the availability predicate.

mod ui;

use std::io::BufRead;
use std::process;
use std::time::Duration;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use site_check_lib::{
    load_env_config, CheckConfig, CheckError, ConfigManager, EnvConfig, FileConfig, SiteChecker,
    SiteStatus,
};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for site-check
#[derive(Parser, Debug)]
#[command(name = "site-check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Check website availability concurrently")]
#[command(
    long_about = "Check website availability by issuing HTTP requests to every URL concurrently.\n\nAll checks run in a bounded worker pool; the full report is printed once the whole batch has completed."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// URLs to check (scheme optional, http:// assumed)
    #[arg(value_name = "URLS", help_heading = "Site Selection")]
    pub urls: Vec<String>,

    /// Input file with URLs (one per line, # comments allowed)
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help_heading = "Site Selection"
    )]
    pub file: Option<String>,

    /// Number of concurrent workers (1-1024)
    #[arg(
        short = 'c',
        long = "concurrency",
        value_name = "N",
        help_heading = "Checking"
    )]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds
    #[arg(
        short = 'T',
        long = "timeout",
        value_name = "SECONDS",
        help_heading = "Checking"
    )]
    pub timeout: Option<u64>,

    /// Output results in JSON format
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Enable colorful output with a summary footer
    #[arg(short = 'p', long = "pretty", help_heading = "Output Format")]
    pub pretty: bool,

    /// Use a specific config file instead of auto-discovery
    #[arg(long = "config", value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,
}

/// Effective settings after merging CLI flags, environment, config file,
/// and built-in defaults (in that precedence order).
#[derive(Debug)]
struct Settings {
    concurrency: usize,
    timeout: Duration,
    pretty: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        init_tracing();
    }

    let file_config = match load_file_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let env_config = load_env_config(args.verbose);
    let settings = resolve_settings(&args, &file_config, &env_config);

    let urls = match collect_urls(&args) {
        Ok(urls) => urls,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if urls.is_empty() {
        eprintln!("Error: No URLs to check. Pass URLs as arguments or use --file.");
        process::exit(1);
    }

    let client = match reqwest::Client::builder()
        .timeout(settings.timeout)
        .user_agent(concat!("site-check/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: failed to build HTTP client: {}", e);
            process::exit(1);
        }
    };

    let checker =
        SiteChecker::with_config(CheckConfig::default().with_concurrency(settings.concurrency));

    let predicate = move |url: String| {
        let client = client.clone();
        async move {
            match client.get(request_url(&url)).send().await {
                Ok(response) => response.status().is_success(),
                // Connection failures and timeouts are "down", never a
                // batch error: the predicate always terminates with a bool.
                Err(_) => false,
            }
        }
    };

    let results = match checker.check_all(predicate, &urls).await {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let rows = SiteStatus::from_results(&results);

    if args.json {
        if let Err(e) = ui::print_json(&rows) {
            eprintln!("Error: failed to serialize results: {}", e);
            process::exit(1);
        }
    } else if settings.pretty {
        ui::print_pretty(&rows);
    } else {
        ui::print_plain(&rows);
    }

    // Grep-friendly exit code: 2 means "at least one site is down".
    if rows.iter().any(|row| !row.up) {
        process::exit(2);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("site_check=debug,site_check_lib=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config file layer: an explicit --config path must exist and
/// parse; discovery tolerates absent files.
fn load_file_config(args: &Args) -> Result<FileConfig, CheckError> {
    let manager = ConfigManager::new(args.verbose);
    match &args.config {
        Some(path) => manager.load_file(path),
        None => manager.discover_and_load(),
    }
}

/// Merge CLI flags, environment variables, config file defaults, and
/// built-in defaults into the effective settings. The environment layer
/// is passed in rather than read here so the merge is a pure function.
fn resolve_settings(args: &Args, file_config: &FileConfig, env_config: &EnvConfig) -> Settings {
    let defaults = file_config.defaults.clone().unwrap_or_default();

    let concurrency = args
        .concurrency
        .or(env_config.concurrency)
        .or(defaults.concurrency)
        .unwrap_or(32)
        .clamp(1, 1024);

    let timeout_secs = args
        .timeout
        .or(env_config.timeout)
        .or(defaults.timeout)
        .unwrap_or(5)
        .max(1);

    let pretty = args.pretty || defaults.pretty.unwrap_or(false);

    Settings {
        concurrency,
        timeout: Duration::from_secs(timeout_secs),
        pretty,
    }
}

/// Gather URLs from positional arguments and the optional input file.
fn collect_urls(args: &Args) -> Result<Vec<String>, CheckError> {
    let mut urls: Vec<String> = args
        .urls
        .iter()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .collect();

    if let Some(path) = &args.file {
        urls.extend(read_urls_from_file(path)?);
    }

    Ok(urls)
}

/// Read URLs from a file, one per line. Blank lines and lines starting
/// with '#' are skipped.
fn read_urls_from_file(path: &str) -> Result<Vec<String>, CheckError> {
    let file = std::fs::File::open(path)
        .map_err(|e| CheckError::file_error(path, format!("Failed to open file: {}", e)))?;

    let mut urls = Vec::new();
    for line in std::io::BufReader::new(file).lines() {
        let line =
            line.map_err(|e| CheckError::file_error(path, format!("Failed to read line: {}", e)))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        urls.push(trimmed.to_string());
    }

    Ok(urls)
}

/// Build the request URL, assuming http:// when no scheme is given. The
/// original string stays the result-map key either way.
fn request_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}
