//! Output rendering for the site-check CLI.
//!
//! Three formats: plain lines (default, grep-friendly), pretty terminal
//! output with colors and a summary, and JSON for machine consumption.

use console::Style;
use site_check_lib::SiteStatus;

/// Print one plain line per site, sorted by URL.
pub fn print_plain(rows: &[SiteStatus]) {
    for row in rows {
        println!("{} {}", status_word(row.up), row.url);
    }
}

/// Print colored per-site lines plus a summary footer.
pub fn print_pretty(rows: &[SiteStatus]) {
    let up_style = Style::new().green().bold();
    let down_style = Style::new().red().bold();

    for row in rows {
        let label = if row.up {
            up_style.apply_to("UP  ")
        } else {
            down_style.apply_to("DOWN")
        };
        println!("  {} {}", label, row.url);
    }

    println!();
    println!("{}", summary_line(rows));
}

/// Print the full report as a JSON array.
pub fn print_json(rows: &[SiteStatus]) -> serde_json::Result<()> {
    let json = serde_json::to_string_pretty(rows)?;
    println!("{}", json);
    Ok(())
}

fn status_word(up: bool) -> &'static str {
    if up {
        "UP"
    } else {
        "DOWN"
    }
}

/// Build the summary footer, e.g. "Summary: 2 up, 1 down (3 total)".
pub fn summary_line(rows: &[SiteStatus]) -> String {
    let up = rows.iter().filter(|r| r.up).count();
    let down = rows.len() - up;
    format!("Summary: {} up, {} down ({} total)", up, down, rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(url: &str, up: bool) -> SiteStatus {
        SiteStatus {
            url: url.to_string(),
            up,
        }
    }

    #[test]
    fn test_summary_line() {
        let rows = vec![row("a.com", true), row("b.com", false), row("c.com", true)];
        assert_eq!(summary_line(&rows), "Summary: 2 up, 1 down (3 total)");
    }

    #[test]
    fn test_summary_line_empty() {
        assert_eq!(summary_line(&[]), "Summary: 0 up, 0 down (0 total)");
    }

    #[test]
    fn test_status_word() {
        assert_eq!(status_word(true), "UP");
        assert_eq!(status_word(false), "DOWN");
    }
}
