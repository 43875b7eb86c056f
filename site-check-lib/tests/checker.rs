// site-check-lib/tests/checker.rs

//! Integration tests for the concurrent batch checker.

use std::time::{Duration, Instant};

use site_check_lib::{check_websites, CheckConfig, SiteChecker};

/// Deterministic mock predicate: up for everything except one known-bad URL.
async fn mock_website_checker(url: String) -> bool {
    url != "what-going-on.com"
}

#[tokio::test]
async fn test_check_websites() {
    let websites = vec![
        "google.com".to_string(),
        "what-going-on.com".to_string(),
        "youtube.com".to_string(),
    ];

    let results = check_websites(mock_website_checker, &websites)
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results["google.com"], true);
    assert_eq!(results["what-going-on.com"], false);
    assert_eq!(results["youtube.com"], true);
}

#[tokio::test]
async fn test_empty_input_returns_empty_map() {
    let results = check_websites(mock_website_checker, &[]).await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_completeness_over_distinct_items() {
    let websites: Vec<String> = (0..250).map(|i| format!("site-{}.com", i)).collect();

    let results = check_websites(|_url| async { true }, &websites)
        .await
        .unwrap();

    assert_eq!(
        results.len(),
        websites.len(),
        "every distinct item must have exactly one entry"
    );
}

#[tokio::test]
async fn test_correctness_against_predicate() {
    let websites: Vec<String> = (0..50).map(|i| format!("site-{}.com", i)).collect();

    // Odd-numbered sites are down.
    let results = check_websites(
        |url: String| async move {
            let n: usize = url
                .trim_start_matches("site-")
                .trim_end_matches(".com")
                .parse()
                .unwrap();
            n % 2 == 0
        },
        &websites,
    )
    .await
    .unwrap();

    for (i, url) in websites.iter().enumerate() {
        assert_eq!(results[url], i % 2 == 0, "wrong result for {}", url);
    }
}

#[tokio::test]
async fn test_duplicate_items_collapse() {
    let websites = vec![
        "a.com".to_string(),
        "a.com".to_string(),
        "b.com".to_string(),
    ];

    let results = check_websites(|url: String| async move { url != "b.com" }, &websites)
        .await
        .unwrap();

    assert_eq!(results.len(), 2, "duplicate keys must collapse");
    assert_eq!(results["a.com"], true);
    assert_eq!(results["b.com"], false);
}

/// The engineering justification for the whole design: 100 items with a
/// 20ms-latency predicate must complete in roughly pool-rounds x 20ms, not
/// the sequential 2000ms. The 500ms bound is generous to absorb scheduler
/// noise on loaded CI machines.
#[tokio::test]
async fn test_concurrent_speedup() {
    let websites: Vec<String> = (0..100).map(|i| format!("site-{}.com", i)).collect();

    let checker = SiteChecker::with_config(CheckConfig::default().with_concurrency(100));
    let start = Instant::now();
    let results = checker
        .check_all(
            |_url| async {
                tokio::time::sleep(Duration::from_millis(20)).await;
                true
            },
            &websites,
        )
        .await
        .unwrap();
    let elapsed = start.elapsed();

    assert_eq!(results.len(), 100);
    assert!(
        elapsed < Duration::from_millis(500),
        "100 checks at 20ms each took {:?}; expected near-constant wall time",
        elapsed
    );
}

#[tokio::test]
async fn test_bounded_pool_still_completes() {
    // Far fewer workers than items: completeness must not depend on the
    // one-task-per-item layout.
    let websites: Vec<String> = (0..40).map(|i| format!("site-{}.com", i)).collect();

    let checker = SiteChecker::with_config(CheckConfig::default().with_concurrency(3));
    let results = checker
        .check_all(
            |_url| async {
                tokio::time::sleep(Duration::from_millis(1)).await;
                true
            },
            &websites,
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 40);
}

#[tokio::test]
async fn test_panicking_predicate_aborts_batch() {
    let websites = vec![
        "fine.com".to_string(),
        "cursed.com".to_string(),
        "also-fine.com".to_string(),
    ];

    let err = check_websites(
        |url: String| async move {
            if url == "cursed.com" {
                panic!("predicate exploded");
            }
            true
        },
        &websites,
    )
    .await
    .unwrap_err();

    assert!(
        err.is_predicate_failure(),
        "a panicking predicate must fail the batch as a unit, got: {}",
        err
    );
}

#[tokio::test]
async fn test_hand_built_zero_concurrency_rejected() {
    // The builder clamps, so only a hand-constructed config can be invalid.
    let checker = SiteChecker::with_config(CheckConfig { concurrency: 0 });
    let err = checker
        .check_all(mock_website_checker, &["a.com".to_string()])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        site_check_lib::CheckError::InvalidConfig { .. }
    ));
}

#[test]
fn test_config_accessors() {
    let mut checker = SiteChecker::new();
    assert_eq!(checker.config().concurrency, 32);

    checker.set_config(CheckConfig::default().with_concurrency(8));
    assert_eq!(checker.config().concurrency, 8);
}
