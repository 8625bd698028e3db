//! Demo-mode flow: mock fixture through classification, stats, and batch
//! letter generation, exactly what a keyless scan produces.

use patrol_common::{
    classify_results, generate_batch_requests, parse_whitelist, summary_statistics,
    suspicious_results, ResultStatus,
};
use serpapi_client::mock_results;

#[test]
fn keyless_scan_over_the_fixture() {
    let hits = mock_results();
    let whitelist = parse_whitelist("twitter.com, pixiv.net");

    let results = classify_results(&hits, &whitelist);
    assert_eq!(results.len(), 4);

    // twitter.com and pixiv.net hits are safe, the other two are not.
    let statuses: Vec<ResultStatus> = results.iter().map(|r| r.status).collect();
    assert_eq!(
        statuses,
        vec![
            ResultStatus::Suspicious,
            ResultStatus::Safe,
            ResultStatus::Suspicious,
            ResultStatus::Safe,
        ]
    );

    let stats = summary_statistics(&results);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.safe, 2);
    assert_eq!(stats.suspicious, 2);

    let suspicious = suspicious_results(&results);
    assert_eq!(suspicious.len(), 2);
    assert!(suspicious.iter().all(|r| r.status == ResultStatus::Suspicious));

    let letters = generate_batch_requests(&suspicious, "https://pixiv.net/artworks/1");
    assert_eq!(letters.len(), 2);
    let letter = &letters["https://suspicious-site.net/gallery/img456"];
    assert!(letter.contains("https://suspicious-site.net/gallery/img456"));
    assert!(letter.contains("https://pixiv.net/artworks/1"));
    assert!(letter.contains("24時間以内"));
}

#[test]
fn fixture_survives_reclassification_with_empty_whitelist() {
    let results = classify_results(&mock_results(), &[]);
    let stats = summary_statistics(&results);
    assert_eq!(stats.total, 4);
    assert_eq!(stats.suspicious, 4);
    assert_eq!(stats.safe, 0);
}
