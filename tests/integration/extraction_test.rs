#![allow(clippy::expect_used)]

use std::collections::BTreeMap;

use coronabot::application::config::{HtmlSourceConfig, JsonSourceConfig};
use coronabot::domain::ports::extractor::SnapshotExtractor;
use coronabot::infrastructure::sources::html_extractor::HtmlExtractor;
use coronabot::infrastructure::sources::json_extractor::JsonExtractor;

use crate::support::load_fixture;

fn html_patterns() -> HtmlSourceConfig {
    let patterns = [
        ("infected", "Bekräftat smittade"),
        ("deaths", "Avlidna"),
        ("icu", "Intensivvårdade"),
        ("stockholm", "Varav i Stockholm"),
    ]
    .into_iter()
    .map(|(metric, heading)| {
        (
            metric.to_string(),
            format!(r#"{heading}</th><td class="count">([^<]+)<"#),
        )
    })
    .collect::<BTreeMap<_, _>>();
    HtmlSourceConfig { patterns }
}

#[test]
fn published_json_shape_is_understood() {
    let snapshot = JsonExtractor::new(&JsonSourceConfig::default())
        .extract(&load_fixture("source.json"))
        .expect("extract");
    assert_eq!(snapshot.get("infected"), 150);
    assert_eq!(snapshot.get("stockholm"), 42);
    assert_eq!(snapshot.len(), 2);
}

#[test]
fn published_page_is_understood() {
    let extractor = HtmlExtractor::new(&html_patterns()).expect("compile patterns");
    let snapshot = extractor
        .extract(&load_fixture("source.html"))
        .expect("extract");

    assert_eq!(snapshot.get("infected"), 1203);
    assert_eq!(snapshot.get("deaths"), 58);
    assert_eq!(snapshot.get("icu"), 197);
    assert_eq!(snapshot.get("stockholm"), 612);
}

#[test]
fn page_layout_change_is_detected() {
    let extractor = HtmlExtractor::new(&html_patterns()).expect("compile patterns");
    let page = load_fixture("source.html").replace("Avlidna", "Döda");
    let err = extractor.extract(&page).expect_err("deaths heading gone");
    assert!(err.to_string().contains("deaths"));
}
