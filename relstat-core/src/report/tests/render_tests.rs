use super::analysis;
use crate::identity::DEFAULT_BASE_URL;
use crate::report::{Metric, Report, render_json, render_text, render_yaml};
use pretty_assertions::assert_eq;

#[test]
fn build_collects_slowest_and_all_metrics() {
    // Act
    let report = Report::build(&analysis(2), 1, DEFAULT_BASE_URL);

    // Assert
    let durations: Vec<_> = report.slowest.iter().map(|c| c.duration_ns).collect();
    assert_eq!(durations, vec![200, 50]);
    assert_eq!(report.slowest[0].inner, "https://www.openstreetmap.org/relation/3");
    assert_eq!(report.slowest[0].outer, "https://www.openstreetmap.org/way/1");
    assert_eq!(report.rankings.len(), Metric::ALL.len());
    assert_eq!(report.entities, 4);
    assert!(report.rankings.iter().all(|r| r.most.len() == 1));
}

#[test]
fn text_report_has_original_line_layout() {
    let report = Report::build(&analysis(2), 2, DEFAULT_BASE_URL);

    let text = render_text(&report, false);

    assert!(text.starts_with("read 4 lines: 3 checks, 1 malformed, 0 skipped, 4 entities\n"));
    assert!(text.contains("\n2 slowest checks:\n"));
    assert!(text.contains(
        "[relations:contains:full] https://www.openstreetmap.org/relation/3 -> https://www.openstreetmap.org/way/1 : 200ns\n"
    ));
    assert!(text.contains("\n2 most time against:\n"));
    assert!(text.contains(&format!(
        "{:<50} : {:>20}ns\n",
        "https://www.openstreetmap.org/way/1", 250
    )));
    assert!(text.contains("\n2 fewest negative results total:\n"));
    assert!(!text.contains("fewest checks against"));
}

#[test]
fn slowest_heading_counts_the_kept_checks() {
    // Arrange
    let report = Report::build(&analysis(2), 20, DEFAULT_BASE_URL);

    // Act
    let text = render_text(&report, false);

    // Assert
    assert!(text.contains("\n2 slowest checks:\n"));
    assert!(text.contains("\n20 most checks against:\n"));
}

#[test]
fn json_and_yaml_carry_the_same_report() {
    let report = Report::build(&analysis(2), 3, DEFAULT_BASE_URL);

    let json: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
    let yaml = render_yaml(&report).unwrap();

    assert_eq!(json["lines"]["processed"], 3);
    assert_eq!(json["rankings"][0]["metric"], "outer_count");
    assert!(json["rankings"][0].get("fewest").is_none());
    assert_eq!(json["rankings"][2]["fewest"][0]["value"], 0);
    assert!(yaml.contains("metric: outer_count"));
}
