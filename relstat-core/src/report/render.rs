use crate::report::Report;
use crate::report::rank::RankedEntity;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// Plain text report. `color` bolds the section headings.
pub fn render_text(report: &Report, color: bool) -> String {
    let mut out = String::new();

    let heading = |text: String| {
        if color {
            text.bold().to_string()
        } else {
            text
        }
    };

    let lines = report.lines;
    let _ = writeln!(
        out,
        "read {} lines: {} checks, {} malformed, {} skipped, {} entities",
        lines.total(),
        lines.processed,
        lines.malformed,
        lines.skipped,
        report.entities
    );

    let _ = writeln!(
        out,
        "\n{}",
        heading(format!("{} slowest checks:", report.slowest.len()))
    );
    for c in &report.slowest {
        let _ = writeln!(
            out,
            "[{}:{}:{}] {} -> {} : {}ns",
            c.function, c.part, c.check, c.inner, c.outer, c.duration_ns
        );
    }

    for r in &report.rankings {
        let _ = writeln!(
            out,
            "\n{}",
            heading(format!("{} most {}:", report.n, r.title))
        );
        render_entities(&mut out, &r.most, r.unit);

        if let Some(fewest) = &r.fewest {
            let _ = writeln!(
                out,
                "\n{}",
                heading(format!("{} fewest {}:", report.n, r.title))
            );
            render_entities(&mut out, fewest, r.unit);
        }
    }

    out
}

fn render_entities(out: &mut String, entities: &[RankedEntity], unit: &str) {
    for e in entities {
        let _ = writeln!(out, "{:<50} : {:>20}{}", e.key, e.value, unit);
    }
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn render_yaml(report: &Report) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(report)
}
