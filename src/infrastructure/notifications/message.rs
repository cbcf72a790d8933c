use serde_json::{json, Value};

use crate::domain::entities::delta::{DiffReport, MetricDelta};
use crate::domain::value_objects::metric;

/// `"+30 sedan förra uppdateringen, +50 idag"`, empty when nothing moved
/// or the reading is still pending.
fn fragments(delta: &MetricDelta) -> String {
    if delta.pending {
        return String::new();
    }
    let mut parts = Vec::with_capacity(2);
    if delta.updated != 0 {
        parts.push(format!("{:+} sedan förra uppdateringen", delta.updated));
    }
    if delta.today != 0 {
        parts.push(format!("{:+} idag", delta.today));
    }
    parts.join(", ")
}

fn value_with_fragments(delta: &MetricDelta) -> String {
    let fragments = fragments(delta);
    if fragments.is_empty() {
        delta.value.to_string()
    } else {
        format!("{} ({fragments})", delta.value)
    }
}

/// One line per metric, e.g. `Avlidna: 10 (+2 idag)`.
#[must_use]
pub fn render_text(report: &DiffReport) -> String {
    report
        .deltas
        .iter()
        .map(|d| format!("{}: {}", metric::label(&d.metric), value_with_fragments(d)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Slack attachment fields, one short field per metric.
#[must_use]
pub fn render_fields(report: &DiffReport) -> Vec<Value> {
    report
        .deltas
        .iter()
        .map(|d| {
            json!({
                "title": metric::label(&d.metric),
                "value": value_with_fragments(d),
                "short": true
            })
        })
        .collect()
}
