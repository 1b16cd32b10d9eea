use jobcompare::comparison::report::OfferCardView;
use jobcompare::comparison::{Comparison, ComparisonReport, Point, SharedState};
use jobcompare::sharing::{Field, ResolvedState, StateDocument, StateSource};
use serde::Serialize;

const LINK_REJECTED_NOTICE: &str = "Shared link could not be read; showing the saved comparison.";

/// Payload printed by `results --json`.
#[derive(Serialize)]
pub(crate) struct ResultsResponse<'a> {
    pub(crate) source: StateSource,
    pub(crate) link_rejected: bool,
    pub(crate) comparison: &'a Comparison,
    pub(crate) report: &'a ComparisonReport,
}

pub(crate) fn render_report(
    resolved: &ResolvedState,
    report: &ComparisonReport,
    with_radar: bool,
) -> String {
    let mut lines = Vec::new();
    if resolved.link_rejected {
        lines.push(LINK_REJECTED_NOTICE.to_string());
    }

    let source = match resolved.source {
        StateSource::SharedLink => "shared link",
        StateSource::LocalStore => "saved comparison",
    };
    lines.push(format!(
        "{} ({})",
        report.winner.title, report.winner.score_text
    ));
    lines.push(report.winner.reason.clone());
    lines.push(format!("Source: {source}"));

    for card in &report.offers {
        lines.push(String::new());
        lines.extend(offer_lines(card));
    }

    if with_radar {
        lines.push(String::new());
        lines.push(format!("Radar (radius {})", report.radar.radius));
        lines.push(format!("  A: {}", points(&report.radar.offer_a)));
        lines.push(format!("  B: {}", points(&report.radar.offer_b)));
    }

    lines.join("\n")
}

fn offer_lines(card: &OfferCardView) -> Vec<String> {
    let mut lines = vec![card.label.clone()];
    if !card.location.trim().is_empty() {
        lines.push(format!("  {}", card.location.trim()));
    }
    lines.push(format!(
        "  Overall {:>6.1}  {}",
        card.aggregate, card.aggregate_width
    ));
    lines.push(format!("  {}  |  {}", card.comp_text, card.flex_text));
    lines.extend(
        card.bars
            .iter()
            .map(|bar| format!("  {:<9}{:>6.1}  {}", bar.label, bar.score, bar.width)),
    );
    lines
}

fn points(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("({:.1}, {:.1})", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Every recognized key with the value that would be exported for it.
pub(crate) fn render_fields(state: &SharedState) -> String {
    let document = StateDocument::from_state(state);
    Field::all()
        .map(|field| {
            let key = field.key();
            match document.get(&key) {
                Some(value) => format!("{key} = {value}"),
                None => format!("{key} ="),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
