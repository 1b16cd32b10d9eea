use super::super::domain::{Dimension, OfferSide};
use super::super::radar::{AxisLabel, Point};
use super::super::scoring::DimensionDelta;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DimensionBarView {
    pub dimension: Dimension,
    pub label: &'static str,
    pub score: f64,
    pub width: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OfferCardView {
    pub side: OfferSide,
    pub label: String,
    pub location: String,
    pub aggregate: f64,
    pub aggregate_width: String,
    pub comp_text: String,
    pub flex_text: String,
    pub bars: Vec<DimensionBarView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WinnerView {
    pub side: OfferSide,
    pub title: String,
    pub score_text: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarView {
    pub radius: f64,
    pub rings: Vec<Vec<Point>>,
    /// Outer end of each axis line, drawn from the centre.
    pub spokes: Vec<Point>,
    pub labels: Vec<AxisLabel>,
    pub offer_a: Vec<Point>,
    pub offer_b: Vec<Point>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub offers: Vec<OfferCardView>,
    pub winner: WinnerView,
    pub dominant: DimensionDelta,
    pub radar: RadarView,
}

/// Whole-dollar amount with thousands separators, or an em dash when not a number.
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return "\u{2014}".to_string();
    }
    let rounded = round_half_up(amount);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${sign}{grouped}")
}

/// Rounds .5 towards positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Bar width for a percentage, clamped to `[0, 100]`.
pub fn bar_width(pct: f64) -> String {
    format!("{:.1}%", super::super::scoring::bounded(pct, 0.0, 100.0))
}
