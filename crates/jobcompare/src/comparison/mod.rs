//! Offer scoring and the views built on top of it.

pub mod domain;
pub mod radar;
pub mod report;
pub mod scoring;

#[cfg(test)]
mod tests;

pub use domain::{
    Dimension, OfferSide, RawOffer, Settings, SharedState, Weights, DEFAULT_COL_INDEX,
    DEFAULT_TIME_VALUE_PER_HOUR,
};
pub use radar::{AxisLabel, Point, RadarGeometry, TextAlign};
pub use report::ComparisonReport;
pub use scoring::{
    compare_offers, compare_state, compute_offer_score, ClampedInputs, Comparison,
    ComparisonResult, DimensionDelta, OfferScore, ScoringEngine,
};
