mod rules;
mod verdict;

pub use verdict::{ComparisonResult, DimensionDelta};

pub(crate) use rules::bounded;

use super::domain::{Dimension, OfferSide, RawOffer, Settings, SharedState};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Raw inputs after range clamping: the values the scores were computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampedInputs {
    pub col_index: f64,
    pub commute_minutes: f64,
    pub remote_days_per_week: f64,
    pub vacation_days: f64,
    pub health_rating: f64,
    pub growth_rating: f64,
    pub culture_rating: f64,
}

/// Normalized view of one offer. Rebuilt on every comparison, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OfferScore {
    pub inputs: ClampedInputs,
    pub gross_comp: f64,
    pub comp_adjusted_for_coli: f64,
    pub commute_annual_cost: f64,
    pub comp_net_of_commute: f64,
    pub comp_score: f64,
    pub flex_score: f64,
    pub growth_score: f64,
    pub culture_score: f64,
    pub benefit_score: f64,
}

impl OfferScore {
    pub fn dimension(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Comp => self.comp_score,
            Dimension::Flex => self.flex_score,
            Dimension::Growth => self.growth_score,
            Dimension::Culture => self.culture_score,
            Dimension::Benefits => self.benefit_score,
        }
    }

    /// Dimension scores in evaluation order.
    pub fn dimension_scores(&self) -> [(Dimension, f64); 5] {
        Dimension::ORDER.map(|dimension| (dimension, self.dimension(dimension)))
    }
}

/// Scores one offer. Never fails: out-of-range inputs are clamped and every
/// dimension score lands in `[0, 100]`.
pub fn compute_offer_score(offer: &RawOffer, settings: &Settings) -> OfferScore {
    rules::score_offer(offer, settings)
}

/// Weighs two scored offers against each other. Ties on the aggregate go to A.
pub fn compare_offers(
    score_a: &OfferScore,
    score_b: &OfferScore,
    settings: &Settings,
) -> ComparisonResult {
    verdict::decide(score_a, score_b, settings)
}

/// Both offer scores together with the verdict over them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub offer_a: OfferScore,
    pub offer_b: OfferScore,
    pub result: ComparisonResult,
}

impl Comparison {
    pub fn score(&self, side: OfferSide) -> &OfferScore {
        match side {
            OfferSide::A => &self.offer_a,
            OfferSide::B => &self.offer_b,
        }
    }
}

/// Stateless scorer bound to one set of settings.
pub struct ScoringEngine {
    settings: Settings,
}

impl ScoringEngine {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn score(&self, offer: &RawOffer) -> OfferScore {
        let score = compute_offer_score(offer, &self.settings);
        debug!(
            title = %offer.title,
            comp = score.comp_score,
            flex = score.flex_score,
            growth = score.growth_score,
            culture = score.culture_score,
            benefits = score.benefit_score,
            "scored offer"
        );
        score
    }

    /// Scores both offers of `state` and compares them. The engine's settings
    /// are used; `state.settings` is ignored.
    pub fn compare(&self, state: &SharedState) -> Comparison {
        let offer_a = self.score(&state.offer_a);
        let offer_b = self.score(&state.offer_b);
        let result = compare_offers(&offer_a, &offer_b, &self.settings);

        debug!(
            aggregate_a = result.aggregate_a,
            aggregate_b = result.aggregate_b,
            winner = result.winner.letter(),
            dominant = result.dominant.dimension.reason_label(),
            "compared offers"
        );

        Comparison {
            offer_a,
            offer_b,
            result,
        }
    }
}

/// Convenience for the common case of comparing a state with its own settings.
pub fn compare_state(state: &SharedState) -> Comparison {
    ScoringEngine::new(state.settings).compare(state)
}
