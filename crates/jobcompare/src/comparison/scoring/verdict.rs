use super::super::domain::{Dimension, OfferSide, Settings, Weights};
use super::OfferScore;
use serde::{Deserialize, Serialize};

const REASON_SUFFIX: &str = "Tweak weights if your priorities differ.";
/// Upper bound of every dimension score.
const MAX_SCORE: f64 = 100.0;

/// Signed gap between the two offers on one dimension (`A - B`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionDelta {
    pub dimension: Dimension,
    pub difference: f64,
}

impl DimensionDelta {
    pub fn magnitude(&self) -> f64 {
        self.difference.abs()
    }

    /// The offer credited with this dimension. Only a positive gap favors A;
    /// a level dimension is credited to B.
    pub fn leader(&self) -> OfferSide {
        if self.difference > 0.0 {
            OfferSide::A
        } else {
            OfferSide::B
        }
    }
}

/// Weighted verdict over two scored offers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub aggregate_a: f64,
    pub aggregate_b: f64,
    pub weight_sum: f64,
    pub winner: OfferSide,
    /// One entry per dimension, in evaluation order.
    pub deltas: Vec<DimensionDelta>,
    pub dominant: DimensionDelta,
}

impl ComparisonResult {
    pub fn aggregate(&self, side: OfferSide) -> f64 {
        match side {
            OfferSide::A => self.aggregate_a,
            OfferSide::B => self.aggregate_b,
        }
    }

    pub fn winning_aggregate(&self) -> f64 {
        self.aggregate(self.winner)
    }

    /// Explanation naming the dimension that separates the offers the most.
    pub fn reason(&self) -> String {
        format!(
            "{} leads on {}. {}",
            self.dominant.leader().label(),
            self.dominant.dimension.reason_label(),
            REASON_SUFFIX
        )
    }
}

/// Weights actually applied. A set that would overflow the weighted sum is
/// scaled down by its largest finite magnitude, keeping the ratios between
/// weights; non-finite weights count as zero.
pub(crate) fn effective_weights(weights: &Weights) -> Weights {
    let parts = [
        weights.comp,
        weights.commute,
        weights.growth,
        weights.culture,
        weights.benefits,
    ];
    let magnitude: f64 = parts.iter().map(|weight| weight.abs()).sum();
    if (magnitude * MAX_SCORE).is_finite() {
        return *weights;
    }
    let largest = parts
        .iter()
        .filter(|weight| weight.is_finite())
        .fold(0.0_f64, |largest, weight| largest.max(weight.abs()));
    if largest == 0.0 {
        return Weights::default();
    }
    let scale = |weight: f64| {
        if weight.is_finite() {
            weight / largest
        } else {
            0.0
        }
    };
    Weights {
        comp: scale(weights.comp),
        commute: scale(weights.commute),
        growth: scale(weights.growth),
        culture: scale(weights.culture),
        benefits: scale(weights.benefits),
    }
}

/// Sum of weights used as the divisor, floored at 1.
pub(crate) fn weight_divisor(weights: &Weights) -> f64 {
    f64::max(1.0, weights.sum())
}

pub(crate) fn aggregate(score: &OfferScore, weights: &Weights, weight_sum: f64) -> f64 {
    let total = (score.comp_score * weights.comp
        + score.flex_score * weights.commute
        + score.growth_score * weights.growth
        + score.culture_score * weights.culture
        + score.benefit_score * weights.benefits)
        / weight_sum;
    if total.is_finite() {
        total
    } else {
        0.0
    }
}

pub(crate) fn decide(a: &OfferScore, b: &OfferScore, settings: &Settings) -> ComparisonResult {
    let weights = &effective_weights(&settings.weights);
    let weight_sum = weight_divisor(weights);

    let aggregate_a = aggregate(a, weights, weight_sum);
    let aggregate_b = aggregate(b, weights, weight_sum);

    // Ties go to A.
    let winner = if aggregate_a >= aggregate_b {
        OfferSide::A
    } else {
        OfferSide::B
    };

    let deltas: Vec<DimensionDelta> = Dimension::ORDER
        .iter()
        .map(|&dimension| DimensionDelta {
            dimension,
            difference: a.dimension(dimension) - b.dimension(dimension),
        })
        .collect();

    let dominant = dominant_delta(&deltas);

    ComparisonResult {
        aggregate_a,
        aggregate_b,
        weight_sum,
        winner,
        deltas,
        dominant,
    }
}

/// Largest absolute difference; the earliest dimension wins ties.
fn dominant_delta(deltas: &[DimensionDelta]) -> DimensionDelta {
    let mut best = deltas[0];
    for delta in &deltas[1..] {
        if delta.magnitude() > best.magnitude() {
            best = *delta;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delta(dimension: Dimension, difference: f64) -> DimensionDelta {
        DimensionDelta {
            dimension,
            difference,
        }
    }

    #[test]
    fn dominant_prefers_earlier_dimension_on_equal_magnitude() {
        let deltas = vec![
            delta(Dimension::Comp, 1.0),
            delta(Dimension::Flex, -12.5),
            delta(Dimension::Growth, 12.5),
            delta(Dimension::Culture, 0.0),
            delta(Dimension::Benefits, -12.5),
        ];
        let dominant = dominant_delta(&deltas);
        assert_eq!(dominant.dimension, Dimension::Flex);
        assert_eq!(dominant.leader(), OfferSide::B);
    }

    #[test]
    fn weight_divisor_floors_at_one() {
        assert_eq!(weight_divisor(&Weights::default()), 1.0);
        let negative = Weights {
            comp: -10.0,
            commute: 2.0,
            ..Weights::default()
        };
        assert_eq!(weight_divisor(&negative), 1.0);
        let half = Weights {
            comp: 0.5,
            ..Weights::default()
        };
        assert_eq!(weight_divisor(&half), 1.0);
    }

    #[test]
    fn level_delta_is_credited_to_b() {
        assert_eq!(delta(Dimension::Culture, 0.0).leader(), OfferSide::B);
        assert_eq!(delta(Dimension::Culture, -0.0).leader(), OfferSide::B);
        assert_eq!(delta(Dimension::Culture, 1e-12).leader(), OfferSide::A);
    }

    #[test]
    fn overflowing_weights_keep_their_ratios() {
        let huge = Weights {
            comp: 1e308,
            commute: 5e307,
            growth: 1e308,
            culture: 0.0,
            benefits: 1e308,
        };
        let scaled = effective_weights(&huge);
        assert_eq!(scaled.comp, 1.0);
        assert!((scaled.commute - 0.5).abs() < 1e-12);
        assert_eq!(scaled.culture, 0.0);
        assert!(scaled.sum().is_finite());

        let opposed = Weights {
            comp: 1e308,
            commute: -1e308,
            ..Weights::default()
        };
        let scaled = effective_weights(&opposed);
        assert_eq!((scaled.comp, scaled.commute), (1.0, -1.0));

        let crowded = Weights {
            comp: 1e306,
            commute: 1e306,
            growth: 1e306,
            culture: 1e306,
            benefits: 1e306,
        };
        let scaled = effective_weights(&crowded);
        assert_eq!(scaled.sum(), 5.0);

        let modest = Weights {
            comp: 40.0,
            ..Weights::default()
        };
        assert_eq!(effective_weights(&modest), modest);
    }
}
