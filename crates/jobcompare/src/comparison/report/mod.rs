pub mod views;

pub use views::{
    bar_width, format_money, round_half_up, ComparisonReport, DimensionBarView, OfferCardView,
    RadarView, WinnerView,
};

use super::domain::{OfferSide, SharedState};
use super::radar::RadarGeometry;
use super::scoring::Comparison;

/// Distance between the outer ring and the axis labels.
pub const RADAR_LABEL_OFFSET: f64 = 10.0;

impl ComparisonReport {
    /// Presentation-ready summary of `comparison`, which must have been computed from `state`.
    pub fn build(state: &SharedState, comparison: &Comparison, geometry: RadarGeometry) -> Self {
        let offers = OfferSide::BOTH
            .iter()
            .map(|&side| offer_card(state, comparison, side))
            .collect();

        let result = &comparison.result;
        let winner_title = state.offer(result.winner).title.trim();
        let winner_label = if winner_title.is_empty() {
            result.winner.label()
        } else {
            winner_title
        };

        let winner = WinnerView {
            side: result.winner,
            title: format!("{winner_label} looks better"),
            score_text: format!("{:.0}/100", round_half_up(result.winning_aggregate())),
            reason: result.reason(),
        };

        let radar = RadarView {
            radius: geometry.radius(),
            rings: geometry.grid_rings(),
            spokes: geometry.spokes(),
            labels: geometry.axis_labels(RADAR_LABEL_OFFSET),
            offer_a: geometry.polygon(&comparison.offer_a),
            offer_b: geometry.polygon(&comparison.offer_b),
        };

        Self {
            offers,
            winner,
            dominant: result.dominant,
            radar,
        }
    }

    pub fn offer(&self, side: OfferSide) -> &OfferCardView {
        match side {
            OfferSide::A => &self.offers[0],
            OfferSide::B => &self.offers[1],
        }
    }
}

fn offer_card(state: &SharedState, comparison: &Comparison, side: OfferSide) -> OfferCardView {
    let offer = state.offer(side);
    let score = comparison.score(side);
    let aggregate = comparison.result.aggregate(side);

    let title = offer.title.trim();
    let label = if title.is_empty() {
        side.label().to_string()
    } else {
        format!("{}: {}", side.letter(), title)
    };

    let bars = score
        .dimension_scores()
        .into_iter()
        .map(|(dimension, value)| DimensionBarView {
            dimension,
            label: dimension.axis_label(),
            score: value,
            width: bar_width(value),
        })
        .collect();

    OfferCardView {
        side,
        label,
        location: offer.location.clone(),
        aggregate,
        aggregate_width: bar_width(aggregate),
        comp_text: format!("{} adj.", format_money(score.comp_net_of_commute)),
        flex_text: format!(
            "{} remote \u{2022} {}m",
            score.inputs.remote_days_per_week, score.inputs.commute_minutes
        ),
        bars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::{OfferSide, SharedState};
    use crate::comparison::scoring::compare_state;

    #[test]
    fn untitled_offers_fall_back_to_generic_labels() {
        let state = SharedState::default();
        let comparison = compare_state(&state);
        let report = ComparisonReport::build(&state, &comparison, RadarGeometry::new(100.0));

        assert_eq!(report.offer(OfferSide::A).label, "Offer A");
        assert_eq!(report.offer(OfferSide::B).label, "Offer B");
        assert_eq!(report.winner.side, OfferSide::A);
        assert_eq!(report.winner.title, "Offer A looks better");
        assert_eq!(report.winner.score_text, "0/100");
        assert_eq!(
            report.winner.reason,
            "Offer B leads on compensation. Tweak weights if your priorities differ."
        );
    }

    #[test]
    fn titled_offers_show_letter_and_title() {
        let state = SharedState::demo();
        let comparison = compare_state(&state);
        let report = ComparisonReport::build(&state, &comparison, RadarGeometry::new(120.0));

        let card = report.offer(OfferSide::A);
        assert_eq!(card.label, "A: Frontend Engineer @ Bloomly");
        assert_eq!(card.flex_text, "2 remote \u{2022} 35m");
        assert_eq!(card.bars.len(), 5);
        assert_eq!(card.bars[0].label, "Comp");
        assert_eq!(report.radar.offer_b.len(), 5);
        assert_eq!(report.radar.rings.len(), 4);
        assert_eq!(report.radar.spokes, RadarGeometry::new(120.0).spokes());
    }
}
