use crate::comparison::domain::{RawOffer, Settings, SharedState, Weights};

pub(super) const TOLERANCE: f64 = 1e-6;

pub(super) fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= TOLERANCE,
        "{what}: expected {expected}, got {actual}"
    );
}

pub(super) fn offer_a() -> RawOffer {
    SharedState::demo().offer_a
}

pub(super) fn offer_b() -> RawOffer {
    SharedState::demo().offer_b
}

pub(super) fn demo_settings() -> Settings {
    SharedState::demo().settings
}

pub(super) fn settings_with_weights(
    comp: f64,
    commute: f64,
    growth: f64,
    culture: f64,
    benefits: f64,
) -> Settings {
    Settings {
        time_value_per_hour: 30.0,
        weights: Weights {
            comp,
            commute,
            growth,
            culture,
            benefits,
        },
    }
}

/// Offers far outside every documented range.
pub(super) fn hostile_offers() -> Vec<RawOffer> {
    let extremes = [
        -1e12,
        -5.0,
        -0.0,
        0.0,
        0.5,
        3.0,
        41.0,
        250.0,
        9_999.0,
        1e12,
        f64::MAX,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
    ];

    let mut offers = Vec::new();
    for (index, &value) in extremes.iter().enumerate() {
        let other = extremes[(index * 7 + 3) % extremes.len()];
        offers.push(RawOffer {
            title: format!("extreme-{index}"),
            location: String::new(),
            salary: value,
            bonus: other,
            equity: value,
            col_index: other,
            commute_minutes: value,
            remote_days_per_week: other,
            vacation_days: value,
            health_rating: other,
            growth_rating: value,
            culture_rating: other,
        });
    }
    offers
}
