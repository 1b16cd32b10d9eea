use super::super::domain::{RawOffer, Settings, DEFAULT_COL_INDEX};
use super::{ClampedInputs, OfferScore};

const MIN_COL_INDEX: f64 = 60.0;
const MAX_COL_INDEX: f64 = 200.0;
const WORK_DAYS_PER_WEEK: f64 = 5.0;
const WORK_WEEKS_PER_YEAR: f64 = 46.0;
const MAX_VACATION_DAYS: f64 = 40.0;
const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;

/// Net compensation that earns a full compensation score.
const COMP_CEILING: f64 = 200_000.0;
/// A commute of this many minutes costs `COMMUTE_PENALTY` points.
const COMMUTE_REFERENCE_MINUTES: f64 = 60.0;
const COMMUTE_PENALTY: f64 = 70.0;
const REMOTE_BONUS: f64 = 30.0;
const HEALTH_POINTS: f64 = 70.0;
const VACATION_POINTS: f64 = 30.0;
const VACATION_REFERENCE_DAYS: f64 = 30.0;

/// `min(max(value, min), max)`, with NaN pinned to `min`.
pub(crate) fn bounded(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.max(min).min(max)
    }
}

pub(crate) fn clamp_inputs(offer: &RawOffer) -> ClampedInputs {
    let col_index = if offer.col_index.is_finite() && offer.col_index != 0.0 {
        offer.col_index
    } else {
        DEFAULT_COL_INDEX
    };

    ClampedInputs {
        col_index: bounded(col_index, MIN_COL_INDEX, MAX_COL_INDEX),
        commute_minutes: offer.commute_minutes,
        remote_days_per_week: bounded(offer.remote_days_per_week, 0.0, WORK_DAYS_PER_WEEK),
        vacation_days: bounded(offer.vacation_days, 0.0, MAX_VACATION_DAYS),
        health_rating: bounded(offer.health_rating, MIN_RATING, MAX_RATING),
        growth_rating: bounded(offer.growth_rating, MIN_RATING, MAX_RATING),
        culture_rating: bounded(offer.culture_rating, MIN_RATING, MAX_RATING),
    }
}

pub(crate) fn score_offer(offer: &RawOffer, settings: &Settings) -> OfferScore {
    let inputs = clamp_inputs(offer);

    let gross_comp = offer.salary + offer.bonus + offer.equity;
    let comp_adjusted_for_coli = gross_comp * (100.0 / inputs.col_index);

    let onsite_days = WORK_DAYS_PER_WEEK - inputs.remote_days_per_week;
    let annual_commute_minutes =
        inputs.commute_minutes * 2.0 * onsite_days * WORK_WEEKS_PER_YEAR;
    let commute_annual_cost = (annual_commute_minutes / 60.0) * settings.time_value_per_hour;
    let comp_net_of_commute = f64::max(0.0, comp_adjusted_for_coli - commute_annual_cost);

    let comp_score = bounded((comp_net_of_commute / COMP_CEILING) * 100.0, 0.0, 100.0);

    let commute_score = bounded(
        100.0 - (inputs.commute_minutes / COMMUTE_REFERENCE_MINUTES) * COMMUTE_PENALTY,
        0.0,
        100.0,
    );
    let remote_score = (inputs.remote_days_per_week / WORK_DAYS_PER_WEEK) * REMOTE_BONUS;
    let flex_score = bounded(commute_score + remote_score, 0.0, 100.0);

    let growth_score = rating_percent(inputs.growth_rating);
    let culture_score = rating_percent(inputs.culture_rating);

    let health_score = (inputs.health_rating - 1.0) / 4.0 * HEALTH_POINTS;
    let vacation_score = bounded(
        inputs.vacation_days / VACATION_REFERENCE_DAYS * VACATION_POINTS,
        0.0,
        VACATION_POINTS,
    );
    let benefit_score = bounded(health_score + vacation_score, 0.0, 100.0);

    OfferScore {
        inputs,
        gross_comp,
        comp_adjusted_for_coli,
        commute_annual_cost,
        comp_net_of_commute,
        comp_score,
        flex_score,
        growth_score,
        culture_score,
        benefit_score,
    }
}

/// Linear rescale of a clamped 1-5 rating onto 0-100.
fn rating_percent(rating: f64) -> f64 {
    (rating - 1.0) / 4.0 * 100.0
}
