use super::common::*;
use crate::comparison::domain::{Dimension, RawOffer, Settings};
use crate::comparison::scoring::{compute_offer_score, ScoringEngine};

#[test]
fn demo_offer_a_matches_the_formulas() {
    let score = compute_offer_score(&offer_a(), &demo_settings());

    assert_close(score.gross_comp, 150_000.0, "gross comp");
    assert_close(score.comp_adjusted_for_coli, 136_363.636_363_636_35, "coli adjusted");
    assert_close(score.commute_annual_cost, 4_830.0, "commute cost");
    assert_close(score.comp_net_of_commute, 131_533.636_363_636_35, "net comp");
    assert_close(score.comp_score, 65.766_818_181_818_18, "comp score");
    assert_close(score.flex_score, 71.166_666_666_666_66, "flex score");
    assert_close(score.growth_score, 100.0, "growth score");
    assert_close(score.culture_score, 75.0, "culture score");
    assert_close(score.benefit_score, 67.5, "benefit score");
}

#[test]
fn demo_offer_b_matches_the_formulas() {
    let score = compute_offer_score(&offer_b(), &demo_settings());

    assert_close(score.gross_comp, 148_000.0, "gross comp");
    assert_close(score.comp_adjusted_for_coli, 151_020.408_163_265_3, "coli adjusted");
    assert_close(score.commute_annual_cost, 1_104.0, "commute cost");
    assert_close(score.comp_net_of_commute, 149_916.408_163_265_3, "net comp");
    assert_close(score.comp_score, 74.958_204_081_632_66, "comp score");
    assert_close(score.flex_score, 100.0, "flex score");
    assert_close(score.growth_score, 75.0, "growth score");
    assert_close(score.culture_score, 100.0, "culture score");
    assert_close(score.benefit_score, 90.0, "benefit score");
}

#[test]
fn full_remote_removes_commute_cost() {
    for commute_minutes in [0.0, 15.0, 90.0, 600.0, 1e9] {
        let offer = RawOffer {
            salary: 100_000.0,
            commute_minutes,
            remote_days_per_week: 5.0,
            ..RawOffer::default()
        };
        let score = compute_offer_score(&offer, &demo_settings());
        assert_eq!(score.commute_annual_cost, 0.0, "commute {commute_minutes}");
        assert_close(score.comp_net_of_commute, 100_000.0, "net comp");
    }
}

#[test]
fn remote_days_above_five_behave_like_five() {
    let offer = RawOffer {
        salary: 80_000.0,
        commute_minutes: 45.0,
        remote_days_per_week: 9.0,
        ..RawOffer::default()
    };
    let score = compute_offer_score(&offer, &demo_settings());
    assert_eq!(score.inputs.remote_days_per_week, 5.0);
    assert_eq!(score.commute_annual_cost, 0.0);
}

#[test]
fn higher_cost_of_living_never_raises_adjusted_comp() {
    let settings = demo_settings();
    let mut previous = f64::INFINITY;
    for col_index in 60..=200 {
        let offer = RawOffer {
            salary: 120_000.0,
            bonus: 5_000.0,
            equity: 7_500.0,
            col_index: f64::from(col_index),
            ..RawOffer::default()
        };
        let adjusted = compute_offer_score(&offer, &settings).comp_adjusted_for_coli;
        assert!(adjusted <= previous, "col index {col_index}");
        previous = adjusted;
    }
}

#[test]
fn sixty_minute_commute_leaves_thirty_points() {
    let offer = RawOffer {
        commute_minutes: 60.0,
        ..RawOffer::default()
    };
    let score = compute_offer_score(&offer, &Settings::default());
    assert_close(score.flex_score, 30.0, "flex score");
}

#[test]
fn net_comp_never_goes_negative() {
    let offer = RawOffer {
        salary: 10_000.0,
        commute_minutes: 120.0,
        ..RawOffer::default()
    };
    let settings = Settings {
        time_value_per_hour: 200.0,
        ..Settings::default()
    };
    let score = compute_offer_score(&offer, &settings);
    assert!(score.commute_annual_cost > score.comp_adjusted_for_coli);
    assert_eq!(score.comp_net_of_commute, 0.0);
    assert_eq!(score.comp_score, 0.0);
}

#[test]
fn dimension_scores_stay_in_range_for_hostile_input() {
    let settings_grid = [
        Settings::default(),
        Settings {
            time_value_per_hour: -1e9,
            ..Settings::default()
        },
        Settings {
            time_value_per_hour: f64::NAN,
            ..Settings::default()
        },
        Settings {
            time_value_per_hour: f64::INFINITY,
            ..Settings::default()
        },
    ];

    for settings in settings_grid {
        for offer in hostile_offers() {
            let score = compute_offer_score(&offer, &settings);
            for (dimension, value) in score.dimension_scores() {
                assert!(
                    (0.0..=100.0).contains(&value),
                    "{dimension:?} = {value} for {offer:?}"
                );
            }
        }
    }
}

#[test]
fn engine_scores_with_its_own_settings() {
    let engine = ScoringEngine::new(settings_with_weights(1.0, 0.0, 0.0, 0.0, 0.0));
    let score = engine.score(&offer_a());
    assert_eq!(score, compute_offer_score(&offer_a(), engine.settings()));
    assert_eq!(score.dimension(Dimension::Growth), score.growth_score);
}
