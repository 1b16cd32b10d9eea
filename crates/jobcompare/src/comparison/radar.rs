//! Polar projection of the five dimension scores.
//!
//! Produces plain points centred on the origin with y growing downwards; callers
//! translate and draw them however they like.

use super::domain::Dimension;
use super::scoring::{bounded, OfferScore};
use serde::Serialize;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Fractions of the radius at which background rings are drawn.
pub const GRID_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Horizontal distance from the centre, as a cosine, beyond which a label is
/// aligned away from the chart instead of centred.
const LABEL_ALIGN_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisLabel {
    pub dimension: Dimension,
    pub text: &'static str,
    pub anchor: Point,
    pub align: TextAlign,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    radius: f64,
}

impl RadarGeometry {
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.max(0.0),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angle of axis `index`; the first axis points straight up.
    pub fn axis_angle(index: usize) -> f64 {
        (index as f64 / Dimension::ORDER.len() as f64) * TAU - FRAC_PI_2
    }

    /// Vertices of an offer's polygon, one per dimension in evaluation order.
    pub fn polygon(&self, score: &OfferScore) -> Vec<Point> {
        Dimension::ORDER
            .iter()
            .enumerate()
            .map(|(index, &dimension)| {
                let pct = bounded(score.dimension(dimension), 0.0, 100.0) / 100.0;
                self.project(index, self.radius * pct)
            })
            .collect()
    }

    /// Background rings, innermost first.
    pub fn grid_rings(&self) -> Vec<Vec<Point>> {
        GRID_LEVELS
            .iter()
            .map(|level| {
                (0..Dimension::ORDER.len())
                    .map(|index| self.project(index, self.radius * level))
                    .collect()
            })
            .collect()
    }

    /// Outer end of each axis spoke.
    pub fn spokes(&self) -> Vec<Point> {
        (0..Dimension::ORDER.len())
            .map(|index| self.project(index, self.radius))
            .collect()
    }

    pub fn axis_labels(&self, offset: f64) -> Vec<AxisLabel> {
        Dimension::ORDER
            .iter()
            .enumerate()
            .map(|(index, &dimension)| {
                let cos = Self::axis_angle(index).cos();
                let align = if cos > LABEL_ALIGN_THRESHOLD {
                    TextAlign::Left
                } else if cos < -LABEL_ALIGN_THRESHOLD {
                    TextAlign::Right
                } else {
                    TextAlign::Center
                };
                AxisLabel {
                    dimension,
                    text: dimension.axis_label(),
                    anchor: self.project(index, self.radius + offset),
                    align,
                }
            })
            .collect()
    }

    fn project(&self, index: usize, distance: f64) -> Point {
        let angle = Self::axis_angle(index);
        Point {
            x: angle.cos() * distance,
            y: angle.sin() * distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::{RawOffer, Settings};
    use crate::comparison::scoring::compute_offer_score;

    const EPS: f64 = 1e-9;

    fn perfect_score() -> OfferScore {
        let offer = RawOffer {
            salary: 500_000.0,
            remote_days_per_week: 5.0,
            vacation_days: 30.0,
            health_rating: 5.0,
            growth_rating: 5.0,
            culture_rating: 5.0,
            ..RawOffer::default()
        };
        compute_offer_score(&offer, &Settings::default())
    }

    #[test]
    fn first_axis_points_up() {
        let geometry = RadarGeometry::new(100.0);
        let polygon = geometry.polygon(&perfect_score());
        assert_eq!(polygon.len(), 5);
        assert!(polygon[0].x.abs() < EPS);
        assert!((polygon[0].y + 100.0).abs() < EPS);
    }

    #[test]
    fn full_scores_reach_the_outer_ring() {
        let geometry = RadarGeometry::new(80.0);
        let polygon = geometry.polygon(&perfect_score());
        let outer = geometry.grid_rings().pop().expect("outer ring");
        for (vertex, ring) in polygon.iter().zip(outer.iter()) {
            assert!((vertex.x - ring.x).abs() < EPS);
            assert!((vertex.y - ring.y).abs() < EPS);
        }
    }

    #[test]
    fn zero_scores_collapse_to_centre() {
        let geometry = RadarGeometry::new(50.0);
        let score = compute_offer_score(
            &RawOffer {
                commute_minutes: 600.0,
                ..RawOffer::default()
            },
            &Settings::default(),
        );
        for point in geometry.polygon(&score) {
            assert!(point.x.abs() < EPS && point.y.abs() < EPS);
        }
    }

    #[test]
    fn spokes_end_on_the_outer_ring_inside_the_labels() {
        let geometry = RadarGeometry::new(100.0);
        let spokes = geometry.spokes();
        let outer = geometry.grid_rings().pop().expect("outer ring");
        let labels = geometry.axis_labels(10.0);

        assert_eq!(spokes.len(), 5);
        assert_eq!(spokes, outer);
        for (spoke, label) in spokes.iter().zip(labels.iter()) {
            let length = spoke.x.hypot(spoke.y);
            assert!((length - 100.0).abs() < EPS);
            assert!((label.anchor.x - spoke.x * 1.1).abs() < EPS);
            assert!((label.anchor.y - spoke.y * 1.1).abs() < EPS);
        }
    }

    #[test]
    fn labels_align_away_from_centre() {
        let labels = RadarGeometry::new(100.0).axis_labels(10.0);
        let aligns: Vec<TextAlign> = labels.iter().map(|label| label.align).collect();
        assert_eq!(
            aligns,
            vec![
                TextAlign::Center,
                TextAlign::Left,
                TextAlign::Left,
                TextAlign::Right,
                TextAlign::Right,
            ]
        );
        assert!((labels[0].anchor.y + 110.0).abs() < EPS);
        assert_eq!(labels[4].text, "Benefits");
    }
}
