use serde::{Deserialize, Serialize};

/// Cost-of-living index treated as the baseline (no adjustment).
pub const DEFAULT_COL_INDEX: f64 = 100.0;
/// Hourly value used to monetize commute time when none is supplied.
pub const DEFAULT_TIME_VALUE_PER_HOUR: f64 = 30.0;

/// Which of the two offers a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfferSide {
    A,
    B,
}

impl OfferSide {
    pub const BOTH: [OfferSide; 2] = [OfferSide::A, OfferSide::B];

    /// Generic label used when an offer has no title.
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Offer A",
            Self::B => "Offer B",
        }
    }

    pub const fn letter(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
        }
    }

    /// Prefix of this offer's keys in the flat state document.
    pub const fn field_prefix(self) -> &'static str {
        match self {
            Self::A => "a_",
            Self::B => "b_",
        }
    }
}

/// Scored dimensions, declared in evaluation order.
///
/// The order is load-bearing: it breaks ties when picking the dominant dimension
/// and fixes the axis order of the radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Comp,
    Flex,
    Growth,
    Culture,
    Benefits,
}

impl Dimension {
    pub const ORDER: [Dimension; 5] = [
        Dimension::Comp,
        Dimension::Flex,
        Dimension::Growth,
        Dimension::Culture,
        Dimension::Benefits,
    ];

    /// Wording used in the "why" explanation.
    pub const fn reason_label(self) -> &'static str {
        match self {
            Self::Comp => "compensation",
            Self::Flex => "commute/flexibility",
            Self::Growth => "growth",
            Self::Culture => "culture",
            Self::Benefits => "benefits",
        }
    }

    /// Short label drawn next to the radar axis.
    pub const fn axis_label(self) -> &'static str {
        match self {
            Self::Comp => "Comp",
            Self::Flex => "Flex",
            Self::Growth => "Growth",
            Self::Culture => "Culture",
            Self::Benefits => "Benefits",
        }
    }
}

/// One employer offer exactly as entered. Values are not range-checked here;
/// scoring clamps them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOffer {
    pub title: String,
    pub location: String,
    pub salary: f64,
    pub bonus: f64,
    pub equity: f64,
    pub col_index: f64,
    pub commute_minutes: f64,
    pub remote_days_per_week: f64,
    pub vacation_days: f64,
    pub health_rating: f64,
    pub growth_rating: f64,
    pub culture_rating: f64,
}

impl Default for RawOffer {
    fn default() -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            salary: 0.0,
            bonus: 0.0,
            equity: 0.0,
            col_index: DEFAULT_COL_INDEX,
            commute_minutes: 0.0,
            remote_days_per_week: 0.0,
            vacation_days: 0.0,
            health_rating: 0.0,
            growth_rating: 0.0,
            culture_rating: 0.0,
        }
    }
}

/// Relative importance of each dimension. Sign is not constrained and the sum may be zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub comp: f64,
    pub commute: f64,
    pub growth: f64,
    pub culture: f64,
    pub benefits: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.comp + self.commute + self.growth + self.culture + self.benefits
    }

    pub fn for_dimension(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Comp => self.comp,
            Dimension::Flex => self.commute,
            Dimension::Growth => self.growth,
            Dimension::Culture => self.culture,
            Dimension::Benefits => self.benefits,
        }
    }
}

/// Settings shared by both offers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub time_value_per_hour: f64,
    pub weights: Weights,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_value_per_hour: DEFAULT_TIME_VALUE_PER_HOUR,
            weights: Weights::default(),
        }
    }
}

/// Everything needed to reproduce a comparison; the unit that is saved and shared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SharedState {
    pub offer_a: RawOffer,
    pub offer_b: RawOffer,
    pub settings: Settings,
}

impl SharedState {
    pub fn offer(&self, side: OfferSide) -> &RawOffer {
        match side {
            OfferSide::A => &self.offer_a,
            OfferSide::B => &self.offer_b,
        }
    }

    pub fn offer_mut(&mut self, side: OfferSide) -> &mut RawOffer {
        match side {
            OfferSide::A => &mut self.offer_a,
            OfferSide::B => &mut self.offer_b,
        }
    }

    /// Sample comparison loaded by the `demo` command.
    pub fn demo() -> Self {
        Self {
            offer_a: RawOffer {
                title: "Frontend Engineer @ Bloomly".to_string(),
                location: "Brooklyn, NY".to_string(),
                salary: 125_000.0,
                bonus: 10_000.0,
                equity: 15_000.0,
                col_index: 110.0,
                commute_minutes: 35.0,
                remote_days_per_week: 2.0,
                vacation_days: 15.0,
                health_rating: 4.0,
                growth_rating: 5.0,
                culture_rating: 4.0,
            },
            offer_b: RawOffer {
                title: "Full-stack Engineer @ Northbyte".to_string(),
                location: "Jersey City, NJ".to_string(),
                salary: 118_000.0,
                bonus: 20_000.0,
                equity: 10_000.0,
                col_index: 98.0,
                commute_minutes: 12.0,
                remote_days_per_week: 3.0,
                vacation_days: 20.0,
                health_rating: 5.0,
                growth_rating: 4.0,
                culture_rating: 5.0,
            },
            settings: Settings {
                time_value_per_hour: 30.0,
                weights: Weights {
                    comp: 40.0,
                    commute: 20.0,
                    growth: 20.0,
                    culture: 10.0,
                    benefits: 10.0,
                },
            },
        }
    }
}
