//! Flat key/value form of a [`SharedState`], used for storage, share tokens and
//! JSON import/export.

use super::coerce;
use crate::comparison::domain::{
    OfferSide, RawOffer, Settings, SharedState, DEFAULT_COL_INDEX, DEFAULT_TIME_VALUE_PER_HOUR,
};
use serde_json::{Map, Value};
use std::fmt;

/// Per-offer fields, keyed as `a_<suffix>` / `b_<suffix>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferField {
    Title,
    Location,
    Salary,
    Bonus,
    Equity,
    ColIndex,
    Commute,
    Remote,
    Vacation,
    Health,
    Growth,
    Culture,
}

impl OfferField {
    pub const ALL: [OfferField; 12] = [
        OfferField::Title,
        OfferField::Location,
        OfferField::Salary,
        OfferField::Bonus,
        OfferField::Equity,
        OfferField::ColIndex,
        OfferField::Commute,
        OfferField::Remote,
        OfferField::Vacation,
        OfferField::Health,
        OfferField::Growth,
        OfferField::Culture,
    ];

    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Location => "loc",
            Self::Salary => "salary",
            Self::Bonus => "bonus",
            Self::Equity => "equity",
            Self::ColIndex => "coli",
            Self::Commute => "commute",
            Self::Remote => "remote",
            Self::Vacation => "vac",
            Self::Health => "health",
            Self::Growth => "growth",
            Self::Culture => "culture",
        }
    }

    fn read(self, offer: &RawOffer) -> Value {
        match self {
            Self::Title => Value::String(offer.title.clone()),
            Self::Location => Value::String(offer.location.clone()),
            Self::Salary => Value::from(offer.salary),
            Self::Bonus => Value::from(offer.bonus),
            Self::Equity => Value::from(offer.equity),
            Self::ColIndex => Value::from(offer.col_index),
            Self::Commute => Value::from(offer.commute_minutes),
            Self::Remote => Value::from(offer.remote_days_per_week),
            Self::Vacation => Value::from(offer.vacation_days),
            Self::Health => Value::from(offer.health_rating),
            Self::Growth => Value::from(offer.growth_rating),
            Self::Culture => Value::from(offer.culture_rating),
        }
    }

    fn write(self, offer: &mut RawOffer, value: Option<&Value>) {
        match self {
            Self::Title => offer.title = coerce::text(value),
            Self::Location => offer.location = coerce::text(value),
            Self::Salary => offer.salary = coerce::number(value, 0.0),
            Self::Bonus => offer.bonus = coerce::number(value, 0.0),
            Self::Equity => offer.equity = coerce::number(value, 0.0),
            Self::ColIndex => offer.col_index = coerce::number(value, DEFAULT_COL_INDEX),
            Self::Commute => offer.commute_minutes = coerce::number(value, 0.0),
            Self::Remote => offer.remote_days_per_week = coerce::number(value, 0.0),
            Self::Vacation => offer.vacation_days = coerce::number(value, 0.0),
            Self::Health => offer.health_rating = coerce::number(value, 0.0),
            Self::Growth => offer.growth_rating = coerce::number(value, 0.0),
            Self::Culture => offer.culture_rating = coerce::number(value, 0.0),
        }
    }
}

/// Settings shared by both offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    WeightComp,
    WeightCommute,
    WeightGrowth,
    WeightCulture,
    WeightBenefits,
    TimeValue,
}

impl SettingsField {
    pub const ALL: [SettingsField; 6] = [
        SettingsField::WeightComp,
        SettingsField::WeightCommute,
        SettingsField::WeightGrowth,
        SettingsField::WeightCulture,
        SettingsField::WeightBenefits,
        SettingsField::TimeValue,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::WeightComp => "w_comp",
            Self::WeightCommute => "w_commute",
            Self::WeightGrowth => "w_growth",
            Self::WeightCulture => "w_culture",
            Self::WeightBenefits => "w_benefits",
            Self::TimeValue => "time_value",
        }
    }

    fn read(self, settings: &Settings) -> Value {
        let weights = &settings.weights;
        Value::from(match self {
            Self::WeightComp => weights.comp,
            Self::WeightCommute => weights.commute,
            Self::WeightGrowth => weights.growth,
            Self::WeightCulture => weights.culture,
            Self::WeightBenefits => weights.benefits,
            Self::TimeValue => settings.time_value_per_hour,
        })
    }

    fn write(self, settings: &mut Settings, value: Option<&Value>) {
        let weights = &mut settings.weights;
        match self {
            Self::WeightComp => weights.comp = coerce::number(value, 0.0),
            Self::WeightCommute => weights.commute = coerce::number(value, 0.0),
            Self::WeightGrowth => weights.growth = coerce::number(value, 0.0),
            Self::WeightCulture => weights.culture = coerce::number(value, 0.0),
            Self::WeightBenefits => weights.benefits = coerce::number(value, 0.0),
            Self::TimeValue => {
                settings.time_value_per_hour = coerce::number(value, DEFAULT_TIME_VALUE_PER_HOUR)
            }
        }
    }
}

/// One of the thirty recognized document keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Offer(OfferSide, OfferField),
    Setting(SettingsField),
}

impl Field {
    pub const COUNT: usize = 30;

    /// Every field, offer A first, then offer B, then settings.
    pub fn all() -> impl Iterator<Item = Field> {
        OfferSide::BOTH
            .into_iter()
            .flat_map(|side| {
                OfferField::ALL
                    .into_iter()
                    .map(move |field| Field::Offer(side, field))
            })
            .chain(SettingsField::ALL.into_iter().map(Field::Setting))
    }

    pub fn key(self) -> String {
        match self {
            Field::Offer(side, field) => format!("{}{}", side.field_prefix(), field.suffix()),
            Field::Setting(field) => field.key().to_string(),
        }
    }

    pub fn parse(key: &str) -> Option<Field> {
        Field::all().find(|field| field.key() == key)
    }

    fn read(self, state: &SharedState) -> Value {
        match self {
            Field::Offer(side, field) => field.read(state.offer(side)),
            Field::Setting(field) => field.read(&state.settings),
        }
    }

    fn write(self, state: &mut SharedState, value: Option<&Value>) {
        match self {
            Field::Offer(side, field) => field.write(state.offer_mut(side), value),
            Field::Setting(field) => field.write(&mut state.settings, value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Failure to read an import document.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document must be a JSON object of field keys")]
    NotAnObject,
}

/// Attempt to bind a value to a key outside the recognized set.
#[derive(Debug, thiserror::Error)]
#[error("unknown field '{key}'")]
pub struct FieldError {
    pub key: String,
}

/// Recognized entries of a state document. Unrecognized keys are dropped on the way in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateDocument {
    entries: Map<String, Value>,
}

impl StateDocument {
    /// Full document with every recognized key. Non-finite numbers become `null`.
    pub fn from_state(state: &SharedState) -> Self {
        let entries = Field::all()
            .map(|field| (field.key(), field.read(state)))
            .collect();
        Self { entries }
    }

    pub fn from_value(value: Value) -> Result<Self, ImportError> {
        let Value::Object(object) = value else {
            return Err(ImportError::NotAnObject);
        };
        let entries = object
            .into_iter()
            .filter(|(key, _)| Field::parse(key).is_some())
            .collect();
        Ok(Self { entries })
    }

    pub fn parse(raw: &str) -> Result<Self, ImportError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value)
    }

    /// No recognized key present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// State with missing or unusable entries replaced by their defaults.
    pub fn to_state(&self) -> SharedState {
        let mut state = SharedState::default();
        for field in Field::all() {
            field.write(&mut state, self.entries.get(&field.key()));
        }
        state
    }

    pub fn to_json(&self) -> String {
        Value::Object(self.entries.clone()).to_string()
    }

    pub fn to_pretty_json(&self) -> String {
        // A map of plain JSON values always serializes.
        serde_json::to_string_pretty(&self.entries).unwrap_or_else(|_| self.to_json())
    }
}

/// Reads an exported document. Missing keys take their defaults; extra keys are ignored.
pub fn import_json(raw: &str) -> Result<SharedState, ImportError> {
    Ok(StateDocument::parse(raw)?.to_state())
}

/// Pretty-printed document holding exactly the recognized keys.
pub fn export_json(state: &SharedState) -> String {
    StateDocument::from_state(state).to_pretty_json()
}

/// Binds one raw form value to `key`, coercing it the same way import does.
pub fn set_field(state: &mut SharedState, key: &str, raw: &str) -> Result<Field, FieldError> {
    let field = Field::parse(key.trim()).ok_or_else(|| FieldError {
        key: key.to_string(),
    })?;
    let value = Value::String(raw.to_string());
    field.write(state, Some(&value));
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn there_are_exactly_thirty_distinct_keys() {
        let mut keys: Vec<String> = Field::all().map(Field::key).collect();
        assert_eq!(keys.len(), Field::COUNT);
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), Field::COUNT);
        assert!(keys.contains(&"a_loc".to_string()));
        assert!(keys.contains(&"b_coli".to_string()));
        assert!(keys.contains(&"time_value".to_string()));
    }

    #[test]
    fn unrecognized_keys_are_dropped() {
        let document = StateDocument::from_value(json!({
            "a_salary": 90000,
            "a_nickname": "x",
            " a_bonus": 10,
        }))
        .expect("object accepted");
        assert_eq!(document.len(), 1);
        assert_eq!(document.get("a_salary"), Some(&json!(90000)));
    }

    #[test]
    fn non_objects_are_rejected() {
        assert!(matches!(
            StateDocument::parse("[1, 2]"),
            Err(ImportError::NotAnObject)
        ));
        assert!(matches!(
            StateDocument::parse("{\"a_salary\":"),
            Err(ImportError::Json(_))
        ));
    }

    #[test]
    fn string_values_are_coerced_like_form_fields() {
        let state = import_json(
            r#"{"a_salary":"120000","a_coli":"","b_remote":"3 days","time_value":"n/a","b_title":7}"#,
        )
        .expect("import succeeds");
        assert_eq!(state.offer_a.salary, 120_000.0);
        assert_eq!(state.offer_a.col_index, 100.0);
        assert_eq!(state.offer_b.remote_days_per_week, 3.0);
        assert_eq!(state.settings.time_value_per_hour, 30.0);
        assert_eq!(state.offer_b.title, "7");
    }

    #[test]
    fn export_contains_every_key() {
        let exported = export_json(&SharedState::demo());
        let value: Value = serde_json::from_str(&exported).expect("valid json");
        let object = value.as_object().expect("object");
        assert_eq!(object.len(), Field::COUNT);
        assert_eq!(object["w_comp"], json!(40.0));
        assert_eq!(object["b_loc"], json!("Jersey City, NJ"));
    }

    #[test]
    fn set_field_binds_by_key() {
        let mut state = SharedState::default();
        let field = set_field(&mut state, "b_vac", "25").expect("known key");
        assert_eq!(field, Field::Offer(OfferSide::B, OfferField::Vacation));
        assert_eq!(state.offer_b.vacation_days, 25.0);

        set_field(&mut state, "w_growth", "oops").expect("known key");
        assert_eq!(state.settings.weights.growth, 0.0);

        let err = set_field(&mut state, "c_salary", "1").expect_err("unknown key");
        assert_eq!(err.key, "c_salary");
    }
}
