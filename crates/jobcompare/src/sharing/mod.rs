//! Saving, importing, exporting and sharing comparisons.

mod coerce;
pub mod codec;
pub mod document;
pub mod session;
pub mod store;

pub use codec::{decode, decode_link, encode, share_link, token_from_link, SHARE_PARAM};
pub use coerce::parse_leading_number;
pub use document::{
    export_json, import_json, set_field, Field, FieldError, ImportError, OfferField,
    SettingsField, StateDocument,
};
pub use session::{ComparisonSession, ResolvedState, SessionError, StateSource};
pub use store::{
    FileStore, InMemoryStore, KeyValueStore, StateRepository, StoreError, DEFAULT_STATE_KEY,
};
