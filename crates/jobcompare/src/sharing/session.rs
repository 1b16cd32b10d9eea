use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::codec;
use super::document::{self, Field, FieldError, ImportError};
use super::store::{KeyValueStore, StateRepository, StoreError};
use crate::comparison::domain::SharedState;

/// Where a resolved comparison came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StateSource {
    SharedLink,
    LocalStore,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedState {
    pub state: SharedState,
    pub source: StateSource,
    /// A link was supplied but could not be decoded, so the saved state was used.
    pub link_rejected: bool,
}

/// Error raised by the comparison session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Field(#[from] FieldError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Everything a front end does with a comparison: edit, save, import/export and share.
pub struct ComparisonSession<S> {
    repository: StateRepository<S>,
    results_url: String,
}

impl<S> ComparisonSession<S>
where
    S: KeyValueStore,
{
    pub fn new(store: Arc<S>, results_url: impl Into<String>) -> Self {
        Self::with_repository(StateRepository::with_default_key(store), results_url)
    }

    pub fn with_repository(repository: StateRepository<S>, results_url: impl Into<String>) -> Self {
        Self {
            repository,
            results_url: results_url.into(),
        }
    }

    pub fn results_url(&self) -> &str {
        &self.results_url
    }

    pub fn save(&self, state: &SharedState) -> Result<(), SessionError> {
        self.repository.save(state)?;
        Ok(())
    }

    pub fn load(&self) -> Result<Option<SharedState>, SessionError> {
        Ok(self.repository.load()?)
    }

    /// Saved state, or the empty defaults when nothing is saved.
    pub fn current(&self) -> Result<SharedState, SessionError> {
        Ok(self.load()?.unwrap_or_default())
    }

    pub fn reset(&self) -> Result<(), SessionError> {
        self.repository.clear()?;
        info!(key = self.repository.key(), "cleared saved comparison");
        Ok(())
    }

    pub fn load_demo(&self) -> Result<SharedState, SessionError> {
        let state = SharedState::demo();
        self.save(&state)?;
        Ok(state)
    }

    /// Binds one field of the saved state and persists the result.
    pub fn set_field(&self, key: &str, raw: &str) -> Result<(Field, SharedState), SessionError> {
        let mut state = self.current()?;
        let field = document::set_field(&mut state, key, raw)?;
        self.save(&state)?;
        Ok((field, state))
    }

    /// Replaces the saved state with an imported document. Nothing is saved on failure.
    pub fn import_json(&self, raw: &str) -> Result<SharedState, SessionError> {
        let state = document::import_json(raw)?;
        self.save(&state)?;
        Ok(state)
    }

    pub fn export_json(&self) -> Result<String, SessionError> {
        Ok(document::export_json(&self.current()?))
    }

    pub fn share_link_for(&self, state: &SharedState) -> String {
        codec::share_link(&self.results_url, state)
    }

    /// Share link for the saved state, `None` when nothing is saved.
    pub fn share_link(&self) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.map(|state| self.share_link_for(&state)))
    }

    /// Prefers a decodable share link, then the saved state. `None` means there is nothing to show.
    ///
    /// A link without a `data` parameter is a plain fallback; only a token that
    /// fails to decode marks the link as rejected.
    pub fn resolve(&self, link: Option<&str>) -> Result<Option<ResolvedState>, SessionError> {
        let mut link_rejected = false;

        match link.and_then(codec::token_from_link) {
            Some(token) => match codec::decode(&token) {
                Some(state) => {
                    return Ok(Some(ResolvedState {
                        state,
                        source: StateSource::SharedLink,
                        link_rejected,
                    }))
                }
                None => {
                    warn!("shared link could not be decoded; falling back to saved comparison");
                    link_rejected = true;
                }
            },
            None if link.is_some() => {
                debug!("link carries no shared data; using saved comparison");
            }
            None => {}
        }

        Ok(self.load()?.map(|state| ResolvedState {
            state,
            source: StateSource::LocalStore,
            link_rejected,
        }))
    }
}
