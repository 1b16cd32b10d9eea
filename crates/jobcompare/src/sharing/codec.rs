//! URL-safe tokens carrying a whole comparison.
//!
//! A token is the compact state document, UTF-8 encoded, then base64url encoded
//! without padding. Decoding is lenient about the alphabet and padding so
//! links minted with a standard base64 encoder still open, but it never returns
//! a partially filled state.

use super::document::StateDocument;
use crate::comparison::domain::SharedState;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use tracing::debug;

/// Query parameter that carries the token in a share link.
pub const SHARE_PARAM: &str = "data";

pub fn encode(state: &SharedState) -> String {
    let json = StateDocument::from_state(state).to_json();
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// `None` when the token is empty, truncated, not base64, not UTF-8, not a JSON
/// object, or carries no recognized field.
pub fn decode(token: &str) -> Option<SharedState> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }

    let normalized: String = token
        .trim_end_matches('=')
        .chars()
        .map(|ch| match ch {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = match URL_SAFE_NO_PAD.decode(normalized.as_bytes()) {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!(error = %err, "share token is not base64");
            return None;
        }
    };

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!(error = %err, "share token is not UTF-8");
            return None;
        }
    };

    let document = match StateDocument::parse(&text) {
        Ok(document) => document,
        Err(err) => {
            debug!(error = %err, "share token does not hold a state document");
            return None;
        }
    };

    if document.is_empty() {
        debug!("share token holds no recognized fields");
        return None;
    }

    Some(document.to_state())
}

/// `<base>?data=<token>`, appending with `&` when `base` already has a query.
/// A `#fragment` on `base` is kept at the end of the link.
pub fn share_link(base: &str, state: &SharedState) -> String {
    let (address, fragment) = match base.split_once('#') {
        Some((address, fragment)) => (address, Some(fragment)),
        None => (base, None),
    };
    let separator = if address.contains('?') { '&' } else { '?' };
    let mut link = format!(
        "{address}{separator}{SHARE_PARAM}={}",
        urlencoding::encode(&encode(state))
    );
    if let Some(fragment) = fragment {
        link.push('#');
        link.push_str(fragment);
    }
    link
}

/// Pulls the token out of a full link or a bare query string, or returns a bare
/// token as is. `None` when there is no `data` parameter; a query-less address
/// such as `results.html` is not mistaken for a token.
pub fn token_from_link(link: &str) -> Option<String> {
    let link = link.trim();
    if link.is_empty() {
        return None;
    }

    let without_fragment = link.split('#').next().unwrap_or(link);
    let query = match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if looks_like_token(without_fragment) => {
            return Some(without_fragment.to_string())
        }
        None if without_fragment.contains('=') => without_fragment,
        None => return None,
    };

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == SHARE_PARAM)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|value| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Characters of the standard and URL-safe base64 alphabets, padding included.
/// A padded token ends in `=`, so only a trailing run of `=` is accepted.
fn looks_like_token(candidate: &str) -> bool {
    let body = candidate.trim_end_matches('=');
    !body.is_empty()
        && body
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '+' | '/'))
}

/// Decodes the state carried by a share link, if any.
pub fn decode_link(link: &str) -> Option<SharedState> {
    token_from_link(link).and_then(|token| decode(&token))
}
