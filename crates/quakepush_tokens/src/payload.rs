//! Request body accepted when registering a token.

use serde::Deserialize;
use tracing::debug;

/// Body of `PUT /v1/tokens/{category}/{token}`.
///
/// Both fields are accepted and logged but not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreateParams {
    /// Client installation identifier
    #[serde(default)]
    pub uuid: Option<String>,

    /// Minimum intensity the client wants to be notified about
    #[serde(default)]
    pub min: Option<i64>,
}

impl CreateParams {
    /// Decode `body`, falling back to empty params when it is missing or
    /// not a matching JSON object. A bad body never blocks registration.
    pub fn parse_lenient(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }

        match serde_json::from_str(body) {
            Ok(params) => params,
            Err(err) => {
                debug!("Ignoring unparseable token body: {}", err);
                Self::default()
            }
        }
    }
}
