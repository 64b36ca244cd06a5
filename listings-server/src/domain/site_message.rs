use serde::{Deserialize, Serialize};

/// Site-wide banner message, a singleton record maintained out of band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct SiteMessage {
    pub(crate) text: String,
    pub(crate) kind: String,
}
