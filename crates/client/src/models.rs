//! Response bodies that only exist on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use savings_predictor_core::profiles::Profile;

/// Reply to a transaction create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedTransaction {
    pub id: String,
    pub message: String,
}

/// Reply to a profile save
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProfile {
    pub message: String,
    pub profile: Profile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub categories_configured: usize,
    pub timestamp: DateTime<Utc>,
}

/// Error body returned by the API for every failure status.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
