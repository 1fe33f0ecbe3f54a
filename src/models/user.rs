//! User record model as served by the directory API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One user entry from the directory.
///
/// Every field is required on the wire; a missing or mistyped field fails
/// the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Profile picture URL
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

impl UserRecord {
    /// Full name as shown in list rows.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// `GET /api/users/{id}` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    pub data: UserRecord,
}

/// `GET /api/users?page=n` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPage {
    pub data: Vec<UserRecord>,
}

/// Page body with elements left undecoded, for per-element decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUserPage {
    pub data: Vec<serde_json::Value>,
}
