//! Wire schema for `POST /api/project-consultation`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body. Project details travel as one preformatted text block;
/// the receiving system gets no structured location/area/timeframe fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub project_type: String,
    pub project_details: String,
    pub subject: String,
}

/// Acknowledgement returned by the consultation endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
