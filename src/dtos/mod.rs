//! Request/response payloads for the website endpoints.
//!
//! Required fields deserialize with a String default so that a missing field
//! and a present-but-empty field both fail the same non-empty validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct GenerateRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "No description provided"))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModifyRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "No modification description provided"))]
    pub modification_description: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "No current HTML provided"))]
    pub current_html: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "No current CSS provided"))]
    pub current_css: String,

    /// Optional; a site without scripts modifies fine.
    #[serde(default)]
    pub current_js: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub result: String,
}
