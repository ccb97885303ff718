// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

use crate::models::GeneratedPassword;

/// Body the generator form submits to `/generate`.
///
/// The service also accepts numbers for `length`, a `count` field, and
/// string flags such as `"on"` or `"yes"`; this is the shape the form sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Password length, as typed into the form (clamped to 4-256)
    pub length: String,
    /// Include uppercase letters (default: true)
    pub uppercase: bool,
    /// Include lowercase letters (default: true)
    pub lowercase: bool,
    /// Include numbers (default: true)
    pub numbers: bool,
    /// Include symbols (default: false)
    pub symbols: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Generated passwords, in generation order
    pub passwords: Vec<GeneratedPassword>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    /// Passwords generated in this session, oldest first
    pub history: Vec<GeneratedPassword>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
