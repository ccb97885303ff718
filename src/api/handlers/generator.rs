// src/api/handlers/generator.rs

use actix_web::{web, Either, HttpRequest, HttpResponse};
use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::api::error::ApiError;
use crate::api::types::{ErrorResponse, GenerateResponse};
use crate::api::utils::{session_cookie, session_id};
use crate::api::AppState;
use crate::models::{CharacterClasses, PasswordGenerationOptions, DEFAULT_COUNT, DEFAULT_LENGTH};

/// A JSON object, or failing that a URL-encoded form. Anything else reads
/// as an empty parameter set, so every field falls back to its default.
pub type GeneratePayload =
    Option<Either<web::Json<Map<String, Value>>, web::Form<HashMap<String, String>>>>;

const TRUTHY: [&str; 4] = ["1", "true", "yes", "on"];

fn into_params(payload: GeneratePayload) -> Map<String, Value> {
    match payload {
        Some(Either::Left(json)) => json.into_inner(),
        Some(Either::Right(form)) => form
            .into_inner()
            .into_iter()
            .map(|(key, value)| (key, Value::String(value)))
            .collect(),
        None => Map::new(),
    }
}

fn invalid(field: &'static str, value: &Value) -> ApiError {
    let value = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    ApiError::InvalidField { field, value }
}

fn integer_param(params: &Map<String, Value>, field: &'static str, default: i64) -> Result<i64, ApiError> {
    let Some(value) = params.get(field) else {
        return Ok(default);
    };
    let parsed = match value {
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => parse_integer_text(s.trim()),
        _ => None,
    };
    parsed.ok_or_else(|| invalid(field, value))
}

/// Decimal integer text; digits that overflow `i64` saturate toward their sign.
fn parse_integer_text(text: &str) -> Option<i64> {
    if let Ok(n) = text.parse() {
        return Some(n);
    }
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn flag_param(params: &Map<String, Value>, field: &str, default: bool) -> bool {
    let text = match params.get(field) {
        None => return default,
        Some(Value::Bool(b)) => return *b,
        Some(Value::String(s)) => s.to_lowercase(),
        Some(Value::Number(n)) => n.to_string(),
        Some(_) => return false,
    };
    TRUTHY.contains(&text.as_str())
}

/// Read generation options the way the form (or any other client) sends them.
pub fn options_from_params(params: &Map<String, Value>) -> Result<PasswordGenerationOptions, ApiError> {
    let defaults = CharacterClasses::default();
    let length = integer_param(params, "length", DEFAULT_LENGTH)?;
    let count = integer_param(params, "count", DEFAULT_COUNT)?;
    let classes = CharacterClasses {
        uppercase: flag_param(params, "uppercase", defaults.uppercase),
        lowercase: flag_param(params, "lowercase", defaults.lowercase),
        numbers: flag_param(params, "numbers", defaults.numbers),
        symbols: flag_param(params, "symbols", defaults.symbols),
    };
    Ok(PasswordGenerationOptions::clamped(length, count, classes))
}

/// Generate passwords
///
/// Generates a batch of passwords and appends them to the caller's session
/// history. Length is clamped to 4-256 and count to 1-100.
#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generator",
    request_body = crate::api::types::GenerateRequest,
    responses(
        (status = 200, description = "Generated passwords", body = GenerateResponse),
        (status = 400, description = "No character class selected or invalid field", body = ErrorResponse)
    )
)]
pub async fn generate_passwords(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: GeneratePayload,
) -> Result<HttpResponse, ApiError> {
    let params = into_params(payload);
    let options = options_from_params(&params).map_err(|e| {
        warn!("❌ Rejected generation request: {}", e);
        e
    })?;
    debug!("🔧 Generation options: {:?}", options);

    let passwords = state.generator.generate_batch(&options).map_err(|e| {
        warn!("❌ Generation failed: {:?}", e);
        e
    })?;

    let session = session_id(&req, &state);
    state.sessions.append(session, &passwords);
    info!(
        "🔑 Generated {} password(s) of length {} for session {}",
        passwords.len(),
        options.length,
        session
    );

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(session, &state))
        .json(GenerateResponse { passwords }))
}
