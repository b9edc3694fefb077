//! The two website endpoints: generate from a description, and modify an
//! existing site. Each is a single linear validate -> format -> call ->
//! respond path; the model text is returned verbatim.

use crate::dtos::{GenerateRequest, GenerateResponse, ModifyRequest};
use crate::error::AppError;
use crate::prompts;
use crate::services::providers::{GenerationParams, ProviderError};
use crate::startup::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use validator::Validate;

pub async fn generate_website(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let prompt = prompts::generation_prompt(&req.description);

    tracing::debug!(prompt_len = prompt.len(), "Generating website");

    let response = state
        .text_provider
        .generate(&prompt, &GenerationParams::website_codegen())
        .await?;

    let result = response.text.ok_or_else(|| {
        AppError::UpstreamError(ProviderError::ApiError("Model returned no text".to_string()))
    })?;

    Ok(Json(GenerateResponse { result }))
}

pub async fn modify_website(
    State(state): State<AppState>,
    payload: Result<Json<ModifyRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    req.validate()?;

    let prompt = prompts::modification_prompt(
        &req.modification_description,
        &req.current_html,
        &req.current_css,
        &req.current_js,
    );

    tracing::debug!(prompt_len = prompt.len(), "Modifying website");

    let response = state
        .text_provider
        .generate(&prompt, &GenerationParams::website_codegen())
        .await?;

    let result = response.text.ok_or_else(|| {
        AppError::UpstreamError(ProviderError::ApiError("Model returned no text".to_string()))
    })?;

    Ok(Json(GenerateResponse { result }))
}
