//! Website generation service backed by the Gemini API.
//!
//! Exposes two POST endpoints that turn a natural-language description into
//! website source (HTML/CSS/JavaScript) by prompting a hosted language model
//! and returning its raw text response. Fenced-code-block extraction is left
//! to the caller.

pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod prompts;
pub mod services;
pub mod startup;
