//! HTTP handlers for the website generation service.

pub mod health;
pub mod websites;
