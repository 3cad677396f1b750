//! Phasecast - contrast-phase image previews
//!
//! HTTP service that takes an uploaded image and returns it with an
//! arterial or venous phase filter applied, as a base64 PNG data URI.
//! The filters themselves live in the `phase-filters` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
