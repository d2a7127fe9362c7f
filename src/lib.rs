//! Songle - typed client for the Songle music-analysis web API
//!
//! This library fetches song metadata and time-indexed musical annotations
//! (beats, chords, melody notes, chorus segments) from the Songle service
//! and maps the camelCase JSON payloads onto plain snake_case Rust records.

/// Endpoint façade over the Songle HTTP API
pub mod client;
/// Record types returned by the API
pub mod entities;
/// Error types and result alias
pub mod errors;
/// Key normalization and schema-driven record construction
pub mod mapper;

pub use client::SongleClient;
pub use errors::{Error, Result};
