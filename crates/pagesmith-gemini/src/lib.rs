//! # pagesmith-gemini - Outbound AI collaborator
//!
//! REST client for the Gemini `generateContent` endpoint. The public surface
//! never fails: with no credential it returns a canned demo reply after a
//! fixed delay, and any transport or API error collapses to a fixed
//! human-readable fallback string. The typed error path exists only inside
//! the crate.

pub mod client;
pub mod protocol;

pub use client::{GeminiClient, DEMO_DELAY_MS};
pub use protocol::{Content, HistoryTurn, Part};
