//! # pagesmith-core - Core Domain Types
//!
//! Foundation crate for PageSmith. Provides domain types, error handling,
//! logging setup, and the line-oriented syntax highlighter.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ChatMessage`] - A single conversation turn with role, content, timestamp
//! - [`Role`] - Who produced a message (User, Model)
//! - [`MessageId`] - Opaque identifier for a conversation turn
//! - [`ArtifactData`] - Generated page content attached to a model message
//! - [`ArtifactKind`] - Initial presentation of an artifact (Preview, Code)
//! - [`GeminiModel`] - Selectable model (Flash, Pro) with API and display names
//! - [`CodeVersion`] - Immutable snapshot of artifact source content
//!
//! ### Highlighter (`highlight`)
//! - [`highlight_line()`] - Pure text line -> styled span decomposition
//! - [`HighlightSpan`], [`SpanKind`] - The decomposition result
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum, one variant per layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pagesmith_core::prelude::*;
//! ```

pub mod error;
pub mod highlight;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all PageSmith crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use highlight::{highlight_line, HighlightSpan, SpanKind};
pub use types::{
    ArtifactData, ArtifactKind, ChatMessage, CodeVersion, GeminiModel, MessageId, Role, VersionId,
};
