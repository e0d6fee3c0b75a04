//! # Store Error Types
//!
//! Error types for checkout slot operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Shell ApiError ← MalformedPayload becomes "no active checkout":        │
//! │                   the guest is redirected to booking, never shown       │
//! │                   a deserialization message                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Checkout slot operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The slot file could not be read, written, or removed.
    #[error("checkout slot io error: {0}")]
    Io(#[from] std::io::Error),

    /// The slot holds bytes that do not decode into a checkout record.
    ///
    /// ## When This Occurs
    /// - A stale record from an older payload shape
    /// - Manual edits to the slot file
    ///
    /// Consumers treat this exactly like an absent record.
    #[error("persisted checkout payload is malformed: {0}")]
    MalformedPayload(String),

    /// A record failed to serialize on the way in.
    ///
    /// Should not happen for well-formed records; surfaced rather than
    /// silently dropping the handoff.
    #[error("failed to encode checkout record: {0}")]
    Encode(String),
}

// =============================================================================
// Unit Tests
// =============================================================================
