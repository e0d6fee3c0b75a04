//! # Checkout Slot
//!
//! The single persisted slot carrying a booking from the booking page to the
//! payment page.
//!
//! ## Slot Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Slot Lifecycle                                      │
//! │                                                                         │
//! │   (absent) ──confirm booking──► (one record) ──pay──► (absent)          │
//! │                    ▲                  │                                 │
//! │                    └──confirm again───┘  (overwritten wholesale)        │
//! │                                                                         │
//! │   • One writer, one reader, one logical thread: last write wins.        │
//! │   • load() never invents data: absent is None, undecodable is a typed   │
//! │     error the caller maps to "no active checkout".                      │
//! │   • clear() is idempotent - clearing an empty slot is fine.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use santorini_core::CheckoutPayload;

use crate::error::StoreError;

/// File name of the checkout slot inside the app data directory.
///
/// The stand-in for the local-storage key the web flow used.
pub const CHECKOUT_SLOT_FILE: &str = "checkout.json";

// =============================================================================
// Checkout Record
// =============================================================================

/// The envelope persisted in the slot: the payload plus handoff metadata.
///
/// The payload is the data contract; the envelope adds a reference the
/// payment page can show the guest and a timestamp for the log trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRecord {
    /// Opaque reference for this handoff (UUID v4).
    pub reference: String,

    /// When the booking was confirmed.
    pub saved_at: DateTime<Utc>,

    /// The booking being paid for.
    pub payload: CheckoutPayload,
}

impl CheckoutRecord {
    /// Wraps a payload in a fresh envelope with a new reference.
    pub fn new(payload: CheckoutPayload) -> Self {
        CheckoutRecord {
            reference: Uuid::new_v4().to_string(),
            saved_at: Utc::now(),
            payload,
        }
    }
}

// =============================================================================
// Checkout Slot
// =============================================================================

/// Handle to the persisted checkout slot at a fixed path.
#[derive(Debug, Clone)]
pub struct CheckoutSlot {
    path: PathBuf,
}

impl CheckoutSlot {
    /// Creates a slot handle at the given path.
    ///
    /// Nothing is touched on disk until the first save.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        CheckoutSlot { path: path.into() }
    }

    /// The slot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a record to the slot, replacing whatever was there.
    ///
    /// The slot contract is last-write-wins with a single writer; there is
    /// no merging and no append.
    pub fn save(&self, record: &CheckoutRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StoreError::Encode(e.to_string()))?;
        fs::write(&self.path, json)?;

        debug!(reference = %record.reference, path = %self.path.display(), "checkout record saved");
        Ok(())
    }

    /// Reads the slot.
    ///
    /// ## Returns
    /// - `Ok(Some(record))` - a decodable record is present
    /// - `Ok(None)` - the slot is empty (no file)
    /// - `Err(StoreError::MalformedPayload)` - bytes are present but do not
    ///   decode; the caller treats this as "no active checkout"
    pub fn load(&self) -> Result<Option<CheckoutRecord>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<CheckoutRecord>(&raw) {
            Ok(record) => Ok(Some(record)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding malformed checkout record");
                Err(StoreError::MalformedPayload(e.to_string()))
            }
        }
    }

    /// Empties the slot.
    ///
    /// Idempotent: clearing an already-empty slot succeeds. Called exactly
    /// once per handoff, after the payment confirmation.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "checkout slot cleared");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
