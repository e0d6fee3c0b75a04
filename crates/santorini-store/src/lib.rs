//! # santorini-store: Checkout Slot Persistence
//!
//! This crate provides the persisted checkout handoff slot for Santorini Blue:
//! a single named slot holding at most one serialized checkout record, the
//! stand-in for the browser's local-storage key the original flow used.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Santorini Blue Data Flow                            │
//! │                                                                         │
//! │  Booking shell (confirm)                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  santorini-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   CheckoutSlot ── save / load / clear ── checkout.json          │   │
//! │  │                                                                 │   │
//! │  │   • save overwrites wholesale (last-write-wins, single writer)  │   │
//! │  │   • load distinguishes absent / present / malformed             │   │
//! │  │   • clear is idempotent and runs once, after payment            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Payment shell (summary + confirmation)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use santorini_store::{CheckoutRecord, CheckoutSlot};
//!
//! let slot = CheckoutSlot::at(data_dir.join(santorini_store::CHECKOUT_SLOT_FILE));
//! slot.save(&CheckoutRecord::new(payload))?;
//!
//! match slot.load() {
//!     Ok(Some(record)) => render_payment_summary(record),
//!     Ok(None) | Err(_) => redirect_to_booking(),
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod slot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StoreError;
pub use slot::{CheckoutRecord, CheckoutSlot, CHECKOUT_SLOT_FILE};
