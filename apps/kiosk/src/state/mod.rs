//! # State Module
//!
//! Shell state for the booking/payment flow.
//!
//! ## Why Multiple State Types?
//! Each state type has a single responsibility, and commands declare exactly
//! what they need:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │ BookingState │  │ PaymentState │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │ Mutex<       │  │ Mutex<       │  │  hotel name      │              │
//! │  │  BookingForm>│  │  PaymentForm>│  │  slot path       │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                         │
//! │  • Form states: exclusive access via Mutex                              │
//! │  • ConfigState: read-only after initialization                          │
//! │  The flow is one logical thread; the mutexes guard the shared refs.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod booking;
mod config;
mod payment;

pub use booking::{BookingField, BookingForm, BookingState, BookingView};
pub use config::ConfigState;
pub use payment::{PaymentField, PaymentForm, PaymentState};
