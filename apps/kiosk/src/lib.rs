//! # Santorini Kiosk Library
//!
//! The thin shell driving the Santorini Blue booking flow.
//!
//! ## Module Organization
//! ```text
//! santorini_kiosk/
//! ├── lib.rs          ◄─── You are here (startup & page loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── booking.rs  ◄─── Booking form state + recompute
//! │   ├── payment.rs  ◄─── Payment form state + validation
//! │   └── config.rs   ◄─── Configuration (hotel name, slot path)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── booking.rs  ◄─── Field edits, begin checkout
//! │   └── payment.rs  ◄─── Payment summary, submit
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Two Pages, One Slot
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BOOKING PAGE                          PAYMENT PAGE                     │
//! │  ────────────                          ────────────                     │
//! │  checkin/checkout dates                summary from the slot            │
//! │  room counters            ──book──►    card + contact fields            │
//! │  live summary                          pay ──► receipt, slot cleared    │
//! │                       ◄──back/stale──                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The shell never computes anything itself: it samples "today", feeds raw
//! strings to commands, and prints what comes back.

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use chrono::Local;
use tracing::info;
use tracing_subscriber::EnvFilter;

use santorini_core::summary::pluralize;
use santorini_core::RoomType;
use santorini_store::CheckoutSlot;

use commands::payment::PaymentSummary;
use state::{BookingField, BookingState, BookingView, ConfigState, PaymentField, PaymentState};

/// Which page the guest is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Booking,
    Payment,
}

/// Runs the kiosk.
///
/// ## Startup Sequence
/// 1. Initialize tracing (logging)
/// 2. Build configuration (hotel name, slot path)
/// 3. Resume on the payment page if an active checkout is waiting
/// 4. Read commands line by line until EOF or `quit`
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = ConfigState::from_env()?;
    info!(
        hotel = %config.hotel_name,
        slot = %config.slot_path.display(),
        "Starting Santorini Blue kiosk"
    );

    let slot = CheckoutSlot::at(config.slot_path.clone());
    let booking = BookingState::new();
    let payment = PaymentState::new();

    println!("── {} ──", config.hotel_name);

    // An interrupted session resumes where the guest left off.
    let mut page = match commands::payment::load_payment_summary(&slot)? {
        Some(summary) => {
            println!("Resuming checkout {}.", summary.reference);
            render_payment_summary(&summary);
            Page::Payment
        }
        None => Page::Booking,
    };

    print_help(page);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }
        if line == "help" {
            print_help(page);
            continue;
        }

        let today = Local::now().date_naive();
        page = match page {
            Page::Booking => booking_command(line, &booking, &payment, &slot, today),
            Page::Payment => payment_command(line, &payment, &slot, today),
        };
    }

    info!("Kiosk session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=santorini=trace` - Trace the santorini crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,santorini=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Booking Page
// =============================================================================

fn booking_command(
    line: &str,
    booking: &BookingState,
    payment: &PaymentState,
    slot: &CheckoutSlot,
    today: chrono::NaiveDate,
) -> Page {
    let (command, value) = split_command(line);

    let field = match command {
        "checkin" => Some(BookingField::CheckIn),
        "checkout" => Some(BookingField::CheckOut),
        "standard" => Some(BookingField::Standard),
        "superior" => Some(BookingField::Superior),
        "family" => Some(BookingField::Family),
        _ => None,
    };

    if let Some(field) = field {
        let view = commands::booking::set_booking_field(booking, field, value, today);
        render_booking(&view);
        return Page::Booking;
    }

    match command {
        "summary" => {
            render_booking(&commands::booking::get_booking(booking, today));
            Page::Booking
        }
        "rooms" => {
            render_room_details();
            Page::Booking
        }
        "book" => match commands::booking::begin_checkout(booking, slot, today) {
            Ok(record) => {
                println!("Booking confirmed - reference {}.", record.reference);
                // Fresh payment page for a fresh checkout.
                payment.with_form_mut(|form| *form = state::PaymentForm::new());
                match commands::payment::load_payment_summary(slot) {
                    Ok(Some(summary)) => render_payment_summary(&summary),
                    _ => println!("(could not load the payment summary)"),
                }
                print_help(Page::Payment);
                Page::Payment
            }
            Err(err) => {
                println!("Cannot check out yet: {}", err.message);
                Page::Booking
            }
        },
        _ => {
            println!("Unknown command {command:?} - try \"help\".");
            Page::Booking
        }
    }
}

fn render_booking(view: &BookingView) {
    for feedback in &view.feedback {
        println!("  ! {}: {}", feedback.field, feedback.message);
    }

    let summary = &view.summary;
    if !summary.has_any_selection {
        // The non-blocking advisory: nothing selected yet.
        println!("  (add at least one room to see a price)");
        return;
    }

    for item in &summary.line_items {
        println!(
            "  {:<22} {:>12} / night",
            item.label,
            item.nightly_subtotal.to_string()
        );
    }
    println!(
        "  {:<22} {:>12}  ({})",
        "Total",
        summary.total.to_string(),
        summary.nights_label
    );
}

fn render_room_details() {
    for room in RoomType::ALL {
        println!(
            "  {:<14} {:>10}/night   {}",
            room.name(),
            room.unit_price().to_string(),
            pluralize(i64::from(room.max_guests()), "guest")
        );
    }
}

// =============================================================================
// Payment Page
// =============================================================================

fn payment_command(
    line: &str,
    payment: &PaymentState,
    slot: &CheckoutSlot,
    today: chrono::NaiveDate,
) -> Page {
    let (command, value) = split_command(line);

    let field = match command {
        "name" => Some(PaymentField::Cardholder),
        "card" => Some(PaymentField::CardNumber),
        "expiry" => Some(PaymentField::Expiry),
        "cvv" => Some(PaymentField::Cvv),
        "email" => Some(PaymentField::Email),
        "phone" => Some(PaymentField::Phone),
        _ => None,
    };

    if let Some(field) = field {
        payment.with_form_mut(|form| form.set(field, value));
        println!("  {} recorded.", field.id());
        return Page::Payment;
    }

    match command {
        "review" => {
            match commands::payment::load_payment_summary(slot) {
                Ok(Some(summary)) => render_payment_summary(&summary),
                _ => {
                    println!("There is no booking to pay for - back to the booking page.");
                    return Page::Booking;
                }
            }
            for feedback in commands::payment::validate_payment_form(payment, today) {
                println!("  ! {}: {}", feedback.field, feedback.message);
            }
            Page::Payment
        }
        "pay" => match commands::payment::submit_payment(payment, slot, today) {
            Ok(receipt) => {
                println!(
                    "Payment of {} accepted on card ending {} - reference {}.",
                    receipt.amount, receipt.card_last4, receipt.reference
                );
                println!("Thank you for booking with us!");
                print_help(Page::Booking);
                Page::Booking
            }
            Err(err) => {
                println!("Payment not taken: {}", err.message);
                for feedback in commands::payment::validate_payment_form(payment, today) {
                    println!("  ! {}: {}", feedback.field, feedback.message);
                }
                Page::Payment
            }
        },
        "back" => {
            println!("Returning to the booking page (your checkout is kept).");
            Page::Booking
        }
        _ => {
            println!("Unknown command {command:?} - try \"help\".");
            Page::Payment
        }
    }
}

fn render_payment_summary(summary: &PaymentSummary) {
    println!(
        "  Stay {} → {} ({})",
        summary.checkin, summary.checkout, summary.nights_label
    );
    for line in &summary.lines {
        println!(
            "  {:<22} {:>12}",
            line.label,
            line.line_total.to_string()
        );
    }
    println!("  {:<22} {:>12}", "Total due", summary.total.to_string());
}

// =============================================================================
// Helpers
// =============================================================================

/// Splits "checkin 2025-01-10" into ("checkin", "2025-01-10").
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((command, value)) => (command, value.trim()),
        None => (line, ""),
    }
}

fn print_help(page: Page) {
    match page {
        Page::Booking => println!(
            "Booking page - commands: checkin <yyyy-mm-dd>, checkout <yyyy-mm-dd>, \
             standard <n>, superior <n>, family <n>, summary, rooms, book, help, quit"
        ),
        Page::Payment => println!(
            "Payment page - commands: name <v>, card <v>, expiry <MM/YY>, cvv <v>, \
             email <v>, phone <v>, review, pay, back, help, quit"
        ),
    }
}
