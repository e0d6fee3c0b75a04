//! # Configuration State
//!
//! Shell configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SANTORINI_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use directories::ProjectDirs;

use santorini_store::CHECKOUT_SLOT_FILE;

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Property name shown in page headers and receipts.
    pub hotel_name: String,

    /// Where the checkout slot file lives.
    pub slot_path: PathBuf,
}

impl ConfigState {
    /// Builds configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SANTORINI_HOTEL_NAME`: Override the property name
    /// - `SANTORINI_DATA_PATH`: Override the data directory holding the slot
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let hotel_name =
            std::env::var("SANTORINI_HOTEL_NAME").unwrap_or_else(|_| "Santorini Blue".to_string());

        Ok(ConfigState {
            hotel_name,
            slot_path: resolve_slot_path()?,
        })
    }
}

/// Determines the checkout slot file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.santorini-blue.kiosk/checkout.json`
/// - **Windows**: `%APPDATA%\santorini-blue\kiosk\checkout.json`
/// - **Linux**: `~/.local/share/santorini-kiosk/checkout.json`
///
/// ## Development Override
/// Set `SANTORINI_DATA_PATH` to use a custom directory.
fn resolve_slot_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Check for override
    if let Ok(dir) = std::env::var("SANTORINI_DATA_PATH") {
        return Ok(PathBuf::from(dir).join(CHECKOUT_SLOT_FILE));
    }

    // Use platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "santorini-blue", "kiosk")
        .ok_or("Could not determine app data directory")?;

    Ok(proj_dirs.data_dir().join(CHECKOUT_SLOT_FILE))
}
