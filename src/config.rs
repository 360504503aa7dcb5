//! Configuration management for the link shortener client.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage application
//! configuration: the backend API base URL, the public front-end URL used to
//! compose shareable short links, and the redirect delay.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf, time::Duration};

/// Fallback for the visible "redirecting" delay when
/// `SNIP_REDIRECT_DELAY_MS` is not set.
const DEFAULT_REDIRECT_DELAY_MS: u64 = 1500;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `snipcli/.env`. This allows users to store
/// configuration without hardcoding values into their shell profile.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/snipcli/.env`
/// - macOS: `~/Library/Application Support/snipcli/.env`
/// - Windows: `%LOCALAPPDATA%/snipcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or an error
/// string if directory creation or file loading fails.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("snipcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the base URL of the link-shortener backend API.
///
/// Retrieves the `SNIP_API_URL` environment variable, e.g.
/// `http://localhost:3333/api`. All link operations (create, list, lookup,
/// delete, visit accounting) are issued against this base.
///
/// # Panics
///
/// Panics if the `SNIP_API_URL` environment variable is not set.
pub fn api_url() -> String {
    env::var("SNIP_API_URL").expect("SNIP_API_URL must be set")
}

/// Returns the public front-end base URL.
///
/// Retrieves the `SNIP_FRONTEND_URL` environment variable, e.g.
/// `https://sho.rt`. It is used purely for display: composing the shareable
/// short URL shown by `create`, `list` and `copy`. It plays no part in
/// resolving a short link.
///
/// # Panics
///
/// Panics if the `SNIP_FRONTEND_URL` environment variable is not set.
pub fn frontend_url() -> String {
    env::var("SNIP_FRONTEND_URL").expect("SNIP_FRONTEND_URL must be set")
}

/// Returns the fixed visual delay shown before navigating to a resolved link.
///
/// Reads `SNIP_REDIRECT_DELAY_MS` and falls back to 1500 ms when the variable
/// is unset or unparsable. The delay is unconditional: the "redirecting"
/// indicator is shown for the full duration even when the visit-accounting
/// call finishes (or fails) early.
pub fn redirect_delay() -> Duration {
    let millis = env::var("SNIP_REDIRECT_DELAY_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_REDIRECT_DELAY_MS);
    Duration::from_millis(millis)
}
