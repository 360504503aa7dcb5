//! # CLI Module
//!
//! This module provides the command-line interface layer for Snipcli, a
//! client for a self-hosted link-shortener backend. It implements all
//! user-facing commands and coordinates between the backend API client, the
//! shared query cache, and the redirect flow.
//!
//! ## Command Categories
//!
//! ### Link Management
//!
//! - [`create`] - Shortens a URL, optionally under a custom alias, and prints
//!   the shareable short URL
//! - [`list`] - Renders the registered links as a table with visit counters,
//!   with optional substring search
//! - [`delete`] - Removes a short link by identifier
//!
//! ### Sharing
//!
//! - [`copy`] - Prints the composed shareable short URL on stdout so it can
//!   be piped into a clipboard tool (`snipcli copy my-page | xclip`)
//!
//! ### Redirection
//!
//! - [`open`] - Runs the redirect resolution flow for an identifier: resolve,
//!   account the visit, hold the redirecting indicator for the configured
//!   delay, then open the destination in the default browser — or render the
//!   not-found view on a miss
//!
//! ## Error Handling Philosophy
//!
//! Mutation failures (create/delete) are surfaced as blocking error messages
//! and terminate with a non-zero status, leaving the backend state unchanged
//! so the user may simply retry. Lookup misses render the not-found view.
//! Visit-accounting failures never surface here at all; the redirect flow
//! logs and swallows them.
//!
//! ## User Experience
//!
//! Commands show an `indicatif` spinner while a request is in flight, and the
//! `open` command keeps its spinner visible for the whole fixed redirect
//! delay so the feedback is consistent no matter how fast the backend
//! answers.

mod copy;
mod create;
mod delete;
mod list;
mod open;

pub use copy::copy;
pub use create::create;
pub use delete::delete;
pub use list::list;
pub use open::open;
