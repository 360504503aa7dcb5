//! # Shortener Backend Integration Module
//!
//! This module provides the HTTP interface to the link-shortener backend API.
//! It is the only place in the client that talks to the network; all
//! persistence, code/slug generation and authoritative visit counting live on
//! the backend, and this module merely exposes its REST operations as async
//! Rust functions.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Management, Redirect)
//!          ↓
//! Shortener Integration Layer
//!     ├── Link Operations (create, list, lookup, delete)
//!     └── Visit Accounting (best-effort increment)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Link-Shortener Backend API
//! ```
//!
//! ## API Coverage
//!
//! The module covers the following backend endpoints, all rooted at the
//! configured API base URL:
//!
//! - `POST /links` - Create a short link, optionally with a custom alias
//! - `GET /links` - List all short links
//! - `GET /links/{identifier}` - Look up a single link, 404 on miss
//! - `DELETE /links/{identifier}` - Delete a link
//! - `POST /links/{identifier}/visit` - Increment the visit counter
//!
//! The `{identifier}` path parameter is the link's preferred display
//! identifier: the custom alias when one was chosen, otherwise the generated
//! code. The backend accepts either form.
//!
//! ## Error Handling
//!
//! Every function returns `Result<_, reqwest::Error>`; non-2xx responses are
//! converted to errors via `error_for_status`, so a 404 lookup miss and a
//! transport failure surface the same way to callers. Callers decide the
//! policy: the redirect resolver treats any failure as a terminal miss and
//! never retries, mutations surface the failure to the user, and visit
//! accounting only logs it.
//!
//! ## Configuration Integration
//!
//! The base URL is read from [`crate::config::api_url`] per request, keeping
//! the functions free of client state and trivially addressable at a stub
//! backend under test.

pub mod links;
pub mod visits;
