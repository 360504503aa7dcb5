//! # Redirect Resolution Module
//!
//! This module implements the redirect core of the client: given a short-link
//! identifier, decide whether to show a loading state, account for the visit,
//! navigate to the destination, or land on the not-found view.
//!
//! ## Overview
//!
//! Two cooperating pieces form the flow:
//!
//! - [`resolver`] - performs the single backend lookup for an identifier and
//!   reports either the resolved record or a terminal miss. A 404 is not
//!   transient; the resolver never retries.
//! - [`flow`] - the orchestrator, a small state machine
//!   (`Idle → Resolving → {Redirecting, NotFound}`) that consumes the
//!   resolver's result and drives the side effects: best-effort visit
//!   accounting, the fixed visual delay, URL normalization, and the terminal
//!   outcome (external navigation or the internal not-found view).
//!
//! ## Data Flow
//!
//! ```text
//! identifier → Resolver (HTTP GET) → {record | miss}
//!                                        ↓
//!                              Orchestrator (flow)
//!                   ├── record: visit POST (detached) → delay → External(url)
//!                   └── miss:   NotFound
//! ```
//!
//! ## Ordering and Cancellation
//!
//! The visit-accounting call is dispatched before the delay starts but is
//! never joined; only the delay gates navigation, so a slow or failing visit
//! endpoint cannot stall or cancel the redirect. Starting a new sequence
//! aborts a pending one: an aborted sequence never delivers an outcome, which
//! guarantees that two resolved identifiers cannot race to navigate.
//!
//! ## Error Policy
//!
//! No error leaves this module unhandled. Lookup failures of any kind become
//! the not-found outcome; visit-accounting failures are logged with
//! [`warning!`](crate::warning) and swallowed. The terminating
//! [`error!`](crate::error) macro is never used here.

pub mod flow;
pub mod resolver;

pub use flow::{RedirectFlow, RedirectOutcome, RedirectState};
pub use resolver::Resolution;
