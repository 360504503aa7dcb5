use std::time::Duration;

use tokio::{
    sync::{oneshot, watch},
    task::JoinHandle,
};

use crate::{
    redirect::resolver::{self, Resolution},
    shortener, utils, warning,
};

/// Observable states of a redirect sequence.
///
/// `Redirecting` is transient and always terminates in external navigation;
/// `NotFound` is terminal within the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectState {
    Idle,
    Resolving,
    Redirecting,
    NotFound,
}

/// Terminal decision of a redirect sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// Navigate to this normalized destination URL and leave the application.
    External(String),
    /// Show the internal not-found view; no external navigation happens.
    NotFound,
}

struct PendingRedirect {
    handle: JoinHandle<()>,
}

/// Orchestrates redirect sequences, one pending at a time.
///
/// Each call to [`start`](RedirectFlow::start) runs the full sequence for one
/// identifier on the tokio runtime and hands back two channels: a watch
/// receiver mirroring the state machine for rendering, and a oneshot receiver
/// carrying the terminal [`RedirectOutcome`]. Starting a new sequence aborts
/// the pending one, so a superseded identifier can never deliver an outcome —
/// its oneshot sender is dropped and the receiver observes a closed channel
/// instead of a navigation.
pub struct RedirectFlow {
    delay: Duration,
    pending: Option<PendingRedirect>,
}

impl RedirectFlow {
    /// Creates a flow whose sequences wait `delay` in the redirecting state
    /// before navigating.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Begins the redirect sequence for `identifier`, cancelling any pending
    /// sequence first.
    pub fn start(
        &mut self,
        identifier: &str,
    ) -> (
        watch::Receiver<RedirectState>,
        oneshot::Receiver<RedirectOutcome>,
    ) {
        self.cancel();

        let (state_tx, state_rx) = watch::channel(RedirectState::Idle);
        let (outcome_tx, outcome_rx) = oneshot::channel();
        let identifier = identifier.trim().to_string();
        let delay = self.delay;

        let handle = tokio::spawn(async move {
            let outcome = drive(&identifier, delay, &state_tx).await;
            let _ = outcome_tx.send(outcome);
        });
        self.pending = Some(PendingRedirect { handle });

        (state_rx, outcome_rx)
    }

    /// Aborts the pending sequence, suppressing its timer and navigation.
    ///
    /// A visit-accounting call the sequence already dispatched keeps running;
    /// it is detached and only ever logged.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }
}

impl Drop for RedirectFlow {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Runs one redirect sequence to its terminal outcome.
async fn drive(
    identifier: &str,
    delay: Duration,
    states: &watch::Sender<RedirectState>,
) -> RedirectOutcome {
    // No identifier: not-found without touching the resolver or the network.
    if identifier.is_empty() {
        let _ = states.send(RedirectState::NotFound);
        return RedirectOutcome::NotFound;
    }

    let _ = states.send(RedirectState::Resolving);
    let link = match resolver::resolve(identifier).await {
        Resolution::Resolved(link) => link,
        Resolution::NotFound => {
            let _ = states.send(RedirectState::NotFound);
            return RedirectOutcome::NotFound;
        }
    };

    let _ = states.send(RedirectState::Redirecting);

    // Best-effort visit accounting: dispatched, never awaited. The delay
    // below gates navigation, not this call.
    let visit_ident = link.display_ident().to_string();
    tokio::spawn(async move {
        if let Err(e) = shortener::visits::record_visit(&visit_ident).await {
            warning!("Could not record visit for {}: {}", visit_ident, e);
        }
    });

    tokio::time::sleep(delay).await;

    RedirectOutcome::External(utils::ensure_scheme(&link.original_url))
}
