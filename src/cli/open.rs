use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, info,
    redirect::{RedirectFlow, RedirectOutcome, RedirectState},
    success, warning,
};

/// Resolves a short link and opens its destination in the default browser.
///
/// Runs the redirect flow for `identifier`: the spinner mirrors the flow's
/// observable states, the redirecting indicator stays visible for the full
/// configured delay, and the terminal outcome either launches the browser on
/// the normalized destination URL or renders the not-found view. An empty
/// identifier goes straight to the not-found view without any network call.
pub async fn open(identifier: String) {
    let mut flow = RedirectFlow::new(config::redirect_delay());
    let (mut states, mut outcome_rx) = flow.start(&identifier);

    let pb = ProgressBar::new_spinner();
    pb.set_message("Resolving short link...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let outcome = loop {
        tokio::select! {
            res = &mut outcome_rx => break res,
            changed = states.changed() => {
                if changed.is_err() {
                    // Sequence finished and dropped its state channel; the
                    // outcome is already on its way.
                    break (&mut outcome_rx).await;
                }
                match *states.borrow_and_update() {
                    RedirectState::Resolving => pb.set_message("Resolving short link..."),
                    RedirectState::Redirecting => pb.set_message("Redirecting..."),
                    _ => {}
                }
            }
        }
    };
    pb.finish_and_clear();

    match outcome {
        Ok(RedirectOutcome::External(url)) => {
            if webbrowser::open(&url).is_err() {
                warning!(
                    "Failed to open browser. Please navigate to the following URL manually:\n{}",
                    url
                );
            } else {
                success!("Opening {}", url);
            }
        }
        Ok(RedirectOutcome::NotFound) => not_found(&identifier),
        // Sequence was superseded or cancelled; nothing navigates.
        Err(_) => {}
    }
}

/// The internal not-found view. Terminal within the app: no external
/// navigation happens, and the process exits non-zero.
fn not_found(identifier: &str) {
    if identifier.trim().is_empty() {
        warning!("No short link identifier given.");
    } else {
        warning!(
            "Short link '{}' does not exist or is no longer available.",
            identifier
        );
    }
    info!("Run snipcli list to see your registered links.");
    std::process::exit(1);
}
