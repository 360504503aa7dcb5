use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{error, management::LinkStore, success};

/// Deletes a short link by identifier.
///
/// On failure the program exits with an error message; the link and the
/// cached listing are left untouched so the user may retry.
pub async fn delete(identifier: String, store: &mut LinkStore) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Deleting short link...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match store.delete(&identifier).await {
        Ok(()) => {
            pb.finish_and_clear();
            success!("Deleted {}", identifier);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Could not delete '{}'. Err: {}", identifier, e);
        }
    }
}
