use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config, error,
    management::LinkStore,
    success,
    types::CreateLinkRequest,
    utils,
};

/// Shortens a URL, optionally under a custom alias.
///
/// On success prints the shareable short URL composed from the public
/// front-end base. On failure the program exits with an error message and
/// nothing changes on the backend; the user may retry.
pub async fn create(url: String, name: Option<String>, store: &mut LinkStore) {
    let request = CreateLinkRequest {
        original_url: url,
        custom_name: name,
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Shortening URL...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    match store.create(&request).await {
        Ok(link) => {
            pb.finish_and_clear();
            let short = utils::compose_short_url(&config::frontend_url(), link.display_ident());
            success!("Short link created: {}", short);
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Could not create the link. Err: {}", e);
        }
    }
}
