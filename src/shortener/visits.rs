use reqwest::Client;

use crate::config;

/// Increments the visit counter for a short link.
///
/// Issues `POST /links/{identifier}/visit` with an empty body. The count is
/// advisory on the client side; the authoritative number lives on the
/// backend. Callers in the redirect flow dispatch this without awaiting and
/// only observe the result for logging.
pub async fn record_visit(identifier: &str) -> Result<(), reqwest::Error> {
    let api_url = format!(
        "{uri}/links/{identifier}/visit",
        uri = &config::api_url(),
        identifier = identifier
    );

    let client = Client::new();
    client.post(&api_url).send().await?.error_for_status()?;

    Ok(())
}
