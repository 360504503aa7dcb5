use reqwest::Client;

use crate::{
    config,
    types::{CreateLinkRequest, ShortLink},
};

/// Creates a new short link on the backend.
///
/// Issues `POST /links` with the destination URL and optional custom alias.
/// The backend owns code generation; the returned record carries the
/// generated code (and the alias, when one was requested).
///
/// # Arguments
///
/// * `request` - Destination URL and optional custom alias
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(ShortLink)` - The freshly created record
/// - `Err(reqwest::Error)` - Network error or non-2xx response (e.g. alias
///   already taken)
pub async fn create_link(request: &CreateLinkRequest) -> Result<ShortLink, reqwest::Error> {
    let api_url = format!("{uri}/links", uri = &config::api_url());

    let client = Client::new();
    let response = client
        .post(&api_url)
        .json(request)
        .send()
        .await?
        .error_for_status()?;

    let link = response.json::<ShortLink>().await?;
    Ok(link)
}

/// Retrieves all short links from the backend.
///
/// Issues `GET /links`. The returned records are unordered; callers sort
/// for display.
pub async fn list_links() -> Result<Vec<ShortLink>, reqwest::Error> {
    let api_url = format!("{uri}/links", uri = &config::api_url());

    let client = Client::new();
    let response = client.get(&api_url).send().await?.error_for_status()?;

    let links = response.json::<Vec<ShortLink>>().await?;
    Ok(links)
}

/// Looks up a single short link by its identifier.
///
/// Issues `GET /links/{identifier}`. A miss is a 404 and surfaces as an
/// error; lookups are never retried, a miss is terminal.
pub async fn get_link(identifier: &str) -> Result<ShortLink, reqwest::Error> {
    let api_url = format!(
        "{uri}/links/{identifier}",
        uri = &config::api_url(),
        identifier = identifier
    );

    let client = Client::new();
    let response = client.get(&api_url).send().await?.error_for_status()?;

    let link = response.json::<ShortLink>().await?;
    Ok(link)
}

/// Deletes a short link by its identifier.
///
/// Issues `DELETE /links/{identifier}`; the backend responds with an empty
/// 2xx body on success.
pub async fn delete_link(identifier: &str) -> Result<(), reqwest::Error> {
    let api_url = format!(
        "{uri}/links/{identifier}",
        uri = &config::api_url(),
        identifier = identifier
    );

    let client = Client::new();
    client.delete(&api_url).send().await?.error_for_status()?;

    Ok(())
}
