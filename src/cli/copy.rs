use crate::{config, error, management::LinkStore, utils};

/// Prints the shareable short URL for an identifier.
///
/// The bare URL goes to stdout so it can be piped straight into a clipboard
/// tool, e.g. `snipcli copy my-page | xclip -selection clipboard`.
pub async fn copy(identifier: String, store: &mut LinkStore) {
    match store.link(&identifier).await {
        Ok(link) => {
            let short = utils::compose_short_url(&config::frontend_url(), link.display_ident());
            println!("{}", short);
        }
        Err(e) => {
            error!("No short link found for '{}'. Err: {}", identifier, e);
        }
    }
}
