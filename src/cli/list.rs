use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error, info,
    management::LinkStore,
    types::LinkTableRow,
    utils,
};

/// Renders the registered short links as a table.
///
/// Links are listed newest-first; `search` filters by substring over the
/// identifier and the destination URL. Visit counters are advisory display
/// values reported by the backend.
pub async fn list(search: Option<String>, store: &mut LinkStore) {
    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching links...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut links = match store.links().await {
        Ok(links) => {
            pb.finish_and_clear();
            links
        }
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch links. Err: {}", e);
        }
    };

    utils::sort_links(&mut links);
    if let Some(term) = search {
        utils::filter_links(&mut links, &term);
    }

    if links.is_empty() {
        info!("No links found. Create one with snipcli create <url>.");
        return;
    }

    let frontend = config::frontend_url();
    let rows: Vec<LinkTableRow> = links
        .into_iter()
        .map(|link| {
            let short = utils::compose_short_url(&frontend, link.display_ident());
            LinkTableRow {
                short,
                original: link.original_url,
                visits: link
                    .access_count
                    .map(|count| count.to_string())
                    .unwrap_or_else(|| "-".to_string()),
                created: link.created_at.format("%Y-%m-%d %H:%M").to_string(),
            }
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
