use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use snipcli::{cli, config, management::LinkStore, utils, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Shorten a URL
    Create(CreateOptions),

    /// List registered short links
    List(ListOptions),

    /// Print the shareable short URL for a link
    Copy(CopyOptions),

    /// Delete a short link
    Delete(DeleteOptions),

    /// Resolve a short link and open it in the browser
    Open(OpenOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CreateOptions {
    /// Destination URL to shorten
    pub url: String,

    /// Custom alias for the short link
    #[clap(long, value_parser = utils::parse_identifier)]
    pub name: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Filter links by identifier or destination URL
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CopyOptions {
    /// Short code or custom alias
    #[clap(value_parser = utils::parse_identifier)]
    pub identifier: String,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteOptions {
    /// Short code or custom alias
    #[clap(value_parser = utils::parse_identifier)]
    pub identifier: String,
}

#[derive(Parser, Debug, Clone)]
pub struct OpenOptions {
    /// Short code or custom alias to resolve
    pub identifier: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment file. Err: {}", e);
    }

    let cli = Cli::parse();
    let mut store = LinkStore::new();

    match cli.command {
        Command::Create(opt) => cli::create(opt.url, opt.name, &mut store).await,
        Command::List(opt) => cli::list(opt.search, &mut store).await,
        Command::Copy(opt) => cli::copy(opt.identifier, &mut store).await,
        Command::Delete(opt) => cli::delete(opt.identifier, &mut store).await,
        Command::Open(opt) => cli::open(opt.identifier).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
