use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::LevelFilter;
use tokio::io::{AsyncBufReadExt, BufReader};

use storefront_model::Product;
use storefront_search::domains::search::{
    LookupSource, Message, SearchDomain, TRENDING_SEARCHES,
};
use storefront_search::infra::{
    ApiClient, FileStore, HistoryNavigator, KeyValueStore, MemoryStore,
    SearchConfig,
};

#[derive(Parser)]
#[command(
    name = "storefront-search",
    about = "Search the storefront catalog from the terminal"
)]
struct Cli {
    /// Catalog API base URL (overrides config and STOREFRONT_SERVER_URL)
    #[arg(long, global = true)]
    server: Option<String>,
    /// Key-value file holding recent searches
    #[arg(long, global = true)]
    storage: Option<PathBuf>,
    /// Keep recent searches in memory only
    #[arg(long, global = true)]
    ephemeral: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a single lookup and print the results
    Search { query: String },
    /// Commit a query as if Enter was pressed
    Submit { query: String },
    /// Show recent searches
    Recent {
        /// Forget them instead
        #[arg(long)]
        clear: bool,
    },
    /// Show trending searches
    Trending,
    /// Interactive search bar reading queries from stdin
    Shell,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter_module("storefront_search", LevelFilter::Debug)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();

    let mut config = SearchConfig::load();
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    if let Some(storage) = cli.storage {
        config.storage_path = Some(storage);
    }

    let store = open_store(&config, cli.ephemeral);
    let catalog = Arc::new(
        ApiClient::new(config.server_url.clone())
            .context("Failed to build catalog client")?,
    );
    let navigator = Arc::new(HistoryNavigator::new());

    let (mut domain, receiver) = SearchDomain::from_config(
        &config,
        catalog,
        store,
        navigator.clone(),
    );

    match cli.command {
        Command::Search { query } => {
            let outcome = domain.service.lookup(&query).await;
            print_results(&outcome.results, Some(outcome.source));
        }
        Command::Submit { query } => {
            domain.update(Message::SelectSuggestion(query));
            match navigator.current() {
                Some(path) => println!("{path}"),
                None => println!("(nothing to submit)"),
            }
        }
        Command::Recent { clear: true } => {
            domain
                .clear_recent()
                .context("Failed to clear recent searches")?;
        }
        Command::Recent { clear: false } => {
            for query in domain.recent().entries() {
                println!("{query}");
            }
        }
        Command::Trending => {
            for term in TRENDING_SEARCHES {
                println!("{term}");
            }
        }
        Command::Shell => run_shell(domain, receiver, &navigator).await?,
    }

    Ok(())
}

fn open_store(config: &SearchConfig, ephemeral: bool) -> Arc<dyn KeyValueStore> {
    if ephemeral {
        return Arc::new(MemoryStore::new());
    }

    match config.resolved_storage_path() {
        Some(path) => {
            log::debug!("Recent searches stored at {}", path.display());
            Arc::new(FileStore::new(path))
        }
        None => {
            log::warn!(
                "No data directory available, recent searches will not persist"
            );
            Arc::new(MemoryStore::new())
        }
    }
}

async fn run_shell(
    mut domain: SearchDomain,
    mut receiver: tokio::sync::mpsc::UnboundedReceiver<Message>,
    navigator: &HistoryNavigator,
) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut visited = navigator.visited().len();

    println!(
        "Type to search. Commands: :submit :next :prev :enter :clear :quit"
    );
    print_suggestions(&domain);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read stdin")? else {
                    break;
                };

                match line.trim() {
                    ":quit" => break,
                    ":submit" => domain.update(Message::Submit),
                    ":next" => {
                        domain.update(Message::SelectNext);
                        print_selection(&domain);
                    }
                    ":prev" => {
                        domain.update(Message::SelectPrevious);
                        print_selection(&domain);
                    }
                    ":enter" => domain.update(Message::SelectCurrent),
                    ":clear" => {
                        domain.update(Message::ClearSearch);
                        print_suggestions(&domain);
                    }
                    _ => feed_keystrokes(&mut domain, &line),
                }

                let now_visited = navigator.visited();
                if now_visited.len() > visited {
                    visited = now_visited.len();
                    if let Some(path) = now_visited.last() {
                        println!("-> {path}");
                    }
                    print_suggestions(&domain);
                }
            }
            Some(message) = receiver.recv() => {
                let seq_before = domain.state.latest_seq();
                let settled = matches!(message, Message::ResultsReceived { .. });
                domain.update(message);

                // A cache hit settles during the debounce itself
                let dispatched = domain.state.latest_seq() != seq_before;
                if (settled || dispatched) && !domain.state.is_searching {
                    print_results(&domain.state.results, domain.state.last_source);
                }
            }
        }
    }

    Ok(())
}

/// Feed a line one character at a time, as typing would
fn feed_keystrokes(domain: &mut SearchDomain, line: &str) {
    if line.is_empty() {
        domain.update(Message::UpdateQuery(String::new()));
        print_suggestions(domain);
        return;
    }

    let mut typed = String::with_capacity(line.len());
    for ch in line.chars() {
        typed.push(ch);
        domain.update(Message::UpdateQuery(typed.clone()));
    }
}

fn print_results(results: &[Product], source: Option<LookupSource>) {
    let source = source.map(|s| s.to_string()).unwrap_or_default();
    if results.is_empty() {
        println!("No results ({source})");
        return;
    }

    println!("{} results ({source})", results.len());
    for product in results {
        print_product(product);
    }
}

fn print_product(product: &Product) {
    let company = product.company.as_deref().unwrap_or("-");
    println!(
        "  [{}] {} | {} | {} | {:.2}",
        product.id, product.title, product.category.name, company, product.price
    );
}

fn print_selection(domain: &SearchDomain) {
    match domain.state.get_selected() {
        Some(product) => print_product(product),
        None => println!("(no selection)"),
    }
}

fn print_suggestions(domain: &SearchDomain) {
    let suggestions = domain.suggestions();
    if !suggestions.recent.is_empty() {
        println!("Recent: {}", suggestions.recent.join(", "));
    }
    println!("Trending: {}", suggestions.trending.join(", "));
}
