//! Command Line Interface for the DEX analytics page loaders.
use anyhow::Result;
use clap::{Parser, Subcommand};
use dex_analytics_data::pages::{
    get_bar_page_data, get_gainers, get_losers, get_pair, get_pairs, get_pools_page_data,
    get_token_pairs,
};
use dex_analytics_data::{GraphClient, SubgraphConfig};
use dex_analytics_domain::entities::Pair;
use dex_analytics_domain::metrics::change_since;
use dex_analytics_domain::numeric::decimal_of;
use dotenv::dotenv;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dex-analytics")]
#[command(about = "Loads DEX analytics pages from the subgraphs", long_about = None)]
struct Cli {
    /// Keep at most this many entries of every list
    #[arg(short, long, global = true)]
    limit: Option<usize>,

    /// Print list pages as a table instead of JSON
    #[arg(short, long, global = true)]
    table: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Staking bar overview
    Bar,
    /// Masterchef pool with its liquidity pair and history
    Pool {
        /// Pool id
        id: String,
    },
    /// Pair with its one and two day counters
    Pair {
        /// Pair address
        id: String,
    },
    /// Top pairs with their one and seven day counters
    Pairs,
    /// Pairs of a token
    TokenPairs {
        /// Token address
        id: String,
    },
    /// Pairs ranked for the gainers list
    Gainers,
    /// Pairs ranked for the losers list
    Losers,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = SubgraphConfig::from_env()?;
    info!(exchange = %config.exchange_url, "Using subgraphs");
    let client = GraphClient::http(config)?;

    match &cli.command {
        Commands::Bar => print_json(&get_bar_page_data(&client).await?, cli.limit)?,
        Commands::Pool { id } => print_json(&get_pools_page_data(&client, id).await?, cli.limit)?,
        Commands::Pair { id } => print_json(&get_pair(&client, id).await?, cli.limit)?,
        Commands::Pairs => {
            let page = get_pairs(&client).await?;
            if cli.table {
                print_header(&["Pair", "Reserve USD", "Volume USD", "Volume 24h"]);
                for listing in limited(&page.pairs, cli.limit) {
                    let volume = decimal_of(listing.pair.volume_usd.as_ref());
                    print_row(
                        &listing.pair,
                        &[
                            decimal_of(listing.pair.reserve_usd.as_ref()),
                            volume,
                            change_since(volume, decimal_of(listing.one_day.volume_usd.as_ref())),
                        ],
                    );
                }
            } else {
                print_json(&page, cli.limit)?;
            }
        }
        Commands::TokenPairs { id } => {
            print_json(&get_token_pairs(&client, id).await?, cli.limit)?;
        }
        Commands::Gainers => {
            let page = get_gainers(&client).await?;
            if cli.table {
                print_header(&["Pair", "Volume 24h", "Fees 24h", "Reserve 24h"]);
                for gainer in limited(&page.pairs, cli.limit) {
                    print_row(
                        &gainer.pair,
                        &[
                            gainer.volume_usd_gained,
                            gainer.fees_usd_gained,
                            gainer.reserve_usd_gained,
                        ],
                    );
                }
            } else {
                print_json(&page, cli.limit)?;
            }
        }
        Commands::Losers => {
            let page = get_losers(&client).await?;
            if cli.table {
                print_header(&["Pair", "Volume 24h", "Fees 24h", "Reserve 24h"]);
                for loser in limited(&page.pairs, cli.limit) {
                    print_row(
                        &loser.pair,
                        &[
                            loser.volume_usd_lost,
                            loser.fees_usd_lost,
                            loser.reserve_usd_lost,
                        ],
                    );
                }
            } else {
                print_json(&page, cli.limit)?;
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(page: &T, limit: Option<usize>) -> Result<()> {
    let mut value = serde_json::to_value(page)?;
    if let Some(limit) = limit {
        truncate_lists(&mut value, limit);
    }
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Trims every array held by the page or its nested objects.
fn truncate_lists(value: &mut Value, limit: usize) {
    if let Value::Object(map) = value {
        for field in map.values_mut() {
            match field {
                Value::Array(items) => items.truncate(limit),
                nested @ Value::Object(_) => truncate_lists(nested, limit),
                _ => {}
            }
        }
    }
}

fn limited<T>(items: &[T], limit: Option<usize>) -> &[T] {
    &items[..limit.unwrap_or(items.len()).min(items.len())]
}

fn print_header(columns: &[&str]) {
    let line: Vec<String> = columns.iter().map(|c| format!("{c:<20}")).collect();
    println!("{}", line.join(" | "));
    println!("{}", "-".repeat(23 * columns.len()));
}

fn print_row(pair: &Pair, values: &[Option<Decimal>]) {
    let name = pair
        .extra
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or(&pair.id);
    let mut line = vec![format!("{name:<20}")];
    line.extend(values.iter().map(|value| match value {
        Some(value) => format!("{:<20}", value.round_dp(2)),
        None => format!("{:<20}", "-"),
    }));
    println!("{}", line.join(" | "));
}
