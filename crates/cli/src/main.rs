//! `cantina` — café inventory from the terminal.
//!
//! Thin surface over the REST stores and the reconciliation workflow.
//! Backend location comes from `CANTINA_API_URL`.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};

use cantina_catalog::CatalogStore;
use cantina_core::ProductId;
use cantina_inventory::InventoryStore;
use cantina_ledger::{Direction, MoveFilter, MovementLedger};
use cantina_rest::{ClientConfig, RestCatalog, RestClient, RestInventory, RestLedger};
use cantina_stock::{
    Draft, RemovePolicy, SaveContext, StockService, available_ingredients, build_report,
};

#[derive(Parser)]
#[command(name = "cantina", about = "Café inventory management client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List products with on-hand stock and low-stock flags.
    List,
    /// Create or edit a product and reconcile its stock level.
    Save {
        /// Product id; omit to create a new product.
        #[arg(long)]
        id: Option<i64>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long, default_value_t = 0.0)]
        min_stock: f64,
        /// Desired on-hand quantity after the save.
        #[arg(long)]
        quantity: f64,
    },
    /// Delete a product.
    Remove {
        id: i64,
        /// Also delete the product's movement history.
        #[arg(long)]
        cascade: bool,
    },
    /// Stock-movement report, optionally bounded and filtered.
    Report {
        /// Start date (YYYY-MM-DD), inclusive.
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End date (YYYY-MM-DD), inclusive.
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,
    },
    /// Ask the backend for a dish using the ingredients in stock.
    Suggest,
}

#[derive(Copy, Clone, ValueEnum)]
enum DirectionArg {
    Entrance,
    Exit,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Entrance => Direction::Entrance,
            DirectionArg::Exit => Direction::Exit,
        }
    }
}

struct Stores {
    catalog: Arc<dyn CatalogStore>,
    inventory: Arc<dyn InventoryStore>,
    ledger: Arc<dyn MovementLedger>,
    client: RestClient,
}

fn connect() -> Result<Stores> {
    let config = ClientConfig::from_env();
    tracing::debug!(base_url = %config.base_url, "connecting to backend");
    let client = RestClient::new(config).context("building REST client")?;
    Ok(Stores {
        catalog: Arc::new(RestCatalog::new(client.clone())),
        inventory: Arc::new(RestInventory::new(client.clone())),
        ledger: Arc::new(RestLedger::new(client.clone())),
        client,
    })
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

fn day_end(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(23, 59, 59).unwrap().and_utc()
}

#[tokio::main]
async fn main() -> Result<()> {
    cantina_observability::init();
    let cli = Cli::parse();
    let stores = connect()?;

    match cli.command {
        Command::List => {
            let products = stores.catalog.list().await?;
            let inventory = stores.inventory.list().await?;
            let on_hand: HashMap<_, _> = inventory
                .iter()
                .map(|row| (row.product_id, row.quantity))
                .collect();

            println!("{:<6} {:<24} {:>10} {:>10}  {}", "id", "name", "stock", "min", "flag");
            for p in products {
                let quantity = on_hand.get(&p.id).copied().unwrap_or(0.0);
                let flag = if p.is_low_stock(quantity) { "LOW" } else { "" };
                println!(
                    "{:<6} {:<24} {:>10} {:>10}  {}",
                    p.id, p.name, quantity, p.min_stock, flag
                );
            }
        }
        Command::Save {
            id,
            name,
            category,
            unit,
            min_stock,
            quantity,
        } => {
            let service = StockService::new(
                stores.catalog.clone(),
                stores.inventory.clone(),
                stores.ledger.clone(),
            );
            let draft = Draft {
                id: id.map(ProductId::new),
                name,
                category,
                unit,
                min_stock,
                target_quantity: quantity,
            };
            let product = service.save(draft, SaveContext::default()).await?;
            println!("saved product {} ({})", product.id, product.name);
        }
        Command::Remove { id, cascade } => {
            let policy = if cascade {
                RemovePolicy::CascadeMoves
            } else {
                RemovePolicy::Orphan
            };
            let service = StockService::new(
                stores.catalog.clone(),
                stores.inventory.clone(),
                stores.ledger.clone(),
            )
            .with_remove_policy(policy);
            service.remove(ProductId::new(id)).await?;
            println!("removed product {id}");
        }
        Command::Report { from, to, direction } => {
            let filter = MoveFilter {
                from: from.map(day_start),
                to: to.map(day_end),
                direction: direction.map(Direction::from),
            };
            let rows = build_report(&stores.ledger, &stores.catalog, filter).await?;
            if rows.is_empty() {
                println!("no movements for the selected filters");
            }
            for row in rows {
                let m = &row.movement;
                println!(
                    "{:<6} {:<24} {:<9} {:>10} {}",
                    m.id,
                    row.product_name,
                    m.direction,
                    m.quantity,
                    m.recorded_at.format("%Y-%m-%d"),
                );
            }
        }
        Command::Suggest => {
            let products = stores.catalog.list().await?;
            let inventory = stores.inventory.list().await?;
            let ingredients = available_ingredients(&products, &inventory);
            if ingredients.is_empty() {
                println!("nothing in stock to cook with");
                return Ok(());
            }
            let suggestion = cantina_rest::suggest_meal(&stores.client, ingredients).await?;
            println!("{suggestion}");
        }
    }
    Ok(())
}
