use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use orderup::{
    cart::CartError,
    catalog::Catalog,
    checkout::CheckoutError,
    fixtures::{FixtureError, load_catalog},
    receipt::ReceiptError,
};
use thiserror::Error;
use tracing::debug;

use crate::cli::logging::LoggingConfig;

mod logging;
mod menu;
mod order;
mod search;

#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),

    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    #[error("Unknown menu item: {0}")]
    UnknownItem(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid item {0:?}; expected NAME or NAME=QUANTITY")]
    InvalidItemArg(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to initialise logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),
}

#[derive(Debug, Parser)]
#[command(name = "orderup", about = "Cafeteria ordering from the terminal", long_about = None)]
pub(crate) struct Cli {
    /// YAML menu to use instead of the built-in cafeteria menu
    #[arg(long, env = "ORDERUP_MENU", global = true)]
    menu: Option<PathBuf>,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List categories, or the items of one category
    Menu(menu::MenuArgs),

    /// Find menu items by name
    Search(search::SearchArgs),

    /// Build a cart and optionally check out
    Order(order::OrderArgs),
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), CliError> {
        logging::init_subscriber(&self.logging)?;

        let catalog = match &self.menu {
            Some(path) => load_catalog(path)?,
            None => Catalog::cafeteria(),
        };

        debug!(
            menu = ?self.menu,
            categories = catalog.categories().count(),
            "catalog loaded"
        );

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Menu(args) => menu::run(&args, &catalog, &mut out),
            Commands::Search(args) => search::run(&args, &catalog, &mut out),
            Commands::Order(args) => order::run(&args, &catalog, &mut out),
        }
    }
}
