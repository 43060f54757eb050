use std::io::Write;

use clap::Args;
use orderup::{catalog::Catalog, receipt::write_menu};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Text to look for in item names (case-insensitive)
    query: String,
}

pub(super) fn run(
    args: &SearchArgs,
    catalog: &Catalog,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let results = catalog.search(&args.query);

    if results.is_empty() {
        writeln!(out, "No menu items match {:?}.", args.query)?;

        return Ok(());
    }

    write_menu(out, results, catalog.currency())?;

    Ok(())
}
