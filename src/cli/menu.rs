use std::io::Write;

use clap::Args;
use orderup::{catalog::Catalog, receipt::write_menu};

use super::CliError;

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    /// Show the items of this category
    #[arg(short, long)]
    category: Option<String>,
}

pub(super) fn run(
    args: &MenuArgs,
    catalog: &Catalog,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let Some(name) = args.category.as_deref() else {
        for category in catalog.categories() {
            writeln!(out, "{} ({} items)", category.name(), category.items().len())?;
        }

        return Ok(());
    };

    if !catalog.categories().any(|category| category.name() == name) {
        return Err(CliError::UnknownCategory(name.to_string()));
    }

    write_menu(out, catalog.category(name), catalog.currency())?;

    Ok(())
}
