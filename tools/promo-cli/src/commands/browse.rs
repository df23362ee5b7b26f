//! Browse command: load a catalog and print the filtered, sorted view.

use anyhow::{anyhow, Context, Result};
use console::style;

use promo_catalog::prelude::*;

use super::BrowseArgs;
use crate::config::CliConfig;
use crate::output::{discount_badge, format_price, Output};

/// Run the browse command.
pub fn run(args: BrowseArgs, config: &CliConfig, output: &Output) -> Result<()> {
    let input = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read catalog file: {}", args.file))?;

    let mut store = CatalogStore::new();
    let count = store.ingest(&input)?;
    output.debug(&format!("{} products loaded from {}", count, args.file));

    apply_query(&mut store, &args, config)?;
    let view = store.view();

    if output.is_json() {
        output.json_value(&view);
        return Ok(());
    }

    render(&view, store.params().view_mode, output);
    Ok(())
}

/// Start from the catalog-derived defaults, then layer config and flags.
fn apply_query(store: &mut CatalogStore, args: &BrowseArgs, config: &CliConfig) -> Result<()> {
    store.reset_filters();

    let sort = match args.sort.as_deref() {
        Some(s) => SortKey::from_str(s).ok_or_else(|| anyhow!("unknown sort key: {s}"))?,
        None => config.display.sort,
    };
    let order = match args.order.as_deref() {
        Some(s) => SortDirection::from_str(s).ok_or_else(|| anyhow!("unknown sort direction: {s}"))?,
        None => config.display.order,
    };
    let view = match args.view.as_deref() {
        Some(s) => ViewMode::from_str(s).ok_or_else(|| anyhow!("unknown view mode: {s}"))?,
        None => config.display.view,
    };
    store.set_sort(sort, order);
    store.set_view_mode(view);

    if let Some(search) = &args.search {
        store.set_search_text(search);
    }
    if let Some(category) = &args.category {
        store.set_category(CategoryFilter::from_name(category));
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let span = store.price_span();
        store.set_price_range(
            args.min_price.unwrap_or(span.min),
            args.max_price.unwrap_or(span.max),
        );
    }

    Ok(())
}

fn render(view: &CatalogView, mode: ViewMode, output: &Output) {
    output.header(&format!("{} Products Found", view.result_count));
    if view.max_discount > 0 {
        output.info(&format!("Showing deals up to {}% off", view.max_discount));
    }
    output.kv("Categories", &view.categories.join(", "));

    if view.is_empty() {
        output.info("No products found. Try adjusting your search criteria or filters.");
        return;
    }

    println!();
    match mode {
        ViewMode::Grid => render_grid(view),
        ViewMode::List => render_list(view),
    }
}

/// Compact card per product: name, price, and the discount badge.
fn render_grid(view: &CatalogView) {
    let name_width = view
        .items
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0)
        .min(40);

    for product in &view.items {
        // Pad before styling so the escape codes do not skew the columns.
        let padded = format!("{:name_width$}", product.name);
        let mut line = format!(
            "  {}  {:>9}",
            style(padded).bold(),
            format_price(product.price),
        );
        if let Some(discount) = product.discount {
            line.push_str(&format!("  {}", discount_badge(discount)));
        }
        println!("{}", line);
    }
}

/// One block per product with the full record: prices, category, link,
/// and description.
fn render_list(view: &CatalogView) {
    for product in &view.items {
        let mut price_line = format_price(product.price);
        if let Some(original) = product.original_price {
            price_line.push_str(&format!(" (was {})", format_price(original)));
        }
        if let Some(discount) = product.discount {
            price_line.push_str(&format!(" {}", discount_badge(discount)));
        }

        println!("  {}", style(&product.name).bold());
        println!("    {}  {}", price_line, style(&product.kind).cyan());
        if let Some(description) = &product.description {
            println!("    {}", style(description).dim());
        }
        println!("    {}", style(&product.link).underlined());
        println!();
    }
}
