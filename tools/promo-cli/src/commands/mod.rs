//! CLI command implementations.

pub mod browse;
pub mod sample;
pub mod validate;

use clap::Args;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Path to the catalog JSON file.
    pub file: String,

    /// Free-text search over name, description, and type.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category facet to restrict to ("all" disables the filter).
    #[arg(long)]
    pub category: Option<String>,

    /// Lower price bound.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Upper price bound.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Sort key: name, price, or discount.
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort direction: asc or desc.
    #[arg(long)]
    pub order: Option<String>,

    /// View mode: grid or list.
    #[arg(long)]
    pub view: Option<String>,
}

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the catalog JSON file.
    pub file: String,
}

/// Arguments for the sample command.
#[derive(Args)]
pub struct SampleArgs {
    /// Write the sample to this path instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}
