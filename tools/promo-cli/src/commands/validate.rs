//! Validate command: parse a catalog file without displaying it.

use anyhow::{Context, Result};

use promo_catalog::prelude::parse_catalog;

use super::ValidateArgs;
use crate::output::Output;

/// Run the validate command.
pub fn run(args: ValidateArgs, output: &Output) -> Result<()> {
    let input = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read catalog file: {}", args.file))?;

    // Ingestion errors surface verbatim; the message already names the
    // offending element.
    let products = parse_catalog(&input)?;

    if output.is_json() {
        output.json_value(&serde_json::json!({
            "valid": true,
            "count": products.len(),
        }));
        return Ok(());
    }

    output.success(&format!(
        "{} products validated successfully.",
        products.len()
    ));
    Ok(())
}
