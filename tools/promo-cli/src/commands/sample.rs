//! Sample command: the "need an example?" affordance.

use anyhow::{Context, Result};

use promo_catalog::prelude::sample_document;

use super::SampleArgs;
use crate::output::Output;

/// Run the sample command.
pub fn run(args: SampleArgs, output: &Output) -> Result<()> {
    match &args.output {
        Some(path) => {
            std::fs::write(path, sample_document())
                .with_context(|| format!("Failed to write sample catalog: {}", path))?;
            output.success(&format!("Sample catalog written to {}", path));
        }
        None => print!("{}", sample_document()),
    }
    Ok(())
}
