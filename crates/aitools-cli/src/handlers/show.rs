//! Show command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the show command.
pub async fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    let detail = ctx
        .app()
        .detail()
        .load_detail(name)
        .await
        .map_err(CliError::from)?;

    if detail.is_empty() {
        println!("The runtime is not running.");
    } else {
        print!("{detail}");
    }
    Ok(())
}
