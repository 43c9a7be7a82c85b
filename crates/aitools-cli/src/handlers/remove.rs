//! Remove command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the rm command.
///
/// Succeeds for names the runtime does not know; their job logs are still
/// cleared so failed pulls disappear from `list`.
pub async fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    ctx.app()
        .removal()
        .delete(name)
        .await
        .map_err(CliError::from)?;

    println!("Removed {name}.");
    Ok(())
}
