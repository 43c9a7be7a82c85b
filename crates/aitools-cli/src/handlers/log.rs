//! Log command handler.

use aitools_core::PullStatus;
use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::status_label;

/// Execute the log command.
pub async fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    let Some(content) = ctx
        .app()
        .detail()
        .load_pull_log(name)
        .await
        .map_err(CliError::from)?
    else {
        println!("No pull recorded for {name}.");
        return Ok(());
    };

    print!("{content}");
    if !content.ends_with('\n') {
        println!();
    }
    println!(
        "\n[{name}: {}]",
        status_label(Some(PullStatus::from_log(&content)))
    );
    Ok(())
}
