//! Pull command handler.
//!
//! The pull task belongs to this process, so the handler waits for it; the
//! runtime's progress is mirrored to stdout while it runs.

use aitools_core::PullOutcome;
use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the pull command.
pub async fn execute(ctx: &CliContext, name: &str) -> Result<()> {
    let Some(job) = ctx
        .app()
        .pulls()
        .create(name)
        .await
        .map_err(CliError::from)?
    else {
        println!("The runtime is not running; nothing was pulled.");
        return Ok(());
    };

    let log_path = job.log_path().to_path_buf();
    println!("Pulling {} (log: {})", job.name(), log_path.display());

    match job.wait().await {
        PullOutcome::Succeeded => {
            println!("Pulled {name}.");
            Ok(())
        }
        PullOutcome::Failed => Err(CliError::Runtime(format!(
            "pull of {name} failed, see {}",
            log_path.display()
        ))
        .into()),
    }
}
