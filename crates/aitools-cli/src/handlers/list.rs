//! List command handler.

use aitools_core::ListQuery;
use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::print_model_page;

/// Arguments of the list command.
#[derive(Debug, Clone)]
pub struct ListArgs {
    pub filter: String,
    pub page: usize,
    pub page_size: usize,
    pub json: bool,
}

impl ListArgs {
    fn query(&self) -> ListQuery {
        ListQuery::new(self.page, self.page_size).with_filter(&self.filter)
    }
}

/// Execute the list command.
pub async fn execute(ctx: &CliContext, args: &ListArgs) -> Result<()> {
    let page = ctx
        .app()
        .listing()
        .search(&args.query())
        .await
        .map_err(CliError::from)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.total == 0 {
        println!("No models found.");
        println!("Use 'aitools pull <name>' to pull your first model.");
        return Ok(());
    }

    println!(
        "Showing {} of {} model(s), page {}:\n",
        page.items.len(),
        page.total,
        args.page.max(1)
    );
    print_model_page(&page);
    Ok(())
}
