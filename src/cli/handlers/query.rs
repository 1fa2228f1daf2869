use anyhow::Result;

use super::CommandContext;
use super::utils::run_and_print;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    run_and_print(
        &ctx.schema(),
        query,
        variables,
        ctx.config.server.expose_errors,
    )
}
