use anyhow::Result;

use super::CommandContext;
use super::utils::run_and_print;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    run_and_print(
        &ctx.schema(),
        document,
        variables,
        ctx.config.server.expose_errors,
    )
}
