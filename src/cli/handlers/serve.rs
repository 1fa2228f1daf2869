use anyhow::Result;
use colored::Colorize;

use crate::graphql::run_server;

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(h) = host {
        ctx.config.server.host = h;
    }
    if let Some(p) = port {
        ctx.config.server.port = p;
    }

    let settings = &ctx.config.server;
    let url = format!("http://{}/graphql", settings.address());
    println!("{} {}", "Starting GraphQL server on".green(), url.cyan());
    if settings.graphiql {
        println!("GraphiQL: {}", url);
    }
    {
        let car_park = ctx.car_park.read();
        tracing::info!(
            cars = car_park.len(),
            id_mode = ?car_park.id_mode(),
            expose_errors = settings.expose_errors,
            "Car park ready"
        );
    }

    let schema = ctx.schema();
    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, settings).await })?;
    Ok(())
}
