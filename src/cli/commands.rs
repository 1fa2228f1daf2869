use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "carpark")]
#[command(
    author,
    version,
    about = "An in-memory car park inventory served over GraphQL"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .carpark.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long, env = "CARPARK_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long, env = "CARPARK_PORT")]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against a freshly stocked car park
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL
    Schema,
}
