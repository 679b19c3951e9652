use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use campus::cli::Cli;
use campus::config::CampusConfig;
use campus::graphql::{build_schema, run_server};
use campus::logging;
use campus::storage::Store;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let mut config = CampusConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(data) = cli.data {
        config.store.path = data;
    }
    if let Some(docs) = cli.docs {
        config.server.docs = docs;
    }

    let store = Arc::new(Store::open(&config.store.path, config.store.id_length));
    let schema = build_schema(store.clone());

    println!(
        "Starting GraphQL server on http://localhost:{}",
        config.server.port
    );
    println!(
        "GraphiQL UI: http://localhost:{}/graphql",
        config.server.port
    );

    let result = tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, config.server.port, &config.server.docs).await });

    store.close();
    result
}
