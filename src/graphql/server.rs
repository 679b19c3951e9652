use std::path::Path;

use anyhow::Result;
use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use super::schema::CampusSchema;

/// Serves the GraphQL endpoint until ctrl-c.
///
/// - `POST /graphql`: query/mutation execution
/// - `GET /graphql`: GraphiQL console
/// - `GET /docs`: static documentation directory (read-only)
/// - `GET /`: landing page
pub async fn run_server(schema: CampusSchema, port: u16, docs_path: &Path) -> Result<()> {
    let app = Router::new()
        .route("/graphql", get(graphiql).post_service(GraphQL::new(schema)))
        .nest_service("/docs", ServeDir::new(docs_path))
        .route("/", get(index))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "GraphQL server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

async fn index() -> Html<&'static str> {
    Html(
        "<h1>Campus</h1>\
         <p>GraphQL endpoint: <a href=\"/graphql\">/graphql</a></p>\
         <p>Documentation: <a href=\"/docs\">/docs</a></p>",
    )
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutdown signal received");
}
