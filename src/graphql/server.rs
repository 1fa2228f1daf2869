//! HTTP transport: a single `/graphql` route on axum.
//!
//! `POST /graphql` takes `{ "query": ..., "variables": ..., "operationName": ... }`
//! and answers `{ "data": ..., "errors": [...] }`. The `errors` key is left
//! out when there are none, or when the server is configured not to expose
//! them. `GET /graphql` serves GraphiQL when enabled.

use async_graphql::http::GraphiQLSource;
use async_graphql::{Request, ServerError, Value, Variables};
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::Result;

use super::schema::CarParkSchema;

const GRAPHQL_PATH: &str = "/graphql";

/// Request body accepted on `POST /graphql`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLBody {
    pub query: Option<String>,
    pub operation_name: Option<String>,
    pub variables: Option<serde_json::Value>,
}

impl GraphQLBody {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn with_variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }

    fn into_request(self) -> Request {
        // A missing query runs as an empty document so the engine reports
        // its own parse error.
        let mut request = Request::new(self.query.unwrap_or_default());
        if let Some(name) = self.operation_name {
            request = request.operation_name(name);
        }
        if let Some(variables) = self.variables {
            request = request.variables(Variables::from_json(variables));
        }
        request
    }
}

/// Response body for `POST /graphql`.
#[derive(Debug, Serialize)]
pub struct GraphQLReply {
    pub data: Value,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ServerError>,
}

/// Execute `body` against `schema`, dropping engine errors unless
/// `expose_errors` is set.
pub async fn execute(schema: &CarParkSchema, body: GraphQLBody, expose_errors: bool) -> GraphQLReply {
    let response = schema.execute(body.into_request()).await;

    if !response.errors.is_empty() {
        tracing::debug!(
            errors = response.errors.len(),
            first = %response.errors[0].message,
            "GraphQL execution reported errors"
        );
    }

    GraphQLReply {
        data: response.data,
        errors: if expose_errors {
            response.errors
        } else {
            Vec::new()
        },
    }
}

#[derive(Clone)]
struct ServerState {
    schema: CarParkSchema,
    expose_errors: bool,
}

pub fn router(schema: CarParkSchema, settings: &ServerSettings) -> Router {
    let state = ServerState {
        schema,
        expose_errors: settings.expose_errors,
    };

    let route = if settings.graphiql {
        post(graphql_handler).get(graphiql_handler)
    } else {
        post(graphql_handler)
    };

    Router::new().route(GRAPHQL_PATH, route).with_state(state)
}

async fn graphql_handler(
    State(state): State<ServerState>,
    Json(body): Json<GraphQLBody>,
) -> Json<GraphQLReply> {
    Json(execute(&state.schema, body, state.expose_errors).await)
}

async fn graphiql_handler() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn run_server(schema: CarParkSchema, settings: &ServerSettings) -> Result<()> {
    let listener = TcpListener::bind(settings.address()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "GraphQL server listening");

    axum::serve(listener, router(schema, settings))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
