//! HTTP routes: GraphQL endpoint, GraphiQL explorer, health check.

use async_graphql::http::GraphiQLSource;
use async_graphql::parser::types::OperationType;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Instrument;
use uuid::Uuid;

use crate::schema::CatalogSchema;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(Clone)]
struct AppState {
    schema: CatalogSchema,
    graphiql: bool,
}

/// Build the router. `graphiql` controls whether browser `GET /graphql`
/// requests get the explorer page.
pub fn router(schema: CatalogSchema, graphiql: bool) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphql_get).post(graphql_post))
        .route("/health", get(health_check))
        .with_state(AppState { schema, graphiql })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

async fn graphql_post(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    execute(&state.schema, req.into_inner()).await.into()
}

/// GET runs queries from the query string. Browsers asking for HTML get
/// the explorer instead, and mutations are refused with 405.
async fn graphql_get(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(raw): RawQuery,
) -> Response {
    if state.graphiql && accepts_html(&headers) {
        return Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish()).into_response();
    }

    let Some(qs) = raw.filter(|q| !q.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "Must provide query string.").into_response();
    };

    let request = match async_graphql::http::parse_query_string(&qs) {
        Ok(request) => request,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };

    if selects_mutation(&request) {
        tracing::debug!("Rejected mutation sent over GET");
        let body = json!({
            "errors": [{"message": "Can only perform a mutation operation from a POST request."}]
        });
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            Json(body),
        )
            .into_response();
    }

    GraphQLResponse::from(execute(&state.schema, request).await).into_response()
}

fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("text/html"))
}

/// Whether the operation the request would run is a mutation. Unparsable
/// documents return false and fail later with the usual syntax error.
fn selects_mutation(request: &async_graphql::Request) -> bool {
    let Ok(doc) = async_graphql::parser::parse_query(&request.query) else {
        return false;
    };
    let selected = request.operation_name.as_deref();
    doc.operations.iter().any(|(name, op)| {
        op.node.ty == OperationType::Mutation
            && selected.map_or(true, |sel| name.map(|n| n.as_str()) == Some(sel))
    })
}

/// Run one request inside a span tagged with a fresh request id.
async fn execute(
    schema: &CatalogSchema,
    request: async_graphql::Request,
) -> async_graphql::Response {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!(
        "graphql",
        %request_id,
        operation = request.operation_name.as_deref().unwrap_or("")
    );

    let response = schema.execute(request).instrument(span.clone()).await;
    if response.is_err() {
        span.in_scope(|| {
            tracing::debug!(errors = response.errors.len(), "Request completed with errors")
        });
    }
    response
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
