//! HTTP surface of the API: the GraphQL endpoint and the health check.
use std::future::Future;
use std::io;

use async_graphql::http::GraphiQLSource;
use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use http::HeaderValue;
use http::header::CACHE_CONTROL;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::configuration::Server;
use crate::schema::EnerguideSchema;

#[derive(Clone)]
struct AppState {
    schema: EnerguideSchema,
    endpoint: String,
}

/// Routes of the API server.
pub fn router(schema: EnerguideSchema, server: &Server) -> Router {
    let state = AppState {
        schema,
        endpoint: server.graphql_path.clone(),
    };
    let endpoint = if server.graphiql {
        get(graphiql).post(graphql)
    } else {
        post(graphql)
    };
    Router::new()
        .route(&server.graphql_path, endpoint)
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the API on `server.listen` until `shutdown` resolves.
pub async fn serve(
    schema: EnerguideSchema,
    server: &Server,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> io::Result<()> {
    let listener = TcpListener::bind(server.listen).await?;
    tracing::info!(
        "GraphQL endpoint exposed at http://{}{}",
        listener.local_addr()?,
        server.graphql_path
    );
    axum::serve(listener, router(schema, server))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn graphql(
    State(state): State<AppState>,
    Json(request): Json<async_graphql::Request>,
) -> Response {
    let response = state.schema.execute(request).await;
    let cache_control = response
        .cache_control
        .value()
        .and_then(|value| HeaderValue::from_str(&value).ok());
    let mut http_response = Json(response).into_response();
    if let Some(value) = cache_control {
        http_response.headers_mut().insert(CACHE_CONTROL, value);
    }
    http_response
}

async fn graphiql(State(state): State<AppState>) -> Html<String> {
    Html(GraphiQLSource::build().endpoint(&state.endpoint).finish())
}

async fn health_check() -> impl IntoResponse {
    Json(json!({ "status": "UP" }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::body::to_bytes;
    use http::Method;
    use http::Request;
    use http::StatusCode;
    use http::header::CONTENT_TYPE;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::configuration::Graphql;
    use crate::schema::build_schema;
    use crate::store::InMemoryStore;
    use crate::store::Record;

    fn app(server: &Server) -> Router {
        let records: Vec<Record> = serde_json::from_value(json!([
            { "HOUSE_ID": 189250, "MAIL_PCODE": "C1A 1N1", "YEARBUILT": 1900 }
        ]))
        .unwrap();
        let schema = build_schema(Arc::new(InMemoryStore::new(records)), &Graphql::default());
        router(schema, server)
    }

    fn graphql_request(query: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/graphql")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "query": query }).to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_answers_graphql_queries_with_cache_headers() {
        let response = app(&Server::default())
            .oneshot(graphql_request(
                r#"{ evaluationsFor(account: 189250, postalCode: "C1A 1N1") { yearBuilt } }"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cache_control = response.headers().get(CACHE_CONTROL).unwrap();
        assert!(cache_control.to_str().unwrap().contains("max-age=90"));
        assert_eq!(
            body_json(response).await,
            json!({ "data": { "evaluationsFor": { "yearBuilt": 1900 } } })
        );
    }

    #[tokio::test]
    async fn validation_errors_are_in_the_body() {
        let response = app(&Server::default())
            .oneshot(graphql_request(
                r#"{ evaluationsFor(account: 189250, postalCode: "D1A 1N1") { yearBuilt } }"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let message = body["errors"][0]["message"].as_str().unwrap();
        assert!(message.contains("Not a valid Postal Code"), "{message}");
    }

    #[tokio::test]
    async fn it_reports_health() {
        let response = app(&Server::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "UP" }));
    }

    #[tokio::test]
    async fn it_serves_graphiql() {
        let response = app(&Server::default())
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("graphiql"));
    }

    #[tokio::test]
    async fn graphiql_can_be_disabled() {
        let server = Server {
            graphiql: false,
            ..Default::default()
        };
        let response = app(&server)
            .oneshot(Request::get("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
