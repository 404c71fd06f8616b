//! HTTP routes for catalog endpoints.

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use super::handlers::{ingest_ports, list_ports, CatalogHandlers};

/// Creates the catalog router.
///
/// `/ports` accepts `POST` and `GET`; any other method gets `405`.
pub fn catalog_routes(handlers: CatalogHandlers) -> Router {
    let body_limit = handlers.max_upload_bytes();

    Router::new()
        .route("/ports", post(ingest_ports).get(list_ports))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use tokio_util::sync::CancellationToken;
    use tower::ServiceExt;

    use crate::adapters::http::ErrorResponse;
    use crate::adapters::memory::InMemoryPortRepository;
    use crate::adapters::rpc::PortsRpcService;
    use crate::application::{FetchPortsHandler, IngestPortsHandler};
    use crate::ports::{PortEntry, PortService};

    const BOUNDARY: &str = "port-catalog-boundary";

    fn handlers() -> CatalogHandlers {
        let service: Arc<dyn PortService> =
            Arc::new(PortsRpcService::new(Arc::new(InMemoryPortRepository::new())));
        CatalogHandlers::new(
            Arc::new(IngestPortsHandler::new(service.clone())),
            Arc::new(FetchPortsHandler::new(service)),
            CancellationToken::new(),
        )
    }

    fn multipart_body(part: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{part}\"; filename=\"ports.json\"\r\n\
             Content-Type: application/json\r\n\
             \r\n\
             {content}\r\n\
             --{BOUNDARY}--\r\n"
        )
    }

    fn upload(part: &str, content: &str) -> Request<Body> {
        let body = multipart_body(part, content);
        Request::builder()
            .method(Method::POST)
            .uri("/ports")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn upload_then_list() {
        let app = catalog_routes(handlers());
        let doc = r#"{"AEAJM": {"name": "Ajman", "code": "52000"}, "AEAUH": {"name": "Abu Dhabi", "code": "52001"}}"#;

        let response = app.clone().oneshot(upload("ports", doc)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let ids: Vec<String> = json_body(response).await;
        assert_eq!(ids, ["AEAJM", "AEAUH"]);

        let response = app
            .oneshot(Request::builder().uri("/ports").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let mut entries: Vec<PortEntry> = json_body(response).await;
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "Ajman");
        assert_eq!(entries[1].code, "52001");
    }

    #[tokio::test]
    async fn rejected_record_returns_error_message() {
        let app = catalog_routes(handlers());
        let doc = r#"{"AEAJM": {"code": ""}}"#;

        let response = app.oneshot(upload("ports", doc)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = json_body(response).await;
        assert!(body.error_message.contains("AEAJM"));
        assert!(body.error_message.contains("port code can't be empty"));
    }

    #[tokio::test]
    async fn malformed_document_returns_error_message() {
        let response = catalog_routes(handlers())
            .oneshot(upload("ports", "[1, 2]"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = json_body(response).await;
        assert!(body.error_message.starts_with("incorrect json token"));
    }

    #[tokio::test]
    async fn missing_ports_part_returns_error_message() {
        let response = catalog_routes(handlers())
            .oneshot(upload("file", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = json_body(response).await;
        assert_eq!(body.error_message, "missing multipart part \"ports\"");
    }

    #[tokio::test]
    async fn non_multipart_body_returns_error_message() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/ports")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let response = catalog_routes(handlers()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body: ErrorResponse = json_body(response).await;
        assert!(body.error_message.starts_with("failed to read upload"));
    }

    #[tokio::test]
    async fn broken_multipart_stream_returns_error_message() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/ports")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from("not a multipart body"))
            .unwrap();

        let response = catalog_routes(handlers()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = json_body(response).await;
        assert!(!body.error_message.is_empty());
    }

    #[tokio::test]
    async fn oversize_upload_is_rejected_before_parsing() {
        let app = catalog_routes(handlers().with_max_upload_bytes(16));

        let response = app
            .oneshot(upload("ports", r#"{"AEAJM": {"code": "52000"}}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn other_methods_are_not_allowed() {
        let response = catalog_routes(handlers())
            .oneshot(
                Request::builder()
                    .method(Method::PUT)
                    .uri("/ports")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
