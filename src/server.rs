use crate::error::ScriptError;
use crate::fetchers::Fetcher;
use crate::generator::ScriptGenerator;
use crate::results::ScriptRequest;
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;

/// Path of the script generation endpoint
pub const SCRIPTS_PATH: &str = "/api/site-to-scripts";

/// Build the router serving the script endpoint
pub fn router<F>(generator: Arc<ScriptGenerator<F>>) -> Router
where
    F: Fetcher + Send + Sync + 'static,
{
    Router::new()
        .route(SCRIPTS_PATH, post(handle_scripts::<F>))
        .with_state(generator)
}

/// Bind to `address` and serve until the process is stopped
pub async fn serve<F>(
    address: &str,
    generator: Arc<ScriptGenerator<F>>,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: Fetcher + Send + Sync + 'static,
{
    let addr: SocketAddr = address.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    ::log::info!("Listening on http://{}{}", listener.local_addr()?, SCRIPTS_PATH);

    axum::serve(listener, router(generator)).await?;
    Ok(())
}

/// POST /api/site-to-scripts
pub async fn handle_scripts<F>(
    State(generator): State<Arc<ScriptGenerator<F>>>,
    body: Result<Json<ScriptRequest>, JsonRejection>,
) -> (StatusCode, Json<Value>)
where
    F: Fetcher + Send + Sync + 'static,
{
    let Json(request) = match body {
        Ok(body) => body,
        Err(rejection) => {
            ::log::warn!("Rejected request body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    match generator.generate(&request).await {
        Ok(result) => (StatusCode::OK, Json(json!(result))),
        Err(e) => {
            if e.is_input() {
                ::log::debug!("Input error: {}", e);
            } else {
                ::log::error!("Script generation failed: {}", e);
            }
            error_response(status_for(&e), e.to_string())
        }
    }
}

/// HTTP status for a generation error
pub fn status_for(error: &ScriptError) -> StatusCode {
    StatusCode::from_u16(error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn error_response(status: StatusCode, message: String) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "error": message })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateDefaults;
    use crate::generator::tests::StubFetcher;
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::atomic::Ordering;
    use tower::ServiceExt;

    const PASTED: &str = "Acme helps small businesses ship faster. Our platform automates the busywork. Teams report 3x throughput gains. Get started today.";

    fn state(fetcher: StubFetcher) -> Arc<ScriptGenerator<StubFetcher>> {
        Arc::new(ScriptGenerator::new(fetcher, TemplateDefaults::default()))
    }

    #[tokio::test]
    async fn test_success_response() {
        let generator = state(StubFetcher::serving("<html></html>"));
        let request = ScriptRequest::from_text(PASTED).with_company_name("Acme");

        let (status, Json(body)) = handle_scripts(State(generator), Ok(Json(request))).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["script60"].as_str().unwrap().starts_with("Narrator ("));
        assert!(body["script30"].as_str().unwrap().contains("Acme helps busy decision-makers"));
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_missing_input_is_bad_request() {
        let generator = state(StubFetcher::serving("<html></html>"));

        let (status, Json(body)) =
            handle_scripts(State(generator.clone()), Ok(Json(ScriptRequest::default()))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Provide a url or pastedText." }));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_server_error() {
        let fetcher = StubFetcher::failing();
        let generator = state(fetcher);

        let (status, Json(body)) = handle_scripts(
            State(generator.clone()),
            Ok(Json(ScriptRequest::from_url("https://down.test"))),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("connection refused"));
        assert_eq!(generator_calls(&generator), 1);
    }

    #[test]
    fn test_status_for() {
        assert_eq!(status_for(&ScriptError::missing_input()), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_for(&ScriptError::Unexpected("x".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    async fn post_raw(
        generator: Arc<ScriptGenerator<StubFetcher>>,
        content_type: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method("POST").uri(SCRIPTS_PATH);
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }
        let request = request.body(Body::from(body.to_string())).unwrap();

        let response = router(generator).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_router_malformed_json_is_bad_request() {
        let generator = state(StubFetcher::serving("<html></html>"));
        let (status, body) =
            post_raw(generator.clone(), Some("application/json"), "{bad").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().is_some_and(|e| !e.is_empty()));
        assert_eq!(generator_calls(&generator), 0);
    }

    #[tokio::test]
    async fn test_router_missing_content_type_is_bad_request() {
        let generator = state(StubFetcher::serving("<html></html>"));
        let (status, body) = post_raw(generator, None, r#"{"pastedText": "hi"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_router_generates_scripts() {
        let generator = state(StubFetcher::serving("<html></html>"));
        let payload = json!({ "pastedText": PASTED, "companyName": "Acme" }).to_string();
        let (status, body) = post_raw(generator, Some("application/json"), &payload).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["script30"].as_str().unwrap().contains("Acme helps busy decision-makers"));
    }

    #[tokio::test]
    async fn test_router_empty_request_is_bad_request() {
        let generator = state(StubFetcher::serving("<html></html>"));
        let (status, body) = post_raw(generator, Some("application/json"), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Provide a url or pastedText." }));
    }

    fn generator_calls(generator: &Arc<ScriptGenerator<StubFetcher>>) -> usize {
        generator.fetcher().calls.load(Ordering::SeqCst)
    }
}
