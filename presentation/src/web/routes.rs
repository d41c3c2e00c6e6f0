//! HTTP routes for the display surface
//!
//! - `GET /` renders the page; with a non-empty `question` it runs the chain
//!   and renders the event feed and the final answer
//! - `GET /stream` runs the chain and streams events as Server-Sent Events
//! - `GET /health` liveness probe

use super::error::AppError;
use super::page::PageRenderer;
use ask_application::{ChannelProgress, RecordingProgress, RunChainError, RunChainUseCase};
use ask_domain::{ProgressEvent, Question};
use axum::Router;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::routing::get;
use futures::stream::{self, BoxStream, StreamExt};
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared, read-only state built once at startup.
#[derive(Clone)]
pub struct AppState {
    chain: RunChainUseCase,
    pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(chain: RunChainUseCase, pages: PageRenderer) -> Self {
        Self {
            chain,
            pages: Arc::new(pages),
        }
    }
}

/// Query string of a submission.
#[derive(Debug, Default, Deserialize)]
pub struct AskQuery {
    #[serde(default)]
    pub question: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/stream", get(stream_answer))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(
    State(state): State<AppState>,
    Query(query): Query<AskQuery>,
) -> Result<Html<String>, AppError> {
    let Some(question) = Question::try_new(query.question) else {
        return Ok(Html(state.pages.render_idle()?));
    };

    info!("Answering question from page");
    let progress = RecordingProgress::new();
    let answer = state.chain.run(question.content(), Some(&progress)).await?;

    let html = state
        .pages
        .render_answer(question.content(), &progress.into_events(), &answer)?;
    Ok(Html(html))
}

async fn stream_answer(
    State(state): State<AppState>,
    Query(query): Query<AskQuery>,
) -> impl IntoResponse {
    let events = match Question::try_new(query.question) {
        Some(question) => answer_events(state.chain.clone(), question),
        None => {
            debug!("Ignoring empty submission");
            stream::empty().boxed()
        }
    };
    Sse::new(events).keep_alive(KeepAlive::default())
}

async fn health() -> &'static str {
    "ok"
}

/// Run the chain on its own task; progress events flow through a channel
/// and the answer (or failure) follows once the channel closes.
fn answer_events(
    chain: RunChainUseCase,
    question: Question,
) -> BoxStream<'static, Result<Event, Infallible>> {
    info!("Streaming answer");
    let (progress, receiver) = ChannelProgress::channel();

    let task = tokio::spawn(async move {
        let result = chain.run(question.content(), Some(&progress)).await;
        drop(progress);
        result
    });

    let progress_events = UnboundedReceiverStream::new(receiver).map(|event| progress_event(&event));
    let final_event = stream::once(async move {
        match task.await {
            Ok(Ok(answer)) => answer_event(&answer),
            Ok(Err(err)) => failure_event(&err),
            Err(join_err) => failure_message_event(&join_err.to_string()),
        }
    });

    progress_events
        .chain(final_event)
        .map(Ok::<_, Infallible>)
        .boxed()
}

fn progress_event(event: &ProgressEvent) -> Event {
    json_event("progress", event)
}

fn answer_event(answer: &str) -> Event {
    json_event("answer", &serde_json::json!({ "text": answer }))
}

fn failure_event(err: &RunChainError) -> Event {
    failure_message_event(&err.to_string())
}

fn failure_message_event(message: &str) -> Event {
    json_event("failure", &serde_json::json!({ "message": message }))
}

fn json_event<T: serde::Serialize>(name: &str, payload: &T) -> Event {
    // JSON keeps newlines and carriage returns out of the SSE data line.
    let data = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    Event::default().event(name).data(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ask_application::{GatewayError, LlmGateway, ProgressNotifier};
    use ask_domain::{ModelEndpoint, PromptTemplate};
    use async_trait::async_trait;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    // ==================== Test Mocks ====================

    struct MockGateway {
        endpoint: ModelEndpoint,
        result: Result<String, GatewayError>,
        calls: AtomicUsize,
    }

    impl MockGateway {
        fn answering(text: &str) -> Arc<Self> {
            Arc::new(Self {
                endpoint: ModelEndpoint::default(),
                result: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(error: GatewayError) -> Arc<Self> {
            Arc::new(Self {
                endpoint: ModelEndpoint::default(),
                result: Err(error),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LlmGateway for MockGateway {
        fn endpoint(&self) -> &ModelEndpoint {
            &self.endpoint
        }

        async fn generate(&self, _prompt: &str) -> Result<String, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }

        async fn generate_with_progress(
            &self,
            prompt: &str,
            progress: &dyn ProgressNotifier,
        ) -> Result<String, GatewayError> {
            progress.on_event(&ProgressEvent::status("thinking"));
            progress.on_event(&ProgressEvent::delta("4\r\n2"));
            progress.on_event(&ProgressEvent::status("done"));
            self.generate(prompt).await
        }
    }

    fn app(gateway: Arc<MockGateway>) -> Router {
        let chain = RunChainUseCase::new(gateway, PromptTemplate::default());
        router(AppState::new(chain, PageRenderer::new("Test Page").unwrap()))
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    // ==================== Page ====================

    #[tokio::test]
    async fn index_without_question_does_not_call_chain() {
        let gateway = MockGateway::answering("42");
        let (status, body) = get(app(gateway.clone()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Test Page"));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn index_with_empty_question_does_not_call_chain() {
        let gateway = MockGateway::answering("42");
        let (status, _) = get(app(gateway.clone()), "/?question=").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn index_with_whitespace_question_calls_chain_once() {
        let gateway = MockGateway::answering("42");
        let (status, body) = get(app(gateway.clone()), "/?question=%20").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(gateway.calls(), 1);
        assert!(body.contains("<strong>Final Answer:</strong> 42"));
    }

    #[tokio::test]
    async fn index_renders_events_then_final_answer() {
        let gateway = MockGateway::answering("42");
        let (status, body) = get(app(gateway.clone()), "/?question=What%20is%206*7%3F").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(gateway.calls(), 1);
        let thinking = body.find("thinking").unwrap();
        let done = body.find(">done<").unwrap();
        let answer = body.find("<strong>Final Answer:</strong> 42").unwrap();
        assert!(thinking < done && done < answer);
    }

    #[tokio::test]
    async fn index_failure_surfaces_as_error_response() {
        let gateway =
            MockGateway::failing(GatewayError::ServiceUnavailable("endpoint down".to_string()));
        let (status, body) = get(app(gateway), "/?question=hello").await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body.contains("Service unavailable: endpoint down"));
    }

    // ==================== SSE ====================

    #[tokio::test]
    async fn stream_emits_progress_then_answer() {
        let gateway = MockGateway::answering("42");
        let (status, body) = get(app(gateway.clone()), "/stream?question=hi").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(gateway.calls(), 1);

        let names: Vec<&str> = body
            .lines()
            .filter_map(|line| line.strip_prefix("event: "))
            .collect();
        assert_eq!(names, vec!["progress", "progress", "progress", "answer"]);
        assert!(body.contains(r#"data: {"kind":"delta","text":"4\r\n2"}"#));
        assert!(body.contains(r#"data: {"text":"42"}"#));
    }

    #[tokio::test]
    async fn stream_reports_failure() {
        let gateway =
            MockGateway::failing(GatewayError::AuthenticationFailed("expired token".to_string()));
        let (_, body) = get(app(gateway), "/stream?question=hi").await;

        assert!(body.contains("event: failure"));
        assert!(body.contains("Authentication failed: expired token"));
        assert!(!body.contains("event: answer"));
    }

    #[tokio::test]
    async fn stream_with_empty_question_is_empty() {
        let gateway = MockGateway::answering("42");
        let (status, body) = get(app(gateway.clone()), "/stream?question=").await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("event:"));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn stream_sends_whitespace_question_to_chain() {
        let gateway = MockGateway::answering("42");
        let (_, body) = get(app(gateway.clone()), "/stream?question=%20").await;

        assert_eq!(gateway.calls(), 1);
        assert!(body.contains("event: answer"));
    }

    #[tokio::test]
    async fn health_is_ok() {
        let (status, body) = get(app(MockGateway::answering("")), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
