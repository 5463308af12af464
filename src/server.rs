//! HTTP lookup endpoint
//!
//! `GET /<letters>` answers with the same text block the CLI prints. The path
//! is lowercased and must match `^[a-zäöü]{1,50}$`, anything else gets a 400.

use crate::solver::find_and_format;
use crate::wordlists::Dictionary;
use anyhow::Context;
use axum::{
    Router,
    extract::{Path, Request, State},
    http::{StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use regex::Regex;
use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};
use tokio::net::TcpListener;

/// Address the server binds when none is configured
pub const DEFAULT_ADDR: &str = "localhost:7711";

/// Time allowed for a lookup before the request is answered with 503
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(10);

static LETTERS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zäöü]{1,50}$").expect("letters pattern is a valid regex")
});

/// Check that `letters` is 1 to 50 lowercase letters from `a-z`, `ä`, `ö`, `ü`
///
/// # Examples
/// ```
/// use letter_words::server::is_valid_letters;
///
/// assert!(is_valid_letters("bär"));
/// assert!(!is_valid_letters("Bär"));
/// assert!(!is_valid_letters(""));
/// ```
#[must_use]
pub fn is_valid_letters(letters: &str) -> bool {
    LETTERS_RE.is_match(letters)
}

/// Server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
    pub write_timeout: Duration,
}

#[derive(Clone)]
struct AppState {
    dictionary: Arc<Dictionary>,
    write_timeout: Duration,
}

/// Build the lookup router
///
/// Every request, including rejected ones, is logged.
pub fn router(dictionary: Arc<Dictionary>, write_timeout: Duration) -> Router {
    let state = AppState {
        dictionary,
        write_timeout,
    };

    Router::new()
        .route("/{letters}", get(lookup))
        .fallback(reject)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Bind `config.addr` and serve until `shutdown` resolves
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn run<F>(
    config: &ServerConfig,
    dictionary: Arc<Dictionary>,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.addr.as_str())
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    serve_on(listener, dictionary, config.write_timeout, shutdown).await
}

/// Serve lookups on an already bound listener until `shutdown` resolves
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve_on<F>(
    listener: TcpListener,
    dictionary: Arc<Dictionary>,
    write_timeout: Duration,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().context("listener has no local address")?;
    tracing::info!(addr = %local_addr, words = dictionary.len(), "listening");

    axum::serve(listener, router(dictionary, write_timeout))
        .with_graceful_shutdown(shutdown)
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn lookup(State(state): State<AppState>, Path(raw): Path<String>) -> Response {
    let letters = raw.to_lowercase();
    tracing::debug!(%letters, "lookup");

    if !is_valid_letters(&letters) {
        return reject().await;
    }

    let dictionary = Arc::clone(&state.dictionary);
    let task =
        tokio::task::spawn_blocking(move || find_and_format(&letters, dictionary.words()));

    // On timeout the blocking task still runs to completion; only its result is dropped
    match tokio::time::timeout(state.write_timeout, task).await {
        Ok(Ok(body)) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response(),
        Ok(Err(err)) => {
            tracing::error!(error = %err, "lookup task failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        Err(_) => {
            tracing::warn!(
                timeout_ms = state.write_timeout.as_millis() as u64,
                "lookup timed out"
            );
            (StatusCode::SERVICE_UNAVAILABLE, "lookup timed out\n").into_response()
        }
    }
}

async fn reject() -> Response {
    (StatusCode::BAD_REQUEST, "invalid letters\n").into_response()
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "request"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_router(words: &[&str]) -> Router {
        router(
            Arc::new(Dictionary::from_words(words)),
            DEFAULT_WRITE_TIMEOUT,
        )
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

    #[test]
    fn valid_letters() {
        assert!(is_valid_letters("a"));
        assert!(is_valid_letters("katze"));
        assert!(is_valid_letters("äöü"));
        assert!(is_valid_letters(&"a".repeat(50)));
    }

    #[test]
    fn invalid_letters() {
        assert!(!is_valid_letters(""));
        assert!(!is_valid_letters(&"a".repeat(51)));
        assert!(!is_valid_letters("cat1"));
        assert!(!is_valid_letters("CAT"));
        assert!(!is_valid_letters("ß"));
        assert!(!is_valid_letters("a b"));
        assert!(!is_valid_letters("a/b"));
    }

    #[test]
    fn umlauts_count_once_toward_limit() {
        assert!(is_valid_letters(&"ä".repeat(50)));
        assert!(!is_valid_letters(&"ä".repeat(51)));
    }

    #[test]
    fn default_settings() {
        assert_eq!(DEFAULT_ADDR, "localhost:7711");
        assert_eq!(DEFAULT_WRITE_TIMEOUT, Duration::from_secs(10));
    }

    #[tokio::test]
    async fn lookup_returns_grouped_words() {
        let app = test_router(&["cat", "at", "a", "dog", "act"]);
        let (status, body) = get(app, "/cat").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "\n1\na\n\n2\nat\n\n3\nact\ncat\n");
    }

    #[tokio::test]
    async fn lookup_sets_text_content_type() {
        let app = test_router(&["cat"]);
        let response = app
            .oneshot(Request::builder().uri("/cat").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }

    #[tokio::test]
    async fn lookup_lowercases_path() {
        let app = test_router(&["cat"]);
        let (status, body) = get(app, "/CAT").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "\n1\n\n2\n\n3\ncat\n");
    }

    #[tokio::test]
    async fn lookup_decodes_umlauts() {
        let app = test_router(&["Bär", "rä"]);
        let (status, body) = get(app, "/b%C3%A4r").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "\n1\n\n2\nrä\n\n3\nbär\n");
    }

    #[tokio::test]
    async fn lookup_rejects_digits() {
        let (status, body) = get(test_router(&["cat"]), "/cat1").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "invalid letters\n");
    }

    #[tokio::test]
    async fn lookup_rejects_too_many_letters() {
        let uri = format!("/{}", "a".repeat(51));
        let (status, _) = get(test_router(&["a"]), &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn root_is_rejected() {
        let (status, _) = get(test_router(&["a"]), "/").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn nested_path_is_rejected() {
        let (status, _) = get(test_router(&["a"]), "/a/b").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn slow_lookup_times_out() {
        // Large enough that the blocking scan cannot finish before the first poll
        let words: Vec<String> = (0..200_000)
            .map(|i| format!("{}{}", "a".repeat(40), i % 10))
            .collect();
        let app = router(Arc::new(Dictionary::from_words(&words)), Duration::ZERO);

        let (status, body) = get(app, &format!("/{}", "a".repeat(50))).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, "lookup timed out\n");
    }

    #[tokio::test]
    async fn lookup_within_timeout_succeeds() {
        let app = router(
            Arc::new(Dictionary::from_words(["ab", "ba"])),
            Duration::from_secs(5),
        );
        let (status, body) = get(app, "/ab").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "\n1\n\n2\nab\nba\n");
    }

    #[tokio::test]
    async fn concurrent_lookups_share_dictionary() {
        let app = test_router(&["ab", "ba", "a", "b"]);

        let handles: Vec<_> = ["ab", "a", "b", "ba"]
            .into_iter()
            .map(|letters| {
                let app = app.clone();
                tokio::spawn(async move { get(app, &format!("/{letters}")).await })
            })
            .collect();

        for handle in handles {
            let (status, _) = handle.await.unwrap();
            assert_eq!(status, StatusCode::OK);
        }
    }
}
