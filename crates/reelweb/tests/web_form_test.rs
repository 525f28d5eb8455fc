//! Form-flow tests driving the axum router directly with `oneshot`.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use reelcore::resolve::{Resolver, ResolverConfig};
use reelgrab::web::{self, messages};
use tower::ServiceExt;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

const REEL_URL_ENCODED: &str = "https%3A%2F%2Fwww.instagram.com%2Freel%2FCxyzAb12345%2F";

struct MockChain {
    snapinsta: MockServer,
    downloadgram: MockServer,
    saveinsta: MockServer,
}

impl MockChain {
    async fn start() -> Self {
        Self {
            snapinsta: MockServer::start().await,
            downloadgram: MockServer::start().await,
            saveinsta: MockServer::start().await,
        }
    }

    fn router(&self) -> Router {
        let resolver_config = ResolverConfig {
            snapinsta_endpoint: format!("{}/api/ajaxSearch", self.snapinsta.uri()),
            downloadgram_endpoint: format!("{}/wp-json/aio-dl/video-data/", self.downloadgram.uri()),
            saveinsta_endpoint: format!("{}/core/ajax.php", self.saveinsta.uri()),
            request_timeout: Duration::from_millis(500),
            connect_timeout: Duration::from_millis(500),
            proxy: None,
        };
        web::build_router(Arc::new(Resolver::new(&resolver_config)))
    }

    /// Assert that no provider endpoint is ever called.
    async fn expect_no_calls(&self) {
        for server in [&self.snapinsta, &self.downloadgram, &self.saveinsta] {
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(200))
                .expect(0)
                .mount(server)
                .await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(200))
                .expect(0)
                .mount(server)
                .await;
        }
    }

    /// Every provider answers 500 — the chain exhausts with no
    /// recognizable fault kind.
    async fn all_fail(&self) {
        for server in [&self.snapinsta, &self.downloadgram, &self.saveinsta] {
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(500))
                .mount(server)
                .await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(500))
                .mount(server)
                .await;
        }
    }

    /// The first provider answers with a direct video link.
    async fn first_succeeds(&self, video_url: &str) {
        let fragment = format!(r#"<a class="abutton" href="{}">Download</a>"#, video_url);
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": fragment })))
            .mount(&self.snapinsta)
            .await;
    }
}

fn form_post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_text(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn index_renders_empty_form() {
    let chain = MockChain::start().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let (status, body) = body_text(chain.router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"name="instagramUrl""#));
    assert!(!body.contains("class=\"error\""));
}

#[tokio::test]
async fn empty_submission_is_rejected_without_network() {
    let chain = MockChain::start().await;
    chain.expect_no_calls().await;

    let (status, body) = body_text(chain.router(), form_post("instagramUrl=")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(messages::INVALID_URL));
}

#[tokio::test]
async fn malformed_url_is_rejected_without_network() {
    let chain = MockChain::start().await;
    chain.expect_no_calls().await;

    let (status, body) = body_text(chain.router(), form_post("instagramUrl=not%20a%20url")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(messages::INVALID_URL));
}

#[tokio::test]
async fn profile_url_is_rejected_without_network() {
    let chain = MockChain::start().await;
    chain.expect_no_calls().await;

    let (_, body) = body_text(
        chain.router(),
        form_post("instagramUrl=https%3A%2F%2Fwww.instagram.com%2Fsomeuser"),
    )
    .await;
    assert!(body.contains(messages::INVALID_URL));
}

#[tokio::test]
async fn resolved_video_is_rendered_into_the_page() {
    let chain = MockChain::start().await;
    chain.first_succeeds("https://cdn.example/video.mp4").await;

    let (status, body) = body_text(chain.router(), form_post(&format!("instagramUrl={}", REEL_URL_ENCODED))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"src="https://cdn.example/video.mp4""#));
    assert!(!body.contains("class=\"error\""));
}

#[tokio::test]
async fn exhausted_chain_renders_generic_catch_all() {
    let chain = MockChain::start().await;
    chain.all_fail().await;

    let (status, body) = body_text(chain.router(), form_post(&format!("instagramUrl={}", REEL_URL_ENCODED))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(messages::RESOLVE_PREFIX.trim_end()));
    assert!(body.contains("The post contains a video"));
    assert!(!body.contains("<video"));
}

#[tokio::test]
async fn repeated_posts_classify_identically() {
    let chain = MockChain::start().await;
    chain.all_fail().await;
    let router = chain.router();

    let (_, first) = body_text(router.clone(), form_post(&format!("instagramUrl={}", REEL_URL_ENCODED))).await;
    let (_, second) = body_text(router, form_post(&format!("instagramUrl={}", REEL_URL_ENCODED))).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn health_endpoint_answers_ok() {
    let chain = MockChain::start().await;
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = body_text(chain.router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""status":"ok""#));
}
