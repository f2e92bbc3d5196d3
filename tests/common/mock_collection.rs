//! Mock collection server for exercising the HTTP client.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{RawQuery, State};
use axum::http::{Response, StatusCode};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A mock response to return.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: br#"{"error": "nope"}"#.to_vec(),
            delay_ms: 0,
        }
    }

    pub fn png() -> Self {
        Self {
            status: 200,
            content_type: "image/png",
            body: png_bytes(),
            delay_ms: 0,
        }
    }

    pub fn bytes(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status: 200,
            content_type,
            body,
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    search: MockResponse,
    image: MockResponse,
    queries: Arc<Mutex<Vec<String>>>,
    images: Arc<InFlight>,
}

/// Image requests being served right now, and the most seen at once.
#[derive(Default)]
struct InFlight {
    current: AtomicUsize,
    peak: AtomicUsize,
}

pub struct MockCollection {
    pub addr: SocketAddr,
    queries: Arc<Mutex<Vec<String>>>,
    images: Arc<InFlight>,
}

impl MockCollection {
    /// Start a server answering `/api/en/collection` with `search` and
    /// `/images/{name}` with a small PNG.
    pub async fn start(search: MockResponse) -> Self {
        Self::start_with_image(search, MockResponse::png()).await
    }

    pub async fn start_with_image(search: MockResponse, image: MockResponse) -> Self {
        let queries = Arc::new(Mutex::new(Vec::new()));
        let images = Arc::new(InFlight::default());
        let state = MockState {
            search,
            image,
            queries: Arc::clone(&queries),
            images: Arc::clone(&images),
        };
        let app = Router::new()
            .route("/api/en/collection", get(search_handler))
            .route("/images/{name}", get(image_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
        let addr = listener.local_addr().expect("mock addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            addr,
            queries,
            images,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/api/en/collection", self.addr)
    }

    pub fn image_url(&self, name: &str) -> String {
        format!("http://{}/images/{}", self.addr, name)
    }

    /// Raw query strings received so far, in order.
    pub async fn queries(&self) -> Vec<String> {
        self.queries.lock().await.clone()
    }

    /// Most image requests that were being served at the same time.
    pub fn peak_image_requests(&self) -> usize {
        self.images.peak.load(Ordering::SeqCst)
    }
}

async fn search_handler(
    State(state): State<MockState>,
    RawQuery(query): RawQuery,
) -> Response<Body> {
    state.queries.lock().await.push(query.unwrap_or_default());
    respond(&state.search).await
}

async fn image_handler(State(state): State<MockState>) -> Response<Body> {
    let now = state.images.current.fetch_add(1, Ordering::SeqCst) + 1;
    state.images.peak.fetch_max(now, Ordering::SeqCst);
    let response = respond(&state.image).await;
    state.images.current.fetch_sub(1, Ordering::SeqCst);
    response
}

async fn respond(mock: &MockResponse) -> Response<Body> {
    if mock.delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(mock.delay_ms)).await;
    }
    Response::builder()
        .status(StatusCode::from_u16(mock.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .header("content-type", mock.content_type)
        .body(Body::from(mock.body.clone()))
        .expect("mock response")
}

/// 4x4 solid red PNG.
pub fn png_bytes() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(4, 4, image::Rgb([200, 10, 10]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode png");
    bytes
}
