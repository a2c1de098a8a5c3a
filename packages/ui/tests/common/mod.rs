//! Mock character service and VirtualDom helpers for view tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use dioxus::prelude::*;
use tokio::net::TcpListener;

/// A captured request: path plus raw query string.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRequest {
    pub path: String,
    pub query: Option<String>,
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<(u16, String)>>>,
}

/// Mock backend. Replies with queued `(status, json)` pairs in order, then
/// with the last one forever.
pub struct MockBackend {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let state = MockState::default();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(handle_request))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    pub fn enqueue(&self, status: u16, body: &str) {
        self.state
            .responses
            .lock()
            .unwrap()
            .push_back((status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle_request(State(state): State<MockState>, req: Request<Body>) -> Response<Body> {
    state.requests.lock().unwrap().push(CapturedRequest {
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
    });

    let (status, body) = {
        let mut responses = state.responses.lock().unwrap();
        if responses.len() > 1 {
            responses.pop_front()
        } else {
            responses.front().cloned()
        }
    }
    .unwrap_or((404, r#"{"error": "There is nothing here"}"#.to_string()));

    Response::builder()
        .status(StatusCode::from_u16(status).unwrap())
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

pub fn character_json(id: i64, name: &str, status: &str, species: &str) -> String {
    format!(
        r#"{{
            "id": {id},
            "name": "{name}",
            "status": "{status}",
            "species": "{species}",
            "type": "",
            "gender": "Male",
            "origin": {{ "name": "Earth (C-137)", "url": "" }},
            "location": {{ "name": "Citadel of Ricks", "url": "" }},
            "image": "https://example.test/avatar/{id}.jpeg",
            "episode": [],
            "url": "",
            "created": ""
        }}"#
    )
}

pub fn page_json(pages: u32, characters: &[String]) -> String {
    format!(
        r#"{{ "info": {{ "count": {}, "pages": {pages}, "next": null, "prev": null }}, "results": [{}] }}"#,
        characters.len(),
        characters.join(","),
    )
}

/// Render the current tree to HTML.
pub fn html(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}

/// Let spawned tasks run and re-render until `done` holds for the HTML.
pub async fn settle(dom: &mut VirtualDom, mut done: impl FnMut(&str) -> bool) -> String {
    tokio::time::timeout(Duration::from_secs(5), async move {
        loop {
            dom.wait_for_work().await;
            dom.render_immediate_to_vec();
            let html = dioxus_ssr::render(dom);
            if done(&html) {
                return html;
            }
        }
    })
    .await
    .expect("view did not settle")
}
