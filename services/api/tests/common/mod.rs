//! Shared helpers for the `api` integration tests.
#![allow(dead_code)]

use api_lib::{
    config::Config,
    web::{build_router, AppState},
};
use async_trait::async_trait;
use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use mood_check_core::{
    domain::AnalysisRequest,
    ports::{AnalysisGenerationService, PortError, PortResult, TranslationService},
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Generation port that replays a fixed reply and counts calls.
pub struct StubGenerator {
    reply: PortResult<String>,
    healthy: bool,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            healthy: true,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: PortError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            healthy: false,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnalysisGenerationService for StubGenerator {
    async fn generate(&self, _request: &AnalysisRequest<'_>, _timeout: Duration) -> PortResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    async fn health_check(&self) -> PortResult<()> {
        if self.healthy {
            Ok(())
        } else {
            Err(PortError::Transport("connection refused".to_string()))
        }
    }
}

/// Translation port that replays a fixed reply and counts calls.
pub struct StubTranslator {
    reply: PortResult<String>,
    calls: AtomicUsize,
}

impl StubTranslator {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: PortError) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(error),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslationService for StubTranslator {
    async fn translate(
        &self,
        _text: &str,
        _source_lang: &str,
        _target_lang: &str,
        _timeout: Duration,
    ) -> PortResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}

/// Default configuration with the bundled static directory and `overrides` applied.
pub fn config_with(overrides: &[(&str, &str)]) -> Config {
    let mut vars = HashMap::new();
    vars.insert(
        "STATIC_DIR".to_string(),
        concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
    );
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

/// Default configuration with the bundled static directory.
pub fn test_config() -> Config {
    config_with(&[])
}

pub fn test_app(generator: Arc<StubGenerator>, translator: Arc<StubTranslator>) -> Router {
    let state = AppState::new(Arc::new(test_config()), generator, translator);
    build_router(Arc::new(state))
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// A complete form with the four scored answers overridden.
pub fn form(q2: &str, q4: i64, q5: &str, q6: i64) -> Value {
    json!({
        "q1": "normal, algo cansado, bien",
        "q2": q2,
        "q3": "calma",
        "q4": q4,
        "q5": q5,
        "q6": q6,
        "q7": "un paseo",
        "q8": "algunas preocupaciones",
        "q9": "nada especial",
        "q10": "momentos de paz"
    })
}

/// Serves `router` on an ephemeral local port for the duration of the test.
pub async fn spawn_stub_server(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}
