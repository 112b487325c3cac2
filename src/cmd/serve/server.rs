// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::sync::Mutex;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::signal;
use tsguia_core::QuizBank;
use tsguia_core::TinyRng;

use crate::cmd::serve::content::content_handler;
use crate::cmd::serve::quiz::quiz_handler;
use crate::cmd::serve::state::ServerState;
use crate::content::LessonStore;
use crate::content::resolve_content_root;
use crate::error::Fallible;

pub struct ServerConfig {
    pub directory: Option<String>,
    pub host: String,
    pub port: u16,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let root = resolve_content_root(config.directory)?;
    let bank = QuizBank::embedded()?;
    log::debug!(
        "Serving {} quiz questions and content from {}",
        bank.len(),
        root.display()
    );

    let state = ServerState {
        store: Arc::new(LessonStore::new(root)),
        bank: Arc::new(bank),
        rng: Arc::new(Mutex::new(TinyRng::from_clock())),
    };
    let app = Router::new();
    let app = app.route("/api/content", get(content_handler));
    let app = app.route("/api/quiz", get(quiz_handler));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("{}:{}", config.host, config.port);

    // Start the server with graceful shutdown on Ctrl+C.
    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    log::debug!("Received Ctrl+C, shutting down gracefully");
}
