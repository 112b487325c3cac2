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

use axum::Json;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use serde::Deserialize;
use serde::Serialize;
use tsguia_core::Difficulty;

use crate::cmd::serve::state::ServerState;

#[derive(Deserialize)]
pub struct QuizParams {
    difficulty: Option<String>,
}

#[derive(Serialize)]
struct QuizError {
    error: String,
}

/// `GET /api/quiz?difficulty=<tier>`
///
/// Returns one question of the requested tier, chosen uniformly at random.
/// Selection has no memory: repeated calls may return the same question.
pub async fn quiz_handler(
    State(state): State<ServerState>,
    Query(params): Query<QuizParams>,
) -> Response {
    let Some(difficulty) = params.difficulty.as_deref().and_then(Difficulty::parse) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(QuizError {
                error: "Dificultad no válida".to_string(),
            }),
        )
            .into_response();
    };
    let question = {
        let mut rng = state.rng.lock().unwrap();
        state.bank.pick(difficulty, &mut rng).clone()
    };
    (StatusCode::OK, Json(question)).into_response()
}
