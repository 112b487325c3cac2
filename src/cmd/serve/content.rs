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
use serde::Deserialize;
use serde::Serialize;
use tsguia_core::find_exercise;
use tsguia_core::normalize_section;

use crate::cmd::check::PRACTICE_LESSON;
use crate::cmd::serve::state::ServerState;

#[derive(Deserialize)]
pub struct ContentParams {
    slug: Option<String>,
    lesson: Option<String>,
    ejercicio: Option<String>,
}

/// Every content response, success or error, has this shape.
#[derive(Serialize)]
pub struct ContentResponse {
    title: String,
    description: String,
    content: String,
}

impl ContentResponse {
    fn error(description: &str) -> Self {
        ContentResponse {
            title: "Error".to_string(),
            description: description.to_string(),
            content: String::new(),
        }
    }
}

/// `GET /api/content?slug=<section>&lesson=<name>&ejercicio=<ejercicio-N>`
///
/// Returns the raw lesson text, or a single extracted exercise when the
/// practice lesson is requested with a well-formed exercise id. An
/// `ejercicio` value of any other shape falls through to the full lesson.
pub async fn content_handler(
    State(state): State<ServerState>,
    Query(params): Query<ContentParams>,
) -> (StatusCode, Json<ContentResponse>) {
    let (Some(slug), Some(lesson)) = (params.slug, params.lesson) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContentResponse::error("Parámetros inválidos")),
        );
    };

    // An unrecognized slug passes through unchanged and fails the lookup
    // below, so it surfaces as a load failure rather than a bad request.
    let section = normalize_section(&slug);
    let path = match state.store.validate(section, &lesson) {
        Ok(path) => path,
        Err(e) => {
            log::error!("failed to locate lesson {section}/{lesson}: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContentResponse::error("Error al cargar el contenido")),
            );
        }
    };
    let text = match tokio::fs::read_to_string(&path).await {
        Ok(text) => text,
        Err(e) => {
            log::error!("failed to read {}: {e}", path.display());
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ContentResponse::error("Error al cargar el contenido")),
            );
        }
    };

    if lesson == PRACTICE_LESSON {
        if let Some(n) = params.ejercicio.as_deref().and_then(parse_exercise_id) {
            return match find_exercise(&text, n) {
                Some(block) => (
                    StatusCode::OK,
                    Json(ContentResponse {
                        title: block.title,
                        description: block.description,
                        content: block.content,
                    }),
                ),
                None => (
                    StatusCode::NOT_FOUND,
                    Json(ContentResponse::error("Ejercicio no encontrado")),
                ),
            };
        }
    }

    (
        StatusCode::OK,
        Json(ContentResponse {
            title: lesson,
            description: String::new(),
            content: text,
        }),
    )
}

/// Parse an exercise id of the form `ejercicio-<N>`.
fn parse_exercise_id(value: &str) -> Option<usize> {
    value.strip_prefix("ejercicio-")?.parse().ok()
}
