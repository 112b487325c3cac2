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

mod content;
mod quiz;
pub mod server;
mod state;

#[cfg(test)]
mod tests {
    use std::fs::create_dir_all;
    use std::fs::write;

    use portpicker::pick_unused_port;
    use reqwest::StatusCode;
    use serde_json::Value;
    use tempfile::TempDir;
    use tempfile::tempdir;
    use tokio::spawn;
    use tsguia_core::Difficulty;

    use crate::cmd::serve::server::ServerConfig;
    use crate::cmd::serve::server::start_server;
    use crate::error::Fallible;
    use crate::utils::wait_for_server;

    const TEST_HOST: &str = "127.0.0.1";

    const VARIABLES_LESSON: &str = "let edad: number = 25;\nconst nombre: string = 'Ana';\n";

    const PRACTICE_FILE: &str = "// Prácticas del nivel básico\n\
// 1. Suma\n\
// Implementa suma\n\
function suma(a: number, b: number) { return a + b; }\n\
// 2. Resta\n\
// Implementa resta\n\
function resta(a: number, b: number) { return a - b; }\n";

    /// Build a throwaway content tree with one section and two lessons.
    fn create_test_content() -> Fallible<(TempDir, String)> {
        let dir = tempdir()?;
        let root = dir.path().canonicalize()?;
        create_dir_all(root.join("basic"))?;
        write(root.join("basic/variables.ts"), VARIABLES_LESSON)?;
        write(root.join("basic/practicas.ts"), PRACTICE_FILE)?;
        Ok((dir, root.display().to_string()))
    }

    async fn spawn_test_server() -> Fallible<(TempDir, u16)> {
        let port = pick_unused_port().unwrap();
        let (dir, directory) = create_test_content()?;
        let config = ServerConfig {
            directory: Some(directory),
            host: TEST_HOST.to_string(),
            port,
        };
        spawn(async move { start_server(config).await });
        wait_for_server(TEST_HOST, port).await?;
        Ok((dir, port))
    }

    #[tokio::test]
    async fn test_start_server_on_non_existent_directory() -> Fallible<()> {
        let port = pick_unused_port().unwrap();
        let config = ServerConfig {
            directory: Some("./derpherp".to_string()),
            host: TEST_HOST.to_string(),
            port,
        };
        let result = start_server(config).await;
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert_eq!(err.to_string(), "error: directory does not exist.");
        Ok(())
    }

    #[tokio::test]
    async fn test_full_lesson() -> Fallible<()> {
        let (_dir, port) = spawn_test_server().await?;

        let response = reqwest::get(format!(
            "http://{TEST_HOST}:{port}/api/content?slug=basico&lesson=variables"
        ))
        .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await?;
        assert_eq!(body["title"], "variables");
        assert_eq!(body["description"], "");
        assert_eq!(body["content"], VARIABLES_LESSON);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_params() -> Fallible<()> {
        let (_dir, port) = spawn_test_server().await?;

        let response =
            reqwest::get(format!("http://{TEST_HOST}:{port}/api/content?slug=basico")).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["title"], "Error");
        assert_eq!(body["description"], "Parámetros inválidos");
        assert_eq!(body["content"], "");

        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/api/content")).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_slug_is_a_load_failure() -> Fallible<()> {
        let (_dir, port) = spawn_test_server().await?;

        // "nightmare" passes through the normalizer unchanged, and there is
        // no such section directory.
        let response = reqwest::get(format!(
            "http://{TEST_HOST}:{port}/api/content?slug=nightmare&lesson=variables"
        ))
        .await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json().await?;
        assert_eq!(body["description"], "Error al cargar el contenido");

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_lesson_is_a_load_failure() -> Fallible<()> {
        let (_dir, port) = spawn_test_server().await?;

        let response = reqwest::get(format!(
            "http://{TEST_HOST}:{port}/api/content?slug=basico&lesson=clases"
        ))
        .await?;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        Ok(())
    }

    #[tokio::test]
    async fn test_extracted_exercise() -> Fallible<()> {
        let (_dir, port) = spawn_test_server().await?;

        let response = reqwest::get(format!(
            "http://{TEST_HOST}:{port}/api/content?slug=basico&lesson=practicas&ejercicio=ejercicio-2"
        ))
        .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await?;
        assert_eq!(body["title"], "Ejercicio 2");
        assert_eq!(body["description"], "Resta");
        assert_eq!(
            body["content"],
            "function resta(a: number, b: number) { return a - b; }"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_exercise_out_of_range() -> Fallible<()> {
        let (_dir, port) = spawn_test_server().await?;

        let response = reqwest::get(format!(
            "http://{TEST_HOST}:{port}/api/content?slug=basico&lesson=practicas&ejercicio=ejercicio-3"
        ))
        .await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await?;
        assert_eq!(body["title"], "Error");
        assert_eq!(body["description"], "Ejercicio no encontrado");

        Ok(())
    }

    #[tokio::test]
    async fn test_malformed_exercise_id_falls_through() -> Fallible<()> {
        let (_dir, port) = spawn_test_server().await?;

        // Not of the form `ejercicio-<N>`: the full practice file comes back.
        let response = reqwest::get(format!(
            "http://{TEST_HOST}:{port}/api/content?slug=basico&lesson=practicas&ejercicio=tres"
        ))
        .await?;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = response.json().await?;
        assert_eq!(body["title"], "practicas");
        assert_eq!(body["content"], PRACTICE_FILE);

        Ok(())
    }

    #[tokio::test]
    async fn test_quiz_every_tier() -> Fallible<()> {
        let (_dir, port) = spawn_test_server().await?;

        for tier in Difficulty::ALL {
            let response = reqwest::get(format!(
                "http://{TEST_HOST}:{port}/api/quiz?difficulty={tier}"
            ))
            .await?;
            assert_eq!(response.status(), StatusCode::OK);
            let body: Value = response.json().await?;
            assert_eq!(body["difficulty"], tier.to_string());
            assert!(body["options"].as_array().is_some());
            assert!(body["correctAnswer"].as_u64().is_some());
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_quiz_invalid_difficulty() -> Fallible<()> {
        let (_dir, port) = spawn_test_server().await?;

        let response = reqwest::get(format!(
            "http://{TEST_HOST}:{port}/api/quiz?difficulty=nightmare"
        ))
        .await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await?;
        assert_eq!(body["error"], "Dificultad no válida");

        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/api/quiz")).await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_route() -> Fallible<()> {
        let (_dir, port) = spawn_test_server().await?;

        let response = reqwest::get(format!("http://{TEST_HOST}:{port}/herp-derp")).await?;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        Ok(())
    }
}
