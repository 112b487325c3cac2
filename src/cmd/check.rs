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

use std::fs::read_to_string;

use tsguia_core::Difficulty;
use tsguia_core::QuizBank;
use tsguia_core::extract_exercises;
use walkdir::WalkDir;

use crate::content::resolve_content_root;
use crate::error::Fallible;
use crate::error::fail;

/// The name of the practice lesson within each section.
pub const PRACTICE_LESSON: &str = "practicas";

/// Validate the embedded quiz bank and every lesson file under the content
/// root, and print a summary.
///
/// Fails when the tree has no lesson files, or when a practice file
/// contains a block with neither description nor content (such a block is
/// unreachable through the API).
pub fn check_content(directory: Option<String>) -> Fallible<()> {
    let root = resolve_content_root(directory)?;

    let bank = QuizBank::embedded()?;
    println!("Quiz bank: {} questions.", bank.len());
    for tier in Difficulty::ALL {
        println!("  {tier}: {}", bank.tier(tier).len());
    }

    let mut lessons = 0;
    let mut practice_files = 0;
    let mut exercises = 0;
    let mut empty_blocks = 0;
    for entry in WalkDir::new(&root) {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().is_none_or(|ext| ext != "ts") {
            continue;
        }
        lessons += 1;
        let is_practice = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem == PRACTICE_LESSON);
        if !is_practice {
            continue;
        }
        practice_files += 1;
        let text = read_to_string(path)?;
        let blocks = extract_exercises(&text);
        if blocks.is_empty() {
            println!("warning: no exercises in {}", path.display());
        }
        for block in &blocks {
            if block.description.is_empty() && block.content.is_empty() {
                println!("empty block {} in {}", block.id, path.display());
                empty_blocks += 1;
            }
        }
        exercises += blocks.len();
    }

    println!(
        "Content: {lessons} lessons, {practice_files} practice files, {exercises} exercises."
    );
    if lessons == 0 {
        return fail("no lesson files found under the content root.");
    }
    if empty_blocks > 0 {
        return fail(format!("{empty_blocks} empty exercise blocks found."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::create_dir_all;
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_check_valid_tree() -> Fallible<()> {
        let dir = tempdir()?;
        create_dir_all(dir.path().join("basic"))?;
        write(dir.path().join("basic/variables.ts"), "let x = 1;\n")?;
        write(
            dir.path().join("basic/practicas.ts"),
            "// 1. Suma\ncode();\n",
        )?;
        check_content(Some(dir.path().display().to_string()))
    }

    #[test]
    fn test_check_empty_tree_fails() -> Fallible<()> {
        let dir = tempdir()?;
        let result = check_content(Some(dir.path().display().to_string()));
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_check_reports_empty_blocks() -> Fallible<()> {
        let dir = tempdir()?;
        create_dir_all(dir.path().join("basic"))?;
        write(
            dir.path().join("basic/practicas.ts"),
            "// 1.\n\n// 2. Dos\ncode();\n",
        )?;
        let result = check_content(Some(dir.path().display().to_string()));
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert!(err.to_string().contains("empty exercise blocks"));
        Ok(())
    }
}
