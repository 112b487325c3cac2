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

use crate::types::exercise::ExerciseBlock;

/// A single-pass, line-scanning extractor for practice lesson files.
///
/// A practice file is a sequence of numbered blocks. Each block starts at a
/// marker: a line comment whose body is one or more digits followed by a
/// literal period, e.g. `// 3.`. Text on the marker line after the period
/// belongs to the block. Everything before the first marker is front matter
/// and is discarded.
///
/// Block ids are assigned by parse order, 1-based. The digits in the marker
/// are discarded: if authors skip or repeat a number, the block keeps its
/// positional id.
enum State {
    /// Before the first marker. Lines are discarded.
    Seeking,
    /// Inside block number `id`, accumulating its raw lines.
    InBlock { id: usize, lines: Vec<String> },
}

enum Line<'a> {
    /// A marker line like `// 3. Suma`. Carries the text after the period.
    Marker(&'a str),
    /// Any other line.
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn read(line: &'a str) -> Self {
        match marker_rest(line) {
            Some(rest) => Line::Marker(rest),
            None => Line::Text(line),
        }
    }
}

/// If `line` is a block marker, return the text after the period.
///
/// A marker is a line whose first non-whitespace characters are `//`,
/// followed by optional whitespace, one or more ASCII digits, and a `.`.
fn marker_rest(line: &str) -> Option<&str> {
    let body = line.trim_start().strip_prefix("//")?;
    let body = body.trim_start();
    let digits = body.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    body[digits..].strip_prefix('.')
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with("//")
}

/// Strip a leading line-comment marker and surrounding whitespace.
fn strip_comment(line: &str) -> &str {
    let trimmed = line.trim();
    match trimmed.strip_prefix("//") {
        Some(rest) => rest.trim(),
        None => trimmed,
    }
}

/// Derive the title, description, and content of a block from its raw lines.
///
/// The description is the first non-blank line, with any comment syntax
/// stripped (on the marker line itself the comment syntax was consumed by
/// the split). The content is every later line that is not a comment,
/// rejoined and trimmed.
fn derive_block(id: usize, lines: &[String]) -> ExerciseBlock {
    let title = format!("Ejercicio {id}");
    let first = lines.iter().position(|line| !line.trim().is_empty());
    let (description, content) = match first {
        Some(idx) => {
            let description = strip_comment(&lines[idx]).to_string();
            let content = lines[idx + 1..]
                .iter()
                .filter(|line| !is_comment(line))
                .map(|line| line.as_str())
                .collect::<Vec<&str>>()
                .join("\n")
                .trim()
                .to_string();
            (description, content)
        }
        None => (String::new(), String::new()),
    };
    ExerciseBlock {
        id,
        title,
        description,
        content,
    }
}

/// Extract all exercise blocks from the given lesson text, in parse order.
pub fn extract_exercises(text: &str) -> Vec<ExerciseBlock> {
    let mut blocks = Vec::new();
    let mut state = State::Seeking;
    for raw in text.lines() {
        state = match (state, Line::read(raw)) {
            (State::Seeking, Line::Marker(rest)) => State::InBlock {
                id: 1,
                lines: vec![rest.to_string()],
            },
            (State::Seeking, Line::Text(_)) => State::Seeking,
            (State::InBlock { id, lines }, Line::Marker(rest)) => {
                blocks.push(derive_block(id, &lines));
                State::InBlock {
                    id: id + 1,
                    lines: vec![rest.to_string()],
                }
            }
            (State::InBlock { id, mut lines }, Line::Text(line)) => {
                lines.push(line.to_string());
                State::InBlock { id, lines }
            }
        };
    }
    if let State::InBlock { id, lines } = state {
        blocks.push(derive_block(id, &lines));
    }
    blocks
}

/// Select exercise `n` (1-based) from the given lesson text.
///
/// Returns `None` when `n` is out of range or the selected block has
/// neither a description nor content.
pub fn find_exercise(text: &str, n: usize) -> Option<ExerciseBlock> {
    if n == 0 {
        return None;
    }
    let mut blocks = extract_exercises(text);
    if n > blocks.len() {
        return None;
    }
    let block = blocks.swap_remove(n - 1);
    if block.description.is_empty() && block.content.is_empty() {
        return None;
    }
    Some(block)
}
