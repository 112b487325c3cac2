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

use serde::Deserialize;
use serde::Serialize;

/// One numbered exercise extracted from a practice lesson file.
///
/// Exercises are never stored: they are derived on every request by
/// splitting the lesson text at its block markers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExerciseBlock {
    /// 1-based position of the block in parse order.
    pub id: usize,
    /// Display title, `"Ejercicio {id}"`.
    pub title: String,
    /// First comment line of the block, marker stripped. May be empty.
    pub description: String,
    /// The non-comment lines of the block, rejoined and trimmed.
    pub content: String,
}
