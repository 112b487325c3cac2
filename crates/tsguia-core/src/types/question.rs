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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

/// The five quiz difficulty tiers.
///
/// Serialized as the lowercase tier name, which is also the wire value of
/// the `difficulty` query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Basic,
    Intermediate,
    Advanced,
    Expert,
    Super,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Basic,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
        Difficulty::Super,
    ];

    /// Parse a wire value. Returns `None` for anything outside the five
    /// known tiers.
    pub fn parse(value: &str) -> Option<Difficulty> {
        match value {
            "basic" => Some(Difficulty::Basic),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            "expert" => Some(Difficulty::Expert),
            "super" => Some(Difficulty::Super),
            _ => None,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Basic => "basic",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
            Difficulty::Super => "super",
        };
        write!(f, "{name}")
    }
}

/// One answer option of a multiple-choice question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub text: String,
    pub example: String,
    pub explanation: String,
}

/// A multiple-choice quiz question.
///
/// Questions are authored as static data, loaded once at startup, and never
/// mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    /// Four options in all authored data; the format does not enforce it.
    pub options: Vec<AnswerOption>,
    /// Zero-based index into `options`.
    pub correct_answer: usize,
    pub explanation: String,
    pub difficulty: Difficulty,
}
