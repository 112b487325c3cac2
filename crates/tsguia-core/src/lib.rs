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

//! tsguia-core: Core library for the tsguia TypeScript course.
//!
//! This library provides the pure logic shared by the server and the
//! browser client:
//! - Section slug normalization
//! - Extracting numbered exercises from practice lesson files
//! - The embedded multiple-choice quiz bank and random selection
//! - The client quiz session state machine
//! - Exercise solution verification

pub mod bank;
pub mod error;
pub mod extractor;
pub mod rng;
pub mod session;
pub mod slug;
pub mod types;
pub mod verify;

// Re-exports for convenience
pub use bank::QuizBank;
pub use error::{ErrorReport, Fallible, fail};
pub use extractor::{extract_exercises, find_exercise};
pub use rng::TinyRng;
pub use session::{QuizSession, SessionEvent};
pub use slug::normalize_section;
pub use types::exercise::ExerciseBlock;
pub use types::question::{AnswerOption, Difficulty, QuizQuestion};
pub use verify::verify_solution;
