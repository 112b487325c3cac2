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

use crate::error::Fallible;
use crate::error::fail;
use crate::types::question::Difficulty;
use crate::types::question::QuizQuestion;

/// The state machine behind the quiz modal.
///
/// The client holds one of these and advances it with [`SessionEvent`]s:
/// pick a difficulty, wait for a question to arrive, answer it, then either
/// ask for the next question or close the modal. Closing is allowed from
/// every state. There are no timers and no in-flight fetch cancellation;
/// the session only tracks what should be on screen.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizSession {
    /// The difficulty picker is shown.
    ChoosingDifficulty,
    /// A question for `difficulty` has been requested and is in flight.
    Loading { difficulty: Difficulty },
    /// A question is displayed, waiting for the user to pick an option.
    AwaitingAnswer { question: QuizQuestion },
    /// The answer has been graded; the explanation is shown.
    ShowingResult {
        question: QuizQuestion,
        chosen: usize,
        correct: bool,
    },
    /// Terminal state.
    Closed,
}

#[derive(Clone, Debug)]
pub enum SessionEvent {
    /// The user picked a difficulty tier.
    ChooseDifficulty(Difficulty),
    /// The fetch for a question completed.
    QuestionLoaded(QuizQuestion),
    /// The user submitted the option at this index.
    SubmitAnswer(usize),
    /// The user asked for another question of the same difficulty.
    NextQuestion,
    /// The user dismissed the modal.
    Close,
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession::ChoosingDifficulty
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, QuizSession::Closed)
    }

    /// Advance the session. Events that make no sense in the current state
    /// are errors.
    pub fn step(self, event: SessionEvent) -> Fallible<QuizSession> {
        match (self, event) {
            (_, SessionEvent::Close) => Ok(QuizSession::Closed),
            (QuizSession::ChoosingDifficulty, SessionEvent::ChooseDifficulty(difficulty)) => {
                Ok(QuizSession::Loading { difficulty })
            }
            (QuizSession::Loading { .. }, SessionEvent::QuestionLoaded(question)) => {
                Ok(QuizSession::AwaitingAnswer { question })
            }
            (QuizSession::AwaitingAnswer { question }, SessionEvent::SubmitAnswer(chosen)) => {
                let correct = chosen == question.correct_answer;
                Ok(QuizSession::ShowingResult {
                    question,
                    chosen,
                    correct,
                })
            }
            (QuizSession::ShowingResult { question, .. }, SessionEvent::NextQuestion) => {
                Ok(QuizSession::Loading {
                    difficulty: question.difficulty,
                })
            }
            (state, event) => fail(format!(
                "invalid quiz session transition: {} in state {}",
                event.name(),
                state.name()
            )),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            QuizSession::ChoosingDifficulty => "ChoosingDifficulty",
            QuizSession::Loading { .. } => "Loading",
            QuizSession::AwaitingAnswer { .. } => "AwaitingAnswer",
            QuizSession::ShowingResult { .. } => "ShowingResult",
            QuizSession::Closed => "Closed",
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        QuizSession::new()
    }
}

impl SessionEvent {
    fn name(&self) -> &'static str {
        match self {
            SessionEvent::ChooseDifficulty(_) => "ChooseDifficulty",
            SessionEvent::QuestionLoaded(_) => "QuestionLoaded",
            SessionEvent::SubmitAnswer(_) => "SubmitAnswer",
            SessionEvent::NextQuestion => "NextQuestion",
            SessionEvent::Close => "Close",
        }
    }
}
