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

use std::collections::HashMap;

use crate::error::Fallible;
use crate::error::fail;
use crate::rng::TinyRng;
use crate::types::question::Difficulty;
use crate::types::question::QuizQuestion;

/// The question bank shipped with the binary.
const EMBEDDED_QUESTIONS: &str = include_str!("data/questions.json");

/// The hand-authored question bank, partitioned by difficulty tier.
///
/// Loaded once at startup from data baked into the binary; read-only
/// afterwards. Every tier is guaranteed non-empty by construction.
pub struct QuizBank {
    questions: HashMap<Difficulty, Vec<QuizQuestion>>,
}

impl QuizBank {
    /// Load the bank embedded in the binary.
    pub fn embedded() -> Fallible<Self> {
        Self::from_json(EMBEDDED_QUESTIONS)
    }

    /// Parse a bank from a JSON array of questions and check that every
    /// tier has at least one question.
    pub fn from_json(json: &str) -> Fallible<Self> {
        let all: Vec<QuizQuestion> = serde_json::from_str(json)?;
        let mut questions: HashMap<Difficulty, Vec<QuizQuestion>> = HashMap::new();
        for question in all {
            questions.entry(question.difficulty).or_default().push(question);
        }
        for tier in Difficulty::ALL {
            if !questions.contains_key(&tier) {
                return fail(format!("quiz bank has no questions for tier: {tier}"));
            }
        }
        Ok(QuizBank { questions })
    }

    /// The questions of one tier, in authoring order.
    pub fn tier(&self, difficulty: Difficulty) -> &[QuizQuestion] {
        // Every tier is present; checked in from_json.
        &self.questions[&difficulty]
    }

    /// Pick one question of the given tier, uniformly at random.
    pub fn pick(&self, difficulty: Difficulty, rng: &mut TinyRng) -> &QuizQuestion {
        let questions = self.tier(difficulty);
        let index = rng.generate(questions.len() as u32) as usize;
        &questions[index]
    }

    pub fn len(&self) -> usize {
        self.questions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_bank_loads() -> Fallible<()> {
        let bank = QuizBank::embedded()?;
        assert!(!bank.is_empty());
        Ok(())
    }

    #[test]
    fn test_every_tier_is_non_empty() -> Fallible<()> {
        let bank = QuizBank::embedded()?;
        for tier in Difficulty::ALL {
            assert!(!bank.tier(tier).is_empty(), "tier {tier} is empty");
        }
        Ok(())
    }

    #[test]
    fn test_questions_are_well_formed() -> Fallible<()> {
        let bank = QuizBank::embedded()?;
        for tier in Difficulty::ALL {
            for question in bank.tier(tier) {
                assert_eq!(question.difficulty, tier);
                assert_eq!(question.options.len(), 4);
                assert!(question.correct_answer < question.options.len());
                assert!(!question.question.is_empty());
            }
        }
        Ok(())
    }

    #[test]
    fn test_question_ids_are_unique() -> Fallible<()> {
        let bank = QuizBank::embedded()?;
        let mut seen = std::collections::HashSet::new();
        for tier in Difficulty::ALL {
            for question in bank.tier(tier) {
                assert!(seen.insert(question.id), "duplicate id {}", question.id);
            }
        }
        Ok(())
    }

    #[test]
    fn test_pick_returns_question_of_requested_tier() -> Fallible<()> {
        let bank = QuizBank::embedded()?;
        let mut rng = TinyRng::from_seed(99);
        for tier in Difficulty::ALL {
            for _ in 0..20 {
                assert_eq!(bank.pick(tier, &mut rng).difficulty, tier);
            }
        }
        Ok(())
    }

    #[test]
    fn test_missing_tier_is_rejected() {
        let json = r#"[{
            "id": 1,
            "question": "¿?",
            "options": [],
            "correctAnswer": 0,
            "explanation": "",
            "difficulty": "basic"
        }]"#;
        let result = QuizBank::from_json(json);
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert!(err.to_string().contains("intermediate"));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(QuizBank::from_json("not json").is_err());
        assert!(QuizBank::from_json("{}").is_err());
    }
}
