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

/// Check user-typed code against a stored solution.
///
/// The comparison is purely syntactic: both strings are stripped of every
/// whitespace character and compared for equality. Renamed variables or
/// equivalent-but-different syntax count as wrong.
pub fn verify_solution(code: &str, solution: &str) -> bool {
    strip_whitespace(code) == strip_whitespace(solution)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
