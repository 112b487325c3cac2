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

/// Map a localized section slug, as it appears in the site URL, to the
/// directory name used under the content root.
///
/// Unrecognized slugs pass through unchanged: the caller will fail to find
/// the directory rather than fail here.
pub fn normalize_section(slug: &str) -> &str {
    match slug {
        "basico" => "basic",
        "intermedio" => "intermediate",
        "avanzado" => "advanced",
        "experto" => "expert",
        other => other,
    }
}
