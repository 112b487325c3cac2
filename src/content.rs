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

use std::path::PathBuf;

use crate::error::Fallible;
use crate::error::fail;

/// The lesson store maps (section, lesson) pairs from the client to file
/// paths under the content root.
///
/// Section and lesson names come from query strings, so we have to ensure
/// there's no possibility of directory traversals.
pub struct LessonStore {
    /// Absolute path to the content root directory.
    root: PathBuf,
}

/// Errors that can occur when locating a lesson file.
#[derive(Debug, PartialEq)]
pub enum LessonStoreError {
    /// The section or lesson name contains path syntax.
    InvalidName,
    /// No lesson file exists at the computed path.
    NotFound,
}

impl std::fmt::Display for LessonStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            LessonStoreError::InvalidName => "name contains path syntax.",
            LessonStoreError::NotFound => "lesson file does not exist.",
        };
        write!(f, "{msg}")
    }
}

impl LessonStore {
    /// Construct a new [`LessonStore`].
    pub fn new(root: PathBuf) -> Self {
        assert!(root.is_absolute());
        Self { root }
    }

    /// Given a normalized section and a lesson name, check that a lesson
    /// file exists at `{root}/{section}/{lesson}.ts` and return its path.
    pub fn validate(&self, section: &str, lesson: &str) -> Result<PathBuf, LessonStoreError> {
        validate_name(section)?;
        validate_name(lesson)?;
        let path = self.root.join(section).join(format!("{lesson}.ts"));
        if !path.is_file() {
            return Err(LessonStoreError::NotFound);
        }
        Ok(path)
    }
}

/// Reject names that could escape the content root when joined.
fn validate_name(name: &str) -> Result<(), LessonStoreError> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(LessonStoreError::InvalidName);
    }
    Ok(())
}

/// Resolve the content root directory from the command line, defaulting to
/// the current working directory.
pub fn resolve_content_root(directory: Option<String>) -> Fallible<PathBuf> {
    let path = match directory {
        Some(directory) => PathBuf::from(directory),
        None => std::env::current_dir()?,
    };
    if !path.exists() {
        return fail("directory does not exist.");
    }
    if !path.is_dir() {
        return fail("content root is not a directory.");
    }
    Ok(path.canonicalize()?)
}
