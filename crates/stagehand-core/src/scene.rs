// Copyright 2025 eraflo
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

//! Scene identity.
//!
//! A scene is addressed by an opaque key, typically the name or asset path
//! the host's load primitive understands. The key carries no semantics of its
//! own beyond equality; [`SceneKey::name`] is a convenience for display
//! purposes only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a scene to the host's load primitive.
///
/// Keys are compared verbatim; `"Levels/Hub"` and `"Hub"` are different
/// scenes as far as the director is concerned, even if the host resolves them
/// to the same content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneKey(String);

impl SceneKey {
    /// Creates a key from a scene name or path.
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The raw key string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scene name without any leading path or trailing extension.
    ///
    /// `"Assets/Scenes/Level/StartLevel.scn"` yields `"StartLevel"`. A key
    /// with no separators or extension is returned unchanged. Text after the
    /// last `.` in the final segment is treated as an extension, except when
    /// the segment starts with it (dotfile style).
    #[must_use]
    pub fn name(&self) -> &str {
        let segment = self.0.rsplit('/').next().unwrap_or(&self.0);
        match segment.rfind('.') {
            Some(idx) if idx > 0 => &segment[..idx],
            _ => segment,
        }
    }
}

impl fmt::Display for SceneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SceneKey {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for SceneKey {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl AsRef<str> for SceneKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
