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

//! Ordered scene catalog for next/previous navigation.

use serde::{Deserialize, Serialize};
use stagehand_core::scene::SceneKey;

/// An ordered list of scenes, the way a build or level sequence defines it.
///
/// Navigation wraps: after the last entry comes the first, before the first
/// comes the last. A scene that is not in the catalog (or no scene at all)
/// navigates to the first entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneCatalog {
    scenes: Vec<SceneKey>,
}

impl SceneCatalog {
    /// Builds a catalog from scene keys in order.
    pub fn new<I, K>(scenes: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<SceneKey>,
    {
        Self {
            scenes: scenes.into_iter().map(Into::into).collect(),
        }
    }

    /// The catalog entries in order.
    #[must_use]
    pub fn scenes(&self) -> &[SceneKey] {
        &self.scenes
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Index of `scene` in the catalog, if present.
    #[must_use]
    pub fn position(&self, scene: &SceneKey) -> Option<usize> {
        self.scenes.iter().position(|entry| entry == scene)
    }

    /// The entry after `active`, wrapping past the end to the first.
    ///
    /// Returns the first entry when `active` is `None` or unknown, and
    /// `None` only when the catalog is empty.
    #[must_use]
    pub fn next_after(&self, active: Option<&SceneKey>) -> Option<&SceneKey> {
        let len = self.scenes.len();
        if len == 0 {
            return None;
        }
        let index = match active.and_then(|scene| self.position(scene)) {
            Some(current) => (current + 1) % len,
            None => 0,
        };
        Some(&self.scenes[index])
    }

    /// The entry before `active`, wrapping past the start to the last.
    ///
    /// Same fallbacks as [`next_after`](SceneCatalog::next_after): a `None`
    /// or unknown active scene lands on the first entry here too. The
    /// fallback is a fixed starting point, not a backwards wrap to the
    /// last entry.
    #[must_use]
    pub fn previous_before(&self, active: Option<&SceneKey>) -> Option<&SceneKey> {
        let len = self.scenes.len();
        if len == 0 {
            return None;
        }
        let index = match active.and_then(|scene| self.position(scene)) {
            Some(current) => (current + len - 1) % len,
            None => 0,
        };
        Some(&self.scenes[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SceneCatalog {
        SceneCatalog::new(["Menu", "Level01", "Level02"])
    }

    #[test]
    fn empty_catalog_navigates_nowhere() {
        let catalog = SceneCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.next_after(None), None);
        assert_eq!(catalog.previous_before(None), None);
    }

    #[test]
    fn navigation_without_an_active_scene_starts_at_the_first_entry() {
        let catalog = catalog();
        assert_eq!(catalog.next_after(None), Some(&SceneKey::new("Menu")));
        assert_eq!(catalog.previous_before(None), Some(&SceneKey::new("Menu")));
    }

    #[test]
    fn unknown_active_scene_falls_back_to_the_first_entry() {
        let catalog = catalog();
        let stranger = SceneKey::new("NotInCatalog");
        assert_eq!(
            catalog.next_after(Some(&stranger)),
            Some(&SceneKey::new("Menu"))
        );
        assert_eq!(
            catalog.previous_before(Some(&stranger)),
            Some(&SceneKey::new("Menu"))
        );
    }

    #[test]
    fn next_wraps_from_the_last_entry_to_the_first() {
        let catalog = catalog();
        let last = SceneKey::new("Level02");
        assert_eq!(
            catalog.next_after(Some(&last)),
            Some(&SceneKey::new("Menu"))
        );
    }

    #[test]
    fn previous_wraps_from_the_first_entry_to_the_last() {
        let catalog = catalog();
        let first = SceneKey::new("Menu");
        assert_eq!(
            catalog.previous_before(Some(&first)),
            Some(&SceneKey::new("Level02"))
        );
    }

    #[test]
    fn interior_entries_step_normally() {
        let catalog = catalog();
        let middle = SceneKey::new("Level01");
        assert_eq!(
            catalog.next_after(Some(&middle)),
            Some(&SceneKey::new("Level02"))
        );
        assert_eq!(
            catalog.previous_before(Some(&middle)),
            Some(&SceneKey::new("Menu"))
        );
    }

    #[test]
    fn json_round_trip_is_a_plain_array() {
        let catalog = catalog();
        let json = serde_json::to_string(&catalog).expect("serialize");
        assert_eq!(json, r#"["Menu","Level01","Level02"]"#);
        let back: SceneCatalog = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, catalog);
    }
}
