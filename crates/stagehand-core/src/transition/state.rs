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

use super::TransitionPhase;
use crate::scene::SceneKey;

/// Snapshot of where a transition currently stands.
///
/// A transition is in flight exactly while [`loading_target`] is `Some`.
///
/// [`loading_target`]: TransitionState::loading_target
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransitionState {
    /// The phase the transition machine is currently in.
    pub phase: TransitionPhase,
    /// The scene being loaded, if a transition is in flight.
    pub loading_target: Option<SceneKey>,
    /// Last normalized progress value published, in `0.0..=1.0`.
    pub progress: f32,
    /// The scene that last finished activating, if any.
    pub active_scene: Option<SceneKey>,
}

impl TransitionState {
    /// Creates an idle state with no active scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a transition is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading_target.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_idle() {
        let state = TransitionState::new();
        assert_eq!(state.phase, TransitionPhase::Idle);
        assert!(!state.is_loading());
        assert_eq!(state.progress, 0.0);
        assert!(state.active_scene.is_none());
    }

    #[test]
    fn loading_follows_target_presence() {
        let mut state = TransitionState::new();
        state.loading_target = Some(SceneKey::new("Level01"));
        assert!(state.is_loading());

        state.loading_target = None;
        assert!(!state.is_loading());
    }
}
