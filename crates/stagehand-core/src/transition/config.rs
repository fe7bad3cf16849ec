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

use crate::fader::ScreenFader;
use crate::scene::SceneKey;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Configuration for one scene transition.
///
/// The default transition has zero delays, no loading scene, and no fader:
/// the fastest possible swap. The director takes the configuration by value
/// when a transition begins, so it is frozen for the whole run.
///
/// # Example
///
/// ```rust
/// use stagehand_core::SceneTransition;
/// use std::time::Duration;
///
/// let transition = SceneTransition::new()
///     .with_loading_scene("Loading")
///     .with_time_before_loading(Duration::from_millis(250));
/// assert!(transition.has_loading_scene());
/// ```
#[derive(Clone, Default)]
pub struct SceneTransition {
    time_before_loading: Duration,
    time_after_loading: Duration,
    loading_scene: Option<SceneKey>,
    screen_fader: Option<Arc<dyn ScreenFader>>,
}

impl SceneTransition {
    /// Creates the default transition: no delays, no loading scene, no fader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time to wait before the target load starts.
    #[must_use]
    pub fn with_time_before_loading(mut self, time: Duration) -> Self {
        self.time_before_loading = time;
        self
    }

    /// Sets the time to wait after the target load has finished preparing.
    #[must_use]
    pub fn with_time_after_loading(mut self, time: Duration) -> Self {
        self.time_after_loading = time;
        self
    }

    /// Shows the given scene while the target load runs.
    #[must_use]
    pub fn with_loading_scene(mut self, scene: impl Into<SceneKey>) -> Self {
        self.loading_scene = Some(scene.into());
        self
    }

    /// Uses the given fader for the fade phases.
    #[must_use]
    pub fn with_screen_fader(mut self, fader: Arc<dyn ScreenFader>) -> Self {
        self.screen_fader = Some(fader);
        self
    }

    /// Time to wait before the target load starts.
    #[must_use]
    pub fn time_before_loading(&self) -> Duration {
        self.time_before_loading
    }

    /// Time to wait after the target load has finished preparing.
    #[must_use]
    pub fn time_after_loading(&self) -> Duration {
        self.time_after_loading
    }

    /// The intermediate loading scene, if one should be shown.
    #[must_use]
    pub fn loading_scene(&self) -> Option<&SceneKey> {
        self.loading_scene.as_ref()
    }

    /// The fader driving the fade phases, if any.
    #[must_use]
    pub fn screen_fader(&self) -> Option<&Arc<dyn ScreenFader>> {
        self.screen_fader.as_ref()
    }

    /// Whether an intermediate loading scene is configured.
    #[must_use]
    pub fn has_loading_scene(&self) -> bool {
        self.loading_scene.is_some()
    }

    /// Whether a fader is configured.
    #[must_use]
    pub fn has_screen_fader(&self) -> bool {
        self.screen_fader.is_some()
    }
}

impl fmt::Debug for SceneTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneTransition")
            .field("time_before_loading", &self.time_before_loading)
            .field("time_after_loading", &self.time_after_loading)
            .field("loading_scene", &self.loading_scene)
            .field("screen_fader", &self.screen_fader.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct SilentFader;

    #[async_trait]
    impl ScreenFader for SilentFader {
        async fn fade_out(&self) {}
        async fn fade_in(&self) {}
    }

    #[test]
    fn default_transition_is_bare() {
        let transition = SceneTransition::new();
        assert_eq!(transition.time_before_loading(), Duration::ZERO);
        assert_eq!(transition.time_after_loading(), Duration::ZERO);
        assert!(!transition.has_loading_scene());
        assert!(!transition.has_screen_fader());
    }

    #[test]
    fn builder_sets_all_fields() {
        let transition = SceneTransition::new()
            .with_time_before_loading(Duration::from_secs(1))
            .with_time_after_loading(Duration::from_millis(500))
            .with_loading_scene("Loading")
            .with_screen_fader(Arc::new(SilentFader));

        assert_eq!(transition.time_before_loading(), Duration::from_secs(1));
        assert_eq!(transition.time_after_loading(), Duration::from_millis(500));
        assert_eq!(transition.loading_scene(), Some(&SceneKey::new("Loading")));
        assert!(transition.has_screen_fader());
    }

    #[test]
    fn debug_reports_fader_presence_not_contents() {
        let bare = format!("{:?}", SceneTransition::new());
        assert!(bare.contains("screen_fader: false"));

        let faded = SceneTransition::new().with_screen_fader(Arc::new(SilentFader));
        assert!(format!("{faded:?}").contains("screen_fader: true"));
    }
}
