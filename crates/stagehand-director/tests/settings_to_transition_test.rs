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

//! Settings file to finished transition, end to end.

use stagehand_core::loading::{LoadOperation, SceneLoadBackend, ACTIVATION_THRESHOLD};
use stagehand_director::prelude::*;
use std::io::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Backend that accepts every scene and finishes on the first poll.
struct AcceptAllBackend;

impl SceneLoadBackend for AcceptAllBackend {
    fn start_load(&self, _scene: &SceneKey) -> Option<Box<dyn LoadOperation>> {
        Some(Box::new(InstantOperation {
            activation_allowed: AtomicBool::new(true),
        }))
    }
}

struct InstantOperation {
    activation_allowed: AtomicBool,
}

impl LoadOperation for InstantOperation {
    fn raw_progress(&self) -> f32 {
        ACTIVATION_THRESHOLD
    }

    fn set_activation_allowed(&self, allowed: bool) {
        self.activation_allowed.store(allowed, Ordering::Relaxed);
    }

    fn is_done(&self) -> bool {
        self.activation_allowed.load(Ordering::Relaxed)
    }
}

#[tokio::test(start_paused = true)]
async fn settings_file_drives_a_full_transition() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "time_before_loading": 0.25,
            "time_after_loading": 0.5,
            "loading_scene": "Loading",
            "screen_fader": "cut"
        }}"#
    )
    .expect("write settings");

    let mut registry = FaderRegistry::new();
    registry.register("cut", Arc::new(NoopFader));

    let settings = TransitionSettings::from_path(file.path()).expect("parse settings");
    let transition = settings.resolve(&registry).expect("resolve settings");
    assert!(transition.has_loading_scene());
    assert!(transition.has_screen_fader());

    let director = SceneDirector::new(Arc::new(AcceptAllBackend));
    let start = tokio::time::Instant::now();
    director
        .load_scene("Level01", transition)
        .await
        .expect("transition should succeed");

    // Both configured delays ran; the fades and loads are instant.
    assert_eq!(start.elapsed(), Duration::from_millis(750));
    assert_eq!(director.active_scene(), Some(SceneKey::new("Level01")));
}

#[tokio::test(start_paused = true)]
async fn empty_settings_resolve_to_a_bare_instant_transition() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "{{}}").expect("write settings");

    let settings = TransitionSettings::from_path(file.path()).expect("parse settings");
    let transition = settings.resolve(&FaderRegistry::new()).expect("resolve settings");
    assert!(!transition.has_loading_scene());
    assert!(!transition.has_screen_fader());

    let director = SceneDirector::new(Arc::new(AcceptAllBackend));
    let start = tokio::time::Instant::now();
    director
        .load_scene("Level01", transition)
        .await
        .expect("transition should succeed");

    assert_eq!(start.elapsed(), Duration::ZERO);
}
