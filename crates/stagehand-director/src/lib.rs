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

//! # Stagehand Director
//!
//! The scene-transition driver built on the `stagehand-core` contracts.
//!
//! [`SceneDirector`] runs one transition at a time through its phases:
//! fade out, show an optional loading scene, stream normalized progress
//! while the target loads with activation withheld, honor delays and the
//! caller's loading lock, then activate and fade back in. Around it live
//! the fader implementations and their registry, a serde settings layer,
//! an ordered scene catalog for next/previous navigation, and a wave
//! loader for per-scene content.

pub mod catalog;
pub mod director;
pub mod fader;
pub mod loadable;
pub mod settings;

pub use catalog::SceneCatalog;
pub use director::SceneDirector;
pub use fader::{FaderRegistry, NoopFader, TimedFader};
pub use settings::{SettingsError, TransitionSettings};

pub mod prelude {
    //! Single-import surface for hosts embedding the director.
    pub use crate::catalog::SceneCatalog;
    pub use crate::director::SceneDirector;
    pub use crate::fader::{fade_screen, FaderRegistry, NoopFader, TimedFader};
    pub use crate::loadable::{load_scene_content, SceneLoadable};
    pub use crate::settings::{SettingsError, TransitionSettings};
    pub use stagehand_core::event::LoadingEvent;
    pub use stagehand_core::loading::{LoadOperation, SceneLoadBackend};
    pub use stagehand_core::{
        SceneKey, SceneTransition, ScreenFader, TransitionError, TransitionPhase,
    };
}
