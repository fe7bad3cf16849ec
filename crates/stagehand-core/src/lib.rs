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

//! # Stagehand Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! for scene-transition orchestration.
//!
//! The actual transition driver lives in `stagehand-director`; this crate
//! defines the boundaries it orchestrates across: the load primitive
//! ([`loading::SceneLoadBackend`]), the screen fader ([`fader::ScreenFader`]),
//! the progress observer channel ([`progress::ProgressReporter`]), and the
//! data types describing a transition.

#![warn(missing_docs)]

pub mod event;
pub mod fader;
pub mod loading;
pub mod progress;
pub mod scene;
pub mod transition;

pub use fader::ScreenFader;
pub use scene::SceneKey;
pub use transition::{SceneTransition, TransitionError, TransitionPhase, TransitionState};
