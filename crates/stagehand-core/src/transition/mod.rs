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

//! Data types describing one scene transition.
//!
//! [`SceneTransition`] is the caller-supplied configuration (delays, optional
//! loading scene, optional fader); it is taken by value when a transition
//! starts, so it cannot change mid-flight. [`TransitionState`] is the
//! observable side: which [`TransitionPhase`] the director is in, which scene
//! is being loaded, and how far along the load is.

mod config;
mod error;
mod phase;
mod state;

pub use self::config::SceneTransition;
pub use self::error::TransitionError;
pub use self::phase::TransitionPhase;
pub use self::state::TransitionState;
