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

use crate::scene::SceneKey;

/// Starts scene loads on behalf of the transition machine.
///
/// Implementations wrap whatever actually brings a scene into memory:
/// an asset streamer, a level file parser, or a scripted fake in tests.
pub trait SceneLoadBackend: Send + Sync {
    /// Begins loading `scene` and returns a handle to the in-flight load.
    ///
    /// Returns `None` when the scene cannot be started at all (unknown
    /// key, missing file). The machine treats that as an invalid-scene
    /// failure, not a panic.
    fn start_load(&self, scene: &SceneKey) -> Option<Box<dyn LoadOperation>>;
}

/// Handle to one in-flight scene load.
///
/// # Contract
///
/// * [`raw_progress`] never decreases, and while activation is withheld it
///   saturates at [`ACTIVATION_THRESHOLD`] rather than reaching `1.0`.
/// * A fresh operation has activation allowed; the machine withholds it
///   explicitly when it wants to gate the swap.
/// * Once activation is allowed, [`is_done`] eventually turns `true` and
///   stays `true`.
///
/// [`raw_progress`]: LoadOperation::raw_progress
/// [`is_done`]: LoadOperation::is_done
/// [`ACTIVATION_THRESHOLD`]: super::ACTIVATION_THRESHOLD
pub trait LoadOperation: Send + Sync {
    /// Current raw progress of the load, in `0.0..=1.0`.
    fn raw_progress(&self) -> f32;

    /// Allows or withholds activation of the loaded scene.
    fn set_activation_allowed(&self, allowed: bool);

    /// Whether the scene has finished loading and activating.
    fn is_done(&self) -> bool;
}
