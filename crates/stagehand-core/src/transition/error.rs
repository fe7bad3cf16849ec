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
use thiserror::Error;

/// Errors a scene transition can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// A transition was requested while another one is still in flight.
    #[error("cannot load scene '{requested}': '{current}' is already loading")]
    AlreadyInProgress {
        /// The scene currently being loaded.
        current: SceneKey,
        /// The scene that was just requested.
        requested: SceneKey,
    },

    /// The backend refused to start loading the intermediate loading scene.
    #[error("loading scene '{scene}' could not be started")]
    InvalidLoadingScene {
        /// The loading scene that failed to start.
        scene: SceneKey,
    },

    /// The backend refused to start loading the target scene.
    #[error("target scene '{scene}' could not be started")]
    InvalidTargetScene {
        /// The target scene that failed to start.
        scene: SceneKey,
    },
}
