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

//! Scene-loading backend abstraction.
//!
//! The transition machine never loads scenes itself; it drives a
//! [`SceneLoadBackend`] that hands back one [`LoadOperation`] per started
//! load. The backend owns how a scene actually gets into memory, the
//! machine only polls, gates activation, and rescales progress via
//! [`normalized_progress`].

mod activation;
mod backend;

pub use activation::{normalized_progress, ACTIVATION_THRESHOLD};
pub use backend::{LoadOperation, SceneLoadBackend};
