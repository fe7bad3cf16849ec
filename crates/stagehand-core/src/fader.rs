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

//! Screen fading during scene transitions.

use async_trait::async_trait;

/// Fades the screen to and from black around scene swaps.
///
/// Each method resolves when its fade has fully completed; the transition
/// machine awaits them, so a slow fade genuinely holds the transition.
#[async_trait]
pub trait ScreenFader: Send + Sync {
    /// Fades the screen out to fully covered.
    async fn fade_out(&self);

    /// Fades the screen back in to fully visible.
    async fn fade_in(&self);
}
