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

use async_trait::async_trait;
use stagehand_core::ScreenFader;

/// A fader that completes instantly without any visual effect.
///
/// Keeps the fade phases structurally present for headless hosts, tests,
/// and tools where nothing is drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFader;

#[async_trait]
impl ScreenFader for NoopFader {
    async fn fade_out(&self) {}

    async fn fade_in(&self) {}
}
