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

use stagehand_core::ScreenFader;
use std::collections::HashMap;
use std::sync::Arc;

/// Shared fader instances keyed by a stable string id.
///
/// The composition root builds the registry once at startup and keeps it
/// for the lifetime of the application; settings files then refer to faders
/// by id instead of owning instances. Handing out `Arc`s means every
/// transition configured with the same id shares one fader (and one alpha
/// channel, for the tweens a renderer draws).
#[derive(Default)]
pub struct FaderRegistry {
    faders: HashMap<String, Arc<dyn ScreenFader>>,
}

impl FaderRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            faders: HashMap::new(),
        }
    }

    /// Registers `fader` under `id`, replacing any previous holder of the id.
    pub fn register(&mut self, id: impl Into<String>, fader: Arc<dyn ScreenFader>) {
        self.faders.insert(id.into(), fader);
    }

    /// Retrieves a shared handle to the fader registered under `id`.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<dyn ScreenFader>> {
        self.faders.get(id).cloned()
    }

    /// Returns `true` if a fader is registered under `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.faders.contains_key(id)
    }

    /// Registered ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.faders.keys().map(String::as_str)
    }

    /// Number of registered faders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faders.len()
    }

    /// Returns `true` if no faders are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faders.is_empty()
    }
}
