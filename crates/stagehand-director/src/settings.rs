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

//! Declarative transition settings, loadable from JSON.
//!
//! A [`TransitionSettings`] is the file-friendly shape of a
//! [`SceneTransition`]: durations as plain seconds and the fader as a
//! stable id into a [`FaderRegistry`] instead of a live instance.
//! [`resolve`](TransitionSettings::resolve) turns it into the real thing.

use crate::fader::FaderRegistry;
use serde::{Deserialize, Serialize};
use stagehand_core::{SceneKey, SceneTransition};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or resolving transition settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings name a fader id the registry does not know.
    #[error("no fader registered under id '{id}'")]
    UnknownFader {
        /// The unresolved fader id.
        id: String,
    },

    /// A duration field holds seconds no [`Duration`] can represent
    /// (negative, non-finite, or too large).
    #[error("'{field}' is not a representable duration: got {seconds} seconds")]
    InvalidDuration {
        /// The offending settings field.
        field: &'static str,
        /// The rejected value.
        seconds: f32,
    },

    /// The settings file could not be read.
    #[error("failed to read settings file '{}'", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for this shape.
    #[error("failed to parse settings file '{}'", path.display())]
    Parse {
        /// The file that could not be parsed.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

/// File-friendly description of one scene transition.
///
/// All fields are optional in JSON; missing fields take the bare-transition
/// defaults (zero delays, no loading scene, no fader).
///
/// ```json
/// {
///     "time_before_loading": 0.25,
///     "time_after_loading": 1.0,
///     "loading_scene": "Loading",
///     "screen_fader": "black"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionSettings {
    /// Seconds to wait before the target load starts.
    pub time_before_loading: f32,
    /// Seconds to wait after the target load has finished preparing.
    pub time_after_loading: f32,
    /// The intermediate loading scene, if one should be shown.
    pub loading_scene: Option<SceneKey>,
    /// Registry id of the fader to use, if any.
    pub screen_fader: Option<String>,
}

impl TransitionSettings {
    /// Reads settings from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the live [`SceneTransition`], resolving the fader id against
    /// `faders`.
    pub fn resolve(&self, faders: &FaderRegistry) -> Result<SceneTransition, SettingsError> {
        let mut transition = SceneTransition::new()
            .with_time_before_loading(seconds(
                "time_before_loading",
                self.time_before_loading,
            )?)
            .with_time_after_loading(seconds("time_after_loading", self.time_after_loading)?);

        if let Some(scene) = &self.loading_scene {
            transition = transition.with_loading_scene(scene.clone());
        }
        if let Some(id) = &self.screen_fader {
            let fader = faders
                .get(id)
                .ok_or_else(|| SettingsError::UnknownFader { id: id.clone() })?;
            transition = transition.with_screen_fader(fader);
        }
        Ok(transition)
    }
}

fn seconds(field: &'static str, value: f32) -> Result<Duration, SettingsError> {
    // Rejects NaN, negative, and out-of-range seconds in one conversion.
    Duration::try_from_secs_f32(value).map_err(|_| SettingsError::InvalidDuration {
        field,
        seconds: value,
    })
}
