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

// Stagehand Sandbox
// Main binary for testing and demos

use std::io::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use stagehand_core::loading::{LoadOperation, SceneLoadBackend, ACTIVATION_THRESHOLD};
use stagehand_director::prelude::*;

/// Stand-in for an engine's async scene load: raw progress crawls toward the
/// activation threshold over a fixed wall-clock time.
struct TimedLoadBackend {
    load_time: Duration,
}

struct TimedLoadOperation {
    started: Instant,
    load_time: Duration,
    activation_allowed: AtomicBool,
}

impl SceneLoadBackend for TimedLoadBackend {
    fn start_load(&self, scene: &SceneKey) -> Option<Box<dyn LoadOperation>> {
        log::info!(" -> Backend load started for '{scene}'.");
        Some(Box::new(TimedLoadOperation {
            started: Instant::now(),
            load_time: self.load_time,
            activation_allowed: AtomicBool::new(true),
        }))
    }
}

impl LoadOperation for TimedLoadOperation {
    fn raw_progress(&self) -> f32 {
        let fraction = self.started.elapsed().as_secs_f32() / self.load_time.as_secs_f32();
        fraction.min(1.0) * ACTIVATION_THRESHOLD
    }

    fn set_activation_allowed(&self, allowed: bool) {
        self.activation_allowed.store(allowed, Ordering::Relaxed);
    }

    fn is_done(&self) -> bool {
        self.activation_allowed.load(Ordering::Relaxed) && self.started.elapsed() >= self.load_time
    }
}

const SETTINGS: &str = r#"{
    "time_before_loading": 0.3,
    "time_after_loading": 0.3,
    "loading_scene": "LoadingScreen",
    "screen_fader": "black"
}"#;

#[tokio::main]
async fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut registry = FaderRegistry::new();
    registry.register("black", Arc::new(TimedFader::new(Duration::from_millis(400))));

    let settings: TransitionSettings = serde_json::from_str(SETTINGS)?;
    let transition = settings.resolve(&registry)?;

    let backend = Arc::new(TimedLoadBackend {
        load_time: Duration::from_secs(2),
    });
    let catalog = SceneCatalog::new(["MainMenu", "Forest", "Caves"]);
    let director = Arc::new(SceneDirector::new(backend).with_catalog(catalog));

    // Progress bar on stdout.
    director.subscribe_progress(|pct| {
        print!("\r  loading: {pct:6.2}%");
        let _ = std::io::stdout().flush();
        if pct >= 100.0 {
            println!();
        }
    });

    // Lifecycle events, forwarded to the log.
    let events = director.loading_events().clone();
    tokio::spawn(async move {
        while let Ok(event) = events.recv_async().await {
            log::info!("Event: {event:?}");
        }
    });

    director.load_scene("MainMenu", transition.clone()).await?;

    // Hold the next transition at the unlock gate for a moment, the way a
    // "press any key to continue" loading screen would.
    director.lock_loading();
    let unlocker = Arc::clone(&director);
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(1)).await;
        log::info!(" -> Simulated key press; unlocking.");
        unlocker.unlock_loading();
    });
    director.load_next_scene(transition.clone()).await?;

    director.load_next_scene(transition).await?;
    log::info!("Active scene: {:?}.", director.active_scene());
    Ok(())
}
