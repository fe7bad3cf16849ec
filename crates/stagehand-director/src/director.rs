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

//! The scene director: drives one transition at a time through its phases.

use crate::catalog::SceneCatalog;
use stagehand_core::event::{LoadingEvent, LoadingEventChannel};
use stagehand_core::loading::{normalized_progress, SceneLoadBackend, ACTIVATION_THRESHOLD};
use stagehand_core::progress::{ProgressReporter, SubscriptionId};
use stagehand_core::scene::SceneKey;
use stagehand_core::transition::{
    SceneTransition, TransitionError, TransitionPhase, TransitionState,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// One frame at 60 Hz, standing in for the engine frame yield the phases
/// were designed around.
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Floor for the configurable poll interval; a zero-duration sleep completes
/// without yielding, which would spin the waiting phases on the runtime.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Replaces the active scene with a new one, optionally showing a loading
/// scene and screen fades on the way.
///
/// One director runs at most one transition at a time; a second
/// [`load_scene`] while one is in flight fails with
/// [`TransitionError::AlreadyInProgress`] and leaves the running transition
/// untouched. Progress reaches subscribers as a 0–100 percentage, rescaled
/// so the activation-gated load still sweeps the full range, and lifecycle
/// events go out on a channel the host can drain.
///
/// Polling phases (load completion, the loading lock) suspend for one
/// `poll_interval` between checks rather than blocking, so the director
/// cooperates with whatever else runs on the runtime. The returned future
/// is expected to be polled to completion; there is no mid-transition
/// cancellation path.
///
/// [`load_scene`]: SceneDirector::load_scene
pub struct SceneDirector {
    backend: Arc<dyn SceneLoadBackend>,
    state: Mutex<TransitionState>,
    locked: AtomicBool,
    reporter: ProgressReporter,
    events: LoadingEventChannel,
    catalog: SceneCatalog,
    poll_interval: Duration,
}

impl SceneDirector {
    /// Creates a director loading scenes through `backend`.
    #[must_use]
    pub fn new(backend: Arc<dyn SceneLoadBackend>) -> Self {
        Self {
            backend,
            state: Mutex::new(TransitionState::new()),
            locked: AtomicBool::new(false),
            reporter: ProgressReporter::new(),
            events: LoadingEventChannel::new(),
            catalog: SceneCatalog::default(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Sets the pause between polls in the waiting phases.
    ///
    /// Intervals under one millisecond are raised to one millisecond, so the
    /// polling loops always suspend between checks.
    #[must_use]
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(MIN_POLL_INTERVAL);
        self
    }

    /// Sets the ordered catalog used by next/previous navigation.
    #[must_use]
    pub fn with_catalog(mut self, catalog: SceneCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    // --- Observation ---

    /// Registers `callback` to receive progress percentages (0–100).
    pub fn subscribe_progress(
        &self,
        callback: impl Fn(f32) + Send + Sync + 'static,
    ) -> SubscriptionId {
        self.reporter.subscribe(callback)
    }

    /// Removes a progress subscription.
    pub fn unsubscribe_progress(&self, id: SubscriptionId) {
        self.reporter.unsubscribe(id);
    }

    /// Receiver for [`LoadingEvent`]s; clone it to move it elsewhere.
    pub fn loading_events(&self) -> &flume::Receiver<LoadingEvent> {
        self.events.receiver()
    }

    /// The phase the current (or last) transition is in.
    pub fn phase(&self) -> TransitionPhase {
        self.state_guard().phase
    }

    /// Whether a transition is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.state_guard().is_loading()
    }

    /// The scene being loaded, if a transition is in flight.
    pub fn loading_target(&self) -> Option<SceneKey> {
        self.state_guard().loading_target.clone()
    }

    /// The scene that last finished activating, if any.
    pub fn active_scene(&self) -> Option<SceneKey> {
        self.state_guard().active_scene.clone()
    }

    /// Last published normalized progress, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.state_guard().progress
    }

    /// Last published progress as a percentage, in `0.0..=100.0`.
    pub fn progress_percentage(&self) -> f32 {
        self.progress() * 100.0
    }

    /// Snapshot of the full transition state.
    pub fn state(&self) -> TransitionState {
        self.state_guard().clone()
    }

    // --- Locking ---

    /// Whether the loading lock is currently held.
    pub fn is_loading_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    /// Holds any in-flight (and future) transition at the unlock gate.
    ///
    /// Typical use: lock from the loading scene once progress hits 100 and
    /// wait for a key press before unlocking.
    pub fn lock_loading(&self) {
        self.locked.store(true, Ordering::Relaxed);
        log::debug!("Loading locked.");
    }

    /// Releases the loading lock.
    pub fn unlock_loading(&self) {
        self.locked.store(false, Ordering::Relaxed);
        log::debug!("Loading unlocked.");
    }

    // --- Transitions ---

    /// Replaces the active scene with `scene`, driving the whole transition.
    ///
    /// Resolves once the new scene is fully active and any loading scene
    /// has been torn down. Fails fast with
    /// [`TransitionError::AlreadyInProgress`] while another transition runs,
    /// and with an invalid-scene error if the backend cannot start a load;
    /// either way the director is immediately ready for a new call.
    pub async fn load_scene(
        &self,
        scene: impl Into<SceneKey>,
        transition: SceneTransition,
    ) -> Result<(), TransitionError> {
        let target = scene.into();
        self.begin(&target)?;

        log::info!("Starting transition to scene '{target}'.");
        self.events.publish(LoadingEvent::Started {
            scene: target.clone(),
        });

        let result = self.drive(&target, &transition).await;

        let mut state = self.state_guard();
        state.loading_target = None;
        state.phase = TransitionPhase::Idle;
        if result.is_ok() {
            state.active_scene = Some(target.clone());
        }
        drop(state);

        match &result {
            Ok(()) => {
                log::info!("Scene '{target}' is now active.");
                self.events.publish(LoadingEvent::Finished { scene: target });
            }
            Err(err) => log::warn!("Transition to scene '{target}' failed: {err}"),
        }
        result
    }

    /// Waits `delay`, then runs [`load_scene`](SceneDirector::load_scene).
    ///
    /// The in-flight guard is checked after the delay, when the transition
    /// actually starts.
    pub async fn load_scene_after(
        &self,
        delay: Duration,
        scene: impl Into<SceneKey>,
        transition: SceneTransition,
    ) -> Result<(), TransitionError> {
        let target = scene.into();
        log::debug!("Loading scene '{target}' in {delay:?}.");
        sleep(delay).await;
        self.load_scene(target, transition).await
    }

    /// Runs the transition on a spawned task instead of the caller's.
    ///
    /// Takes an owned `Arc`; clone the director's handle to keep using it.
    /// The returned handle resolves to the transition result; dropping it
    /// detaches the transition without cancelling it.
    pub fn load_scene_detached(
        self: Arc<Self>,
        scene: impl Into<SceneKey>,
        transition: SceneTransition,
    ) -> JoinHandle<Result<(), TransitionError>> {
        let target = scene.into();
        tokio::spawn(async move { self.load_scene(target, transition).await })
    }

    /// Loads the catalog entry after the active scene, wrapping at the end.
    ///
    /// Falls back to the first entry when there is no active scene or the
    /// active scene is not in the catalog. With an empty catalog this is a
    /// logged no-op.
    pub async fn load_next_scene(
        &self,
        transition: SceneTransition,
    ) -> Result<(), TransitionError> {
        let active = self.active_scene();
        match self.catalog.next_after(active.as_ref()) {
            Some(scene) => self.load_scene(scene.clone(), transition).await,
            None => {
                log::warn!("Scene catalog is empty; staying on the current scene.");
                Ok(())
            }
        }
    }

    /// Loads the catalog entry before the active scene, wrapping at the start.
    ///
    /// Same fallbacks as [`load_next_scene`](SceneDirector::load_next_scene).
    pub async fn load_previous_scene(
        &self,
        transition: SceneTransition,
    ) -> Result<(), TransitionError> {
        let active = self.active_scene();
        match self.catalog.previous_before(active.as_ref()) {
            Some(scene) => self.load_scene(scene.clone(), transition).await,
            None => {
                log::warn!("Scene catalog is empty; staying on the current scene.");
                Ok(())
            }
        }
    }

    // --- Internals ---

    /// Claims the in-flight slot, or reports who currently holds it.
    fn begin(&self, target: &SceneKey) -> Result<(), TransitionError> {
        let mut state = self.state_guard();
        if let Some(current) = &state.loading_target {
            return Err(TransitionError::AlreadyInProgress {
                current: current.clone(),
                requested: target.clone(),
            });
        }
        state.loading_target = Some(target.clone());
        state.progress = 0.0;
        Ok(())
    }

    async fn drive(
        &self,
        target: &SceneKey,
        transition: &SceneTransition,
    ) -> Result<(), TransitionError> {
        let fader = transition.screen_fader();

        self.enter_phase(TransitionPhase::FadingOutBeforeLoad);
        if let Some(fader) = fader {
            fader.fade_out().await;
        }

        self.enter_phase(TransitionPhase::OpeningLoadingScene);
        let loading_scene_shown = match transition.loading_scene() {
            Some(loading_scene) => {
                let operation = self.backend.start_load(loading_scene).ok_or_else(|| {
                    TransitionError::InvalidLoadingScene {
                        scene: loading_scene.clone(),
                    }
                })?;
                // Replaces the previous scene outright; no activation gating.
                while !operation.is_done() {
                    self.poll_tick().await;
                }
                true
            }
            None => false,
        };

        self.enter_phase(TransitionPhase::ResettingProgress);
        self.set_progress(0.0);

        self.enter_phase(TransitionPhase::FadingInLoadingScene);
        if loading_scene_shown {
            if let Some(fader) = fader {
                fader.fade_in().await;
            }
        }

        self.enter_phase(TransitionPhase::DelayingBeforeLoad);
        sleep(transition.time_before_loading()).await;

        self.enter_phase(TransitionPhase::StartingTargetLoad);
        let operation =
            self.backend
                .start_load(target)
                .ok_or_else(|| TransitionError::InvalidTargetScene {
                    scene: target.clone(),
                })?;
        // Keep the previous content (and the loading scene, if shown) alive
        // until the unlock/fade tail has run.
        operation.set_activation_allowed(false);

        self.enter_phase(TransitionPhase::StreamingProgress);
        loop {
            let raw = operation.raw_progress();
            if raw >= ACTIVATION_THRESHOLD {
                break;
            }
            self.set_progress(normalized_progress(raw));
            self.poll_tick().await;
        }

        self.enter_phase(TransitionPhase::FinishingProgress);
        self.set_progress(1.0);

        self.enter_phase(TransitionPhase::DelayingAfterLoad);
        sleep(transition.time_after_loading()).await;

        self.enter_phase(TransitionPhase::WaitingForUnlock);
        while self.is_loading_locked() {
            self.poll_tick().await;
        }

        self.enter_phase(TransitionPhase::FadingOutLoadingScene);
        if loading_scene_shown {
            if let Some(fader) = fader {
                fader.fade_out().await;
            }
        }

        self.enter_phase(TransitionPhase::ActivatingTarget);
        // Activation tears down the previous scene and the loading scene.
        operation.set_activation_allowed(true);
        while !operation.is_done() {
            self.poll_tick().await;
        }

        self.enter_phase(TransitionPhase::FadingInNewScene);
        if let Some(fader) = fader {
            fader.fade_in().await;
        }

        Ok(())
    }

    fn enter_phase(&self, phase: TransitionPhase) {
        self.state_guard().phase = phase;
        log::debug!("Transition phase: {phase}.");
    }

    /// Records normalized progress and hands it to the reporter, which fans
    /// it out as a percentage. The state lock is released before fan-out so
    /// subscribers may freely read the director.
    fn set_progress(&self, normalized: f32) {
        self.state_guard().progress = normalized;
        self.reporter.publish(normalized);
    }

    async fn poll_tick(&self) {
        sleep(self.poll_interval).await;
    }

    fn state_guard(&self) -> MutexGuard<'_, TransitionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
