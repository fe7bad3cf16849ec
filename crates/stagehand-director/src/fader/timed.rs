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
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::sleep;

/// Alpha of a fully revealed screen.
pub const FADE_IN_ALPHA: f32 = 0.0;
/// Alpha of a fully covered screen.
pub const FADE_OUT_ALPHA: f32 = 1.0;

/// Frame-ish step between alpha updates.
const STEP_INTERVAL: Duration = Duration::from_millis(16);

/// A fixed-duration linear alpha tween.
///
/// The fader does not draw anything itself; it publishes the current
/// overlay alpha (`0.0` revealed, `1.0` covered) through a watch channel
/// the host renderer reads via [`alpha`](TimedFader::alpha). Each fade
/// ramps over the full [`duration`](TimedFader::duration) and snaps to the
/// final value at the end.
#[derive(Debug)]
pub struct TimedFader {
    duration: Duration,
    alpha: watch::Sender<f32>,
}

impl TimedFader {
    /// Creates a fader taking `duration` per fade, starting fully revealed.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        let (alpha, _) = watch::channel(FADE_IN_ALPHA);
        Self { duration, alpha }
    }

    /// Time one fade takes.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// A receiver observing the current overlay alpha.
    #[must_use]
    pub fn alpha(&self) -> watch::Receiver<f32> {
        self.alpha.subscribe()
    }

    async fn fade(&self, start_alpha: f32, final_alpha: f32) {
        let mut elapsed = Duration::ZERO;
        while elapsed < self.duration {
            let interpolation = elapsed.as_secs_f32() / self.duration.as_secs_f32();
            let value = start_alpha + (final_alpha - start_alpha) * interpolation;
            self.alpha.send_replace(value);
            sleep(STEP_INTERVAL).await;
            elapsed += STEP_INTERVAL;
        }
        self.alpha.send_replace(final_alpha);
    }
}

#[async_trait]
impl ScreenFader for TimedFader {
    async fn fade_out(&self) {
        self.fade(FADE_IN_ALPHA, FADE_OUT_ALPHA).await;
    }

    async fn fade_in(&self) {
        self.fade(FADE_OUT_ALPHA, FADE_IN_ALPHA).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[tokio::test(start_paused = true)]
    async fn fade_out_covers_the_screen_over_its_duration() {
        let fader = TimedFader::new(Duration::from_millis(160));
        let start = tokio::time::Instant::now();

        fader.fade_out().await;

        assert_eq!(*fader.alpha().borrow(), FADE_OUT_ALPHA);
        assert!(start.elapsed() >= Duration::from_millis(160));
    }

    #[tokio::test(start_paused = true)]
    async fn fade_in_reveals_the_screen_again() {
        let fader = TimedFader::new(Duration::from_millis(160));
        fader.fade_out().await;
        fader.fade_in().await;
        assert_eq!(*fader.alpha().borrow(), FADE_IN_ALPHA);
    }

    #[tokio::test(start_paused = true)]
    async fn zero_duration_snaps_instantly() {
        let fader = TimedFader::new(Duration::ZERO);
        let start = tokio::time::Instant::now();

        fader.fade_out().await;

        assert_eq!(*fader.alpha().borrow(), FADE_OUT_ALPHA);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn alpha_ramps_linearly_while_fading_out() {
        let fader = TimedFader::new(Duration::from_millis(160));
        let alpha = fader.alpha();

        let halfway = tokio::spawn({
            let mut alpha = alpha.clone();
            async move {
                alpha
                    .wait_for(|value| *value >= 0.5)
                    .await
                    .map(|value| *value)
                    .expect("fader dropped mid-fade")
            }
        });

        fader.fade_out().await;

        let seen = halfway.await.expect("probe should finish");
        assert!((0.5..FADE_OUT_ALPHA).contains(&seen));
        assert_relative_eq!(*alpha.borrow(), FADE_OUT_ALPHA);
    }
}
