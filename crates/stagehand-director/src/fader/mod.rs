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

//! Screen fader implementations and their registry.
//!
//! The director only knows the `ScreenFader` trait; the variants here cover
//! the common cases: [`NoopFader`] for headless hosts and tests,
//! [`TimedFader`] for a fixed-duration alpha tween a renderer can draw.
//! [`FaderRegistry`] hands out shared instances by a stable string id, so
//! settings files can name a fader without holding one.

mod noop;
mod registry;
mod timed;

pub use noop::NoopFader;
pub use registry::FaderRegistry;
pub use timed::TimedFader;

use stagehand_core::ScreenFader;
use std::time::Duration;
use tokio::time::sleep;

/// Fades the screen out, runs `on_faded_out`, holds, then fades back in.
///
/// Useful for in-place changes that should happen behind a covered screen
/// (teleporting the player, rearranging the level) without a scene load.
/// Runs independently of the director's loading guard. Without a fader the
/// closure still runs and the hold still applies.
pub async fn fade_screen<F>(fader: Option<&dyn ScreenFader>, on_faded_out: F, hold: Duration)
where
    F: FnOnce(),
{
    if let Some(fader) = fader {
        fader.fade_out().await;
    }
    on_faded_out();
    sleep(hold).await;
    if let Some(fader) = fader {
        fader.fade_in().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    #[tokio::test(start_paused = true)]
    async fn fade_screen_runs_the_closure_while_covered() {
        let fader = Arc::new(TimedFader::new(Duration::from_millis(100)));
        let alpha_at_fire = Arc::new(Mutex::new(None));

        let sink = Arc::clone(&alpha_at_fire);
        let observed = Arc::clone(&fader);
        fade_screen(
            Some(fader.as_ref()),
            move || *sink.lock().unwrap() = Some(*observed.alpha().borrow()),
            Duration::from_millis(50),
        )
        .await;

        // The closure fired behind a fully covered screen, and the screen
        // was revealed again afterwards.
        assert_eq!(*alpha_at_fire.lock().unwrap(), Some(1.0));
        assert_eq!(*fader.alpha().borrow(), 0.0);
    }

    #[tokio::test(start_paused = true)]
    async fn fade_screen_without_fader_still_runs_closure_and_hold() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let start = tokio::time::Instant::now();

        fade_screen(
            None,
            move || flag.store(true, Ordering::Relaxed),
            Duration::from_millis(250),
        )
        .await;

        assert!(fired.load(Ordering::Relaxed));
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
