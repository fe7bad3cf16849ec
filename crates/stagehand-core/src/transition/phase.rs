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

use std::fmt;

/// The phases a scene transition moves through, strictly in declaration
/// order.
///
/// The director publishes its current phase before entering it, so an
/// observer polling [`TransitionState`](super::TransitionState) sees each
/// checkpoint as it is reached. Conditional phases (fades without a fader,
/// the loading scene when none is configured) are still entered and left;
/// they simply complete without suspending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransitionPhase {
    /// No transition in progress.
    #[default]
    Idle,
    /// Fading the current scene out, before anything is replaced.
    FadingOutBeforeLoad,
    /// Loading the intermediate loading scene to full completion.
    OpeningLoadingScene,
    /// Publishing the progress reset (0%) that precedes the real load.
    ResettingProgress,
    /// Fading the loading scene in, when one was shown.
    FadingInLoadingScene,
    /// Waiting out the configured delay before the target load starts.
    DelayingBeforeLoad,
    /// Starting the target load with activation withheld.
    StartingTargetLoad,
    /// Polling raw progress and publishing rescaled percentages.
    StreamingProgress,
    /// Publishing the final 100% once raw progress saturates.
    FinishingProgress,
    /// Waiting out the configured delay after the load finishes preparing.
    DelayingAfterLoad,
    /// Polling until the caller releases the loading lock.
    WaitingForUnlock,
    /// Fading the loading scene out, when one was shown.
    FadingOutLoadingScene,
    /// Activation allowed; waiting for the operation to report done.
    ActivatingTarget,
    /// Fading the freshly activated scene in.
    FadingInNewScene,
}

impl TransitionPhase {
    /// Whether this phase means no transition is running.
    #[must_use]
    pub fn is_idle(self) -> bool {
        self == TransitionPhase::Idle
    }
}

impl fmt::Display for TransitionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransitionPhase::Idle => "idle",
            TransitionPhase::FadingOutBeforeLoad => "fading out before load",
            TransitionPhase::OpeningLoadingScene => "opening loading scene",
            TransitionPhase::ResettingProgress => "resetting progress",
            TransitionPhase::FadingInLoadingScene => "fading in loading scene",
            TransitionPhase::DelayingBeforeLoad => "delaying before load",
            TransitionPhase::StartingTargetLoad => "starting target load",
            TransitionPhase::StreamingProgress => "streaming progress",
            TransitionPhase::FinishingProgress => "finishing progress",
            TransitionPhase::DelayingAfterLoad => "delaying after load",
            TransitionPhase::WaitingForUnlock => "waiting for unlock",
            TransitionPhase::FadingOutLoadingScene => "fading out loading scene",
            TransitionPhase::ActivatingTarget => "activating target",
            TransitionPhase::FadingInNewScene => "fading in new scene",
        };
        f.write_str(label)
    }
}
