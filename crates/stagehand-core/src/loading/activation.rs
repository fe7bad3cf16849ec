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

/// Raw progress value a gated load saturates at.
///
/// While activation is withheld, a [`LoadOperation`] reports at most this
/// much raw progress; the remaining `0.1` is the activation step itself.
///
/// [`LoadOperation`]: super::LoadOperation
pub const ACTIVATION_THRESHOLD: f32 = 0.9;

/// Rescales raw load progress so the gated range maps onto `0.0..=1.0`.
///
/// Raw progress from a gated load tops out at [`ACTIVATION_THRESHOLD`],
/// which reads as "stuck at 90%" if shown directly. Dividing by the
/// threshold makes a fully prepared load report exactly `1.0`. The result
/// is clamped, so raw values past the threshold (or junk below zero)
/// cannot push it out of range.
#[must_use]
pub fn normalized_progress(raw: f32) -> f32 {
    (raw / ACTIVATION_THRESHOLD).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_raw_is_zero_normalized() {
        assert_relative_eq!(normalized_progress(0.0), 0.0);
    }

    #[test]
    fn threshold_maps_to_exactly_one() {
        assert_eq!(normalized_progress(ACTIVATION_THRESHOLD), 1.0);
    }

    #[test]
    fn halfway_to_threshold_is_half() {
        assert_relative_eq!(normalized_progress(0.45), 0.5, epsilon = 1e-6);
    }

    #[test]
    fn values_past_threshold_clamp_to_one() {
        assert_eq!(normalized_progress(0.95), 1.0);
        assert_eq!(normalized_progress(1.0), 1.0);
    }

    #[test]
    fn negative_raw_clamps_to_zero() {
        assert_eq!(normalized_progress(-0.5), 0.0);
    }
}
