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

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

type ProgressCallback = Arc<dyn Fn(f32) + Send + Sync>;

/// Identifies one progress subscription so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Fans transition progress out to registered callbacks.
///
/// [`publish`] converts normalized progress to a percentage and invokes
/// every subscriber synchronously, in the order they subscribed. The
/// subscriber list is snapshotted before invoking, so a callback may
/// subscribe or unsubscribe freely; the change takes effect on the next
/// publish. A panicking subscriber is caught and logged, never allowed to
/// take the others (or the transition) down with it.
///
/// [`publish`]: ProgressReporter::publish
#[derive(Default)]
pub struct ProgressReporter {
    subscribers: Mutex<Vec<(SubscriptionId, ProgressCallback)>>,
    next_id: AtomicU64,
}

impl ProgressReporter {
    /// Creates a reporter with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` to receive progress percentages.
    ///
    /// Returns an id for [`unsubscribe`](ProgressReporter::unsubscribe).
    pub fn subscribe(&self, callback: impl Fn(f32) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock_subscribers().push((id, Arc::new(callback)));
        id
    }

    /// Removes the subscription with the given id.
    ///
    /// Unknown or already-removed ids are ignored.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.lock_subscribers().retain(|(sub_id, _)| *sub_id != id);
    }

    /// Number of currently registered subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock_subscribers().len()
    }

    /// Publishes `normalized` progress (`0.0..=1.0`) as a percentage.
    ///
    /// Every subscriber registered at the moment of the call receives
    /// `normalized * 100.0`, synchronously and in subscription order.
    pub fn publish(&self, normalized: f32) {
        let percentage = normalized * 100.0;
        let snapshot: Vec<ProgressCallback> = self
            .lock_subscribers()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in snapshot {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| callback(percentage))) {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "non-string panic payload".to_string());
                log::error!("Progress subscriber panicked: {message}");
            }
        }
    }

    // The subscriber list stays consistent even if a previous holder
    // panicked mid-mutation, so recover the guard rather than poisoning
    // every later call.
    fn lock_subscribers(&self) -> std::sync::MutexGuard<'_, Vec<(SubscriptionId, ProgressCallback)>> {
        self.subscribers.lock().unwrap_or_else(|e| e.into_inner())
    }
}
