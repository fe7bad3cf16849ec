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

//! Progress reporting for in-flight transitions.
//!
//! The machine publishes normalized progress through a [`ProgressReporter`];
//! subscribers receive it as a percentage, synchronously, in registration
//! order. UI code typically subscribes a closure that updates a bar or a
//! label and unsubscribes when the widget goes away.

mod reporter;

pub use reporter::{ProgressReporter, SubscriptionId};
