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

//! Wave loading for per-scene content.
//!
//! Scenes often carry their own async setup work: asset bundles, pooled
//! objects, connections. Each piece implements [`SceneLoadable`] with a
//! sort order, and [`load_scene_content`] runs the pieces wave by wave:
//! everything sharing an order loads concurrently, waves run in ascending
//! order, and the first failure aborts the remaining waves. Hosts usually
//! call it from the newly activated scene, after the director's transition
//! has resolved.

use anyhow::Result;
use async_trait::async_trait;
use futures::future::try_join_all;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A piece of scene content that loads asynchronously.
#[async_trait]
pub trait SceneLoadable: Send + Sync {
    /// Position in the load sequence; lower orders load first, equal
    /// orders load concurrently.
    fn sort_order(&self) -> u32;

    /// Loads this piece of content.
    async fn load(&self) -> Result<()>;
}

/// Loads `loadables` in ascending sort-order waves.
///
/// Fails fast: an error in one wave skips all later waves, and the other
/// members of the failing wave are dropped where they stand.
pub async fn load_scene_content(loadables: &[Arc<dyn SceneLoadable>]) -> Result<()> {
    let mut waves: BTreeMap<u32, Vec<&Arc<dyn SceneLoadable>>> = BTreeMap::new();
    for loadable in loadables {
        waves.entry(loadable.sort_order()).or_default().push(loadable);
    }

    for (order, wave) in waves {
        log::debug!("Loading scene content wave {order} ({} items).", wave.len());
        try_join_all(wave.iter().map(|loadable| loadable.load())).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::sleep;

    struct RecordingLoadable {
        order: u32,
        name: &'static str,
        delay: Duration,
        record: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl SceneLoadable for RecordingLoadable {
        fn sort_order(&self) -> u32 {
            self.order
        }

        async fn load(&self) -> Result<()> {
            self.record.lock().unwrap().push(self.name);
            sleep(self.delay).await;
            Ok(())
        }
    }

    struct CorruptLoadable;

    #[async_trait]
    impl SceneLoadable for CorruptLoadable {
        fn sort_order(&self) -> u32 {
            0
        }

        async fn load(&self) -> Result<()> {
            bail!("asset bundle corrupted")
        }
    }

    fn loadable(
        order: u32,
        name: &'static str,
        delay_ms: u64,
        record: &Arc<Mutex<Vec<&'static str>>>,
    ) -> Arc<dyn SceneLoadable> {
        Arc::new(RecordingLoadable {
            order,
            name,
            delay: Duration::from_millis(delay_ms),
            record: Arc::clone(record),
        })
    }

    #[tokio::test(start_paused = true)]
    async fn waves_run_in_order_and_members_run_concurrently() {
        let record = Arc::new(Mutex::new(Vec::new()));
        let loadables = vec![
            loadable(1, "props", 100, &record),
            loadable(0, "terrain", 0, &record),
            loadable(1, "audio", 100, &record),
            loadable(2, "spawns", 50, &record),
        ];

        let start = tokio::time::Instant::now();
        load_scene_content(&loadables).await.expect("all waves load");

        // Wave 1's two 100 ms loads overlap; serial waves would take 250 ms.
        assert_eq!(start.elapsed(), Duration::from_millis(150));
        assert_eq!(
            *record.lock().unwrap(),
            vec!["terrain", "props", "audio", "spawns"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn failing_wave_skips_the_rest() {
        let record = Arc::new(Mutex::new(Vec::new()));
        let loadables: Vec<Arc<dyn SceneLoadable>> = vec![
            Arc::new(CorruptLoadable),
            loadable(1, "props", 0, &record),
        ];

        let err = load_scene_content(&loadables)
            .await
            .expect_err("corrupt wave must fail");
        assert!(err.to_string().contains("corrupted"));
        assert!(record.lock().unwrap().is_empty(), "later waves must not start");
    }

    #[tokio::test(start_paused = true)]
    async fn no_loadables_is_trivially_loaded() {
        load_scene_content(&[]).await.expect("nothing to load");
    }
}
