/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::time::Duration;
use tokio::{task::JoinHandle, time::{self, MissedTickBehavior}};
use tokio_util::sync::CancellationToken;
use geowatch_common::{debug, info};

use crate::{cache::{CacheResult, PositionCache}, source::FeedSource};

/// spawn the network refresh cadence for one entity class. The first query happens immediately,
/// then every `interval`. Each result (fresh, cached, stale or fallback) is handed to `on_update`,
/// which normally swaps it into a watch channel read by faster cadences.
///
/// The loop ends when `cancel` is triggered - a fetch that is in flight at that time is dropped and
/// its result is never delivered. It also ends once the cache went into rate limit back-off, after
/// handing out the last known data one more time
pub fn spawn_refresh_loop<S,F> (
    mut cache: PositionCache<S>,
    interval: Duration,
    cancel: CancellationToken,
    mut on_update: F
)->JoinHandle<()>
    where S: FeedSource + 'static, F: FnMut(CacheResult<S::Item>) + Send + 'static
{
    tokio::spawn( async move {
        let mut timer = time::interval( interval);
        timer.set_missed_tick_behavior( MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = timer.tick() => {}
            }

            let result = tokio::select! {
                _ = cancel.cancelled() => break,
                res = cache.get() => res
            };

            if cancel.is_cancelled() { break } // late resolution after teardown
            debug!("{} refresh: {} entities ({:?})", cache.name(), result.len(), result.provenance);
            on_update( result);

            if cache.is_backed_off() {
                info!("{} refresh loop stopped (rate limited)", cache.name());
                break
            }
        }
        debug!("{} refresh loop terminated", cache.name());
    })
}
