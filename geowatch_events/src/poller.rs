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

#![allow(unused)]

use std::{sync::Arc, time::Duration};
use serde::Serialize;
use tokio::{sync::watch, task::JoinHandle, time::{self, MissedTickBehavior}};
use tokio_util::sync::CancellationToken;
use geowatch_common::{datetime::utc_now, debug, info, warn};
use geowatch_feed::{FeedSource, fetch_with_timeout};

use crate::{event::GlobeEvent, impact::{ImpactSender, impacts_for}, novelty::NoveltyTracker};

/// what the event layer shows: the current events, whether the first poll is still pending and
/// the message of the last failure (cleared by the next success)
#[derive(Serialize,Debug,Clone)]
pub struct EventFeedState {
    pub events: Arc<Vec<GlobeEvent>>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for EventFeedState {
    fn default ()->Self {
        EventFeedState { events: Arc::new( Vec::new()), loading: true, error: None }
    }
}

/// poll `source` every `interval`. Each successful poll replaces the published events and sends
/// impact animations for events we did not see before (none for the first poll). Failures keep
/// the previous events. A rate limit response ends the poller, as does `cancel` - results that
/// arrive after cancellation are discarded
pub fn spawn_event_poller<S> (
    source: S,
    interval: Duration,
    timeout: Duration,
    max_impacts: usize,
    impacts: ImpactSender,
    cancel: CancellationToken,
)->(JoinHandle<()>, watch::Receiver<EventFeedState>)
    where S: FeedSource<Item=GlobeEvent> + 'static
{
    let (tx, rx) = watch::channel( EventFeedState::default());

    let task = tokio::spawn( async move {
        let mut tracker = NoveltyTracker::new();
        let mut timer = time::interval( interval);
        timer.set_missed_tick_behavior( MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = timer.tick() => {}
            }

            let res = tokio::select! {
                _ = cancel.cancelled() => break,
                res = fetch_with_timeout( &source, timeout) => res
            };
            if cancel.is_cancelled() { break }

            match res {
                Ok(events) => {
                    let batch = impacts_for( tracker.observe( &events), utc_now().timestamp_millis(), max_impacts);
                    if !batch.is_empty() {
                        info!("{} new events", batch.len());
                        if impacts.send( batch).is_err() {
                            debug!("impact queue gone");
                        }
                    }
                    tx.send_replace( EventFeedState { events: Arc::new(events), loading: false, error: None });
                }
                Err(e) => {
                    warn!("{} poll failed: {}", source.name(), e);
                    let rate_limited = e.is_rate_limit();
                    tx.send_modify( |state| {
                        state.loading = false;
                        state.error = Some( e.to_string());
                    });
                    if rate_limited {
                        info!("{} poller stopped (rate limited)", source.name());
                        break
                    }
                }
            }
        }
        debug!("{} poller terminated", source.name());
    });

    (task, rx)
}
