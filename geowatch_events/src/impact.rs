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

use std::{collections::VecDeque, sync::Arc, time::Duration};
use serde::{Serialize,Deserialize};
use tokio::sync::{mpsc, watch};
use geowatch_common::{collections::push_bounded, geometry::LonLat, debug};
use geowatch_anim::Animated;

use crate::event::{GlobeEvent, Rgb};

pub const DEFAULT_IMPACT_DURATION: f64 = 2.2; // seconds
pub const DEFAULT_MAX_IMPACTS: usize = 8;

/// a short lived "arrival" animation for a new event. Progress runs from 0 to 1
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct ImpactAnimation {
    pub id: String,
    pub coordinates: LonLat,
    pub color: Rgb,
    pub progress: f64,
}

impl ImpactAnimation {
    pub fn new (event: &GlobeEvent, stamp_millis: i64)->Self {
        ImpactAnimation {
            id: format!("{}-{}", event.id, stamp_millis),
            coordinates: event.coordinates,
            color: event.category.color(),
            progress: 0.0,
        }
    }
}

pub fn impacts_for<'a> (events: impl IntoIterator<Item=&'a GlobeEvent>, stamp_millis: i64, max: usize)->Vec<ImpactAnimation> {
    events.into_iter().take(max).map( |e| ImpactAnimation::new( e, stamp_millis)).collect()
}

pub type ImpactSender = mpsc::UnboundedSender<Vec<ImpactAnimation>>;

/// the set of active impact animations, advanced by the animation scheduler. New impacts come in
/// through a channel from the event poller. If a burst exceeds the capacity the oldest impacts are
/// dropped, completed impacts are removed in the same tick they reach progress 1
pub struct ImpactQueue {
    active: VecDeque<ImpactAnimation>,
    duration: Duration,
    max_impacts: usize,
    requests: mpsc::UnboundedReceiver<Vec<ImpactAnimation>>,
    tx: watch::Sender<Arc<Vec<ImpactAnimation>>>,
}

impl ImpactQueue {
    pub fn new (duration: Duration, max_impacts: usize)->(Self, ImpactSender) {
        let (req_tx, requests) = mpsc::unbounded_channel();
        let (tx, _) = watch::channel( Arc::new( Vec::new()));
        let queue = ImpactQueue { active: VecDeque::with_capacity( max_impacts), duration, max_impacts, requests, tx };
        (queue, req_tx)
    }

    pub fn subscribe (&self)->watch::Receiver<Arc<Vec<ImpactAnimation>>> { self.tx.subscribe() }

    pub fn len (&self)->usize { self.active.len() }
    pub fn is_empty (&self)->bool { self.active.is_empty() }
    pub fn active (&self)->impl Iterator<Item=&ImpactAnimation> { self.active.iter() }

    pub fn enqueue (&mut self, impacts: Vec<ImpactAnimation>) {
        for imp in impacts {
            let n_dropped = push_bounded( &mut self.active, imp, self.max_impacts);
            if n_dropped > 0 { debug!("dropped {} impact animations", n_dropped); }
        }
    }

    /// advance progress of all active impacts by `elapsed / duration` and remove completed ones
    pub fn advance (&mut self, elapsed: Duration) {
        let dp = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        for imp in self.active.iter_mut() {
            imp.progress += dp;
        }
        self.active.retain( |imp| imp.progress < 1.0);
    }

    fn drain_requests (&mut self) {
        while let Ok(impacts) = self.requests.try_recv() {
            self.enqueue( impacts);
        }
    }
}

impl Animated for ImpactQueue {
    fn advance (&mut self, elapsed: Duration, _now: Duration) {
        let was_empty = self.active.is_empty();
        ImpactQueue::advance( self, elapsed);
        self.drain_requests(); // new ones start at 0

        if !(was_empty && self.active.is_empty()) {
            self.tx.send_replace( Arc::new( self.active.iter().cloned().collect()));
        }
    }
}
