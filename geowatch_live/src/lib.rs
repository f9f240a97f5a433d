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

//! composition support for the live position simulation

use std::{sync::Arc, time::Duration};
use itertools::Itertools;
use serde::{Serialize,Deserialize};
use tokio::{sync::watch, task::JoinHandle, time::{self, MissedTickBehavior}};
use tokio_util::sync::CancellationToken;

use geowatch_common::{datetime::{deserialize_duration, serialize_duration, secs}, info, warn};
use geowatch_anim::ring_phases;
use geowatch_orbital::{OrbitalConfig, Satellite};
use geowatch_adsb::{Aircraft, AdsbConfig, OpenSkyConfig};
use geowatch_vessel::{AnimatedVessel, SwarmConfig};
use geowatch_events::{EventFeedState, EventsConfig, ImpactAnimation};

#[derive(Serialize,Deserialize,Debug,Clone)]
#[serde(default)]
pub struct LiveConfig {
    /// frame driver rate in Hz
    pub frame_rate: f64,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub summary_interval: Duration,

    pub orbital: OrbitalConfig,
    pub adsb: AdsbConfig,
    pub opensky: Option<OpenSkyConfig>, // second aircraft layer, only if configured
    pub vessels: SwarmConfig,
    pub events: EventsConfig,
}

impl Default for LiveConfig {
    fn default ()->Self {
        LiveConfig {
            frame_rate: 60.0,
            summary_interval: secs(10),
            orbital: OrbitalConfig::default(),
            adsb: AdsbConfig::default(),
            opensky: None,
            vessels: SwarmConfig::default(),
            events: EventsConfig::default(),
        }
    }
}

/// the outputs a renderer would read
pub struct Layers {
    pub satellites: watch::Receiver<Arc<Vec<Satellite>>>,
    pub adsb: watch::Receiver<Arc<Vec<Aircraft>>>,
    pub opensky: Option<watch::Receiver<Arc<Vec<Aircraft>>>>,
    pub vessels: watch::Receiver<Arc<Vec<AnimatedVessel>>>,
    pub events: watch::Receiver<EventFeedState>,
    pub impacts: watch::Receiver<Arc<Vec<ImpactAnimation>>>,
    pub pulse: watch::Receiver<f64>,
}

impl Layers {
    pub fn log_summary (&self) {
        let events = self.events.borrow().clone();
        let categories = events.events.iter()
            .counts_by( |e| e.category.as_str())
            .into_iter()
            .sorted()
            .map( |(c,n)| format!("{c}:{n}"))
            .join(" ");
        let adsb = self.adsb.borrow().clone();
        let rings = ring_phases( *self.pulse.borrow());

        info!("satellites: {}, aircraft: {} ({} moving), vessels: {}",
            self.satellites.borrow().len(), adsb.len(), adsb.iter().filter( |a| a.is_moving()).count(), self.vessels.borrow().len());
        if let Some(opensky) = &self.opensky {
            info!("opensky aircraft: {}", opensky.borrow().len());
        }
        info!("events: {} [{}]{}, active impacts: {}, rings: {:.2?}",
            events.events.len(), categories,
            if events.loading { " loading" } else { "" },
            self.impacts.borrow().len(), rings);
        if let Some(err) = &events.error {
            warn!("last event poll failed: {}", err);
        }
    }
}

pub fn spawn_summary_logger (layers: Layers, interval: Duration, cancel: CancellationToken)->JoinHandle<()> {
    tokio::spawn( async move {
        let mut timer = time::interval( interval);
        timer.set_missed_tick_behavior( MissedTickBehavior::Skip);
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = timer.tick() => layers.log_summary()
            }
        }
    })
}

