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
use tokio::sync::watch;
use geowatch_common::angle::wrap_unit;

use crate::cadence::Animated;

pub const DEFAULT_PULSE_SPEED: f64 = 0.6; // cycles per second
pub const N_RINGS: usize = 3;

/// a continuously advancing phase in [0,1) that drives ripple effects. The phase is owned by its
/// cadence, everybody else reads it through the watch channel
pub struct PulsePhase {
    phase: f64,
    speed: f64,
    tx: watch::Sender<f64>,
}

impl PulsePhase {
    pub fn new (speed: f64)->(Self, watch::Receiver<f64>) {
        let (tx, rx) = watch::channel( 0.0);
        (PulsePhase { phase: 0.0, speed, tx }, rx)
    }

    pub fn phase (&self)->f64 { self.phase }
    pub fn speed (&self)->f64 { self.speed }

    pub fn advance_secs (&mut self, dt: f64) {
        self.phase = wrap_unit( self.phase + dt * self.speed);
        self.tx.send_replace( self.phase);
    }
}

impl Animated for PulsePhase {
    fn advance (&mut self, elapsed: Duration, _now: Duration) {
        self.advance_secs( elapsed.as_secs_f64());
    }
}

/// the staggered phases of the concentric rings drawn around a pulsing marker
pub fn ring_phases (pulse: f64)->[f64; N_RINGS] {
    let mut phases = [0.0; N_RINGS];
    for (i, p) in phases.iter_mut().enumerate() {
        *p = wrap_unit( pulse + i as f64 / N_RINGS as f64);
    }
    phases
}
