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

use std::{fmt, panic::{self, AssertUnwindSafe}, time::Duration};
use geowatch_common::{debug, error};

/// something that is periodically advanced by the scheduler. `elapsed` is the time since the last
/// firing of its cadence (or since the baseline tick for the first firing), `now` is the
/// scheduler clock (time since the driver started)
pub trait Animated: Send {
    fn advance (&mut self, elapsed: Duration, now: Duration);
}

impl<F> Animated for F where F: FnMut(Duration,Duration) + Send {
    fn advance (&mut self, elapsed: Duration, now: Duration) { self(elapsed, now) }
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Hash,PartialOrd,Ord)]
pub struct CadenceId(pub u64);

impl fmt::Display for CadenceId {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "cadence-{}", self.0) }
}

/// per cadence state machine:
///   Idle --first tick--> Armed(baseline) --tick with delta >= min_interval--> Running(last_fire)
/// both Armed and Running stay put on ticks below the minimum interval. Cancelled is terminal
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum CadenceState {
    Idle,
    Armed { baseline: Duration },
    Running { last_fire: Duration },
    Cancelled,
}

/// one managed concern (pulse, vessels, dead reckoning ..) with its own minimum firing interval
pub struct Cadence {
    id: CadenceId,
    name: String,
    min_interval: Duration,
    state: CadenceState,
    target: Box<dyn Animated>,
    n_fired: u64,
}

impl Cadence {
    pub fn new (id: CadenceId, name: impl ToString, min_interval: Duration, target: Box<dyn Animated>)->Self {
        Cadence { id, name: name.to_string(), min_interval, state: CadenceState::Idle, target, n_fired: 0 }
    }

    pub fn id (&self)->CadenceId { self.id }
    pub fn name (&self)->&str { self.name.as_str() }
    pub fn min_interval (&self)->Duration { self.min_interval }
    pub fn state (&self)->CadenceState { self.state }
    pub fn n_fired (&self)->u64 { self.n_fired }
    pub fn is_cancelled (&self)->bool { self.state == CadenceState::Cancelled }

    pub fn cancel (&mut self) {
        self.state = CadenceState::Cancelled;
    }

    /// process one clock tick, returning true if the target was advanced. The decision is based on
    /// elapsed time, not on tick counts, so irregular tick rates don't change the animation speed.
    /// A panicking target cancels its own cadence instead of taking down the scheduler
    pub fn tick (&mut self, now: Duration)->bool {
        let last = match self.state {
            CadenceState::Idle => {
                self.state = CadenceState::Armed { baseline: now };
                return false
            }
            CadenceState::Armed { baseline } => baseline,
            CadenceState::Running { last_fire } => last_fire,
            CadenceState::Cancelled => return false
        };

        let elapsed = now.saturating_sub( last);
        if elapsed < self.min_interval {
            return false
        }

        let target = &mut self.target;
        match panic::catch_unwind( AssertUnwindSafe( || target.advance( elapsed, now))) {
            Ok(()) => {
                self.state = CadenceState::Running { last_fire: now };
                self.n_fired += 1;
                true
            }
            Err(_) => {
                error!("cadence '{}' panicked, cancelling it", self.name);
                self.state = CadenceState::Cancelled;
                false
            }
        }
    }
}

impl fmt::Debug for Cadence {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cadence( id: {}, name: \"{}\", min_interval: {:?}, state: {:?}, fired: {})",
            self.id.0, self.name, self.min_interval, self.state, self.n_fired)
    }
}
