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

use std::{sync::{Arc, Mutex, Weak}, time::Duration};
use geowatch_common::{debug, info};

use crate::{
    cadence::{Animated, Cadence, CadenceId, CadenceState},
    errors::{AnimError, Result, poisoned_lock}
};

/// a set of independent cadences that share one clock. The scheduler does not own a clock itself,
/// whatever drives it (frame callback, fixed rate timer, test loop) passes in the current time
/// as a monotonic `Duration` since its start
#[derive(Debug,Default)]
pub struct AnimationScheduler {
    cadences: Vec<Cadence>,
    next_id: u64,
}

impl AnimationScheduler {
    pub fn new ()->Self {
        AnimationScheduler { cadences: Vec::new(), next_id: 1 }
    }

    pub fn into_shared (self)->SharedScheduler {
        Arc::new( Mutex::new(self))
    }

    /// register a new cadence. It starts in the Idle state and gets its baseline on the next tick
    pub fn add<A> (&mut self, name: &str, min_interval: Duration, target: A)->CadenceId where A: Animated + 'static {
        let id = CadenceId( self.next_id.max(1));
        self.next_id = id.0 + 1;

        debug!("adding cadence '{name}' ({id}) with min interval {min_interval:?}");
        self.cadences.push( Cadence::new( id, name, min_interval, Box::new(target)));
        id
    }

    /// remove a cadence. Its target is dropped right away, hence it can't fire anymore
    pub fn cancel (&mut self, id: CadenceId)->bool {
        if let Some(idx) = self.cadences.iter().position( |c| c.id() == id) {
            let c = self.cadences.remove(idx);
            debug!("cancelled cadence '{}' ({})", c.name(), id);
            true
        } else {
            false
        }
    }

    pub fn cancel_all (&mut self) {
        if !self.cadences.is_empty() {
            debug!("cancelling {} cadences", self.cadences.len());
            self.cadences.clear();
        }
    }

    /// advance all cadences that are due at `now`, returning the number of cadences that fired
    pub fn tick (&mut self, now: Duration)->usize {
        let mut n_fired = 0;
        for c in self.cadences.iter_mut() {
            if c.tick( now) { n_fired += 1 }
        }
        self.cadences.retain( |c| !c.is_cancelled());
        n_fired
    }

    pub fn state (&self, id: CadenceId)->Option<CadenceState> {
        self.cadences.iter().find( |c| c.id() == id).map( |c| c.state())
    }

    pub fn n_fired (&self, id: CadenceId)->Option<u64> {
        self.cadences.iter().find( |c| c.id() == id).map( |c| c.n_fired())
    }

    pub fn len (&self)->usize { self.cadences.len() }
    pub fn is_empty (&self)->bool { self.cadences.is_empty() }

    pub fn cadence_names (&self)->Vec<&str> {
        self.cadences.iter().map( |c| c.name()).collect()
    }
}

/// the scheduler shared between its driver and the components that add/cancel cadences.
/// Ticks and cancellation use the same lock, so once `cancel` returns no callback of the
/// cancelled cadence is running or will run
pub type SharedScheduler = Arc<Mutex<AnimationScheduler>>;

/// add a cadence to a shared scheduler and return a handle that can cancel it
pub fn add_cadence<A> (scheduler: &SharedScheduler, name: &str, min_interval: Duration, target: A)->Result<CadenceHandle>
    where A: Animated + 'static
{
    let id = scheduler.lock().map_err(poisoned_lock)?.add( name, min_interval, target);
    Ok( CadenceHandle { id, scheduler: Arc::downgrade(scheduler) } )
}

/// owner side reference to a registered cadence. Dropping the handle does not cancel the cadence
#[derive(Debug,Clone)]
pub struct CadenceHandle {
    id: CadenceId,
    scheduler: Weak<Mutex<AnimationScheduler>>,
}

impl CadenceHandle {
    pub fn id (&self)->CadenceId { self.id }

    /// returns Ok(false) if the cadence (or its scheduler) was already gone
    pub fn cancel (&self)->Result<bool> {
        match self.scheduler.upgrade() {
            Some(scheduler) => Ok( scheduler.lock().map_err(poisoned_lock)?.cancel( self.id)),
            None => Ok(false)
        }
    }

    pub fn state (&self)->Option<CadenceState> {
        let scheduler = self.scheduler.upgrade()?;
        let guard = scheduler.lock().ok()?;
        guard.state( self.id)
    }
}
