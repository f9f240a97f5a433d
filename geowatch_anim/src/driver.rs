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

use std::time::Duration;
use tokio::{task::JoinHandle, time::{self, Instant, MissedTickBehavior}};
use geowatch_common::{info, warn, error};

use crate::{errors::{AnimError, Result, poisoned_lock}, scheduler::SharedScheduler};

/// a fixed rate tokio timer that ticks a shared scheduler, standing in for a display refresh
/// callback. Missed ticks (e.g. under load) are skipped - cadences measure elapsed time anyway
pub struct FrameDriver {
    scheduler: SharedScheduler,
    frame_interval: Duration,
    task: Option<JoinHandle<()>>,
}

impl FrameDriver {
    pub fn new (scheduler: SharedScheduler, frame_interval: Duration)->Self {
        FrameDriver { scheduler, frame_interval, task: None }
    }

    pub fn with_rate (scheduler: SharedScheduler, hz: f64)->Self {
        Self::new( scheduler, Duration::from_secs_f64( 1.0 / hz.max(1.0)))
    }

    pub fn scheduler (&self)->&SharedScheduler { &self.scheduler }

    pub fn is_running (&self)->bool {
        self.task.as_ref().map( |t| !t.is_finished()).unwrap_or(false)
    }

    /// needs to be called from within a tokio runtime
    pub fn start (&mut self)->Result<()> {
        if self.is_running() {
            return Err( AnimError::OpFailedError("frame driver already running".into()))
        }

        let scheduler = self.scheduler.clone();
        let frame_interval = self.frame_interval;
        info!("starting frame driver at {:.1} Hz", 1.0 / frame_interval.as_secs_f64());

        self.task = Some( tokio::spawn( async move {
            let start = Instant::now();
            let mut timer = time::interval( frame_interval);
            timer.set_missed_tick_behavior( MissedTickBehavior::Skip);

            loop {
                timer.tick().await;
                let now = start.elapsed();
                match scheduler.lock() {
                    Ok(mut s) => { s.tick( now); }
                    Err(e) => {
                        error!("frame driver stopped: {e}");
                        break
                    }
                }
            }
        }));

        Ok(())
    }

    /// stop ticking and cancel all cadences of the scheduler
    pub fn terminate (&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            info!("frame driver terminated");
        }
        match self.scheduler.lock() {
            Ok(mut s) => s.cancel_all(),
            Err(e) => warn!("could not cancel cadences: {e}")
        }
    }
}

impl Drop for FrameDriver {
    fn drop (&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
