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

use std::{path::PathBuf, sync::Arc, time::Duration};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Serialize,Deserialize};
use tokio::sync::watch;
use geowatch_common::{
    angle::wrap_unit, datetime::{deserialize_duration, serialize_duration, secs_f64},
    geometry::{LonLat, interpolate_along_path}, info
};
use geowatch_anim::Animated;

use crate::lanes::LaneSet;

// per vessel speed ranges in lane fractions per nominal frame
const MAJOR_SPEED_MIN: f64 = 0.00025;
const MAJOR_SPEED_RANGE: f64 = 0.00035;
const MIDDLE_SPEED_MIN: f64 = 0.0002;
const MIDDLE_SPEED_RANGE: f64 = 0.0003;

/// max random displacement of evenly spaced vessels on major lanes
const OFFSET_JITTER: f64 = 0.05;

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct SwarmConfig {
    /// hard cap for the number of simulated vessels
    pub budget: usize,
    pub vessels_per_major_lane: usize,
    pub vessels_per_middle_lane: usize,

    /// we don't recompute positions more often than this
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub frame_interval: Duration,

    /// the frame interval the vessel speeds refer to
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub nominal_frame: Duration,

    /// RNG seed for reproducible runs, a random one is used (and logged) if not set
    #[serde(default)]
    pub seed: Option<u64>,

    /// lane polyline file, the embedded lanes are used if not set
    #[serde(default)]
    pub lanes_path: Option<PathBuf>,
}

impl Default for SwarmConfig {
    fn default ()->Self {
        SwarmConfig {
            budget: 130,
            vessels_per_major_lane: 2,
            vessels_per_middle_lane: 1,
            frame_interval: secs_f64( 1.0 / 30.0),
            nominal_frame: secs_f64( 1.0 / 60.0),
            seed: None,
            lanes_path: None,
        }
    }
}

/// the mutable per vessel simulation state. Lane assignment and speed are fixed for the lifetime
/// of the vessel, only the offset (fraction of lane length in [0,1)) changes
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct VesselState {
    pub id: u32,
    pub lane: usize,
    pub offset: f64,
    pub speed: f64,
}

/// what we publish for rendering
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct AnimatedVessel {
    pub id: u32,
    pub lane: usize,
    pub offset: f64,
    pub speed: f64,
    pub position: LonLat,
}

/// seed vessel states for all lanes in tier order (major lanes first) until the budget is used up.
/// Lanes that come after the budget is exhausted get no vessels
pub fn seed_vessels<R: Rng> (lanes: &LaneSet, config: &SwarmConfig, rng: &mut R)->Vec<VesselState> {
    let budget = config.budget;
    let mut vessels: Vec<VesselState> = Vec::with_capacity( budget);

    let n = config.vessels_per_major_lane;
    'major: for lane in 0..lanes.major.len() {
        for j in 0..n {
            if vessels.len() >= budget { break 'major }
            let offset = wrap_unit( j as f64 / n as f64 + (rng.random::<f64>() - 0.5) * OFFSET_JITTER);
            let speed = MAJOR_SPEED_MIN + rng.random::<f64>() * MAJOR_SPEED_RANGE;
            vessels.push( VesselState { id: vessels.len() as u32, lane, offset, speed });
        }
    }

    let n = config.vessels_per_middle_lane;
    'middle: for i in 0..lanes.middle.len() {
        for j in 0..n {
            if vessels.len() >= budget { break 'middle }
            let offset = if n > 1 {
                wrap_unit( j as f64 / n as f64 + (rng.random::<f64>() - 0.5) * OFFSET_JITTER)
            } else {
                rng.random::<f64>()
            };
            let speed = MIDDLE_SPEED_MIN + rng.random::<f64>() * MIDDLE_SPEED_RANGE;
            vessels.push( VesselState { id: vessels.len() as u32, lane: lanes.major.len() + i, offset, speed });
        }
    }

    vessels
}

/// a fixed population of vessels moving along their lanes. Movement is scaled by the actual
/// elapsed time so that the apparent speed does not depend on the frame rate we achieve
pub struct VesselSwarm {
    lanes: Arc<LaneSet>,
    vessels: Vec<VesselState>,
    nominal_frame: Duration,
    tx: watch::Sender<Arc<Vec<AnimatedVessel>>>,
}

impl VesselSwarm {
    pub fn new (lanes: Arc<LaneSet>, vessels: Vec<VesselState>, nominal_frame: Duration)->Self {
        let initial = Arc::new( compute_positions( &lanes, &vessels));
        let (tx, _) = watch::channel( initial);
        VesselSwarm { lanes, vessels, nominal_frame, tx }
    }

    /// deterministic seeding from the config seed (or a logged random one)
    pub fn seeded (lanes: Arc<LaneSet>, config: &SwarmConfig)->Self {
        let seed = config.seed.unwrap_or_else( || rand::random::<u64>());
        let mut rng = ChaCha8Rng::seed_from_u64( seed);
        let vessels = seed_vessels( &lanes, config, &mut rng);
        info!("seeded {} vessels on {} lanes (seed {})", vessels.len(), lanes.len(), seed);

        VesselSwarm::new( lanes, vessels, config.nominal_frame)
    }

    pub fn lanes (&self)->&LaneSet { &self.lanes }
    pub fn vessels (&self)->&[VesselState] { &self.vessels }
    pub fn len (&self)->usize { self.vessels.len() }
    pub fn is_empty (&self)->bool { self.vessels.is_empty() }

    pub fn subscribe (&self)->watch::Receiver<Arc<Vec<AnimatedVessel>>> { self.tx.subscribe() }

    /// move all vessels by `speed * elapsed/nominal_frame`, wrapping around at the lane end
    pub fn advance (&mut self, elapsed: Duration) {
        let scale = elapsed.as_secs_f64() / self.nominal_frame.as_secs_f64();
        for v in self.vessels.iter_mut() {
            v.offset = wrap_unit( v.offset + v.speed * scale);
        }
    }

    pub fn positions (&self)->Vec<AnimatedVessel> {
        compute_positions( &self.lanes, &self.vessels)
    }

    fn publish (&self) {
        self.tx.send_replace( Arc::new( self.positions()));
    }
}

fn compute_positions (lanes: &LaneSet, vessels: &[VesselState])->Vec<AnimatedVessel> {
    vessels.iter().map( |v| AnimatedVessel {
        id: v.id,
        lane: v.lane,
        offset: v.offset,
        speed: v.speed,
        position: lanes.path( v.lane).map( |p| interpolate_along_path( p, v.offset)).unwrap_or( LonLat::ORIGIN),
    }).collect()
}

/// registered with the scheduler at the frame interval, which caps the recomputation rate
impl Animated for VesselSwarm {
    fn advance (&mut self, elapsed: Duration, _now: Duration) {
        VesselSwarm::advance( self, elapsed);
        self.publish();
    }
}
