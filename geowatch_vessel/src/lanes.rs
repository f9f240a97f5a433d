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

use std::{fs, path::Path};
use serde::{Serialize,Deserialize};
use geowatch_common::{geometry::{LonLat, densify, path_length}, debug};

use crate::errors::{VesselError, Result, invalid_lane};

/// the lane polylines we ship with
const EMBEDDED_LANES: &str = include_str!("../assets/lane_paths.json");

/// lanes are grouped into two tiers that get a different number of vessels. The set is immutable
/// once loaded, vessels refer to lanes by index into [`LaneSet::path`] (major lanes first)
#[derive(Serialize,Deserialize,Debug,Clone,Default)]
pub struct LaneSet {
    pub major: Vec<Vec<LonLat>>,
    pub middle: Vec<Vec<LonLat>>,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum LaneTier { Major, Middle }

impl LaneSet {
    pub fn new (major: Vec<Vec<LonLat>>, middle: Vec<Vec<LonLat>>)->Result<Self> {
        let lanes = LaneSet { major, middle };
        lanes.check()?;
        Ok(lanes)
    }

    pub fn from_json (json: &str)->Result<Self> {
        let lanes: LaneSet = serde_json::from_str( json)?;
        lanes.check()?;
        Ok(lanes)
    }

    pub fn load<P: AsRef<Path>> (path: P)->Result<Self> {
        let json = fs::read_to_string( path.as_ref())?;
        let lanes = LaneSet::from_json( &json)?;
        debug!("loaded {} major and {} middle lanes from {:?}", lanes.major.len(), lanes.middle.len(), path.as_ref());
        Ok(lanes)
    }

    pub fn embedded ()->Result<Self> {
        LaneSet::from_json( EMBEDDED_LANES)
    }

    /// every lane needs at least two points to move along
    fn check (&self)->Result<()> {
        for (i,p) in self.major.iter().chain( self.middle.iter()).enumerate() {
            if p.len() < 2 {
                return Err( invalid_lane!("lane {} has {} points", i, p.len()))
            }
            if p.iter().any( |c| !c.lon.is_finite() || !c.lat.is_finite()) {
                return Err( invalid_lane!("lane {} has non-finite coordinates", i))
            }
        }
        Ok(())
    }

    pub fn len (&self)->usize { self.major.len() + self.middle.len() }
    pub fn is_empty (&self)->bool { self.len() == 0 }

    pub fn path (&self, idx: usize)->Option<&[LonLat]> {
        if idx < self.major.len() {
            Some( self.major[idx].as_slice())
        } else {
            self.middle.get( idx - self.major.len()).map( |p| p.as_slice())
        }
    }

    pub fn tier (&self, idx: usize)->Option<LaneTier> {
        if idx < self.major.len() { Some(LaneTier::Major) }
        else if idx < self.len() { Some(LaneTier::Middle) }
        else { None }
    }

    /// all lanes densified for rendering as smooth arcs
    pub fn densified (&self, max_step_deg: f64)->LaneSet {
        LaneSet {
            major: self.major.iter().map( |p| densify( p, max_step_deg)).collect(),
            middle: self.middle.iter().map( |p| densify( p, max_step_deg)).collect(),
        }
    }

    /// total planar length of all lanes in degrees
    pub fn total_length (&self)->f64 {
        self.major.iter().chain( self.middle.iter()).map( |p| path_length(p)).sum()
    }
}
