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

/// planar polyline utilities in raw lon/lat degree space. These do not correct for spherical
/// geometry - lane spacing is coarse relative to a globe so the degree distance is good enough
/// as a heuristic for both densification and arc-length interpolation

use std::fmt;
use serde::{Serialize,Deserialize};

/// a lon/lat coordinate pair in degrees. Deserializes from `[lon,lat]` arrays as well as objects
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub const ORIGIN: LonLat = LonLat { lon: 0.0, lat: 0.0 };

    #[inline]
    pub const fn new (lon: f64, lat: f64)->Self { LonLat { lon, lat } }

    /// planar distance in degrees
    #[inline]
    pub fn degree_distance (&self, other: &LonLat)->f64 {
        let dx = other.lon - self.lon;
        let dy = other.lat - self.lat;
        (dx*dx + dy*dy).sqrt()
    }

    #[inline]
    pub fn lerp (&self, other: &LonLat, t: f64)->LonLat {
        LonLat::new( self.lon + t * (other.lon - self.lon), self.lat + t * (other.lat - self.lat))
    }
}

impl From<[f64;2]> for LonLat {
    fn from (a: [f64;2])->Self { LonLat::new( a[0], a[1]) }
}

impl fmt::Display for LonLat {
    fn fmt (&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5},{:.5})", self.lon, self.lat)
    }
}

/// upper bound for the number of steps a single segment is split into
pub const MAX_SEGMENT_STEPS: usize = 10_000;

/// insert intermediate points so that no two consecutive points are more than `max_step_deg` apart.
/// Original points are preserved, inserted points are evenly spaced along each segment. Each
/// segment of length `d` is split into `ceil(d / max_step_deg)` steps, hence segments that are already
/// short enough (including zero length segments) are copied unchanged. Segments with non-finite
/// coordinates are not split, and no segment is split into more than [`MAX_SEGMENT_STEPS`] steps
pub fn densify (path: &[LonLat], max_step_deg: f64)->Vec<LonLat> {
    if path.len() < 2 || !(max_step_deg > 0.0) {
        return path.to_vec()
    }

    let mut result: Vec<LonLat> = Vec::with_capacity( path.len());
    result.push( path[0]);

    for w in path.windows(2) {
        let (p0, p1) = (&w[0], &w[1]);
        let ratio = (p0.degree_distance(p1) / max_step_deg).ceil();
        let steps = if ratio.is_finite() { (ratio as usize).min( MAX_SEGMENT_STEPS) } else { 1 };

        if steps <= 1 {
            result.push( *p1); // keep the original point bit-identical
        } else {
            for s in 1..steps {
                result.push( p0.lerp( p1, s as f64 / steps as f64));
            }
            result.push( *p1);
        }
    }

    result
}

/// compute the point at fractional arc length `offset` along `path`, using cumulative planar segment
/// lengths to find the target segment and linear interpolation within it.
/// `offset <= 0` returns the first point and `offset >= 1` the last one. A single point path returns
/// that point for any offset and an empty path returns the origin
pub fn interpolate_along_path (path: &[LonLat], offset: f64)->LonLat {
    let Some(first) = path.first() else { return LonLat::ORIGIN };

    if offset <= 0.0 || path.len() == 1 { return *first }
    let last = path[path.len()-1];
    if offset >= 1.0 { return last }

    let mut cum: Vec<f64> = Vec::with_capacity( path.len());
    cum.push(0.0);
    for i in 1..path.len() {
        cum.push( cum[i-1] + path[i-1].degree_distance( &path[i]));
    }

    let target = offset * cum[cum.len()-1];
    for i in 1..cum.len() {
        if cum[i] >= target {
            let seg_start = cum[i-1];
            let seg_len = cum[i] - seg_start;
            let t = if seg_len == 0.0 { 0.0 } else { (target - seg_start) / seg_len };
            return path[i-1].lerp( &path[i], t)
        }
    }

    last // only reached for NaN offsets
}

/// total planar length of a path in degrees
pub fn path_length (path: &[LonLat])->f64 {
    path.windows(2).map( |w| w[0].degree_distance(&w[1])).sum()
}
