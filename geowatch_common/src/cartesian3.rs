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

use std::ops::{Add, Sub, Mul};
use serde::{Serialize,Deserialize};

/// note that we do not use uom here since this is used for abstract coordinate systems
/// (TEME and ECEF in meters)

#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64
}

impl Cartesian3 {
    pub fn new (x: f64, y: f64, z: f64)->Cartesian3 {
        Cartesian3{x,y,z}
    }

    pub fn zero ()->Cartesian3 {
        Cartesian3{x: 0.0, y: 0.0, z: 0.0}
    }

    pub fn length (&self) -> f64 {
        ((self.x * self.x) + (self.y * self.y) + (self.z * self.z)).sqrt()
    }

    pub fn is_finite (&self)->bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// rotate (frame, not vector) around the z-axis by `angle` radians. This is what turns an
    /// inertial vector into earth fixed coordinates if `angle` is the sidereal time
    pub fn rotate_frame_z (&self, angle: f64)->Cartesian3 {
        let (s,c) = angle.sin_cos();
        Cartesian3 {
            x: self.x * c + self.y * s,
            y: -self.x * s + self.y * c,
            z: self.z
        }
    }
}

impl Add for Cartesian3 {
    type Output = Cartesian3;
    fn add (self, p: Cartesian3)->Cartesian3 { Cartesian3::new( self.x + p.x, self.y + p.y, self.z + p.z) }
}

impl Sub for Cartesian3 {
    type Output = Cartesian3;
    fn sub (self, p: Cartesian3)->Cartesian3 { Cartesian3::new( self.x - p.x, self.y - p.y, self.z - p.z) }
}

impl Mul<f64> for Cartesian3 {
    type Output = Cartesian3;
    fn mul (self, s: f64)->Cartesian3 { Cartesian3::new( self.x * s, self.y * s, self.z * s) }
}
