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

/// unit conversions at feed normalization boundaries. The coefficients are fixed by the feed
/// conventions and have to be applied exactly, so that upstream units never leak past normalization.
/// Note that the knot coefficient is the truncated 0.5144 used by the feeds, not the exact 1852/3600

use uom::si::{f64::{Length,Velocity}, length::meter, velocity::meter_per_second};

pub const FEET_TO_METERS: f64 = 0.3048;
pub const KNOTS_TO_METERS_PER_SECOND: f64 = 0.5144;

#[inline] pub fn feet_to_meters (ft: f64)->f64 { ft * FEET_TO_METERS }
#[inline] pub fn meters_to_feet (m: f64)->f64 { m / FEET_TO_METERS }

#[inline] pub fn knots_to_meters_per_second (kn: f64)->f64 { kn * KNOTS_TO_METERS_PER_SECOND }
#[inline] pub fn meters_per_second_to_knots (ms: f64)->f64 { ms / KNOTS_TO_METERS_PER_SECOND }

/// typed views on normalized (SI) values, e.g. for display collaborators
#[inline] pub fn length_from_meters (m: f64)->Length { Length::new::<meter>(m) }
#[inline] pub fn velocity_from_meters_per_second (ms: f64)->Velocity { Velocity::new::<meter_per_second>(ms) }
