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

/// common geodetic constants that should be consistent throughout geowatch crates

/// WGS84 semi major axis in meters
pub const EQUATORIAL_EARTH_RADIUS: f64 = 6378137.0;

/// WGS84 semi minor axis in meters
pub const POLAR_EARTH_RADIUS: f64 = 6356752.3142;

/// first eccentricity squared
pub const E_EARTH_SQUARED: f64 = 6.6943799901377997e-3;

/// the flat-earth scale used for dead reckoning. This is the length of one degree of latitude
/// (and of longitude at the equator) in meters
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// positions below this distance from the geocenter (meters) are not physical orbits
pub const MIN_ORBIT_RADIUS: f64 = POLAR_EARTH_RADIUS - 10_000.0;
