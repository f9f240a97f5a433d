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

//! orbital propagation of live TLE sets into sub-satellite points, based on satkit's SGP4

pub mod errors;
pub use errors::{OrbitalError, Result};

pub mod tle;
pub use tle::{OrbitalElement, TleEntry, parse_tle_text, parse_elements, tle_checksum};

pub mod propagator;
pub use propagator::{Satellite, gmst, propagate, propagate_elements, propagate_all};

pub mod fallback;
pub use fallback::fallback_satellites;

pub mod celestrak;
pub use celestrak::{CelestrakSource, OrbitalConfig};

pub mod satellites;
pub use satellites::{SatelliteFeed, SatellitePropagation, spawn_satellite_feed, tle_update_action};
