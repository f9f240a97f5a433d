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

//! live aircraft positions from ADS-B exchange style feeds and OpenSky, with dead reckoning
//! between polls

pub mod aircraft;
pub use aircraft::{Aircraft, adsb_fallback, opensky_fallback};

pub mod adsbx;
pub use adsbx::{AdsbConfig, AdsbSource, RawAircraft, Region, normalize_adsb};

pub mod opensky;
pub use opensky::{OpenSkyConfig, OpenSkySource, normalize_opensky};

pub mod dead_reckon;
pub use dead_reckon::{AircraftBase, AircraftFeed, DeadReckoning, aircraft_update_action, dead_reckon, spawn_aircraft_feed};
