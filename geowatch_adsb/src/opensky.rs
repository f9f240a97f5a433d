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
use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize,Deserialize};
use serde_json::Value;
use geowatch_common::{datetime::{deserialize_duration, serialize_duration, secs}, debug};
use geowatch_feed::{self as feed, CacheConfig, FeedError, FeedSource};

use crate::aircraft::Aircraft;

// state vector indices of the OpenSky REST API
const ICAO24: usize = 0;
const CALLSIGN: usize = 1;
const ORIGIN_COUNTRY: usize = 2;
const LONGITUDE: usize = 5;
const LATITUDE: usize = 6;
const BARO_ALTITUDE: usize = 7;
const ON_GROUND: usize = 8;
const VELOCITY: usize = 9;
const TRUE_TRACK: usize = 10;
const GEO_ALTITUDE: usize = 13;

fn str_at<'a> (s: &'a [Value], i: usize)->&'a str {
    s.get(i).and_then( |v| v.as_str()).unwrap_or("")
}

fn f64_at (s: &[Value], i: usize)->Option<f64> {
    s.get(i).and_then( |v| v.as_f64())
}

/// normalize one state vector. None for aircraft on the ground or without numeric position
pub fn normalize_state (s: &[Value])->Option<Aircraft> {
    let lon = f64_at( s, LONGITUDE)?;
    let lat = f64_at( s, LATITUDE)?;
    if s.get(ON_GROUND).and_then( |v| v.as_bool()).unwrap_or(false) {
        return None
    }

    Some( Aircraft {
        icao24: str_at( s, ICAO24).to_string(),
        callsign: str_at( s, CALLSIGN).trim().to_string(),
        country: str_at( s, ORIGIN_COUNTRY).to_string(),
        lon,
        lat,
        altitude_m: f64_at( s, GEO_ALTITUDE).or_else( || f64_at( s, BARO_ALTITUDE)).unwrap_or(0.0),
        velocity_ms: f64_at( s, VELOCITY).unwrap_or(0.0),
        heading: f64_at( s, TRUE_TRACK).unwrap_or(0.0),
    })
}

/// normalize an OpenSky `/states/all` response. A missing or non-array `states` yields nothing
pub fn normalize_opensky (payload: &Value)->Vec<Aircraft> {
    payload.get("states").and_then( |v| v.as_array())
        .map( |states| states.iter().filter_map( |s| s.as_array().and_then( |s| normalize_state(s))).collect())
        .unwrap_or_default()
}

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct OpenSkyConfig {
    pub url: String,
    pub cache: CacheConfig,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub poll_interval: Duration,

    /// responses with fewer aircraft are treated as failed
    pub min_aircraft: usize,

    /// how often positions are extrapolated between polls
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub dead_reckoning_interval: Duration,
}

impl Default for OpenSkyConfig {
    fn default ()->Self {
        OpenSkyConfig {
            url: "https://opensky-network.org/api/states/all".to_string(),
            cache: CacheConfig::new( secs(55), secs(12)),
            poll_interval: secs(60),
            min_aircraft: 10,
            dead_reckoning_interval: secs(1),
        }
    }
}

pub struct OpenSkySource {
    client: Client,
    url: String,
    min_aircraft: usize,
}

impl OpenSkySource {
    pub fn new (config: &OpenSkyConfig)->Self {
        OpenSkySource { client: Client::new(), url: config.url.clone(), min_aircraft: config.min_aircraft }
    }

    /// apply the minimum count policy to a normalized result
    pub fn check_count (&self, aircraft: Vec<Aircraft>)->feed::Result<Vec<Aircraft>> {
        if aircraft.len() < self.min_aircraft {
            Err( FeedError::EmptyResultError( format!("{} ({} < {} aircraft)", self.name(), aircraft.len(), self.min_aircraft)))
        } else {
            Ok(aircraft)
        }
    }
}

#[async_trait]
impl FeedSource for OpenSkySource {
    type Item = Aircraft;

    fn name (&self)->&str { "opensky" }

    async fn fetch_items (&self)->feed::Result<Vec<Aircraft>> {
        let payload: Value = feed::source::get_json( &self.client, self.name(), &self.url).await?;
        self.check_count( normalize_opensky( &payload))
    }
}
