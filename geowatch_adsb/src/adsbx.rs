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
use futures::future::join_all;
use hashbrown::HashSet;
use reqwest::Client;
use serde::{Serialize,Deserialize};
use serde_json::Value;
use geowatch_common::{
    datetime::{deserialize_duration, serialize_duration, minutes, secs, secs_f64},
    units::{feet_to_meters, knots_to_meters_per_second}, debug, warn
};
use geowatch_feed::{self as feed, CacheConfig, FeedError, FeedSource};

use crate::aircraft::Aircraft;

/// barometric altitude is either feet or the literal "ground"
#[derive(Deserialize,Debug,Clone,PartialEq)]
#[serde(untagged)]
pub enum AltBaro {
    Feet(f64),
    Other(String),
}

/// one record of an ADS-B exchange style payload (adsb.lol, adsb.fi). Everything is optional
#[derive(Deserialize,Debug,Clone,Default)]
pub struct RawAircraft {
    pub hex: Option<String>,
    pub flight: Option<String>,
    pub r: Option<String>,
    pub lon: Option<f64>,
    pub lat: Option<f64>,
    pub alt_baro: Option<AltBaro>,
    pub gs: Option<f64>,
    pub track: Option<f64>,
}

impl RawAircraft {
    /// None for aircraft on the ground, without altitude or without position
    pub fn normalize (&self)->Option<Aircraft> {
        let alt_ft = match &self.alt_baro {
            Some(AltBaro::Feet(ft)) => *ft,
            _ => return None
        };
        let (lon, lat) = (self.lon?, self.lat?);

        Some( Aircraft {
            icao24: self.hex.clone().unwrap_or_default(),
            callsign: self.flight.as_deref().unwrap_or("").trim().to_string(),
            country: self.r.clone().unwrap_or_default(),
            lon,
            lat,
            altitude_m: feet_to_meters( alt_ft),
            velocity_ms: knots_to_meters_per_second( self.gs.unwrap_or(0.0)),
            heading: self.track.unwrap_or(0.0),
        })
    }
}

/// the records of a payload that is either a bare array or an object with an "ac" array
fn raw_records (payload: &Value)->&[Value] {
    match payload {
        Value::Array(a) => a.as_slice(),
        Value::Object(o) => o.get("ac").and_then( |v| v.as_array()).map( |a| a.as_slice()).unwrap_or(&[]),
        _ => &[]
    }
}

/// normalize an ADS-B exchange payload. Records that don't deserialize or fail the field checks
/// are dropped
pub fn normalize_adsb (payload: &Value)->Vec<Aircraft> {
    raw_records( payload).iter()
        .filter_map( |v| RawAircraft::deserialize(v).ok())
        .filter_map( |raw| raw.normalize())
        .collect()
}

/// a circular query area (radius in nautical miles)
#[derive(Serialize,Deserialize,Debug,Clone,Copy,PartialEq)]
pub struct Region {
    pub lat: f64,
    pub lon: f64,
    pub dist: u32,
}

impl Region {
    pub const fn new (lat: f64, lon: f64, dist: u32)->Self { Region { lat, lon, dist } }
}

/// major flight corridors, 250nm is the maximum radius of the public adsb.lol API
pub const DEFAULT_REGIONS: [Region; 16] = [
    Region::new(  51.0,    2.0, 250), // western europe
    Region::new(  50.0,   23.0, 250), // central and eastern europe
    Region::new(  52.0,  -30.0, 250), // north atlantic
    Region::new(  40.0,  -74.0, 250), // US north east
    Region::new(  30.0,  -90.0, 250), // US south east, gulf
    Region::new(  35.0, -118.0, 250), // US west coast
    Region::new(  48.0, -122.0, 250), // pacific north west
    Region::new(  50.0,  175.0, 250), // north pacific
    Region::new(  35.0,  127.0, 250), // japan, korea
    Region::new(  30.0,  120.0, 250), // east china coast
    Region::new(  10.0,  108.0, 250), // south china sea
    Region::new(  20.0,   75.0, 250), // india
    Region::new(  25.0,   50.0, 250), // arabian gulf
    Region::new(   5.0,   20.0, 250), // central africa
    Region::new( -28.0,  135.0, 250), // australia
    Region::new( -10.0,  -52.0, 250), // brazil
];

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct AdsbConfig {
    pub base_url: String,
    pub regions: Vec<Region>,
    pub cache: CacheConfig,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub poll_interval: Duration,

    /// how often positions are extrapolated between polls
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub dead_reckoning_interval: Duration,
}

impl Default for AdsbConfig {
    fn default ()->Self {
        AdsbConfig {
            base_url: "https://api.adsb.lol/v2".to_string(),
            regions: DEFAULT_REGIONS.to_vec(),
            cache: CacheConfig::new( secs_f64(9.5 * 60.0), secs(12)),
            poll_interval: minutes(10),
            dead_reckoning_interval: secs(1),
        }
    }
}

/// queries all configured regions concurrently and merges the results, dropping aircraft that
/// were already reported by a previous region
pub struct AdsbSource {
    client: Client,
    base_url: String,
    regions: Vec<Region>,
}

impl AdsbSource {
    pub fn new (config: &AdsbConfig)->Self {
        AdsbSource { client: Client::new(), base_url: config.base_url.clone(), regions: config.regions.clone() }
    }

    fn region_url (&self, r: &Region)->String {
        format!("{}/lat/{}/lon/{}/dist/{}", self.base_url, r.lat, r.lon, r.dist)
    }
}

#[async_trait]
impl FeedSource for AdsbSource {
    type Item = Aircraft;

    fn name (&self)->&str { "adsb" }

    async fn fetch_items (&self)->feed::Result<Vec<Aircraft>> {
        let requests = self.regions.iter().map( |r| {
            let url = self.region_url(r);
            async move { feed::source::get_json::<Value>( &self.client, self.name(), &url).await }
        });
        let responses = join_all( requests).await;

        let mut seen: HashSet<String> = HashSet::new();
        let mut aircraft = Vec::new();
        let mut last_err: Option<FeedError> = None;
        let mut n_ok = 0;

        for res in responses {
            match res {
                Ok(payload) => {
                    n_ok += 1;
                    for ac in normalize_adsb( &payload) {
                        if ac.icao24.is_empty() || seen.insert( ac.icao24.clone()) {
                            aircraft.push( ac);
                        }
                    }
                }
                Err(e) => {
                    debug!("adsb region query failed: {}", e);
                    // a rate limit anywhere wins, we don't want to keep hammering the server
                    if !last_err.as_ref().map( |e| e.is_rate_limit()).unwrap_or(false) {
                        last_err = Some(e);
                    }
                }
            }
        }

        match last_err {
            Some(e) if e.is_rate_limit() || n_ok == 0 => Err(e),
            _ => Ok(aircraft)
        }
    }
}
