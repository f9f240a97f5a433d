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

use std::fmt;
use serde::{Serialize,Deserialize};
use uom::si::{f64::{Length,Velocity}, length::foot, velocity::knot};
use geowatch_common::{geometry::LonLat, units::{length_from_meters, velocity_from_meters_per_second}};

/// the normalized aircraft record all sources map into. Units are SI (meters, m/s), heading is
/// degrees clockwise from north
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Aircraft {
    pub icao24: String,
    pub callsign: String,
    pub country: String,
    pub lon: f64,
    pub lat: f64,
    pub altitude_m: f64,
    pub velocity_ms: f64,
    pub heading: f64,
}

impl Aircraft {
    pub fn position (&self)->LonLat { LonLat::new( self.lon, self.lat) }
    pub fn altitude (&self)->Length { length_from_meters( self.altitude_m) }
    pub fn velocity (&self)->Velocity { velocity_from_meters_per_second( self.velocity_ms) }

    /// stationary or unknown speed aircraft are never extrapolated
    pub fn is_moving (&self)->bool { self.velocity_ms > 0.0 }
}

impl fmt::Display for Aircraft {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!( f, "Aircraft( icao24: {}", self.icao24)?;
        if !self.callsign.is_empty() { write!( f, ", cs: \"{}\"", self.callsign)?; }
        write!( f, ", pos: {:.4},{:.4}", self.lon, self.lat)?;
        write!( f, ", alt: {:.0}", self.altitude().get::<foot>())?;
        write!( f, ", spd: {:.1}", self.velocity().get::<knot>())?;
        write!( f, ", hdg: {:.0} )", self.heading)
    }
}

// (icao24, callsign, country, lon, lat, altitude m, velocity m/s, heading)
type FallbackRecord = (&'static str, &'static str, &'static str, f64, f64, f64, f64, f64);

fn from_records (records: &[FallbackRecord])->Vec<Aircraft> {
    records.iter().map( |(icao24,callsign,country,lon,lat,alt,vel,hdg)| Aircraft {
        icao24: icao24.to_string(), callsign: callsign.to_string(), country: country.to_string(),
        lon: *lon, lat: *lat, altitude_m: *alt, velocity_ms: *vel, heading: *hdg
    }).collect()
}

const ADSB_FALLBACK: [FallbackRecord; 30] = [
    // south east asia
    ("700261", "SIA321",  "Singapore",     103.8,   1.4, 10668.0, 245.0,  45.0),
    ("76acd2", "MAS370",  "Malaysia",      101.7,   3.1, 11000.0, 238.0, 270.0),
    ("8960e3", "GIA402",  "Indonesia",     107.6,  -6.9,  9144.0, 220.0,  90.0),
    ("8964b2", "GIA881",  "Indonesia",     112.7,  -7.2, 10972.0, 235.0,  75.0),
    ("7c5213", "THA661",  "Thailand",      100.5,  13.8, 10060.0, 230.0, 130.0),
    ("749a21", "PAL118",  "Philippines",   121.0,  14.5, 11277.0, 242.0, 215.0),
    ("7c4b21", "VJC820",  "Vietnam",       106.7,  10.8,  9754.0, 228.0,   5.0),
    ("7c9f33", "AXM732",  "Malaysia",       98.3,   5.4, 10363.0, 233.0, 310.0),
    ("8965c4", "LNI901",  "Indonesia",     115.2,  -8.7,  8534.0, 215.0, 260.0),
    ("76b441", "MXD611",  "Myanmar",        96.2,  16.9,  9449.0, 225.0, 180.0),
    // north east asia
    ("780a42", "CES204",  "China",         121.5,  31.2, 10972.0, 248.0, 110.0),
    ("781b33", "CCA101",  "China",         116.4,  39.9, 11277.0, 251.0, 225.0),
    ("8446c1", "KAL901",  "South Korea",   126.9,  37.6, 10668.0, 244.0,  60.0),
    ("868aa1", "JAL007",  "Japan",         139.8,  35.7, 11582.0, 255.0, 330.0),
    ("896b12", "EVA015",  "Taiwan",        121.2,  25.1, 10972.0, 246.0, 285.0),
    // south asia and middle east
    ("896211", "SIA026",  "Singapore",      88.3,  22.5, 11277.0, 249.0, 295.0),
    ("896c44", "UAE412",  "UAE",            55.4,  25.3, 12192.0, 258.0, 100.0),
    ("896d55", "QTR542",  "Qatar",          51.6,  25.3, 11887.0, 253.0,  80.0),
    ("400921", "BAW009",  "UK",             68.4,  24.9, 11582.0, 252.0, 115.0),
    // trans pacific
    ("a05b31", "UAL837",  "United States", 165.0,  38.5, 11887.0, 256.0,  60.0),
    ("a1c422", "DAL281",  "United States",-155.0,  45.2, 11582.0, 254.0, 240.0),
    ("7808b2", "CPA104",  "Hong Kong",     145.0,  28.0, 11277.0, 250.0,  55.0),
    // indian ocean
    ("7c6812", "SIA471",  "Singapore",      80.2,   7.9, 10972.0, 245.0, 255.0),
    ("896e77", "GIA088",  "Indonesia",      95.3,   5.5,  9754.0, 228.0, 270.0),
    // europe
    ("3c6444", "DLH400",  "Germany",        13.4,  52.5, 11277.0, 252.0, 270.0),
    ("4ca2c1", "RYR4421", "Ireland",        -6.3,  53.3,  9754.0, 230.0, 190.0),
    // americas
    ("a0f073", "AAL100",  "United States", -74.0,  40.7, 10972.0, 240.0,  90.0),
    ("a8f311", "SWA1234", "United States",-118.2,  34.1,  9449.0, 224.0, 270.0),
    // australia and pacific
    ("7c6a1c", "QFA01",   "Australia",     151.2, -33.9, 10668.0, 241.0, 320.0),
    ("7c7bde", "ANZ180",  "New Zealand",   174.8, -36.9, 11277.0, 247.0,  10.0),
];

const OPENSKY_FALLBACK: [FallbackRecord; 5] = [
    ("700261", "SIA321", "Singapore",     103.8,  1.35, 10668.0, 245.0,  45.0),
    ("3c6444", "DLH400", "Germany",        13.4, 52.5,  11277.0, 252.0, 270.0),
    ("a0f073", "AAL100", "United States", -74.0, 40.7,  10972.0, 240.0,  90.0),
    ("76acd2", "MAS370", "Malaysia",      101.7,  3.1,  11000.0, 238.0, 270.0),
    ("8960e3", "GIA402", "Indonesia",     107.6, -6.9,   9144.0, 220.0,  90.0),
];

/// what we show if the ADS-B exchange feed never delivered
pub fn adsb_fallback ()->Vec<Aircraft> { from_records( &ADSB_FALLBACK) }

/// what we show if OpenSky never delivered
pub fn opensky_fallback ()->Vec<Aircraft> { from_records( &OPENSKY_FALLBACK) }
