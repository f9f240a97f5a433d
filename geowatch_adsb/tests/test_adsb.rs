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

use std::{sync::Arc, time::Duration};
use chrono::{TimeDelta, Utc};
use serde_json::json;
use tokio::sync::watch;
use geowatch_feed::{CacheResult, Provenance};
use geowatch_adsb::*;

// run with "cargo test --test test_adsb -- --nocapture"

fn aircraft (icao24: &str, lon: f64, lat: f64, velocity_ms: f64, heading: f64)->Aircraft {
    Aircraft {
        icao24: icao24.to_string(), callsign: format!("T{icao24}"), country: "Testland".to_string(),
        lon, lat, altitude_m: 10000.0, velocity_ms, heading
    }
}

#[test]
fn test_dead_reckon_zero_elapsed () {
    let base = adsb_fallback();
    assert_eq!( dead_reckon( &base, Duration::ZERO), base);
}

#[test]
fn test_dead_reckon_stationary () {
    let base = vec![ aircraft( "a", 10.0, 50.0, 0.0, 90.0), aircraft( "b", 11.0, 51.0, -5.0, 0.0) ];
    let moved = dead_reckon( &base, Duration::from_secs(600));
    assert_eq!( moved, base);
}

#[test]
fn test_dead_reckon_moving () {
    let base = vec![
        aircraft( "north", 10.0, 0.0, 111.32, 0.0),
        aircraft( "east", 10.0, 60.0, 111.32, 90.0),
    ];
    let moved = dead_reckon( &base, Duration::from_secs(1000));
    for ac in &moved { println!("{ac}"); }

    // 111.32 m/s for 1000s is 111.32km, which is one degree of latitude
    assert!( (moved[0].lat - 1.0).abs() < 1e-9);
    assert!( (moved[0].lon - 10.0).abs() < 1e-9);

    // at 60° latitude one degree of longitude is half as long
    assert!( (moved[1].lat - 60.0).abs() < 1e-9);
    assert!( (moved[1].lon - 12.0).abs() < 1e-6);

    // all other fields unchanged
    assert_eq!( moved[1].icao24, "east");
    assert_eq!( moved[1].altitude_m, 10000.0);
    assert_eq!( moved[1].heading, 90.0);
}

#[test]
fn test_dead_reckon_antimeridian () {
    let base = vec![ aircraft( "x", 179.9, 0.0, 250.0, 90.0) ];
    let moved = dead_reckon( &base, Duration::from_secs(600));
    println!("{}", moved[0]);
    assert!( moved[0].lon < 0.0 && moved[0].lon > -180.0);
}

#[test]
fn test_normalize_adsb () {
    let payload = json!({ "ac": [
        { "hex": "abc123", "flight": "UAL1   ", "r": "N123", "lon": -122.0, "lat": 37.5, "alt_baro": 35000, "gs": 450.0, "track": 270.0 },
        { "hex": "ground1", "lon": 1.0, "lat": 2.0, "alt_baro": "ground", "gs": 5.0 },
        { "hex": "noalt", "lon": 1.0, "lat": 2.0, "gs": 300.0 },
        { "hex": "nolat", "lon": 1.0, "alt_baro": 20000 },
        { "hex": "minimal", "lon": 3.0, "lat": 4.0, "alt_baro": 1000 },
        { "hex": "broken", "lon": "east", "lat": 4.0, "alt_baro": 1000 }
    ]});

    let acs = normalize_adsb( &payload);
    for ac in &acs { println!("{ac}"); }
    assert_eq!( acs.len(), 2);

    let ac = &acs[0];
    assert_eq!( ac.icao24, "abc123");
    assert_eq!( ac.callsign, "UAL1");
    assert_eq!( ac.country, "N123");
    assert_eq!( ac.altitude_m, 35000.0 * 0.3048);
    assert_eq!( ac.velocity_ms, 450.0 * 0.5144);
    assert_eq!( ac.heading, 270.0);

    let ac = &acs[1];
    assert_eq!( ac.callsign, "");
    assert_eq!( ac.velocity_ms, 0.0);
    assert_eq!( ac.heading, 0.0);

    // bare arrays work too
    let payload = json!([ { "hex": "abc123", "lon": -122.0, "lat": 37.5, "alt_baro": 35000 } ]);
    assert_eq!( normalize_adsb( &payload).len(), 1);

    assert!( normalize_adsb( &json!({ "msg": "no data" })).is_empty());
}

fn state (icao24: &str, lon: serde_json::Value, lat: serde_json::Value, on_ground: bool, baro: serde_json::Value, geo: serde_json::Value)->serde_json::Value {
    json!([ icao24, "DLH4AB  ", "Germany", 1700000000, 1700000000, lon, lat, baro, on_ground, 240.5, 87.0, 0.0, null, geo, "1000", false, 0 ])
}

#[test]
fn test_normalize_opensky () {
    let payload = json!({ "time": 1700000000, "states": [
        state( "3c6444", json!(13.4), json!(52.5), false, json!(11000.0), json!(11200.0)),
        state( "3c6445", json!(13.4), json!(52.5), false, json!(11000.0), json!(null)),
        state( "3c6446", json!(13.4), json!(52.5), false, json!(null), json!(null)),
        state( "3c6447", json!(13.4), json!(52.5), true, json!(null), json!(null)),
        state( "3c6448", json!(null), json!(52.5), false, json!(11000.0), json!(11200.0)),
    ]});

    let acs = normalize_opensky( &payload);
    for ac in &acs { println!("{ac}"); }
    assert_eq!( acs.len(), 3);
    assert_eq!( acs[0].callsign, "DLH4AB");
    assert_eq!( acs[0].altitude_m, 11200.0);
    assert_eq!( acs[1].altitude_m, 11000.0);
    assert_eq!( acs[2].altitude_m, 0.0);
    assert_eq!( acs[0].velocity_ms, 240.5);
    assert_eq!( acs[0].heading, 87.0);

    assert!( normalize_opensky( &json!({ "time": 1, "states": null })).is_empty());
}

#[test]
fn test_opensky_min_count () {
    let src = OpenSkySource::new( &OpenSkyConfig::default());
    assert!( src.check_count( opensky_fallback()).is_err()); // 5 < 10
    let many: Vec<Aircraft> = (0..10).map( |i| aircraft( &i.to_string(), 0.0, 0.0, 100.0, 0.0)).collect();
    assert_eq!( src.check_count( many).unwrap().len(), 10);
}

#[test]
fn test_opensky_config_defaults () {
    let osc = OpenSkyConfig::default();
    assert_eq!( osc.dead_reckoning_interval, Duration::from_secs(1));
    assert_eq!( osc.poll_interval, Duration::from_secs(60));
    assert_eq!( osc.min_aircraft, 10);
}

#[test]
fn test_fallbacks () {
    let adsb = adsb_fallback();
    assert_eq!( adsb.len(), 30);
    assert_eq!( adsb[0].callsign, "SIA321");
    assert_eq!( adsb[29].callsign, "ANZ180");

    let opensky = opensky_fallback();
    assert_eq!( opensky.len(), 5);
    assert_eq!( opensky[0].lat, 1.35);
}

#[test]
fn test_base_from_result () {
    let now = Utc::now();
    let fetched = now - TimeDelta::seconds(30);

    let res = CacheResult { items: Arc::new( adsb_fallback()), provenance: Provenance::Cached, fetched_at: Some(fetched) };
    assert_eq!( AircraftBase::from_result( res, now).captured_at, fetched);

    let res = CacheResult { items: Arc::new( adsb_fallback()), provenance: Provenance::Stale, fetched_at: Some(fetched) };
    assert_eq!( AircraftBase::from_result( res, now).captured_at, now);

    let res = CacheResult { items: Arc::new( adsb_fallback()), provenance: Provenance::Fallback, fetched_at: None };
    assert_eq!( AircraftBase::from_result( res, now).captured_at, now);
}

#[test]
fn test_dead_reckoning_cadence () {
    let t0 = Utc::now();
    let (base_tx, base_rx) = watch::channel( AircraftBase::new( t0, vec![ aircraft( "n", 0.0, 0.0, 111.32, 0.0) ]));
    let (ac_tx, ac_rx) = watch::channel( Arc::new( Vec::<Aircraft>::new()));
    let dr = DeadReckoning::new( base_rx, ac_tx);

    dr.update_at( t0 + TimeDelta::seconds(100));
    assert!( (ac_rx.borrow()[0].lat - 0.1).abs() < 1e-9);

    // a new base replaces what we extrapolate from, the cadence itself keeps going
    base_tx.send_replace( AircraftBase::new( t0 + TimeDelta::seconds(100), vec![ aircraft( "n", 0.0, 5.0, 0.0, 0.0) ]));
    dr.update_at( t0 + TimeDelta::seconds(200));
    assert_eq!( ac_rx.borrow()[0].lat, 5.0);
}

#[test]
fn test_config_from_ron () {
    let ron = r#"(
        base_url: "http://localhost:8080/v2",
        regions: [ (lat: 51.0, lon: 2.0, dist: 100) ],
        cache: ( ttl: "9m 30s", timeout: "12s" ),
        poll_interval: "10m",
        dead_reckoning_interval: "1s",
    )"#;
    let config: AdsbConfig = ron::from_str( ron).unwrap();
    assert_eq!( config.cache.ttl, Duration::from_secs(570));
    assert_eq!( config.regions.len(), 1);

    assert_eq!( AdsbConfig::default().cache.ttl, Duration::from_secs(570));
}
