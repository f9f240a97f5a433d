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
use geowatch_common::config::{load_config, load_config_or_default};
use geowatch_live::LiveConfig;

// run with "cargo test --test test_live -- --nocapture"

#[test]
fn test_shipped_config () {
    let config: LiveConfig = load_config( "configs/geowatch.ron").unwrap();
    println!("{config:#?}");

    assert_eq!( config.frame_rate, 60.0);
    assert_eq!( config.orbital.propagation_interval, Duration::from_secs(20));
    assert_eq!( config.orbital.max_elements, 500);
    assert_eq!( config.adsb.cache.ttl, Duration::from_secs(570));
    assert_eq!( config.adsb.dead_reckoning_interval, Duration::from_secs(1));
    assert!( config.opensky.is_none());
    assert_eq!( config.vessels.budget, 130);
    assert!( config.vessels.seed.is_none());
    assert!( (config.events.impact_duration.as_secs_f64() - 2.2).abs() < 1e-6);
    assert_eq!( config.events.max_impacts, 8);
}

#[test]
fn test_partial_config () {
    // everything not specified comes from the defaults
    let config: LiveConfig = ron::from_str( r#"( frame_rate: 30.0, vessels: ( budget: 50, vessels_per_major_lane: 3,
        vessels_per_middle_lane: 0, frame_interval: "50ms", nominal_frame: "20ms", seed: Some(42) ) )"#).unwrap();

    assert_eq!( config.frame_rate, 30.0);
    assert_eq!( config.vessels.seed, Some(42));
    assert_eq!( config.summary_interval, Duration::from_secs(10));
    assert_eq!( config.orbital.refresh_interval, Duration::from_secs(600));
    assert_eq!( config.events.poll_interval, Duration::from_secs(60));
}

#[test]
fn test_missing_config () {
    let config: LiveConfig = load_config_or_default( "configs/does_not_exist.ron").unwrap();
    assert_eq!( config.adsb.regions.len(), 16);
    assert_eq!( config.adsb.poll_interval, Duration::from_secs(600));
}

#[test]
fn test_opensky_dead_reckoning_interval () {
    let config: LiveConfig = ron::from_str( r#"( adsb: ( base_url: "https://api.adsb.lol/v2", regions: [], cache: ( ttl: "570s", timeout: "12s" ),
        poll_interval: "10m", dead_reckoning_interval: "500ms" ),
        opensky: Some(( url: "https://opensky-network.org/api/states/all", cache: ( ttl: "55s", timeout: "12s" ),
        poll_interval: "60s", min_aircraft: 10, dead_reckoning_interval: "2s" )) )"#).unwrap();

    let osc = config.opensky.unwrap();
    assert_eq!( osc.dead_reckoning_interval, Duration::from_secs(2));
    assert_eq!( config.adsb.dead_reckoning_interval, Duration::from_millis(500));
}
