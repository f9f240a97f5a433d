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

use std::sync::Arc;
use chrono::{DateTime, TimeZone, TimeDelta, Utc};
use tokio::sync::watch;
use geowatch_feed::{CacheResult, Provenance};
use geowatch_orbital::*;

// run with "cargo test --test test_orbital -- --nocapture"

const VANGUARD: [&str;3] = [
    "VANGUARD 1",
    "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753",
    "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667"
];

const NOAA21: [&str;3] = [
    "NOAA 21 (JPSS-2)",
    "1 54234U 22150A   25076.92835707  .00000366  00000-0  19403-3 0  9994",
    "2 54234  98.7204  17.0432 0002710  72.7407 287.4066 14.19556514121811"
];

const ISS: [&str;3] = [
    "ISS (ZARYA)",
    "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927",
    "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537"
];

fn entry (tle: &[&str;3])->TleEntry { TleEntry::new( tle[0], tle[1], tle[2]) }

#[test]
fn test_checksum () {
    for tle in [VANGUARD, NOAA21, ISS] {
        for line in &tle[1..] {
            let expected = line.chars().last().unwrap().to_digit(10).unwrap();
            assert_eq!( tle_checksum(line), expected);
        }
    }
}

#[test]
fn test_parse_element () {
    let e = OrbitalElement::new( VANGUARD[0], VANGUARD[1], VANGUARD[2]).unwrap();
    println!("{e}");

    assert_eq!( e.catalog_number, 5);
    let epoch = Utc.with_ymd_and_hms( 2000, 6, 27, 18, 50, 19).unwrap() + TimeDelta::milliseconds(734);
    assert_eq!( e.epoch, epoch);
    assert!( (e.period_min() - 133.035).abs() < 0.01);

    let e = OrbitalElement::try_from( &entry(&NOAA21)).unwrap();
    assert!( (e.period_min() - 101.4401).abs() < 0.001);
}

#[test]
fn test_reject_invalid_elements () {
    // flipped digit without checksum update
    let bad_line2 = ISS[2].replace("51.6416", "51.6417");
    assert!( OrbitalElement::new( ISS[0], ISS[1], &bad_line2).is_err());

    // truncated
    assert!( OrbitalElement::new( ISS[0], ISS[1], &ISS[2][..60]).is_err());

    // lines from different satellites
    assert!( OrbitalElement::new( ISS[0], ISS[1], NOAA21[2]).is_err());

    assert!( !TleEntry::new( ISS[0], ISS[1], bad_line2).is_well_formed());
    assert!( entry(&ISS).is_well_formed());
}

#[test]
fn test_vanguard_at_epoch () {
    let e = OrbitalElement::new( VANGUARD[0], VANGUARD[1], VANGUARD[2]).unwrap();
    let sat = propagate( &e, &e.epoch).unwrap();
    println!("{sat}");

    assert_eq!( sat.name, "VANGUARD 1");
    assert!( (sat.lon - 149.9557).abs() < 0.1);
    assert!( (sat.lat - 0.0003).abs() < 0.1);
    assert!( (sat.altitude_km - 782.54).abs() < 5.0);
    assert!( (sat.period_min - 133.035).abs() < 0.01);
}

#[test]
fn test_propagated_range () {
    let e = OrbitalElement::new( NOAA21[0], NOAA21[1], NOAA21[2]).unwrap();
    for h in 0..24 {
        let t = e.epoch + TimeDelta::hours(h);
        let sat = propagate( &e, &t).unwrap();
        assert!( sat.lon >= -180.0 && sat.lon <= 180.0);
        assert!( sat.lat.abs() <= 98.7204_f64.min(180.0 - 98.7204) + 0.5);
        assert!( sat.altitude_km > 780.0 && sat.altitude_km < 880.0, "altitude {}", sat.altitude_km);
    }
}

#[test]
fn test_decayed_orbit_is_rejected () {
    let e = OrbitalElement::new( ISS[0], ISS[1], ISS[2]).unwrap();

    let sat = propagate( &e, &(e.epoch + TimeDelta::days(365))).unwrap();
    assert!( sat.altitude_km > 0.0);

    // a century after epoch SGP4 reports the orbit as decayed
    let res = propagate( &e, &(e.epoch + TimeDelta::days(36525)));
    let msg = res.unwrap_err().to_string();
    println!("{msg}");
    assert!( msg.contains("Orbit Decayed"), "unexpected error: {msg}");
}

#[test]
fn test_propagate_all_drops_corrupted () {
    let bad = TleEntry::new( ISS[0], ISS[1], ISS[2].replace("15.72125391", "15.72125392"));
    let entries = vec![ entry(&NOAA21), bad, TleEntry::new( "NOAA 21 COPY", NOAA21[1], NOAA21[2]) ];

    let t = Utc.with_ymd_and_hms( 2025, 3, 18, 0, 0, 0).unwrap();
    let sats = propagate_all( &entries, &t);
    for s in &sats { println!("{s}"); }

    assert_eq!( sats.len(), 2);
    assert_eq!( sats[0].name, "NOAA 21 (JPSS-2)");
    assert_eq!( sats[1].name, "NOAA 21 COPY");
    assert_eq!( sats[0].lat, sats[1].lat);
}

#[test]
fn test_propagate_fallback () {
    let t = Utc::now();
    let sats = propagate_all( &[], &t);
    assert_eq!( sats.len(), 39);
    assert_eq!( sats, fallback_satellites());

    let intelsat = sats.iter().find( |s| s.name == "INTELSAT 907").unwrap();
    assert_eq!( intelsat.lon, -28.0);
    assert!( sats.iter().all( |s| s.lon >= -180.0 && s.lon <= 180.0));
}

#[test]
fn test_gmst () {
    // J2000.0 epoch: GMST is 280.46061837 degrees
    let t = Utc.with_ymd_and_hms( 2000, 1, 1, 12, 0, 0).unwrap();
    let g = gmst(&t).to_degrees();
    println!("gmst J2000 = {g}");
    assert!( (g - 280.46061837).abs() < 1e-4);
}

#[test]
fn test_parse_tle_text () {
    let text = format!( "0 {}\n{}\n{}\n\n   {}  \n{}\n{}\nBROKEN\n1 garbage\n3 garbage\n{}\n{}\n",
        ISS[0], ISS[1], ISS[2],
        NOAA21[0], NOAA21[1], NOAA21[2],
        // the BROKEN triple is skipped, the trailing incomplete one ignored
        VANGUARD[1], VANGUARD[2]
    );
    let entries = parse_tle_text( &text);
    for e in &entries { println!("{:?}", e.name); }

    assert_eq!( entries.len(), 2);
    assert_eq!( entries[0].name, "ISS (ZARYA)");
    assert_eq!( entries[1].name, "NOAA 21 (JPSS-2)");
    assert_eq!( entries[1].line1, NOAA21[1]);
}

#[test]
fn test_tle_update_action () {
    let (elements_tx, elements_rx) = watch::channel( Arc::new( Vec::<OrbitalElement>::new()));
    let (sats_tx, sats_rx) = watch::channel( Arc::new( Vec::<Satellite>::new()));
    let mut action = tle_update_action( elements_tx, sats_tx);

    action( CacheResult { items: Arc::new( vec![ entry(&ISS), entry(&NOAA21)]), provenance: Provenance::Fresh, fetched_at: Some(Utc::now()) });
    assert_eq!( elements_rx.borrow().len(), 2);
    assert!( !sats_rx.borrow().is_empty()); // the old ISS set might have decayed by now

    // an empty update keeps the elements we have
    action( CacheResult { items: Arc::new( vec![]), provenance: Provenance::Fallback, fetched_at: None });
    assert_eq!( elements_rx.borrow().len(), 2);
    assert!( !sats_rx.borrow().is_empty());
}
