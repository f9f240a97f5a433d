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

use std::collections::VecDeque;
use geowatch_common::{
    angle::{normalize_180, normalize_360, wrap_unit},
    cartesian3::Cartesian3, cartographic::Cartographic,
    collections::push_bounded, datetime, units::*
};

// run with "cargo test --test test_common -- --nocapture"

#[test]
fn test_cartographic_roundtrip () {
    for (lon,lat,h) in [(149.9, 0.0003, 782_500.0), (-122.4, 37.7, 10_000.0), (10.0, -80.0, 1_200_000.0)] {
        let c = Cartographic::from_degrees( lon, lat, h);
        let ecef = c.to_ecef();
        let c1 = Cartographic::from( &ecef);
        println!("{c} -> {ecef:?} -> {c1}");

        assert!( (c1.longitude_deg() - lon).abs() < 1e-7);
        assert!( (c1.latitude_deg() - lat).abs() < 1e-7);
        assert!( (c1.height - h).abs() < 1e-2);
    }
}

#[test]
fn test_frame_rotation () {
    let p = Cartesian3::new( 1.0, 0.0, 5.0);
    let r = p.rotate_frame_z( std::f64::consts::FRAC_PI_2); // frame turned 90deg east -> point now at -90deg
    assert!( r.x.abs() < 1e-12 && (r.y + 1.0).abs() < 1e-12 && r.z == 5.0);
}

#[test]
fn test_angles () {
    assert_eq!( normalize_180( 332.0), -28.0);
    assert_eq!( normalize_180( -190.0), 170.0);
    assert_eq!( normalize_360( -90.0), 270.0);
    assert!( (wrap_unit( 1.005) - 0.005).abs() < 1e-12);
    assert!( (wrap_unit( -0.25) - 0.75).abs() < 1e-12);
    let w = wrap_unit( -1e-18);
    assert!( w >= 0.0 && w < 1.0);
}

#[test]
fn test_exact_unit_conversions () {
    assert_eq!( feet_to_meters( 35_000.0), 35_000.0 * 0.3048);
    assert_eq!( knots_to_meters_per_second( 450.0), 450.0 * 0.5144);
    assert!( (meters_to_feet( feet_to_meters( 1234.0)) - 1234.0).abs() < 1e-9);
    assert!( (meters_per_second_to_knots( knots_to_meters_per_second( 321.0)) - 321.0).abs() < 1e-9);
}

#[test]
fn test_bounded_queue () {
    let mut q: VecDeque<u32> = VecDeque::new();
    let mut dropped = 0;
    for i in 0..11 { dropped += push_bounded( &mut q, i, 8); }
    println!("{q:?}");
    assert_eq!( q.len(), 8);
    assert_eq!( dropped, 3);
    assert_eq!( q.front(), Some(&3));
    assert_eq!( q.back(), Some(&10));
}

#[test]
fn test_duration_since () {
    let t0 = datetime::utc_now();
    let t1 = t0 + chrono::TimeDelta::milliseconds(1500);
    assert_eq!( datetime::duration_since( &t1, &t0), datetime::millis(1500));
    assert_eq!( datetime::duration_since( &t0, &t1), std::time::Duration::ZERO);
}
