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

use geowatch_common::geometry::{LonLat, MAX_SEGMENT_STEPS, densify, interpolate_along_path, path_length};

// run with "cargo test --test test_geometry -- --nocapture"

fn path (coords: &[[f64;2]])->Vec<LonLat> {
    coords.iter().map( |c| LonLat::from(*c)).collect()
}

#[test]
fn test_densify_short_segments_unchanged () {
    let p = path( &[[0.0,0.0], [1.0,1.0], [1.0,1.0], [2.5,0.5], [3.0,-1.0]]);
    let d = densify( &p, 5.0);
    println!("{:?}", d);
    assert_eq!( d, p);
}

#[test]
fn test_densify_long_segment () {
    let p = path( &[[0.0,0.0], [10.0,0.0]]);
    let d = densify( &p, 3.0); // ceil(10/3) = 4 steps
    println!("{:?}", d);

    assert_eq!( d.len(), 5);
    assert_eq!( d[0], p[0]);
    assert_eq!( d[4], p[1]);
    assert!( (d[1].lon - 2.5).abs() < 1e-12);
    assert!( (d[2].lon - 5.0).abs() < 1e-12);
    for w in d.windows(2) {
        assert!( w[0].degree_distance(&w[1]) <= 3.0);
    }
}

#[test]
fn test_densify_degenerate () {
    let p = path( &[[4.0,2.0]]);
    assert_eq!( densify( &p, 1.0), p);
    assert!( densify( &[], 1.0).is_empty());
}

#[test]
fn test_densify_non_finite () {
    let p = path( &[[0.0,0.0], [f64::INFINITY,0.0], [1.0,1.0]]);
    let d = densify( &p, 1.0);
    assert_eq!( d.len(), 3);
    assert!( d[1].lon.is_infinite());

    let p = path( &[[0.0,0.0], [f64::NAN,0.0]]);
    assert_eq!( densify( &p, 1.0).len(), 2);

    // extreme ratios are bounded
    let p = path( &[[0.0,0.0], [10.0,0.0]]);
    let d = densify( &p, 1e-300);
    assert_eq!( d.len(), MAX_SEGMENT_STEPS + 1);
    assert_eq!( d[MAX_SEGMENT_STEPS], p[1]);
}

#[test]
fn test_interpolation_boundaries () {
    let p = path( &[[0.0,0.0], [3.0,4.0], [3.0,10.0]]); // segment lengths 5 and 6
    assert_eq!( interpolate_along_path( &p, 0.0), p[0]);
    assert_eq!( interpolate_along_path( &p, -0.5), p[0]);
    assert_eq!( interpolate_along_path( &p, 1.0), p[2]);
    assert_eq!( interpolate_along_path( &p, 1.2), p[2]);

    let single = path( &[[7.0,-3.0]]);
    for o in [-1.0, 0.0, 0.3, 1.0, 2.0] {
        assert_eq!( interpolate_along_path( &single, o), single[0]);
    }

    assert_eq!( interpolate_along_path( &[], 0.5), LonLat::ORIGIN);
}

#[test]
fn test_interpolation_by_arc_length () {
    let p = path( &[[0.0,0.0], [3.0,4.0], [3.0,10.0]]);
    assert!( (path_length(&p) - 11.0).abs() < 1e-12);

    let q = interpolate_along_path( &p, 5.0 / 11.0); // end of first segment
    println!("at 5/11: {q}");
    assert!( (q.lon - 3.0).abs() < 1e-9 && (q.lat - 4.0).abs() < 1e-9);

    let q = interpolate_along_path( &p, 8.0 / 11.0); // half way along second segment
    println!("at 8/11: {q}");
    assert!( (q.lon - 3.0).abs() < 1e-9 && (q.lat - 7.0).abs() < 1e-9);
}

#[test]
fn test_interpolation_zero_length_segment () {
    let p = path( &[[1.0,1.0], [1.0,1.0], [2.0,1.0]]);
    let q = interpolate_along_path( &p, 0.5);
    assert!( (q.lon - 1.5).abs() < 1e-12);

    let all_same = path( &[[1.0,1.0], [1.0,1.0]]);
    assert_eq!( interpolate_along_path( &all_same, 0.5), all_same[0]);
}

#[test]
fn test_lonlat_from_json_array () {
    let p: Vec<LonLat> = serde_json::from_str("[[103.8,1.3],[104.0,1.25]]").unwrap();
    assert_eq!( p[1], LonLat::new( 104.0, 1.25));
}
