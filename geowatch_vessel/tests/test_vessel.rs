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
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use geowatch_common::geometry::LonLat;
use geowatch_anim::AnimationScheduler;
use geowatch_vessel::*;

// run with "cargo test --test test_vessel -- --nocapture"

fn straight_lanes (n_major: usize, n_middle: usize)->LaneSet {
    let lane = |i: usize| vec![ LonLat::new( 0.0, i as f64), LonLat::new( 10.0, i as f64) ];
    LaneSet::new(
        (0..n_major).map( lane).collect(),
        (0..n_middle).map( |i| lane( 100 + i)).collect()
    ).unwrap()
}

fn config (seed: u64)->SwarmConfig {
    SwarmConfig { seed: Some(seed), ..SwarmConfig::default() }
}

#[test]
fn test_embedded_lanes () {
    let lanes = LaneSet::embedded().unwrap();
    println!("{} major, {} middle lanes, total length {:.1}°", lanes.major.len(), lanes.middle.len(), lanes.total_length());
    assert!( !lanes.major.is_empty());
    assert!( !lanes.middle.is_empty());

    let dense = lanes.densified( 1.0);
    assert_eq!( dense.len(), lanes.len());
    assert!( (dense.total_length() - lanes.total_length()).abs() < 1e-6);
}

#[test]
fn test_invalid_lanes () {
    assert!( LaneSet::from_json( r#"{ "major": [ [[1.0,2.0]] ], "middle": [] }"#).is_err());
    assert!( LaneSet::from_json( r#"{ "major": [ [[1.0,2.0],[3.0,4.0]] ], "middle": [] }"#).is_ok());
    assert!( LaneSet::from_json( "not json").is_err());
}

#[test]
fn test_seed_allocation () {
    let lanes = straight_lanes( 10, 5);
    let vessels = seed_vessels( &lanes, &SwarmConfig::default(), &mut ChaCha8Rng::seed_from_u64(42));

    assert_eq!( vessels.len(), 25);
    assert!( vessels[..20].iter().all( |v| v.lane < 10));
    assert!( vessels[20..].iter().all( |v| v.lane >= 10));
    assert!( vessels.iter().enumerate().all( |(i,v)| v.id as usize == i));

    for v in &vessels {
        assert!( v.offset >= 0.0 && v.offset < 1.0);
        if v.lane < 10 {
            assert!( v.speed >= 0.00025 && v.speed <= 0.0006);
        } else {
            assert!( v.speed >= 0.0002 && v.speed <= 0.0005);
        }
    }

    // the two vessels of a major lane are about half a lane apart
    let (a, b) = (&vessels[0], &vessels[1]);
    let d = (b.offset - a.offset).rem_euclid(1.0);
    assert!( (d - 0.5).abs() <= 0.05, "spacing {d}");
}

#[test]
fn test_budget_truncation () {
    // 70 major lanes would need 140 vessels
    let lanes = straight_lanes( 70, 20);
    let vessels = seed_vessels( &lanes, &SwarmConfig::default(), &mut ChaCha8Rng::seed_from_u64(1));

    assert_eq!( vessels.len(), 130);
    assert_eq!( vessels.last().unwrap().lane, 64);
    assert!( vessels.iter().all( |v| v.lane < 70)); // no middle lane got a vessel
}

#[test]
fn test_embedded_lanes_fill_budget () {
    // 52 major lanes take 104 vessels, the budget runs out on the 26th of 30 secondary lanes
    let lanes = LaneSet::embedded().unwrap();
    assert_eq!( lanes.major.len(), 52);
    assert_eq!( lanes.middle.len(), 30);

    let vessels = seed_vessels( &lanes, &SwarmConfig::default(), &mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!( vessels.len(), 130);
    assert_eq!( vessels.iter().filter( |v| v.lane < 52).count(), 104);
    assert_eq!( vessels.last().unwrap().lane, 77);
    assert!( vessels.iter().all( |v| v.lane < 78)); // the last 4 secondary lanes stay empty
}

#[test]
fn test_deterministic_seed () {
    let lanes = Arc::new( LaneSet::embedded().unwrap());
    let a = VesselSwarm::seeded( lanes.clone(), &config(7));
    let b = VesselSwarm::seeded( lanes.clone(), &config(7));
    let c = VesselSwarm::seeded( lanes, &config(8));

    assert_eq!( a.vessels(), b.vessels());
    assert_ne!( a.vessels(), c.vessels());
}

#[test]
fn test_offsets_wrap () {
    let lanes = Arc::new( straight_lanes( 3, 3));
    let mut swarm = VesselSwarm::seeded( lanes, &config(3));

    for i in 0..10_000 {
        swarm.advance( Duration::from_millis( 17 + (i % 50)));
        assert!( swarm.vessels().iter().all( |v| v.offset >= 0.0 && v.offset < 1.0));
    }
}

#[test]
fn test_frame_time_scaling () {
    let lanes = Arc::new( straight_lanes( 4, 4));
    let mut a = VesselSwarm::seeded( lanes.clone(), &config(11));
    let mut b = VesselSwarm::seeded( lanes, &config(11));

    // one second at 30Hz vs. one second at 10Hz
    for _ in 0..30 { a.advance( Duration::from_secs_f64( 1.0/30.0)); }
    for _ in 0..10 { b.advance( Duration::from_secs_f64( 0.1)); }

    for (va, vb) in a.vessels().iter().zip( b.vessels()) {
        let d = (va.offset - vb.offset).abs();
        assert!( d < 1e-9 || (1.0 - d) < 1e-9, "{} vs {}", va.offset, vb.offset);
    }
}

#[test]
fn test_positions_on_lane () {
    let lanes = Arc::new( straight_lanes( 2, 0));
    let swarm = VesselSwarm::seeded( lanes, &config(5));

    for v in swarm.positions() {
        println!("{:?}", v);
        assert_eq!( v.position.lat, v.lane as f64);
        assert!( (v.position.lon - v.offset * 10.0).abs() < 1e-9);
    }
}

#[test]
fn test_swarm_cadence () {
    let lanes = Arc::new( straight_lanes( 2, 2));
    let swarm = VesselSwarm::seeded( lanes, &config(9));
    let rx = swarm.subscribe();
    let before: Vec<f64> = rx.borrow().iter().map( |v| v.offset).collect();

    let mut scheduler = AnimationScheduler::new();
    scheduler.add( "vessels", SwarmConfig::default().frame_interval, swarm);

    // driver ticks at 100Hz for 1s, the cadence only fires at ~30Hz
    let mut fired = 0;
    for i in 0..=100 {
        fired += scheduler.tick( Duration::from_millis( i * 10));
    }
    println!("fired {fired} times");
    assert!( fired <= 30 && fired >= 20);

    let after: Vec<f64> = rx.borrow().iter().map( |v| v.offset).collect();
    assert_ne!( before, after);
}
