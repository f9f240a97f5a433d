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

use std::{sync::{Arc, Mutex, atomic::{AtomicUsize, Ordering}}, time::Duration};
use geowatch_anim::*;

// run with "cargo test --test test_scheduler -- --nocapture"

fn ms (n: u64)->Duration { Duration::from_millis(n) }

fn recorder ()->(Arc<Mutex<Vec<(Duration,Duration)>>>, impl FnMut(Duration,Duration) + Send + 'static) {
    let log = Arc::new( Mutex::new( Vec::new()));
    let log1 = log.clone();
    (log, move |elapsed: Duration, now: Duration| log1.lock().unwrap().push( (elapsed, now)))
}

#[test]
fn test_cadence_states () {
    let mut s = AnimationScheduler::new();
    let (log, f) = recorder();
    let id = s.add( "dr", ms(1000), f);

    assert_eq!( s.state(id), Some(CadenceState::Idle));

    s.tick( ms(500)); // first tick only sets the baseline
    assert_eq!( s.state(id), Some(CadenceState::Armed { baseline: ms(500) }));

    s.tick( ms(1200)); // below min interval
    assert_eq!( s.state(id), Some(CadenceState::Armed { baseline: ms(500) }));

    assert_eq!( s.tick( ms(1500)), 1);
    assert_eq!( s.state(id), Some(CadenceState::Running { last_fire: ms(1500) }));

    s.tick( ms(2000));
    s.tick( ms(2700));
    println!("{:?}", log.lock().unwrap());
    assert_eq!( *log.lock().unwrap(), vec![ (ms(1000), ms(1500)), (ms(1200), ms(2700)) ]);
}

#[test]
fn test_independent_intervals () {
    let mut s = AnimationScheduler::new();
    let fast = Arc::new( AtomicUsize::new(0));
    let slow = Arc::new( AtomicUsize::new(0));
    let (f, sl) = (fast.clone(), slow.clone());

    s.add( "pulse", Duration::ZERO, move |_: Duration, _: Duration| { f.fetch_add(1, Ordering::SeqCst); });
    s.add( "dead-reckoning", ms(1000), move |_: Duration, _: Duration| { sl.fetch_add(1, Ordering::SeqCst); });

    // irregular 16..50ms frames over 5 seconds
    let mut t = 0;
    let mut n_ticks = 0;
    while t <= 5000 {
        s.tick( ms(t));
        n_ticks += 1;
        t += if n_ticks % 3 == 0 { 50 } else { 16 };
    }

    println!("ticks: {n_ticks}, fast: {}, slow: {}", fast.load(Ordering::SeqCst), slow.load(Ordering::SeqCst));
    assert_eq!( fast.load(Ordering::SeqCst), n_ticks - 1);
    let n_slow = slow.load(Ordering::SeqCst);
    assert!( n_slow >= 4 && n_slow <= 5);
}

#[test]
fn test_cancel_stops_callbacks () {
    let s = AnimationScheduler::new().into_shared();
    let count = Arc::new( AtomicUsize::new(0));
    let c = count.clone();

    let handle = add_cadence( &s, "vessels", ms(33), move |_: Duration, _: Duration| { c.fetch_add(1, Ordering::SeqCst); }).unwrap();
    for t in 0..10 { s.lock().unwrap().tick( ms(t * 40)); }
    let n = count.load(Ordering::SeqCst);
    assert_eq!( n, 9);

    assert!( handle.cancel().unwrap());
    assert_eq!( handle.state(), None);
    for t in 10..20 { s.lock().unwrap().tick( ms(t * 40)); }
    assert_eq!( count.load(Ordering::SeqCst), n);

    assert!( !handle.cancel().unwrap()); // already gone
}

#[test]
fn test_panicking_cadence_is_isolated () {
    let mut s = AnimationScheduler::new();
    let count = Arc::new( AtomicUsize::new(0));
    let c = count.clone();

    s.add( "bad", Duration::ZERO, |_: Duration, _: Duration| -> () { panic!("boom") });
    s.add( "good", Duration::ZERO, move |_: Duration, _: Duration| { c.fetch_add(1, Ordering::SeqCst); });

    for t in 0..5 { s.tick( ms(t * 10)); }
    assert_eq!( s.len(), 1);
    assert_eq!( s.cadence_names(), vec!["good"]);
    assert_eq!( count.load(Ordering::SeqCst), 4);
}

#[test]
fn test_pulse_phase () {
    let (mut pulse, rx) = PulsePhase::new( 0.5);
    let mut s = AnimationScheduler::new();
    // drive the pulse directly - it is Animated
    pulse.advance_secs( 1.5);
    assert!( (pulse.phase() - 0.75).abs() < 1e-12);
    pulse.advance_secs( 1.0);
    assert!( (pulse.phase() - 0.25).abs() < 1e-12);
    assert!( (*rx.borrow() - 0.25).abs() < 1e-12);

    s.add( "pulse", Duration::ZERO, pulse);
    for t in 0..=100 { s.tick( ms(t * 17)); }
    let p = *rx.borrow();
    println!("pulse after 1.7s: {p}");
    assert!( p >= 0.0 && p < 1.0);
    assert!( (p - (0.25 + 1.7 * 0.5) % 1.0).abs() < 1e-9);
}

#[test]
fn test_ring_phases () {
    let r = ring_phases( 0.9);
    println!("{r:?}");
    assert!( (r[0] - 0.9).abs() < 1e-12);
    assert!( (r[1] - (0.9 + 1.0/3.0 - 1.0)).abs() < 1e-12);
    assert!( r.iter().all( |p| *p >= 0.0 && *p < 1.0));
}

#[tokio::test]
async fn test_frame_driver () {
    let s = AnimationScheduler::new().into_shared();
    let count = Arc::new( AtomicUsize::new(0));
    let c = count.clone();
    add_cadence( &s, "frames", Duration::ZERO, move |_: Duration, _: Duration| { c.fetch_add(1, Ordering::SeqCst); }).unwrap();

    let mut driver = FrameDriver::with_rate( s.clone(), 100.0);
    driver.start().unwrap();
    assert!( driver.start().is_err());
    tokio::time::sleep( ms(200)).await;

    driver.terminate();
    let n = count.load(Ordering::SeqCst);
    println!("fired {n} times in 200ms");
    assert!( n > 2);
    assert!( s.lock().unwrap().is_empty());

    tokio::time::sleep( ms(50)).await;
    assert_eq!( count.load(Ordering::SeqCst), n);
}
