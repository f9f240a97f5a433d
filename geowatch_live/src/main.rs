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

//! the live position simulation: satellites, aircraft, vessels and geolocated events advanced
//! on one animation clock. A periodic summary log stands in for the renderer

use std::{path::PathBuf, sync::Arc, time::Duration};
use anyhow::Result;
use tokio::{task::JoinHandle, time};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use geowatch_common::{config::load_config_or_default, define_cli, info, warn};
use geowatch_anim::{AnimationScheduler, FrameDriver, PulsePhase, add_cadence};
use geowatch_orbital::spawn_satellite_feed;
use geowatch_adsb::{AdsbSource, OpenSkySource, adsb_fallback, opensky_fallback, spawn_aircraft_feed};
use geowatch_vessel::{LaneSet, VesselSwarm};
use geowatch_events::{ImpactQueue, PolymarketSource, spawn_event_poller};
use geowatch_live::{Layers, LiveConfig, spawn_summary_logger};

fn parse_run_for (s: &str)->std::result::Result<Duration,String> {
    parse_duration::parse(s).map_err( |e| format!("{:?}", e))
}

define_cli! { ARGS [about="live satellite, aircraft, vessel and event positions"] =
    config: PathBuf [help="path to RON config file", long, default_value="configs/geowatch.ron"],
    seed: Option<u64> [help="seed for the vessel simulation", long],
    run_for: Option<Duration> [help="terminate after given duration (e.g. \"5m\")", long, value_parser=parse_run_for]
}

#[tokio::main]
async fn main ()->Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .init();

    let mut config: LiveConfig = load_config_or_default( &ARGS.config)?;
    if let Some(seed) = ARGS.seed { config.vessels.seed = Some(seed) }

    let cancel = CancellationToken::new();
    let scheduler = AnimationScheduler::new().into_shared();
    let mut tasks: Vec<JoinHandle<()>> = Vec::new();

    //--- satellites: TLE refresh loop and propagation cadence
    let satellite_feed = spawn_satellite_feed( &config.orbital, cancel.clone());
    add_cadence( &scheduler, "propagation", config.orbital.propagation_interval, satellite_feed.propagation())?;

    //--- aircraft: refresh loops and dead reckoning cadences
    let adsb_feed = spawn_aircraft_feed(
        AdsbSource::new( &config.adsb), config.adsb.cache.clone(), adsb_fallback(), config.adsb.poll_interval, cancel.clone()
    );
    add_cadence( &scheduler, "adsb-dead-reckoning", config.adsb.dead_reckoning_interval, adsb_feed.dead_reckoning())?;

    let opensky_feed = match &config.opensky {
        Some(osc) => {
            let feed = spawn_aircraft_feed( OpenSkySource::new( osc), osc.cache.clone(), opensky_fallback(), osc.poll_interval, cancel.clone());
            add_cadence( &scheduler, "opensky-dead-reckoning", osc.dead_reckoning_interval, feed.dead_reckoning())?;
            Some(feed)
        }
        None => None
    };

    //--- vessels
    let lanes = match &config.vessels.lanes_path {
        Some(path) => LaneSet::load( path)?,
        None => LaneSet::embedded()?
    };
    let swarm = VesselSwarm::seeded( Arc::new(lanes), &config.vessels);
    let vessels = swarm.subscribe();
    add_cadence( &scheduler, "vessels", config.vessels.frame_interval, swarm)?;

    //--- events: ripple pulse, impact animations and the poller that feeds them
    let (pulse, pulse_rx) = PulsePhase::new( config.events.pulse_speed);
    add_cadence( &scheduler, "pulse", Duration::ZERO, pulse)?;

    let (impact_queue, impact_tx) = ImpactQueue::new( config.events.impact_duration, config.events.max_impacts);
    let impacts = impact_queue.subscribe();
    add_cadence( &scheduler, "impacts", Duration::ZERO, impact_queue)?;

    let ev = &config.events;
    let (event_task, events) = spawn_event_poller(
        PolymarketSource::new( ev), ev.poll_interval, ev.timeout, ev.max_impacts, impact_tx, cancel.clone()
    );

    //--- the clock
    let mut driver = FrameDriver::with_rate( scheduler.clone(), config.frame_rate);
    driver.start()?;

    let layers = Layers {
        satellites: satellite_feed.satellites.clone(),
        adsb: adsb_feed.aircraft.clone(),
        opensky: opensky_feed.as_ref().map( |f| f.aircraft.clone()),
        vessels,
        events,
        impacts,
        pulse: pulse_rx,
    };
    tasks.push( spawn_summary_logger( layers, config.summary_interval, cancel.clone()));
    tasks.push( satellite_feed.refresh_task);
    tasks.push( adsb_feed.refresh_task);
    if let Some(feed) = opensky_feed { tasks.push( feed.refresh_task) }
    tasks.push( event_task);

    match ARGS.run_for {
        Some(dur) => tokio::select! {
            res = tokio::signal::ctrl_c() => { res?; info!("interrupted") }
            _ = time::sleep( dur) => info!("run time of {:?} expired", dur)
        },
        None => {
            tokio::signal::ctrl_c().await?;
            info!("interrupted");
        }
    }

    //--- shutdown: no network result or animation callback gets delivered after this
    cancel.cancel();
    driver.terminate(); // also cancels all cadences
    for res in futures::future::join_all( tasks).await {
        if let Err(e) = res { warn!("task failed: {}", e) }
    }
    info!("terminated");

    Ok(())
}
