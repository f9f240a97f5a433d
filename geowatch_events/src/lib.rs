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

//! geolocated prediction market events, novelty detection across polls and the impact
//! animations for newly arrived events

pub mod event;
pub use event::{Category, GlobeEvent, Identity, Impact, MarketData, Rgb};

pub mod polymarket;
pub use polymarket::{EventsConfig, PolymarketSource, RawEvent, normalize_events, parse_raw_events};

pub mod novelty;
pub use novelty::NoveltyTracker;

pub mod impact;
pub use impact::{ImpactAnimation, ImpactQueue, ImpactSender, impacts_for};

pub mod poller;
pub use poller::{EventFeedState, spawn_event_poller};
