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

//! the position cache and staleness policy shared by all live feeds: a per entity class
//! "last known good" store with time-to-live, fallback data, optional persistence and
//! the network refresh cadence that feeds it

pub mod errors;
pub use errors::{FeedError, Result};

pub mod source;
pub use source::{FeedSource, fetch_with_timeout};

pub mod cache;
pub use cache::{CacheConfig, CacheResult, PositionCache, Provenance, Snapshot};

pub mod refresh;
pub use refresh::spawn_refresh_loop;
