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
use async_trait::async_trait;
use reqwest::Client;
use serde::{Serialize,Deserialize};
use geowatch_common::{datetime::{deserialize_duration, serialize_duration, hours, minutes, secs}, debug};
use geowatch_feed::{self as feed, CacheConfig, FeedSource};

use crate::tle::{TleEntry, parse_tle_text};

pub const DEFAULT_CELESTRAK_URL: &str = "https://celestrak.org/NORAD/elements/gp.php?GROUP=active&FORMAT=tle";
pub const DEFAULT_MAX_ELEMENTS: usize = 500;

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct OrbitalConfig {
    pub url: String,

    /// TLE cache TTL and fetch timeout. TLEs change slowly so this can be hours
    pub cache: CacheConfig,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub refresh_interval: Duration,

    /// how often we re-propagate the elements we have
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub propagation_interval: Duration,

    /// upper bound for the number of elements we propagate
    pub max_elements: usize,
}

impl Default for OrbitalConfig {
    fn default ()->Self {
        OrbitalConfig {
            url: DEFAULT_CELESTRAK_URL.to_string(),
            cache: CacheConfig::new( hours(2), secs(8)),
            refresh_interval: minutes(10),
            propagation_interval: secs(20),
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

/// the celestrak plain text TLE listing of active satellites
pub struct CelestrakSource {
    client: Client,
    url: String,
    max_elements: usize,
}

impl CelestrakSource {
    pub fn new (config: &OrbitalConfig)->Self {
        CelestrakSource { client: Client::new(), url: config.url.clone(), max_elements: config.max_elements }
    }
}

#[async_trait]
impl FeedSource for CelestrakSource {
    type Item = TleEntry;

    fn name (&self)->&str { "celestrak" }

    async fn fetch_items (&self)->feed::Result<Vec<TleEntry>> {
        let text = feed::source::get_text( &self.client, self.name(), &self.url).await?;

        let mut entries: Vec<TleEntry> = parse_tle_text( &text).into_iter().filter( |e| e.is_well_formed()).collect();
        if entries.len() > self.max_elements {
            debug!("truncating {} TLEs to {}", entries.len(), self.max_elements);
            entries.truncate( self.max_elements);
        }
        Ok(entries)
    }
}
