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

use std::{fs, path::{Path,PathBuf}, sync::Arc, time::Duration};
use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};
use geowatch_common::{
    datetime::{self, deserialize_duration, serialize_duration, ser_epoch_millis, de_from_epoch_millis},
    debug, info, warn
};

use crate::{errors::{FeedError,Result}, source::{FeedSource, fetch_with_timeout}};

/// configuration for one position cache (one per entity class)
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct CacheConfig {
    /// how long a successful fetch is used as-is
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub ttl: Duration,

    /// upper bound for one fetch round trip
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub timeout: Duration,

    /// optional file to persist the last good snapshot across restarts
    #[serde(default)]
    pub persist_path: Option<PathBuf>,
}

impl CacheConfig {
    pub fn new (ttl: Duration, timeout: Duration)->Self {
        CacheConfig { ttl, timeout, persist_path: None }
    }

    pub fn with_persist_path (mut self, path: impl Into<PathBuf>)->Self {
        self.persist_path = Some(path.into());
        self
    }
}

/// a timestamped, source tagged collection of normalized entities
#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct Snapshot<T> {
    pub source: String,

    #[serde(serialize_with="ser_epoch_millis", deserialize_with="de_from_epoch_millis")]
    pub fetched_at: DateTime<Utc>,

    pub items: Arc<Vec<T>>,
}

impl<T> Snapshot<T> {
    pub fn new (source: impl ToString, fetched_at: DateTime<Utc>, items: Vec<T>)->Self {
        Snapshot { source: source.to_string(), fetched_at, items: Arc::new(items) }
    }

    pub fn age_at (&self, now: DateTime<Utc>)->Duration {
        datetime::duration_since( &now, &self.fetched_at)
    }

    /// a snapshot is used as-is while `now - fetched_at < ttl`
    pub fn is_fresh_at (&self, now: DateTime<Utc>, ttl: Duration)->bool {
        self.age_at(now) < ttl
    }
}

/// where the data returned by a cache query came from
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Provenance {
    /// just fetched
    Fresh,
    /// cached snapshot within its TTL
    Cached,
    /// expired snapshot, refetch failed or was skipped
    Stale,
    /// static fallback collection, we never had a good snapshot
    Fallback,
}

#[derive(Debug,Clone)]
pub struct CacheResult<T> {
    pub items: Arc<Vec<T>>,
    pub provenance: Provenance,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl<T> CacheResult<T> {
    pub fn len (&self)->usize { self.items.len() }
    pub fn is_empty (&self)->bool { self.items.is_empty() }
}

/// the "last known good" store for one entity class. It hands out cached data while it is fresh,
/// refetches once it expired and falls back to the stale snapshot or a static collection if the
/// refetch fails - callers always get something to show.
/// A rate limit response puts the cache into permanent back-off for the rest of the session, in
/// which it only serves what it already has
pub struct PositionCache<S: FeedSource> {
    source: S,
    config: CacheConfig,
    snapshot: Option<Snapshot<S::Item>>,
    fallback: Arc<Vec<S::Item>>,
    backed_off: bool,
}

impl<S: FeedSource> PositionCache<S> {

    pub fn new (source: S, config: CacheConfig, fallback: Vec<S::Item>)->Self {
        let mut cache = PositionCache { source, config, snapshot: None, fallback: Arc::new(fallback), backed_off: false };
        cache.snapshot = cache.load_persisted( datetime::utc_now());
        cache
    }

    /// seed the cache with a known snapshot (e.g. from another store)
    pub fn with_snapshot (mut self, snapshot: Snapshot<S::Item>)->Self {
        self.snapshot = Some(snapshot);
        self
    }

    pub fn name (&self)->&str { self.source.name() }
    pub fn config (&self)->&CacheConfig { &self.config }
    pub fn snapshot (&self)->Option<&Snapshot<S::Item>> { self.snapshot.as_ref() }
    pub fn fallback (&self)->Arc<Vec<S::Item>> { self.fallback.clone() }
    pub fn is_backed_off (&self)->bool { self.backed_off }

    pub fn is_fresh_at (&self, now: DateTime<Utc>)->bool {
        self.snapshot.as_ref().map( |s| s.is_fresh_at( now, self.config.ttl)).unwrap_or(false)
    }

    pub async fn get (&mut self)->CacheResult<S::Item> {
        self.get_at( datetime::utc_now()).await
    }

    /// return cached data if it is still fresh at `now`, otherwise try to refetch. This never fails,
    /// errors resolve to the stale snapshot or the fallback collection
    pub async fn get_at (&mut self, now: DateTime<Utc>)->CacheResult<S::Item> {
        if let Some(snap) = &self.snapshot {
            if snap.is_fresh_at( now, self.config.ttl) {
                return CacheResult { items: snap.items.clone(), provenance: Provenance::Cached, fetched_at: Some(snap.fetched_at) }
            }
        }

        if self.backed_off {
            return self.last_known_at(now)
        }

        match self.fetch_at(now).await {
            Ok(items) => CacheResult { items, provenance: Provenance::Fresh, fetched_at: Some(now) },
            Err(e) => {
                if e.is_rate_limit() {
                    warn!("{} rate limited, no further fetches in this session", self.name());
                    self.backed_off = true;
                } else {
                    warn!("{} fetch failed: {}", self.name(), e);
                }
                let res = self.last_known_at(now);
                if res.provenance == Provenance::Fallback {
                    info!("{} using {} fallback entities", self.name(), res.items.len());
                }
                res
            }
        }
    }

    /// one round trip to the source. Only a non-empty result replaces (and persists) the snapshot,
    /// failures and empty results leave the cache untouched
    pub async fn fetch_at (&mut self, now: DateTime<Utc>)->Result<Arc<Vec<S::Item>>> {
        let items = fetch_with_timeout( &self.source, self.config.timeout).await?;
        if items.is_empty() {
            return Err( FeedError::EmptyResultError( self.name().to_string()))
        }

        debug!("{} fetched {} entities", self.name(), items.len());
        let snap = Snapshot::new( self.name(), now, items);
        let items = snap.items.clone();
        self.persist( &snap);
        self.snapshot = Some(snap);

        Ok(items)
    }

    /// what we have without network access: the snapshot (however stale) or else the fallback
    pub fn last_known_at (&self, now: DateTime<Utc>)->CacheResult<S::Item> {
        match &self.snapshot {
            Some(snap) => {
                let provenance = if snap.is_fresh_at( now, self.config.ttl) { Provenance::Cached } else { Provenance::Stale };
                CacheResult { items: snap.items.clone(), provenance, fetched_at: Some(snap.fetched_at) }
            }
            None => CacheResult { items: self.fallback.clone(), provenance: Provenance::Fallback, fetched_at: None }
        }
    }

    //--- persistence - failures here are logged but never affect what we serve

    fn persist (&self, snap: &Snapshot<S::Item>) {
        if let Some(path) = &self.config.persist_path {
            if let Err(e) = write_snapshot( path, snap) {
                warn!("failed to persist {} snapshot to {:?}: {}", self.name(), path, e);
            }
        }
    }

    fn load_persisted (&self, now: DateTime<Utc>)->Option<Snapshot<S::Item>> {
        let path = self.config.persist_path.as_ref()?;
        if !path.is_file() { return None }

        match read_snapshot::<S::Item>( path) {
            Ok(snap) => {
                if snap.is_fresh_at( now, self.config.ttl) {
                    info!("restored {} {} entities from {:?}", snap.items.len(), self.name(), path);
                    Some(snap)
                } else {
                    debug!("ignoring expired {} snapshot {:?}", self.name(), path);
                    None
                }
            }
            Err(e) => {
                warn!("ignoring unreadable {} snapshot {:?}: {}", self.name(), path, e);
                None
            }
        }
    }
}

pub fn write_snapshot<T: Serialize> (path: &Path, snap: &Snapshot<T>)->Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() { fs::create_dir_all(dir)?; }
    }
    let json = serde_json::to_string( snap)?;
    fs::write( path, json)?;
    Ok(())
}

pub fn read_snapshot<T> (path: &Path)->Result<Snapshot<T>> where T: for<'a> Deserialize<'a> {
    let json = fs::read_to_string( path)?;
    Ok( serde_json::from_str(&json)? )
}
