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

use chrono::{DateTime, Utc};
use serde::{Deserialize,Serializer,Deserializer};
use std::time::Duration;
use parse_duration::parse;

// simple Duration ctors that read better in config defaults and tests
#[inline] pub fn millis (n: u64)->Duration { Duration::from_millis(n) }
#[inline] pub fn secs (n: u64)->Duration { Duration::from_secs(n) }
#[inline] pub fn secs_f64 (n: f64)->Duration { Duration::from_secs_f64(n) }
#[inline] pub fn minutes (n: u64)->Duration { Duration::from_secs(n * 60) }
#[inline] pub fn hours (n: u64)->Duration { Duration::from_secs(n * 3600) }

/// this should be used wherever we might have to use sim clock instead of wall clock
#[inline]
pub fn utc_now ()->DateTime<Utc> {
    Utc::now()
}

/// non-negative duration between two instants (zero if `dt_later` is before `dt_earlier`)
pub fn duration_since (dt_later: &DateTime<Utc>, dt_earlier: &DateTime<Utc>)->Duration {
    (*dt_later - *dt_earlier).to_std().unwrap_or(Duration::ZERO)
}

/// fractional unix seconds, as used by astrodynamics libraries
#[inline]
pub fn unix_secs_f64 (dt: &DateTime<Utc>)->f64 {
    dt.timestamp_millis() as f64 / 1000.0
}

/// Julian date of a UTC datetime (we don't distinguish UT1 and UTC)
#[inline]
pub fn julian_date (dt: &DateTime<Utc>)->f64 {
    unix_secs_f64(dt) / 86400.0 + 2440587.5
}

//--- support for serde - durations in configs are human readable strings such as "10m" or "2.5s"

pub fn deserialize_duration <'a,D>(deserializer: D) -> Result<Duration,D::Error>
    where D: Deserializer<'a>
{
    String::deserialize(deserializer).and_then( |string| {
        parse(string.as_str())
            .map_err( |e| serde::de::Error::custom(format!("{:?}",e)))
    })
}

pub fn serialize_duration<S: Serializer> (dur: &Duration, s: S) -> Result<S::Ok, S::Error>  {
    let dfm = format!("{}ms", dur.as_millis());
    s.serialize_str(&dfm)
}

pub fn ser_epoch_millis<S: Serializer> (dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>  {
    s.serialize_i64(dt.timestamp_millis())
}

pub fn de_from_epoch_millis <'a,D>(deserializer: D) -> Result<DateTime<Utc>,D::Error> where D: Deserializer<'a> {
    let millis: i64 = i64::deserialize(deserializer)?;
    DateTime::from_timestamp_millis(millis).ok_or( serde::de::Error::custom("invalid timestamp value"))
}
