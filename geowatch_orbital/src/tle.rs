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

use std::{fmt, sync::LazyLock};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use regex::Regex;
use serde::{Serialize,Deserialize};
use satkit::TLE;
use geowatch_common::debug;

use crate::errors::{OrbitalError, Result, tle_error};

pub const TLE_LINE_LEN: usize = 69;

/// the epoch field of line 1: two digit year and fractional day of year, e.g. "00179.78495062"
static EPOCH_RE: LazyLock<Regex> = LazyLock::new(||
    Regex::new( r"^(\d{2})(\d{3}\.\d+)$").unwrap()
);

/// the raw name/line1/line2 triple as we get it from the TLE feed. This is what we cache and
/// persist, parsing into an [`OrbitalElement`] happens before propagation
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct TleEntry {
    pub name: String,
    pub line1: String,
    pub line2: String,
}

impl TleEntry {
    pub fn new (name: impl ToString, line1: impl ToString, line2: impl ToString)->Self {
        TleEntry { name: name.to_string(), line1: line1.to_string(), line2: line2.to_string() }
    }

    /// cheap structural check (length, checksums, catalog numbers) without building a SGP4 record
    pub fn is_well_formed (&self)->bool {
        check_lines( &self.line1, &self.line2).is_ok()
    }
}

/// parse a plain text TLE listing (celestrak "active.txt" format). Blank lines are ignored, the
/// rest is read as name/line1/line2 triples. A leading "0 " of the name line is stripped and
/// triples whose element lines do not start with "1 " and "2 " are skipped
pub fn parse_tle_text (text: &str)->Vec<TleEntry> {
    let lines: Vec<&str> = text.lines().map( |l| l.trim()).filter( |l| !l.is_empty()).collect();
    let mut entries = Vec::with_capacity( lines.len() / 3);

    for triple in lines.chunks_exact(3) {
        let name = triple[0].strip_prefix("0 ").unwrap_or( triple[0]);
        let (line1, line2) = (triple[1], triple[2]);
        if line1.starts_with("1 ") && line2.starts_with("2 ") {
            entries.push( TleEntry::new( name, line1, line2));
        } else {
            debug!("skipping malformed TLE triple for {:?}", name);
        }
    }
    entries
}

/// modulo 10 checksum over the first 68 characters: digits count with their face value, '-' counts 1
pub fn tle_checksum (line: &str)->u32 {
    line.bytes().take( TLE_LINE_LEN-1).map( |b| match b {
        b'0'..=b'9' => (b - b'0') as u32,
        b'-' => 1,
        _ => 0
    }).sum::<u32>() % 10
}

fn check_line (line: &str, n: char)->Result<()> {
    if !line.is_ascii() || line.len() != TLE_LINE_LEN {
        return Err( tle_error!("line {} has wrong length {}", n, line.len()))
    }
    if !line.starts_with(n) {
        return Err( tle_error!("line {} has wrong line number", n))
    }
    let expected = line.as_bytes()[TLE_LINE_LEN-1].wrapping_sub(b'0') as u32;
    let computed = tle_checksum( line);
    if expected != computed {
        return Err( tle_error!("line {} checksum mismatch (expected {}, computed {})", n, expected, computed))
    }
    Ok(())
}

fn check_lines (line1: &str, line2: &str)->Result<()> {
    check_line( line1, '1')?;
    check_line( line2, '2')?;
    if line1[2..7] != line2[2..7] {
        return Err( tle_error!("catalog numbers of lines do not match: {} {}", &line1[2..7], &line2[2..7]))
    }
    Ok(())
}

fn parse_epoch (line1: &str)->Result<DateTime<Utc>> {
    let field = line1[18..32].trim();
    let cap = EPOCH_RE.captures( field).ok_or_else( || tle_error!("invalid epoch field {:?}", field))?;

    let yy: i32 = cap[1].parse().map_err( |_| tle_error!("invalid epoch year"))?;
    let doy: f64 = cap[2].parse().map_err( |_| tle_error!("invalid epoch day"))?;
    let year = if yy < 57 { 2000 + yy } else { 1900 + yy };

    let jan1 = Utc.with_ymd_and_hms( year, 1, 1, 0, 0, 0).single().ok_or_else( || tle_error!("invalid epoch year {}", year))?;
    let millis = ((doy - 1.0) * 86_400_000.0).round() as i64;
    Ok( jan1 + TimeDelta::milliseconds( millis))
}

/// revolutions per day from line 2 (columns 53..63). NaN if the field does not parse
fn parse_mean_motion (line2: &str)->f64 {
    line2[52..63].trim().parse::<f64>().unwrap_or( f64::NAN)
}

/// a validated two line element set with its SGP4 record. Immutable once parsed
#[derive(Clone)]
pub struct OrbitalElement {
    pub name: String,
    pub line1: String,
    pub line2: String,
    pub catalog_number: u32,
    pub epoch: DateTime<Utc>,
    pub mean_motion: f64,
    pub(crate) tle: TLE,
}

impl OrbitalElement {
    pub fn new (name: &str, line1: &str, line2: &str)->Result<Self> {
        let line1 = line1.trim();
        let line2 = line2.trim();
        check_lines( line1, line2)?;

        let catalog_number: u32 = line1[2..7].trim().parse().map_err( |_| tle_error!("invalid catalog number {:?}", &line1[2..7]))?;
        let epoch = parse_epoch( line1)?;
        let mean_motion = parse_mean_motion( line2);

        // satkit panics on some malformed inputs, contain that here
        let tle = std::panic::catch_unwind( || TLE::load_2line( line1, line2))
            .map_err( |_| tle_error!("SGP4 record initialization panicked for {}", name))?
            .map_err( |e| tle_error!("2 line Satkit TLE import failed {:?}", e))?;

        Ok( OrbitalElement {
            name: name.trim().to_string(),
            line1: line1.to_string(),
            line2: line2.to_string(),
            catalog_number, epoch, mean_motion, tle
        })
    }

    /// orbital period in minutes, 0 if the mean motion field is not usable
    pub fn period_min (&self)->f64 {
        if self.mean_motion.is_finite() && self.mean_motion > 0.0 { 1440.0 / self.mean_motion } else { 0.0 }
    }

    pub fn to_entry (&self)->TleEntry {
        TleEntry::new( &self.name, &self.line1, &self.line2)
    }
}

impl TryFrom<&TleEntry> for OrbitalElement {
    type Error = OrbitalError;

    fn try_from (e: &TleEntry)->Result<Self> {
        OrbitalElement::new( &e.name, &e.line1, &e.line2)
    }
}

impl fmt::Debug for OrbitalElement {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        f.debug_struct("OrbitalElement")
            .field("name", &self.name)
            .field("catalog_number", &self.catalog_number)
            .field("epoch", &self.epoch)
            .field("mean_motion", &self.mean_motion)
            .finish()
    }
}

impl fmt::Display for OrbitalElement {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{} ({}) epoch {}", self.name, self.catalog_number, self.epoch)
    }
}

/// parse all entries, dropping the ones that fail validation
pub fn parse_elements (entries: &[TleEntry])->Vec<OrbitalElement> {
    entries.iter().filter_map( |e| match OrbitalElement::try_from(e) {
        Ok(elem) => Some(elem),
        Err(err) => { debug!("dropping TLE {:?}: {}", e.name, err); None }
    }).collect()
}
