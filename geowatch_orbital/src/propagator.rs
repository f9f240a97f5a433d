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

use std::{f64::consts::PI, panic::{self, AssertUnwindSafe}};
use chrono::{DateTime, Utc};
use serde::{Serialize,Deserialize};
use satkit::{Instant, sgp4::{sgp4, SGP4Error}};
use geowatch_common::{
    angle::normalize_180, cartesian3::Cartesian3, cartographic::Cartographic,
    datetime::{julian_date, unix_secs_f64}, geo_constants::MIN_ORBIT_RADIUS, TWO_PI, debug, warn
};

use crate::{errors::{OrbitalError, Result, sgp4_error}, fallback::fallback_satellites, tle::{OrbitalElement, TleEntry, parse_elements}};

/// the propagated sub-satellite point we publish to the renderer
#[derive(Serialize,Deserialize,Debug,Clone,PartialEq)]
pub struct Satellite {
    pub name: String,
    pub lat: f64,          // degrees
    pub lon: f64,          // degrees [-180,180]
    pub altitude_km: f64,
    pub period_min: f64,
}

impl Satellite {
    pub fn new (name: impl ToString, lat: f64, lon: f64, altitude_km: f64, period_min: f64)->Self {
        Satellite { name: name.to_string(), lat, lon: normalize_180(lon), altitude_km, period_min }
    }
}

impl std::fmt::Display for Satellite {
    fn fmt (&self, f: &mut std::fmt::Formatter<'_>)->std::fmt::Result {
        write!(f, "{}: {:.3},{:.3} @ {:.0}km", self.name, self.lat, self.lon, self.altitude_km)
    }
}

pub fn instant_from_datetime (dt: &DateTime<Utc>)->Instant {
    Instant::from_unixtime( unix_secs_f64(dt))
}

/// Greenwich mean sidereal time in radians [0,2π) (IAU-82 model, UT1 taken as UTC)
pub fn gmst (dt: &DateTime<Utc>)->f64 {
    let tut1 = (julian_date(dt) - 2451545.0) / 36525.0;
    let secs = -6.2e-6 * tut1 * tut1 * tut1
        + 0.093104 * tut1 * tut1
        + (876600.0 * 3600.0 + 8640184.812866) * tut1
        + 67310.54841;

    (secs * PI / 180.0 / 240.0).rem_euclid( TWO_PI)
}

/// rotate a TEME position (meters) into the earth fixed frame and convert to geodetic coordinates.
/// Polar motion is ignored, which is well below what we can show on a globe
pub fn teme_to_cartographic (p_teme: &Cartesian3, dt: &DateTime<Utc>)->Cartographic {
    let p_ecef = p_teme.rotate_frame_z( gmst(dt));
    Cartographic::from( &p_ecef)
}

/// compute the position of one element at `date`. This fails if SGP4 reports any error code
/// (e.g. decayed orbits) and for non-finite or sub-surface results
pub fn propagate (element: &OrbitalElement, date: &DateTime<Utc>)->Result<Satellite> {
    let tvec = vec![ instant_from_datetime(date) ];
    let (pteme, _vteme, errs) = sgp4( &mut element.tle.clone(), &tvec); // this mutates the TLE, hence the copy

    match errs.first() {
        Some(SGP4Error::SGP4Success) => {}
        Some(e) => return Err( sgp4_error!("{} not propagated: {} (code {})", element.name, e, i32::from(e.clone()))),
        None => return Err( sgp4_error!("no SGP4 result for {}", element.name))
    }

    let v = pteme.column(0);
    let p = Cartesian3::new( v[0], v[1], v[2]);
    if !p.is_finite() {
        return Err( sgp4_error!("non-finite position for {}", element.name))
    }
    if p.length() < MIN_ORBIT_RADIUS {
        return Err( sgp4_error!("{} below minimum orbit radius ({:.0}m)", element.name, p.length()))
    }

    let c = teme_to_cartographic( &p, date);
    Ok( Satellite {
        name: element.name.clone(),
        lat: c.latitude_deg(),
        lon: normalize_180( c.longitude_deg()),
        altitude_km: c.height_km(),
        period_min: element.period_min(),
    })
}

/// propagate a single element, containing panics of the underlying SGP4 implementation
fn propagate_one (element: &OrbitalElement, date: &DateTime<Utc>)->Option<Satellite> {
    match panic::catch_unwind( AssertUnwindSafe( || propagate( element, date))) {
        Ok(Ok(sat)) => Some(sat),
        Ok(Err(e)) => { debug!("{}", e); None }
        Err(_) => { warn!("SGP4 panicked for {}", element.name); None }
    }
}

/// propagate all elements to `date`, silently dropping the ones that fail. If nothing is left we
/// return the static fallback positions so that the display is never empty
pub fn propagate_elements (elements: &[OrbitalElement], date: &DateTime<Utc>)->Vec<Satellite> {
    let sats: Vec<Satellite> = elements.iter().filter_map( |e| propagate_one( e, date)).collect();
    if sats.is_empty() { fallback_satellites() } else { sats }
}

/// same as [`propagate_elements`] for raw TLE triples. Entries that do not parse are dropped
pub fn propagate_all (entries: &[TleEntry], date: &DateTime<Utc>)->Vec<Satellite> {
    propagate_elements( &parse_elements( entries), date)
}
