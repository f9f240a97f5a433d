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

use crate::propagator::Satellite;

/// static positions of well known satellites, used if we have no TLEs or none of them propagates.
/// (name, lat, lon, altitude km, period min)
const FALLBACK_SATELLITES: [(&str, f64, f64, f64, f64); 39] = [
    // LEO crewed
    ("ISS (ZARYA)",     15.0,  110.0,   420.0,   92.6),
    ("CSS (TIANHE)",   -10.0,   85.0,   390.0,   92.3),
    // LEO earth observation
    ("TERRA",           -5.0,  105.0,   705.0,   98.9),
    ("AQUA",            20.0,  120.0,   705.0,   98.9),
    ("SENTINEL-2A",     10.0,   98.0,   786.0,  100.6),
    ("SENTINEL-2B",    -20.0,  145.0,   786.0,  100.6),
    ("SENTINEL-1A",     35.0,   60.0,   693.0,   98.6),
    ("LANDSAT-9",      -35.0,  170.0,   705.0,   98.9),
    ("NOAA 19",        -10.0,  130.0,   870.0,  102.1),
    ("NOAA 20",         55.0,  -30.0,   824.0,  101.4),
    ("SUOMI NPP",       40.0,  -80.0,   824.0,  101.4),
    ("METOP-B",        -50.0,   20.0,   817.0,  101.3),
    ("METOP-C",         25.0,  -60.0,   817.0,  101.3),
    ("SPOT-7",           5.0,   35.0,   694.0,   98.7),
    ("WORLDVIEW-3",     30.0,  -45.0,   617.0,   97.0),
    // LEO commercial constellations
    ("STARLINK-1",      48.0,   15.0,   550.0,   95.6),
    ("STARLINK-2",      48.0,   60.0,   550.0,   95.6),
    ("STARLINK-3",      48.0,  105.0,   550.0,   95.6),
    ("STARLINK-4",      48.0,  150.0,   550.0,   95.6),
    ("STARLINK-5",      48.0, -165.0,   550.0,   95.6),
    ("STARLINK-6",      48.0, -120.0,   550.0,   95.6),
    ("STARLINK-7",      48.0,  -75.0,   550.0,   95.6),
    ("ONEWEB-1",       -53.0,   30.0,  1200.0,  109.4),
    ("ONEWEB-2",       -53.0,  120.0,  1200.0,  109.4),
    // MEO navigation
    ("GPS BIIA-14",     55.0,   45.0, 20200.0,  717.9),
    ("GPS BIIA-21",    -55.0,  135.0, 20200.0,  717.9),
    ("GALILEO-12",      56.0,  -30.0, 23222.0,  844.9),
    ("GALILEO-13",     -56.0,   90.0, 23222.0,  844.9),
    ("GLONASS-M 747",   64.0,   10.0, 19100.0,  675.8),
    ("BEIDOU-3 M1",    -45.0,  -60.0, 21528.0,  760.0),
    // GEO communication and weather
    ("INTELSAT 901",     0.0,   18.0, 35786.0, 1436.1),
    ("INTELSAT 907",     0.0,  -28.0, 35786.0, 1436.1),
    ("GOES-16",          0.0,  -75.0, 35786.0, 1436.1),
    ("GOES-18",          0.0, -137.0, 35786.0, 1436.1),
    ("METEOSAT-10",      0.0,    0.0, 35786.0, 1436.1),
    ("HIMAWARI-9",       0.0,  141.0, 35786.0, 1436.1),
    ("COMSATx-2",        0.0,  113.0, 35786.0, 1436.1),
    // science
    ("HUBBLE",          28.0, -100.0,   540.0,   95.4),
    ("SWOT",           -38.0,   70.0,   891.0,  103.9),
];

pub fn fallback_satellites ()->Vec<Satellite> {
    FALLBACK_SATELLITES.iter()
        .map( |(name,lat,lon,alt,period)| Satellite::new( name, *lat, *lon, *alt, *period))
        .collect()
}
