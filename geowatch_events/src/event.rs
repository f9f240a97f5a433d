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

use std::fmt;
use serde::{Serialize,Deserialize};
use strum::{EnumIter, IntoStaticStr};
use geowatch_common::geometry::LonLat;

#[derive(Serialize,Deserialize,Debug,PartialEq,Eq,Hash,Copy,Clone,IntoStaticStr,EnumIter)]
#[serde(rename_all="lowercase")]
#[strum(serialize_all="lowercase")]
pub enum Category {
    Security,
    Political,
    Economic,
    Climate,
    Election,
    Diplomatic,
}

pub type Rgb = [u8;3];

impl Category {
    pub fn color (&self)->Rgb {
        match self {
            Category::Security   => [239,  68,  68],
            Category::Political  => [168,  85, 247],
            Category::Economic   => [ 34, 211, 238],
            Category::Climate    => [ 74, 222, 128],
            Category::Election   => [251, 146,  60],
            Category::Diplomatic => [250, 204,  21],
        }
    }

    pub fn as_str (&self)->&'static str { self.into() }
}

impl fmt::Display for Category {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result { write!(f, "{}", self.as_str()) }
}

#[derive(Serialize,Deserialize,Debug,PartialEq,Eq,Copy,Clone,IntoStaticStr)]
#[serde(rename_all="lowercase")]
#[strum(serialize_all="lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// market metadata for display
#[derive(Serialize,Deserialize,Debug,PartialEq,Clone)]
pub struct MarketData {
    pub volume: String,
    pub liquidity: String,
    pub comments: u64,
    pub slug: String,
}

/// a geolocated event marker
#[derive(Serialize,Deserialize,Debug,PartialEq,Clone)]
pub struct GlobeEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub country: String,
    pub region: String,
    pub coordinates: LonLat,
    pub probability: u8, // percent
    pub impact: Impact,
    pub date: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if="geowatch_common::is_none", default)]
    pub market: Option<MarketData>,
}

impl fmt::Display for GlobeEvent {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{} [{}] {} {}% @ {}", self.id, self.category, self.title, self.probability, self.coordinates)
    }
}

/// a stable key that identifies an entity across polls
pub trait Identity {
    fn identity (&self)->&str;
}

impl Identity for GlobeEvent {
    fn identity (&self)->&str { self.id.as_str() }
}
