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
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Serialize,Deserialize,Deserializer};
use serde_json::Value;
use geowatch_common::{
    datetime::{deserialize_duration, serialize_duration, secs, secs_f64}, geometry::LonLat, debug
};
use geowatch_feed::{self as feed, FeedSource};

use crate::event::{Category, GlobeEvent, Impact, MarketData};

/// keyword -> (lon,lat), country, region. The first keyword contained in the (lower case) event
/// title wins, hence more specific phrases have to come before their substrings
const GEO_KEYWORDS: [(&str, (f64,f64), &str, &str); 60] = [
    // south east asia
    ("south china sea", ( 114.0,  13.0), "Philippines",   "South China Sea"),
    ("philippines",     ( 121.0,  14.6), "Philippines",   "Southeast Asia"),
    ("vietnam",         ( 106.0,  16.0), "Vietnam",       "Southeast Asia"),
    ("thailand",        ( 100.5,  13.8), "Thailand",      "Southeast Asia"),
    ("indonesia",       ( 106.8,  -6.2), "Indonesia",     "Southeast Asia"),
    ("myanmar",         (  96.1,  19.7), "Myanmar",       "Southeast Asia"),
    ("malaysia",        ( 101.7,   3.1), "Malaysia",      "Southeast Asia"),
    ("cambodia",        ( 104.9,  11.6), "Cambodia",      "Southeast Asia"),
    ("laos",            ( 102.6,  18.0), "Laos",          "Southeast Asia"),
    ("singapore",       ( 103.8,   1.4), "Singapore",     "Southeast Asia"),
    ("asean",           ( 108.0,  10.0), "ASEAN",         "Southeast Asia"),
    // east asia
    ("taiwan",          ( 121.0,  23.5), "Taiwan",        "East Asia"),
    ("china",           ( 116.4,  39.9), "China",         "East Asia"),
    ("japan",           ( 138.0,  36.0), "Japan",         "East Asia"),
    ("korea",           ( 127.0,  37.5), "South Korea",   "East Asia"),
    ("hong kong",       ( 114.2,  22.3), "Hong Kong",     "East Asia"),
    // south asia
    ("india",           (  79.5,  20.0), "India",         "South Asia"),
    ("pakistan",        (  69.3,  30.4), "Pakistan",      "South Asia"),
    ("bangladesh",      (  90.4,  23.7), "Bangladesh",    "South Asia"),
    ("afghanistan",     (  69.2,  34.5), "Afghanistan",   "South Asia"),
    // middle east
    ("gaza",            (  34.5,  31.5), "Gaza",          "Middle East"),
    ("israel",          (  35.2,  31.8), "Israel",        "Middle East"),
    ("iran",            (  51.4,  35.7), "Iran",          "Middle East"),
    ("iraq",            (  44.4,  33.3), "Iraq",          "Middle East"),
    ("saudi",           (  45.1,  24.7), "Saudi Arabia",  "Middle East"),
    ("syria",           (  38.3,  34.8), "Syria",         "Middle East"),
    ("lebanon",         (  35.5,  33.9), "Lebanon",       "Middle East"),
    ("turkey",          (  35.2,  39.9), "Turkey",        "Middle East"),
    ("yemen",           (  48.5,  15.6), "Yemen",         "Middle East"),
    // europe
    ("ukraine",         (  31.2,  49.0), "Ukraine",       "Europe"),
    ("russia",          (  37.6,  55.8), "Russia",        "Europe"),
    ("germany",         (  13.4,  52.5), "Germany",       "Europe"),
    ("france",          (   2.3,  48.9), "France",        "Europe"),
    ("uk",              (  -0.1,  51.5), "UK",            "Europe"),
    ("britain",         (  -0.1,  51.5), "UK",            "Europe"),
    ("poland",          (  21.0,  52.2), "Poland",        "Europe"),
    ("spain",           (  -3.7,  40.4), "Spain",         "Europe"),
    ("italy",           (  12.5,  41.9), "Italy",         "Europe"),
    ("nato",            (  13.4,  52.5), "Europe",        "Europe"),
    ("europe",          (  10.0,  51.0), "Europe",        "Europe"),
    // americas
    ("united states",   ( -77.0,  38.9), "United States", "North America"),
    ("democrat",        ( -77.0,  38.9), "United States", "North America"),
    ("republican",      ( -77.0,  38.9), "United States", "North America"),
    ("trump",           ( -77.0,  38.9), "United States", "North America"),
    ("fed ",            ( -77.0,  38.9), "United States", "North America"),
    ("federal reserve", ( -77.0,  38.9), "United States", "North America"),
    ("mexico",          ( -99.1,  19.4), "Mexico",        "North America"),
    ("canada",          ( -75.7,  45.4), "Canada",        "North America"),
    ("venezuela",       ( -66.9,  10.5), "Venezuela",     "South America"),
    ("brazil",          ( -47.9, -15.8), "Brazil",        "South America"),
    ("argentina",       ( -58.4, -34.6), "Argentina",     "South America"),
    ("colombia",        ( -74.1,   4.7), "Colombia",      "South America"),
    // africa
    ("nigeria",         (   7.5,   9.1), "Nigeria",       "Africa"),
    ("ethiopia",        (  38.7,   9.0), "Ethiopia",      "Africa"),
    ("kenya",           (  36.8,  -1.3), "Kenya",         "Africa"),
    ("egypt",           (  31.2,  30.1), "Egypt",         "Africa"),
    ("south africa",    (  28.0, -26.2), "South Africa",  "Africa"),
    // catch all
    ("crypto",          ( -77.0,  38.9), "United States", "Global"),
    ("bitcoin",         ( -77.0,  38.9), "United States", "Global"),
    ("usd",             ( -77.0,  38.9), "United States", "Global"),
];

/// the first category with a keyword contained in the text wins, `Political` if none matches
const CATEGORY_KEYWORDS: [(Category, &[&str]); 6] = [
    (Category::Security,   &["invade", "invasion", "military", "clash", "strike", "blockade", "war", "attack", "conflict", "nuclear"]),
    (Category::Election,   &["election", "seats", "vote", "legislative", "referendum", "ballot", "nominee"]),
    (Category::Economic,   &["trade", "gdp", "tariff", "export", "bitcoin", "economic", "brics", "bank", "currency", "sanctions"]),
    (Category::Climate,    &["typhoon", "flood", "drought", "climate", "mekong", "earthquake", "storm", "cyclone"]),
    (Category::Diplomatic, &["visit", "relations", "normalize", "meet", "summit", "agreement", "treaty", "diplomat", "recognize"]),
    (Category::Political,  &["president", "prime minister", "pm ", "coup", "ousted", "leader", "government", "minister", "resign"]),
];

const GOLDEN_ANGLE_DEG: f64 = 137.508;
const JITTER_RADIUS_DEG: f64 = 0.5;

#[derive(Debug,Clone,PartialEq)]
pub struct GeoMatch {
    pub coordinates: LonLat,
    pub country: &'static str,
    pub region: &'static str,
}

pub fn infer_geo (text: &str)->Option<GeoMatch> {
    let t = text.to_lowercase();
    GEO_KEYWORDS.iter()
        .find( |(kw,..)| t.contains(kw))
        .map( |(_, (lon,lat), country, region)| GeoMatch { coordinates: LonLat::new( *lon, *lat), country: *country, region: *region })
}

pub fn infer_category (text: &str)->Category {
    let t = text.to_lowercase();
    CATEGORY_KEYWORDS.iter()
        .find( |(_,kws)| kws.iter().any( |kw| t.contains(kw)))
        .map( |(cat,_)| *cat)
        .unwrap_or( Category::Political)
}

pub fn infer_impact (volume: f64)->Impact {
    if volume >= 3_000_000.0 { Impact::High }
    else if volume >= 400_000.0 { Impact::Medium }
    else { Impact::Low }
}

pub fn format_usd (n: f64)->String {
    if n >= 1_000_000.0 { format!("${:.1}M", n / 1_000_000.0) }
    else if n >= 1_000.0 { format!("${}K", (n / 1_000.0).round()) }
    else { format!("${}", n.round()) }
}

/// deterministic displacement along a golden angle spiral so that events at the same location
/// don't stack
pub fn jitter (p: LonLat, idx: usize)->LonLat {
    let angle = (idx as f64 * GOLDEN_ANGLE_DEG).to_radians();
    LonLat::new( p.lon + angle.cos() * JITTER_RADIUS_DEG, p.lat + angle.sin() * JITTER_RADIUS_DEG)
}

/// numbers that come as JSON numbers or numeric strings
fn de_lenient_f64<'a,D> (deserializer: D)->Result<Option<f64>,D::Error> where D: Deserializer<'a> {
    let v: Option<Value> = Option::deserialize( deserializer)?;
    Ok( match v {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None
    })
}

fn de_lenient_string<'a,D> (deserializer: D)->Result<Option<String>,D::Error> where D: Deserializer<'a> {
    let v: Option<Value> = Option::deserialize( deserializer)?;
    Ok( match v {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None
    })
}

#[derive(Deserialize,Debug,Clone,Default)]
#[serde(rename_all="camelCase")]
pub struct RawMarket {
    pub question: Option<String>,
    /// JSON encoded array of decimal strings
    pub outcome_prices: Option<String>,
    /// JSON encoded array of outcome names
    pub outcomes: Option<String>,
}

#[derive(Deserialize,Debug,Clone,Default)]
#[serde(rename_all="camelCase")]
pub struct RawEvent {
    #[serde(default, deserialize_with="de_lenient_string")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub end_date: Option<String>,
    #[serde(default, deserialize_with="de_lenient_f64")]
    pub volume: Option<f64>,
    #[serde(default, deserialize_with="de_lenient_f64")]
    pub liquidity: Option<f64>,
    pub comment_count: Option<u64>,
    #[serde(default)]
    pub markets: Vec<RawMarket>,
}

impl RawEvent {
    pub fn is_expired_at (&self, now: DateTime<Utc>)->bool {
        self.end_date.as_deref()
            .and_then( |s| DateTime::parse_from_rfc3339(s).ok())
            .map( |end| end.with_timezone(&Utc) < now)
            .unwrap_or(false)
    }
}

/// probability in percent from the first market: the price of a leading "Yes" outcome, otherwise
/// the highest outcome price. 50 if there is nothing usable
pub fn market_probability (market: Option<&RawMarket>)->u8 {
    let Some(market) = market else { return 50 };
    let Some(prices) = market.outcome_prices.as_deref().and_then( |s| serde_json::from_str::<Vec<String>>(s).ok()) else { return 50 };
    let outcomes: Vec<String> = market.outcomes.as_deref().and_then( |s| serde_json::from_str(s).ok()).unwrap_or_default();

    let p = match (outcomes.first(), prices.first()) {
        (Some(o), Some(p)) if o.eq_ignore_ascii_case("yes") && !p.is_empty() => p.trim().parse::<f64>().ok(),
        _ => prices.iter().map( |p| p.trim().parse::<f64>().unwrap_or(0.0)).reduce( f64::max)
    };

    match p {
        Some(p) if p.is_finite() => (p * 100.0).round().clamp( 0.0, 100.0) as u8,
        _ => 50
    }
}

/// turn raw events into globe events. Expired events and events we can't geolocate are dropped,
/// the jitter index only counts events we keep
pub fn normalize_events (raw: &[RawEvent], now: DateTime<Utc>)->Vec<GlobeEvent> {
    let mut events = Vec::with_capacity( raw.len());

    for e in raw {
        if e.is_expired_at(now) { continue }
        let Some(geo) = infer_geo( &e.title) else { continue };

        let market = e.markets.first();
        let question = market.and_then( |m| m.question.clone());
        let category = infer_category( &format!("{} {}", e.title, question.as_deref().unwrap_or("")));
        let volume = e.volume.unwrap_or(0.0);

        let event = GlobeEvent {
            id: format!("pm-{}", e.id.as_deref().unwrap_or("")),
            title: e.title.clone(),
            description: question.or_else( || e.description.clone()).unwrap_or_else( || e.title.clone()),
            category,
            country: geo.country.to_string(),
            region: geo.region.to_string(),
            coordinates: jitter( geo.coordinates, events.len()),
            probability: market_probability( market),
            impact: infer_impact( volume),
            date: e.end_date.as_deref().map( |d| d.chars().take(10).collect::<String>()).unwrap_or_default(),
            tags: vec![ category.to_string(), geo.country.to_lowercase(), "polymarket".to_string() ],
            market: Some( MarketData {
                volume: format_usd( volume),
                liquidity: format_usd( e.liquidity.unwrap_or(0.0)),
                comments: e.comment_count.unwrap_or(0),
                slug: e.slug.clone().unwrap_or_default(),
            }),
        };
        events.push( event);
    }

    events
}

/// parse a Gamma API event list. Entries that don't deserialize are skipped
pub fn parse_raw_events (payload: &Value)->Vec<RawEvent> {
    payload.as_array()
        .map( |a| a.iter().filter_map( |v| RawEvent::deserialize(v).ok()).collect())
        .unwrap_or_default()
}

pub const DEFAULT_EVENTS_URL: &str =
    "https://gamma-api.polymarket.com/events?active=true&closed=false&limit=100&order=volume&ascending=false&tag_slug=world";

#[derive(Serialize,Deserialize,Debug,Clone)]
pub struct EventsConfig {
    pub url: String,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub poll_interval: Duration,

    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub timeout: Duration,

    /// how long one impact animation runs
    #[serde(deserialize_with="deserialize_duration", serialize_with="serialize_duration")]
    pub impact_duration: Duration,

    /// max number of concurrently active impact animations
    pub max_impacts: usize,

    /// ripple ring cycles per second
    pub pulse_speed: f64,
}

impl Default for EventsConfig {
    fn default ()->Self {
        EventsConfig {
            url: DEFAULT_EVENTS_URL.to_string(),
            poll_interval: secs(60),
            timeout: secs(10),
            impact_duration: secs_f64(2.2),
            max_impacts: 8,
            pulse_speed: 0.6,
        }
    }
}

pub struct PolymarketSource {
    client: Client,
    url: String,
}

impl PolymarketSource {
    pub fn new (config: &EventsConfig)->Self {
        PolymarketSource { client: Client::new(), url: config.url.clone() }
    }
}

#[async_trait]
impl FeedSource for PolymarketSource {
    type Item = GlobeEvent;

    fn name (&self)->&str { "polymarket" }

    async fn fetch_items (&self)->feed::Result<Vec<GlobeEvent>> {
        let payload: Value = feed::source::get_json( &self.client, self.name(), &self.url).await?;
        let raw = parse_raw_events( &payload);
        let events = normalize_events( &raw, Utc::now());
        debug!("{} of {} events geolocated", events.len(), raw.len());
        Ok(events)
    }
}
