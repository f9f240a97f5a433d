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
use reqwest::{Client, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tokio::time;
use geowatch_common::debug;

use crate::errors::{FeedError, Result};

/// a remote data source that delivers normalized entities. Implementations perform exactly one
/// network round trip per call and drop entities that fail required field checks - the returned
/// Vec only contains valid entities (it might be empty, which callers treat as failure)
#[async_trait]
pub trait FeedSource: Send + Sync {
    type Item: Clone + Send + Sync + Serialize + DeserializeOwned + 'static;

    /// a short name for logging and persistence
    fn name (&self)->&str;

    async fn fetch_items (&self)->Result<Vec<Self::Item>>;
}

/// run one fetch of `source` bounded by `to`
pub async fn fetch_with_timeout<S> (source: &S, to: Duration)->Result<Vec<S::Item>> where S: FeedSource + ?Sized {
    match time::timeout( to, source.fetch_items()).await {
        Ok(result) => result,
        Err(_) => Err( FeedError::TimeoutError(to))
    }
}

/// map response status codes into our error taxonomy. 429 is the rate limit signal
pub fn check_status (source: &str, response: Response)->Result<Response> {
    match response.status() {
        StatusCode::TOO_MANY_REQUESTS => Err( FeedError::RateLimitedError( source.to_string())),
        status if status.is_success() => Ok(response),
        other => Err( FeedError::HttpStatusError( other.as_u16()))
    }
}

pub async fn get_text (client: &Client, source: &str, url: &str)->Result<String> {
    debug!("{source} GET {url}");
    let response = check_status( source, client.get(url).send().await?)?;
    Ok( response.text().await? )
}

pub async fn get_json<T> (client: &Client, source: &str, url: &str)->Result<T> where T: DeserializeOwned {
    debug!("{source} GET {url}");
    let response = check_status( source, client.get(url).send().await?)?;
    let bytes = response.bytes().await?;
    Ok( serde_json::from_slice(&bytes)? )
}
