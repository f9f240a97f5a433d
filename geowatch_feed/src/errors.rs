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

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Error,Debug)]
pub enum FeedError {

    #[error("fetch timed out after {0:?}")]
    TimeoutError( Duration ),

    #[error("rate limited by {0}")]
    RateLimitedError( String ),

    #[error("http status {0}")]
    HttpStatusError( u16 ),

    #[error("http error {0}")]
    HttpError( #[from] reqwest::Error),

    #[error("no valid entities from {0}")]
    EmptyResultError( String ),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),
}

impl FeedError {
    /// rate limiting is the only failure that makes a polling loop back off for good
    pub fn is_rate_limit (&self)->bool {
        matches!( self, FeedError::RateLimitedError(_))
    }
}
