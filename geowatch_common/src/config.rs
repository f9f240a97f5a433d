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

use std::{fs, path::Path};
use serde::de::DeserializeOwned;
use crate::{errors::Result, info};

/// load a RON config file into a serde deserializable config struct
pub fn load_config<C,P> (path: P)->Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let s = fs::read_to_string( path.as_ref())?;
    let config: C = ron::from_str(&s)?;
    Ok(config)
}

/// load a RON config file if it exists, otherwise use the `Default` of the config type.
/// Note that a config file that exists but does not parse is still an error
pub fn load_config_or_default<C,P> (path: P)->Result<C> where C: DeserializeOwned + Default, P: AsRef<Path> {
    let path = path.as_ref();
    if path.is_file() {
        load_config(path)
    } else {
        info!("no config file {:?}, using defaults", path);
        Ok( C::default())
    }
}
