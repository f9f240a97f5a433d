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

use hashbrown::HashSet;

use crate::event::Identity;

/// remembers which entities we have seen across polls so that only new arrivals get animated.
/// The first poll only primes the set, otherwise every marker would animate on startup. The seen
/// set never shrinks for the lifetime of the tracker
#[derive(Debug,Default)]
pub struct NoveltyTracker {
    seen: HashSet<String>,
    primed: bool,
}

impl NoveltyTracker {
    pub fn new ()->Self { NoveltyTracker::default() }

    pub fn is_primed (&self)->bool { self.primed }
    pub fn n_seen (&self)->usize { self.seen.len() }
    pub fn has_seen (&self, id: &str)->bool { self.seen.contains(id) }

    /// record `items` and return the ones whose identity we did not see before
    pub fn observe<'a,T: Identity> (&mut self, items: &'a [T])->Vec<&'a T> {
        if !self.primed {
            self.primed = true;
            for it in items {
                self.seen.insert( it.identity().to_string());
            }
            return Vec::new()
        }

        items.iter().filter( |it| self.seen.insert( it.identity().to_string())).collect()
    }
}
