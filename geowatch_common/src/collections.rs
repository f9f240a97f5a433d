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

use std::collections::VecDeque;

/// push to the back of a VecDeque that is used as a bounded queue, dropping the oldest (front)
/// entries if the new length would exceed `max_len`. Returns the number of dropped entries
pub fn push_bounded<T> (v: &mut VecDeque<T>, t: T, max_len: usize)->usize {
    let mut n_dropped = 0;
    while !v.is_empty() && v.len() >= max_len {
        v.pop_front();
        n_dropped += 1;
    }
    if max_len > 0 {
        v.push_back(t);
    } else {
        n_dropped += 1;
    }
    n_dropped
}
