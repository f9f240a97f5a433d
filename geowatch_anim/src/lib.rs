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

//! a frame rate independent animation scheduler. Concerns with very different update rates
//! (ripple pulses, vessel movement, dead reckoning, orbit propagation) share one clock but each
//! gets its own cadence with a minimum firing interval

pub mod errors;
pub use errors::{AnimError, Result};

pub mod cadence;
pub use cadence::{Animated, Cadence, CadenceId, CadenceState};

pub mod scheduler;
pub use scheduler::{AnimationScheduler, SharedScheduler, CadenceHandle, add_cadence};

pub mod driver;
pub use driver::FrameDriver;

pub mod pulse;
pub use pulse::{PulsePhase, ring_phases};
