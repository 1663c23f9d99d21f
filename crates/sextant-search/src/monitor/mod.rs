// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Search Monitors
//!
//! Observers of the event-search lifecycle. A monitor is told when a search
//! starts, when each confinement interval is entered, about every sample and
//! refined transition, about every recorded interval, and when the search
//! finishes. Monitors only observe; a running search always completes or
//! fails on its own.
//!
//! - `search_monitor`: the `SearchMonitor` trait.
//! - `no_op`: a monitor that ignores every event.
//! - `composite`: fans events out to several monitors.
//! - `log`: periodic progress through `tracing`.
//! - `index`: the `MonitorIndex` addressing monitors within a composite.

pub mod composite;
pub mod index;
pub mod log;
pub mod no_op;
pub mod search_monitor;
