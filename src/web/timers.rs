// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::timing::{Scheduler, TimerHandle};
use leptos::prelude::*;
use std::cell::RefCell;
use std::time::Duration;

/// Schedules callbacks on the browser's timers. Only use this from client-side code (effects and event handlers);
/// there is no window to schedule on while rendering on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

pub enum BrowserTimer {
	Timeout(TimeoutHandle),
	Interval(IntervalHandle),
	/// The browser refused the timer. There's nothing to cancel.
	Unscheduled,
}

impl TimerHandle for BrowserTimer {
	fn cancel(&self) {
		match self {
			Self::Timeout(handle) => handle.clear(),
			Self::Interval(handle) => handle.clear(),
			Self::Unscheduled => (),
		}
	}
}

impl Scheduler for BrowserScheduler {
	type Handle = BrowserTimer;

	fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> BrowserTimer {
		match set_timeout_with_handle(callback, delay) {
			Ok(handle) => BrowserTimer::Timeout(handle),
			Err(error) => {
				tracing::warn!(?error, ?delay, "Failed to schedule timeout");
				BrowserTimer::Unscheduled
			}
		}
	}

	fn schedule_repeating(&self, period: Duration, callback: Box<dyn FnMut()>) -> BrowserTimer {
		let callback = RefCell::new(callback);
		match set_interval_with_handle(move || (callback.borrow_mut())(), period) {
			Ok(handle) => BrowserTimer::Interval(handle),
			Err(error) => {
				tracing::warn!(?error, ?period, "Failed to schedule interval");
				BrowserTimer::Unscheduled
			}
		}
	}
}
