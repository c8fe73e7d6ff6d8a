// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::status::Status;
use crate::timing::{Scheduler, TimerHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Timing of the simulated dispatch. Stage offsets are all measured from the moment the simulator starts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SimulatorSchedule {
	pub arriving_after: Duration,
	pub in_progress_after: Duration,
	pub completed_after: Duration,
	/// How often the minutes-remaining counter drops by one.
	pub countdown_interval: Duration,
	pub initial_eta_minutes: u32,
	/// The counter is reset to this when the unit starts arriving.
	pub arriving_eta_minutes: u32,
}

impl Default for SimulatorSchedule {
	fn default() -> Self {
		Self {
			arriving_after: Duration::from_secs(8),
			in_progress_after: Duration::from_secs(15),
			completed_after: Duration::from_secs(25),
			countdown_interval: Duration::from_secs(60),
			initial_eta_minutes: 12,
			arriving_eta_minutes: 3,
		}
	}
}

/// What the tracker screen shows at a given moment.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrackerSnapshot {
	pub status: Status,
	pub eta_minutes: u32,
}

impl TrackerSnapshot {
	pub fn initial(schedule: &SimulatorSchedule) -> Self {
		Self {
			status: Status::Dispatched,
			eta_minutes: schedule.initial_eta_minutes,
		}
	}

	/// Moves to `status` if it's later than the current one. Returns whether anything changed.
	fn enter(&mut self, status: Status, eta_minutes: Option<u32>) -> bool {
		if status <= self.status {
			return false;
		}
		self.status = status;
		if let Some(eta_minutes) = eta_minutes {
			self.eta_minutes = eta_minutes;
		}
		true
	}

	/// Takes a minute off the estimate while the unit is still on its way. Returns whether anything changed.
	fn tick_countdown(&mut self) -> bool {
		if !self.status.counts_down() || self.eta_minutes == 0 {
			return false;
		}
		self.eta_minutes -= 1;
		true
	}
}

struct SimulatorState {
	snapshot: TrackerSnapshot,
	running: bool,
}

type Observer = Rc<dyn Fn(TrackerSnapshot)>;

fn apply_change(
	state: &Rc<RefCell<SimulatorState>>,
	observer: &Observer,
	change: impl FnOnce(&mut TrackerSnapshot) -> bool,
) {
	let updated = {
		let mut state = state.borrow_mut();
		if !state.running {
			return;
		}
		change(&mut state.snapshot).then_some(state.snapshot)
	};
	if let Some(snapshot) = updated {
		tracing::debug!(status = %snapshot.status, eta_minutes = snapshot.eta_minutes, "Tracker updated");
		observer(snapshot);
	}
}

/// Drives a request through its stages on a fixed schedule.
///
/// Every change is pushed to the observer given to [StatusSimulator::start]. Stopping (or dropping) the simulator
/// cancels every outstanding timer, and nothing is reported to the observer after that.
pub struct StatusSimulator<H: TimerHandle> {
	state: Rc<RefCell<SimulatorState>>,
	timers: Vec<H>,
}

impl<H: TimerHandle> StatusSimulator<H> {
	pub fn start<S>(scheduler: &S, schedule: SimulatorSchedule, observer: impl Fn(TrackerSnapshot) + 'static) -> Self
	where
		S: Scheduler<Handle = H>,
	{
		let state = Rc::new(RefCell::new(SimulatorState {
			snapshot: TrackerSnapshot::initial(&schedule),
			running: true,
		}));
		let observer: Observer = Rc::new(observer);

		let stages = [
			(schedule.arriving_after, Status::Arriving, Some(schedule.arriving_eta_minutes)),
			(schedule.in_progress_after, Status::InProgress, Some(0)),
			(schedule.completed_after, Status::Completed, None),
		];

		let mut timers = Vec::with_capacity(stages.len() + 1);
		for (delay, status, eta_minutes) in stages {
			let state = Rc::clone(&state);
			let observer = Rc::clone(&observer);
			timers.push(scheduler.schedule_once(
				delay,
				Box::new(move || apply_change(&state, &observer, |snapshot| snapshot.enter(status, eta_minutes))),
			));
		}

		{
			let state = Rc::clone(&state);
			let observer = Rc::clone(&observer);
			timers.push(scheduler.schedule_repeating(
				schedule.countdown_interval,
				Box::new(move || apply_change(&state, &observer, TrackerSnapshot::tick_countdown)),
			));
		}

		Self { state, timers }
	}

	pub fn snapshot(&self) -> TrackerSnapshot {
		self.state.borrow().snapshot
	}

	pub fn is_running(&self) -> bool {
		self.state.borrow().running
	}

	/// Cancels all pending stage changes and the countdown. The last snapshot stays readable.
	pub fn stop(&mut self) {
		self.state.borrow_mut().running = false;
		for timer in self.timers.drain(..) {
			timer.cancel();
		}
	}
}

impl<H: TimerHandle> Drop for StatusSimulator<H> {
	fn drop(&mut self) {
		self.stop();
	}
}
