// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scheduling of delayed callbacks.
//!
//! Everything on the pages that happens "later" (status stage changes, the ETA countdown, payment processing)
//! goes through a [Scheduler]. The browser build uses real timers; tests use [VirtualScheduler] and move time
//! forward by hand.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

/// A timer that has been handed to a [Scheduler].
pub trait TimerHandle {
	/// Stops the timer. A cancelled timer never runs its callback again. Cancelling twice is harmless.
	fn cancel(&self);
}

/// Source of delayed and repeating callbacks.
pub trait Scheduler {
	type Handle: TimerHandle;

	/// Runs `callback` once, `delay` after now.
	fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;

	/// Runs `callback` every `period`, starting one period after now.
	fn schedule_repeating(&self, period: Duration, callback: Box<dyn FnMut()>) -> Self::Handle;
}

// Zero-length periods would fire forever within a single advance.
const MIN_PERIOD: Duration = Duration::from_millis(1);

enum VirtualCallback {
	Once(Box<dyn FnOnce()>),
	Repeating { period: Duration, callback: Box<dyn FnMut()> },
}

/// The timer whose callback is running right now. It isn't in `timers` while it runs.
struct FiringTimer {
	id: u64,
	cancelled: bool,
}

#[derive(Default)]
struct VirtualClock {
	now: Duration,
	next_id: u64,
	timers: BTreeMap<(Duration, u64), VirtualCallback>,
	firing: Option<FiringTimer>,
}

impl VirtualClock {
	fn insert(&mut self, due: Duration, callback: VirtualCallback) -> u64 {
		let id = self.next_id;
		self.next_id += 1;
		self.timers.insert((due, id), callback);
		id
	}

	fn pop_due(&mut self, until: Duration) -> Option<(Duration, u64, VirtualCallback)> {
		let (&(due, id), _) = self.timers.first_key_value()?;
		if due > until {
			return None;
		}
		let callback = self.timers.remove(&(due, id))?;
		Some((due, id, callback))
	}
}

/// A scheduler with a manually driven clock.
///
/// Time only moves when [VirtualScheduler::advance] is called. Timers due at the same instant fire in the order
/// they were scheduled. Callbacks may schedule or cancel other timers while running.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
	clock: Rc<RefCell<VirtualClock>>,
}

impl VirtualScheduler {
	pub fn new() -> Self {
		Self::default()
	}

	/// Time elapsed since the scheduler was created.
	pub fn now(&self) -> Duration {
		self.clock.borrow().now
	}

	/// Number of timers that are still waiting to fire.
	pub fn pending(&self) -> usize {
		self.clock.borrow().timers.len()
	}

	/// Moves the clock forward by `by`, firing every timer that falls due on the way.
	pub fn advance(&self, by: Duration) {
		let until = self.now() + by;
		loop {
			// The borrow has to end before the callback runs, since callbacks can reach back into the clock.
			let next = self.clock.borrow_mut().pop_due(until);
			let Some((due, id, callback)) = next else {
				break;
			};
			{
				let mut clock = self.clock.borrow_mut();
				clock.now = due;
				clock.firing = Some(FiringTimer { id, cancelled: false });
			}

			let reschedule = match callback {
				VirtualCallback::Once(callback) => {
					callback();
					None
				}
				VirtualCallback::Repeating { period, mut callback } => {
					callback();
					Some((period, callback))
				}
			};

			let mut clock = self.clock.borrow_mut();
			let cancelled = clock.firing.take().is_some_and(|firing| firing.cancelled);
			if let Some((period, callback)) = reschedule {
				if !cancelled {
					clock
						.timers
						.insert((due + period, id), VirtualCallback::Repeating { period, callback });
				}
			}
		}
		self.clock.borrow_mut().now = until;
	}
}

impl Scheduler for VirtualScheduler {
	type Handle = VirtualTimer;

	fn schedule_once(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> VirtualTimer {
		let mut clock = self.clock.borrow_mut();
		let due = clock.now + delay;
		let id = clock.insert(due, VirtualCallback::Once(callback));
		VirtualTimer {
			id,
			clock: Rc::downgrade(&self.clock),
		}
	}

	fn schedule_repeating(&self, period: Duration, callback: Box<dyn FnMut()>) -> VirtualTimer {
		let period = period.max(MIN_PERIOD);
		let mut clock = self.clock.borrow_mut();
		let due = clock.now + period;
		let id = clock.insert(due, VirtualCallback::Repeating { period, callback });
		VirtualTimer {
			id,
			clock: Rc::downgrade(&self.clock),
		}
	}
}

/// Handle for a timer on a [VirtualScheduler].
pub struct VirtualTimer {
	id: u64,
	clock: Weak<RefCell<VirtualClock>>,
}

impl TimerHandle for VirtualTimer {
	fn cancel(&self) {
		let Some(clock) = self.clock.upgrade() else {
			return;
		};
		let mut clock = clock.borrow_mut();
		clock.timers.retain(|&(_, id), _| id != self.id);
		if let Some(firing) = clock.firing.as_mut() {
			if firing.id == self.id {
				firing.cancelled = true;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;

	#[test]
	fn one_shot_fires_only_once_its_delay_has_passed() {
		let scheduler = VirtualScheduler::new();
		let fired = Rc::new(Cell::new(false));
		let flag = Rc::clone(&fired);
		let _timer = scheduler.schedule_once(Duration::from_secs(5), Box::new(move || flag.set(true)));

		scheduler.advance(Duration::from_millis(4_999));
		assert!(!fired.get());
		scheduler.advance(Duration::from_millis(1));
		assert!(fired.get());
		assert_eq!(scheduler.pending(), 0);
	}

	#[test]
	fn repeating_timer_fires_once_per_period() {
		let scheduler = VirtualScheduler::new();
		let count = Rc::new(Cell::new(0));
		let counter = Rc::clone(&count);
		let _timer = scheduler.schedule_repeating(
			Duration::from_secs(2),
			Box::new(move || counter.set(counter.get() + 1)),
		);

		scheduler.advance(Duration::from_secs(7));
		assert_eq!(count.get(), 3);
		assert_eq!(scheduler.now(), Duration::from_secs(7));
	}

	#[test]
	fn cancelled_timers_never_fire() {
		let scheduler = VirtualScheduler::new();
		let count = Rc::new(Cell::new(0));

		let counter = Rc::clone(&count);
		let once = scheduler.schedule_once(Duration::from_secs(1), Box::new(move || counter.set(counter.get() + 1)));
		let counter = Rc::clone(&count);
		let repeating =
			scheduler.schedule_repeating(Duration::from_secs(1), Box::new(move || counter.set(counter.get() + 10)));

		once.cancel();
		repeating.cancel();
		repeating.cancel();
		scheduler.advance(Duration::from_secs(10));

		assert_eq!(count.get(), 0);
		assert_eq!(scheduler.pending(), 0);
	}

	#[test]
	fn timers_due_together_fire_in_scheduling_order() {
		let scheduler = VirtualScheduler::new();
		let order = Rc::new(RefCell::new(Vec::new()));
		let mut timers = Vec::new();
		for label in ["first", "second", "third"] {
			let order = Rc::clone(&order);
			timers.push(scheduler.schedule_once(Duration::from_secs(3), Box::new(move || order.borrow_mut().push(label))));
		}

		scheduler.advance(Duration::from_secs(3));
		assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
	}

	#[test]
	fn callbacks_can_cancel_a_repeating_timer() {
		let scheduler = VirtualScheduler::new();
		let count = Rc::new(Cell::new(0));
		let handle: Rc<RefCell<Option<VirtualTimer>>> = Rc::new(RefCell::new(None));

		let counter = Rc::clone(&count);
		let own_handle = Rc::clone(&handle);
		let timer = scheduler.schedule_repeating(
			Duration::from_secs(1),
			Box::new(move || {
				counter.set(counter.get() + 1);
				if counter.get() == 2 {
					if let Some(timer) = own_handle.borrow().as_ref() {
						timer.cancel();
					}
				}
			}),
		);
		*handle.borrow_mut() = Some(timer);

		scheduler.advance(Duration::from_secs(10));
		assert_eq!(count.get(), 2);
	}
	#[test]
	fn cancelling_leaves_no_bookkeeping_behind() {
		let scheduler = VirtualScheduler::new();
		let fired = scheduler.schedule_once(Duration::from_secs(1), Box::new(|| ()));
		let pending = scheduler.schedule_once(Duration::from_secs(60), Box::new(|| ()));
		let repeating = scheduler.schedule_repeating(Duration::from_secs(1), Box::new(|| ()));

		scheduler.advance(Duration::from_secs(2));
		fired.cancel();
		pending.cancel();
		repeating.cancel();

		let clock = scheduler.clock.borrow();
		assert!(clock.timers.is_empty());
		assert!(clock.firing.is_none());
	}

	#[test]
	fn cancelling_another_timer_mid_callback_keeps_the_running_one() {
		let scheduler = VirtualScheduler::new();
		let count = Rc::new(Cell::new(0));
		let other = Rc::new(scheduler.schedule_once(Duration::from_secs(30), Box::new(|| ())));

		let counter = Rc::clone(&count);
		let to_cancel = Rc::clone(&other);
		let _timer = scheduler.schedule_repeating(
			Duration::from_secs(1),
			Box::new(move || {
				counter.set(counter.get() + 1);
				to_cancel.cancel();
			}),
		);

		scheduler.advance(Duration::from_secs(5));
		assert_eq!(count.get(), 5);
		assert_eq!(scheduler.pending(), 1);
	}
}
