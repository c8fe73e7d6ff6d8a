// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a request is in its lifecycle. The ordering of the variants is the order the stages happen in.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
	#[default]
	Dispatched,
	Arriving,
	InProgress,
	Completed,
}

/// How a single row of the progress timeline is drawn relative to the current status.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepState {
	Completed,
	Current,
	Pending,
}

impl StepState {
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Completed => "status_step_completed",
			Self::Current => "status_step_current",
			Self::Pending => "status_step_pending",
		}
	}
}

impl Status {
	pub const ALL: [Status; 4] = [Status::Dispatched, Status::Arriving, Status::InProgress, Status::Completed];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dispatched => "dispatched",
			Self::Arriving => "arriving",
			Self::InProgress => "in-progress",
			Self::Completed => "completed",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Dispatched => "Unit Dispatched",
			Self::Arriving => "Unit Arriving",
			Self::InProgress => "Service in Progress",
			Self::Completed => "Service Completed",
		}
	}

	pub fn description(self) -> &'static str {
		match self {
			Self::Dispatched => "Mobile unit is on its way",
			Self::Arriving => "Technician will arrive shortly",
			Self::InProgress => "Repair work is underway",
			Self::Completed => "Your vehicle is ready",
		}
	}

	/// Position in the timeline, starting at zero.
	pub fn index(self) -> usize {
		self as usize
	}

	/// Whether the arrival countdown is still meaningful. It stops once work has started.
	pub fn counts_down(self) -> bool {
		self < Self::InProgress
	}

	pub fn step_state(self, step: Status) -> StepState {
		match step.cmp(&self) {
			std::cmp::Ordering::Less => StepState::Completed,
			std::cmp::Ordering::Equal => StepState::Current,
			std::cmp::Ordering::Greater => StepState::Pending,
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stages_are_ordered_as_they_happen() {
		assert!(Status::ALL.windows(2).all(|pair| pair[0] < pair[1]));
		assert_eq!(Status::default(), Status::Dispatched);
	}

	#[test]
	fn wire_names_use_kebab_case() {
		assert_eq!(Status::InProgress.as_str(), "in-progress");
		assert_eq!(Status::InProgress.to_string(), "in-progress");
	}

	#[test]
	fn timeline_rows_follow_the_current_stage() {
		let current = Status::Arriving;
		let states: Vec<StepState> = Status::ALL.iter().map(|step| current.step_state(*step)).collect();
		assert_eq!(
			states,
			vec![StepState::Completed, StepState::Current, StepState::Pending, StepState::Pending]
		);
	}

	#[test]
	fn countdown_stops_at_in_progress() {
		assert!(Status::Dispatched.counts_down());
		assert!(Status::Arriving.counts_down());
		assert!(!Status::InProgress.counts_down());
		assert!(!Status::Completed.counts_down());
	}
}
