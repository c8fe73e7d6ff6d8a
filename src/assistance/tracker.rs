// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::request::AssistanceRequest;
use super::simulator::TrackerSnapshot;
use super::status::{Status, StepState};

/// Which version of the status page to show.
#[derive(Debug, Eq, PartialEq)]
pub enum TrackerScreen<'a> {
	/// Nothing has been requested yet, so there's nothing to track.
	NoActiveRequest,
	Tracking(&'a AssistanceRequest),
}

impl<'a> TrackerScreen<'a> {
	pub fn for_request(request: Option<&'a AssistanceRequest>) -> Self {
		match request {
			Some(request) => Self::Tracking(request),
			None => Self::NoActiveRequest,
		}
	}

	pub fn shows_timeline(&self) -> bool {
		matches!(self, Self::Tracking(_))
	}
}

/// Text for the arrival card, or `None` once the card should be hidden.
pub fn eta_headline(snapshot: &TrackerSnapshot) -> Option<String> {
	match snapshot.status {
		Status::Dispatched | Status::Arriving => Some(format!("Estimated Arrival: {} min", snapshot.eta_minutes)),
		Status::InProgress => Some(String::from("Service in Progress")),
		Status::Completed => None,
	}
}

/// Every stage paired with how it should be drawn for the current snapshot.
pub fn timeline(snapshot: &TrackerSnapshot) -> Vec<(Status, StepState)> {
	Status::ALL
		.iter()
		.map(|step| (*step, snapshot.status.step_state(*step)))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::assistance::request::IssueType;

	#[test]
	fn no_request_means_no_timeline() {
		let screen = TrackerScreen::for_request(None);
		assert_eq!(screen, TrackerScreen::NoActiveRequest);
		assert!(!screen.shows_timeline());
	}

	#[test]
	fn a_request_gets_a_timeline() {
		let request = AssistanceRequest {
			id: String::from("REQ-000042"),
			issue_type: IssueType::FuelAssistance,
			location: String::from("NH-48, Km 135"),
			vehicle_type: String::from("Sedan"),
		};
		let screen = TrackerScreen::for_request(Some(&request));
		assert!(screen.shows_timeline());
	}

	#[test]
	fn headline_follows_the_stage() {
		let mut snapshot = TrackerSnapshot {
			status: Status::Dispatched,
			eta_minutes: 12,
		};
		assert_eq!(eta_headline(&snapshot).as_deref(), Some("Estimated Arrival: 12 min"));

		snapshot.status = Status::InProgress;
		assert_eq!(eta_headline(&snapshot).as_deref(), Some("Service in Progress"));

		snapshot.status = Status::Completed;
		assert_eq!(eta_headline(&snapshot), None);
	}

	#[test]
	fn completed_request_has_only_one_current_step() {
		let snapshot = TrackerSnapshot {
			status: Status::Completed,
			eta_minutes: 0,
		};
		let rows = timeline(&snapshot);
		assert_eq!(rows.len(), 4);
		assert_eq!(rows.iter().filter(|(_, state)| *state == StepState::Current).count(), 1);
		assert_eq!(rows[3], (Status::Completed, StepState::Current));
	}
}
