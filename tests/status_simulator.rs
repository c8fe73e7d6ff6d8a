// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drives the status simulator on a virtual clock and checks what the status screen would be told.

use mobile_garage::assistance::{
	AssistanceRequest, IssueType, RequestDraft, SimulatorSchedule, Status, StatusSimulator, StepState,
	TrackerScreen, TrackerSnapshot, eta_headline, timeline,
};
use mobile_garage::timing::{VirtualScheduler, VirtualTimer};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn snapshot(status: Status, eta_minutes: u32) -> TrackerSnapshot {
	TrackerSnapshot { status, eta_minutes }
}

/// Starts a simulator whose observer records every update it receives.
fn recorded_start(
	scheduler: &VirtualScheduler,
	schedule: SimulatorSchedule,
) -> (StatusSimulator<VirtualTimer>, Rc<RefCell<Vec<TrackerSnapshot>>>) {
	let updates = Rc::new(RefCell::new(Vec::new()));
	let recorder = Rc::clone(&updates);
	let simulator = StatusSimulator::start(scheduler, schedule, move |update| recorder.borrow_mut().push(update));
	(simulator, updates)
}

#[test]
fn stages_arrive_in_order_on_the_default_schedule() {
	let scheduler = VirtualScheduler::new();
	let (simulator, updates) = recorded_start(&scheduler, SimulatorSchedule::default());
	assert_eq!(simulator.snapshot(), snapshot(Status::Dispatched, 12));

	scheduler.advance(Duration::from_secs(7));
	assert!(updates.borrow().is_empty());

	scheduler.advance(Duration::from_secs(1));
	assert_eq!(*updates.borrow(), vec![snapshot(Status::Arriving, 3)]);

	scheduler.advance(Duration::from_secs(7));
	assert_eq!(simulator.snapshot(), snapshot(Status::InProgress, 0));

	scheduler.advance(Duration::from_secs(10));
	assert_eq!(
		*updates.borrow(),
		vec![
			snapshot(Status::Arriving, 3),
			snapshot(Status::InProgress, 0),
			snapshot(Status::Completed, 0),
		]
	);
	assert!(simulator.is_running());
}

#[test]
fn countdown_floors_at_zero_and_stops_once_work_starts() {
	let scheduler = VirtualScheduler::new();
	let schedule = SimulatorSchedule {
		countdown_interval: Duration::from_secs(1),
		initial_eta_minutes: 2,
		..SimulatorSchedule::default()
	};
	let (_simulator, updates) = recorded_start(&scheduler, schedule);

	scheduler.advance(Duration::from_secs(30));
	assert_eq!(
		*updates.borrow(),
		vec![
			snapshot(Status::Dispatched, 1),
			snapshot(Status::Dispatched, 0),
			snapshot(Status::Arriving, 3),
			snapshot(Status::Arriving, 2),
			snapshot(Status::Arriving, 1),
			snapshot(Status::Arriving, 0),
			snapshot(Status::InProgress, 0),
			snapshot(Status::Completed, 0),
		]
	);
}

#[test]
fn stopping_before_anything_fires_reports_nothing() {
	let scheduler = VirtualScheduler::new();
	let (mut simulator, updates) = recorded_start(&scheduler, SimulatorSchedule::default());
	simulator.stop();

	assert!(!simulator.is_running());
	assert_eq!(scheduler.pending(), 0);
	scheduler.advance(Duration::from_secs(120));
	assert!(updates.borrow().is_empty());
	assert_eq!(simulator.snapshot(), snapshot(Status::Dispatched, 12));
}

#[test]
fn stopping_midway_keeps_the_last_stage() {
	let scheduler = VirtualScheduler::new();
	let (mut simulator, updates) = recorded_start(&scheduler, SimulatorSchedule::default());

	scheduler.advance(Duration::from_secs(10));
	simulator.stop();
	scheduler.advance(Duration::from_secs(60));

	assert_eq!(*updates.borrow(), vec![snapshot(Status::Arriving, 3)]);
	assert_eq!(simulator.snapshot().status, Status::Arriving);
}

#[test]
fn dropping_the_simulator_cancels_its_timers() {
	let scheduler = VirtualScheduler::new();
	let (simulator, updates) = recorded_start(&scheduler, SimulatorSchedule::default());
	assert_eq!(scheduler.pending(), 4);

	drop(simulator);
	assert_eq!(scheduler.pending(), 0);
	scheduler.advance(Duration::from_secs(120));
	assert!(updates.borrow().is_empty());
}

#[test]
fn submitted_request_is_tracked_to_completion() {
	let draft = RequestDraft {
		issue_type: IssueType::TyreReplacement,
		location: String::from("  NH-48, Km 120  "),
		vehicle_type: String::from("SUV"),
	};
	let request: AssistanceRequest = draft.submit(String::from("REQ-ABC123")).expect("draft is complete");
	assert!(TrackerScreen::for_request(Some(&request)).shows_timeline());
	assert_eq!(request.location, "NH-48, Km 120");

	let scheduler = VirtualScheduler::new();
	let (simulator, _updates) = recorded_start(&scheduler, SimulatorSchedule::default());
	assert_eq!(eta_headline(&simulator.snapshot()).as_deref(), Some("Estimated Arrival: 12 min"));

	scheduler.advance(Duration::from_secs(15));
	assert_eq!(eta_headline(&simulator.snapshot()).as_deref(), Some("Service in Progress"));
	assert_eq!(
		timeline(&simulator.snapshot()),
		vec![
			(Status::Dispatched, StepState::Completed),
			(Status::Arriving, StepState::Completed),
			(Status::InProgress, StepState::Current),
			(Status::Completed, StepState::Pending),
		]
	);

	scheduler.advance(Duration::from_secs(10));
	assert_eq!(eta_headline(&simulator.snapshot()), None);
	let steps = timeline(&simulator.snapshot());
	assert!(steps[..3].iter().all(|&(_, state)| state == StepState::Completed));
	assert_eq!(steps[3], (Status::Completed, StepState::Current));
}
