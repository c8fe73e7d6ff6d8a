// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::{PAYMENT_PATH, REQUEST_HELP_PATH, tel_url, use_active_request, use_unit_directory};
use crate::assistance::{
	AssistanceRequest, SimulatorSchedule, Status, StatusSimulator, StepState, TrackerScreen, TrackerSnapshot,
	eta_headline, timeline,
};
use crate::contact::HELPLINE_NUMBER;
use crate::units::Unit;
use crate::web::timers::{BrowserScheduler, BrowserTimer};
use leptos::prelude::*;

#[component]
pub fn AssistanceStatus() -> impl IntoView {
	let active_request = use_active_request();

	move || {
		let request = active_request.0.get();
		match TrackerScreen::for_request(request.as_ref()) {
			TrackerScreen::Tracking(request) => view! { <StatusTracker request=request.clone() /> }.into_any(),
			TrackerScreen::NoActiveRequest => view! { <NoActiveRequest /> }.into_any(),
		}
	}
}

#[component]
fn NoActiveRequest() -> impl IntoView {
	view! {
		<div id="status_empty" class="page page_narrow">
			<div class="card card_centered">
				<h2>"No Active Request"</h2>
				<p>"You don't have an active assistance request."</p>
				<a class="button button_hero" href=REQUEST_HELP_PATH>"Request Help Now"</a>
			</div>
		</div>
	}
}

#[component]
fn StatusTracker(request: AssistanceRequest) -> impl IntoView {
	let schedule = SimulatorSchedule::default();
	let (snapshot, set_snapshot) = signal(TrackerSnapshot::initial(&schedule));

	// Timers only exist in the browser, so the simulator is started from an effect rather than during rendering.
	let simulator = StoredValue::new_local(None::<StatusSimulator<BrowserTimer>>);
	Effect::new(move |_| {
		let running = StatusSimulator::start(&BrowserScheduler, schedule, move |update| set_snapshot.set(update));
		simulator.set_value(Some(running));
	});
	on_cleanup(move || {
		simulator.try_update_value(|simulator| {
			if let Some(mut simulator) = simulator.take() {
				simulator.stop();
			}
		});
	});

	let assigned_unit = use_unit_directory().assign_unit();

	view! {
		<div id="status_page" class="page page_narrow">
			<div class="status_header">
				<span class="status_badge">"Help is on the way!"</span>
				<h1>"Assistance Status"</h1>
				<p>"Request ID: " <span class="monospace">{request.id.clone()}</span></p>
			</div>

			{
				move || {
					let current = snapshot.get();
					eta_headline(&current).map(|headline| view! {
						<div class="card status_eta_card">
							<span class="status_eta_headline">{headline}</span>
							{
								current
									.status
									.counts_down()
									.then(|| view! { <p>"Our technician is heading to your location"</p> })
							}
						</div>
					})
				}
			}

			<div class="card">
				<h2>"Service Progress"</h2>
				<ol class="status_timeline">
					{
						move || {
							timeline(&snapshot.get())
								.into_iter()
								.map(|(step, state)| view! { <StatusStep step state /> })
								.collect_view()
						}
					}
				</ol>
			</div>

			<div class="card">
				<h2>"Request Details"</h2>
				<dl class="detail_list">
					<dt>"Location"</dt>
					<dd>{request.location.clone()}</dd>
					<dt>"Issue Type"</dt>
					<dd>{request.issue_type.label()}</dd>
					<dt>"Vehicle"</dt>
					<dd>{request.vehicle_type.clone()}</dd>
				</dl>
			</div>

			{assigned_unit.map(|unit| view! { <AssignedUnit unit /> })}

			<Show when=move || snapshot.get().status == Status::Completed>
				<div class="card card_centered status_completed">
					<h3>"Service Completed!"</h3>
					<p>"Your vehicle is ready. Thank you for choosing Mobile Garage."</p>
					<a class="button button_hero" href=PAYMENT_PATH>"Proceed to Payment"</a>
				</div>
			</Show>

			<div class="status_support">
				<p>"Need help?"</p>
				<a class="button button_ghost" href=tel_url(HELPLINE_NUMBER)>
					"Contact Support: " {HELPLINE_NUMBER}
				</a>
			</div>
		</div>
	}
}

#[component]
fn StatusStep(step: Status, state: StepState) -> impl IntoView {
	let marker = match state {
		StepState::Completed => String::from("✓"),
		_ => (step.index() + 1).to_string(),
	};

	view! {
		<li class=format!("status_step {}", state.css_class())>
			<span class="status_step_marker">{marker}</span>
			<div class="status_step_text">
				<p class="status_step_label">{step.label()}</p>
				<p class="status_step_description">{step.description()}</p>
			</div>
		</li>
	}
}

#[component]
fn AssignedUnit(unit: Unit) -> impl IntoView {
	let summary = match unit.experience_years {
		Some(years) => format!("{} • {} years experience", unit.name, years),
		None => unit.name.clone(),
	};

	view! {
		<div class="card unit_card">
			<h2>"Assigned Unit"</h2>
			<p class="unit_operator">{unit.operator.clone()}</p>
			<p class="unit_summary">{summary}</p>
			{
				unit.operator_phone.as_deref().map(|phone| view! {
					<div class="unit_actions">
						<a class="button button_hero" href=tel_url(phone)>"Call Technician"</a>
						<a class="button button_outline" href=format!("sms:{}", phone.replace(' ', ""))>"Message"</a>
					</div>
				})
			}
		</div>
	}
}
