// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::{STATUS_PATH, SubmitErrors, use_active_request};
use crate::assistance::{IssueType, RequestDraft, RequestDraftStoreFields};
use crate::forms::missing_field_messages;
use crate::ids::new_request_id;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use reactive_stores::Store;

#[component]
pub fn RequestHelp() -> impl IntoView {
	let active_request = use_active_request();
	let draft = Store::new(RequestDraft::default());
	let (submit_errors, set_submit_errors) = signal(Vec::<String>::new());
	let navigate = use_navigate();

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();

		match draft.with_untracked(|draft| draft.submit(new_request_id())) {
			Ok(request) => {
				tracing::info!(request_id = %request.id, issue = %request.issue_type, "Help requested");
				set_submit_errors.set(Vec::new());
				active_request.0.set(Some(request));
				navigate(STATUS_PATH, Default::default());
			}
			Err(missing) => set_submit_errors.set(missing_field_messages(&missing)),
		}
	};

	view! {
		<div id="request_help_page" class="page page_narrow">
			<h1>"Request Roadside Help"</h1>
			<p class="page_subtitle">"Tell us what happened and where you are. The nearest unit will be dispatched."</p>

			<form class="card" on:submit=form_submit>
				<SubmitErrors errors=submit_errors />
				<label class="form_field">
					<span class="form_label">"What's the problem?"</span>
					<select
						id="issue_type"
						on:change=move |event| {
							if let Some(issue) = IssueType::from_slug(&event_target_value(&event)) {
								draft.issue_type().set(issue);
							}
						}
					>
						{
							IssueType::ALL
								.into_iter()
								.map(|issue| view! {
									<option
										value=issue.slug()
										selected=move || draft.issue_type().get() == issue
									>
										{issue.label()}
									</option>
								})
								.collect_view()
						}
					</select>
				</label>
				<label class="form_field">
					<span class="form_label">"Location"</span>
					<input
						type="text"
						id="location"
						placeholder="e.g. NH-48, Km 120, near Manesar Toll"
						required
						prop:value=move || draft.location().get()
						on:input=move |event| draft.location().set(event_target_value(&event))
					/>
				</label>
				<label class="form_field">
					<span class="form_label">"Vehicle Type"</span>
					<input
						type="text"
						id="vehicle_type"
						placeholder="e.g. Sedan, SUV, Truck"
						required
						prop:value=move || draft.vehicle_type().get()
						on:input=move |event| draft.vehicle_type().set(event_target_value(&event))
					/>
				</label>
				<button type="submit" class="button button_hero button_wide">"Dispatch Help"</button>
			</form>
		</div>
	}
}
