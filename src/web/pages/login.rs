// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::{REQUEST_HELP_PATH, SubmitErrors};
use crate::account::{AccountForm, AuthMode};
use crate::forms::missing_field_messages;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Login() -> impl IntoView {
	let (mode, set_mode) = signal(AuthMode::default());
	let (name, set_name) = signal(String::new());
	let (phone, set_phone) = signal(String::new());
	let (vehicle_type, set_vehicle_type) = signal(String::new());
	let (submit_errors, set_submit_errors) = signal(Vec::<String>::new());

	let form_submit = {
		let navigate = use_navigate();
		move |event: SubmitEvent| {
			event.prevent_default();

			let form = AccountForm {
				name: name.get_untracked(),
				phone: phone.get_untracked(),
				vehicle_type: vehicle_type.get_untracked(),
			};
			let missing = form.missing_fields(mode.get_untracked());
			if !missing.is_empty() {
				set_submit_errors.set(missing_field_messages(&missing));
				return;
			}

			set_submit_errors.set(Vec::new());
			tracing::info!(mode = ?mode.get_untracked(), "Continuing to request form");
			navigate(REQUEST_HELP_PATH, Default::default());
		}
	};

	let continue_as_guest = {
		let navigate = use_navigate();
		move |_: MouseEvent| navigate(REQUEST_HELP_PATH, Default::default())
	};

	let toggle_mode = move |_: MouseEvent| {
		set_submit_errors.set(Vec::new());
		set_mode.update(|mode| *mode = mode.toggled());
	};

	view! {
		<div id="login_page" class="page page_narrow">
			<div class="login_header">
				<h1>{move || mode.get().heading()}</h1>
				<p>{move || mode.get().tagline()}</p>
			</div>

			<div class="card">
				<h2>{move || mode.get().card_title()}</h2>
				<p class="card_description">{move || mode.get().card_description()}</p>

				<form on:submit=form_submit>
					<SubmitErrors errors=submit_errors />
					<Show when=move || mode.get().collects_profile()>
						<label class="form_field">
							<span class="form_label">"Full Name"</span>
							<input type="text" id="name" placeholder="Enter your name" required bind:value=(name, set_name) />
						</label>
					</Show>
					<label class="form_field">
						<span class="form_label">"Phone Number"</span>
						<input
							type="tel"
							id="phone"
							placeholder="Enter your phone number"
							required
							bind:value=(phone, set_phone)
						/>
					</label>
					<Show when=move || mode.get().collects_profile()>
						<label class="form_field">
							<span class="form_label">"Vehicle Type (Optional)"</span>
							<input
								type="text"
								id="vehicle"
								placeholder="e.g., Sedan, SUV"
								bind:value=(vehicle_type, set_vehicle_type)
							/>
						</label>
					</Show>
					<button type="submit" class="button button_hero button_wide">
						{move || mode.get().submit_label()}
					</button>
				</form>

				<div class="login_divider">"or"</div>

				<button type="button" class="button button_outline button_wide" on:click=continue_as_guest>
					"Continue as Guest"
				</button>

				<p class="login_toggle">
					{move || match mode.get() {
						AuthMode::Login => "Don't have an account? ",
						AuthMode::Signup => "Already have an account? ",
					}}
					<button type="button" class="link_button" on:click=toggle_mode>
						{move || mode.get().toggled().card_title()}
					</button>
				</p>
			</div>

			<p class="login_emergency">
				"Emergency? Skip login and " <a href=REQUEST_HELP_PATH>"request help now"</a>
			</p>
		</div>
	}
}
