// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::assistance::AssistanceRequest;
use crate::units::UnitDirectory;
use leptos::prelude::*;
use std::sync::Arc;

pub const HOME_PATH: &str = "/";
pub const REQUEST_HELP_PATH: &str = "/request-help";
pub const STATUS_PATH: &str = "/status";
pub const UNITS_PATH: &str = "/units";
pub const LOGIN_PATH: &str = "/login";
pub const CONTACT_PATH: &str = "/contact";
pub const PAYMENT_PATH: &str = "/payment";

/// The request currently being tracked, if any. Set by the request form and read by the status page.
#[derive(Clone, Copy)]
pub struct ActiveRequest(pub RwSignal<Option<AssistanceRequest>>);

/// Where the pages get service units from.
#[derive(Clone)]
pub struct UnitSource(pub Arc<dyn UnitDirectory + Send + Sync>);

pub fn use_active_request() -> ActiveRequest {
	expect_context()
}

pub fn use_unit_directory() -> Arc<dyn UnitDirectory + Send + Sync> {
	let UnitSource(directory) = expect_context();
	directory
}

pub fn tel_url(number: &str) -> String {
	let dialable: String = number.chars().filter(|c| !c.is_whitespace()).collect();
	format!("tel:{}", dialable)
}

/// The list of problems shown above a form that couldn't be submitted.
#[component]
pub fn SubmitErrors(errors: ReadSignal<Vec<String>>) -> impl IntoView {
	view! {
		<Show when=move || errors.with(|errors| !errors.is_empty())>
			<div class="form_submit_errors">
				<ul>
					<For
						each=move || errors.get()
						key=|error| error.clone()
						let(error)
					>
						<li>{error}</li>
					</For>
				</ul>
			</div>
		</Show>
	}
}
