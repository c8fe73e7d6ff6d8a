// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::{CONTACT_PATH, HOME_PATH, LOGIN_PATH, REQUEST_HELP_PATH, STATUS_PATH, UNITS_PATH, tel_url};
use crate::contact::HELPLINE_NUMBER;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const NAV_LINKS: [(&str, &str); 4] = [
	(HOME_PATH, "Home"),
	(UNITS_PATH, "Live Units"),
	(STATUS_PATH, "Track Request"),
	(CONTACT_PATH, "Contact"),
];

#[component]
pub fn PageHeader() -> impl IntoView {
	let pathname = use_location().pathname;
	let link_class = move |path: &'static str| {
		move || {
			if pathname.get() == path {
				"header_nav_link header_nav_link_active"
			} else {
				"header_nav_link"
			}
		}
	};

	view! {
		<header id="header">
			<a id="header_brand" href=HOME_PATH>
				<span id="header_logo">"MG"</span>
				<span id="header_name">"Mobile Garage"</span>
			</a>
			<nav id="header_nav">
				{
					NAV_LINKS
						.into_iter()
						.map(|(path, label)| view! {
							<a class=link_class(path) href=path>{label}</a>
						})
						.collect_view()
				}
			</nav>
			<div id="header_actions">
				<a class="header_phone" href=tel_url(HELPLINE_NUMBER)>{HELPLINE_NUMBER}</a>
				<a class="button button_ghost" href=LOGIN_PATH>"Login"</a>
				<a class="button button_emergency" href=REQUEST_HELP_PATH>"Get Help"</a>
			</div>
		</header>
	}
}
