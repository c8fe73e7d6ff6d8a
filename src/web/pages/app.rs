// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::contact::Contact;
use super::errors::not_found::NotFound;
use super::header::PageHeader;
use super::home::Home;
use super::login::Login;
use super::payment::Payment;
use super::request_help::RequestHelp;
use super::status::AssistanceStatus;
use super::units::LiveUnits;
use super::utils::{ActiveRequest, UnitSource};
use crate::units::StaticUnitDirectory;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use std::sync::Arc;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_context(ActiveRequest(RwSignal::new(None)));
	provide_context(UnitSource(Arc::new(StaticUnitDirectory::demo_fleet())));

	view! {
		<Stylesheet id="leptos" href="/pkg/mobile-garage.css" />
		<Title text="Mobile Garage" />

		<Router>
			<PageHeader />
			<main>
				<Routes fallback=|| view! { <NotFound /> }>
					<Route path=path!("/") view=Home />
					<Route path=path!("/request-help") view=RequestHelp />
					<Route path=path!("/status") view=AssistanceStatus />
					<Route path=path!("/units") view=LiveUnits />
					<Route path=path!("/login") view=Login />
					<Route path=path!("/contact") view=Contact />
					<Route path=path!("/payment") view=Payment />
				</Routes>
			</main>
		</Router>
	}
}
