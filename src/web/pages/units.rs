// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::{REQUEST_HELP_PATH, use_unit_directory};
use crate::units::{FleetSummary, Unit, UnitFilter};
use leptos::prelude::*;

#[component]
pub fn LiveUnits() -> impl IntoView {
	let units = use_unit_directory().units();
	let summary = FleetSummary::of(&units);

	let (filter, set_filter) = signal(UnitFilter::All);
	let filtered_units = Memo::new(move |_| filter.get().apply(&units));

	view! {
		<div id="units_page" class="page">
			<h1>"Live Mobile Units"</h1>
			<p class="page_subtitle">"Real-time status of Mobile Garage units near your area"</p>

			<div class="units_summary">
				<span class="units_summary_available">{summary.available} " Available"</span>
				<span class="units_summary_on_duty">{summary.on_duty} " On Duty"</span>
			</div>

			<div class="units_filters">
				{
					UnitFilter::ALL
						.into_iter()
						.map(|option| view! {
							<button
								type="button"
								class=move || if filter.get() == option { "unit_filter unit_filter_active" } else { "unit_filter" }
								on:click=move |_| set_filter.set(option)
							>
								{option.label()}
							</button>
						})
						.collect_view()
				}
			</div>

			<div class="card units_map">
				<p class="units_map_title">"Highway NH-48 Coverage Map"</p>
				<p>"Simulated view of unit locations"</p>
			</div>

			<div class="card_grid">
				<For
					each=move || filtered_units.get()
					key=|unit| unit.id.clone()
					let(unit)
				>
					<UnitCard unit />
				</For>
			</div>

			<Show when=move || filtered_units.with(|units| units.is_empty())>
				<div id="units_empty">"No units found with the selected filter."</div>
			</Show>
		</div>
	}
}

#[component]
fn UnitCard(unit: Unit) -> impl IntoView {
	let available = unit.is_available();
	let eta_class = if available { "unit_eta unit_eta_available" } else { "unit_eta" };

	view! {
		<div class="card unit_card">
			<div class="unit_card_header">
				<div>
					<p class="unit_id monospace">{unit.id.clone()}</p>
					<h3>{unit.name.clone()}</h3>
				</div>
				<span class=format!("unit_status {}", unit.status.css_class())>{unit.status.label()}</span>
			</div>
			<p class="unit_location">{unit.location.clone()}</p>
			<p class="unit_distance">{unit.distance.clone()} " away"</p>
			<p class="unit_operator">{unit.operator.clone()}</p>
			<p class=eta_class>"ETA: " {unit.eta.clone()}</p>
			<ul class="unit_specialties">
				{
					unit
						.specialties
						.iter()
						.map(|specialty| view! { <li>{specialty.clone()}</li> })
						.collect_view()
				}
			</ul>
			{
				available.then(|| view! {
					<a class="button button_hero button_wide" href=REQUEST_HELP_PATH>"Request This Unit"</a>
				})
			}
		</div>
	}
}
