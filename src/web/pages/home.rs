// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::REQUEST_HELP_PATH;
use crate::assistance::IssueType;
use leptos::prelude::*;

const STATS: [(&str, &str); 4] = [
	("15K+", "Rescues Completed"),
	("< 15min", "Avg. Response Time"),
	("98%", "Customer Satisfaction"),
	("500+", "Highway Coverage (km)"),
];

const FEATURES: [(&str, &str); 3] = [
	(
		"Faster Response",
		"Average arrival time under 15 minutes from nearby highway stations.",
	),
	(
		"Nearest Unit Dispatched",
		"Smart routing ensures the closest available unit reaches you first.",
	),
	("Safer Highways", "Trained professionals equipped for any roadside emergency."),
];

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<section id="home_hero">
			<h1>"Mobile Garage"</h1>
			<p class="home_hero_tagline">
				"Instant roadside repair and towing support on highways. "
				"Our mobile units are stationed nearby, ready to respond in minutes."
			</p>
			<div class="home_hero_actions">
				<a class="button button_hero" href=REQUEST_HELP_PATH>"Request Help Now"</a>
				<a class="button button_outline" href="#services">"View Services"</a>
			</div>
		</section>

		<section id="home_stats">
			{
				STATS
					.into_iter()
					.map(|(value, label)| view! {
						<div class="home_stat">
							<div class="home_stat_value">{value}</div>
							<div class="home_stat_label">{label}</div>
						</div>
					})
					.collect_view()
			}
		</section>

		<section id="home_features">
			<h2>"Why Choose Mobile Garage?"</h2>
			<p>"Traditional roadside assistance makes you wait. We bring the garage to you."</p>
			<div class="card_grid">
				{
					FEATURES
						.into_iter()
						.map(|(title, description)| view! {
							<div class="card">
								<h3>{title}</h3>
								<p>{description}</p>
							</div>
						})
						.collect_view()
				}
			</div>
		</section>

		<section id="services">
			<h2>"Our Services"</h2>
			<p>"Comprehensive roadside assistance for any situation"</p>
			<div class="card_grid">
				{
					IssueType::ALL
						.into_iter()
						.filter_map(|issue| issue.typical_duration().map(|duration| (issue, duration)))
						.map(|(issue, duration)| view! {
							<div class="card home_service">
								<h4>{issue.label()}</h4>
								<span class="home_service_time">{duration}</span>
							</div>
						})
						.collect_view()
				}
			</div>
		</section>

		<section id="home_call_to_action">
			<h2>"Stranded on the Highway?"</h2>
			<p>"Don't wait for hours. Get instant help from the nearest Mobile Garage unit."</p>
			<a class="button button_hero" href=REQUEST_HELP_PATH>"Request Help Now"</a>
		</section>
	}
}
