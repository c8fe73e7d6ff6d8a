// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::{SubmitErrors, tel_url};
use crate::contact::{ContactPanel, EMERGENCY_NUMBER, HELPLINE_DIGITS, HELPLINE_NUMBER, SUPPORT_EMAIL};
use crate::forms::missing_field_messages;
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

#[component]
pub fn Contact() -> impl IntoView {
	view! {
		<div id="contact_page" class="page">
			<h1>"Contact & Emergency"</h1>
			<p class="page_subtitle">
				"Get in touch with us or reach our emergency helpline for immediate assistance"
			</p>

			<div class="card contact_emergency">
				<div>
					<h3>"Highway Emergency?"</h3>
					<p>"Call our 24/7 emergency helpline for immediate assistance"</p>
				</div>
				<a class="button button_emergency" href=tel_url(HELPLINE_NUMBER)>{HELPLINE_NUMBER}</a>
			</div>

			<div class="contact_layout">
				<div class="contact_details">
					<div class="card">
						<h2>"Get in Touch"</h2>
						<h4>"Emergency Helpline"</h4>
						<a href=tel_url(HELPLINE_NUMBER)>{format!("{} ({})", HELPLINE_NUMBER, HELPLINE_DIGITS)}</a>
						<p class="muted">"Toll-free, 24/7 available"</p>
						<h4>"Email Support"</h4>
						<a href=format!("mailto:{}", SUPPORT_EMAIL)>{SUPPORT_EMAIL}</a>
						<p class="muted">"We respond within 24 hours"</p>
						<h4>"Head Office"</h4>
						<p>"Mobile Garage HQ" <br /> "Sector 44, Gurugram" <br /> "Haryana, India - 122003"</p>
						<h4>"Operating Hours"</h4>
						<p class="contact_hours">"24/7 Emergency Service"</p>
						<p class="muted">"Office: Mon-Sat, 9 AM - 6 PM"</p>
					</div>

					<div class="card">
						<h2>"Quick Actions"</h2>
						<a class="button button_emergency button_wide" href=tel_url(EMERGENCY_NUMBER)>
							"Life Emergency: Call " {EMERGENCY_NUMBER}
						</a>
						<a class="button button_hero button_wide" href=tel_url(HELPLINE_NUMBER)>
							"Call for Immediate Help"
						</a>
					</div>
				</div>

				<MessagePanel />
			</div>
		</div>
	}
}

#[component]
fn MessagePanel() -> impl IntoView {
	let panel = RwSignal::new(ContactPanel::default());
	let (submit_errors, set_submit_errors) = signal(Vec::<String>::new());

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();
		match panel.try_update(ContactPanel::submit) {
			Some(Err(missing)) => set_submit_errors.set(missing_field_messages(&missing)),
			_ => set_submit_errors.set(Vec::new()),
		}
	};

	let send_another = move |_: MouseEvent| panel.update(ContactPanel::reset);

	view! {
		<div class="card contact_message">
			<h2>"Send us a Message"</h2>
			<Show
				when=move || panel.with(|panel| panel.sent)
				fallback=move || view! {
					<form on:submit=form_submit>
						<SubmitErrors errors=submit_errors />
						<label class="form_field">
							<span class="form_label">"Full Name"</span>
							<input
								type="text"
								id="name"
								placeholder="Enter your name"
								required
								prop:value=move || panel.with(|panel| panel.form.name.clone())
								on:input=move |event| {
									let value = event_target_value(&event);
									panel.update(|panel| panel.form.name = value);
								}
							/>
						</label>
						<label class="form_field">
							<span class="form_label">"Email"</span>
							<input
								type="email"
								id="email"
								placeholder="Enter your email"
								required
								prop:value=move || panel.with(|panel| panel.form.email.clone())
								on:input=move |event| {
									let value = event_target_value(&event);
									panel.update(|panel| panel.form.email = value);
								}
							/>
						</label>
						<label class="form_field">
							<span class="form_label">"Phone Number"</span>
							<input
								type="tel"
								id="phone"
								placeholder="Enter your phone number"
								prop:value=move || panel.with(|panel| panel.form.phone.clone())
								on:input=move |event| {
									let value = event_target_value(&event);
									panel.update(|panel| panel.form.phone = value);
								}
							/>
						</label>
						<label class="form_field">
							<span class="form_label">"Message"</span>
							<textarea
								id="message"
								placeholder="How can we help you?"
								required
								prop:value=move || panel.with(|panel| panel.form.message.clone())
								on:input=move |event| {
									let value = event_target_value(&event);
									panel.update(|panel| panel.form.message = value);
								}
							></textarea>
						</label>
						<button type="submit" class="button button_hero button_wide">"Send Message"</button>
					</form>
				}
			>
				<div class="contact_sent">
					<h3>"Message Sent!"</h3>
					<p>"We'll get back to you within 24 hours."</p>
					<button type="button" class="button button_outline" on:click=send_another>
						"Send Another Message"
					</button>
				</div>
			</Show>
		</div>
	}
}
