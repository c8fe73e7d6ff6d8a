// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::HOME_PATH;
use crate::ids::new_transaction_id;
use crate::payment::{PROCESSING_DELAY, PaymentMethod, PaymentSession, PaymentState, ServiceBill, format_rupees};
use crate::web::timers::{BrowserScheduler, BrowserTimer};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Payment() -> impl IntoView {
	let bill = StoredValue::new(ServiceBill::demo());
	let state = RwSignal::new(PaymentState::default());
	let session = StoredValue::new_local(PaymentSession::<BrowserTimer>::new(move |update| state.set(update.clone())));
	on_cleanup(move || {
		session.try_update_value(|session| session.cancel());
	});

	let transaction_id = Memo::new(move |_| state.with(|state| state.transaction_id().map(String::from)));

	let select_method = move |method: PaymentMethod| {
		session.update_value(|session| {
			session.select_method(method);
		});
	};

	let pay = move |_: MouseEvent| {
		session.update_value(|session| {
			session.pay(&BrowserScheduler, PROCESSING_DELAY, new_transaction_id());
		});
	};

	move || match transaction_id.get() {
		Some(transaction_id) => view! { <PaymentSuccess transaction_id /> }.into_any(),
		None => view! {
			<div id="payment_page" class="page page_narrow">
				<h1>"Payment"</h1>
				<p class="page_subtitle">"Complete your payment for the service"</p>

				<div class="card">
					<h2>"Service Summary"</h2>
					{
						bill.with_value(|bill| view! {
							<dl class="detail_list payment_bill">
								<dt>"Service"</dt>
								<dd>{bill.service.clone()}</dd>
								<dt>"Base Price"</dt>
								<dd>{format_rupees(bill.base_price)}</dd>
								<dt>"Parts"</dt>
								<dd>{format_rupees(bill.parts_cost)}</dd>
								<dt>"Labor"</dt>
								<dd>{format_rupees(bill.labor_charge)}</dd>
								<dt>"Convenience Fee"</dt>
								<dd>{format_rupees(bill.convenience_fee)}</dd>
								<dt class="payment_total">"Total"</dt>
								<dd class="payment_total">{format_rupees(bill.total())}</dd>
							</dl>
						})
					}
				</div>

				<div class="card">
					<h2>"Payment Method"</h2>
					<div class="payment_methods">
						{
							PaymentMethod::ALL
								.into_iter()
								.map(|method| view! {
									<button
										type="button"
										class=move || {
											if state.with(|state| state.is_selected(method)) {
												"payment_method payment_method_selected"
											} else {
												"payment_method"
											}
										}
										disabled=move || !state.with(PaymentState::can_pay)
										on:click=move |_| select_method(method)
									>
										<span class="payment_method_label">{method.label()}</span>
										<span class="payment_method_detail">{method.detail()}</span>
									</button>
								})
								.collect_view()
						}
					</div>

					<Show when=move || state.with(|state| state.is_selected(PaymentMethod::Online))>
						<div class="payment_card_form">
							<label class="form_field">
								<span class="form_label">"Card Number"</span>
								<input type="text" id="card_number" placeholder="1234 5678 9012 3456" />
							</label>
							<div class="form_row">
								<label class="form_field">
									<span class="form_label">"Expiry"</span>
									<input type="text" id="card_expiry" placeholder="MM/YY" />
								</label>
								<label class="form_field">
									<span class="form_label">"CVV"</span>
									<input type="password" id="card_cvv" placeholder="123" maxlength="3" />
								</label>
							</div>
						</div>
					</Show>
				</div>

				<button
					type="button"
					class="button button_hero button_wide"
					disabled=move || !state.with(PaymentState::can_pay)
					on:click=pay
				>
					{move || state.with(|state| bill.with_value(|bill| state.pay_button_label(bill)))}
				</button>

				<p class="payment_terms">"By proceeding, you agree to our Terms of Service and Privacy Policy"</p>
			</div>
		}
		.into_any(),
	}
}

#[component]
fn PaymentSuccess(transaction_id: String) -> impl IntoView {
	view! {
		<div id="payment_success" class="page page_narrow">
			<div class="card card_centered">
				<h2>"Payment Successful!"</h2>
				<p>"Thank you for choosing Mobile Garage"</p>
				<p>"Transaction ID: " <span class="monospace">{transaction_id}</span></p>
				<a class="button button_hero" href=HOME_PATH>"Back to Home"</a>
			</div>
		</div>
	}
}
