// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The demo checkout. Nothing is charged; "processing" is a fixed wait on the scheduler.

use crate::timing::{Scheduler, TimerHandle};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// How long the checkout pretends to talk to a payment provider.
pub const PROCESSING_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PaymentMethod {
	#[default]
	Online,
	Cash,
}

impl PaymentMethod {
	pub const ALL: [PaymentMethod; 2] = [PaymentMethod::Online, PaymentMethod::Cash];

	pub fn label(self) -> &'static str {
		match self {
			Self::Online => "Online Payment",
			Self::Cash => "Cash on Service",
		}
	}

	pub fn detail(self) -> &'static str {
		match self {
			Self::Online => "UPI, Card, Net Banking",
			Self::Cash => "Pay directly to technician",
		}
	}
}

pub fn format_rupees(amount: u32) -> String {
	format!("₹{}", amount)
}

/// Charges for a completed job, in whole rupees.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceBill {
	pub service: String,
	pub base_price: u32,
	pub parts_cost: u32,
	pub labor_charge: u32,
	pub convenience_fee: u32,
}

impl ServiceBill {
	/// The bill shown after the simulated job.
	pub fn demo() -> Self {
		Self {
			service: String::from("Battery Jump-start"),
			base_price: 200,
			parts_cost: 0,
			labor_charge: 150,
			convenience_fee: 50,
		}
	}

	pub fn total(&self) -> u32 {
		self.base_price + self.parts_cost + self.labor_charge + self.convenience_fee
	}
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum PaymentStage {
	#[default]
	Choosing,
	Processing,
	Completed {
		transaction_id: String,
	},
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PaymentState {
	pub method: PaymentMethod,
	pub stage: PaymentStage,
}

impl PaymentState {
	/// Changes the selected method. Only possible before paying; returns whether the selection changed.
	pub fn select_method(&mut self, method: PaymentMethod) -> bool {
		if self.stage != PaymentStage::Choosing || self.method == method {
			return false;
		}
		self.method = method;
		true
	}

	pub fn is_selected(&self, method: PaymentMethod) -> bool {
		self.method == method
	}

	pub fn transaction_id(&self) -> Option<&str> {
		match &self.stage {
			PaymentStage::Completed { transaction_id } => Some(transaction_id.as_str()),
			_ => None,
		}
	}

	pub fn can_pay(&self) -> bool {
		self.stage == PaymentStage::Choosing
	}

	pub fn pay_button_label(&self, bill: &ServiceBill) -> String {
		match (&self.stage, self.method) {
			(PaymentStage::Processing, _) => String::from("Processing..."),
			(_, PaymentMethod::Cash) => String::from("Confirm Cash Payment"),
			(_, PaymentMethod::Online) => format!("Pay {}", format_rupees(bill.total())),
		}
	}
}

type Observer = Rc<dyn Fn(&PaymentState)>;

/// A checkout in progress. Dropping the session abandons any payment that is still processing.
pub struct PaymentSession<H: TimerHandle> {
	state: Rc<RefCell<PaymentState>>,
	observer: Observer,
	pending: Option<H>,
}

impl<H: TimerHandle> PaymentSession<H> {
	pub fn new(observer: impl Fn(&PaymentState) + 'static) -> Self {
		Self {
			state: Rc::new(RefCell::new(PaymentState::default())),
			observer: Rc::new(observer),
			pending: None,
		}
	}

	pub fn state(&self) -> PaymentState {
		self.state.borrow().clone()
	}

	pub fn select_method(&mut self, method: PaymentMethod) -> bool {
		let changed = self.state.borrow_mut().select_method(method);
		if changed {
			self.notify();
		}
		changed
	}

	/// Starts processing. Completion is reported `delay` later with the given transaction id.
	/// Returns `false` without doing anything if a payment has already been started.
	pub fn pay<S>(&mut self, scheduler: &S, delay: Duration, transaction_id: String) -> bool
	where
		S: Scheduler<Handle = H>,
	{
		{
			let mut state = self.state.borrow_mut();
			if !state.can_pay() {
				return false;
			}
			state.stage = PaymentStage::Processing;
		}
		tracing::info!(method = ?self.state.borrow().method, "Processing demo payment");
		self.notify();

		let state = Rc::clone(&self.state);
		let observer = Rc::clone(&self.observer);
		self.pending = Some(scheduler.schedule_once(
			delay,
			Box::new(move || {
				let completed = {
					let mut state = state.borrow_mut();
					if state.stage != PaymentStage::Processing {
						return;
					}
					state.stage = PaymentStage::Completed { transaction_id };
					state.clone()
				};
				observer(&completed);
			}),
		));
		true
	}

	/// Abandons a payment that is still processing. The state is left as it was.
	pub fn cancel(&mut self) {
		if let Some(timer) = self.pending.take() {
			timer.cancel();
		}
	}

	fn notify(&self) {
		let state = self.state();
		(self.observer)(&state);
	}
}

impl<H: TimerHandle> Drop for PaymentSession<H> {
	fn drop(&mut self) {
		self.cancel();
	}
}
