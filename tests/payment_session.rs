// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mobile_garage::payment::{PROCESSING_DELAY, PaymentMethod, PaymentSession, PaymentStage, PaymentState, ServiceBill};
use mobile_garage::timing::{VirtualScheduler, VirtualTimer};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

fn recorded_session() -> (PaymentSession<VirtualTimer>, Rc<RefCell<Vec<PaymentState>>>) {
	let updates = Rc::new(RefCell::new(Vec::new()));
	let recorder = Rc::clone(&updates);
	let session = PaymentSession::new(move |state: &PaymentState| recorder.borrow_mut().push(state.clone()));
	(session, updates)
}

#[test]
fn payment_completes_after_processing() {
	let scheduler = VirtualScheduler::new();
	let (mut session, updates) = recorded_session();

	assert!(session.pay(&scheduler, PROCESSING_DELAY, String::from("TXN-000000001")));
	assert_eq!(session.state().stage, PaymentStage::Processing);
	assert_eq!(
		session.state().pay_button_label(&ServiceBill::demo()),
		"Processing..."
	);

	scheduler.advance(PROCESSING_DELAY - Duration::from_millis(1));
	assert_eq!(session.state().transaction_id(), None);

	scheduler.advance(Duration::from_millis(1));
	assert_eq!(session.state().transaction_id(), Some("TXN-000000001"));

	let stages: Vec<PaymentStage> = updates.borrow().iter().map(|state| state.stage.clone()).collect();
	assert_eq!(
		stages,
		vec![
			PaymentStage::Processing,
			PaymentStage::Completed {
				transaction_id: String::from("TXN-000000001")
			},
		]
	);
}

#[test]
fn second_payment_is_rejected() {
	let scheduler = VirtualScheduler::new();
	let (mut session, updates) = recorded_session();

	assert!(session.pay(&scheduler, PROCESSING_DELAY, String::from("TXN-FIRST0000")));
	assert!(!session.pay(&scheduler, PROCESSING_DELAY, String::from("TXN-SECOND000")));
	assert_eq!(scheduler.pending(), 1);

	scheduler.advance(PROCESSING_DELAY);
	assert!(!session.pay(&scheduler, PROCESSING_DELAY, String::from("TXN-THIRD0000")));
	assert_eq!(session.state().transaction_id(), Some("TXN-FIRST0000"));
	assert_eq!(updates.borrow().len(), 2);
}

#[test]
fn method_can_only_change_before_paying() {
	let scheduler = VirtualScheduler::new();
	let (mut session, updates) = recorded_session();

	assert!(session.select_method(PaymentMethod::Cash));
	assert!(!session.select_method(PaymentMethod::Cash));
	assert_eq!(updates.borrow().len(), 1);

	session.pay(&scheduler, PROCESSING_DELAY, String::from("TXN-CASH00000"));
	assert!(!session.select_method(PaymentMethod::Online));
	assert!(session.state().is_selected(PaymentMethod::Cash));
}

#[test]
fn leaving_the_page_abandons_processing() {
	let scheduler = VirtualScheduler::new();
	let (mut session, updates) = recorded_session();

	session.pay(&scheduler, PROCESSING_DELAY, String::from("TXN-GONE00000"));
	drop(session);
	assert_eq!(scheduler.pending(), 0);

	scheduler.advance(Duration::from_secs(10));
	assert_eq!(updates.borrow().len(), 1);
	assert_eq!(updates.borrow()[0].stage, PaymentStage::Processing);
}
