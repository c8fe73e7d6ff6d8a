// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Display identifiers for requests and transactions.
//!
//! These only need to look unique to the person using the page; nothing is stored or looked up by them.

use rand::Rng;

const BASE36_CHARSET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

const REQUEST_ID_LENGTH: usize = 6;
const TRANSACTION_ID_LENGTH: usize = 9;

fn random_base36(rng: &mut impl Rng, len: usize) -> String {
	(0..len)
		.map(|_| BASE36_CHARSET[rng.gen_range(0..BASE36_CHARSET.len())] as char)
		.collect()
}

pub fn request_id_from(rng: &mut impl Rng) -> String {
	format!("REQ-{}", random_base36(rng, REQUEST_ID_LENGTH))
}

pub fn transaction_id_from(rng: &mut impl Rng) -> String {
	format!("TXN-{}", random_base36(rng, TRANSACTION_ID_LENGTH))
}

pub fn new_request_id() -> String {
	request_id_from(&mut rand::thread_rng())
}

pub fn new_transaction_id() -> String {
	transaction_id_from(&mut rand::thread_rng())
}
