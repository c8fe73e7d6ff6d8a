// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Checks shared by the page forms. These match what the browser would enforce for `required` and
//! `type="email"` inputs, so a form that passes here is one the browser would have let through.

/// A field the user has to fill in before a form can be submitted.
pub trait FormField: Copy {
	fn label(self) -> &'static str;

	fn missing_message(self) -> String {
		format!("{} is required", self.label())
	}
}

pub fn is_blank(value: &str) -> bool {
	value.trim().is_empty()
}

pub fn looks_like_email(value: &str) -> bool {
	let value = value.trim();
	match value.split_once('@') {
		Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
		None => false,
	}
}

/// Turns a list of missing fields into the messages shown above a form.
pub fn missing_field_messages<F: FormField>(fields: &[F]) -> Vec<String> {
	fields.iter().map(|field| field.missing_message()).collect()
}
