// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::forms::{FormField, is_blank, looks_like_email};

pub const HELPLINE_NUMBER: &str = "1800-GARAGE";
pub const HELPLINE_DIGITS: &str = "427243";
pub const EMERGENCY_NUMBER: &str = "112";
pub const SUPPORT_EMAIL: &str = "help@mobilegarage.com";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContactField {
	Name,
	Email,
	Message,
}

impl FormField for ContactField {
	fn label(self) -> &'static str {
		match self {
			Self::Name => "Full Name",
			Self::Email => "Email",
			Self::Message => "Message",
		}
	}

	fn missing_message(self) -> String {
		match self {
			Self::Email => String::from("A valid email address is required"),
			field => format!("{} is required", field.label()),
		}
	}
}

/// The "Send us a Message" form. The phone number is optional.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactForm {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub message: String,
}

impl ContactForm {
	pub fn missing_fields(&self) -> Vec<ContactField> {
		let mut missing = Vec::new();
		if is_blank(&self.name) {
			missing.push(ContactField::Name);
		}
		if !looks_like_email(&self.email) {
			missing.push(ContactField::Email);
		}
		if is_blank(&self.message) {
			missing.push(ContactField::Message);
		}
		missing
	}
}

/// The message panel: either the form or the "sent" confirmation.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactPanel {
	pub form: ContactForm,
	pub sent: bool,
}

impl ContactPanel {
	/// Sends the message if every required field is filled in. Nothing leaves the page.
	pub fn submit(&mut self) -> Result<(), Vec<ContactField>> {
		let missing = self.form.missing_fields();
		if !missing.is_empty() {
			return Err(missing);
		}
		tracing::info!("Contact message accepted");
		self.sent = true;
		Ok(())
	}

	/// Back to an empty form, for "Send Another Message".
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled_form() -> ContactForm {
		ContactForm {
			name: String::from("Priya"),
			email: String::from("priya@example.com"),
			phone: String::new(),
			message: String::from("Where is my invoice?"),
		}
	}

	#[test]
	fn complete_form_flips_to_the_confirmation() {
		let mut panel = ContactPanel {
			form: filled_form(),
			sent: false,
		};
		assert_eq!(panel.submit(), Ok(()));
		assert!(panel.sent);
	}

	#[test]
	fn reset_returns_an_empty_form() {
		let mut panel = ContactPanel {
			form: filled_form(),
			sent: true,
		};
		panel.reset();
		assert_eq!(panel, ContactPanel::default());
		assert!(!panel.sent);
		assert!(panel.form.name.is_empty());
	}

	#[test]
	fn missing_required_fields_keep_the_form_open() {
		let mut panel = ContactPanel::default();
		panel.form.phone = String::from("+91 90000 00000");
		assert_eq!(
			panel.submit(),
			Err(vec![ContactField::Name, ContactField::Email, ContactField::Message])
		);
		assert!(!panel.sent);
	}

	#[test]
	fn phone_is_optional() {
		let form = filled_form();
		assert!(form.phone.is_empty());
		assert!(form.missing_fields().is_empty());
	}

	#[test]
	fn malformed_email_is_reported() {
		let mut form = filled_form();
		form.email = String::from("priya.example.com");
		assert_eq!(form.missing_fields(), vec![ContactField::Email]);
		assert_eq!(ContactField::Email.missing_message(), "A valid email address is required");
	}
}
