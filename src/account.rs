// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The login/signup screen. There is no account backend; both modes just let the user through.

use crate::forms::{FormField, is_blank};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum AuthMode {
	#[default]
	Login,
	Signup,
}

impl AuthMode {
	pub fn toggled(self) -> Self {
		match self {
			Self::Login => Self::Signup,
			Self::Signup => Self::Login,
		}
	}

	pub fn heading(self) -> &'static str {
		match self {
			Self::Login => "Welcome Back",
			Self::Signup => "Create Account",
		}
	}

	pub fn tagline(self) -> &'static str {
		match self {
			Self::Login => "Log in to manage your requests",
			Self::Signup => "Sign up for faster assistance",
		}
	}

	pub fn card_title(self) -> &'static str {
		match self {
			Self::Login => "Login",
			Self::Signup => "Sign Up",
		}
	}

	pub fn card_description(self) -> &'static str {
		match self {
			Self::Login => "Enter your phone number to continue",
			Self::Signup => "Create an account for a better experience",
		}
	}

	pub fn submit_label(self) -> &'static str {
		match self {
			Self::Login => "Continue",
			Self::Signup => "Create Account",
		}
	}

	pub fn collects_profile(self) -> bool {
		self == Self::Signup
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AccountField {
	Name,
	Phone,
}

impl FormField for AccountField {
	fn label(self) -> &'static str {
		match self {
			Self::Name => "Full Name",
			Self::Phone => "Phone Number",
		}
	}
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AccountForm {
	pub name: String,
	pub phone: String,
	/// Optional, and only asked for when signing up.
	pub vehicle_type: String,
}

impl AccountForm {
	/// Required fields that are empty for the given mode. Fields hidden in that mode are never required.
	pub fn missing_fields(&self, mode: AuthMode) -> Vec<AccountField> {
		let mut missing = Vec::new();
		if mode.collects_profile() && is_blank(&self.name) {
			missing.push(AccountField::Name);
		}
		if is_blank(&self.phone) {
			missing.push(AccountField::Phone);
		}
		missing
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggling_twice_returns_to_login() {
		let mode = AuthMode::default();
		assert_eq!(mode.toggled(), AuthMode::Signup);
		assert_eq!(mode.toggled().toggled(), AuthMode::Login);
	}

	#[test]
	fn login_only_needs_a_phone_number() {
		let form = AccountForm {
			phone: String::from("+91 98765 43210"),
			..AccountForm::default()
		};
		assert!(form.missing_fields(AuthMode::Login).is_empty());
		assert_eq!(form.missing_fields(AuthMode::Signup), vec![AccountField::Name]);
	}

	#[test]
	fn vehicle_type_is_never_required() {
		let form = AccountForm {
			name: String::from("Asha"),
			phone: String::from("98765"),
			vehicle_type: String::new(),
		};
		assert!(form.missing_fields(AuthMode::Signup).is_empty());
	}

	#[test]
	fn empty_form_is_missing_everything_signup_asks_for() {
		assert_eq!(
			AccountForm::default().missing_fields(AuthMode::Signup),
			vec![AccountField::Name, AccountField::Phone]
		);
	}
}
