// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::forms::{FormField, is_blank};
use reactive_stores::Store;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of roadside help the service offers.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssueType {
	OnSpotRepair,
	TyreReplacement,
	#[default]
	BatteryJumpStart,
	FuelAssistance,
	TowingService,
	Other,
}

impl IssueType {
	pub const ALL: [IssueType; 6] = [
		IssueType::OnSpotRepair,
		IssueType::TyreReplacement,
		IssueType::BatteryJumpStart,
		IssueType::FuelAssistance,
		IssueType::TowingService,
		IssueType::Other,
	];

	pub fn label(self) -> &'static str {
		match self {
			Self::OnSpotRepair => "On-spot Repair",
			Self::TyreReplacement => "Tyre Replacement",
			Self::BatteryJumpStart => "Battery Jump-start",
			Self::FuelAssistance => "Fuel Assistance",
			Self::TowingService => "Towing Service",
			Self::Other => "Other",
		}
	}

	/// Typical time on site, as advertised in the service list. [IssueType::Other] has no estimate.
	pub fn typical_duration(self) -> Option<&'static str> {
		match self {
			Self::OnSpotRepair => Some("~20 min"),
			Self::TyreReplacement => Some("~15 min"),
			Self::BatteryJumpStart => Some("~10 min"),
			Self::FuelAssistance => Some("~15 min"),
			Self::TowingService => Some("~25 min"),
			Self::Other => None,
		}
	}

	/// Stable value used for `<option>` elements.
	pub fn slug(self) -> &'static str {
		match self {
			Self::OnSpotRepair => "on-spot-repair",
			Self::TyreReplacement => "tyre-replacement",
			Self::BatteryJumpStart => "battery-jump-start",
			Self::FuelAssistance => "fuel-assistance",
			Self::TowingService => "towing-service",
			Self::Other => "other",
		}
	}

	pub fn from_slug(slug: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|issue| issue.slug() == slug)
	}
}

impl fmt::Display for IssueType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// A submitted request for help. This is what the request screen hands to the status tracker.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AssistanceRequest {
	pub id: String,
	pub issue_type: IssueType,
	pub location: String,
	pub vehicle_type: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequestField {
	Location,
	VehicleType,
}

impl FormField for RequestField {
	fn label(self) -> &'static str {
		match self {
			Self::Location => "Location",
			Self::VehicleType => "Vehicle type",
		}
	}
}

/// The help request form as the user is filling it in.
#[derive(Clone, Debug, Default, Store)]
pub struct RequestDraft {
	pub issue_type: IssueType,
	pub location: String,
	pub vehicle_type: String,
}

impl RequestDraft {
	pub fn missing_fields(&self) -> Vec<RequestField> {
		let mut missing = Vec::new();
		if is_blank(&self.location) {
			missing.push(RequestField::Location);
		}
		if is_blank(&self.vehicle_type) {
			missing.push(RequestField::VehicleType);
		}
		missing
	}

	/// Turns the draft into a request with the given identifier, or reports which required fields are empty.
	pub fn submit(&self, id: String) -> Result<AssistanceRequest, Vec<RequestField>> {
		let missing = self.missing_fields();
		if !missing.is_empty() {
			return Err(missing);
		}

		Ok(AssistanceRequest {
			id,
			issue_type: self.issue_type,
			location: self.location.trim().to_string(),
			vehicle_type: self.vehicle_type.trim().to_string(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn slugs_round_trip_for_every_issue_type() {
		for issue in IssueType::ALL {
			assert_eq!(IssueType::from_slug(issue.slug()), Some(issue));
		}
		assert_eq!(IssueType::from_slug("flat-battery"), None);
	}

	#[test]
	fn other_has_no_advertised_duration() {
		assert_eq!(IssueType::Other.typical_duration(), None);
		assert_eq!(IssueType::TowingService.typical_duration(), Some("~25 min"));
	}

	#[test]
	fn empty_draft_reports_both_required_fields() {
		let draft = RequestDraft::default();
		assert_eq!(
			draft.submit(String::from("REQ-000001")),
			Err(vec![RequestField::Location, RequestField::VehicleType])
		);
	}

	#[test]
	fn complete_draft_becomes_a_trimmed_request() {
		let draft = RequestDraft {
			issue_type: IssueType::TyreReplacement,
			location: String::from("  NH-48, Km 120  "),
			vehicle_type: String::from("SUV "),
		};
		let request = draft.submit(String::from("REQ-ABC123")).expect("draft is complete");
		assert_eq!(
			request,
			AssistanceRequest {
				id: String::from("REQ-ABC123"),
				issue_type: IssueType::TyreReplacement,
				location: String::from("NH-48, Km 120"),
				vehicle_type: String::from("SUV"),
			}
		);
	}
}
