// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Service units and where they come from.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnitStatus {
	Available,
	OnDuty,
	Maintenance,
}

impl UnitStatus {
	pub fn label(self) -> &'static str {
		match self {
			Self::Available => "Available",
			Self::OnDuty => "On Duty",
			Self::Maintenance => "Maintenance",
		}
	}

	pub fn css_class(self) -> &'static str {
		match self {
			Self::Available => "unit_status_available",
			Self::OnDuty => "unit_status_on_duty",
			Self::Maintenance => "unit_status_maintenance",
		}
	}
}

impl fmt::Display for UnitStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.label())
	}
}

/// A roadside service vehicle and its crew.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Unit {
	pub id: String,
	pub name: String,
	pub location: String,
	pub distance: String,
	pub status: UnitStatus,
	pub specialties: Vec<String>,
	pub operator: String,
	pub eta: String,
	/// Direct line to the operator, where one is published.
	pub operator_phone: Option<String>,
	pub experience_years: Option<u8>,
}

impl Unit {
	pub fn is_available(&self) -> bool {
		self.status == UnitStatus::Available
	}
}

/// The filter buttons on the unit list.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum UnitFilter {
	#[default]
	All,
	Available,
	OnDuty,
}

impl UnitFilter {
	pub const ALL: [UnitFilter; 3] = [UnitFilter::All, UnitFilter::Available, UnitFilter::OnDuty];

	pub fn label(self) -> &'static str {
		match self {
			Self::All => "All Units",
			Self::Available => "Available",
			Self::OnDuty => "On Duty",
		}
	}

	pub fn matches(self, unit: &Unit) -> bool {
		match self {
			Self::All => true,
			Self::Available => unit.status == UnitStatus::Available,
			Self::OnDuty => unit.status == UnitStatus::OnDuty,
		}
	}

	pub fn apply(self, units: &[Unit]) -> Vec<Unit> {
		units.iter().filter(|unit| self.matches(unit)).cloned().collect()
	}
}

/// Headline numbers shown above the unit list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FleetSummary {
	pub available: usize,
	pub on_duty: usize,
	pub maintenance: usize,
}

impl FleetSummary {
	pub fn of(units: &[Unit]) -> Self {
		let mut summary = Self::default();
		for unit in units {
			match unit.status {
				UnitStatus::Available => summary.available += 1,
				UnitStatus::OnDuty => summary.on_duty += 1,
				UnitStatus::Maintenance => summary.maintenance += 1,
			}
		}
		summary
	}
}

/// Somewhere the pages can get the current list of units from.
pub trait UnitDirectory {
	fn units(&self) -> Vec<Unit>;

	/// The unit that would be sent to a new request: the first available one in directory order.
	fn assign_unit(&self) -> Option<Unit> {
		self.units().into_iter().find(Unit::is_available)
	}
}

/// A fixed list of units. This is what the pages use until there's a real fleet feed.
#[derive(Clone, Debug)]
pub struct StaticUnitDirectory {
	units: Vec<Unit>,
}

impl StaticUnitDirectory {
	pub fn new(units: Vec<Unit>) -> Self {
		Self { units }
	}

	/// The NH-48 demonstration fleet.
	pub fn demo_fleet() -> Self {
		Self::new(vec![
			unit(
				"MG-001",
				"Unit Alpha-1",
				"NH-48, Km 120, Near Manesar Toll",
				"2.3 km",
				UnitStatus::Available,
				&["Tyre Service", "Battery", "Minor Repairs"],
				"Rajesh Kumar",
				"8 min",
			)
			.with_operator_details("+91 98765 43210", 5),
			unit(
				"MG-002",
				"Unit Beta-3",
				"NH-48, Km 135, Near Panchgaon",
				"4.1 km",
				UnitStatus::Available,
				&["Engine Repair", "Towing", "Fuel Service"],
				"Vikram Singh",
				"12 min",
			),
			unit(
				"MG-003",
				"Unit Gamma-2",
				"NH-48, Km 110, Near Bilaspur Chowk",
				"5.8 km",
				UnitStatus::OnDuty,
				&["Full Service", "Accident Recovery"],
				"Anil Sharma",
				"Currently busy",
			),
			unit(
				"MG-004",
				"Unit Delta-5",
				"NH-48, Km 145, Near IMT Manesar",
				"7.2 km",
				UnitStatus::Available,
				&["Commercial Vehicles", "Heavy Towing"],
				"Suresh Yadav",
				"18 min",
			),
			unit(
				"MG-005",
				"Unit Echo-1",
				"NH-48, Km 100, Near HUDA City Centre",
				"8.5 km",
				UnitStatus::Maintenance,
				&["All Services"],
				"Under Maintenance",
				"Unavailable",
			),
			unit(
				"MG-006",
				"Unit Foxtrot-4",
				"NH-48, Km 155, Near Dharuhera",
				"12.3 km",
				UnitStatus::Available,
				&["24/7 Service", "Long Distance Towing"],
				"Mohit Tanwar",
				"25 min",
			),
		])
	}
}

impl UnitDirectory for StaticUnitDirectory {
	fn units(&self) -> Vec<Unit> {
		self.units.clone()
	}
}

#[allow(clippy::too_many_arguments)]
fn unit(
	id: &str,
	name: &str,
	location: &str,
	distance: &str,
	status: UnitStatus,
	specialties: &[&str],
	operator: &str,
	eta: &str,
) -> Unit {
	Unit {
		id: id.to_string(),
		name: name.to_string(),
		location: location.to_string(),
		distance: distance.to_string(),
		status,
		specialties: specialties.iter().map(|specialty| specialty.to_string()).collect(),
		operator: operator.to_string(),
		eta: eta.to_string(),
		operator_phone: None,
		experience_years: None,
	}
}

impl Unit {
	fn with_operator_details(mut self, phone: &str, experience_years: u8) -> Self {
		self.operator_phone = Some(phone.to_string());
		self.experience_years = Some(experience_years);
		self
	}
}
