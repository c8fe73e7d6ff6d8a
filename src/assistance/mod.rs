// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod request;
mod simulator;
mod status;
mod tracker;

pub use request::{AssistanceRequest, IssueType, RequestDraft, RequestDraftStoreFields, RequestField};
pub use simulator::{SimulatorSchedule, StatusSimulator, TrackerSnapshot};
pub use status::{Status, StepState};
pub use tracker::{TrackerScreen, eta_headline, timeline};
