//! Three-step travel order form: detail, schedule, participants.
//!
//! Navigation is pure sequencing. Nothing leaves the wizard until the final
//! step is confirmed, and moving back never clears collected fields.

use serde::Serialize;

use super::RosterDraft;
use crate::models::{
    trip_duration_days, EmployeeOption, OrderStatus, ParticipantRequest, ParticipantRole,
    TransportMode, TravelOrderDetail, TravelOrderRequest,
};
use crate::validation::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Detail,
    Schedule,
    Participants,
}

impl WizardStep {
    fn next(self) -> Option<Self> {
        match self {
            WizardStep::Detail => Some(WizardStep::Schedule),
            WizardStep::Schedule => Some(WizardStep::Participants),
            WizardStep::Participants => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            WizardStep::Detail => None,
            WizardStep::Schedule => Some(WizardStep::Detail),
            WizardStep::Participants => Some(WizardStep::Schedule),
        }
    }
}

/// Result of confirming the current step.
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    Moved(WizardStep),
    Submit(TravelOrderRequest),
}

/// Scalar fields collected on the first two steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFields {
    pub order_number: String,
    pub purpose: String,
    pub legal_basis: String,
    pub signing_official_id: Option<String>,
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
    pub transport_mode: TransportMode,
    pub status: OrderStatus,
}

#[derive(Debug, Clone)]
pub struct OrderWizard {
    step: WizardStep,
    pub fields: OrderFields,
    roster: RosterDraft,
    employees: Vec<EmployeeOption>,
}

impl OrderWizard {
    /// A blank form with the office's default origin.
    pub fn new(default_origin: impl Into<String>, employees: Vec<EmployeeOption>) -> Self {
        Self {
            step: WizardStep::Detail,
            fields: OrderFields {
                origin: default_origin.into(),
                ..OrderFields::default()
            },
            roster: RosterDraft::new(),
            employees,
        }
    }

    /// A form prefilled from an existing order for editing.
    pub fn for_edit(detail: &TravelOrderDetail, employees: Vec<EmployeeOption>) -> Self {
        let order = &detail.order;
        Self {
            step: WizardStep::Detail,
            fields: OrderFields {
                order_number: order.order_number.clone(),
                purpose: order.purpose.clone(),
                legal_basis: order.legal_basis.clone(),
                signing_official_id: order.signing_official_id.clone(),
                origin: order.origin.clone(),
                destination: order.destination.clone(),
                departure_date: order.departure_date.format("%Y-%m-%d").to_string(),
                return_date: order.return_date.format("%Y-%m-%d").to_string(),
                transport_mode: order.transport_mode,
                status: order.status,
            },
            roster: RosterDraft::from_entries(detail.roster()),
            employees,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn roster(&self) -> &RosterDraft {
        &self.roster
    }

    pub fn into_employees(self) -> Vec<EmployeeOption> {
        self.employees
    }

    pub fn add_participant(&mut self, employee_id: &str) -> bool {
        self.roster.add(employee_id)
    }

    pub fn remove_participant(&mut self, employee_id: &str) -> bool {
        self.roster.remove(employee_id)
    }

    pub fn set_role(&mut self, employee_id: &str, role: ParticipantRole) -> bool {
        self.roster.set_role(employee_id, role)
    }

    pub fn search<'a>(&'a self, term: &str) -> super::Candidates<'a> {
        self.roster.search(&self.employees, term)
    }

    /// Trip length shown on the schedule step, once both dates parse and the
    /// return date is later than departure.
    pub fn duration_preview(&self) -> Option<i64> {
        let departure = parse_date(&self.fields.departure_date)?;
        let return_date = parse_date(&self.fields.return_date)?;
        (return_date > departure).then(|| trip_duration_days(departure, return_date))
    }

    /// Confirm the current step. On the last step this yields the payload.
    pub fn advance(&mut self) -> Advance {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                Advance::Moved(next)
            }
            None => Advance::Submit(self.payload()),
        }
    }

    /// Go back one step; a no-op on the first step.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// The full submission built from everything collected so far.
    pub fn payload(&self) -> TravelOrderRequest {
        let fields = &self.fields;
        TravelOrderRequest {
            order_number: fields.order_number.clone(),
            purpose: fields.purpose.clone(),
            legal_basis: fields.legal_basis.clone(),
            origin: fields.origin.clone(),
            destination: fields.destination.clone(),
            departure_date: fields.departure_date.clone(),
            return_date: fields.return_date.clone(),
            transport_mode: fields.transport_mode.as_str().to_string(),
            signing_official_id: fields.signing_official_id.clone(),
            participants: self
                .roster
                .entries()
                .iter()
                .map(ParticipantRequest::from)
                .collect(),
            status: Some(fields.status.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_travel_order;

    fn employees() -> Vec<EmployeeOption> {
        ["Ahmad", "Budi", "Citra"]
            .iter()
            .enumerate()
            .map(|(i, name)| EmployeeOption {
                id: format!("e{}", i),
                service_number: format!("1990010{}", i),
                name: name.to_string(),
                position: "Staf".to_string(),
                pay_grade: "III/a".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_steps_advance_then_submit() {
        let mut wizard = OrderWizard::new("Kantor", employees());
        assert_eq!(wizard.step(), WizardStep::Detail);
        assert_eq!(wizard.advance(), Advance::Moved(WizardStep::Schedule));
        assert_eq!(wizard.advance(), Advance::Moved(WizardStep::Participants));

        match wizard.advance() {
            Advance::Submit(payload) => assert_eq!(payload.origin, "Kantor"),
            other => panic!("expected submit, got {:?}", other),
        }
        assert_eq!(wizard.step(), WizardStep::Participants);
    }

    #[test]
    fn test_back_keeps_collected_state() {
        let mut wizard = OrderWizard::new("Kantor", employees());
        wizard.fields.order_number = "SPPD/010/2025".to_string();
        wizard.advance();
        wizard.fields.destination = "Samarinda".to_string();
        wizard.advance();
        wizard.add_participant("e1");

        assert_eq!(wizard.back(), WizardStep::Schedule);
        assert_eq!(wizard.back(), WizardStep::Detail);
        assert_eq!(wizard.back(), WizardStep::Detail);

        assert_eq!(wizard.fields.order_number, "SPPD/010/2025");
        assert_eq!(wizard.fields.destination, "Samarinda");
        assert!(wizard.roster().contains("e1"));
    }

    #[test]
    fn test_duration_preview() {
        let mut wizard = OrderWizard::new("Kantor", employees());
        assert_eq!(wizard.duration_preview(), None);

        wizard.fields.departure_date = "2025-01-15".to_string();
        wizard.fields.return_date = "2025-01-17".to_string();
        assert_eq!(wizard.duration_preview(), Some(3));

        wizard.fields.return_date = "2025-01-10".to_string();
        assert_eq!(wizard.duration_preview(), None);
    }

    #[test]
    fn test_search_skips_selected_employees() {
        let mut wizard = OrderWizard::new("Kantor", employees());
        wizard.add_participant("e0");

        let ids: Vec<_> = wizard.search("1990").map(|o| o.id.clone()).collect();
        assert_eq!(ids, ["e1", "e2"]);
    }

    #[test]
    fn test_removed_participant_leaves_payload() {
        let mut wizard = OrderWizard::new("Kantor", employees());
        wizard.add_participant("e0");
        wizard.add_participant("e1");

        assert!(wizard.remove_participant("e0"));
        assert!(!wizard.remove_participant("e0"));

        let payload = wizard.payload();
        assert_eq!(payload.participants.len(), 1);
        assert_eq!(payload.participants[0].employee_id.as_deref(), Some("e1"));

        // A removed employee is offered by the search again
        let ids: Vec<_> = wizard.search("1990").map(|o| o.id.clone()).collect();
        assert_eq!(ids, ["e0", "e2"]);
    }

    #[test]
    fn test_payload_passes_validation() {
        let mut wizard = OrderWizard::new("Kantor", employees());
        wizard.fields.order_number = "SPPD/011/2025".to_string();
        wizard.fields.purpose = "Monitoring".to_string();
        wizard.fields.legal_basis = "DIPA 2025".to_string();
        wizard.fields.destination = "Balikpapan".to_string();
        wizard.fields.departure_date = "2025-03-10".to_string();
        wizard.fields.return_date = "2025-03-12".to_string();
        wizard.fields.transport_mode = TransportMode::OfficialVehicle;
        wizard.add_participant("e0");
        wizard.add_participant("e2");
        wizard.set_role("e2", ParticipantRole::TeamLead);

        let input = validate_travel_order(&wizard.payload()).unwrap();
        assert_eq!(input.transport_mode, TransportMode::OfficialVehicle);
        assert_eq!(input.roster.len(), 2);
        assert_eq!(input.roster[1].role, ParticipantRole::TeamLead);
    }
}
