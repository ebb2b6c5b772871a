//! Field-level acceptance rules for employees and travel orders.
//!
//! These checks need no storage. Uniqueness and reference checks run later,
//! inside the write transaction (see `db::Repository`).

use chrono::NaiveDate;
use validator::Validate;

use crate::errors::FieldErrors;
use crate::models::{
    EmployeeInput, EmployeeRequest, OrderStatus, ParticipantRole, RosterEntry, TransportMode,
    TravelOrderInput, TravelOrderRequest,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate an employee form and normalize it into an [`EmployeeInput`].
pub fn validate_employee(request: &EmployeeRequest) -> Result<EmployeeInput, FieldErrors> {
    let request = EmployeeRequest {
        service_number: request.service_number.trim().to_string(),
        name: request.name.trim().to_string(),
        position: request.position.trim().to_string(),
        org_unit: request.org_unit.trim().to_string(),
        pay_grade: request.pay_grade.trim().to_string(),
        rank: non_blank(request.rank.as_deref()),
        effective_date: non_blank(request.effective_date.as_deref()),
    };

    let mut errors = match request.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };

    let effective_date = match request.effective_date.as_deref() {
        Some(raw) => parse_date(raw).or_else(|| {
            errors.add("effectiveDate", "Effective date must be a valid date (YYYY-MM-DD)");
            None
        }),
        None => None,
    };

    errors.into_result(EmployeeInput {
        service_number: request.service_number,
        name: request.name,
        position: request.position,
        org_unit: request.org_unit,
        pay_grade: request.pay_grade,
        rank: request.rank,
        effective_date,
    })
}

/// Validate a travel order form and normalize it into a [`TravelOrderInput`].
///
/// Roster entries that name the same employee twice are kept in submission
/// order; the reconciliation step resolves them.
pub fn validate_travel_order(
    request: &TravelOrderRequest,
) -> Result<TravelOrderInput, FieldErrors> {
    let request = TravelOrderRequest {
        order_number: request.order_number.trim().to_string(),
        purpose: request.purpose.trim().to_string(),
        legal_basis: request.legal_basis.trim().to_string(),
        origin: request.origin.trim().to_string(),
        destination: request.destination.trim().to_string(),
        departure_date: request.departure_date.trim().to_string(),
        return_date: request.return_date.trim().to_string(),
        transport_mode: request.transport_mode.trim().to_string(),
        signing_official_id: non_blank(request.signing_official_id.as_deref()),
        participants: request.participants.clone(),
        status: non_blank(request.status.as_deref()),
    };

    let mut errors = match request.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => e.into(),
    };

    let departure_date = required_date(
        &request.departure_date,
        "departureDate",
        "Departure date",
        &mut errors,
    );
    let return_date =
        required_date(&request.return_date, "returnDate", "Return date", &mut errors);
    if let (Some(departure), Some(ret)) = (departure_date, return_date) {
        if ret <= departure {
            errors.add("returnDate", "Return date must be after the departure date");
        }
    }

    let transport_mode = if request.transport_mode.is_empty() {
        errors.add("transportMode", "Transport mode is required");
        None
    } else {
        TransportMode::parse(&request.transport_mode).or_else(|| {
            errors.add(
                "transportMode",
                "Transport mode must be one of: land, sea, air, official_vehicle",
            );
            None
        })
    };

    let status = match request.status.as_deref() {
        None => Some(OrderStatus::default()),
        Some(raw) => OrderStatus::parse(raw).or_else(|| {
            errors.add("status", "Status must be draft or final");
            None
        }),
    };

    let mut roster = Vec::with_capacity(request.participants.len());
    for (index, participant) in request.participants.iter().enumerate() {
        let employee_id = non_blank(participant.employee_id.as_deref());
        if employee_id.is_none() {
            errors.add(
                format!("participants.{}.employeeId", index),
                "Participant employee is required",
            );
        }

        let role = match non_blank(participant.role.as_deref()) {
            None => {
                errors.add(
                    format!("participants.{}.role", index),
                    "Participant role is required",
                );
                None
            }
            Some(raw) => ParticipantRole::parse(&raw).or_else(|| {
                errors.add(
                    format!("participants.{}.role", index),
                    "Participant role must be team_lead or member",
                );
                None
            }),
        };

        if let (Some(employee_id), Some(role)) = (employee_id, role) {
            roster.push(RosterEntry { employee_id, role });
        }
    }

    match (departure_date, return_date, transport_mode, status) {
        (Some(departure_date), Some(return_date), Some(transport_mode), Some(status))
            if errors.is_empty() =>
        {
            Ok(TravelOrderInput {
                order_number: request.order_number,
                purpose: request.purpose,
                legal_basis: request.legal_basis,
                origin: request.origin,
                destination: request.destination,
                departure_date,
                return_date,
                transport_mode,
                signing_official_id: request.signing_official_id,
                roster,
                status,
            })
        }
        _ => Err(errors),
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn required_date(
    raw: &str,
    field: &str,
    label: &str,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    if raw.is_empty() {
        errors.add(field, format!("{} is required", label));
        return None;
    }
    let parsed = parse_date(raw);
    if parsed.is_none() {
        errors.add(field, format!("{} must be a valid date (YYYY-MM-DD)", label));
    }
    parsed
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParticipantRequest;

    fn employee_request() -> EmployeeRequest {
        EmployeeRequest {
            service_number: "198501012010011001".to_string(),
            name: "Siti Rahmawati".to_string(),
            position: "Panitera".to_string(),
            org_unit: "Kepaniteraan".to_string(),
            pay_grade: "III/c".to_string(),
            rank: Some("Penata".to_string()),
            effective_date: Some("2020-04-01".to_string()),
        }
    }

    fn participant(employee_id: &str, role: &str) -> ParticipantRequest {
        ParticipantRequest {
            employee_id: Some(employee_id.to_string()),
            role: Some(role.to_string()),
        }
    }

    fn order_request() -> TravelOrderRequest {
        TravelOrderRequest {
            order_number: "SPPD/001/2025".to_string(),
            purpose: "Koordinasi teknis".to_string(),
            legal_basis: "Surat undangan".to_string(),
            origin: "Kantor".to_string(),
            destination: "Jakarta".to_string(),
            departure_date: "2025-02-01".to_string(),
            return_date: "2025-02-03".to_string(),
            transport_mode: "land".to_string(),
            signing_official_id: None,
            participants: vec![participant("a", "team_lead"), participant("b", "member")],
            status: None,
        }
    }

    #[test]
    fn test_valid_employee_is_trimmed() {
        let mut request = employee_request();
        request.name = "  Siti Rahmawati ".to_string();
        request.rank = Some("   ".to_string());

        let input = validate_employee(&request).unwrap();
        assert_eq!(input.name, "Siti Rahmawati");
        assert_eq!(input.rank, None);
        assert_eq!(input.effective_date, parse_date("2020-04-01"));
    }

    #[test]
    fn test_employee_required_fields() {
        let errors = validate_employee(&EmployeeRequest::default()).unwrap_err();
        for field in ["serviceNumber", "name", "position", "orgUnit", "payGrade"] {
            assert!(errors.contains(field), "missing error for {}", field);
        }
        assert!(!errors.contains("rank"));
    }

    #[test]
    fn test_employee_pay_grade_limit_and_bad_date() {
        let mut request = employee_request();
        request.pay_grade = "IV/e-extended".to_string();
        request.effective_date = Some("01-04-2020".to_string());

        let errors = validate_employee(&request).unwrap_err();
        assert!(errors.contains("payGrade"));
        assert!(errors.contains("effectiveDate"));
    }

    #[test]
    fn test_valid_order_defaults_to_draft() {
        let input = validate_travel_order(&order_request()).unwrap();
        assert_eq!(input.status, OrderStatus::Draft);
        assert_eq!(input.transport_mode, TransportMode::Land);
        assert_eq!(input.roster.len(), 2);
        assert_eq!(input.roster[0].role, ParticipantRole::TeamLead);
    }

    #[test]
    fn test_return_before_departure_is_rejected() {
        let mut request = order_request();
        request.departure_date = "2025-02-03".to_string();
        request.return_date = "2025-02-01".to_string();

        let errors = validate_travel_order(&request).unwrap_err();
        assert!(errors.contains("returnDate"));
        assert!(!errors.contains("departureDate"));
    }

    #[test]
    fn test_same_day_return_is_rejected() {
        let mut request = order_request();
        request.return_date = request.departure_date.clone();

        let errors = validate_travel_order(&request).unwrap_err();
        assert!(errors.contains("returnDate"));
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let mut request = order_request();
        request.participants.clear();

        let errors = validate_travel_order(&request).unwrap_err();
        assert!(errors.contains("participants"));
    }

    #[test]
    fn test_roster_entry_errors_are_indexed() {
        let mut request = order_request();
        request.participants = vec![
            participant("a", "team_lead"),
            ParticipantRequest {
                employee_id: None,
                role: Some("ketua".to_string()),
            },
        ];

        let errors = validate_travel_order(&request).unwrap_err();
        assert!(errors.contains("participants.1.employeeId"));
        assert!(errors.contains("participants.1.role"));
        assert!(!errors.contains("participants.0.role"));
    }

    #[test]
    fn test_enumerations_and_dates() {
        let mut request = order_request();
        request.transport_mode = "train".to_string();
        request.status = Some("approved".to_string());
        request.departure_date = "2025-13-01".to_string();

        let errors = validate_travel_order(&request).unwrap_err();
        assert!(errors.contains("transportMode"));
        assert!(errors.contains("status"));
        assert!(errors.contains("departureDate"));
    }

    #[test]
    fn test_blank_signing_official_means_none() {
        let mut request = order_request();
        request.signing_official_id = Some(" ".to_string());
        request.status = Some("final".to_string());

        let input = validate_travel_order(&request).unwrap();
        assert_eq!(input.signing_official_id, None);
        assert_eq!(input.status, OrderStatus::Final);
    }
}
