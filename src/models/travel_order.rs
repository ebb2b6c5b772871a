//! Travel order (SPPD) model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{EmployeeOption, EmployeeSummary, ParticipantDetail, ParticipantRequest, RosterEntry};

/// Means of transport for a trip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    #[default]
    Land,
    Sea,
    Air,
    OfficialVehicle,
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Land,
        TransportMode::Sea,
        TransportMode::Air,
        TransportMode::OfficialVehicle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Land => "land",
            TransportMode::Sea => "sea",
            TransportMode::Air => "air",
            TransportMode::OfficialVehicle => "official_vehicle",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "land" => Some(TransportMode::Land),
            "sea" => Some(TransportMode::Sea),
            "air" => Some(TransportMode::Air),
            "official_vehicle" => Some(TransportMode::OfficialVehicle),
            _ => None,
        }
    }

    /// Label used on printed documents.
    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Land => "Darat",
            TransportMode::Sea => "Laut",
            TransportMode::Air => "Udara",
            TransportMode::OfficialVehicle => "Kendaraan Dinas",
        }
    }
}

/// Document status; there is no workflow beyond this flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Draft,
    Final,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 2] = [OrderStatus::Draft, OrderStatus::Final];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Final => "final",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(OrderStatus::Draft),
            "final" => Some(OrderStatus::Final),
            _ => None,
        }
    }
}

/// Inclusive trip length in days: a same-day return counts as one day.
pub fn trip_duration_days(departure: NaiveDate, return_date: NaiveDate) -> i64 {
    (return_date - departure).num_days() + 1
}

/// A travel order row without its relations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelOrder {
    pub id: String,
    pub order_number: String,
    pub purpose: String,
    pub legal_basis: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub transport_mode: TransportMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_official_id: Option<String>,
    pub status: OrderStatus,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

impl TravelOrder {
    pub fn duration_days(&self) -> i64 {
        trip_duration_days(self.departure_date, self.return_date)
    }
}

/// A travel order expanded with its signing official and participants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TravelOrderDetail {
    #[serde(flatten)]
    pub order: TravelOrder,
    /// Computed on read, never stored
    pub duration_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_official: Option<EmployeeSummary>,
    pub participants: Vec<ParticipantDetail>,
}

impl TravelOrderDetail {
    pub fn new(
        order: TravelOrder,
        signing_official: Option<EmployeeSummary>,
        participants: Vec<ParticipantDetail>,
    ) -> Self {
        Self {
            duration_days: order.duration_days(),
            order,
            signing_official,
            participants,
        }
    }

    /// The submitted-form view of the current roster.
    pub fn roster(&self) -> Vec<RosterEntry> {
        self.participants
            .iter()
            .map(|p| RosterEntry::new(p.employee_id.clone(), p.role))
            .collect()
    }
}

/// Request body for creating or updating a travel order.
///
/// Dates and enumerations arrive as strings so that bad values are reported
/// per field instead of rejecting the whole body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TravelOrderRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Order number is required"))]
    pub order_number: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Purpose is required"))]
    pub purpose: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Legal basis is required"))]
    pub legal_basis: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Origin is required"))]
    pub origin: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Destination is required"))]
    pub destination: String,
    #[serde(default)]
    pub departure_date: String,
    #[serde(default)]
    pub return_date: String,
    #[serde(default)]
    pub transport_mode: String,
    #[serde(default)]
    pub signing_official_id: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "At least one participant must be selected"))]
    pub participants: Vec<ParticipantRequest>,
    #[serde(default)]
    pub status: Option<String>,
}

/// A validated travel order ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct TravelOrderInput {
    pub order_number: String,
    pub purpose: String,
    pub legal_basis: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub transport_mode: TransportMode,
    pub signing_official_id: Option<String>,
    pub roster: Vec<RosterEntry>,
    pub status: OrderStatus,
}

/// Defaults and choices for the create form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelOrderFormContext {
    pub defaults: TravelOrderRequest,
    pub transport_modes: Vec<TransportMode>,
    pub roles: Vec<super::ParticipantRole>,
    pub statuses: Vec<OrderStatus>,
    pub employees: Vec<EmployeeOption>,
}

/// An expanded order plus the employee choices for the edit form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelOrderEditContext {
    pub travel_order: TravelOrderDetail,
    /// The order as a resubmittable request body
    pub form: TravelOrderRequest,
    pub employees: Vec<EmployeeOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_duration_counts_both_ends() {
        assert_eq!(trip_duration_days(date("2025-01-15"), date("2025-01-17")), 3);
        assert_eq!(trip_duration_days(date("2025-02-01"), date("2025-02-02")), 2);
    }

    #[test]
    fn test_duration_across_month_and_leap_day() {
        assert_eq!(trip_duration_days(date("2024-02-28"), date("2024-03-01")), 3);
        assert_eq!(trip_duration_days(date("2024-12-30"), date("2025-01-02")), 4);
    }

    #[test]
    fn test_enum_wire_names_match_storage() {
        for mode in TransportMode::ALL {
            assert_eq!(TransportMode::parse(mode.as_str()), Some(mode));
            assert_eq!(
                serde_json::to_value(mode).unwrap(),
                serde_json::Value::String(mode.as_str().to_string())
            );
        }
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(TransportMode::parse("darat"), None);
    }
}
