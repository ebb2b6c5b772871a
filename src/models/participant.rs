//! Travel participants (peserta perjalanan).

use serde::{Deserialize, Serialize};

use super::EmployeeSummary;

/// Role of an employee on a travel order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantRole {
    TeamLead,
    #[default]
    Member,
}

impl ParticipantRole {
    pub const ALL: [ParticipantRole; 2] = [ParticipantRole::TeamLead, ParticipantRole::Member];

    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantRole::TeamLead => "team_lead",
            ParticipantRole::Member => "member",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "team_lead" => Some(ParticipantRole::TeamLead),
            "member" => Some(ParticipantRole::Member),
            _ => None,
        }
    }

    /// Label used on printed documents.
    pub fn label(&self) -> &'static str {
        match self {
            ParticipantRole::TeamLead => "Ketua Tim",
            ParticipantRole::Member => "Anggota",
        }
    }
}

/// A persisted association row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    pub travel_order_id: String,
    pub employee_id: String,
    pub role: ParticipantRole,
    pub created_at: String,
    pub updated_at: String,
}

/// A participant expanded with its employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDetail {
    pub id: String,
    pub employee_id: String,
    pub role: ParticipantRole,
    pub employee: EmployeeSummary,
}

/// One validated roster entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub employee_id: String,
    pub role: ParticipantRole,
}

impl RosterEntry {
    pub fn new(employee_id: impl Into<String>, role: ParticipantRole) -> Self {
        Self {
            employee_id: employee_id.into(),
            role,
        }
    }
}

/// Roster entry as submitted; checked by the travel order validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRequest {
    #[serde(default)]
    pub employee_id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl From<&RosterEntry> for ParticipantRequest {
    fn from(entry: &RosterEntry) -> Self {
        Self {
            employee_id: Some(entry.employee_id.clone()),
            role: Some(entry.role.as_str().to_string()),
        }
    }
}
