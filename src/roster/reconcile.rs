//! Diff between a persisted participant set and a submitted roster.

use std::collections::{HashMap, HashSet};

use crate::models::{Participant, ParticipantRole, RosterEntry};

/// Writes needed to make the persisted participants match a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconciliationPlan {
    /// Participant row ids to delete
    pub deletes: Vec<String>,
    /// Participant row id and its new role
    pub updates: Vec<(String, ParticipantRole)>,
    /// New rows, in submission order
    pub inserts: Vec<RosterEntry>,
}

impl ReconciliationPlan {
    /// Build the plan for `submitted` against `existing`.
    ///
    /// A submission naming the same employee more than once resolves to the
    /// role of its last entry. Rows whose role is already correct are left
    /// untouched, so resubmitting the same roster plans no writes.
    pub fn build(existing: &[Participant], submitted: &[RosterEntry]) -> Self {
        let mut final_roles: HashMap<&str, ParticipantRole> = HashMap::new();
        let mut submission_order: Vec<&str> = Vec::new();
        for entry in submitted {
            if final_roles
                .insert(entry.employee_id.as_str(), entry.role)
                .is_none()
            {
                submission_order.push(entry.employee_id.as_str());
            }
        }

        let mut plan = ReconciliationPlan::default();
        let mut persisted: HashSet<&str> = HashSet::new();

        for participant in existing {
            persisted.insert(participant.employee_id.as_str());
            match final_roles.get(participant.employee_id.as_str()) {
                None => plan.deletes.push(participant.id.clone()),
                Some(role) if *role != participant.role => {
                    plan.updates.push((participant.id.clone(), *role));
                }
                Some(_) => {}
            }
        }

        for employee_id in submission_order {
            if !persisted.contains(employee_id) {
                plan.inserts
                    .push(RosterEntry::new(employee_id, final_roles[employee_id]));
            }
        }

        plan
    }

    pub fn is_empty(&self) -> bool {
        self.deletes.is_empty() && self.updates.is_empty() && self.inserts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParticipantRole::{Member, TeamLead};

    fn row(id: &str, employee_id: &str, role: ParticipantRole) -> Participant {
        Participant {
            id: id.to_string(),
            travel_order_id: "order".to_string(),
            employee_id: employee_id.to_string(),
            role,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_empty_existing_inserts_everything_in_order() {
        let plan = ReconciliationPlan::build(
            &[],
            &[RosterEntry::new("a", TeamLead), RosterEntry::new("b", Member)],
        );

        assert!(plan.deletes.is_empty());
        assert!(plan.updates.is_empty());
        assert_eq!(
            plan.inserts,
            vec![RosterEntry::new("a", TeamLead), RosterEntry::new("b", Member)]
        );
    }

    #[test]
    fn test_drop_one_and_promote_other() {
        let existing = [row("p1", "a", TeamLead), row("p2", "b", Member)];
        let plan = ReconciliationPlan::build(&existing, &[RosterEntry::new("b", TeamLead)]);

        assert_eq!(plan.deletes, vec!["p1".to_string()]);
        assert_eq!(plan.updates, vec![("p2".to_string(), TeamLead)]);
        assert!(plan.inserts.is_empty());
    }

    #[test]
    fn test_identical_roster_plans_nothing() {
        let existing = [row("p1", "a", TeamLead), row("p2", "b", Member)];
        let plan = ReconciliationPlan::build(
            &existing,
            &[RosterEntry::new("a", TeamLead), RosterEntry::new("b", Member)],
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_duplicate_submission_last_role_wins() {
        let plan = ReconciliationPlan::build(
            &[],
            &[
                RosterEntry::new("a", Member),
                RosterEntry::new("b", Member),
                RosterEntry::new("a", TeamLead),
            ],
        );
        assert_eq!(
            plan.inserts,
            vec![RosterEntry::new("a", TeamLead), RosterEntry::new("b", Member)]
        );

        let existing = [row("p1", "a", TeamLead)];
        let plan = ReconciliationPlan::build(
            &existing,
            &[RosterEntry::new("a", Member), RosterEntry::new("a", TeamLead)],
        );
        assert!(plan.is_empty());
    }

    #[test]
    fn test_mixed_delete_update_insert() {
        let existing = [
            row("p1", "a", Member),
            row("p2", "b", Member),
            row("p3", "c", TeamLead),
        ];
        let plan = ReconciliationPlan::build(
            &existing,
            &[
                RosterEntry::new("d", Member),
                RosterEntry::new("c", Member),
                RosterEntry::new("a", TeamLead),
            ],
        );

        assert_eq!(plan.deletes, vec!["p2".to_string()]);
        assert_eq!(
            plan.updates,
            vec![("p1".to_string(), TeamLead), ("p3".to_string(), Member)]
        );
        assert_eq!(plan.inserts, vec![RosterEntry::new("d", Member)]);
    }
}
