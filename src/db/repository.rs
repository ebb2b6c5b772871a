//! Database repository for CRUD operations.
//!
//! Travel order writes run in a single transaction covering the order row
//! and its participant rows. The transaction takes the write lock up front
//! so concurrent writers queue on the busy timeout instead of failing to
//! upgrade a read lock.

use std::collections::{HashMap, HashSet};

use chrono::{SecondsFormat, Utc};
use sqlx::sqlite::{SqliteConnection, SqliteRow};
use sqlx::{Row, SqlitePool};

use crate::errors::{AppError, FieldErrors};
use crate::models::{
    Employee, EmployeeInput, EmployeeOption, EmployeeSummary, OrderStatus, Participant,
    ParticipantDetail, ParticipantRole, TransportMode, TravelOrder, TravelOrderDetail,
    TravelOrderInput,
};
use crate::roster::ReconciliationPlan;

const EMPLOYEE_COLUMNS: &str = "id, service_number, name, position, org_unit, pay_grade, rank, \
     effective_date, created_at, updated_at, deleted_at";

const TRAVEL_ORDER_SELECT: &str = r#"
    SELECT t.id, t.order_number, t.purpose, t.legal_basis, t.origin, t.destination,
           t.departure_date, t.return_date, t.transport_mode, t.signing_official_id,
           t.status, t.created_at, t.updated_at, t.deleted_at,
           s.service_number AS official_service_number, s.name AS official_name,
           s.position AS official_position, s.pay_grade AS official_pay_grade,
           s.rank AS official_rank, s.deleted_at AS official_deleted_at
    FROM travel_orders t
    LEFT JOIN employees s ON s.id = t.signing_official_id
"#;

const PARTICIPANT_DETAIL_SELECT: &str = r#"
    SELECT p.id, p.travel_order_id, p.employee_id, p.role,
           e.service_number, e.name, e.position, e.pay_grade, e.rank, e.deleted_at
    FROM participants p
    JOIN employees e ON e.id = p.employee_id
"#;

const SERVICE_NUMBER_TAKEN: &str = "Service number is already in use";
const ORDER_NUMBER_TAKEN: &str = "Order number is already in use";

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== EMPLOYEE OPERATIONS ====================

    /// List live employees ordered by name.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        let sql = format!(
            "SELECT {} FROM employees WHERE deleted_at IS NULL ORDER BY name, rowid",
            EMPLOYEE_COLUMNS
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| employee_from_row(row).map_err(AppError::from))
            .collect()
    }

    /// List soft-deleted employees, most recently deleted first.
    pub async fn list_deleted_employees(&self) -> Result<Vec<Employee>, AppError> {
        let sql = format!(
            "SELECT {} FROM employees WHERE deleted_at IS NOT NULL ORDER BY deleted_at DESC",
            EMPLOYEE_COLUMNS
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| employee_from_row(row).map_err(AppError::from))
            .collect()
    }

    /// Live employees in the shape used by roster search and official pickers.
    pub async fn list_employee_options(&self) -> Result<Vec<EmployeeOption>, AppError> {
        let rows = sqlx::query(
            "SELECT id, service_number, name, position, pay_grade FROM employees WHERE deleted_at IS NULL ORDER BY name, rowid",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> Result<EmployeeOption, sqlx::Error> {
                Ok(EmployeeOption {
                    id: row.try_get("id")?,
                    service_number: row.try_get("service_number")?,
                    name: row.try_get("name")?,
                    position: row.try_get("position")?,
                    pay_grade: row.try_get("pay_grade")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(AppError::from)
    }

    /// Get a live employee by ID.
    pub async fn get_employee(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let sql = format!(
            "SELECT {} FROM employees WHERE id = ? AND deleted_at IS NULL",
            EMPLOYEE_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(employee_from_row).transpose()?)
    }

    /// Get an employee by ID whether or not it has been soft-deleted.
    pub async fn get_employee_with_deleted(&self, id: &str) -> Result<Option<Employee>, AppError> {
        let sql = format!("SELECT {} FROM employees WHERE id = ?", EMPLOYEE_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(employee_from_row).transpose()?)
    }

    /// Create a new employee.
    pub async fn create_employee(&self, input: &EmployeeInput) -> Result<Employee, AppError> {
        let mut conn = self.pool.acquire().await?;
        if service_number_taken(&mut conn, &input.service_number, None).await? {
            return Err(FieldErrors::single("serviceNumber", SERVICE_NUMBER_TAKEN).into());
        }

        let id = uuid::Uuid::new_v4().to_string();
        let now = timestamp();

        sqlx::query(
            "INSERT INTO employees (id, service_number, name, position, org_unit, pay_grade, rank, effective_date, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&input.service_number)
        .bind(&input.name)
        .bind(&input.position)
        .bind(&input.org_unit)
        .bind(&input.pay_grade)
        .bind(&input.rank)
        .bind(input.effective_date)
        .bind(&now)
        .bind(&now)
        .execute(&mut *conn)
        .await
        .map_err(|e| unique_violation(e, "serviceNumber", SERVICE_NUMBER_TAKEN))?;

        tracing::info!(employee_id = %id, "Created employee");

        Ok(Employee {
            id,
            service_number: input.service_number.clone(),
            name: input.name.clone(),
            position: input.position.clone(),
            org_unit: input.org_unit.clone(),
            pay_grade: input.pay_grade.clone(),
            rank: input.rank.clone(),
            effective_date: input.effective_date,
            created_at: now.clone(),
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Replace every field of a live employee.
    ///
    /// The employee's own service number never counts as a conflict.
    pub async fn update_employee(
        &self,
        id: &str,
        input: &EmployeeInput,
    ) -> Result<Employee, AppError> {
        let existing = self
            .get_employee(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

        let mut conn = self.pool.acquire().await?;
        if service_number_taken(&mut conn, &input.service_number, Some(id)).await? {
            return Err(FieldErrors::single("serviceNumber", SERVICE_NUMBER_TAKEN).into());
        }

        let now = timestamp();
        let result = sqlx::query(
            "UPDATE employees SET service_number = ?, name = ?, position = ?, org_unit = ?, pay_grade = ?, rank = ?, effective_date = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(&input.service_number)
        .bind(&input.name)
        .bind(&input.position)
        .bind(&input.org_unit)
        .bind(&input.pay_grade)
        .bind(&input.rank)
        .bind(input.effective_date)
        .bind(&now)
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| unique_violation(e, "serviceNumber", SERVICE_NUMBER_TAKEN))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }

        Ok(Employee {
            id: existing.id,
            service_number: input.service_number.clone(),
            name: input.name.clone(),
            position: input.position.clone(),
            org_unit: input.org_unit.clone(),
            pay_grade: input.pay_grade.clone(),
            rank: input.rank.clone(),
            effective_date: input.effective_date,
            created_at: existing.created_at,
            updated_at: now,
            deleted_at: None,
        })
    }

    /// Soft-delete an employee. Existing references stay intact.
    pub async fn delete_employee(&self, id: &str) -> Result<(), AppError> {
        let now = timestamp();
        let result = sqlx::query(
            "UPDATE employees SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(&now)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }

        tracing::info!(employee_id = %id, "Soft-deleted employee");
        Ok(())
    }

    /// Permanently remove an employee row.
    ///
    /// Their participant rows go with it and orders they signed lose their
    /// signing official.
    pub async fn purge_employee(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }

        tracing::warn!(employee_id = %id, "Purged employee");
        Ok(())
    }

    // ==================== TRAVEL ORDER OPERATIONS ====================

    /// List live travel orders, newest first, with relations expanded.
    pub async fn list_travel_orders(&self) -> Result<Vec<TravelOrderDetail>, AppError> {
        let sql = format!(
            "{} WHERE t.deleted_at IS NULL ORDER BY t.created_at DESC, t.rowid DESC",
            TRAVEL_ORDER_SELECT
        );
        let order_rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        let sql = format!(
            "{} WHERE p.travel_order_id IN (SELECT id FROM travel_orders WHERE deleted_at IS NULL) ORDER BY p.created_at, p.rowid",
            PARTICIPANT_DETAIL_SELECT
        );
        let participant_rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        let mut participants: HashMap<String, Vec<ParticipantDetail>> = HashMap::new();
        for row in &participant_rows {
            let travel_order_id: String = row.try_get("travel_order_id")?;
            participants
                .entry(travel_order_id)
                .or_default()
                .push(participant_detail_from_row(row)?);
        }

        order_rows
            .iter()
            .map(|row| -> Result<TravelOrderDetail, AppError> {
                let order = travel_order_from_row(row)?;
                let official = official_from_row(row)?;
                let roster = participants.remove(&order.id).unwrap_or_default();
                Ok(TravelOrderDetail::new(order, official, roster))
            })
            .collect()
    }

    /// List soft-deleted travel orders, most recently deleted first.
    pub async fn list_deleted_travel_orders(&self) -> Result<Vec<TravelOrder>, AppError> {
        let sql = format!(
            "{} WHERE t.deleted_at IS NOT NULL ORDER BY t.deleted_at DESC",
            TRAVEL_ORDER_SELECT
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| travel_order_from_row(row).map_err(AppError::from))
            .collect()
    }

    /// Get a live travel order with its signing official and participants.
    pub async fn get_travel_order(&self, id: &str) -> Result<Option<TravelOrderDetail>, AppError> {
        let mut conn = self.pool.acquire().await?;
        load_detail(&mut conn, id).await
    }

    /// Get a travel order row whether or not it has been soft-deleted.
    pub async fn get_travel_order_with_deleted(
        &self,
        id: &str,
    ) -> Result<Option<TravelOrder>, AppError> {
        let sql = format!("{} WHERE t.id = ?", TRAVEL_ORDER_SELECT);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(travel_order_from_row).transpose()?)
    }

    /// Participant rows of an order in insertion order.
    pub async fn list_participants(
        &self,
        travel_order_id: &str,
    ) -> Result<Vec<Participant>, AppError> {
        let mut conn = self.pool.acquire().await?;
        participants_of(&mut conn, travel_order_id).await
    }

    /// Create a travel order and its participants atomically.
    pub async fn create_travel_order(
        &self,
        input: &TravelOrderInput,
    ) -> Result<TravelOrderDetail, AppError> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let mut errors = FieldErrors::new();
        if order_number_taken(&mut tx, &input.order_number, None).await? {
            errors.add("orderNumber", ORDER_NUMBER_TAKEN);
        }
        errors.merge(check_references(&mut tx, input, &HashSet::new()).await?);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let id = uuid::Uuid::new_v4().to_string();
        let now = timestamp();

        sqlx::query(
            "INSERT INTO travel_orders (id, order_number, purpose, legal_basis, origin, destination, departure_date, return_date, transport_mode, signing_official_id, status, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&input.order_number)
        .bind(&input.purpose)
        .bind(&input.legal_basis)
        .bind(&input.origin)
        .bind(&input.destination)
        .bind(input.departure_date)
        .bind(input.return_date)
        .bind(input.transport_mode.as_str())
        .bind(&input.signing_official_id)
        .bind(input.status.as_str())
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| unique_violation(e, "orderNumber", ORDER_NUMBER_TAKEN))?;

        let plan = ReconciliationPlan::build(&[], &input.roster);
        apply_plan(&mut tx, &id, &plan, &now).await?;

        let detail = load_detail(&mut tx, &id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Travel order {} vanished", id)))?;

        tx.commit().await?;

        tracing::info!(
            travel_order_id = %id,
            participants = detail.participants.len(),
            "Created travel order"
        );

        Ok(detail)
    }

    /// Replace a live travel order's fields and reconcile its participants.
    ///
    /// Employees already attached to the order stay acceptable even after
    /// being soft-deleted.
    pub async fn update_travel_order(
        &self,
        id: &str,
        input: &TravelOrderInput,
    ) -> Result<TravelOrderDetail, AppError> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let current_official: Option<Option<String>> = sqlx::query_scalar(
            "SELECT signing_official_id FROM travel_orders WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        let current_official = current_official
            .ok_or_else(|| AppError::NotFound(format!("Travel order {} not found", id)))?;

        let existing = participants_of(&mut tx, id).await?;
        let attached: HashSet<String> = existing
            .iter()
            .map(|p| p.employee_id.clone())
            .chain(current_official)
            .collect();

        let mut errors = FieldErrors::new();
        if order_number_taken(&mut tx, &input.order_number, Some(id)).await? {
            errors.add("orderNumber", ORDER_NUMBER_TAKEN);
        }
        errors.merge(check_references(&mut tx, input, &attached).await?);
        if !errors.is_empty() {
            return Err(errors.into());
        }

        let now = timestamp();
        sqlx::query(
            "UPDATE travel_orders SET order_number = ?, purpose = ?, legal_basis = ?, origin = ?, destination = ?, departure_date = ?, return_date = ?, transport_mode = ?, signing_official_id = ?, status = ?, updated_at = ? WHERE id = ?",
        )
        .bind(&input.order_number)
        .bind(&input.purpose)
        .bind(&input.legal_basis)
        .bind(&input.origin)
        .bind(&input.destination)
        .bind(input.departure_date)
        .bind(input.return_date)
        .bind(input.transport_mode.as_str())
        .bind(&input.signing_official_id)
        .bind(input.status.as_str())
        .bind(&now)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(|e| unique_violation(e, "orderNumber", ORDER_NUMBER_TAKEN))?;

        let plan = ReconciliationPlan::build(&existing, &input.roster);
        tracing::debug!(
            travel_order_id = %id,
            deletes = plan.deletes.len(),
            updates = plan.updates.len(),
            inserts = plan.inserts.len(),
            "Reconciling participants"
        );
        apply_plan(&mut tx, id, &plan, &now).await?;

        let detail = load_detail(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Travel order {} not found", id)))?;

        tx.commit().await?;

        tracing::info!(travel_order_id = %id, "Updated travel order");

        Ok(detail)
    }

    /// Soft-delete a travel order. Participant rows are kept.
    pub async fn delete_travel_order(&self, id: &str) -> Result<(), AppError> {
        let now = timestamp();
        let result = sqlx::query(
            "UPDATE travel_orders SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(&now)
        .bind(&now)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Travel order {} not found", id)));
        }

        tracing::info!(travel_order_id = %id, "Soft-deleted travel order");
        Ok(())
    }

    /// Permanently remove a travel order and its participants.
    pub async fn purge_travel_order(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM travel_orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Travel order {} not found", id)));
        }

        tracing::warn!(travel_order_id = %id, "Purged travel order");
        Ok(())
    }
}

// ==================== SHARED QUERIES ====================

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Turn a unique-index violation into a field error; anything else stays a
/// database error.
pub fn unique_violation(err: sqlx::Error, field: &str, message: &str) -> AppError {
    let is_unique = err
        .as_database_error()
        .map(|d| d.is_unique_violation())
        .unwrap_or(false);

    if is_unique {
        FieldErrors::single(field, message).into()
    } else {
        err.into()
    }
}

async fn service_number_taken(
    conn: &mut SqliteConnection,
    service_number: &str,
    exclude_id: Option<&str>,
) -> Result<bool, AppError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM employees WHERE service_number = ? AND deleted_at IS NULL AND (? IS NULL OR id <> ?)",
    )
    .bind(service_number)
    .bind(exclude_id)
    .bind(exclude_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(count > 0)
}

async fn order_number_taken(
    conn: &mut SqliteConnection,
    order_number: &str,
    exclude_id: Option<&str>,
) -> Result<bool, AppError> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM travel_orders WHERE order_number = ? AND deleted_at IS NULL AND (? IS NULL OR id <> ?)",
    )
    .bind(order_number)
    .bind(exclude_id)
    .bind(exclude_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(count > 0)
}

/// Check that the signing official and every participant name an existing
/// employee. `attached` holds employees already on the order being edited.
async fn check_references(
    conn: &mut SqliteConnection,
    input: &TravelOrderInput,
    attached: &HashSet<String>,
) -> Result<FieldErrors, AppError> {
    let mut errors = FieldErrors::new();

    if let Some(official_id) = &input.signing_official_id {
        if !employee_usable(conn, official_id, attached).await? {
            errors.add("signingOfficialId", "The selected signing official does not exist");
        }
    }

    for (i, entry) in input.roster.iter().enumerate() {
        if !employee_usable(conn, &entry.employee_id, attached).await? {
            errors.add(
                format!("participants.{}.employeeId", i),
                "The selected employee does not exist",
            );
        }
    }

    Ok(errors)
}

async fn employee_usable(
    conn: &mut SqliteConnection,
    employee_id: &str,
    attached: &HashSet<String>,
) -> Result<bool, AppError> {
    let deleted_at: Option<Option<String>> =
        sqlx::query_scalar("SELECT deleted_at FROM employees WHERE id = ?")
            .bind(employee_id)
            .fetch_optional(&mut *conn)
            .await?;

    Ok(match deleted_at {
        None => false,
        Some(None) => true,
        Some(Some(_)) => attached.contains(employee_id),
    })
}

async fn participants_of(
    conn: &mut SqliteConnection,
    travel_order_id: &str,
) -> Result<Vec<Participant>, AppError> {
    let rows = sqlx::query(
        "SELECT id, travel_order_id, employee_id, role, created_at, updated_at FROM participants WHERE travel_order_id = ? ORDER BY created_at, rowid",
    )
    .bind(travel_order_id)
    .fetch_all(&mut *conn)
    .await?;

    rows.iter()
        .map(|row| participant_from_row(row).map_err(AppError::from))
        .collect()
}

async fn apply_plan(
    conn: &mut SqliteConnection,
    travel_order_id: &str,
    plan: &ReconciliationPlan,
    now: &str,
) -> Result<(), AppError> {
    for participant_id in &plan.deletes {
        sqlx::query("DELETE FROM participants WHERE id = ?")
            .bind(participant_id)
            .execute(&mut *conn)
            .await?;
    }

    for (participant_id, role) in &plan.updates {
        sqlx::query("UPDATE participants SET role = ?, updated_at = ? WHERE id = ?")
            .bind(role.as_str())
            .bind(now)
            .bind(participant_id)
            .execute(&mut *conn)
            .await?;
    }

    for entry in &plan.inserts {
        sqlx::query(
            "INSERT INTO participants (id, travel_order_id, employee_id, role, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(travel_order_id)
        .bind(&entry.employee_id)
        .bind(entry.role.as_str())
        .bind(now)
        .bind(now)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

async fn load_detail(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<Option<TravelOrderDetail>, AppError> {
    let sql = format!("{} WHERE t.id = ? AND t.deleted_at IS NULL", TRAVEL_ORDER_SELECT);
    let Some(row) = sqlx::query(&sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
    else {
        return Ok(None);
    };

    let order = travel_order_from_row(&row)?;
    let official = official_from_row(&row)?;

    let sql = format!(
        "{} WHERE p.travel_order_id = ? ORDER BY p.created_at, p.rowid",
        PARTICIPANT_DETAIL_SELECT
    );
    let participants = sqlx::query(&sql)
        .bind(id)
        .fetch_all(&mut *conn)
        .await?
        .iter()
        .map(participant_detail_from_row)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(TravelOrderDetail::new(order, official, participants)))
}

// ==================== ROW MAPPING ====================

fn decode_enum<T>(
    row: &SqliteRow,
    column: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    parse(&raw).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: format!("unexpected value {:?}", raw).into(),
    })
}

fn employee_from_row(row: &SqliteRow) -> Result<Employee, sqlx::Error> {
    Ok(Employee {
        id: row.try_get("id")?,
        service_number: row.try_get("service_number")?,
        name: row.try_get("name")?,
        position: row.try_get("position")?,
        org_unit: row.try_get("org_unit")?,
        pay_grade: row.try_get("pay_grade")?,
        rank: row.try_get("rank")?,
        effective_date: row.try_get("effective_date")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        deleted_at: row.try_get("deleted_at")?,
    })
}

fn travel_order_from_row(row: &SqliteRow) -> Result<TravelOrder, sqlx::Error> {
    Ok(TravelOrder {
        id: row.try_get("id")?,
        order_number: row.try_get("order_number")?,
        purpose: row.try_get("purpose")?,
        legal_basis: row.try_get("legal_basis")?,
        origin: row.try_get("origin")?,
        destination: row.try_get("destination")?,
        departure_date: row.try_get("departure_date")?,
        return_date: row.try_get("return_date")?,
        transport_mode: decode_enum(row, "transport_mode", TransportMode::parse)?,
        signing_official_id: row.try_get("signing_official_id")?,
        status: decode_enum(row, "status", OrderStatus::parse)?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        deleted_at: row.try_get("deleted_at")?,
    })
}

/// The joined signing official columns of a travel order row.
fn official_from_row(row: &SqliteRow) -> Result<Option<EmployeeSummary>, sqlx::Error> {
    let id: Option<String> = row.try_get("signing_official_id")?;
    let name: Option<String> = row.try_get("official_name")?;
    let (Some(id), Some(name)) = (id, name) else {
        return Ok(None);
    };

    let deleted_at: Option<String> = row.try_get("official_deleted_at")?;
    Ok(Some(EmployeeSummary {
        id,
        service_number: row.try_get("official_service_number")?,
        name,
        position: row.try_get("official_position")?,
        pay_grade: row.try_get("official_pay_grade")?,
        rank: row.try_get("official_rank")?,
        deleted: deleted_at.is_some(),
    }))
}

fn participant_from_row(row: &SqliteRow) -> Result<Participant, sqlx::Error> {
    Ok(Participant {
        id: row.try_get("id")?,
        travel_order_id: row.try_get("travel_order_id")?,
        employee_id: row.try_get("employee_id")?,
        role: decode_enum(row, "role", ParticipantRole::parse)?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn participant_detail_from_row(row: &SqliteRow) -> Result<ParticipantDetail, sqlx::Error> {
    let employee_id: String = row.try_get("employee_id")?;
    let deleted_at: Option<String> = row.try_get("deleted_at")?;

    Ok(ParticipantDetail {
        id: row.try_get("id")?,
        role: decode_enum(row, "role", ParticipantRole::parse)?,
        employee: EmployeeSummary {
            id: employee_id.clone(),
            service_number: row.try_get("service_number")?,
            name: row.try_get("name")?,
            position: row.try_get("position")?,
            pay_grade: row.try_get("pay_grade")?,
            rank: row.try_get("rank")?,
            deleted: deleted_at.is_some(),
        },
        employee_id,
    })
}
