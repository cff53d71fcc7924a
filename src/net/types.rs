//! Wire DTOs for the facility-management REST API.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON shapes. Field-level validation errors in
//! `ErrorBody.errors` are authoritative; client-side checks are a UX
//! convenience only.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Login form input. Transient: used once to request a session, never stored.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub login: String,
    pub passwd: String,
}

/// Successful `POST /login` response. The auth cookie and the readable
/// anti-forgery cookie arrive out of band.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub message: Option<String>,
    pub user_id: i64,
    pub role_id: i64,
}

/// Identity returned by `GET /me` while the auth cookie is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CurrentUser {
    pub user_id: i64,
    pub role_id: i64,
}

/// Structured error payload the server attaches to failed responses.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub details: Option<String>,
    /// Field name → validation message, on 422 responses.
    pub errors: Option<BTreeMap<String, String>>,
    /// Application error code, e.g. `"INVALID_TOKEN"`.
    pub error_code: Option<String>,
}

impl ErrorBody {
    /// Human-readable message: `message`, then `details`, then a generic fallback.
    pub fn display_message(&self) -> &str {
        self.message
            .as_deref()
            .or(self.details.as_deref())
            .unwrap_or("The server reported an error.")
    }
}

/// Employee record. List rows carry only `id`/`name`/`surname`; the detail
/// endpoint fills in the rest.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub role: Option<String>,
    pub role_id: Option<i64>,
    pub phone_number: Option<String>,
    pub telegram_id: Option<String>,
    pub login: Option<String>,
}

/// Payload for creating an employee. The password travels only here.
#[derive(Clone, Debug, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub surname: String,
    pub role_id: i64,
    pub phone_number: Option<String>,
    pub telegram_id: Option<String>,
    pub login: String,
    pub passwd: String,
}

/// Payload for updating an employee. The login is immutable and the
/// password has no update path here.
#[derive(Clone, Debug, Serialize)]
pub struct UpdateEmployee {
    pub name: String,
    pub surname: String,
    pub role_id: i64,
    pub phone_number: Option<String>,
    pub telegram_id: Option<String>,
}

/// Department list/detail record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub floor: i32,
    /// Present on the detail endpoint when a responsible employee is assigned.
    pub responsible_employee: Option<ResponsibleEmployee>,
}

/// Employee reference embedded in a department detail response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ResponsibleEmployee {
    pub id: i64,
    pub name: String,
    pub surname: String,
}

/// Payload for creating a department.
#[derive(Clone, Debug, Serialize)]
pub struct NewDepartment {
    pub name: String,
    pub floor: i32,
    pub responsible_employee_id: i64,
}

/// Incident record.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Issue {
    pub id: i64,
    pub department_id: Option<i64>,
    /// Department name, when the list endpoint joins it in.
    pub department: Option<String>,
    pub status: Option<String>,
    pub description: String,
    pub created_at: Option<String>,
}

/// Payload for registering an incident. Status defaults server-side.
#[derive(Clone, Debug, Serialize)]
pub struct NewIssue {
    pub department_id: i64,
    pub description: String,
}

/// `POST /issues` response.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CreatedIssue {
    pub id: i64,
    pub message: Option<String>,
}

/// Employee role.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Role {
    pub id: i64,
    pub role_name: String,
}
