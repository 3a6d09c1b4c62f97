//! Wire DTOs for the clinic REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads. Fields the backend sometimes
//! omits default instead of failing, so records pass through this layer
//! without the client reinterpreting them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::format::day_name;

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_CANCELLED: &str = "CANCELLED";

/// Account role as issued by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Patient,
    /// Any role string this client does not know about, kept verbatim so a
    /// stored profile writes back unchanged. Never privileged.
    Other(String),
}

impl Default for Role {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "ADMIN" => Self::Admin,
            "PATIENT" => Self::Patient,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "ADMIN".to_owned(),
            Role::Patient => "PATIENT".to_owned(),
            Role::Other(raw) => raw,
        }
    }
}

/// An authenticated user as returned by `/auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: Role,
    /// Profile fields this client does not model, kept for round-tripping.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Body of `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: String,
    pub user: User,
}

/// OAuth2-style token issued by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Generic `{"message": ...}` acknowledgement returned by deletes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Weekly working window for a doctor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: i64,
    /// Day index, 0 = Sunday.
    pub weekday: u8,
    /// `HH:MM`.
    pub start_time: String,
    /// `HH:MM`.
    pub end_time: String,
}

impl Schedule {
    pub fn day_name(&self) -> Option<&'static str> {
        day_name(usize::from(self.weekday))
    }
}

/// Body of `POST /doctors/{doctorId}/schedule`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSchedule {
    pub weekday: u8,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ScheduleCreated {
    pub id: i64,
    pub doctor_id: i64,
    pub weekday: u8,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub message: String,
}

fn default_duration_minutes() -> u32 {
    60
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub bio: Option<String>,
    /// Length of one appointment slot.
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
    /// Only populated by `/doctors/{id}` and `/doctors/all`.
    #[serde(default)]
    pub schedules: Vec<Schedule>,
}

/// Body of `POST /doctors/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewDoctor {
    pub name: String,
    pub email: String,
    pub specialty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub duration_minutes: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoctorSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub specialty: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    /// ISO date-time of the slot start.
    pub start_at: String,
    /// ISO date-time of the slot end.
    pub end_at: String,
    pub status: String,
    /// Absent on the per-doctor availability listing.
    #[serde(default)]
    pub doctor: Option<DoctorSummary>,
    #[serde(default)]
    pub patient: Option<PatientSummary>,
}

impl Appointment {
    pub fn is_cancelled(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_CANCELLED)
    }

    pub fn is_pending(&self) -> bool {
        self.status.eq_ignore_ascii_case(STATUS_PENDING)
    }
}

/// Body of `POST /appointments/`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewAppointment {
    pub doctor_id: i64,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`.
    pub time: String,
}
