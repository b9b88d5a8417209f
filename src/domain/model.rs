use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An offerable course. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub workload_hours: u32,
}

/// A validated enrollment submission. Only the validator constructs one,
/// so holding this type means every field already passed its check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnrollmentRequest {
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "cursoId")]
    pub course_id: String,
}

/// A persisted enrollment record: the accepted submission plus the
/// identifier and timestamp assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Enrollment {
    pub id: String,
    #[serde(rename = "nomeCompleto")]
    pub full_name: String,
    pub email: String,
    #[serde(rename = "cursoId")]
    pub course_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(id: String, request: EnrollmentRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: request.full_name,
            email: request.email,
            course_id: request.course_id,
            created_at,
        }
    }
}
