use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Enrollment, EnrollmentRequest};

/// Append-only, in-memory sequence of accepted enrollments.
///
/// Owned by whoever builds the application state and shared behind an
/// `Arc`; the mutex keeps appends single-writer under a multi-threaded
/// server. Nothing is ever updated or removed, and nothing survives a
/// restart.
#[derive(Debug, Default)]
pub struct EnrollmentStore {
    enrollments: Mutex<Vec<Enrollment>>,
}

impl EnrollmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persists an already-validated submission, assigning a fresh v4
    /// uuid and the current UTC timestamp. No re-validation happens
    /// here; callers go through the validator first.
    pub fn insert(&self, request: EnrollmentRequest) -> Enrollment {
        let enrollment = Enrollment::new(Uuid::new_v4().to_string(), request, Utc::now());

        let mut enrollments = self
            .enrollments
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        enrollments.push(enrollment.clone());

        enrollment
    }

    /// Snapshot of every stored enrollment, insertion order.
    pub fn list_all(&self) -> Vec<Enrollment> {
        self.enrollments
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.enrollments
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
