pub mod model;

pub use model::{Course, Enrollment, EnrollmentRequest};
