pub mod config;
pub mod core;
pub mod domain;
pub mod http;
pub mod utils;

pub use config::CliConfig;
pub use core::{Catalog, EnrollmentStore};
pub use domain::{Course, Enrollment, EnrollmentRequest};
pub use utils::error::{ApiError, Result};
