pub mod catalog;
pub mod store;
pub mod validator;

pub use catalog::Catalog;
pub use store::EnrollmentStore;
