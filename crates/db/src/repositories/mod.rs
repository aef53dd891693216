//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every insert is a single
//! auto-committed statement returning the full row.

pub mod contact_message_repo;
pub mod project_repo;
pub mod rendez_vous_request_repo;
pub mod service_repo;

pub use contact_message_repo::ContactMessageRepo;
pub use project_repo::ProjectRepo;
pub use rendez_vous_request_repo::RendezVousRequestRepo;
pub use service_repo::ServiceRepo;
