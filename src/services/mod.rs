//! External collaborators of the service.

pub mod providers;
