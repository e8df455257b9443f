//! Capability handles, one per API group.
//!
//! Each handle borrows the shared transport from [`DataGsmClient`]
//! (`crate::DataGsmClient`) and exposes one method per documented operation.
//! Query types validate locally and fail with [`crate::Error::Validation`]
//! before any network I/O.

mod clubs;
mod neis;
mod projects;
mod students;

pub use clubs::{ClubQuery, ClubsApi};
pub use neis::{DateQuery, NeisApi};
pub use projects::{ProjectQuery, ProjectsApi};
pub use students::{StudentQuery, StudentsApi};
