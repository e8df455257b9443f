//! Wire types for the DataGSM OpenAPI.
//!
//! Field names follow the service's camelCase JSON; enum values follow its
//! SCREAMING_SNAKE_CASE wire strings.

mod club;
mod common;
mod enums;
mod neis;
mod project;
mod student;

pub use club::{Club, ClubDetail, ClubPage};
pub use common::ApiEnvelope;
pub use enums::{
    ClubSortBy, ClubType, Major, MealType, ProjectSortBy, Sex, SortDirection, StudentRole,
    StudentSortBy,
};
pub use neis::{Meal, Schedule};
pub use project::{ParticipantInfo, Project, ProjectPage};
pub use student::{Student, StudentPage};
