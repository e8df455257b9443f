//! Project records.

use serde::{Deserialize, Serialize};

use super::club::Club;
use super::enums::{Major, Sex};

/// Club member or project participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub student_number: u32,
    pub major: Major,
    pub sex: Sex,
}

/// Project with its owning club and participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub club: Option<Club>,
    #[serde(default)]
    pub participants: Vec<ParticipantInfo>,
}

/// One page of a project listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPage {
    pub total_pages: u32,
    pub total_elements: u64,
    #[serde(default)]
    pub projects: Vec<Project>,
}
