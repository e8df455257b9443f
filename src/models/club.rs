//! Club records.

use serde::{Deserialize, Serialize};

use super::enums::ClubType;
use super::project::ParticipantInfo;

/// Club reference as embedded in other records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub club_type: ClubType,
}

/// Club with leader and member roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubDetail {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub club_type: ClubType,
    pub leader: ParticipantInfo,
    #[serde(default)]
    pub participants: Vec<ParticipantInfo>,
}

/// One page of a club listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubPage {
    pub total_pages: u32,
    pub total_elements: u64,
    #[serde(default)]
    pub clubs: Vec<ClubDetail>,
}
