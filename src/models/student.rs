//! Student records.

use serde::{Deserialize, Serialize};

use super::club::Club;
use super::enums::{Major, Sex, StudentRole};

/// Student with class, dormitory, and club membership details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub sex: Sex,
    pub email: String,
    /// Grade, 1 through 3.
    pub grade: u8,
    pub class_num: u8,
    /// Position within the class.
    pub number: u16,
    /// Full student number, e.g. `2201`.
    pub student_number: u32,
    pub major: Major,
    pub role: StudentRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dormitory_floor: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dormitory_room: Option<u16>,
    pub is_leave_school: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major_club: Option<Club>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_club: Option<Club>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autonomous_club: Option<Club>,
}

/// One page of a student listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPage {
    #[serde(default)]
    pub students: Vec<Student>,
    pub total_elements: u64,
    pub total_pages: u32,
}
