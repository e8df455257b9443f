//! Enumerated wire values.

use serde::{Deserialize, Serialize};

/// Gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sex {
    Man,
    Woman,
}

/// Department major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Major {
    SwDevelopment,
    SmartIot,
    Ai,
}

/// Club category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClubType {
    MajorClub,
    JobClub,
    AutonomousClub,
}

/// Student role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentRole {
    GeneralStudent,
    StudentCouncil,
    DormitoryManager,
    Graduate,
}

/// Meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sort key for student queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudentSortBy {
    Id,
    Name,
    Email,
    StudentNumber,
    Grade,
    ClassNum,
    Number,
    Major,
    Role,
    Sex,
    DormitoryRoom,
    IsLeaveSchool,
}

/// Sort key for club queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClubSortBy {
    Id,
    Name,
    Type,
}

/// Sort key for project queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectSortBy {
    Id,
    Name,
}

macro_rules! wire_str {
    ($($ty:ty { $($variant:ident => $text:literal),+ $(,)? })+) => {
        $(impl $ty {
            /// Wire string for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        })+
    };
}

wire_str! {
    Sex { Man => "MAN", Woman => "WOMAN" }
    Major { SwDevelopment => "SW_DEVELOPMENT", SmartIot => "SMART_IOT", Ai => "AI" }
    ClubType {
        MajorClub => "MAJOR_CLUB",
        JobClub => "JOB_CLUB",
        AutonomousClub => "AUTONOMOUS_CLUB",
    }
    StudentRole {
        GeneralStudent => "GENERAL_STUDENT",
        StudentCouncil => "STUDENT_COUNCIL",
        DormitoryManager => "DORMITORY_MANAGER",
        Graduate => "GRADUATE",
    }
    MealType { Breakfast => "BREAKFAST", Lunch => "LUNCH", Dinner => "DINNER" }
    SortDirection { Asc => "ASC", Desc => "DESC" }
    StudentSortBy {
        Id => "ID",
        Name => "NAME",
        Email => "EMAIL",
        StudentNumber => "STUDENT_NUMBER",
        Grade => "GRADE",
        ClassNum => "CLASS_NUM",
        Number => "NUMBER",
        Major => "MAJOR",
        Role => "ROLE",
        Sex => "SEX",
        DormitoryRoom => "DORMITORY_ROOM",
        IsLeaveSchool => "IS_LEAVE_SCHOOL",
    }
    ClubSortBy { Id => "ID", Name => "NAME", Type => "TYPE" }
    ProjectSortBy { Id => "ID", Name => "NAME" }
}
