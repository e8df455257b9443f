//! Student data API.

use std::sync::Arc;

use crate::codec::{self, QueryPairs};
use crate::error::{Error, Result};
use crate::models::{Sex, SortDirection, Student, StudentPage, StudentRole, StudentSortBy};
use crate::transport::HttpTransport;

const STUDENTS_PATH: &str = "/v1/students";
const DEFAULT_PAGE_SIZE: u32 = 300;

/// Filters, paging, and sorting for student queries.
///
/// All filters are optional; the default query returns the first page of all
/// students (page 0, size 300, ascending), matching the service defaults.
///
/// # Example
///
/// ```rust,no_run
/// use datagsm_openapi::api::StudentQuery;
/// use datagsm_openapi::models::{Sex, StudentSortBy};
///
/// let query = StudentQuery::new()
///     .grade(2)
///     .sex(Sex::Woman)
///     .sort_by(StudentSortBy::StudentNumber);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StudentQuery {
    student_id: Option<i64>,
    name: Option<String>,
    email: Option<String>,
    grade: Option<u8>,
    class_num: Option<u8>,
    number: Option<u16>,
    sex: Option<Sex>,
    role: Option<StudentRole>,
    dormitory_room: Option<u16>,
    is_leave_school: Option<bool>,
    is_graduate: Option<bool>,
    page: Option<u32>,
    size: Option<u32>,
    sort_by: Option<StudentSortBy>,
    sort_direction: Option<SortDirection>,
}

impl StudentQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match one student by id.
    pub fn student_id(mut self, id: i64) -> Self {
        self.student_id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filter by grade (1 through 3).
    pub fn grade(mut self, grade: u8) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn class_num(mut self, class_num: u8) -> Self {
        self.class_num = Some(class_num);
        self
    }

    pub fn number(mut self, number: u16) -> Self {
        self.number = Some(number);
        self
    }

    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = Some(sex);
        self
    }

    pub fn role(mut self, role: StudentRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn dormitory_room(mut self, room: u16) -> Self {
        self.dormitory_room = Some(room);
        self
    }

    pub fn is_leave_school(mut self, value: bool) -> Self {
        self.is_leave_school = Some(value);
        self
    }

    pub fn is_graduate(mut self, value: bool) -> Self {
        self.is_graduate = Some(value);
        self
    }

    /// Zero-based page index (default 0).
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Page size (default 300, must be at least 1).
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort_by(mut self, sort_by: StudentSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = Some(direction);
        self
    }

    /// Validate and encode. Runs before any network call.
    pub(crate) fn to_query(&self) -> Result<QueryPairs> {
        if let Some(grade) = self.grade {
            if !(1..=3).contains(&grade) {
                return Err(Error::Validation(format!(
                    "grade must be between 1 and 3, got {grade}"
                )));
            }
        }
        if self.size == Some(0) {
            return Err(Error::Validation("size must be at least 1".into()));
        }

        let mut pairs = QueryPairs::new();
        pairs.push_opt("studentId", self.student_id);
        pairs.push_opt("name", self.name.as_deref());
        pairs.push_opt("email", self.email.as_deref());
        pairs.push_opt("grade", self.grade);
        pairs.push_opt("classNum", self.class_num);
        pairs.push_opt("number", self.number);
        pairs.push_opt("sex", self.sex.map(|s| s.as_str()));
        pairs.push_opt("role", self.role.map(|r| r.as_str()));
        pairs.push_opt("dormitoryRoom", self.dormitory_room);
        pairs.push_opt("isLeaveSchool", self.is_leave_school);
        pairs.push_opt("isGraduated", self.is_graduate);
        pairs.push("page", self.page.unwrap_or(0));
        pairs.push("size", self.size.unwrap_or(DEFAULT_PAGE_SIZE));
        pairs.push_opt("sortBy", self.sort_by.map(|s| s.as_str()));
        pairs.push("sortDirection", self.sort_direction.unwrap_or_default().as_str());
        Ok(pairs)
    }
}

/// Student data API.
#[derive(Debug, Clone)]
pub struct StudentsApi {
    transport: Arc<HttpTransport>,
}

impl StudentsApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List students with filtering, sorting, and pagination.
    pub async fn get_students(&self, query: &StudentQuery) -> Result<StudentPage> {
        let pairs = query.to_query()?;
        let body = self.transport.get(STUDENTS_PATH, &pairs).await?;
        codec::decode_envelope(&body)
    }

    /// Fetch a single student by id, or `None` when no student matches.
    pub async fn get_student(&self, student_id: i64) -> Result<Option<Student>> {
        let page = self
            .get_students(&StudentQuery::new().student_id(student_id))
            .await?;
        Ok(page.students.into_iter().next())
    }
}
