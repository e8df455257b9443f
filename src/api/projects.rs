//! Project data API.

use std::sync::Arc;

use crate::codec::{self, QueryPairs};
use crate::error::{Error, Result};
use crate::models::{Project, ProjectPage, ProjectSortBy, SortDirection};
use crate::transport::HttpTransport;

const PROJECTS_PATH: &str = "/v1/projects";
const DEFAULT_PAGE_SIZE: u32 = 100;

/// Filters, paging, and sorting for project queries.
#[derive(Debug, Clone, Default)]
pub struct ProjectQuery {
    project_id: Option<i64>,
    project_name: Option<String>,
    club_id: Option<i64>,
    page: Option<u32>,
    size: Option<u32>,
    sort_by: Option<ProjectSortBy>,
    sort_direction: Option<SortDirection>,
}

impl ProjectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match one project by id.
    pub fn project_id(mut self, id: i64) -> Self {
        self.project_id = Some(id);
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Restrict to projects owned by one club.
    pub fn club_id(mut self, id: i64) -> Self {
        self.club_id = Some(id);
        self
    }

    /// Zero-based page index (default 0).
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Page size (default 100, must be at least 1).
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sort_by(mut self, sort_by: ProjectSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn sort_direction(mut self, direction: SortDirection) -> Self {
        self.sort_direction = Some(direction);
        self
    }

    pub(crate) fn to_query(&self) -> Result<QueryPairs> {
        if self.size == Some(0) {
            return Err(Error::Validation("size must be at least 1".into()));
        }

        let mut pairs = QueryPairs::new();
        pairs.push_opt("projectId", self.project_id);
        pairs.push_opt("projectName", self.project_name.as_deref());
        pairs.push_opt("clubId", self.club_id);
        pairs.push("page", self.page.unwrap_or(0));
        pairs.push("size", self.size.unwrap_or(DEFAULT_PAGE_SIZE));
        pairs.push_opt("sortBy", self.sort_by.map(|s| s.as_str()));
        pairs.push("sortDirection", self.sort_direction.unwrap_or_default().as_str());
        Ok(pairs)
    }
}

/// Project data API.
#[derive(Debug, Clone)]
pub struct ProjectsApi {
    transport: Arc<HttpTransport>,
}

impl ProjectsApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List projects with filtering, sorting, and pagination.
    pub async fn get_projects(&self, query: &ProjectQuery) -> Result<ProjectPage> {
        let pairs = query.to_query()?;
        let body = self.transport.get(PROJECTS_PATH, &pairs).await?;
        codec::decode_envelope(&body)
    }

    /// Fetch a single project by id, or `None` when no project matches.
    pub async fn get_project(&self, project_id: i64) -> Result<Option<Project>> {
        let page = self
            .get_projects(&ProjectQuery::new().project_id(project_id))
            .await?;
        Ok(page.projects.into_iter().next())
    }
}
