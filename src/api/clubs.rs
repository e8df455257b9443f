//! Club data API.

use std::sync::Arc;

use crate::codec::{self, QueryPairs};
use crate::error::{Error, Result};
use crate::models::{ClubDetail, ClubPage, ClubSortBy, ClubType, SortDirection};
use crate::transport::HttpTransport;

const CLUBS_PATH: &str = "/v1/clubs";
const DEFAULT_PAGE_SIZE: u32 = 100;

/// Filters, paging, and sorting for club queries.
#[derive(Debug, Clone, Default)]
pub struct ClubQuery {
    club_id: Option<i64>,
    club_name: Option<String>,
    club_type: Option<ClubType>,
    include_leader_in_participants: Option<bool>,
    page: Option<u32>,
    size: Option<u32>,
    sort_by: Option<ClubSortBy>,
    sort_direction: Option<SortDirection>,
}

impl ClubQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match one club by id.
    pub fn club_id(mut self, id: i64) -> Self {
        self.club_id = Some(id);
        self
    }

    pub fn club_name(mut self, name: impl Into<String>) -> Self {
        self.club_name = Some(name.into());
        self
    }

    pub fn club_type(mut self, club_type: ClubType) -> Self {
        self.club_type = Some(club_type);
        self
    }

    /// Also list the leader inside `participants` (default false).
    pub fn include_leader_in_participants(mut self, value: bool) -> Self {
        self.include_leader_in_participants = Some(value);
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

    pub fn sort_by(mut self, sort_by: ClubSortBy) -> Self {
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
        pairs.push_opt("clubId", self.club_id);
        pairs.push_opt("clubName", self.club_name.as_deref());
        pairs.push_opt("clubType", self.club_type.map(|t| t.as_str()));
        pairs.push("page", self.page.unwrap_or(0));
        pairs.push("size", self.size.unwrap_or(DEFAULT_PAGE_SIZE));
        pairs.push(
            "includeLeaderInParticipants",
            self.include_leader_in_participants.unwrap_or(false),
        );
        pairs.push_opt("sortBy", self.sort_by.map(|s| s.as_str()));
        pairs.push("sortDirection", self.sort_direction.unwrap_or_default().as_str());
        Ok(pairs)
    }
}

/// Club data API.
#[derive(Debug, Clone)]
pub struct ClubsApi {
    transport: Arc<HttpTransport>,
}

impl ClubsApi {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List clubs with filtering, sorting, and pagination.
    pub async fn get_clubs(&self, query: &ClubQuery) -> Result<ClubPage> {
        let pairs = query.to_query()?;
        let body = self.transport.get(CLUBS_PATH, &pairs).await?;
        codec::decode_envelope(&body)
    }

    /// Fetch a single club by id, or `None` when no club matches.
    pub async fn get_club(&self, club_id: i64) -> Result<Option<ClubDetail>> {
        let page = self.get_clubs(&ClubQuery::new().club_id(club_id)).await?;
        Ok(page.clubs.into_iter().next())
    }
}
