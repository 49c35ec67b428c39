//! Pagination for in-memory listings.
//!
//! Listings (derived classes in particular) are filtered first and then cut
//! into pages with [`paginate`]. Two addressing styles are supported:
//!
//! - **Offset-based**: `limit` + `offset`
//! - **Page-based**: `limit` + `page` (1-indexed). When `page` is set it
//!   takes precedence over `offset`.
//!
//! `limit` is clamped to `[1, 100]` and defaults to 10.
//!
//! # Example
//!
//! ```ignore
//! use classtree_core::pagination::{paginate, PaginationParams};
//!
//! let params = PaginationParams { limit: Some(20), offset: None, page: Some(2) };
//! let (page, meta) = paginate(classes.iter().cloned(), &params);
//! assert_eq!(meta.offset, Some(20));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 100;

/// Deserializes an optional string or number into an optional usize, treating
/// empty strings as `None`.
fn deserialize_optional_usize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(usize),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Raw::Text(s)) => s
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Metadata describing one page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    /// Total number of matching items across all pages
    pub total: usize,
    /// The limit that was applied
    pub limit: usize,
    pub offset: Option<usize>,
    /// Current page (only present for page-based requests)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, Deserialize)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_optional_usize")]
    pub limit: Option<usize>,
    #[serde(default, deserialize_with = "deserialize_optional_usize")]
    pub offset: Option<usize>,
    #[serde(default, deserialize_with = "deserialize_optional_usize")]
    pub page: Option<usize>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: Some(DEFAULT_LIMIT),
            offset: None,
            page: None,
        }
    }
}

impl PaginationParams {
    /// A page-based request.
    pub fn page(limit: usize, page: usize) -> Self {
        Self {
            limit: Some(limit),
            offset: None,
            page: Some(page),
        }
    }

    /// Effective limit, clamped to [1, 100].
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    /// Effective offset; derived from `page` when one is given.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self.page_number() {
            Some(page) => (page - 1).saturating_mul(self.limit()),
            None => self.offset.unwrap_or(0),
        }
    }

    /// Page number, clamped to a minimum of 1.
    #[must_use]
    pub fn page_number(&self) -> Option<usize> {
        self.page.map(|p| p.max(1))
    }
}

/// Cut one page out of an already filtered listing.
pub fn paginate<T, I>(items: I, params: &PaginationParams) -> (Vec<T>, PaginationMeta)
where
    I: IntoIterator<Item = T>,
{
    let limit = params.limit();
    let offset = params.offset();

    let mut total = 0;
    let mut data = Vec::with_capacity(limit);
    for (index, item) in items.into_iter().enumerate() {
        total += 1;
        if index >= offset && data.len() < limit {
            data.push(item);
        }
    }

    let meta = PaginationMeta {
        total,
        limit,
        offset: Some(offset),
        page: params.page_number(),
        has_more: offset.saturating_add(limit) < total,
    };
    (data, meta)
}
