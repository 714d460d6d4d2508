//! Offset pagination primitives shared by list endpoints.
//!
//! A [`PageRequest`] holds a validated, one-based page number and a page
//! size. Persistence adapters turn it into `OFFSET`/`LIMIT` clauses through
//! [`PageRequest::offset`] and [`PageRequest::limit`]; inbound adapters report
//! the page count with [`total_pages`].
//!
//! ```
//! use pagination::{PageRequest, total_pages};
//!
//! let request = PageRequest::new(2, 10).expect("positive values");
//! assert_eq!(request.offset(), 10);
//! assert_eq!(total_pages(15, request.limit()), 2);
//! ```

use std::fmt;
use std::str::FromStr;

/// Page number applied when a client omits `page`.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size applied when a client omits `limit`.
pub const DEFAULT_LIMIT: i64 = 10;

/// Errors raised when constructing a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The page number was zero or negative.
    #[error("page must be a positive integer")]
    NonPositivePage,
    /// The page size was zero or negative.
    #[error("limit must be a positive integer")]
    NonPositiveLimit,
    /// The page number does not fit the supported range, or the records it
    /// skips exceed the largest addressable offset.
    #[error("page is too large")]
    PageTooLarge,
    /// The page size does not fit the supported range.
    #[error("limit is too large")]
    LimitTooLarge,
}

/// Validated one-based page request.
///
/// ## Invariants
/// - `page >= 1`
/// - `limit >= 1`
/// - `(page - 1) * limit <= i64::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Validate a page number and size as supplied by a client.
    ///
    /// # Errors
    ///
    /// Returns [`PageRequestError`] when either value is below one or exceeds
    /// `u32::MAX`, or when the resulting offset does not fit an `i64`.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PageRequestError};
    ///
    /// assert!(PageRequest::new(1, 10).is_ok());
    /// assert_eq!(PageRequest::new(0, 10), Err(PageRequestError::NonPositivePage));
    /// ```
    pub fn new(page: i64, limit: i64) -> Result<Self, PageRequestError> {
        if page < 1 {
            return Err(PageRequestError::NonPositivePage);
        }
        if limit < 1 {
            return Err(PageRequestError::NonPositiveLimit);
        }
        let page = u32::try_from(page).map_err(|_| PageRequestError::PageTooLarge)?;
        let limit = u32::try_from(limit).map_err(|_| PageRequestError::LimitTooLarge)?;
        let skipped = u64::from(page - 1) * u64::from(limit);
        if i64::try_from(skipped).is_err() {
            return Err(PageRequestError::PageTooLarge);
        }
        Ok(Self { page, limit })
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of records on the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of records preceding the first record of this page.
    ///
    /// Always fits `i64`, the width SQL `OFFSET` accepts.
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

/// Number of pages needed to show `total_records` with `limit` per page.
///
/// A zero `limit` yields zero pages rather than dividing by zero.
///
/// # Examples
/// ```
/// use pagination::total_pages;
///
/// assert_eq!(total_pages(0, 10), 0);
/// assert_eq!(total_pages(10, 10), 1);
/// assert_eq!(total_pages(11, 10), 2);
/// ```
#[must_use]
pub fn total_pages(total_records: u64, limit: u32) -> u64 {
    if limit == 0 {
        return 0;
    }
    total_records.div_ceil(u64::from(limit))
}

/// Ordering direction for sorted listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    /// Smallest values first.
    #[default]
    Asc,
    /// Largest values first.
    Desc,
}

impl SortDirection {
    /// Lowercase keyword as accepted on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a sort direction keyword is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported sort direction: {0}")]
pub struct UnknownSortDirection(String);

impl UnknownSortDirection {
    /// The rejected input.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl FromStr for SortDirection {
    type Err = UnknownSortDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(UnknownSortDirection(s.to_owned())),
        }
    }
}
