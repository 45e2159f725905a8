//! Validated collection query parameters shared by the article and comment listings.

use sea_orm::Order;

use crate::server::{error::AppError, util::parse::parse_positive};

/// Sort direction for collection listings. Defaults to descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parses the `order` query parameter. Matching is case-sensitive.
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value {
            None => Ok(Self::default()),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(other) => Err(AppError::BadRequest(format!(
                "Invalid order '{}': expected asc or desc",
                other
            ))),
        }
    }

    pub fn into_order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

/// Page window over a collection. Pages are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u64,
    pub page: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            page: 1,
        }
    }
}

impl Pagination {
    pub const DEFAULT_LIMIT: u64 = 10;

    /// Parses the `limit` and `p` query parameters.
    ///
    /// # Returns
    /// - `Ok(Pagination)` - Both values absent or positive integers
    /// - `Err(AppError::BadRequest)` - Either value is non-numeric or not positive
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> Result<Self, AppError> {
        let limit = limit
            .map(|v| parse_positive("limit", v))
            .transpose()?
            .unwrap_or(Self::DEFAULT_LIMIT);
        let page = page.map(|v| parse_positive("p", v)).transpose()?.unwrap_or(1);

        Ok(Self { limit, page })
    }

    /// Number of rows skipped before this page, saturating at the bindable maximum. Page
    /// zero is treated as the first page.
    pub fn offset(&self) -> u64 {
        self.limit
            .saturating_mul(self.page.saturating_sub(1))
            .min(i64::MAX as u64)
    }
}

/// Looks up a `sort_by` value in a table of accepted column names.
///
/// # Arguments
/// - `value` - Raw `sort_by` query value, `None` selects `default`
/// - `choices` - Accepted names and the key each one selects
/// - `default` - Key used when the parameter is absent
pub fn parse_sort_key<K: Copy>(
    value: Option<&str>,
    choices: &[(&str, K)],
    default: K,
) -> Result<K, AppError> {
    let Some(value) = value else {
        return Ok(default);
    };

    choices
        .iter()
        .find(|(name, _)| *name == value)
        .map(|(_, key)| *key)
        .ok_or_else(|| {
            let accepted: Vec<&str> = choices.iter().map(|(name, _)| *name).collect();
            AppError::BadRequest(format!(
                "Invalid sort_by '{}': expected one of {}",
                value,
                accepted.join(", ")
            ))
        })
}
