//! Pagination query parameters.

use serde::Deserialize;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// `?page=&pageSize=` query parameters.
///
/// Values are kept as raw strings and parsed leniently: anything missing,
/// unparseable or zero falls back to the default. Range clamping happens in
/// [`crate::application::services::LinkService::list_links`].
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub page_size: Option<String>,
}

impl PaginationParams {
    pub fn page(&self) -> i64 {
        parse_or_default(self.page.as_deref(), DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> i64 {
        parse_or_default(self.page_size.as_deref(), DEFAULT_PAGE_SIZE)
    }
}

fn parse_or_default(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v != 0)
        .unwrap_or(default)
}
