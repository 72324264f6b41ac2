use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub name: Option<String>,
}

/// Normalized paging request. Page numbers start at 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    pub page: i64,
    pub page_size: i64,
    pub name: Option<String>,
}

impl PageQuery {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl From<PageParams> for PageQuery {
    fn from(params: PageParams) -> Self {
        PageQuery {
            page: params.page.unwrap_or(DEFAULT_PAGE).max(1),
            page_size: params.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1),
            name: params.name.filter(|name| !name.is_empty()),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub records: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
}

impl<T> Page<T> {
    pub fn new(query: &PageQuery, records: Vec<T>, total: i64) -> Self {
        Page {
            records,
            total,
            page: query.page,
            page_size: query.page_size,
        }
    }
}
