//! Pagination types shared by all list endpoints.

use serde::{Deserialize, Serialize};

/// Query-string pagination: `?page=0&size=10`, zero-based page index.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
}

fn default_size() -> u32 {
    10
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
        }
    }
}

impl PageParams {
    /// Build from individually-optional query parameters.
    pub fn from_parts(page: Option<u32>, size: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(0),
            size: size.unwrap_or_else(default_size),
        }
    }

    /// Row offset of the first element on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    pub fn limit(&self) -> u64 {
        u64::from(self.size)
    }
}

/// Paged response envelope.
///
/// Field names follow the public wire contract (`content`, `totalElements`),
/// which list consumers page through.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub page: u32,
    pub size: u32,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, total_elements: u64, params: PageParams) -> Self {
        let size = params.size.max(1);
        let total_pages = total_elements.div_ceil(u64::from(size));
        Self {
            content,
            total_elements,
            total_pages,
            page: params.page,
            size: params.size,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            page: self.page,
            size: self.size,
        }
    }
}
