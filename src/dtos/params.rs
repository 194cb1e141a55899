use serde::Deserialize;

use crate::models::CursorPagination;

/// Query-string parameters accepted by the listing pages and handed through
/// to the upstream list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub after: Option<String>,
    pub before: Option<String>,
    pub take: Option<i64>,
    pub locale: Option<String>,
}

impl ListParams {
    pub fn pagination(&self) -> CursorPagination {
        CursorPagination {
            after: self.after.clone(),
            before: self.before.clone(),
            take: self.take,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageListParams {
    pub after: Option<String>,
    pub before: Option<String>,
    pub take: Option<i64>,
    pub size: Option<String>,
}
