pub mod account;
pub mod category;
pub mod clipping;
pub mod image;
pub mod post;

pub use account::{AccessToken, CreateUserAccessTokenWithPassword, User};
pub use category::{Category, CategoryQuery, ChangeCategoryInput, CreateCategoryInput, PostCategoryQuery};
pub use clipping::{ChangeClippingItemInput, ClippingItem, ClippingItemQuery, CreateClippingItemInput};
pub use image::{ImageQuery, ImageResponse, ImageSet};
pub use post::{ChangePostInput, CreatePostInput, Post, PostQuery};

/// Number of items list endpoints return when `take` is not given.
pub const DEFAULT_TAKE: i64 = 100;

pub(crate) type QueryPairs = Vec<(&'static str, String)>;

/// Absent optional parameters must never reach the wire, so query structs
/// build explicit pairs instead of serializing whole structs.
pub(crate) fn push_opt(pairs: &mut QueryPairs, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        pairs.push((key, v.clone()));
    }
}

pub(crate) fn push_opt_display<T: std::fmt::Display>(
    pairs: &mut QueryPairs,
    key: &'static str,
    value: &Option<T>,
) {
    if let Some(v) = value {
        pairs.push((key, v.to_string()));
    }
}

pub(crate) fn push_each<T: std::fmt::Display>(
    pairs: &mut QueryPairs,
    key: &'static str,
    values: &[T],
) {
    for v in values {
        pairs.push((key, v.to_string()));
    }
}

/// Cursor pagination shared by every list endpoint. `after`/`before` are
/// opaque to the console and passed through verbatim.
#[derive(Debug, Clone, Default)]
pub struct CursorPagination {
    pub after: Option<String>,
    pub before: Option<String>,
    pub take: Option<i64>,
}

impl CursorPagination {
    pub(crate) fn push(&self, pairs: &mut QueryPairs) {
        push_opt(pairs, "after", &self.after);
        push_opt(pairs, "before", &self.before);
        pairs.push(("take", self.take.unwrap_or(DEFAULT_TAKE).to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_take_and_omits_cursors() {
        let mut pairs = QueryPairs::new();
        CursorPagination::default().push(&mut pairs);
        assert_eq!(pairs, vec![("take", "100".to_string())]);
    }

    #[test]
    fn pagination_passes_cursors_through_verbatim() {
        let mut pairs = QueryPairs::new();
        CursorPagination {
            after: Some("opaque-cursor==".into()),
            before: None,
            take: Some(25),
        }
        .push(&mut pairs);
        assert_eq!(
            pairs,
            vec![
                ("after", "opaque-cursor==".to_string()),
                ("take", "25".to_string())
            ]
        );
    }
}
