use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{CursorPagination, QueryPairs, push_each, push_opt, push_opt_display};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClippingItem {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub locale: String,
    /// Rich-text editor document, opaque to the console.
    pub body: Value,
    pub category_id: Option<Uuid>,
    pub created_at: String,
    pub created_by_id: Uuid,
    pub is_featured: bool,
    pub published_at: Option<String>,
    pub reading_time_minutes: Option<i32>,
    pub short_description: Option<String>,
    pub source: String,
    pub source_published_at: String,
    pub source_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct CreateClippingItemInput {
    pub title: String,
    pub locale: String,
    pub body: Value,
    pub source: String,
    pub source_published_at: String,
    pub source_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Partial update; `published_at` is tri-state, see `ChangePostInput`.
#[derive(Debug, Default, Serialize)]
pub struct ChangeClippingItemInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Default)]
pub struct ClippingItemQuery {
    pub category_id: Vec<Uuid>,
    pub is_featured: Option<bool>,
    pub locale: Option<String>,
    pub published_at: Option<String>,
    pub slug: Option<String>,
    pub tag: Vec<String>,
    pub pagination: CursorPagination,
}

impl ClippingItemQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_each(&mut pairs, "category_id", &self.category_id);
        push_opt_display(&mut pairs, "is_featured", &self.is_featured);
        push_opt(&mut pairs, "locale", &self.locale);
        push_opt(&mut pairs, "published_at", &self.published_at);
        push_opt(&mut pairs, "slug", &self.slug);
        push_each(&mut pairs, "tag", &self.tag);
        self.pagination.push(&mut pairs);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_sends_only_take() {
        assert_eq!(
            ClippingItemQuery::default().pairs(),
            vec![("take", "100".to_string())]
        );
    }

    #[test]
    fn unpublish_clears_published_at_explicitly() {
        let input = ChangeClippingItemInput {
            published_at: Some(None),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"published_at":null}"#
        );
    }
}
