use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::{CursorPagination, QueryPairs, push_each, push_opt, push_opt_display};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub account_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub slug: String,
    pub locale: String,
    pub body_html: String,
    /// Rich-text editor document, opaque to the console.
    pub body_json: Value,
    pub body_text: String,
    pub category_id: Option<Uuid>,
    pub is_featured: bool,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub published_at: Option<String>,
    pub reading_time_minutes: Option<i32>,
    pub short_description: Option<String>,
    pub translation_of: Option<Uuid>,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct CreatePostInput {
    pub title: String,
    pub locale: String,
    pub body_html: String,
    pub body_json: Value,
    pub body_text: String,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_of: Option<Uuid>,
}

/// Partial update. A `None` field is left out of the payload entirely;
/// `published_at` is tri-state because unpublishing sends an explicit null.
#[derive(Debug, Default, Serialize)]
pub struct ChangePostInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_json: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time_minutes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_of: Option<Uuid>,
}

#[derive(Debug, Default)]
pub struct PostQuery {
    pub category_id: Vec<Uuid>,
    pub category_slug: Option<String>,
    pub is_featured: Option<bool>,
    pub locale: Option<String>,
    pub published_at: Option<String>,
    pub slug: Option<String>,
    pub translation_of: Option<Uuid>,
    pub pagination: CursorPagination,
}

impl PostQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_each(&mut pairs, "category_id", &self.category_id);
        push_opt(&mut pairs, "category_slug", &self.category_slug);
        push_opt_display(&mut pairs, "is_featured", &self.is_featured);
        push_opt(&mut pairs, "locale", &self.locale);
        push_opt(&mut pairs, "published_at", &self.published_at);
        push_opt(&mut pairs, "slug", &self.slug);
        push_opt_display(&mut pairs, "translation_of", &self.translation_of);
        self.pagination.push(&mut pairs);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_absent_filters() {
        let pairs = PostQuery {
            locale: Some("pt-BR".into()),
            ..Default::default()
        }
        .pairs();
        assert_eq!(
            pairs,
            vec![
                ("locale", "pt-BR".to_string()),
                ("take", "100".to_string())
            ]
        );
    }

    #[test]
    fn query_repeats_multi_value_filters() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let pairs = PostQuery {
            category_id: vec![a, b],
            ..Default::default()
        }
        .pairs();
        assert_eq!(pairs[0], ("category_id", a.to_string()));
        assert_eq!(pairs[1], ("category_id", b.to_string()));
    }

    #[test]
    fn unpublish_serializes_explicit_null() {
        let input = ChangePostInput {
            published_at: Some(None),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"published_at":null}"#
        );
    }

    #[test]
    fn untouched_published_at_is_absent_from_payload() {
        let input = ChangePostInput {
            title: Some("New title".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "New title" }));
        assert!(value.get("published_at").is_none());
    }
}
