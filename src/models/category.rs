use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CursorPagination, QueryPairs, push_opt, push_opt_display};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub slug: String,
    pub locale: String,
    pub translation_of: Option<Uuid>,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct CreateCategoryInput {
    pub name: String,
    pub locale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_of: Option<Uuid>,
}

#[derive(Debug, Default, Serialize)]
pub struct ChangeCategoryInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_of: Option<Uuid>,
}

/// Filters for `/clippings/admin/categories`.
#[derive(Debug, Default)]
pub struct CategoryQuery {
    pub locale: Option<String>,
    pub name_starts_with: Option<String>,
    pub translation_of: Option<Uuid>,
    pub pagination: CursorPagination,
}

impl CategoryQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "locale", &self.locale);
        push_opt(&mut pairs, "name_starts_with", &self.name_starts_with);
        push_opt_display(&mut pairs, "translation_of", &self.translation_of);
        self.pagination.push(&mut pairs);
        pairs
    }
}

/// Filters for `/admin/blogs/categories`, which takes an exact `name`
/// match and no cursors.
#[derive(Debug, Default)]
pub struct PostCategoryQuery {
    pub locale: Option<String>,
    pub name: Option<String>,
    pub translation_of: Option<Uuid>,
}

impl PostCategoryQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "locale", &self.locale);
        push_opt(&mut pairs, "name", &self.name);
        push_opt_display(&mut pairs, "translation_of", &self.translation_of);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_sends_only_take() {
        assert_eq!(
            CategoryQuery::default().pairs(),
            vec![("take", "100".to_string())]
        );
        assert!(PostCategoryQuery::default().pairs().is_empty());
    }

    #[test]
    fn change_input_omits_unset_fields() {
        let input = ChangeCategoryInput {
            name: Some("Science".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            serde_json::json!({ "name": "Science" })
        );
    }
}
