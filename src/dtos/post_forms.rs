use serde::Deserialize;

use crate::forms::{self, FormError};
use crate::models::{ChangePostInput, CreatePostInput};

/// Post editor submission. Every field optional; create and update decide
/// which ones they need.
#[derive(Debug, Default, Deserialize)]
pub struct PostForm {
    pub title: Option<String>,
    pub locale: Option<String>,
    pub body_json: Option<String>,
    pub body_html: Option<String>,
    pub body_text: Option<String>,
    pub category_id: Option<String>,
    pub is_featured: Option<String>,
    pub published_at: Option<String>,
    pub short_description: Option<String>,
    /// Comma-separated.
    pub keywords: Option<String>,
    /// Kept as a string: an untouched number input still submits `""`.
    pub reading_time_minutes: Option<String>,
    pub translation_of: Option<String>,
}

impl PostForm {
    pub fn into_create_input(self) -> Result<CreatePostInput, FormError> {
        Ok(CreatePostInput {
            title: forms::require(&self.title, "title")?.to_string(),
            locale: forms::require(&self.locale, "locale")?.to_string(),
            body_json: forms::parse_json(forms::require(&self.body_json, "body_json")?, "body_json")?,
            body_html: forms::require(&self.body_html, "body_html")?.to_string(),
            body_text: forms::require(&self.body_text, "body_text")?.to_string(),
            is_featured: forms::checkbox(&self.is_featured),
            category_id: forms::opt_id(&self.category_id, "category_id")?,
            keywords: split_keywords(&self.keywords),
            published_at: forms::opt_timestamp(&self.published_at, "published_at")?,
            reading_time_minutes: forms::opt_number(&self.reading_time_minutes, "reading_time_minutes")?,
            short_description: self.short_description.filter(|s| !s.trim().is_empty()),
            translation_of: forms::opt_id(&self.translation_of, "translation_of")?,
        })
    }

    /// Partial update: only submitted fields make it into the payload.
    /// The checkbox is the exception; an unchecked box is absent from the
    /// form but still means false, so it is always included.
    pub fn into_change_input(self) -> Result<ChangePostInput, FormError> {
        let body_json = match &self.body_json {
            Some(raw) if !raw.trim().is_empty() => {
                Some(forms::parse_json(raw, "body_json")?)
            }
            _ => None,
        };
        Ok(ChangePostInput {
            title: self.title,
            locale: self.locale,
            body_json,
            body_html: self.body_html,
            body_text: self.body_text,
            is_featured: Some(forms::checkbox(&self.is_featured)),
            category_id: forms::opt_id(&self.category_id, "category_id")?,
            keywords: self.keywords.as_ref().map(|_| split_keywords(&self.keywords)),
            published_at: forms::opt_timestamp(&self.published_at, "published_at")?.map(Some),
            reading_time_minutes: forms::opt_number(&self.reading_time_minutes, "reading_time_minutes")?,
            short_description: self.short_description,
            translation_of: forms::opt_id(&self.translation_of, "translation_of")?,
            slug: None,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct PublishForm {
    pub published_at: Option<String>,
}

fn split_keywords(raw: &Option<String>) -> Vec<String> {
    raw.as_deref()
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> PostForm {
        PostForm {
            title: Some("A title".into()),
            locale: Some("pt-BR".into()),
            body_json: Some(r#"{"type":"doc"}"#.into()),
            body_html: Some("<p>hi</p>".into()),
            body_text: Some("hi".into()),
            ..Default::default()
        }
    }

    #[test]
    fn create_requires_body_fields() {
        let form = PostForm {
            body_html: None,
            ..full_form()
        };
        assert!(matches!(
            form.into_create_input(),
            Err(FormError::Missing("body_html"))
        ));
    }

    #[test]
    fn create_parses_embedded_editor_document() {
        let input = full_form().into_create_input().unwrap();
        assert_eq!(input.body_json["type"], "doc");
        assert!(!input.is_featured);
    }

    #[test]
    fn update_includes_only_submitted_fields() {
        let form = PostForm {
            title: Some("Renamed".into()),
            ..Default::default()
        };
        let payload = serde_json::to_value(form.into_change_input().unwrap()).unwrap();
        assert_eq!(payload["title"], "Renamed");
        assert!(payload.get("body_html").is_none());
        assert!(payload.get("published_at").is_none());
        // unchecked checkbox still means false
        assert_eq!(payload["is_featured"], false);
    }

    #[test]
    fn update_treats_untouched_number_input_as_absent() {
        let form = PostForm {
            title: Some("Renamed".into()),
            reading_time_minutes: Some("".into()),
            ..Default::default()
        };
        let payload = serde_json::to_value(form.into_change_input().unwrap()).unwrap();
        assert_eq!(payload["title"], "Renamed");
        assert!(payload.get("reading_time_minutes").is_none());
    }

    #[test]
    fn update_rejects_non_numeric_reading_time() {
        let form = PostForm {
            reading_time_minutes: Some("soon".into()),
            ..Default::default()
        };
        assert!(matches!(
            form.into_change_input(),
            Err(FormError::Number("reading_time_minutes"))
        ));
    }

    #[test]
    fn update_rejects_malformed_editor_document() {
        let form = PostForm {
            body_json: Some("{not json".into()),
            ..Default::default()
        };
        assert!(matches!(
            form.into_change_input(),
            Err(FormError::Json("body_json"))
        ));
    }

    #[test]
    fn keywords_split_on_commas() {
        let form = PostForm {
            keywords: Some("rust, blogging , ".into()),
            ..full_form()
        };
        let input = form.into_create_input().unwrap();
        assert_eq!(input.keywords, vec!["rust", "blogging"]);
    }
}
