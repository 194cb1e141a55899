use serde::Deserialize;

use crate::forms::{self, FormError};
use crate::models::{ChangeClippingItemInput, CreateClippingItemInput};

#[derive(Debug, Default, Deserialize)]
pub struct ClippingItemForm {
    pub title: Option<String>,
    pub locale: Option<String>,
    pub body: Option<String>,
    pub source: Option<String>,
    pub source_url: Option<String>,
    pub source_published_at: Option<String>,
    pub category_id: Option<String>,
    pub is_featured: Option<String>,
    pub published_at: Option<String>,
    pub short_description: Option<String>,
    /// Comma-separated.
    pub tags: Option<String>,
    /// Kept as a string: an untouched number input still submits `""`.
    pub reading_time_minutes: Option<String>,
}

impl ClippingItemForm {
    pub fn into_create_input(self) -> Result<CreateClippingItemInput, FormError> {
        Ok(CreateClippingItemInput {
            title: forms::require(&self.title, "title")?.to_string(),
            locale: forms::require(&self.locale, "locale")?.to_string(),
            body: forms::parse_json(forms::require(&self.body, "body")?, "body")?,
            source: forms::require(&self.source, "source")?.to_string(),
            source_url: forms::require(&self.source_url, "source_url")?.to_string(),
            source_published_at: forms::normalize_timestamp(
                forms::require(&self.source_published_at, "source_published_at")?,
                "source_published_at",
            )?,
            category_id: forms::opt_id(&self.category_id, "category_id")?,
            is_featured: Some(forms::checkbox(&self.is_featured)),
            published_at: forms::opt_timestamp(&self.published_at, "published_at")?,
            reading_time_minutes: forms::opt_number(&self.reading_time_minutes, "reading_time_minutes")?,
            short_description: self.short_description.filter(|s| !s.trim().is_empty()),
            tags: split_tags(&self.tags),
        })
    }

    pub fn into_change_input(self) -> Result<ChangeClippingItemInput, FormError> {
        let body = match &self.body {
            Some(raw) if !raw.trim().is_empty() => Some(forms::parse_json(raw, "body")?),
            _ => None,
        };
        Ok(ChangeClippingItemInput {
            title: self.title,
            locale: self.locale,
            body,
            source: self.source,
            source_url: self.source_url,
            source_published_at: forms::opt_timestamp(
                &self.source_published_at,
                "source_published_at",
            )?,
            category_id: forms::opt_id(&self.category_id, "category_id")?,
            is_featured: Some(forms::checkbox(&self.is_featured)),
            published_at: forms::opt_timestamp(&self.published_at, "published_at")?.map(Some),
            reading_time_minutes: forms::opt_number(&self.reading_time_minutes, "reading_time_minutes")?,
            short_description: self.short_description,
            tags: self.tags.as_ref().map(|_| split_tags(&self.tags)),
            slug: None,
        })
    }
}

fn split_tags(raw: &Option<String>) -> Vec<String> {
    raw.as_deref()
        .map(|s| {
            s.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> ClippingItemForm {
        ClippingItemForm {
            title: Some("Clipped".into()),
            locale: Some("en-US".into()),
            body: Some(r#"{"type":"doc"}"#.into()),
            source: Some("The Paper".into()),
            source_url: Some("https://paper.test/a".into()),
            source_published_at: Some("2024-05-04T10:00".into()),
            ..Default::default()
        }
    }

    #[test]
    fn create_normalizes_source_timestamp() {
        let input = full_form().into_create_input().unwrap();
        assert_eq!(input.source_published_at, "2024-05-04T10:00:00");
    }

    #[test]
    fn create_fails_fast_on_missing_source() {
        let form = ClippingItemForm {
            source: None,
            ..full_form()
        };
        assert!(matches!(
            form.into_create_input(),
            Err(FormError::Missing("source"))
        ));
    }

    #[test]
    fn update_leaves_unsubmitted_fields_out() {
        let form = ClippingItemForm {
            source_url: Some("https://paper.test/b".into()),
            reading_time_minutes: Some("".into()),
            ..Default::default()
        };
        let payload = serde_json::to_value(form.into_change_input().unwrap()).unwrap();
        assert_eq!(payload["source_url"], "https://paper.test/b");
        assert!(payload.get("title").is_none());
        assert!(payload.get("published_at").is_none());
        assert!(payload.get("reading_time_minutes").is_none());
    }
}
