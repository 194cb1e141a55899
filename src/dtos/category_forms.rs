use serde::Deserialize;

use crate::forms::{self, FormError};
use crate::models::{ChangeCategoryInput, CreateCategoryInput};

/// Shared by the blogs and clippings category editors; both speak the same
/// category schema.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryForm {
    pub name: Option<String>,
    pub locale: Option<String>,
    pub translation_of: Option<String>,
}

impl CategoryForm {
    pub fn into_create_input(self) -> Result<CreateCategoryInput, FormError> {
        Ok(CreateCategoryInput {
            name: forms::require(&self.name, "name")?.to_string(),
            locale: forms::require(&self.locale, "locale")?.to_string(),
            translation_of: forms::opt_id(&self.translation_of, "translation_of")?,
        })
    }

    pub fn into_change_input(self) -> Result<ChangeCategoryInput, FormError> {
        Ok(ChangeCategoryInput {
            name: self.name,
            locale: self.locale,
            translation_of: forms::opt_id(&self.translation_of, "translation_of")?,
            slug: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name_and_locale() {
        let form = CategoryForm {
            name: Some("News".into()),
            ..Default::default()
        };
        assert!(matches!(
            form.into_create_input(),
            Err(FormError::Missing("locale"))
        ));
    }

    #[test]
    fn change_keeps_only_submitted_fields() {
        let form = CategoryForm {
            locale: Some("es-ES".into()),
            ..Default::default()
        };
        let payload = serde_json::to_value(form.into_change_input().unwrap()).unwrap();
        assert_eq!(payload, serde_json::json!({ "locale": "es-ES" }));
    }
}
