use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CursorPagination, QueryPairs, push_each, push_opt};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageSet {
    pub id: Uuid,
    pub size: String,
    pub path: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    pub id: Uuid,
    pub alt: Option<String>,
    pub caption: Option<String>,
    #[serde(default)]
    pub image_set: Vec<ImageSet>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Default)]
pub struct ImageQuery {
    pub image_id: Vec<Uuid>,
    pub size: Option<String>,
    pub pagination: CursorPagination,
}

impl ImageQuery {
    pub fn pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_each(&mut pairs, "image_id", &self.image_id);
        push_opt(&mut pairs, "size", &self.size);
        self.pagination.push(&mut pairs);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_omits_absent_filters() {
        let pairs = ImageQuery {
            size: Some("800".into()),
            pagination: CursorPagination {
                take: Some(50),
                ..Default::default()
            },
            ..Default::default()
        }
        .pairs();
        assert_eq!(
            pairs,
            vec![("size", "800".to_string()), ("take", "50".to_string())]
        );
    }
}
