use serde::{Deserialize, Serialize};

/// Server-assigned category identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

/// Server-assigned post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named tag attachable to posts. Names are unique on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A published post with its category tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub categories: Vec<Category>,
}

impl Post {
    /// True when the post carries at least one of the given categories.
    pub fn has_any_category(&self, ids: &[CategoryId]) -> bool {
        self.categories.iter().any(|category| ids.contains(&category.id))
    }
}

/// Client-side fields of a post being created or replaced.
///
/// Updates are full replacements: the server does not merge fields, so a
/// draft always carries the complete desired state. Serializes to the wire
/// shape `{"title", "content", "categories": [id, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub categories: Vec<CategoryId>,
}

/// Response envelope for `GET /api/categories/`. The post list endpoint
/// returns a bare array; this one wraps its array in an object.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesEnvelope {
    pub categories: Vec<Category>,
}
