//! Form validation rules for categories and posts.
//!
//! Pure functions, no I/O. Each error's `Display` is the exact message the
//! views render next to the offending field. Checks are fail-fast: the
//! first rule that trips is the one reported.

use thiserror::Error;

use crate::api::{Category, CategoryId};

/// Maximum category name length, in characters.
pub const CATEGORY_NAME_MAX: usize = 15;
/// Maximum post title length, in characters.
pub const TITLE_MAX: usize = 30;
/// Maximum post content length, in characters.
pub const CONTENT_MAX: usize = 140;

/// Why a category name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CategoryNameError {
    #[error("Category name cannot be empty")]
    Empty,
    #[error("Category name must be up to 15 characters")]
    TooLong,
    #[error("Category name can only contain letters with no spaces")]
    InvalidChars,
    #[error("Category name already exists")]
    Duplicate,
}

/// Why a post draft was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PostDraftError {
    #[error("Please select at least one category")]
    NoCategorySelected,
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title must be less than 30 characters")]
    TitleTooLong,
    #[error("Content cannot be empty")]
    EmptyContent,
    #[error("Content must be less than 140 characters")]
    ContentTooLong,
}

/// Input a [`PostDraftError`] points at. Also doubles as the focus cycle of
/// the post forms, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PostField {
    #[default]
    Title,
    Content,
    Categories,
}

impl PostDraftError {
    /// The field this error should be rendered next to.
    pub fn field(self) -> PostField {
        match self {
            Self::NoCategorySelected => PostField::Categories,
            Self::EmptyTitle | Self::TitleTooLong => PostField::Title,
            Self::EmptyContent | Self::ContentTooLong => PostField::Content,
        }
    }
}

/// Check a prospective category name against the current category set.
///
/// Order: empty, length, characters, uniqueness. Emptiness ignores
/// surrounding whitespace; the length limit applies to the raw input.
/// Uniqueness is an exact, case-sensitive comparison.
pub fn category_name(name: &str, existing: &[Category]) -> Result<(), CategoryNameError> {
    if name.trim().is_empty() {
        return Err(CategoryNameError::Empty);
    }
    if name.chars().count() > CATEGORY_NAME_MAX {
        return Err(CategoryNameError::TooLong);
    }
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CategoryNameError::InvalidChars);
    }
    if existing.iter().any(|category| category.name == name) {
        return Err(CategoryNameError::Duplicate);
    }
    Ok(())
}

/// Check post fields: categories first, then title, then content.
pub fn post_draft(
    title: &str,
    content: &str,
    categories: &[CategoryId],
) -> Result<(), PostDraftError> {
    if categories.is_empty() {
        return Err(PostDraftError::NoCategorySelected);
    }
    if title.trim().is_empty() {
        return Err(PostDraftError::EmptyTitle);
    }
    if title.chars().count() > TITLE_MAX {
        return Err(PostDraftError::TitleTooLong);
    }
    if content.trim().is_empty() {
        return Err(PostDraftError::EmptyContent);
    }
    if content.chars().count() > CONTENT_MAX {
        return Err(PostDraftError::ContentTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(names: &[&str]) -> Vec<Category> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Category {
                id: CategoryId(i as u64 + 1),
                name: name.to_string(),
            })
            .collect()
    }

    fn one_category() -> Vec<CategoryId> {
        vec![CategoryId(1)]
    }

    // -- category names ----------------------------------------------------

    #[test]
    fn category_name_accepts_plain_letters() {
        assert_eq!(category_name("Tech", &[]), Ok(()));
        assert_eq!(category_name("tech", &categories(&["Tech"])), Ok(()));
    }

    #[test]
    fn category_name_rejects_empty_and_whitespace() {
        assert_eq!(category_name("", &[]), Err(CategoryNameError::Empty));
        assert_eq!(category_name("   ", &[]), Err(CategoryNameError::Empty));
    }

    #[test]
    fn category_name_length_counts_raw_chars() {
        assert_eq!(category_name("abcdefghijklmno", &[]), Ok(())); // exactly 15
        assert_eq!(
            category_name("abcdefghijklmnop", &[]),
            Err(CategoryNameError::TooLong)
        );
    }

    #[test]
    fn category_name_rejects_non_letters() {
        assert_eq!(category_name("Tech1", &[]), Err(CategoryNameError::InvalidChars));
        assert_eq!(category_name("Te ch", &[]), Err(CategoryNameError::InvalidChars));
        assert_eq!(category_name("Café", &[]), Err(CategoryNameError::InvalidChars));
    }

    #[test]
    fn category_name_rejects_exact_duplicate() {
        let existing = categories(&["Tech", "Life"]);
        assert_eq!(
            category_name("Tech", &existing),
            Err(CategoryNameError::Duplicate)
        );
    }

    #[test]
    fn category_checks_run_in_order() {
        // A name that is both too long and has invalid chars reports length
        // first.
        assert_eq!(
            category_name("1234567890123456", &[]),
            Err(CategoryNameError::TooLong)
        );
        // Leading space on a duplicate trips the character rule first.
        let existing = categories(&["Tech"]);
        assert_eq!(
            category_name(" Tech", &existing),
            Err(CategoryNameError::InvalidChars)
        );
    }

    // -- post drafts ---------------------------------------------------------

    #[test]
    fn post_draft_accepts_valid_fields() {
        assert_eq!(post_draft("Title", "Content", &one_category()), Ok(()));
    }

    #[test]
    fn post_draft_requires_a_category_before_anything_else() {
        // Even with every other field invalid, categories are reported first.
        assert_eq!(post_draft("", "", &[]), Err(PostDraftError::NoCategorySelected));
    }

    #[test]
    fn post_draft_checks_title_before_content() {
        assert_eq!(post_draft("", "", &one_category()), Err(PostDraftError::EmptyTitle));
        assert_eq!(
            post_draft("  ", "Content", &one_category()),
            Err(PostDraftError::EmptyTitle)
        );
    }

    #[test]
    fn post_draft_title_boundary_is_thirty() {
        let exactly_30 = "a".repeat(30);
        let over = "a".repeat(31);
        assert_eq!(post_draft(&exactly_30, "Content", &one_category()), Ok(()));
        assert_eq!(
            post_draft(&over, "Content", &one_category()),
            Err(PostDraftError::TitleTooLong)
        );
    }

    #[test]
    fn post_draft_content_boundary_is_one_forty() {
        let exactly_140 = "b".repeat(140);
        let over = "b".repeat(141);
        assert_eq!(post_draft("Title", &exactly_140, &one_category()), Ok(()));
        assert_eq!(
            post_draft("Title", &over, &one_category()),
            Err(PostDraftError::ContentTooLong)
        );
    }

    #[test]
    fn post_draft_rejects_blank_content() {
        assert_eq!(
            post_draft("Title", "   ", &one_category()),
            Err(PostDraftError::EmptyContent)
        );
    }

    #[test]
    fn length_limits_count_chars_not_bytes() {
        // 30 multibyte characters are 60 bytes but still a legal title.
        let title = "é".repeat(30);
        assert_eq!(post_draft(&title, "Content", &one_category()), Ok(()));
    }

    #[test]
    fn error_messages_match_the_forms() {
        assert_eq!(
            CategoryNameError::InvalidChars.to_string(),
            "Category name can only contain letters with no spaces"
        );
        assert_eq!(
            PostDraftError::TitleTooLong.to_string(),
            "Title must be less than 30 characters"
        );
        assert_eq!(
            PostDraftError::NoCategorySelected.to_string(),
            "Please select at least one category"
        );
    }

    #[test]
    fn draft_errors_point_at_their_field() {
        assert_eq!(PostDraftError::NoCategorySelected.field(), PostField::Categories);
        assert_eq!(PostDraftError::EmptyTitle.field(), PostField::Title);
        assert_eq!(PostDraftError::TitleTooLong.field(), PostField::Title);
        assert_eq!(PostDraftError::EmptyContent.field(), PostField::Content);
        assert_eq!(PostDraftError::ContentTooLong.field(), PostField::Content);
    }
}
