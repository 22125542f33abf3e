use super::{is_valid_email, ValidationErrors};
use crate::models::{ArticleId, CommentDraft};

/// Editable state of the reader comment form
#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub name: String,
    pub email: String,
    pub content: String,
}

impl CommentForm {
    fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.name.trim().is_empty() {
            errors.add("name", "Name is required");
        }
        if self.email.trim().is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(self.email.trim()) {
            errors.add("email", "Email is invalid");
        }
        if self.content.trim().is_empty() {
            errors.add("content", "Comment is required");
        }
        errors
    }

    /// Validates the fields and produces a draft for
    /// `ContentStore::add_comment` on the given article
    pub fn into_draft(self, article_id: ArticleId) -> Result<CommentDraft, ValidationErrors> {
        let errors = self.check();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CommentDraft {
            article_id,
            name: self.name,
            email: self.email,
            content: self.content,
        })
    }
}
