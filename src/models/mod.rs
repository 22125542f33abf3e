pub mod article;
pub mod comment;
pub mod user;

pub use article::{Article, ArticleDraft, ArticleId, ArticlePatch, Category, Language};
pub use comment::{Comment, CommentDraft, CommentId};
pub use user::{AuthState, AuthUser, Role};
