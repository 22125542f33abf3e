pub mod data;
pub mod forms;
pub mod i18n;
pub mod models;
pub mod stores;
pub mod utils;

// Re-export storage seam
pub use data::{keys, MemoryStorage, SqliteStorage, Storage};

// Re-export models
pub use models::{
    article::{Article, ArticleDraft, ArticleId, ArticlePatch, Category, Language},
    comment::{Comment, CommentDraft, CommentId},
    user::{AuthState, AuthUser, Role},
};

// Re-export stores selectively
pub use stores::{
    content::ContentStore,
    language::LanguageStore,
    session::SessionStore,
    theme::{Theme, ThemeStore},
};
