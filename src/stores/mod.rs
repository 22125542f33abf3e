pub mod content;
pub mod language;
pub mod session;
pub mod theme;

pub use content::{ContentStore, DEFAULT_LATEST_COUNT, DEFAULT_RELATED_COUNT};
pub use language::LanguageStore;
pub use session::SessionStore;
pub use theme::{Theme, ThemeStore};
