use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for articles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArticleId(pub String);

impl ArticleId {
    pub fn generate() -> Self {
        ArticleId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed set of sections an article can be published under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Politics,
    Sports,
    Technology,
    Health,
    Entertainment,
    Business,
    Science,
    Education,
}

impl Category {
    /// Every category, in the order the navigation lists them
    pub const ALL: [Category; 8] = [
        Category::Politics,
        Category::Sports,
        Category::Technology,
        Category::Health,
        Category::Entertainment,
        Category::Business,
        Category::Science,
        Category::Education,
    ];

    /// Lowercase token, also the translation key for the section name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Politics => "politics",
            Category::Sports => "sports",
            Category::Technology => "technology",
            Category::Health => "health",
            Category::Entertainment => "entertainment",
            Category::Business => "business",
            Category::Science => "science",
            Category::Education => "education",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "politics" => Some(Category::Politics),
            "sports" => Some(Category::Sports),
            "technology" => Some(Category::Technology),
            "health" => Some(Category::Health),
            "entertainment" => Some(Category::Entertainment),
            "business" => Some(Category::Business),
            "science" => Some(Category::Science),
            "education" => Some(Category::Education),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content language; partitions the whole catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "bn")]
    Bn,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "en" => Some(Language::En),
            "bn" => Some(Language::Bn),
            _ => None,
        }
    }

    /// The other language of the pair
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Bn,
            Language::Bn => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A published content item, scoped to one language and category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Unique identifier, assigned by the content store on creation
    pub id: ArticleId,
    pub title: String,
    /// URL slug; uniqueness is the caller's problem, not the store's
    pub slug: String,
    /// Rich text / HTML body
    pub content: String,
    pub excerpt: String,
    /// External image reference, stored unvalidated
    pub image_url: String,
    pub category: Category,
    pub author: String,
    /// Drives sort order for latest/featured queries; not necessarily "now"
    pub publish_date: DateTime<Utc>,
    pub tags: Vec<String>,
    /// Homepage prominence flag
    pub featured: bool,
    pub language: Language,
}

/// Everything an article needs except its id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub image_url: String,
    pub category: Category,
    pub author: String,
    pub publish_date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub featured: bool,
    pub language: Language,
}

impl ArticleDraft {
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            excerpt: self.excerpt,
            image_url: self.image_url,
            category: self.category,
            author: self.author,
            publish_date: self.publish_date,
            tags: self.tags,
            featured: self.featured,
            language: self.language,
        }
    }
}

/// Partial update; only `Some` fields are applied.
///
/// `language` is editable here because the edit form allows it, even though
/// articles are not expected to switch language after creation.
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<Category>,
    pub author: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub language: Option<Language>,
}

impl Article {
    /// Merges a patch onto this article, field by field
    pub fn apply(&mut self, patch: ArticlePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(publish_date) = patch.publish_date {
            self.publish_date = publish_date;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
    }
}
