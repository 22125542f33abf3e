use chrono::{DateTime, Utc};

use super::ValidationErrors;
use crate::models::{Article, ArticleDraft, ArticlePatch, Category, Language};

/// Editable state of the admin article form.
///
/// Tag de-duplication happens here, at the form level; the store accepts
/// whatever tag list it is given.
#[derive(Debug, Clone)]
pub struct ArticleForm {
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

impl Default for ArticleForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            slug: String::new(),
            content: String::new(),
            excerpt: String::new(),
            image_url: String::new(),
            category: Category::Politics,
            author: String::new(),
            publish_date: Utc::now(),
            tags: Vec::new(),
            featured: false,
            language: Language::En,
        }
    }
}

impl ArticleForm {
    /// Pre-fills the form for editing an existing article
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            slug: article.slug.clone(),
            content: article.content.clone(),
            excerpt: article.excerpt.clone(),
            image_url: article.image_url.clone(),
            category: article.category,
            author: article.author.clone(),
            publish_date: article.publish_date,
            tags: article.tags.clone(),
            featured: article.featured,
            language: article.language,
        }
    }

    /// Adds a tag unless it is blank or already present
    pub fn add_tag(&mut self, tag: &str) {
        let tag = tag.trim();
        if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
            self.tags.push(tag.to_string());
        }
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    fn check(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.title.trim().is_empty() {
            errors.add("title", "Title is required");
        }
        if self.content.trim().is_empty() {
            errors.add("content", "Content is required");
        }
        if self.excerpt.trim().is_empty() {
            errors.add("excerpt", "Excerpt is required");
        }
        if self.image_url.trim().is_empty() {
            errors.add("imageUrl", "Image URL is required");
        }
        if self.author.trim().is_empty() {
            errors.add("author", "Author is required");
        }
        errors
    }

    /// Validates the required fields and produces a draft for
    /// `ContentStore::add_article`
    pub fn into_draft(self) -> Result<ArticleDraft, ValidationErrors> {
        let errors = self.check();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ArticleDraft {
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
        })
    }

    /// Validates the required fields and produces a full-overwrite patch
    /// for `ContentStore::update_article`
    pub fn into_patch(self) -> Result<ArticlePatch, ValidationErrors> {
        let draft = self.into_draft()?;
        Ok(ArticlePatch {
            title: Some(draft.title),
            slug: Some(draft.slug),
            content: Some(draft.content),
            excerpt: Some(draft.excerpt),
            image_url: Some(draft.image_url),
            category: Some(draft.category),
            author: Some(draft.author),
            publish_date: Some(draft.publish_date),
            tags: Some(draft.tags),
            featured: Some(draft.featured),
            language: Some(draft.language),
        })
    }
}
