use chrono::Utc;
use log::{error, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::sync::Arc;

use crate::data::{keys, seed, Storage};
use crate::models::{
    Article, ArticleDraft, ArticleId, ArticlePatch, Comment, CommentDraft, CommentId, Category,
    Language,
};

/// How many articles `latest_articles` callers usually ask for
pub const DEFAULT_LATEST_COUNT: usize = 10;
/// How many articles `related_articles` callers usually ask for
pub const DEFAULT_RELATED_COUNT: usize = 3;

/// Single source of truth for articles and comments.
///
/// Both collections live in memory in insertion order for the lifetime of
/// the process; every mutation re-serializes the affected collection to the
/// storage adapter. The store raises no user-facing errors: lookups signal
/// absence with `None`/empty results, and persistence failures are logged
/// and swallowed.
pub struct ContentStore {
    articles: Vec<Article>,
    comments: Vec<Comment>,
    storage: Arc<dyn Storage>,
    rng: RefCell<StdRng>,
}

impl ContentStore {
    /// Loads both collections from storage, falling back to the seed
    /// dataset when an entry is absent or unreadable
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_rng(storage, StdRng::from_entropy())
    }

    /// Like `new`, but with a caller-supplied rng so the shuffle in
    /// `related_articles` can be pinned in tests
    pub fn with_rng(storage: Arc<dyn Storage>, rng: StdRng) -> Self {
        let articles =
            load_collection(storage.as_ref(), keys::ARTICLES).unwrap_or_else(seed::seed_articles);
        let comments =
            load_collection(storage.as_ref(), keys::COMMENTS).unwrap_or_else(seed::seed_comments);
        Self {
            articles,
            comments,
            storage,
            rng: RefCell::new(rng),
        }
    }

    /// Current article collection, insertion order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Current comment collection, insertion order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Assigns a fresh id, appends the article, and persists. Field
    /// validation is the caller's job (see the forms module).
    pub fn add_article(&mut self, draft: ArticleDraft) -> ArticleId {
        let id = ArticleId::generate();
        self.articles.push(draft.into_article(id.clone()));
        self.persist(keys::ARTICLES, &self.articles);
        id
    }

    /// Merges `patch` onto the article with `id`; silent no-op when no
    /// article has that id
    pub fn update_article(&mut self, id: &ArticleId, patch: ArticlePatch) {
        let Some(article) = self.articles.iter_mut().find(|a| &a.id == id) else {
            return;
        };
        article.apply(patch);
        self.persist(keys::ARTICLES, &self.articles);
    }

    /// Removes the article with `id` and cascades to its comments; silent
    /// no-op when the id is absent
    pub fn delete_article(&mut self, id: &ArticleId) {
        let before = self.articles.len();
        self.articles.retain(|a| &a.id != id);
        if self.articles.len() == before {
            return;
        }
        self.comments.retain(|c| &c.article_id != id);
        self.persist(keys::ARTICLES, &self.articles);
        self.persist(keys::COMMENTS, &self.comments);
    }

    /// Articles matching all given predicates, in insertion order. An
    /// absent category or an absent/empty search term is unconstrained;
    /// the search term matches case-insensitively against title or body.
    pub fn filter_articles(
        &self,
        category: Option<Category>,
        search: Option<&str>,
        language: Language,
    ) -> Vec<Article> {
        let needle = search
            .filter(|s| !s.is_empty())
            .map(|s| s.to_lowercase());
        self.articles
            .iter()
            .filter(|article| article.language == language)
            .filter(|article| category.map_or(true, |c| article.category == c))
            .filter(|article| match &needle {
                Some(needle) => {
                    article.title.to_lowercase().contains(needle)
                        || article.content.to_lowercase().contains(needle)
                }
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Featured articles in `language`, most recent first; ties keep
    /// insertion order
    pub fn featured_articles(&self, language: Language) -> Vec<Article> {
        let mut featured: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| a.featured && a.language == language)
            .cloned()
            .collect();
        featured.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
        featured
    }

    /// The `count` most recent articles in `language`
    pub fn latest_articles(&self, count: usize, language: Language) -> Vec<Article> {
        let mut latest: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| a.language == language)
            .cloned()
            .collect();
        latest.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
        latest.truncate(count);
        latest
    }

    /// The article with `id`, or `None`
    pub fn article_by_id(&self, id: &ArticleId) -> Option<Article> {
        self.articles.iter().find(|a| &a.id == id).cloned()
    }

    /// Up to `count` other articles sharing `article`'s category and
    /// language, in a fresh random order on every call
    pub fn related_articles(&self, article: &Article, count: usize) -> Vec<Article> {
        let mut related: Vec<Article> = self
            .articles
            .iter()
            .filter(|a| {
                a.id != article.id
                    && a.category == article.category
                    && a.language == article.language
            })
            .cloned()
            .collect();
        related.shuffle(&mut *self.rng.borrow_mut());
        related.truncate(count);
        related
    }

    /// Assigns a fresh id and the current time, appends the comment, and
    /// persists
    pub fn add_comment(&mut self, draft: CommentDraft) -> CommentId {
        let id = CommentId::generate();
        self.comments.push(Comment {
            id: id.clone(),
            article_id: draft.article_id,
            name: draft.name,
            email: draft.email,
            content: draft.content,
            created_at: Utc::now(),
        });
        self.persist(keys::COMMENTS, &self.comments);
        id
    }

    /// Comments on the given article, newest first
    pub fn comments_for_article(&self, article_id: &ArticleId) -> Vec<Comment> {
        let mut matching: Vec<Comment> = self
            .comments
            .iter()
            .filter(|c| &c.article_id == article_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }

    /// Re-serializes a whole collection under `key`. Write failures leave
    /// in-memory and persisted state divergent until the next save; they
    /// are logged, not surfaced.
    fn persist<T: Serialize>(&self, key: &str, collection: &[T]) {
        match serde_json::to_string(collection) {
            Ok(json) => {
                if let Err(err) = self.storage.save(key, &json) {
                    error!("Failed to persist {}: {:#}", key, err);
                }
            }
            Err(err) => error!("Failed to serialize {}: {}", key, err),
        }
    }
}

/// Reads and parses one persisted collection; `None` means "use the seed"
fn load_collection<T: DeserializeOwned>(storage: &dyn Storage, key: &str) -> Option<Vec<T>> {
    match storage.load(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(collection) => Some(collection),
            Err(err) => {
                warn!("Stored {} is unreadable, using seed data: {}", key, err);
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!("Failed to read {}, using seed data: {:#}", key, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemoryStorage;
    use chrono::TimeZone;

    fn seeded_store() -> ContentStore {
        ContentStore::with_rng(Arc::new(MemoryStorage::new()), StdRng::seed_from_u64(42))
    }

    fn draft(title: &str, category: Category, language: Language) -> ArticleDraft {
        ArticleDraft {
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            content: format!("<p>{}</p>", title),
            excerpt: format!("{} excerpt", title),
            image_url: "https://example.com/img.jpg".to_string(),
            category,
            author: "Staff Reporter".to_string(),
            publish_date: chrono::Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
            tags: vec![],
            featured: false,
            language,
        }
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|a| a.id.0.as_str()).collect()
    }

    #[test]
    fn test_empty_storage_falls_back_to_seed() {
        let store = seeded_store();
        assert_eq!(store.articles().len(), 8);
        assert_eq!(store.comments().len(), 5);
    }

    #[test]
    fn test_corrupt_storage_falls_back_to_seed() {
        let storage = Arc::new(MemoryStorage::new());
        storage.save(keys::ARTICLES, "{not json").unwrap();
        storage.save(keys::COMMENTS, "[{\"id\": 7}]").unwrap();
        let store = ContentStore::with_rng(storage, StdRng::seed_from_u64(0));
        assert_eq!(store.articles().len(), 8);
        assert_eq!(store.comments().len(), 5);
    }

    #[test]
    fn test_store_reloads_persisted_state() {
        let storage = Arc::new(MemoryStorage::new());
        let added = {
            let mut store =
                ContentStore::with_rng(storage.clone(), StdRng::seed_from_u64(0));
            store.add_article(draft("Reload Me", Category::Science, Language::En))
        };
        let store = ContentStore::with_rng(storage, StdRng::seed_from_u64(0));
        assert_eq!(store.articles().len(), 9);
        let reloaded = store.article_by_id(&added).unwrap();
        assert_eq!(reloaded.title, "Reload Me");
        // dates come back as dates, not strings
        assert_eq!(
            reloaded.publish_date,
            chrono::Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_add_article_grows_collection_and_is_retrievable() {
        let mut store = seeded_store();
        let before = store.articles().len();
        let id = store.add_article(draft("Fresh Story", Category::Science, Language::En));
        assert_eq!(store.articles().len(), before + 1);
        let stored = store.article_by_id(&id).unwrap();
        assert_eq!(stored.title, "Fresh Story");
        assert_eq!(stored.category, Category::Science);
    }

    #[test]
    fn test_update_article_merges_partial_fields() {
        let mut store = seeded_store();
        let id = ArticleId("1".to_string());
        store.update_article(
            &id,
            ArticlePatch {
                title: Some("Rewritten Headline".to_string()),
                ..Default::default()
            },
        );
        let updated = store.article_by_id(&id).unwrap();
        assert_eq!(updated.title, "Rewritten Headline");
        assert_eq!(updated.slug, "tech-giants-unveil-new-ai-innovations");
        assert!(updated.featured);
    }

    #[test]
    fn test_update_unknown_id_is_a_no_op() {
        let mut store = seeded_store();
        let snapshot = store.articles().to_vec();
        store.update_article(
            &ArticleId("999".to_string()),
            ArticlePatch {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(store.articles(), snapshot.as_slice());
    }

    #[test]
    fn test_delete_article_cascades_to_comments() {
        let mut store = seeded_store();
        let id = ArticleId("1".to_string());
        assert_eq!(store.comments_for_article(&id).len(), 2);

        store.delete_article(&id);

        assert_eq!(store.article_by_id(&id), None);
        assert!(store.comments_for_article(&id).is_empty());
        assert!(store.comments().iter().all(|c| c.article_id != id));
    }

    #[test]
    fn test_delete_persists_both_collections() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ContentStore::with_rng(storage.clone(), StdRng::seed_from_u64(0));
        store.delete_article(&ArticleId("1".to_string()));

        let raw = storage.load(keys::ARTICLES).unwrap().unwrap();
        let persisted: Vec<Article> = serde_json::from_str(&raw).unwrap();
        assert!(persisted.iter().all(|a| a.id.0 != "1"));

        let raw = storage.load(keys::COMMENTS).unwrap().unwrap();
        let persisted: Vec<Comment> = serde_json::from_str(&raw).unwrap();
        assert!(persisted.iter().all(|c| c.article_id.0 != "1"));
    }

    #[test]
    fn test_delete_unknown_id_is_a_no_op() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = ContentStore::with_rng(storage.clone(), StdRng::seed_from_u64(0));
        store.delete_article(&ArticleId("999".to_string()));
        assert_eq!(store.articles().len(), 8);
        // nothing was persisted either
        assert_eq!(storage.load(keys::ARTICLES).unwrap(), None);
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let store = seeded_store();
        let unconstrained = store.filter_articles(None, None, Language::En);
        for category in Category::ALL {
            let narrowed =
                store.filter_articles(Some(category), Some("climate"), Language::En);
            for article in &narrowed {
                assert!(unconstrained.contains(article));
                assert_eq!(article.category, category);
                assert_eq!(article.language, Language::En);
            }
        }
    }

    #[test]
    fn test_filter_scopes_to_language() {
        let store = seeded_store();
        let bengali = store.filter_articles(None, None, Language::Bn);
        assert_eq!(ids(&bengali), vec!["7", "8"]);
    }

    #[test]
    fn test_filter_search_is_case_insensitive_over_title_and_body() {
        let store = seeded_store();
        let hits = store.filter_articles(Some(Category::Technology), Some("AI"), Language::En);
        assert_eq!(ids(&hits), vec!["1"]);

        // matches body text too
        let hits = store.filter_articles(None, Some("bitfinex"), Language::En);
        assert_eq!(ids(&hits), vec!["4"]);
    }

    #[test]
    fn test_filter_empty_search_is_unconstrained() {
        let store = seeded_store();
        let all = store.filter_articles(None, None, Language::En);
        let empty = store.filter_articles(None, Some(""), Language::En);
        assert_eq!(all, empty);
    }

    #[test]
    fn test_filter_preserves_insertion_order() {
        let store = seeded_store();
        let all = store.filter_articles(None, None, Language::En);
        assert_eq!(ids(&all), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_featured_english_articles_newest_first() {
        let store = seeded_store();
        let featured = store.featured_articles(Language::En);
        assert_eq!(ids(&featured), vec!["1", "2"]);
        for pair in featured.windows(2) {
            assert!(pair[0].publish_date >= pair[1].publish_date);
        }
    }

    #[test]
    fn test_featured_ties_keep_insertion_order() {
        let mut store = seeded_store();
        let mut tie = draft("Tied Story", Category::Science, Language::En);
        tie.featured = true;
        tie.publish_date = chrono::Utc.with_ymd_and_hms(2023, 11, 15, 0, 0, 0).unwrap();
        let id = store.add_article(tie);

        let featured = store.featured_articles(Language::En);
        // same date as article "1"; the earlier-inserted article wins the tie
        assert_eq!(ids(&featured), vec!["1", id.0.as_str(), "2"]);
    }

    #[test]
    fn test_latest_articles_sorted_and_truncated() {
        let store = seeded_store();
        let latest = store.latest_articles(3, Language::En);
        assert_eq!(latest.len(), 3);
        assert_eq!(ids(&latest), vec!["1", "2", "3"]);
        for pair in latest.windows(2) {
            assert!(pair[0].publish_date >= pair[1].publish_date);
        }

        // never more than count, even when fewer match
        assert_eq!(store.latest_articles(10, Language::Bn).len(), 2);
    }

    #[test]
    fn test_article_by_id_absent_is_none() {
        let store = seeded_store();
        assert!(store.article_by_id(&ArticleId("42".to_string())).is_none());
    }

    #[test]
    fn test_related_articles_share_category_and_language_and_exclude_self() {
        let mut store = seeded_store();
        store.add_article(draft("Chip Fab Expansion", Category::Technology, Language::En));
        store.add_article(draft("Quantum Startup Funding", Category::Technology, Language::En));

        let subject = store.article_by_id(&ArticleId("1".to_string())).unwrap();
        let related = store.related_articles(&subject, DEFAULT_RELATED_COUNT);

        assert_eq!(related.len(), 2);
        for article in &related {
            assert_ne!(article.id, subject.id);
            assert_eq!(article.category, subject.category);
            assert_eq!(article.language, subject.language);
        }

        assert_eq!(store.related_articles(&subject, 1).len(), 1);
    }

    #[test]
    fn test_related_articles_deterministic_with_same_seed() {
        let build = || {
            let mut store = seeded_store();
            for i in 0..5 {
                store.add_article(draft(
                    &format!("Tech Story {}", i),
                    Category::Technology,
                    Language::En,
                ));
            }
            let subject = store.article_by_id(&ArticleId("1".to_string())).unwrap();
            ids(&store.related_articles(&subject, 3))
                .into_iter()
                .map(String::from)
                .collect::<Vec<_>>()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_add_comment_appears_first() {
        let mut store = seeded_store();
        let article_id = ArticleId("3".to_string());
        let id = store.add_comment(CommentDraft {
            article_id: article_id.clone(),
            name: "Amina Rahman".to_string(),
            email: "amina@example.com".to_string(),
            content: "Hopeful news for patients everywhere.".to_string(),
        });

        let comments = store.comments_for_article(&article_id);
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, id);
        assert_eq!(comments[0].name, "Amina Rahman");
    }

    #[test]
    fn test_comments_sorted_newest_first() {
        let store = seeded_store();
        let comments = store.comments_for_article(&ArticleId("1".to_string()));
        assert_eq!(comments.len(), 2);
        for pair in comments.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
        assert_eq!(comments[0].id.0, "2");
    }

    #[test]
    fn test_orphaned_comments_are_silently_skipped() {
        let store = seeded_store();
        let comments = store.comments_for_article(&ArticleId("nonexistent".to_string()));
        assert!(comments.is_empty());
    }
}
