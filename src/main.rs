use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use log::info;

use khobor::stores::DEFAULT_RELATED_COUNT;
use khobor::utils;
use khobor::{ContentStore, LanguageStore, SessionStore, SqliteStorage, Storage, ThemeStore};

fn main() -> Result<()> {
    // Set up logging
    env_logger::init();
    info!("Starting Khobor news portal...");

    // Ensure the data directory exists before opening the storage file
    let storage_path = "data/khobor.db";
    utils::ensure_directory_exists(storage_path)?;

    // Open the key-value storage every store persists through
    info!("Opening storage...");
    let storage: Arc<dyn Storage> = Arc::new(SqliteStorage::open(Path::new(storage_path))?);

    // Initialize the stores; collections fall back to seed data on first run
    let language_store = LanguageStore::new(storage.clone());
    let theme_store = ThemeStore::new(storage.clone());
    let session_store = SessionStore::new(storage.clone());
    let content_store = ContentStore::new(storage);

    let language = language_store.language();
    info!(
        "Locale {}, theme {}, admin session: {}",
        language,
        theme_store.theme().as_str(),
        session_store.is_authenticated()
    );

    // Dump the homepage view of the catalog for the active language
    println!("== {} ==", language_store.translate("featured_stories"));
    for article in content_store.featured_articles(language) {
        println!(
            "  [{}] {} — {} ({})",
            language_store.translate(article.category.as_str()),
            article.title,
            article.author,
            utils::format_date(article.publish_date)
        );
    }

    println!("== {} ==", language_store.translate("latest_news"));
    for article in content_store.latest_articles(6, language) {
        let comments = content_store.comments_for_article(&article.id);
        println!(
            "  [{}] {} ({}, {} {})",
            language_store.translate(article.category.as_str()),
            article.title,
            utils::format_date(article.publish_date),
            comments.len(),
            language_store.translate("comments")
        );
        for related in content_store.related_articles(&article, DEFAULT_RELATED_COUNT) {
            println!("      ↳ {}", related.title);
        }
    }

    Ok(())
}
