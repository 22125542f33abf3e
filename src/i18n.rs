use crate::models::Language;

/// Static UI string table: translation key, English text, Bengali text.
/// Linear scan is fine at this size; the table never changes at runtime.
const TRANSLATIONS: &[(&str, &str, &str)] = &[
    ("news_portal", "News Portal", "নিউজ পোর্টাল"),
    ("home", "Home", "হোম"),
    ("politics", "Politics", "রাজনীতি"),
    ("technology", "Technology", "প্রযুক্তি"),
    ("business", "Business", "ব্যবসা"),
    ("health", "Health", "স্বাস্থ্য"),
    ("entertainment", "Entertainment", "বিনোদন"),
    ("science", "Science", "বিজ্ঞান"),
    ("education", "Education", "শিক্ষা"),
    ("sports", "Sports", "খেলাধুলা"),
    ("login", "Login", "লগইন"),
    ("logout", "Logout", "লগআউট"),
    ("admin", "Admin", "অ্যাডমিন"),
    ("search", "Search", "অনুসন্ধান"),
    ("latest_news", "Latest News", "সর্বশেষ খবর"),
    ("featured_stories", "Featured Stories", "বিশেষ সংবাদ"),
    ("read_more", "Read More", "আরো পড়ুন"),
    ("comments", "Comments", "মন্তব্যসমূহ"),
    ("leave_comment", "Leave a Comment", "মন্তব্য করুন"),
    ("your_name", "Your Name", "আপনার নাম"),
    ("your_email", "Your Email", "আপনার ইমেইল"),
    ("your_comment", "Your Comment", "আপনার মন্তব্য"),
    ("submit", "Submit", "জমা দিন"),
    ("subscribe", "Subscribe", "সাবস্ক্রাইব"),
    (
        "subscribe_newsletter",
        "Subscribe to our Newsletter",
        "আমাদের নিউজলেটার সাবস্ক্রাইব করুন",
    ),
    ("email_address", "Email Address", "ইমেইল ঠিকানা"),
    ("published_on", "Published on", "প্রকাশিত"),
    ("by_author", "By", "লেখক"),
    ("related_articles", "Related Articles", "সম্পর্কিত নিবন্ধ"),
    ("tags", "Tags", "ট্যাগ"),
    ("save", "Save", "সংরক্ষণ"),
    ("cancel", "Cancel", "বাতিল"),
    ("title", "Title", "শিরোনাম"),
    ("content", "Content", "বিষয়বস্তু"),
    ("excerpt", "Excerpt", "সারসংক্ষেপ"),
    ("image_url", "Image URL", "ছবির URL"),
    ("category", "Category", "বিভাগ"),
    ("author", "Author", "লেখক"),
    ("publish_date", "Publish Date", "প্রকাশের তারিখ"),
    ("is_featured", "Is Featured", "ফিচার্ড"),
    ("add_new_article", "Add New Article", "নতুন নিবন্ধ যোগ করুন"),
    ("edit_article", "Edit Article", "নিবন্ধ সম্পাদনা"),
    ("delete_article", "Delete Article", "নিবন্ধ মুছুন"),
    ("manage_articles", "Manage Articles", "নিবন্ধ পরিচালনা"),
    ("no_articles_found", "No articles found", "কোন নিবন্ধ পাওয়া যায়নি"),
    (
        "thank_you_for_subscribing",
        "Thank you for subscribing!",
        "সাবস্ক্রাইব করার জন্য ধন্যবাদ!",
    ),
    (
        "comment_added",
        "Comment added successfully!",
        "মন্তব্য সফলভাবে যোগ করা হয়েছে!",
    ),
    (
        "article_saved",
        "Article saved successfully!",
        "নিবন্ধ সফলভাবে সংরক্ষিত হয়েছে!",
    ),
    (
        "article_deleted",
        "Article deleted successfully!",
        "নিবন্ধ সফলভাবে মুছে ফেলা হয়েছে!",
    ),
];

/// Looks up the display string for `key` in `language`; `None` when the key
/// is not in the table
pub fn lookup(language: Language, key: &str) -> Option<&'static str> {
    TRANSLATIONS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, bn)| match language {
            Language::En => *en,
            Language::Bn => *bn,
        })
}
