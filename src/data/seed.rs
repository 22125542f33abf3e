use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Article, ArticleId, Category, Comment, CommentId, Language};

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

fn datetime(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

/// The fixture catalog used when storage is empty or unreadable: six English
/// and two Bengali articles, with ids `"1"` through `"8"`. Articles 1, 2, 7
/// and 8 are featured.
pub fn seed_articles() -> Vec<Article> {
    vec![
        Article {
            id: ArticleId("1".to_string()),
            title: "Tech Giants Unveil New AI Innovations at Annual Conference".to_string(),
            slug: "tech-giants-unveil-new-ai-innovations".to_string(),
            content: "<p>In a landmark event for the tech industry, leading companies showcased \
                      their latest AI advancements at the annual TechWorld Conference yesterday. \
                      The presentations revealed significant breakthroughs in natural language \
                      processing, computer vision, and machine learning algorithms.</p>"
                .to_string(),
            excerpt: "Leading technology companies revealed groundbreaking artificial \
                      intelligence advancements at the annual TechWorld Conference, showcasing \
                      innovations in language processing, computer vision, and privacy-focused \
                      machine learning."
                .to_string(),
            image_url: "https://images.pexels.com/photos/2582937/pexels-photo-2582937.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
            category: Category::Technology,
            author: "Michael Jordan".to_string(),
            publish_date: date(2023, 11, 15),
            tags: tags(&["AI", "Machine Learning", "Technology", "Innovation"]),
            featured: true,
            language: Language::En,
        },
        Article {
            id: ArticleId("2".to_string()),
            title: "Global Climate Summit Reaches Landmark Agreement".to_string(),
            slug: "global-climate-summit-agreement".to_string(),
            content: "<p>After two weeks of intense negotiations, delegates from 195 countries \
                      reached a historic agreement at the Global Climate Summit today. The pact, \
                      known as the \"Paris Evolution Framework,\" establishes more ambitious \
                      targets for reducing greenhouse gas emissions and provides substantial \
                      funding for climate adaptation in vulnerable nations.</p>"
                .to_string(),
            excerpt: "Nearly 200 nations have signed a landmark climate agreement that \
                      accelerates emission reduction timelines and establishes a $100 billion \
                      fund for climate adaptation in developing countries."
                .to_string(),
            image_url: "https://images.pexels.com/photos/2990650/pexels-photo-2990650.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
            category: Category::Politics,
            author: "Sarah Johnson".to_string(),
            publish_date: date(2023, 11, 12),
            tags: tags(&["Climate Change", "Global Politics", "Environment", "Paris Agreement"]),
            featured: true,
            language: Language::En,
        },
        Article {
            id: ArticleId("3".to_string()),
            title: "Revolutionary Cancer Treatment Shows Promising Results in Clinical Trials"
                .to_string(),
            slug: "revolutionary-cancer-treatment-trials".to_string(),
            content: "<p>A groundbreaking cancer treatment that combines immunotherapy with \
                      targeted genetic manipulation has shown remarkable results in early \
                      clinical trials, researchers announced yesterday. The therapy demonstrated \
                      an 87% response rate in patients with advanced forms of previously \
                      untreatable cancers.</p>"
                .to_string(),
            excerpt: "A novel cancer therapy combining CRISPR gene editing with immunotherapy \
                      has shown an 87% response rate in patients with advanced cancers that were \
                      previously considered untreatable."
                .to_string(),
            image_url: "https://images.pexels.com/photos/3825586/pexels-photo-3825586.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
            category: Category::Health,
            author: "Dr. James Wilson".to_string(),
            publish_date: date(2023, 11, 10),
            tags: tags(&["Cancer Research", "Medical Breakthrough", "Immunotherapy", "Health"]),
            featured: false,
            language: Language::En,
        },
        Article {
            id: ArticleId("4".to_string()),
            title: "Major Cryptocurrency Exchange Announces Regulatory Framework Adoption"
                .to_string(),
            slug: "cryptocurrency-exchange-regulatory-framework".to_string(),
            content: "<p>Global cryptocurrency exchange BitFinex announced today that it will \
                      voluntarily adopt a comprehensive regulatory framework, setting a new \
                      precedent for the largely unregulated digital asset industry. The move \
                      comes amid increasing scrutiny from financial authorities worldwide and \
                      growing concerns about consumer protection.</p>"
                .to_string(),
            excerpt: "Leading cryptocurrency exchange BitFinex has announced it will voluntarily \
                      implement a comprehensive regulatory framework, including enhanced KYC \
                      procedures, regular audits, and a $200 million consumer protection fund."
                .to_string(),
            image_url: "https://images.pexels.com/photos/844124/pexels-photo-844124.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
            category: Category::Business,
            author: "Robert Chen".to_string(),
            publish_date: date(2023, 11, 8),
            tags: tags(&["Cryptocurrency", "Regulation", "Finance", "Bitcoin"]),
            featured: false,
            language: Language::En,
        },
        Article {
            id: ArticleId("5".to_string()),
            title: "International Football Championship Finals Set After Dramatic Semi-Finals"
                .to_string(),
            slug: "international-football-championship-finals".to_string(),
            content: "<p>The stage is set for a historic International Football Championship \
                      final after two thrilling semi-final matches determined the last teams \
                      standing. Brazil and France will face off in Sunday's championship match \
                      after defeating their respective opponents in dramatic fashion.</p>"
                .to_string(),
            excerpt: "Brazil and France have advanced to the International Football Championship \
                      final after dramatic semi-final victories. Brazil defeated Germany 3-2 in \
                      extra time, while France shut out Spain 2-0 with tactical precision."
                .to_string(),
            image_url: "https://images.pexels.com/photos/46798/the-ball-stadion-football-the-pitch-46798.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
            category: Category::Sports,
            author: "Carlos Rodriguez".to_string(),
            publish_date: date(2023, 11, 5),
            tags: tags(&["Football", "Sports", "World Cup", "International Championship"]),
            featured: false,
            language: Language::En,
        },
        Article {
            id: ArticleId("6".to_string()),
            title: "Award-Winning Director Announces Groundbreaking Virtual Reality Film Series"
                .to_string(),
            slug: "director-announces-vr-film-series".to_string(),
            content: "<p>Oscar-winning director Christopher Nolan announced today his plans to \
                      create a groundbreaking film series specifically designed for virtual \
                      reality platforms. The project, titled \"Dimensions,\" will consist of \
                      five interconnected episodes that push the boundaries of storytelling in \
                      the emerging medium.</p>"
                .to_string(),
            excerpt: "Acclaimed filmmaker Christopher Nolan has announced \"Dimensions,\" a \
                      five-part narrative film series designed specifically for virtual reality \
                      platforms, starring Viola Davis, Idris Elba, and Daniel Kaluuya."
                .to_string(),
            image_url: "https://images.pexels.com/photos/7240528/pexels-photo-7240528.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
            category: Category::Entertainment,
            author: "Jennifer Parker".to_string(),
            publish_date: date(2023, 11, 2),
            tags: tags(&["Entertainment", "Virtual Reality", "Film", "Technology"]),
            featured: false,
            language: Language::En,
        },
        Article {
            id: ArticleId("7".to_string()),
            title: "টেক জায়ান্টরা বার্ষিক কনফারেন্সে নতুন এআই উদ্ভাবন প্রকাশ করেছে".to_string(),
            slug: "tech-giants-unveil-new-ai-innovations-bn".to_string(),
            content: "<p>প্রযুক্তি শিল্পের একটি মাইলফলক ঘটনায়, শীর্ষস্থানীয় কোম্পানিগুলি গতকাল বার্ষিক টেকওয়ার্ল্ড \
                      কনফারেন্সে তাদের সর্বশেষ এআই অগ্রগতি প্রদর্শন করেছে। উপস্থাপনাগুলি প্রাকৃতিক ভাষা প্রক্রিয়াকরণ, \
                      কম্পিউটার ভিশন এবং মেশিন লার্নিং অ্যালগরিদমগুলিতে উল্লেখযোগ্য অগ্রগতি প্রকাশ করেছে।</p>"
                .to_string(),
            excerpt: "প্রধান প্রযুক্তি সংস্থাগুলি বার্ষিক টেকওয়ার্ল্ড কনফারেন্সে গ্রাউন্ডব্রেকিং কৃত্রিম বুদ্ধিমত্তার অগ্রগতি \
                      প্রকাশ করেছে, ভাষা প্রক্রিয়াকরণ, কম্পিউটার ভিশন এবং গোপনীয়তা-কেন্দ্রিক মেশিন লার্নিংয়ে উদ্ভাবন \
                      প্রদর্শন করেছে।"
                .to_string(),
            image_url: "https://images.pexels.com/photos/2582937/pexels-photo-2582937.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
            category: Category::Technology,
            author: "রাহিম খান".to_string(),
            publish_date: date(2023, 11, 15),
            tags: tags(&["AI", "Machine Learning", "Technology", "Innovation"]),
            featured: true,
            language: Language::Bn,
        },
        Article {
            id: ArticleId("8".to_string()),
            title: "বিশ্ব জলবায়ু সম্মেলন ঐতিহাসিক চুক্তিতে পৌঁছেছে".to_string(),
            slug: "global-climate-summit-agreement-bn".to_string(),
            content: "<p>দুই সপ্তাহের তীব্র আলোচনার পর, আজ বিশ্ব জলবায়ু সম্মেলনে 195টি দেশের প্রতিনিধিরা একটি \
                      ঐতিহাসিক চুক্তিতে পৌঁছেছেন। \"প্যারিস এভোলিউশন ফ্রেমওয়ার্ক\" নামে পরিচিত এই চুক্তি, গ্রিনহাউস \
                      গ্যাস নির্গমন হ্রাসের জন্য আরও উচ্চাভিলাষী লক্ষ্য নির্ধারণ করে এবং দুর্বল দেশগুলিতে জলবায়ু \
                      অভিযোজনের জন্য উল্লেখযোগ্য অর্থায়ন প্রদান করে।</p>"
                .to_string(),
            excerpt: "প্রায় 200টি দেশ একটি ঐতিহাসিক জলবায়ু চুক্তিতে স্বাক্ষর করেছে যা নির্গমন হ্রাসের সময়সীমা ত্বরান্বিত \
                      করে এবং উন্নয়নশীল দেশগুলিতে জলবায়ু অভিযোজনের জন্য একটি $100 বিলিয়ন তহবিল প্রতিষ্ঠা করে।"
                .to_string(),
            image_url: "https://images.pexels.com/photos/2990650/pexels-photo-2990650.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2".to_string(),
            category: Category::Politics,
            author: "আশরাফুল হক".to_string(),
            publish_date: date(2023, 11, 12),
            tags: tags(&["Climate Change", "Global Politics", "Environment", "Paris Agreement"]),
            featured: true,
            language: Language::Bn,
        },
    ]
}

/// Fixture comments attached to the seed articles
pub fn seed_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: CommentId("1".to_string()),
            article_id: ArticleId("1".to_string()),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            content: "This is fascinating! I wonder how these AI advancements will affect jobs \
                      in the creative industries."
                .to_string(),
            created_at: datetime(2023, 11, 16, 10, 23),
        },
        Comment {
            id: CommentId("2".to_string()),
            article_id: ArticleId("1".to_string()),
            name: "Lisa Johnson".to_string(),
            email: "lisa@example.com".to_string(),
            content: "I'm excited about the privacy-focused ML tools. It's about time companies \
                      prioritized user privacy alongside innovation."
                .to_string(),
            created_at: datetime(2023, 11, 16, 11, 45),
        },
        Comment {
            id: CommentId("3".to_string()),
            article_id: ArticleId("2".to_string()),
            name: "Michael Chen".to_string(),
            email: "michael@example.com".to_string(),
            content: "While this agreement is a step in the right direction, I worry that the \
                      timelines are still too conservative given the acceleration of climate \
                      impacts we're already seeing."
                .to_string(),
            created_at: datetime(2023, 11, 13, 9, 12),
        },
        Comment {
            id: CommentId("4".to_string()),
            article_id: ArticleId("2".to_string()),
            name: "Sarah Williams".to_string(),
            email: "sarah@example.com".to_string(),
            content: "The $100 billion fund is crucial. Developing nations need financial \
                      support to transition their economies without sacrificing growth and \
                      poverty reduction goals."
                .to_string(),
            created_at: datetime(2023, 11, 14, 16, 30),
        },
        Comment {
            id: CommentId("5".to_string()),
            article_id: ArticleId("3".to_string()),
            name: "Dr. Robert Brown".to_string(),
            email: "robert@example.com".to_string(),
            content: "As an oncologist, I'm cautiously optimistic about these results. CRISPR \
                      has shown tremendous potential in early research, but translating that to \
                      clinical outcomes has been challenging. This could be the breakthrough \
                      we've been waiting for."
                .to_string(),
            created_at: datetime(2023, 11, 11, 14, 18),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_shape() {
        let articles = seed_articles();
        assert_eq!(articles.len(), 8);
        assert_eq!(
            articles
                .iter()
                .filter(|a| a.language == Language::En)
                .count(),
            6
        );
        assert_eq!(
            articles
                .iter()
                .filter(|a| a.language == Language::Bn)
                .count(),
            2
        );

        let featured: Vec<&str> = articles
            .iter()
            .filter(|a| a.featured)
            .map(|a| a.id.0.as_str())
            .collect();
        assert_eq!(featured, vec!["1", "2", "7", "8"]);
    }

    #[test]
    fn test_seed_comments_reference_seed_articles() {
        let articles = seed_articles();
        for comment in seed_comments() {
            assert!(articles.iter().any(|a| a.id == comment.article_id));
        }
    }
}
