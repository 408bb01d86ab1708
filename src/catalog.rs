//! Sample Catalog
//!
//! Compiled-in sample data for the views that have no remote backing:
//! the Connect feed, the content page, shorts, chat channels, profile and
//! analytics. Every call builds a fresh copy; nothing here is mutable.

use crate::models::{
    Achievement, Analytics, Author, CategoryShare, Channel, DayProgress, Difficulty, Goal,
    GoalProgress, Message, Post, Profile, ProgressPoint, Short, SummaryCard,
};
use chrono::{DateTime, Utc};

/// Trending goals shown at the top of the Connect page
pub fn trending_goals() -> Vec<Goal> {
    vec![
        Goal::new(
            "1",
            "Daily Meditation",
            "Practice mindfulness meditation for 10 minutes every day to reduce stress and improve mental clarity.",
            "Wellness",
        )
        .image("https://cdn.tinybuddha.com/wp-content/uploads/2016/01/Man-Meditating.jpg")
        .difficulty(Difficulty::Easy)
        .participants(245),
        Goal::new(
            "2",
            "30-Day Coding Challenge",
            "Complete one coding problem each day for 30 days to level up your programming skills.",
            "Learning",
        )
        .image("https://images.unsplash.com/photo-1515879218367-8466d910aaa4?w=1200")
        .difficulty(Difficulty::Hard)
        .participants(532),
        Goal::new(
            "3",
            "Read 12 Books This Year",
            "Commit to reading at least one book every month and expand your knowledge horizons.",
            "Personal Development",
        )
        .image("https://images.unsplash.com/photo-1497633762265-9d179a990aa6?w=1200")
        .difficulty(Difficulty::Medium)
        .participants(412),
    ]
}

/// Community highlights on the Connect page (like toggle feed)
pub fn community_posts() -> Vec<Post> {
    vec![
        community_post(
            "101",
            "1",
            Author::new("Alice Johnson", "https://i.pravatar.cc/150?img=1"),
            "Meditation has really helped me stay focused and calm throughout the day. Just completed my 30-day streak!",
            "https://images.tpointtech.com/definition/images/focus-definition2.png",
            "2023-03-01T10:00:00Z",
            (42, 7),
        ),
        community_post(
            "102",
            "2",
            Author::new("Bob Rodriguez", "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg"),
            "Day 15 of the coding challenge, and I am learning complex algorithms and data structures. Feeling proud of my progress!",
            "https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=1200",
            "2023-03-02T12:30:00Z",
            (67, 12),
        ),
        community_post(
            "103",
            "3",
            Author::new("Charlie Wong", "https://i.pravatar.cc/150?img=3"),
            "Just finished my second book of the year - \"Atomic Habits\" by James Clear. Incredible insights on personal development!",
            "https://miro.medium.com/v2/resize:fit:1400/0*4WPgySDfHBSQHsmD",
            "2023-03-03T09:15:00Z",
            (55, 9),
        ),
    ]
}

fn community_post(
    id: &str,
    goal_id: &str,
    author: Author,
    content: &str,
    image: &str,
    timestamp: &str,
    (likes, comments): (u64, u64),
) -> Post {
    let mut post = Post::new(id, content)
        .goal(goal_id)
        .author(author)
        .media(image)
        .engagement(likes, comments);
    post.created_at = parse_timestamp(timestamp);
    post
}

/// Tips and questions on the content page (like counter feed)
pub fn content_posts() -> Vec<Post> {
    vec![
        content_post(
            "1",
            Author::new("Alice", "https://i.pravatar.cc/150?img=1"),
            "https://i.pinimg.com/236x/e5/24/d1/e524d1d14252daa2b81366a854a3f642.jpg",
            "Set a specific time each day for reading to build a consistent habit.",
            "What time of day works best for you to read?",
            "Advice",
            24,
        ),
        content_post(
            "2",
            Author::new("Bob", "https://i.pravatar.cc/150?img=2"),
            "https://images.unsplash.com/photo-1524578271613-d550eacf6090?w=800",
            "Join a book club to stay motivated and discover new genres.",
            "What's your favorite book club recommendation?",
            "Question",
            36,
        ),
        content_post(
            "3",
            Author::new("Charlie", "https://i.pravatar.cc/150?img=3"),
            "https://images.unsplash.com/photo-1512820790803-83ca734da794?w=800",
            "Read at least 10 pages a day to maintain a reading habit.",
            "How do you make time for reading daily?",
            "Question",
            18,
        ),
    ]
}

fn content_post(
    id: &str,
    author: Author,
    image: &str,
    tip: &str,
    question: &str,
    category: &str,
    likes: u64,
) -> Post {
    let mut post = Post::new(id, tip)
        .author(author)
        .media(image)
        .engagement(likes, 0);
    post.question = Some(question.to_string());
    post.category = Some(category.to_string());
    post
}

/// The shorts reel, in playback order
pub fn sample_shorts() -> Vec<Short> {
    vec![
        Short {
            id: "1".into(),
            title: "Morning Yoga Routine".into(),
            url: "https://www.youtube.com/shorts/8ZcmTl_1ER8".into(),
            category: "Wellness".into(),
            thumbnail_url: "https://images.unsplash.com/photo-1544367567-0f2fcb009e0b?w=1200".into(),
            author: "Yoga Guru".into(),
            description: "Start your day with this refreshing morning yoga routine to boost energy and focus.".into(),
        },
        Short {
            id: "2".into(),
            title: "JavaScript Tips & Tricks".into(),
            url: "https://www.youtube.com/shorts/3tmd-ClpJxA".into(),
            category: "Learning".into(),
            thumbnail_url: "https://bairesdev.mo.cloudinary.net/blog/2023/08/What-Is-JavaScript-Used-For.jpg".into(),
            author: "Code Master".into(),
            description: "Learn some quick JavaScript tips and tricks to improve your coding skills.".into(),
        },
        Short {
            id: "3".into(),
            title: "Motivational Speech".into(),
            url: "https://www.youtube.com/shorts/2Vv-BfVoq4g".into(),
            category: "Inspiration".into(),
            thumbnail_url: "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?w=1200".into(),
            author: "Inspire Daily".into(),
            description: "A powerful motivational speech to help you achieve your goals and dreams.".into(),
        },
    ]
}

/// Chat channels with their fixed message threads
pub fn sample_channels() -> Vec<Channel> {
    vec![
        Channel {
            id: "1".into(),
            name: "🏋️ Fitness Tips".into(),
            messages: vec![
                message("m1", "Alice", 1, "Remember to stay hydrated after workouts! 💧", None, "10:15 AM"),
                message(
                    "m2",
                    "Bob",
                    2,
                    "Here's my post-workout smoothie! 🥤",
                    Some("https://source.unsplash.com/400x300/?smoothie"),
                    "10:20 AM",
                ),
            ],
        },
        Channel {
            id: "2".into(),
            name: "📚 Learning Goals".into(),
            messages: vec![
                message("m3", "Charlie", 3, "I'm tackling JavaScript today! Any tips? 🤔", None, "11:00 AM"),
                message(
                    "m4",
                    "Dana",
                    4,
                    "Check out this visual guide I found! 🎨",
                    Some("https://source.unsplash.com/400x300/?coding"),
                    "11:10 AM",
                ),
            ],
        },
        Channel {
            id: "3".into(),
            name: "🎸 Music Practice".into(),
            messages: vec![
                message(
                    "m5",
                    "Eve",
                    5,
                    "Just practiced this new piece on violin 🎻",
                    Some("https://source.unsplash.com/400x300/?violin"),
                    "1:00 PM",
                ),
                message("m6", "Frank", 6, "Any tips on improving vibrato? 🤔", None, "1:10 PM"),
            ],
        },
    ]
}

fn message(
    id: &str,
    username: &str,
    avatar_img: u32,
    content: &str,
    image: Option<&str>,
    timestamp: &str,
) -> Message {
    Message {
        id: id.into(),
        username: username.into(),
        avatar: format!("https://i.pravatar.cc/150?img={}", avatar_img),
        content: content.into(),
        image: image.map(str::to_string),
        timestamp: timestamp.into(),
    }
}

/// Profile dashboard for the signed-in member
pub fn sample_profile() -> Profile {
    Profile {
        name: "John Doe".into(),
        tagline: "Aspiring polyglot & lifelong learner".into(),
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=256&h=256&fit=crop".into(),
        goal_count: 12,
        followers: 245,
        achievement_count: 8,
        goals: vec![
            GoalProgress { id: 1, title: "Learn Spanish".into(), progress: 75 },
            GoalProgress { id: 2, title: "Read 24 Books in 2024".into(), progress: 45 },
            GoalProgress { id: 3, title: "Exercise 3x per week".into(), progress: 90 },
        ],
        achievements: vec![
            Achievement { id: 1, title: "30 Day Streak".into(), date: "2024-03-15".into() },
            Achievement { id: 2, title: "First Goal Completed".into(), date: "2024-02-28".into() },
        ],
        progress: vec![
            ProgressPoint { label: "2024-01".into(), value: 65 },
            ProgressPoint { label: "2024-02".into(), value: 78 },
            ProgressPoint { label: "2024-03".into(), value: 85 },
        ],
    }
}

/// Analytics dashboard data
pub fn sample_analytics() -> Analytics {
    let weekly = [
        ("Mon", 5),
        ("Tue", 6),
        ("Wed", 4),
        ("Thu", 7),
        ("Fri", 5),
        ("Sat", 3),
        ("Sun", 6),
    ];

    Analytics {
        weekly_progress: weekly
            .iter()
            .map(|(day, completed)| DayProgress {
                day: day.to_string(),
                completed: *completed,
                total: 7,
            })
            .collect(),
        category_distribution: [("Fitness", 35), ("Learning", 25), ("Career", 20), ("Personal", 20)]
            .iter()
            .map(|(name, value)| CategoryShare {
                name: name.to_string(),
                value: *value,
            })
            .collect(),
        monthly_trend: [("Jan", 75), ("Feb", 82), ("Mar", 88)]
            .iter()
            .map(|(label, value)| ProgressPoint {
                label: label.to_string(),
                value: *value,
            })
            .collect(),
        summary: vec![
            SummaryCard {
                title: "Average Completion".into(),
                value: "82%".into(),
                note: "+5% from last month".into(),
            },
            SummaryCard {
                title: "Active Goals".into(),
                value: "12".into(),
                note: "3 near completion".into(),
            },
            SummaryCard {
                title: "Current Streak".into(),
                value: "15 days".into(),
                note: "Personal best: 21 days".into(),
            },
        ],
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_shorts_reel_has_three_entries() {
        let shorts = sample_shorts();
        assert_eq!(shorts.len(), 3);
        assert_eq!(shorts[0].title, "Morning Yoga Routine");
        assert_eq!(shorts[2].author, "Inspire Daily");
    }

    #[test]
    fn test_post_ids_unique_per_feed() {
        for feed in [community_posts(), content_posts()] {
            let ids: HashSet<_> = feed.iter().map(|p| p.id.clone()).collect();
            assert_eq!(ids.len(), feed.len());
        }
    }

    #[test]
    fn test_community_posts_reference_trending_goals() {
        let goal_ids: HashSet<_> = trending_goals().into_iter().map(|g| g.id).collect();
        for post in community_posts() {
            assert!(goal_ids.contains(post.goal_id.as_deref().unwrap()));
            assert!(post.created_at.is_some());
        }
    }

    #[test]
    fn test_content_posts_seed_likes() {
        let likes: Vec<u64> = content_posts().iter().map(|p| p.likes).collect();
        assert_eq!(likes, vec![24, 36, 18]);
    }

    #[test]
    fn test_channels_have_messages() {
        let channels = sample_channels();
        assert_eq!(channels.len(), 3);
        assert!(channels.iter().all(|c| c.messages.len() == 2));
    }

    #[test]
    fn test_analytics_distribution_sums_to_hundred() {
        let analytics = sample_analytics();
        let total: u32 = analytics.category_distribution.iter().map(|c| c.value).sum();
        assert_eq!(total, 100);
        assert_eq!(analytics.weekly_progress.len(), 7);
    }
}
