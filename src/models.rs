//! Core data types shared by the store, the data client and the views
//!
//! One canonical shape per entity. Fields that only some sources provide
//! (sample data carries difficulty and images, remote rows carry
//! `created_at`) are explicit `Option`s instead of per-view ad hoc structs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user-defined aspiration, the organizing entity for posts and chat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Free text: remote rows use the form categories, sample data uses others
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(rename = "_count", default)]
    pub counts: GoalCounts,
}

impl Goal {
    /// Create a goal with no optional fields set
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: category.into(),
            created_at: None,
            image_url: None,
            difficulty: None,
            counts: GoalCounts::default(),
        }
    }

    /// Builder method: set the cover image
    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Builder method: set the difficulty badge
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Builder method: set the participant count
    pub fn participants(mut self, count: u64) -> Self {
        self.counts.participants = Some(count);
        self
    }
}

/// Derived relation counts for a goal
///
/// `None` means the store did not deliver the aggregate for that relation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalCounts {
    #[serde(default)]
    pub posts: Option<u64>,
    #[serde(default)]
    pub participants: Option<u64>,
}

/// `{id, title}` pair offered by the post form's goal selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalOption {
    pub id: String,
    pub title: String,
}

/// Fixed category set accepted by the goal creation form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Fitness,
    Learning,
    Career,
    Personal,
}

impl Category {
    /// Get all categories in form order
    pub fn all() -> &'static [Category] {
        &[
            Category::Fitness,
            Category::Learning,
            Category::Career,
            Category::Personal,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fitness => "Fitness",
            Category::Learning => "Learning",
            Category::Career => "Career",
            Category::Personal => "Personal",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fitness" => Ok(Category::Fitness),
            "learning" => Ok(Category::Learning),
            "career" => Ok(Category::Career),
            "personal" => Ok(Category::Personal),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

/// Returned when a string is not one of the form categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid category: {0}. Use Fitness, Learning, Career, or Personal")]
pub struct UnknownCategory(pub String);

/// Difficulty badge shown on sample goals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

/// Display identity of a post or message author
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub avatar: String,
}

impl Author {
    pub fn new(name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: avatar.into(),
        }
    }
}

/// A content submission tied to a goal
///
/// Remote rows only carry goal, content, media and creation time; author,
/// likes and comments come from sample data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    pub content: String,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
}

impl Post {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            goal_id: None,
            author: None,
            content: content.into(),
            media_urls: Vec::new(),
            category: None,
            question: None,
            created_at: None,
            likes: 0,
            comments: 0,
        }
    }

    /// Builder method: attach to a goal
    pub fn goal(mut self, goal_id: impl Into<String>) -> Self {
        self.goal_id = Some(goal_id.into());
        self
    }

    /// Builder method: set the author
    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Builder method: add a media URL
    pub fn media(mut self, url: impl Into<String>) -> Self {
        self.media_urls.push(url.into());
        self
    }

    /// Builder method: set like and comment counts
    pub fn engagement(mut self, likes: u64, comments: u64) -> Self {
        self.likes = likes;
        self.comments = comments;
        self
    }

    /// First attached media URL, used as the card image
    pub fn cover(&self) -> Option<&str> {
        self.media_urls.first().map(String::as_str)
    }
}

/// Insert payload for the `goals` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub category: Category,
}

/// Insert payload for the `posts` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewPost {
    pub goal_id: String,
    pub content: String,
    #[serde(default)]
    pub media_url: Vec<String>,
}

/// A fixed-format micro-video reference
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Short {
    pub id: String,
    pub title: String,
    pub url: String,
    pub category: String,
    pub thumbnail_url: String,
    pub author: String,
    pub description: String,
}

/// A named, fixed message thread
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub messages: Vec<Message>,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub content: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Display time, e.g. "10:15 AM"
    pub timestamp: String,
}

/// Profile dashboard data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub avatar: String,
    pub goal_count: u32,
    pub followers: u32,
    pub achievement_count: u32,
    pub goals: Vec<GoalProgress>,
    pub achievements: Vec<Achievement>,
    pub progress: Vec<ProgressPoint>,
}

/// Completion percentage of one personal goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalProgress {
    pub id: u32,
    pub title: String,
    /// 0-100
    pub progress: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub date: String,
}

/// Monthly overall progress
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressPoint {
    pub label: String,
    pub value: u32,
}

/// Analytics dashboard data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Analytics {
    pub weekly_progress: Vec<DayProgress>,
    pub category_distribution: Vec<CategoryShare>,
    pub monthly_trend: Vec<ProgressPoint>,
    pub summary: Vec<SummaryCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayProgress {
    pub day: String,
    pub completed: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryShare {
    pub name: String,
    pub value: u32,
}

impl CategoryShare {
    /// Percentage of the whole distribution, rounded to the nearest integer
    pub fn percent_of(&self, all: &[CategoryShare]) -> u32 {
        let total: u32 = all.iter().map(|c| c.value).sum();
        if total == 0 {
            return 0;
        }
        ((self.value as f64 / total as f64) * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: String,
    pub value: String,
    pub note: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("Fitness".parse::<Category>(), Ok(Category::Fitness));
        assert_eq!(" career ".parse::<Category>(), Ok(Category::Career));
        assert!("Wellness".parse::<Category>().is_err());
        assert_eq!(Category::all().len(), 4);
    }

    #[test]
    fn test_goal_counts_serialize_as_underscore_count() {
        let goal = Goal::new("g1", "Run", "Daily runs", "Fitness").participants(3);
        let json = serde_json::to_value(&goal).unwrap();

        assert_eq!(json["_count"]["participants"], 3);
        assert!(json["_count"]["posts"].is_null());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_new_goal_wire_shape() {
        let new_goal = NewGoal {
            title: "Run a 5K".to_string(),
            description: "Train for 8 weeks".to_string(),
            category: Category::Fitness,
        };
        let json = serde_json::to_value(&new_goal).unwrap();

        assert_eq!(json["category"], "Fitness");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_category_share_percent() {
        let shares = vec![
            CategoryShare { name: "A".into(), value: 35 },
            CategoryShare { name: "B".into(), value: 65 },
        ];
        assert_eq!(shares[0].percent_of(&shares), 35);
        assert_eq!(CategoryShare { name: "C".into(), value: 1 }.percent_of(&[]), 0);
    }

    #[test]
    fn test_post_cover() {
        let post = Post::new("p1", "Hello").media("a.jpg").media("b.jpg");
        assert_eq!(post.cover(), Some("a.jpg"));
        assert_eq!(Post::new("p2", "x").cover(), None);
    }
}
