//! Goal Store - SQLite tables for goals, posts and participant links
//!
//! One process-wide connection behind a mutex. Every call is independent;
//! no transaction spans two calls.

use crate::client::{CountAggregate, GoalRow, PostRow};
use crate::models::{GoalOption, NewGoal, NewPost};
use crate::store::error::{StoreError, StoreResult};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OpenFlags, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

const DB_FILE: &str = "aspiration.db";

/// A goal with its relation counts
#[derive(Debug, Clone, PartialEq)]
pub struct GoalRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: Option<DateTime<Utc>>,
    pub post_count: u64,
    pub participant_count: u64,
}

impl GoalRecord {
    /// Wire shape with nested single-row count aggregates
    pub fn into_row(self) -> GoalRow {
        GoalRow {
            id: self.id,
            title: self.title,
            description: self.description,
            category: self.category,
            created_at: self.created_at,
            posts: vec![CountAggregate {
                count: self.post_count,
            }],
            user_goals: vec![CountAggregate {
                count: self.participant_count,
            }],
        }
    }
}

/// A stored post
#[derive(Debug, Clone, PartialEq)]
pub struct PostRecord {
    pub id: String,
    pub goal_id: String,
    pub content: String,
    pub media_url: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl PostRecord {
    pub fn into_row(self) -> PostRow {
        PostRow {
            id: self.id,
            goal_id: self.goal_id,
            content: self.content,
            media_url: self.media_url,
            created_at: self.created_at,
        }
    }
}

/// Table sizes, reported by the health endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub goals: u64,
    pub posts: u64,
    pub participants: u64,
}

/// SQLite-backed goal and post store
pub struct GoalStore {
    conn: Mutex<Connection>,
    path: Option<PathBuf>,
}

impl GoalStore {
    /// Create or open the store inside a data directory
    pub fn open(data_dir: impl AsRef<Path>) -> StoreResult<Self> {
        let data_dir = data_dir.as_ref();
        std::fs::create_dir_all(data_dir)?;

        let path = data_dir.join(DB_FILE);
        let conn = Connection::open_with_flags(
            &path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            ",
        )?;

        Self::init(conn, Some(path))
    }

    /// Open a throwaway in-memory store
    pub fn in_memory() -> StoreResult<Self> {
        Self::init(Connection::open_in_memory()?, None)
    }

    fn init(conn: Connection, path: Option<PathBuf>) -> StoreResult<Self> {
        conn.execute_batch(
            "
            PRAGMA foreign_keys = ON;

            CREATE TABLE IF NOT EXISTS goals (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS posts (
                id TEXT PRIMARY KEY,
                goal_id TEXT NOT NULL REFERENCES goals(id),
                content TEXT NOT NULL,
                media_url TEXT NOT NULL DEFAULT '[]',
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS user_goals (
                user_id TEXT NOT NULL,
                goal_id TEXT NOT NULL REFERENCES goals(id),
                joined_at TEXT NOT NULL,
                PRIMARY KEY (user_id, goal_id)
            );

            CREATE INDEX IF NOT EXISTS idx_goals_created ON goals(created_at);
            CREATE INDEX IF NOT EXISTS idx_posts_goal ON posts(goal_id);
            CREATE INDEX IF NOT EXISTS idx_user_goals_goal ON user_goals(goal_id);
            ",
        )?;

        if let Some(p) = &path {
            tracing::debug!(path = ?p, "Goal store opened");
        }

        Ok(Self {
            conn: Mutex::new(conn),
            path,
        })
    }

    /// Database file path, `None` for in-memory stores
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }

    // ==================== Goals ====================

    /// All goals with post and participant counts, newest first
    pub fn list_goals(&self) -> StoreResult<Vec<GoalRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(&format!(
            "{} ORDER BY g.created_at DESC, g.rowid DESC",
            GOAL_SELECT
        ))?;

        let goals = stmt
            .query_map([], goal_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(goals)
    }

    /// A single goal with counts
    pub fn get_goal(&self, id: &str) -> StoreResult<Option<GoalRecord>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(&format!("{} WHERE g.id = ?1", GOAL_SELECT))?;

        Ok(stmt.query_row(params![id], goal_from_row).optional()?)
    }

    /// `{id, title}` pairs, newest first
    pub fn goal_options(&self) -> StoreResult<Vec<GoalOption>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare_cached(
            "SELECT id, title FROM goals ORDER BY created_at DESC, rowid DESC",
        )?;

        let options = stmt
            .query_map([], |row| {
                Ok(GoalOption {
                    id: row.get(0)?,
                    title: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(options)
    }

    /// Insert a goal and return the stored row
    pub fn insert_goal(&self, goal: &NewGoal) -> StoreResult<GoalRecord> {
        require_text("title", &goal.title)?;
        require_text("description", &goal.description)?;

        let id = uuid::Uuid::new_v4().to_string();
        let created_at = Utc::now();

        self.conn()?.execute(
            "INSERT INTO goals (id, title, description, category, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                goal.title,
                goal.description,
                goal.category.as_str(),
                format_timestamp(&created_at)
            ],
        )?;

        tracing::info!(goal_id = %id, category = %goal.category, "Inserted goal");

        Ok(GoalRecord {
            id,
            title: goal.title.clone(),
            description: goal.description.clone(),
            category: goal.category.to_string(),
            created_at: Some(created_at),
            post_count: 0,
            participant_count: 0,
        })
    }

    // ==================== Posts ====================

    /// Insert a post for an existing goal
    pub fn insert_post(&self, post: &NewPost) -> StoreResult<PostRecord> {
        require_text("content", &post.content)?;

        let conn = self.conn()?;
        ensure_goal(&conn, &post.goal_id)?;

        let id = uuid::Uuid::new_v4().to_string();
        let created_at = Utc::now();
        let media = serde_json::to_string(&post.media_url)?;

        conn.execute(
            "INSERT INTO posts (id, goal_id, content, media_url, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                id,
                post.goal_id,
                post.content,
                media,
                format_timestamp(&created_at)
            ],
        )?;

        tracing::info!(
            post_id = %id,
            goal_id = %post.goal_id,
            media = post.media_url.len(),
            "Inserted post"
        );

        Ok(PostRecord {
            id,
            goal_id: post.goal_id.clone(),
            content: post.content.clone(),
            media_url: post.media_url.clone(),
            created_at: Some(created_at),
        })
    }

    /// Posts attached to a goal, newest first
    pub fn posts_for_goal(&self, goal_id: &str) -> StoreResult<Vec<PostRecord>> {
        let conn = self.conn()?;
        ensure_goal(&conn, goal_id)?;

        let mut stmt = conn.prepare_cached(
            "SELECT id, goal_id, content, media_url, created_at
             FROM posts WHERE goal_id = ?1
             ORDER BY created_at DESC, rowid DESC",
        )?;

        let raw = stmt
            .query_map(params![goal_id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        raw.into_iter()
            .map(|(id, goal_id, content, media, created_at)| {
                Ok(PostRecord {
                    id,
                    goal_id,
                    content,
                    media_url: serde_json::from_str(&media)?,
                    created_at: parse_timestamp(&created_at),
                })
            })
            .collect()
    }

    // ==================== Participants ====================

    /// Link a user to a goal. Returns `false` if the link already existed.
    pub fn add_participant(&self, goal_id: &str, user_id: &str) -> StoreResult<bool> {
        require_text("user_id", user_id)?;

        let conn = self.conn()?;
        ensure_goal(&conn, goal_id)?;

        let inserted = conn.execute(
            "INSERT OR IGNORE INTO user_goals (user_id, goal_id, joined_at) VALUES (?1, ?2, ?3)",
            params![user_id, goal_id, format_timestamp(&Utc::now())],
        )?;

        if inserted > 0 {
            tracing::info!(goal_id = %goal_id, user_id = %user_id, "Participant joined goal");
        }

        Ok(inserted > 0)
    }

    /// Row counts of all tables
    pub fn stats(&self) -> StoreResult<StoreStats> {
        let conn = self.conn()?;
        let count = |table: &str| -> StoreResult<u64> {
            let n: i64 =
                conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |r| r.get(0))?;
            Ok(n as u64)
        };

        Ok(StoreStats {
            goals: count("goals")?,
            posts: count("posts")?,
            participants: count("user_goals")?,
        })
    }
}

const GOAL_SELECT: &str = "SELECT g.id, g.title, g.description, g.category, g.created_at,
        (SELECT COUNT(*) FROM posts p WHERE p.goal_id = g.id),
        (SELECT COUNT(*) FROM user_goals u WHERE u.goal_id = g.id)
     FROM goals g";

fn goal_from_row(row: &Row<'_>) -> rusqlite::Result<GoalRecord> {
    let created_at: String = row.get(4)?;
    Ok(GoalRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        category: row.get(3)?,
        created_at: parse_timestamp(&created_at),
        post_count: row.get::<_, i64>(5)? as u64,
        participant_count: row.get::<_, i64>(6)? as u64,
    })
}

fn ensure_goal(conn: &Connection, goal_id: &str) -> StoreResult<()> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM goals WHERE id = ?1)",
        params![goal_id],
        |row| row.get(0),
    )?;

    if exists {
        Ok(())
    } else {
        Err(StoreError::GoalNotFound(goal_id.to_string()))
    }
}

fn require_text(field: &str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Invalid(format!("{} cannot be empty", field)));
    }
    Ok(())
}

// Fixed-width UTC so lexical order matches time order
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(s) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(value = %s, error = %e, "Unreadable timestamp in store");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::tempdir;

    fn new_goal(title: &str) -> NewGoal {
        NewGoal {
            title: title.to_string(),
            description: format!("{} description", title),
            category: Category::Learning,
        }
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        let store = GoalStore::in_memory().unwrap();
        assert!(store.list_goals().unwrap().is_empty());
        assert!(store.goal_options().unwrap().is_empty());
        assert_eq!(store.stats().unwrap(), StoreStats::default());
    }

    #[test]
    fn test_insert_goal_stores_three_fields() {
        let store = GoalStore::in_memory().unwrap();
        let record = store
            .insert_goal(&NewGoal {
                title: "Run a 5K".to_string(),
                description: "Train for 8 weeks".to_string(),
                category: Category::Fitness,
            })
            .unwrap();

        let goals = store.list_goals().unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].id, record.id);
        assert_eq!(goals[0].title, "Run a 5K");
        assert_eq!(goals[0].description, "Train for 8 weeks");
        assert_eq!(goals[0].category, "Fitness");
        assert_eq!(goals[0].post_count, 0);
        assert_eq!(goals[0].participant_count, 0);
    }

    #[test]
    fn test_list_goals_newest_first() {
        let store = GoalStore::in_memory().unwrap();
        store.insert_goal(&new_goal("first")).unwrap();
        store.insert_goal(&new_goal("second")).unwrap();
        store.insert_goal(&new_goal("third")).unwrap();

        let titles: Vec<_> = store
            .list_goals()
            .unwrap()
            .into_iter()
            .map(|g| g.title)
            .collect();
        assert_eq!(titles, vec!["third", "second", "first"]);

        let options: Vec<_> = store
            .goal_options()
            .unwrap()
            .into_iter()
            .map(|o| o.title)
            .collect();
        assert_eq!(options, titles);
    }

    #[test]
    fn test_counts_follow_posts_and_participants() {
        let store = GoalStore::in_memory().unwrap();
        let goal = store.insert_goal(&new_goal("reading")).unwrap();

        for content in ["day 1", "day 2"] {
            store
                .insert_post(&NewPost {
                    goal_id: goal.id.clone(),
                    content: content.to_string(),
                    media_url: vec![],
                })
                .unwrap();
        }
        assert!(store.add_participant(&goal.id, "u1").unwrap());
        assert!(!store.add_participant(&goal.id, "u1").unwrap());
        assert!(store.add_participant(&goal.id, "u2").unwrap());

        let record = store.get_goal(&goal.id).unwrap().unwrap();
        assert_eq!(record.post_count, 2);
        assert_eq!(record.participant_count, 2);

        let row = record.into_row();
        assert_eq!(row.posts, vec![CountAggregate { count: 2 }]);
        assert_eq!(row.user_goals, vec![CountAggregate { count: 2 }]);
    }

    #[test]
    fn test_insert_post_keeps_media_order() {
        let store = GoalStore::in_memory().unwrap();
        let goal = store.insert_goal(&new_goal("art")).unwrap();

        store
            .insert_post(&NewPost {
                goal_id: goal.id.clone(),
                content: "sketches".to_string(),
                media_url: vec!["b.png".to_string(), "a.png".to_string()],
            })
            .unwrap();

        let posts = store.posts_for_goal(&goal.id).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].media_url, vec!["b.png", "a.png"]);
        assert!(posts[0].created_at.is_some());
    }

    #[test]
    fn test_insert_post_unknown_goal() {
        let store = GoalStore::in_memory().unwrap();
        let result = store.insert_post(&NewPost {
            goal_id: "missing".to_string(),
            content: "hello".to_string(),
            media_url: vec![],
        });

        assert!(matches!(result, Err(StoreError::GoalNotFound(id)) if id == "missing"));
        assert_eq!(store.stats().unwrap().posts, 0);
    }

    #[test]
    fn test_blank_fields_rejected() {
        let store = GoalStore::in_memory().unwrap();
        let mut goal = new_goal("x");
        goal.title = "   ".to_string();

        assert!(matches!(store.insert_goal(&goal), Err(StoreError::Invalid(_))));
        assert!(store.list_goals().unwrap().is_empty());
    }

    #[test]
    fn test_get_unknown_goal() {
        let store = GoalStore::in_memory().unwrap();
        assert!(store.get_goal("nope").unwrap().is_none());
    }

    #[test]
    fn test_persistence() {
        let dir = tempdir().unwrap();

        let id = {
            let store = GoalStore::open(dir.path()).unwrap();
            assert!(store.path().unwrap().ends_with(DB_FILE));
            store.insert_goal(&new_goal("persisted")).unwrap().id
        };

        let store = GoalStore::open(dir.path()).unwrap();
        let goal = store.get_goal(&id).unwrap().unwrap();
        assert_eq!(goal.title, "persisted");
    }
}
