//! Goal/post creation form
//!
//! One form, two mutually exclusive modes. Submission is split into
//! [`CreateForm::begin_submit`] and [`CreateForm::finish_submit`] so callers
//! that cannot hold the form across an await (the wasm frontend) drive the
//! same transitions as [`CreateForm::submit`].

use super::route::Route;
use crate::client::{ClientError, DataClient};
use crate::models::{Category, GoalOption, NewGoal, NewPost};
use thiserror::Error;

/// Which record the form creates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Post,
    Goal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub goal_id: Option<String>,
    pub content: String,
    pub media_urls: Vec<String>,
}

/// Validated payload ready for insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Goal(NewGoal),
    Post(NewPost),
}

impl Submission {
    /// Where to go once the insert succeeded
    pub fn destination(&self) -> Route {
        match self {
            Submission::Goal(_) => Route::Goals,
            Submission::Post(post) => Route::goal(post.goal_id.clone()),
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Insert succeeded
    Navigate(Route),
    /// Nothing was sent
    Rejected(FormError),
    /// The insert was sent and failed
    Failed(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,

    #[error("Description is required")]
    MissingDescription,

    #[error("Choose a category")]
    MissingCategory,

    #[error("Select a goal for this post")]
    MissingGoal,

    #[error("Post content is required")]
    MissingContent,

    #[error("Selected goal is not in the goal list")]
    UnknownGoal,

    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

/// State of the create view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    mode: FormMode,
    goal: GoalDraft,
    post: PostDraft,
    options: Vec<GoalOption>,
    options_error: Option<ClientError>,
    submitting: bool,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            FormMode::Post => FormMode::Goal,
            FormMode::Goal => FormMode::Post,
        };
    }

    pub fn goal_draft(&self) -> &GoalDraft {
        &self.goal
    }

    pub fn post_draft(&self) -> &PostDraft {
        &self.post
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    // ==================== Goal fields ====================

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.goal.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.goal.description = description.into();
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.goal.category = category;
    }

    // ==================== Post fields ====================

    /// Store the fetched goal choices. A failed fetch leaves no choices.
    pub fn set_goal_options(&mut self, result: Result<Vec<GoalOption>, ClientError>) {
        match result {
            Ok(options) => {
                self.options = options;
                self.options_error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch goal options");
                self.options.clear();
                self.options_error = Some(e);
            }
        }

        let stale = self
            .post
            .goal_id
            .as_ref()
            .is_some_and(|id| !self.options.iter().any(|o| &o.id == id));
        if stale {
            self.post.goal_id = None;
        }
    }

    pub async fn load_goal_options<C: DataClient + ?Sized>(&mut self, client: &C) {
        let result = client.select_goal_options().await;
        self.set_goal_options(result);
    }

    pub fn goal_options(&self) -> &[GoalOption] {
        &self.options
    }

    pub fn goal_options_error(&self) -> Option<&ClientError> {
        self.options_error.as_ref()
    }

    /// Pick the goal a post belongs to. An empty id clears the selection.
    pub fn select_goal(&mut self, id: &str) -> Result<(), FormError> {
        if id.is_empty() {
            self.post.goal_id = None;
            return Ok(());
        }

        if !self.options.iter().any(|o| o.id == id) {
            return Err(FormError::UnknownGoal);
        }

        self.post.goal_id = Some(id.to_string());
        Ok(())
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.post.content = content.into();
    }

    /// Append a media URL. Blank input is ignored and returns `false`.
    pub fn add_media_url(&mut self, url: &str) -> bool {
        let url = url.trim();
        if url.is_empty() {
            return false;
        }

        self.post.media_urls.push(url.to_string());
        true
    }

    pub fn remove_media_url(&mut self, index: usize) -> Option<String> {
        if index < self.post.media_urls.len() {
            Some(self.post.media_urls.remove(index))
        } else {
            None
        }
    }

    // ==================== Submission ====================

    /// Check the active mode's fields and build its payload
    pub fn validate(&self) -> Result<Submission, FormError> {
        match self.mode {
            FormMode::Goal => {
                let title = required(&self.goal.title, FormError::MissingTitle)?;
                let description = required(&self.goal.description, FormError::MissingDescription)?;
                let category = self.goal.category.ok_or(FormError::MissingCategory)?;

                Ok(Submission::Goal(NewGoal {
                    title,
                    description,
                    category,
                }))
            }
            FormMode::Post => {
                let goal_id = self.post.goal_id.clone().ok_or(FormError::MissingGoal)?;
                if !self.options.iter().any(|o| o.id == goal_id) {
                    return Err(FormError::UnknownGoal);
                }
                let content = required(&self.post.content, FormError::MissingContent)?;

                Ok(Submission::Post(NewPost {
                    goal_id,
                    content,
                    media_url: self.post.media_urls.clone(),
                }))
            }
        }
    }

    /// Validate and mark the form as submitting
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.submitting {
            return Err(FormError::AlreadySubmitting);
        }

        let submission = self.validate()?;
        self.submitting = true;
        Ok(submission)
    }

    /// Apply the insert result. The submitting flag is cleared either way.
    pub fn finish_submit(
        &mut self,
        submission: &Submission,
        result: Result<(), ClientError>,
    ) -> SubmitOutcome {
        self.submitting = false;

        match result {
            Ok(()) => {
                match submission {
                    Submission::Goal(_) => self.goal = GoalDraft::default(),
                    Submission::Post(_) => self.post = PostDraft::default(),
                }
                SubmitOutcome::Navigate(submission.destination())
            }
            Err(e) => {
                tracing::error!(error = %e, "Insert failed");
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }

    pub async fn submit<C: DataClient + ?Sized>(&mut self, client: &C) -> SubmitOutcome {
        let submission = match self.begin_submit() {
            Ok(s) => s,
            Err(e) => return SubmitOutcome::Rejected(e),
        };

        let result = match &submission {
            Submission::Goal(goal) => client.insert_goal(goal).await,
            Submission::Post(post) => client.insert_post(post).await,
        };

        self.finish_submit(&submission, result)
    }
}

/// Trimmed field value, or `missing` when nothing but whitespace is left
fn required(value: &str, missing: FormError) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(missing)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::testing::RecordingClient;

    fn options() -> Vec<GoalOption> {
        vec![
            GoalOption {
                id: "g1".to_string(),
                title: "Learn Spanish".to_string(),
            },
            GoalOption {
                id: "g2".to_string(),
                title: "Run a 5K".to_string(),
            },
        ]
    }

    fn goal_form() -> CreateForm {
        let mut form = CreateForm::new();
        form.toggle_mode();
        form
    }

    #[test]
    fn test_default_mode_is_post() {
        let mut form = CreateForm::new();
        assert_eq!(form.mode(), FormMode::Post);
        form.toggle_mode();
        assert_eq!(form.mode(), FormMode::Goal);
        form.toggle_mode();
        assert_eq!(form.mode(), FormMode::Post);
    }

    #[tokio::test]
    async fn test_goal_submit_inserts_and_navigates() {
        let client = RecordingClient::default();
        let mut form = goal_form();
        form.set_title("Run a 5K");
        form.set_description("Train for 8 weeks");
        form.set_category(Some(Category::Fitness));

        let outcome = form.submit(&client).await;

        assert_eq!(outcome, SubmitOutcome::Navigate(Route::Goals));
        assert_eq!(
            client.goal_inserts(),
            vec![NewGoal {
                title: "Run a 5K".to_string(),
                description: "Train for 8 weeks".to_string(),
                category: Category::Fitness,
            }]
        );
        assert!(!form.is_submitting());
        assert_eq!(form.goal_draft(), &GoalDraft::default());
    }

    #[cfg(feature = "server")]
    #[tokio::test]
    async fn test_goal_submit_against_store() {
        use crate::client::StoreClient;
        use crate::store::GoalStore;
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(GoalStore::open(dir.path()).unwrap());
        let client = StoreClient::new(store.clone());

        let mut form = goal_form();
        form.set_title("Run a 5K");
        form.set_description("Train for 8 weeks");
        form.set_category(Some(Category::Fitness));

        assert_eq!(form.submit(&client).await, SubmitOutcome::Navigate(Route::Goals));

        let goals = store.list_goals().unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].title, "Run a 5K");
        assert_eq!(goals[0].description, "Train for 8 weeks");
        assert_eq!(goals[0].category, "Fitness");
    }

    #[tokio::test]
    async fn test_goal_whitespace_title_rejected() {
        let client = RecordingClient::default();
        let mut form = goal_form();
        form.set_title("   ");
        form.set_description("d");
        form.set_category(Some(Category::Career));

        assert_eq!(
            form.submit(&client).await,
            SubmitOutcome::Rejected(FormError::MissingTitle)
        );
        assert!(client.goal_inserts().is_empty());
    }

    #[tokio::test]
    async fn test_submitted_fields_are_trimmed() {
        let client = RecordingClient::default();
        let mut form = goal_form();
        form.set_title("  Run a 5K ");
        form.set_description("\tTrain for 8 weeks\n");
        form.set_category(Some(Category::Fitness));
        form.submit(&client).await;

        let inserts = client.goal_inserts();
        assert_eq!(inserts[0].title, "Run a 5K");
        assert_eq!(inserts[0].description, "Train for 8 weeks");

        let mut form = CreateForm::new();
        form.set_goal_options(Ok(options()));
        form.select_goal("g1").unwrap();
        form.set_content("  Lesson 3  ");
        form.submit(&client).await;

        assert_eq!(client.post_inserts()[0].content, "Lesson 3");
    }

    #[tokio::test]
    async fn test_post_without_goal_issues_no_insert() {
        let client = RecordingClient::default();
        let mut form = CreateForm::new();
        form.set_goal_options(Ok(options()));
        form.set_content("Week one done");

        assert_eq!(
            form.submit(&client).await,
            SubmitOutcome::Rejected(FormError::MissingGoal)
        );
        assert!(client.post_inserts().is_empty());
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_post_submit_navigates_to_goal() {
        let client = RecordingClient::default();
        let mut form = CreateForm::new();
        form.set_goal_options(Ok(options()));
        form.select_goal("g2").unwrap();
        form.set_content("Week one done");
        assert!(form.add_media_url("https://img/1.jpg"));
        assert!(!form.add_media_url("   "));
        assert!(form.add_media_url("https://img/2.jpg"));
        assert!(form.add_media_url("https://img/3.jpg"));
        assert_eq!(form.remove_media_url(1).as_deref(), Some("https://img/2.jpg"));
        assert_eq!(form.remove_media_url(5), None);

        let outcome = form.submit(&client).await;

        assert_eq!(outcome, SubmitOutcome::Navigate(Route::goal("g2")));
        let inserts = client.post_inserts();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].goal_id, "g2");
        assert_eq!(
            inserts[0].media_url,
            vec!["https://img/1.jpg".to_string(), "https://img/3.jpg".to_string()]
        );
    }

    #[test]
    fn test_select_goal_requires_known_option() {
        let mut form = CreateForm::new();
        assert_eq!(form.select_goal("g1"), Err(FormError::UnknownGoal));

        form.set_goal_options(Ok(options()));
        assert_eq!(form.select_goal("g1"), Ok(()));
        assert_eq!(form.post_draft().goal_id.as_deref(), Some("g1"));

        // a refetch without g1 drops the selection
        form.set_goal_options(Ok(options()[1..].to_vec()));
        assert_eq!(form.post_draft().goal_id, None);
    }

    #[test]
    fn test_options_fetch_failure() {
        let mut form = CreateForm::new();
        form.set_goal_options(Err(ClientError::Timeout));
        assert!(form.goal_options().is_empty());
        assert_eq!(form.goal_options_error(), Some(&ClientError::Timeout));
    }

    #[test]
    fn test_refuses_second_submit() {
        let mut form = goal_form();
        form.set_title("t");
        form.set_description("d");
        form.set_category(Some(Category::Personal));

        let submission = form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::AlreadySubmitting));

        form.finish_submit(&submission, Ok(()));
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_insert_failure_keeps_draft() {
        let client = RecordingClient::failing(ClientError::Api {
            status: 500,
            message: "boom".to_string(),
        });
        let mut form = goal_form();
        form.set_title("Read 12 books");
        form.set_description("One per month");
        form.set_category(Some(Category::Learning));

        let outcome = form.submit(&client).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(ref reason) if reason.contains("boom")));
        assert!(!form.is_submitting());
        assert_eq!(form.goal_draft().title, "Read 12 books");
    }
}
