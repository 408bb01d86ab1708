//! AspirationHub CLI
//!
//! Command-line client for the AspirationHub data store:
//! - List goals and their posts
//! - Create goals and posts through the same form rules as the web app
//! - Join a goal
//! - Check service status

use anyhow::{bail, Context};
use aspiration_hub::client::{DataClient, HttpDataClient};
use aspiration_hub::config::{generate_default_config, Config};
use aspiration_hub::models::{Category, Goal};
use aspiration_hub::views::{CreateForm, GoalListing, SubmitOutcome};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hub-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Share goals and progress with the AspirationHub community")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data store URL (default: [remote].url from config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// API key (default: [remote].api_key from config)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all goals, newest first
    Goals,

    /// List goal ids and titles
    Options,

    /// Show one goal and its posts
    Show {
        /// Goal id
        id: String,
    },

    /// Create a goal
    CreateGoal {
        #[arg(short, long)]
        title: String,
        #[arg(short, long)]
        description: String,
        /// Fitness, Learning, Career or Personal
        #[arg(short, long)]
        category: Category,
    },

    /// Post an update to a goal
    Post {
        /// Goal id
        #[arg(short, long)]
        goal: String,
        /// Post text
        content: String,
        /// Media URL (repeatable, kept in order)
        #[arg(short, long)]
        media: Vec<String>,
    },

    /// Join a goal as participant
    Join {
        /// Goal id
        goal: String,
        /// User id
        #[arg(short, long)]
        user: String,
    },

    /// Show service status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("Failed to write {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let config = Config::load_default();
    let mut remote = config.remote.client_config();
    if let Some(url) = cli.api_url.clone() {
        remote.url = url;
    }
    if let Some(key) = cli.api_key.clone() {
        remote.api_key = Some(key);
    }
    let client = HttpDataClient::new(remote)?;

    match cli.command {
        Commands::Goals => {
            let mut listing = GoalListing::new();
            listing.load(&client).await;

            if let Some(e) = listing.error() {
                bail!("Failed to fetch goals: {}", e);
            }

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(listing.goals())?)
                }
                OutputFormat::Table => print_goals(listing.goals()),
            }
        }

        Commands::Options => {
            let options = client.select_goal_options().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&options)?),
                OutputFormat::Table => {
                    for option in options {
                        println!("{:<38} {}", option.id, option.title);
                    }
                }
            }
        }

        Commands::Show { id } => {
            let Some(row) = client.select_goal(&id).await? else {
                bail!("Goal {} not found", id);
            };
            let goal = row.into_goal();
            let posts: Vec<_> = client
                .select_posts(&id)
                .await?
                .into_iter()
                .map(|p| p.into_post())
                .collect();

            match cli.format {
                OutputFormat::Json => {
                    let doc = serde_json::json!({ "goal": goal, "posts": posts });
                    println!("{}", serde_json::to_string_pretty(&doc)?);
                }
                OutputFormat::Table => {
                    println!("{} [{}]", goal.title, goal.category);
                    println!("{}", goal.description);
                    println!(
                        "{} posts, {} participants",
                        count_or_dash(goal.counts.posts),
                        count_or_dash(goal.counts.participants)
                    );
                    println!();
                    if posts.is_empty() {
                        println!("No posts yet.");
                    }
                    for post in posts {
                        let date = post
                            .created_at
                            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_else(|| "-".to_string());
                        println!("{}  {}", date, post.content);
                        for url in &post.media_urls {
                            println!("    {}", url);
                        }
                    }
                }
            }
        }

        Commands::CreateGoal {
            title,
            description,
            category,
        } => {
            let mut form = CreateForm::new();
            form.toggle_mode();
            form.set_title(title);
            form.set_description(description);
            form.set_category(Some(category));

            report(form.submit(&client).await)?;
        }

        Commands::Post {
            goal,
            content,
            media,
        } => {
            let mut form = CreateForm::new();
            form.load_goal_options(&client).await;
            if let Some(e) = form.goal_options_error() {
                bail!("Failed to fetch goals: {}", e);
            }

            form.select_goal(&goal)
                .with_context(|| format!("Goal {} does not exist", goal))?;
            form.set_content(content);
            for url in &media {
                form.add_media_url(url);
            }

            report(form.submit(&client).await)?;
        }

        Commands::Join { goal, user } => {
            client.insert_participant(&goal, &user).await?;
            println!("{} joined {}", user, goal);
        }

        Commands::Status => match client.health().await {
            Ok(health) => {
                println!("AspirationHub v{}", env!("CARGO_PKG_VERSION"));
                println!();
                println!(
                    "Store status: {}",
                    health["status"].as_str().unwrap_or("unknown")
                );
                println!("  Goals: {}", health["goals"].as_u64().unwrap_or(0));
                println!("  Posts: {}", health["posts"].as_u64().unwrap_or(0));
                println!(
                    "  Participants: {}",
                    health["participants"].as_u64().unwrap_or(0)
                );

                if let Some(uptime) = health["uptime_seconds"].as_u64() {
                    println!();
                    println!("Uptime: {}", format_duration(uptime));
                }
            }
            Err(e) => {
                eprintln!("Cannot reach AspirationHub at {}", client.config().url);
                eprintln!("Error: {}", e);
                eprintln!();
                eprintln!("Make sure the service is running:");
                eprintln!("  cargo run --bin aspiration-hub");
                std::process::exit(1);
            }
        },

        Commands::Config { .. } => unreachable!("handled before connecting"),
    }

    Ok(())
}

fn report(outcome: SubmitOutcome) -> anyhow::Result<()> {
    match outcome {
        SubmitOutcome::Navigate(route) => {
            println!("Saved. View it at {}", route);
            Ok(())
        }
        SubmitOutcome::Rejected(e) => bail!("{}", e),
        SubmitOutcome::Failed(reason) => bail!("Insert failed: {}", reason),
    }
}

fn print_goals(goals: &[Goal]) {
    if goals.is_empty() {
        println!("No goals yet.");
        println!();
        println!("Create your first goal with:");
        println!("  hub-cli create-goal -t \"Run a 5K\" -d \"Train for 8 weeks\" -c fitness");
        return;
    }

    println!(
        "{:<38} {:<30} {:<10} {:>6} {:>7}",
        "ID", "Title", "Category", "Posts", "Members"
    );
    println!("{}", "-".repeat(95));

    for goal in goals {
        println!(
            "{:<38} {:<30} {:<10} {:>6} {:>7}",
            goal.id,
            truncate(&goal.title, 30),
            goal.category,
            count_or_dash(goal.counts.posts),
            count_or_dash(goal.counts.participants)
        );
    }
}

fn count_or_dash(count: Option<u64>) -> String {
    count
        .map(|c| c.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{}…", cut)
    }
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
