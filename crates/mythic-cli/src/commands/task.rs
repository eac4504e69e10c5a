//! Task management commands for CLI.

use clap::Subcommand;
use mythic_core::{Category, Event, Moment};

use super::{open_session, print_json};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task to the active list
    Add {
        /// Task title
        title: String,
        /// Path: kriya, gyana or ojas (default: kriya)
        #[arg(long, default_value = "kriya")]
        category: Category,
        /// Karma reward (default: random within the configured range)
        #[arg(long)]
        reward: Option<u64>,
    },
    /// List active tasks
    List {
        /// Filter by path
        #[arg(long)]
        category: Option<Category>,
    },
    /// Complete a task and collect its rewards
    Complete {
        /// Task ID
        id: String,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::Add {
            title,
            category,
            reward,
        } => {
            let mut session = open_session()?;
            let task = session.add_task(&title, category, reward, Moment::now())?;
            print_json(&task)?;
        }
        TaskAction::List { category } => {
            let session = open_session()?;
            let tasks: Vec<_> = session
                .state()
                .tasks
                .iter()
                .filter(|t| category.map_or(true, |c| t.category == c))
                .collect();
            print_json(&tasks)?;
        }
        TaskAction::Complete { id } => {
            let mut session = open_session()?;
            let completion = session.complete_task(&id, Moment::now())?;
            for event in &completion.events {
                if let Some(line) = status_line(event) {
                    eprintln!("{line}");
                }
            }
            print_json(&completion)?;
        }
    }
    Ok(())
}

fn status_line(event: &Event) -> Option<String> {
    match event {
        Event::LevelUp { new_level } => Some(format!("Siddhi attained: level {new_level}")),
        Event::BossDefeated { boss_id, loot } => {
            Some(format!("{boss_id} defeated! +{loot} punya"))
        }
        Event::AchievementUnlocked { id } => Some(format!("achievement unlocked: {id}")),
        _ => None,
    }
}
