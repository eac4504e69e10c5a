//! Profile overview and onboarding.

use clap::Subcommand;
use mythic_core::Moment;
use serde_json::json;

use super::{open_session, print_json};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show level, karma, punya, streak and totals
    Show,
    /// Set the display name (only once)
    Name {
        /// Name to show on the profile
        name: String,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ProfileAction::Show => show(),
        ProfileAction::Name { name } => {
            let mut session = open_session()?;
            session.set_display_name(&name)?;
            println!("ok");
            Ok(())
        }
    }
}

fn show() -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session()?;
    let state = session.state();
    let today = Moment::now().today;
    let progress = state.progress();

    let view = json!({
        "display_name": state.display_name,
        "level": progress.level,
        "karma": progress.karma,
        "next_level_at": progress.next_threshold,
        "band": progress.band,
        "progress": progress.fraction(),
        "lifetime_karma": progress.lifetime_karma,
        "punya": state.punya,
        "streak_days": state.streak_days(),
        "streak_alive": state.streak.is_alive(today),
        "last_active": state.last_active_date(),
        "tasks_completed": state.total_tasks_completed,
        "tasks_by_category": state.tasks_by_category,
        "active_tasks": state.tasks.len(),
        "achievements_unlocked": state.unlocked_achievements().count(),
    });
    print_json(&view)
}
