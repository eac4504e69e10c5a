use clap::Subcommand;
use mythic_core::quest::{self, QUESTS};
use mythic_core::{Admission, Category, Moment, PresetQuest};
use serde::Serialize;

use super::{open_session, print_json};

#[derive(Subcommand)]
pub enum QuestAction {
    /// List preset quests and whether each can be accepted now
    List {
        /// Filter by path
        #[arg(long)]
        category: Option<Category>,
    },
    /// Accept a preset quest as a new task
    Accept {
        /// Quest ID (e.g. "ojas-workout")
        id: String,
    },
}

#[derive(Serialize)]
struct QuestView<'a> {
    #[serde(flatten)]
    quest: &'a PresetQuest,
    admission: Admission,
}

pub fn run(action: QuestAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuestAction::List { category } => {
            let session = open_session()?;
            let moment = Moment::now();
            let quests: Vec<&PresetQuest> = match category {
                Some(c) => quest::quests_for(c).collect(),
                None => QUESTS.iter().collect(),
            };
            let views: Vec<QuestView> = quests
                .into_iter()
                .map(|q| QuestView {
                    quest: q,
                    admission: session.quest_admission(q, moment),
                })
                .collect();
            print_json(&views)?;
        }
        QuestAction::Accept { id } => {
            let mut session = open_session()?;
            let task = session.accept_quest(&id, Moment::now())?;
            print_json(&task)?;
        }
    }
    Ok(())
}
