//! Progression engine.
//!
//! Every operation here is a state transition on a [`ProfileState`]: it
//! either applies completely and returns the events the front end should
//! react to, or fails before touching the state. Nothing in this module
//! performs I/O; persistence is the session's job.

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::achievements;
use crate::boss::{self, BossDef, Hit, ROSTER};
use crate::clock::Moment;
use crate::error::{CoreError, Result, ValidationError};
use crate::events::Event;
use crate::profile::ProfileState;
use crate::progression::{LevelProgress, StreakChange};
use crate::quest::{self, Admission, PresetQuest};
use crate::task::{Category, RewardPolicy, Task};

/// Tunables of the progression rules.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Punya earned per karma point is `1 / currency_divisor`.
    pub currency_divisor: u64,
    pub rewards: RewardPolicy,
    pub roster: &'static [BossDef],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            currency_divisor: 10,
            rewards: RewardPolicy::default(),
            roster: ROSTER,
        }
    }
}

impl EngineConfig {
    /// Punya granted for `reward` karma, rounded to hundredths.
    pub fn punya_for(&self, reward: u64) -> f64 {
        round_hundredths(reward as f64 / self.currency_divisor.max(1) as f64)
    }
}

fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Outcome of completing one task.
#[derive(Debug, Clone, Serialize)]
pub struct Completion {
    pub task: Task,
    /// In the order they happened.
    pub events: Vec<Event>,
    pub progress: LevelProgress,
}

/// Set the display name chosen at onboarding. It cannot be changed later.
pub fn set_display_name(state: &mut ProfileState, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyDisplayName.into());
    }
    if let Some(existing) = &state.display_name {
        return Err(ValidationError::DisplayNameAlreadySet(existing.clone()).into());
    }
    state.display_name = Some(name.to_string());
    Ok(())
}

/// Add a free-form task to the front of the active list.
///
/// Without an explicit `reward` the amount is drawn from the configured
/// free-form range.
pub fn add_task<R: Rng + ?Sized>(
    state: &mut ProfileState,
    title: &str,
    category: Category,
    reward: Option<u64>,
    moment: Moment,
    config: &EngineConfig,
    rng: &mut R,
) -> Result<Task> {
    let reward = config.rewards.resolve(reward, rng);
    let task = Task::new(title, category, reward, None, moment.at)?;
    state.tasks.insert(0, task.clone());
    Ok(task)
}

/// Admission check for a catalog quest against the profile's quest log.
pub fn quest_admission(state: &ProfileState, quest: &PresetQuest, moment: Moment) -> Admission {
    quest::can_complete(quest, state.quest_log.get(quest.id), moment.today, moment.at)
}

/// Accept a preset quest: check its gates, record the completion in the
/// quest log and add the task, all in one step.
///
/// The exclusive borrow of `state` means no second accept can slip in
/// between the check and the log write.
pub fn accept_quest(state: &mut ProfileState, quest_id: &str, moment: Moment) -> Result<Task> {
    let quest = quest::find_quest(quest_id).ok_or_else(|| CoreError::UnknownQuest {
        id: quest_id.to_string(),
    })?;

    if let Admission::Denied(denial) = quest_admission(state, quest, moment) {
        return Err(CoreError::QuestNotAllowed(denial));
    }

    let task = Task::new(
        quest.title,
        quest.category,
        quest.reward,
        Some(quest.id.to_string()),
        moment.at,
    )?;
    let entry = quest::record_completion(state.quest_log.get(quest.id), moment.today, moment.at);
    state.quest_log.insert(quest.id.to_string(), entry);
    state.tasks.insert(0, task.clone());
    Ok(task)
}

/// Replace the boss encounter when a new week has started.
pub fn rotate_boss(
    state: &mut ProfileState,
    today: NaiveDate,
    config: &EngineConfig,
) -> Option<Event> {
    let previous = state.boss.as_ref().map(|b| (b.id.clone(), b.week_start));
    state.boss = boss::rotate_if_needed(state.boss.take(), today, config.roster);

    let current = state.boss.as_ref()?;
    if previous.as_ref() == Some(&(current.id.clone(), current.week_start)) {
        return None;
    }
    tracing::debug!(boss = %current.id, week_start = %current.week_start, "new weekly boss");
    Some(Event::BossRotated {
        boss_id: current.id.clone(),
    })
}

/// Complete the task `task_id` and apply every consequence.
///
/// Fails with [`CoreError::TaskNotFound`] and leaves the state untouched
/// when the task is not in the active list.
pub fn complete_task(
    state: &mut ProfileState,
    task_id: &str,
    moment: Moment,
    config: &EngineConfig,
) -> Result<Completion> {
    let index = state
        .tasks
        .iter()
        .position(|t| t.id == task_id)
        .ok_or_else(|| CoreError::TaskNotFound {
            id: task_id.to_string(),
        })?;

    let reward = state.tasks[index].reward;
    let category = state.tasks[index].category;
    let mut events = Vec::new();

    // Karma and levels
    let old_level = state.level;
    state.set_lifetime_karma(state.lifetime_karma.saturating_add(reward));

    // Punya
    let punya_earned = config.punya_for(reward);
    state.punya = round_hundredths(state.punya + punya_earned);

    events.push(Event::TaskCompleted {
        task_id: task_id.to_string(),
        category,
        reward,
        punya_earned,
    });
    for new_level in old_level + 1..=state.level {
        tracing::info!(level = new_level, "level up");
        events.push(Event::LevelUp { new_level });
    }

    // Counters
    state.total_tasks_completed += 1;
    *state.tasks_by_category.entry(category).or_insert(0) += 1;

    // Streak
    if state.streak.update(moment.today) != StreakChange::Unchanged {
        events.push(Event::StreakUpdated {
            streak_days: state.streak.days,
        });
    }

    // Boss
    events.extend(rotate_boss(state, moment.today, config));
    if reward > 0 {
        if let Some(encounter) = state.boss.as_mut() {
            match encounter.apply_damage() {
                Hit::Ignored => {}
                Hit::Damaged {
                    damage,
                    remaining_hp,
                } => events.push(Event::BossDamaged {
                    boss_id: encounter.id.clone(),
                    damage,
                    remaining_hp,
                }),
                Hit::Defeated { damage, loot } => {
                    events.push(Event::BossDamaged {
                        boss_id: encounter.id.clone(),
                        damage,
                        remaining_hp: 0,
                    });
                    events.push(Event::BossDefeated {
                        boss_id: encounter.id.clone(),
                        loot,
                    });
                    tracing::info!(boss = %encounter.id, loot, "boss defeated");
                    state.punya = round_hundredths(state.punya + loot as f64);
                }
            }
        }
    }

    // Achievements
    let totals = state.totals();
    for id in achievements::evaluate(&mut state.achievements, &totals, moment.at) {
        tracing::info!(achievement = %id, "achievement unlocked");
        events.push(Event::AchievementUnlocked { id });
    }

    let task = state.tasks.remove(index);
    Ok(Completion {
        task,
        events,
        progress: state.progress(),
    })
}
