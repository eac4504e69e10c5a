//! A loaded profile bound to its store.
//!
//! [`Session::open`] reads the whole profile before returning, so there is
//! no way to mutate a half-loaded or default profile that would later be
//! overwritten by the stored one. After every mutation the profile is
//! written back. A failed write is logged and leaves the in-memory state
//! as it is: the store is a cache of the session, not its transaction log.

use rand::rngs::ThreadRng;

use crate::boss::BossEncounter;
use crate::clock::Moment;
use crate::engine::{self, Completion, EngineConfig};
use crate::error::{Result, StorageError};
use crate::events::Event;
use crate::profile::ProfileState;
use crate::quest::{Admission, PresetQuest};
use crate::storage::{KeyValueStore, ProfileStore};
use crate::task::{Category, Task};

pub struct Session<S: KeyValueStore> {
    store: ProfileStore<S>,
    config: EngineConfig,
    state: ProfileState,
    rng: ThreadRng,
    last_save_error: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
    /// Load the profile from `store`.
    pub fn open(store: ProfileStore<S>, config: EngineConfig) -> Self {
        let state = store.load();
        tracing::debug!(
            level = state.level,
            tasks = state.tasks.len(),
            "profile loaded"
        );
        Self {
            store,
            config,
            state,
            rng: rand::thread_rng(),
            last_save_error: None,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &ProfileStore<S> {
        &self.store
    }

    /// Message of the most recent failed save, cleared by the next
    /// successful one.
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    fn persist(&mut self) {
        match self.store.save(&self.state) {
            Ok(()) => self.last_save_error = None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to persist profile; keeping in-memory state");
                self.last_save_error = Some(e.to_string());
            }
        }
    }

    pub fn set_display_name(&mut self, name: &str) -> Result<()> {
        engine::set_display_name(&mut self.state, name)?;
        self.persist();
        Ok(())
    }

    pub fn add_task(
        &mut self,
        title: &str,
        category: Category,
        reward: Option<u64>,
        moment: Moment,
    ) -> Result<Task> {
        let task = engine::add_task(
            &mut self.state,
            title,
            category,
            reward,
            moment,
            &self.config,
            &mut self.rng,
        )?;
        self.persist();
        Ok(task)
    }

    pub fn quest_admission(&self, quest: &PresetQuest, moment: Moment) -> Admission {
        engine::quest_admission(&self.state, quest, moment)
    }

    pub fn accept_quest(&mut self, quest_id: &str, moment: Moment) -> Result<Task> {
        let task = engine::accept_quest(&mut self.state, quest_id, moment)?;
        self.persist();
        Ok(task)
    }

    pub fn complete_task(&mut self, task_id: &str, moment: Moment) -> Result<Completion> {
        let completion = engine::complete_task(&mut self.state, task_id, moment, &self.config)?;
        self.persist();
        Ok(completion)
    }

    /// This week's boss, rotating it in first if the week changed.
    pub fn current_boss(&mut self, moment: Moment) -> (Option<&BossEncounter>, Option<Event>) {
        let event = engine::rotate_boss(&mut self.state, moment.today, &self.config);
        if event.is_some() {
            self.persist();
        }
        (self.state.boss.as_ref(), event)
    }

    /// Forget all progression and remove it from the store.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.store.clear()?;
        self.state = ProfileState::default();
        Ok(())
    }
}
