//! Progress persistence

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::catalog::{Problem, seed_problems};
use crate::storage::KeyValueStore;

/// Storage key for the progress record
pub const PROGRESS_KEY: &str = "dsa_progress";

/// Authoritative, persisted list of problems with completion state
#[derive(Debug)]
pub struct ProgressStore<S: KeyValueStore> {
    storage: S,
    problems: Vec<Problem>,
    initialized: bool,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Create an uninitialized store over `storage`
    pub fn new(storage: S) -> Self {
        Self { storage, problems: Vec::new(), initialized: false }
    }

    /// Load the persisted snapshot, or seed from the bundled catalog
    pub fn initialize(&mut self) -> Result<()> {
        self.initialize_with(seed_problems)
    }

    /// Load the persisted snapshot, or seed with `seed` when none is usable
    pub fn initialize_with<F>(&mut self, seed: F) -> Result<()>
    where
        F: FnOnce() -> Result<Vec<Problem>>,
    {
        if let Some(problems) = self.load_snapshot()? {
            tracing::debug!("Loaded {} problems from storage", problems.len());
            self.problems = problems;
            self.initialized = true;
            return Ok(());
        }

        let mut problems = seed()?;
        for problem in &mut problems {
            problem.completed = false;
            problem.completed_date = None;
        }

        tracing::info!("Seeded progress with {} problems", problems.len());
        self.problems = problems;
        self.initialized = true;
        self.persist()
    }

    /// Read the stored record, treating anything unusable as absent
    fn load_snapshot(&self) -> Result<Option<Vec<Problem>>> {
        let Some(contents) = self.storage.get(PROGRESS_KEY)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Vec<Problem>>(&contents) {
            Ok(problems) if problems.is_empty() => {
                tracing::warn!("Stored progress is empty, reseeding");
                Ok(None)
            }
            Ok(problems) => Ok(Some(problems)),
            Err(e) => {
                tracing::warn!("Ignoring malformed progress record: {}", e);
                Ok(None)
            }
        }
    }

    /// Flip completion of `title` at the current time
    ///
    /// Returns `false` without touching storage when no problem has that title.
    pub fn toggle_completion(&mut self, title: &str) -> Result<bool> {
        self.toggle_completion_at(title, Utc::now())
    }

    /// Flip completion of `title`, stamping `now` when it becomes complete
    pub fn toggle_completion_at(&mut self, title: &str, now: DateTime<Utc>) -> Result<bool> {
        let Some(problem) = self.problems.iter_mut().find(|p| p.title == title) else {
            tracing::debug!("Toggle ignored for unknown title {:?}", title);
            return Ok(false);
        };

        let completed = !problem.completed;
        problem.set_completed(completed, now);

        self.persist()?;
        Ok(true)
    }

    /// Write the full ordered list under [`PROGRESS_KEY`]
    ///
    /// An empty list is never written, so an unloaded store cannot clobber
    /// a valid snapshot.
    pub fn persist(&self) -> Result<()> {
        if self.problems.is_empty() {
            return Ok(());
        }

        let contents = serde_json::to_string_pretty(&self.problems)
            .with_context(|| "Failed to serialize progress")?;
        self.storage.set(PROGRESS_KEY, &contents)
    }

    /// All problems in catalog order
    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    /// Look up a problem by title
    pub fn get(&self, title: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.title == title)
    }

    /// Whether `initialize` has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}
