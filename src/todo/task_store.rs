use crate::error::TodoError;
use crate::migration::TaskRecord;
use crate::todo::task::{
    DEFAULT_RECURRENCE_INTERVAL, Priority, RecurrencePattern, Task, create_task, local_now,
};
use crate::validation::{
    RawId, TagsInput, validate_description, validate_id, validate_priority,
    validate_recurrence_interval, validate_recurrence_pattern, validate_tags, validate_title,
};
use chrono::NaiveDateTime;
use std::collections::HashSet;
use tracing::debug;

/// Maximum number of live tasks in a store
pub const MAX_TASKS: usize = 1000;

/// Result of a completion status change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The task whose status changed
    pub id: u32,
    pub completed: bool,
    /// The next occurrence spawned by completing a recurring task
    pub spawned: Option<SpawnedOccurrence>,
}

/// A task created by completing a recurring task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnedOccurrence {
    pub id: u32,
    pub next_occurrence: NaiveDateTime,
}

/// In-memory collection of tasks with sequential id assignment
///
/// The store owns every record and the id counter. Ids start at 1, increase
/// monotonically and are never reused, even after deletion. All operations
/// validate their raw input first and leave the store untouched on failure.
///
/// Queries return owned [`Task`] snapshots; the only way to change a stored
/// task is through the store's own operations.
pub struct TaskStore {
    /// Stored records, possibly in older schema versions
    ///
    /// Kept in insertion order; [`TaskStore::list`] sorts by id.
    pub(crate) records: Vec<TaskRecord>,

    /// Id assigned to the next created task
    pub(crate) next_id: u32,

    /// Time source for creation timestamps and recurrence base dates
    clock: fn() -> NaiveDateTime,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
            clock: local_now,
        }
    }
}

impl TaskStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty store that reads the current time from `clock`
    pub fn with_clock(clock: fn() -> NaiveDateTime) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    /// Drop every task and restart id assignment at 1
    pub fn reset(&mut self) {
        self.records.clear();
        self.next_id = 1;
    }

    /// Number of live tasks
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Id the next created task will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Stored records in insertion order, each in the schema version it is stored in
    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    fn allocate_id(&mut self) -> Result<u32, TodoError> {
        let following = self.next_id.checked_add(1).ok_or(TodoError::IdsExhausted)?;
        let id = self.next_id;
        self.next_id = following;
        Ok(id)
    }

    fn position(&self, id: u32) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Validate a raw id and resolve it to a record index
    fn resolve(&self, raw_id: impl Into<RawId>) -> Result<(u32, usize), TodoError> {
        let id = validate_id(raw_id)?;
        let pos = self.position(id).ok_or(TodoError::NotFound(id))?;
        Ok((id, pos))
    }

    /// Add a new task
    ///
    /// # Arguments
    /// * `title` - Required title (1-200 characters, not blank)
    /// * `description` - Optional description; `None` is stored as ""
    ///
    /// # Returns
    /// The id assigned to the new task
    pub fn add(&mut self, title: Option<&str>, description: Option<&str>) -> Result<u32, TodoError> {
        if self.records.len() >= MAX_TASKS {
            return Err(TodoError::CapacityExceeded);
        }
        let title = validate_title(title)?;
        let description = validate_description(description)?;

        let id = self.allocate_id()?;
        let task = Task {
            created_at: self.now(),
            ..create_task(id, title, description)
        };
        self.records.push(TaskRecord::Current(task));
        debug!(id, "task added");
        Ok(id)
    }

    /// Bulk-insert records of any schema version
    ///
    /// All-or-nothing: fails without modifying the store if the result would
    /// exceed capacity, if any id is below the id counter or repeated, or if
    /// any record carries an invalid title, description or tag. Ids below the
    /// counter were already handed out, so deleted ids stay retired. Tags are
    /// normalized on the way in. The id counter moves past the largest
    /// imported id so later additions never collide.
    ///
    /// # Returns
    /// The number of imported records
    pub fn import(&mut self, records: Vec<TaskRecord>) -> Result<usize, TodoError> {
        if self.records.len() + records.len() > MAX_TASKS {
            return Err(TodoError::CapacityExceeded);
        }

        let mut seen = HashSet::new();
        let mut prepared = Vec::with_capacity(records.len());
        for mut record in records {
            let id = record.id();
            // u32::MAX would leave no id for the counter to move to
            if id == 0 || id == u32::MAX {
                return Err(TodoError::InvalidId);
            }
            if id < self.next_id || !seen.insert(id) {
                return Err(TodoError::DuplicateId(id));
            }
            validate_title(Some(record.title()))?;
            validate_description(Some(record.description()))?;
            let tags = validate_tags(Some(TagsInput::List(record.tags().to_vec())))?;
            record.set_tags(tags);
            if let TaskRecord::Current(task) = &record {
                validate_recurrence_interval(task.recurrence_interval)?;
            }
            prepared.push(record);
        }

        let count = prepared.len();
        if let Some(max_id) = prepared.iter().map(TaskRecord::id).max() {
            self.next_id = max_id + 1;
        }
        self.records.extend(prepared);
        debug!(count, next_id = self.next_id, "records imported");
        Ok(count)
    }

    /// List every task ordered by ascending id
    ///
    /// Upgrades any stored record that is still in an older schema version,
    /// persisting the upgrade in the store.
    pub fn list(&mut self) -> Vec<Task> {
        let now = self.now();
        let mut tasks: Vec<Task> = self
            .records
            .iter_mut()
            .map(|record| record.upgrade_with(now, |task| task.clone()))
            .collect();
        tasks.sort_by_key(|t| t.id);
        tasks
    }

    /// Look up a single task
    ///
    /// # Returns
    /// A current-schema snapshot of the task; `InvalidId` for a malformed id,
    /// `NotFound` when no live task has it
    pub fn get_by_id(&self, raw_id: impl Into<RawId>) -> Result<Task, TodoError> {
        let (_, pos) = self.resolve(raw_id)?;
        Ok(self.records[pos].snapshot(self.now()))
    }

    /// Update a task's title and/or description
    ///
    /// `None` leaves the corresponding field untouched. Both provided fields
    /// are validated before either is applied.
    pub fn update(
        &mut self,
        raw_id: impl Into<RawId>,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Result<u32, TodoError> {
        let (id, pos) = self.resolve(raw_id)?;
        let title = title.map(|t| validate_title(Some(t))).transpose()?;
        let description = description
            .map(|d| validate_description(Some(d)))
            .transpose()?;

        let record = &mut self.records[pos];
        if let Some(title) = title {
            record.set_title(title.to_string());
        }
        if let Some(description) = description {
            record.set_description(description);
        }
        debug!(id, "task updated");
        Ok(id)
    }

    /// Delete a task; its id is never handed out again
    pub fn delete(&mut self, raw_id: impl Into<RawId>) -> Result<u32, TodoError> {
        let (id, pos) = self.resolve(raw_id)?;
        self.records.remove(pos);
        debug!(id, "task deleted");
        Ok(id)
    }

    /// Mark a task complete or incomplete
    ///
    /// Idempotent: setting the current value again succeeds. When a task with
    /// a recurrence pattern goes from incomplete to complete, a new task is
    /// spawned that copies its title, description, priority, tags and
    /// recurrence settings, with `next_occurrence` set to now plus the
    /// recurrence interval. If there is no room for the new task the call
    /// fails and the original stays incomplete.
    pub fn set_completed(
        &mut self,
        raw_id: impl Into<RawId>,
        completed: bool,
    ) -> Result<Completion, TodoError> {
        let (id, pos) = self.resolve(raw_id)?;
        let now = self.now();
        let record = &self.records[pos];
        let transition = completed && !record.completed();

        let spawn = if transition {
            let current = record.snapshot(now);
            match current.recurrence_pattern {
                Some(pattern) => Some(self.prepare_next_occurrence(&current, pattern, now)?),
                None => None,
            }
        } else {
            None
        };

        self.records[pos].set_completed(completed);

        let spawned = spawn.map(|(task, next_occurrence)| {
            let occurrence = SpawnedOccurrence {
                id: task.id,
                next_occurrence,
            };
            self.records.push(TaskRecord::Current(task));
            occurrence
        });

        match &spawned {
            Some(next) => debug!(id, next_id = next.id, next_occurrence = %next.next_occurrence, "recurring task completed"),
            None => debug!(id, completed, "completion status set"),
        }
        Ok(Completion {
            id,
            completed,
            spawned,
        })
    }

    /// Build the task for the next occurrence of `task` without storing it
    ///
    /// Reserves an id only once every check has passed.
    fn prepare_next_occurrence(
        &mut self,
        task: &Task,
        pattern: RecurrencePattern,
        now: NaiveDateTime,
    ) -> Result<(Task, NaiveDateTime), TodoError> {
        if self.records.len() >= MAX_TASKS {
            return Err(TodoError::CapacityExceeded);
        }
        let next_date = pattern
            .advance(now, task.recurrence_interval)
            .ok_or(TodoError::InvalidInterval)?;

        let new_id = self.allocate_id()?;
        let next = Task {
            priority: task.priority,
            tags: task.tags.clone(),
            created_at: now,
            recurrence_pattern: Some(pattern),
            recurrence_interval: task.recurrence_interval,
            next_occurrence: Some(next_date),
            ..create_task(new_id, task.title.clone(), task.description.clone())
        };
        Ok((next, next_date))
    }

    /// Set a task's priority
    ///
    /// # Returns
    /// The canonical priority that was stored
    pub fn update_priority(
        &mut self,
        raw_id: impl Into<RawId>,
        priority: &str,
    ) -> Result<Priority, TodoError> {
        let (id, pos) = self.resolve(raw_id)?;
        let priority = validate_priority(Some(priority))?;
        let now = self.now();
        self.records[pos].upgrade_with(now, |task| task.priority = priority);
        debug!(id, %priority, "priority updated");
        Ok(priority)
    }

    /// Add tags to a task, skipping ones it already has
    ///
    /// # Returns
    /// The task's tags after the change
    pub fn add_tags(
        &mut self,
        raw_id: impl Into<RawId>,
        tags: impl Into<TagsInput>,
    ) -> Result<Vec<String>, TodoError> {
        let (id, pos) = self.resolve(raw_id)?;
        let new_tags = validate_tags(Some(tags.into()))?;
        let now = self.now();
        let tags = self.records[pos].upgrade_with(now, |task| {
            for tag in new_tags {
                if !task.tags.contains(&tag) {
                    task.tags.push(tag);
                }
            }
            task.tags.clone()
        });
        debug!(id, ?tags, "tags added");
        Ok(tags)
    }

    /// Remove tags from a task; tags it does not carry are ignored
    ///
    /// # Returns
    /// The task's tags after the change
    pub fn remove_tags(
        &mut self,
        raw_id: impl Into<RawId>,
        tags: impl Into<TagsInput>,
    ) -> Result<Vec<String>, TodoError> {
        let (id, pos) = self.resolve(raw_id)?;
        let to_remove: HashSet<String> = validate_tags(Some(tags.into()))?.into_iter().collect();
        let now = self.now();
        let tags = self.records[pos].upgrade_with(now, |task| {
            task.tags.retain(|t| !to_remove.contains(t));
            task.tags.clone()
        });
        debug!(id, ?tags, "tags removed");
        Ok(tags)
    }

    /// Configure or clear a task's recurrence
    ///
    /// A pattern of "None" (or blank) clears recurrence and resets the
    /// interval to 1, ignoring `interval`. Either way `next_occurrence` is
    /// cleared.
    ///
    /// # Returns
    /// The stored pattern, `None` when recurrence was removed
    pub fn set_recurrence(
        &mut self,
        raw_id: impl Into<RawId>,
        pattern: &str,
        interval: u32,
    ) -> Result<Option<RecurrencePattern>, TodoError> {
        let (id, pos) = self.resolve(raw_id)?;
        let pattern = validate_recurrence_pattern(Some(pattern))?;
        let interval = match pattern {
            Some(_) => validate_recurrence_interval(interval)?,
            None => DEFAULT_RECURRENCE_INTERVAL,
        };
        let now = self.now();
        self.records[pos].upgrade_with(now, |task| {
            task.recurrence_pattern = pattern;
            task.recurrence_interval = interval;
            task.next_occurrence = None;
        });
        debug!(id, pattern = ?pattern, interval, "recurrence set");
        Ok(pattern)
    }
}
