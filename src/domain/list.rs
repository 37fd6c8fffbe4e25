//! Ordered task list with 1-based indexing
//!
//! Insertion order is both display and storage order. Users address tasks by
//! their 1-based position; deleting a task shifts every later task down by one.

use std::cmp::Ordering;

use thiserror::Error;

use super::task::Task;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("There is no task {index}. You have {size} task(s).")]
    InvalidTaskIndex { index: i64, size: usize },

    #[error("Come on, my memory is limited to {capacity} tasks")]
    ListFull { capacity: usize },
}

/// The task list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
    capacity: Option<usize>,
}

impl TaskList {
    /// Creates an empty, unbounded list
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list holding at most `capacity` tasks (`None` = unbounded)
    pub fn with_capacity(capacity: Option<usize>) -> Self {
        Self {
            tasks: Vec::new(),
            capacity,
        }
    }

    /// Creates a list from already loaded tasks
    ///
    /// The capacity only limits later additions; loaded tasks are never dropped.
    pub fn from_tasks(tasks: Vec<Task>, capacity: Option<usize>) -> Self {
        Self { tasks, capacity }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterates over the tasks in order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Returns the tasks as a slice, in order
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a task at the end
    pub fn add(&mut self, task: Task) -> Result<&Task, ListError> {
        if let Some(capacity) = self.capacity {
            if self.tasks.len() >= capacity {
                return Err(ListError::ListFull { capacity });
            }
        }

        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Returns the task at a 1-based index
    pub fn get(&self, index: i64) -> Result<&Task, ListError> {
        let offset = self.offset(index)?;
        Ok(&self.tasks[offset])
    }

    /// Marks the task at a 1-based index as done
    pub fn mark_done(&mut self, index: i64) -> Result<&Task, ListError> {
        let offset = self.offset(index)?;
        let task = &mut self.tasks[offset];
        task.mark_done();
        Ok(task)
    }

    /// Marks the task at a 1-based index as not done
    pub fn mark_undone(&mut self, index: i64) -> Result<&Task, ListError> {
        let offset = self.offset(index)?;
        let task = &mut self.tasks[offset];
        task.mark_undone();
        Ok(task)
    }

    /// Removes and returns the task at a 1-based index
    pub fn delete(&mut self, index: i64) -> Result<Task, ListError> {
        let offset = self.offset(index)?;
        Ok(self.tasks.remove(offset))
    }

    /// Finds tasks whose name contains `keyword`, ignoring case
    ///
    /// Each match comes with its 1-based index in this list.
    pub fn find(&self, keyword: &str) -> Vec<(usize, &Task)> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.matches(keyword))
            .map(|(offset, task)| (offset + 1, task))
            .collect()
    }

    /// Sorts dated tasks by date (earliest first), then to-dos; ties by name
    pub fn sort_by_date(&mut self) {
        self.tasks
            .sort_by(|a, b| compare_dates(a, b).then_with(|| compare_names(a, b)));
    }

    /// Sorts tasks by name, ignoring case; equal names fall back to date order
    pub fn sort_by_name(&mut self) {
        self.tasks
            .sort_by(|a, b| compare_names(a, b).then_with(|| compare_dates(a, b)));
    }

    fn offset(&self, index: i64) -> Result<usize, ListError> {
        let size = self.tasks.len();
        match usize::try_from(index) {
            Ok(i) if (1..=size).contains(&i) => Ok(i - 1),
            _ => Err(ListError::InvalidTaskIndex { index, size }),
        }
    }
}

/// Dated tasks by their date, undated ones after them
fn compare_dates(a: &Task, b: &Task) -> Ordering {
    match (a.kind().sort_date(), b.kind().sort_date()) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_names(a: &Task, b: &Task) -> Ordering {
    a.name().to_lowercase().cmp(&b.name().to_lowercase())
}
