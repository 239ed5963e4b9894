//! Work deferred to the next host frame.

use std::collections::VecDeque;

/// Holds at most one pending value; a newer value replaces an older one.
#[derive(Debug)]
pub struct FrameSlot<T> {
    pending: Option<T>,
}

impl<T> Default for FrameSlot<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, value: T) {
        self.pending = Some(value);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Take the value for this frame.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Ordered queue of deferred tasks.
#[derive(Debug)]
pub struct TaskQueue<T> {
    tasks: VecDeque<T>,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self {
            tasks: VecDeque::new(),
        }
    }
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: T) {
        self.tasks.push_back(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove every queued task, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.tasks.drain(..)
    }

    pub fn clear(&mut self) {
        self.tasks.clear();
    }
}
