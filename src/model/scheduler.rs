//! Deferred actions with cancellation
//!
//! The event loop polls `take_due` on every tick. Each scheduled item is
//! identified by a `TaskToken` so that a later state change can cancel it
//! before it fires.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskToken(u64);

#[derive(Debug)]
struct Scheduled<T> {
    token: TaskToken,
    due: Instant,
    payload: T,
}

#[derive(Debug)]
pub struct Scheduler<T> {
    tasks: Vec<Scheduled<T>>,
    next_token: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_token: 0,
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay: Duration, payload: T, now: Instant) -> TaskToken {
        let token = TaskToken(self.next_token);
        self.next_token += 1;
        self.tasks.push(Scheduled {
            token,
            due: now + delay,
            payload,
        });
        token
    }

    /// Cancel a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, token: TaskToken) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.token != token);
        self.tasks.len() != before
    }

    #[cfg(test)]
    pub fn is_pending(&self, token: TaskToken) -> bool {
        self.tasks.iter().any(|t| t.token == token)
    }

    /// Remove and return every task due at `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> Vec<(TaskToken, T)> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due <= now);
        self.tasks = pending;
        due.sort_by_key(|t| (t.due, t.token.0));
        due.into_iter().map(|t| (t.token, t.payload)).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_due_respects_deadline() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        let token = scheduler.schedule(Duration::from_millis(1500), "exit", t0);

        assert!(scheduler.take_due(t0 + Duration::from_millis(1499)).is_empty());
        assert!(scheduler.is_pending(token));

        let fired = scheduler.take_due(t0 + Duration::from_millis(1500));
        assert_eq!(fired, vec![(token, "exit")]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_cancelled_task_never_fires() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        let token = scheduler.schedule(Duration::from_millis(10), 1, t0);

        assert!(scheduler.cancel(token));
        assert!(!scheduler.cancel(token));
        assert!(scheduler.take_due(t0 + Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_due_tasks_come_out_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        let t0 = Instant::now();
        scheduler.schedule(Duration::from_millis(30), 'c', t0);
        scheduler.schedule(Duration::from_millis(10), 'a', t0);
        scheduler.schedule(Duration::from_millis(20), 'b', t0);
        scheduler.schedule(Duration::from_millis(90), 'z', t0);

        let fired: Vec<char> = scheduler
            .take_due(t0 + Duration::from_millis(50))
            .into_iter()
            .map(|(_, c)| c)
            .collect();
        assert_eq!(fired, vec!['a', 'b', 'c']);
        assert_eq!(scheduler.len(), 1);
    }
}
