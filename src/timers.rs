pub type TimerId = i64;

/// Deferred work a timer runs when it comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    HideFormSuccess,
}

#[derive(Debug, Clone)]
pub(crate) struct ScheduledTask {
    pub(crate) id: TimerId,
    pub(crate) due_at: i64,
    pub(crate) order: i64,
    pub(crate) action: TimerAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: TimerId,
    pub due_at: i64,
    pub order: i64,
    pub action: TimerAction,
}

/// One-shot timers on a virtual clock. Ties on `due_at` run in scheduling
/// order.
#[derive(Debug, Clone)]
pub(crate) struct TimerQueue {
    tasks: Vec<ScheduledTask>,
    next_timer_id: TimerId,
    next_task_order: i64,
}

impl Default for TimerQueue {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_timer_id: 1,
            next_task_order: 0,
        }
    }
}

impl TimerQueue {
    pub(crate) fn schedule(
        &mut self,
        now_ms: i64,
        action: TimerAction,
        delay_ms: i64,
    ) -> ScheduledTask {
        let delay_ms = delay_ms.max(0);
        let task = ScheduledTask {
            id: self.next_timer_id,
            due_at: now_ms.saturating_add(delay_ms),
            order: self.next_task_order,
            action,
        };
        self.next_timer_id += 1;
        self.next_task_order += 1;
        self.tasks.push(task.clone());
        task
    }

    pub(crate) fn clear(&mut self, id: TimerId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub(crate) fn clear_all(&mut self) -> usize {
        let cleared = self.tasks.len();
        self.tasks.clear();
        cleared
    }

    pub(crate) fn pending(&self) -> Vec<PendingTimer> {
        let mut timers = self
            .tasks
            .iter()
            .map(|task| PendingTimer {
                id: task.id,
                due_at: task.due_at,
                order: task.order,
                action: task.action,
            })
            .collect::<Vec<_>>();
        timers.sort_by_key(|timer| (timer.due_at, timer.order));
        timers
    }

    /// Removes and returns the earliest task, limited to those due at or
    /// before `due_limit` when one is given.
    pub(crate) fn pop_next(&mut self, due_limit: Option<i64>) -> Option<ScheduledTask> {
        let idx = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| due_limit.is_none_or(|limit| task.due_at <= limit))
            .min_by_key(|(_, task)| (task.due_at, task.order))
            .map(|(idx, _)| idx)?;
        Some(self.tasks.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_sorted_by_due_then_order() {
        let mut queue = TimerQueue::default();
        let late = queue.schedule(0, TimerAction::HideFormSuccess, 30);
        let first = queue.schedule(0, TimerAction::HideFormSuccess, 10);
        let tie = queue.schedule(0, TimerAction::HideFormSuccess, 10);

        let ids = queue.pending().iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![first.id, tie.id, late.id]);
    }

    #[test]
    fn negative_delay_clamps_and_due_saturates() {
        let mut queue = TimerQueue::default();
        let now = queue.schedule(50, TimerAction::HideFormSuccess, -5);
        assert_eq!(now.due_at, 50);

        let far = queue.schedule(i64::MAX - 1, TimerAction::HideFormSuccess, 10);
        assert_eq!(far.due_at, i64::MAX);
    }

    #[test]
    fn pop_next_respects_due_limit() {
        let mut queue = TimerQueue::default();
        queue.schedule(0, TimerAction::HideFormSuccess, 100);
        assert!(queue.pop_next(Some(99)).is_none());
        let task = queue.pop_next(Some(100)).expect("due task");
        assert_eq!(task.due_at, 100);
        assert!(queue.pending().is_empty());
    }

    #[test]
    fn clear_reports_whether_timer_existed() {
        let mut queue = TimerQueue::default();
        let a = queue.schedule(0, TimerAction::HideFormSuccess, 1);
        queue.schedule(0, TimerAction::HideFormSuccess, 2);
        assert!(queue.clear(a.id));
        assert!(!queue.clear(a.id));
        assert_eq!(queue.clear_all(), 1);
        assert!(queue.pending().is_empty());
    }
}
