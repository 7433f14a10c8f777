use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use slotmap::{new_key_type, SlotMap};

/// A deferred callback.
pub type Task = Box<dyn FnOnce() + 'static>;

/// Something that can run a [`Task`] after a delay.
///
/// Everything runs on one thread: the browser event loop in the client, or the
/// caller of [`ManualScheduler::advance`] in tests.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle;
}

/// Owned handle to a pending task. Cancels the task when dropped.
///
/// Cancelling a task that already ran is a no-op.
#[must_use = "dropping a TimerHandle cancels the pending task"]
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A handle for a task that could not be scheduled.
    pub fn inert() -> Self {
        Self { cancel: None }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerHandle")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

new_key_type! {
    struct TimerKey;
}

struct Pending {
    deadline: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    next_seq: u64,
    pending: SlotMap<TimerKey, Pending>,
}

impl ManualClock {
    fn next_due(&self, until: Duration) -> Option<TimerKey> {
        self.pending
            .iter()
            .filter(|(_, p)| p.deadline <= until)
            .min_by_key(|(_, p)| (p.deadline, p.seq))
            .map(|(key, _)| key)
    }
}

/// Virtual clock. Time only moves when [`advance`](Self::advance) is called.
///
/// Tasks run in deadline order, ties broken by scheduling order. A task
/// scheduled by a running task runs within the same `advance` if it falls due
/// before the target time.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    pub fn advance_to(&self, target: Duration) {
        loop {
            // the borrow must end before the task runs, tasks reschedule
            let task = {
                let mut clock = self.clock.borrow_mut();
                let Some(key) = clock.next_due(target) else {
                    break;
                };
                let Some(pending) = clock.pending.remove(key) else {
                    break;
                };
                clock.now = clock.now.max(pending.deadline);
                pending.task
            };
            task();
        }
        let mut clock = self.clock.borrow_mut();
        clock.now = clock.now.max(target);
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        let key = {
            let mut clock = self.clock.borrow_mut();
            let seq = clock.next_seq;
            clock.next_seq += 1;
            let deadline = clock.now + delay;
            clock.pending.insert(Pending {
                deadline,
                seq,
                task,
            })
        };
        let clock: Weak<RefCell<ManualClock>> = Rc::downgrade(&self.clock);
        TimerHandle::new(move || {
            if let Some(clock) = clock.upgrade() {
                if let Ok(mut clock) = clock.try_borrow_mut() {
                    clock.pending.remove(key);
                }
            }
        })
    }
}

/// Timers backed by `setTimeout` in the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TimerHandle {
        match leptos::prelude::set_timeout_with_handle(task, delay) {
            Ok(handle) => TimerHandle::new(move || handle.clear()),
            Err(err) => {
                log::warn!("failed to schedule timer: {err:?}");
                TimerHandle::inert()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_runs_tasks_in_deadline_order() {
        let scheduler = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let mut handles = Vec::new();
        for (name, delay) in [("c", 30), ("a", 10), ("b", 20), ("a2", 10)] {
            let log = log.clone();
            handles.push(scheduler.schedule(
                ms(delay),
                Box::new(move || log.borrow_mut().push((name, delay))),
            ));
        }

        scheduler.advance(ms(15));
        assert_eq!(*log.borrow(), vec![("a", 10), ("a2", 10)]);
        assert_eq!(scheduler.now(), ms(15));

        scheduler.advance(ms(100));
        assert_eq!(log.borrow().len(), 4);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancel_and_drop_prevent_run() {
        let scheduler = ManualScheduler::new();
        let fired = Rc::new(Cell::new(0));

        let f = fired.clone();
        let cancelled = scheduler.schedule(ms(5), Box::new(move || f.set(f.get() + 1)));
        let f = fired.clone();
        let dropped = scheduler.schedule(ms(5), Box::new(move || f.set(f.get() + 1)));
        assert_eq!(scheduler.pending(), 2);

        cancelled.cancel();
        drop(dropped);
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(ms(10));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_task_scheduled_from_task_runs_in_same_advance() {
        let scheduler = ManualScheduler::new();
        let times = Rc::new(RefCell::new(Vec::new()));
        let slot: Rc<RefCell<Option<TimerHandle>>> = Rc::new(RefCell::new(None));

        let inner_scheduler = scheduler.clone();
        let inner_times = times.clone();
        let inner_slot = slot.clone();
        let handle = scheduler.schedule(
            ms(10),
            Box::new(move || {
                inner_times.borrow_mut().push(inner_scheduler.now());
                let times = inner_times.clone();
                let clock = inner_scheduler.clone();
                let next = inner_scheduler.schedule(
                    ms(10),
                    Box::new(move || times.borrow_mut().push(clock.now())),
                );
                *inner_slot.borrow_mut() = Some(next);
            }),
        );

        scheduler.advance(ms(25));
        assert_eq!(*times.borrow(), vec![ms(10), ms(20)]);
        assert_eq!(scheduler.now(), ms(25));
        drop(handle);
    }

    #[test]
    fn test_inert_handle_is_harmless() {
        let handle = TimerHandle::inert();
        handle.cancel();
    }
}
