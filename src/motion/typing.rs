//! Character-by-character text reveal.
//!
//! The animator is an explicit state machine driven by a single owned timer:
//!
//! ```text
//! Idle --initial_delay--> Typing --len(text) ticks--> Completed
//!                            ^                            |
//!                            +------repeat_delay----------+  (repeat only)
//! ```
//!
//! Entering `Typing` starts from the empty prefix and emits
//! [`TypingEvent::Started`]; every following tick reveals one more character.
//! Listeners see a [`TypingEvent::Revealed`] whenever the prefix changes and
//! exactly one [`TypingEvent::Completed`] per cycle, right after the final
//! character.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::scheduler::{Scheduler, TimerHandle};
use super::{require_positive, MotionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingConfig {
    pub initial_delay: Duration,
    pub char_interval: Duration,
    pub repeat: bool,
    pub repeat_delay: Duration,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::ZERO,
            char_interval: Duration::from_millis(50),
            repeat: false,
            repeat_delay: Duration::from_millis(2000),
        }
    }
}

impl TypingConfig {
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    pub fn with_char_interval(mut self, interval: Duration) -> Self {
        self.char_interval = interval;
        self
    }

    pub fn with_repeat(mut self, repeat_delay: Duration) -> Self {
        self.repeat = true;
        self.repeat_delay = repeat_delay;
        self
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        require_positive("char_interval", self.char_interval)?;
        require_positive("repeat_delay", self.repeat_delay)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Typing,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingEvent {
    Started { cycle: u64 },
    Revealed(String),
    Completed { cycle: u64 },
}

type Listener = Rc<dyn Fn(&TypingEvent)>;

struct State {
    config: TypingConfig,
    source: Vec<char>,
    // picked up when the next cycle begins
    queued: Option<Vec<char>>,
    revealed: String,
    revealed_chars: usize,
    phase: Phase,
    cycle: u64,
    // bumped on every start/pause/dispose so stale callbacks can tell
    generation: u64,
    // bumped on every start; events from an older run are never delivered
    run: u64,
    started: bool,
    paused: bool,
    live: bool,
    timer: Option<TimerHandle>,
    listeners: Vec<Listener>,
}

impl State {
    fn reset_prefix(&mut self, events: &mut Vec<TypingEvent>) {
        self.revealed_chars = 0;
        if !self.revealed.is_empty() {
            self.revealed.clear();
            events.push(TypingEvent::Revealed(String::new()));
        }
    }

    fn begin_cycle(&mut self, events: &mut Vec<TypingEvent>) -> Option<Duration> {
        self.cycle += 1;
        self.phase = Phase::Typing;
        if let Some(next) = self.queued.take() {
            self.source = next;
        }
        self.reset_prefix(events);
        events.push(TypingEvent::Started { cycle: self.cycle });
        if self.source.is_empty() {
            self.complete(events)
        } else {
            Some(self.config.char_interval)
        }
    }

    fn complete(&mut self, events: &mut Vec<TypingEvent>) -> Option<Duration> {
        self.phase = Phase::Completed;
        events.push(TypingEvent::Completed { cycle: self.cycle });
        self.config.repeat.then_some(self.config.repeat_delay)
    }

    /// Runs one transition and returns the delay until the next one.
    fn advance(&mut self, events: &mut Vec<TypingEvent>) -> Option<Duration> {
        match self.phase {
            Phase::Idle => self.begin_cycle(events),
            Phase::Typing => {
                let Some(&ch) = self.source.get(self.revealed_chars) else {
                    return self.complete(events);
                };
                self.revealed.push(ch);
                self.revealed_chars += 1;
                events.push(TypingEvent::Revealed(self.revealed.clone()));
                if self.revealed_chars == self.source.len() {
                    self.complete(events)
                } else {
                    Some(self.config.char_interval)
                }
            }
            Phase::Completed if self.config.repeat => {
                self.phase = Phase::Idle;
                self.begin_cycle(events)
            }
            Phase::Completed => None,
        }
    }

    /// Delay before the next transition from the current phase.
    fn pending_delay(&self) -> Option<Duration> {
        if !self.started {
            return None;
        }
        match self.phase {
            Phase::Idle => Some(self.config.initial_delay),
            Phase::Typing => Some(self.config.char_interval),
            Phase::Completed => self.config.repeat.then_some(self.config.repeat_delay),
        }
    }
}

/// Reveals a text one character at a time on a [`Scheduler`].
///
/// Dropping the animator disposes it: pending timers are cancelled and no
/// listener is called afterwards.
pub struct TypingAnimator {
    state: Rc<RefCell<State>>,
    scheduler: Rc<dyn Scheduler>,
}

impl TypingAnimator {
    pub fn new(
        text: &str,
        config: TypingConfig,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, MotionError> {
        config.validate()?;
        let state = State {
            config,
            source: text.chars().collect(),
            queued: None,
            revealed: String::new(),
            revealed_chars: 0,
            phase: Phase::Idle,
            cycle: 0,
            generation: 0,
            run: 0,
            started: false,
            paused: false,
            live: true,
            timer: None,
            listeners: Vec::new(),
        };
        Ok(Self {
            state: Rc::new(RefCell::new(state)),
            scheduler,
        })
    }

    pub fn subscribe(&self, listener: impl Fn(&TypingEvent) + 'static) {
        self.state.borrow_mut().listeners.push(Rc::new(listener));
    }

    /// Starts a fresh run from `Idle`, cancelling any run in flight.
    pub fn start(&self) -> Result<(), MotionError> {
        let mut events = Vec::new();
        let run = {
            let mut state = self.state.borrow_mut();
            if !state.live {
                return Err(MotionError::Disposed);
            }
            state.generation += 1;
            state.run += 1;
            if let Some(timer) = state.timer.take() {
                timer.cancel();
            }
            state.reset_prefix(&mut events);
            state.phase = Phase::Idle;
            state.cycle = 0;
            state.started = true;
            if !state.paused {
                let delay = state.config.initial_delay;
                let timer = self.arm(state.generation, delay);
                state.timer = Some(timer);
            }
            state.run
        };
        log::trace!("typing animation started");
        dispatch(&self.state, run, events);
        Ok(())
    }

    /// Swaps the source text and starts over.
    pub fn restart(&self, text: &str) -> Result<(), MotionError> {
        {
            let mut state = self.state.borrow_mut();
            if !state.live {
                return Err(MotionError::Disposed);
            }
            state.source = text.chars().collect();
            state.queued = None;
        }
        self.start()
    }

    /// Types `text` from the next cycle on, leaving the current one alone.
    ///
    /// With `repeat` this swaps the text after the repeat delay, so a finished
    /// line stays up for the full hold before the next one is typed.
    pub fn queue_text(&self, text: &str) -> Result<(), MotionError> {
        let mut state = self.state.borrow_mut();
        if !state.live {
            return Err(MotionError::Disposed);
        }
        state.queued = Some(text.chars().collect());
        Ok(())
    }

    /// Stops ticking without losing progress.
    pub fn pause(&self) {
        let mut state = self.state.borrow_mut();
        if !state.live || state.paused {
            return;
        }
        state.paused = true;
        state.generation += 1;
        if let Some(timer) = state.timer.take() {
            timer.cancel();
        }
    }

    /// Continues a paused run. The interrupted step waits its full delay again.
    pub fn resume(&self) -> Result<(), MotionError> {
        let mut state = self.state.borrow_mut();
        if !state.live {
            return Err(MotionError::Disposed);
        }
        if !state.paused {
            return Ok(());
        }
        state.paused = false;
        state.generation += 1;
        if let Some(delay) = state.pending_delay() {
            let timer = self.arm(state.generation, delay);
            state.timer = Some(timer);
        }
        Ok(())
    }

    pub fn dispose(&self) {
        let mut state = self.state.borrow_mut();
        if !state.live {
            return;
        }
        state.live = false;
        state.generation += 1;
        if let Some(timer) = state.timer.take() {
            timer.cancel();
        }
        state.listeners.clear();
    }

    pub fn revealed(&self) -> String {
        self.state.borrow().revealed.clone()
    }

    pub fn phase(&self) -> Phase {
        self.state.borrow().phase
    }

    pub fn cycle(&self) -> u64 {
        self.state.borrow().cycle
    }

    pub fn is_typing(&self) -> bool {
        self.phase() == Phase::Typing
    }

    pub fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    pub fn is_disposed(&self) -> bool {
        !self.state.borrow().live
    }

    fn arm(&self, generation: u64, delay: Duration) -> TimerHandle {
        schedule_step(
            Rc::downgrade(&self.state),
            self.scheduler.clone(),
            generation,
            delay,
        )
    }
}

impl Drop for TypingAnimator {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn schedule_step(
    state: Weak<RefCell<State>>,
    scheduler: Rc<dyn Scheduler>,
    generation: u64,
    delay: Duration,
) -> TimerHandle {
    let next = scheduler.clone();
    scheduler.schedule(
        delay,
        Box::new(move || step(state, next, generation)),
    )
}

fn step(state: Weak<RefCell<State>>, scheduler: Rc<dyn Scheduler>, generation: u64) {
    let Some(rc) = state.upgrade() else {
        return;
    };
    let mut events = Vec::new();
    let run = {
        let Ok(mut current) = rc.try_borrow_mut() else {
            log::warn!("typing tick fired re-entrantly, skipping");
            return;
        };
        if !current.live || current.paused || current.generation != generation {
            return;
        }
        let next = current.advance(&mut events);
        current.timer = next.map(|delay| {
            schedule_step(Rc::downgrade(&rc), scheduler.clone(), generation, delay)
        });
        current.run
    };
    dispatch(&rc, run, events);
}

/// Delivers the events of one transition of `run`.
///
/// Listeners may dispose or restart the animator; whatever is left of the
/// batch then belongs to a finished run and is dropped.
fn dispatch(state: &Rc<RefCell<State>>, run: u64, events: Vec<TypingEvent>) {
    if events.is_empty() {
        return;
    }
    let listeners = state.borrow().listeners.clone();
    for event in &events {
        for listener in &listeners {
            {
                let current = state.borrow();
                if !current.live || current.run != run {
                    return;
                }
            }
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ManualScheduler;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    type Recorded = Rc<RefCell<Vec<(Duration, TypingEvent)>>>;

    fn animator(text: &str, config: TypingConfig) -> (TypingAnimator, ManualScheduler, Recorded) {
        let scheduler = ManualScheduler::new();
        let animator = TypingAnimator::new(text, config, Rc::new(scheduler.clone()))
            .expect("config should be valid");
        let recorded: Recorded = Rc::new(RefCell::new(Vec::new()));
        let clock = scheduler.clone();
        let sink = recorded.clone();
        animator.subscribe(move |event| sink.borrow_mut().push((clock.now(), event.clone())));
        (animator, scheduler, recorded)
    }

    fn revealed_at(recorded: &Recorded) -> Vec<(u64, String)> {
        recorded
            .borrow()
            .iter()
            .filter_map(|(t, e)| match e {
                TypingEvent::Revealed(s) => Some((t.as_millis() as u64, s.clone())),
                _ => None,
            })
            .collect()
    }

    fn completions(recorded: &Recorded) -> Vec<(u64, u64)> {
        recorded
            .borrow()
            .iter()
            .filter_map(|(t, e)| match e {
                TypingEvent::Completed { cycle } => Some((t.as_millis() as u64, *cycle)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_types_hi_on_schedule() {
        let config = TypingConfig::default().with_char_interval(ms(10));
        let (animator, scheduler, recorded) = animator("Hi", config);
        animator.start().unwrap();

        scheduler.advance(ms(0));
        assert_eq!(animator.revealed(), "");
        assert_eq!(animator.phase(), Phase::Typing);

        scheduler.advance(ms(10));
        assert_eq!(animator.revealed(), "H");

        scheduler.advance(ms(10));
        assert_eq!(animator.revealed(), "Hi");
        assert_eq!(animator.phase(), Phase::Completed);

        scheduler.advance(ms(1000));
        assert_eq!(
            revealed_at(&recorded),
            vec![(10, "H".to_string()), (20, "Hi".to_string())]
        );
        assert_eq!(completions(&recorded), vec![(20, 1)]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_prefixes_advance_one_char_per_tick() {
        let text = "héllo, wörld ✓";
        let config = TypingConfig::default()
            .with_initial_delay(ms(500))
            .with_char_interval(ms(40));
        let (animator, scheduler, recorded) = animator(text, config);
        animator.start().unwrap();

        scheduler.advance(ms(499));
        assert_eq!(animator.phase(), Phase::Idle);
        scheduler.advance(ms(10_000));

        let chars: Vec<char> = text.chars().collect();
        let expected: Vec<(u64, String)> = (1..=chars.len())
            .map(|n| (500 + 40 * n as u64, chars[..n].iter().collect()))
            .collect();
        assert_eq!(revealed_at(&recorded), expected);
        assert_eq!(completions(&recorded).len(), 1);
    }

    #[test]
    fn test_completion_follows_last_character() {
        let config = TypingConfig::default().with_char_interval(ms(5));
        let (animator, scheduler, recorded) = animator("abc", config);
        animator.start().unwrap();
        scheduler.advance(ms(100));

        let events = recorded.borrow();
        let last_two: Vec<&TypingEvent> = events.iter().rev().take(2).map(|(_, e)| e).collect();
        assert_eq!(last_two[0], &TypingEvent::Completed { cycle: 1 });
        assert_eq!(last_two[1], &TypingEvent::Revealed("abc".to_string()));
    }

    #[test]
    fn test_repeat_resets_and_replays_identically() {
        let config = TypingConfig::default()
            .with_char_interval(ms(10))
            .with_repeat(ms(100));
        let (animator, scheduler, recorded) = animator("ab", config);
        animator.start().unwrap();

        // cycle 1: a@10 ab@20; reset @120; cycle 2: a@130 ab@140; reset @240
        scheduler.advance(ms(245));
        assert_eq!(
            revealed_at(&recorded),
            vec![
                (10, "a".to_string()),
                (20, "ab".to_string()),
                (120, String::new()),
                (130, "a".to_string()),
                (140, "ab".to_string()),
                (240, String::new()),
            ]
        );
        assert_eq!(completions(&recorded), vec![(20, 1), (140, 2)]);
        assert_eq!(animator.cycle(), 3);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_empty_text_completes_after_initial_delay() {
        let config = TypingConfig::default().with_initial_delay(ms(300));
        let (animator, scheduler, recorded) = animator("", config);
        animator.start().unwrap();

        scheduler.advance(ms(299));
        assert!(completions(&recorded).is_empty());
        scheduler.advance(ms(1));
        assert_eq!(completions(&recorded), vec![(300, 1)]);
        assert_eq!(animator.revealed(), "");
        assert!(revealed_at(&recorded).is_empty());
        // the caret still gets a chance to show
        let events: Vec<TypingEvent> = recorded.borrow().iter().map(|(_, e)| e.clone()).collect();
        assert_eq!(
            events,
            vec![
                TypingEvent::Started { cycle: 1 },
                TypingEvent::Completed { cycle: 1 },
            ]
        );
    }

    #[test]
    fn test_zero_intervals_are_rejected() {
        let scheduler: Rc<dyn Scheduler> = Rc::new(ManualScheduler::new());
        let zero_char = TypingConfig::default().with_char_interval(Duration::ZERO);
        assert!(matches!(
            TypingAnimator::new("x", zero_char, scheduler.clone()),
            Err(MotionError::InvalidParameter { name: "char_interval", .. })
        ));
        let zero_repeat = TypingConfig::default().with_repeat(Duration::ZERO);
        assert!(matches!(
            TypingAnimator::new("x", zero_repeat, scheduler),
            Err(MotionError::InvalidParameter { name: "repeat_delay", .. })
        ));
    }

    #[test]
    fn test_dispose_mid_cycle_stops_everything() {
        let config = TypingConfig::default()
            .with_char_interval(ms(10))
            .with_repeat(ms(50));
        let (animator, scheduler, recorded) = animator("hello", config);
        animator.start().unwrap();
        scheduler.advance(ms(25));
        assert_eq!(animator.revealed(), "he");

        animator.dispose();
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(ms(10_000));

        assert_eq!(animator.revealed(), "he");
        // Started, "h", "he"
        assert_eq!(recorded.borrow().len(), 3);
        assert!(animator.is_disposed());
        assert_eq!(animator.start(), Err(MotionError::Disposed));
    }

    #[test]
    fn test_drop_cancels_pending_timer() {
        let scheduler = ManualScheduler::new();
        let animator = TypingAnimator::new(
            "abc",
            TypingConfig::default(),
            Rc::new(scheduler.clone()),
        )
        .unwrap();
        animator.start().unwrap();
        assert_eq!(scheduler.pending(), 1);
        drop(animator);
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(ms(1000));
    }

    #[test]
    fn test_restart_cancels_previous_chain() {
        let config = TypingConfig::default().with_char_interval(ms(10));
        let (animator, scheduler, recorded) = animator("first", config);
        animator.start().unwrap();
        scheduler.advance(ms(30));
        assert_eq!(animator.revealed(), "fir");

        animator.restart("second").unwrap();
        assert_eq!(animator.revealed(), "");
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(ms(1000));
        assert_eq!(animator.revealed(), "second");
        assert_eq!(completions(&recorded), vec![(90, 1)]);
        assert!(!revealed_at(&recorded)
            .iter()
            .any(|(_, s)| s.starts_with("firs")));
    }

    #[test]
    fn test_start_twice_keeps_single_timer() {
        let config = TypingConfig::default().with_char_interval(ms(10));
        let (animator, scheduler, _) = animator("abc", config);
        animator.start().unwrap();
        animator.start().unwrap();
        animator.start().unwrap();
        assert_eq!(scheduler.pending(), 1);
        scheduler.advance(ms(5));
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_pause_and_resume() {
        let config = TypingConfig::default().with_char_interval(ms(10));
        let (animator, scheduler, _) = animator("abcd", config);
        animator.start().unwrap();
        scheduler.advance(ms(15));
        assert_eq!(animator.revealed(), "a");

        animator.pause();
        assert!(animator.is_paused());
        scheduler.advance(ms(500));
        assert_eq!(animator.revealed(), "a");

        animator.resume().unwrap();
        scheduler.advance(ms(10));
        assert_eq!(animator.revealed(), "ab");
        scheduler.advance(ms(20));
        assert_eq!(animator.revealed(), "abcd");
        assert_eq!(animator.phase(), Phase::Completed);
    }

    #[test]
    fn test_listener_can_restart_on_completion() {
        let scheduler = ManualScheduler::new();
        let config = TypingConfig::default().with_char_interval(ms(10));
        let animator = Rc::new(
            TypingAnimator::new("ab", config, Rc::new(scheduler.clone())).unwrap(),
        );
        let weak = Rc::downgrade(&animator);
        animator.subscribe(move |event| {
            if let (TypingEvent::Completed { .. }, Some(animator)) = (event, weak.upgrade()) {
                if animator.revealed() == "ab" {
                    animator.restart("xyz").unwrap();
                }
            }
        });
        animator.start().unwrap();
        scheduler.advance(ms(20));
        assert_eq!(animator.revealed(), "");
        scheduler.advance(ms(30));
        assert_eq!(animator.revealed(), "xyz");
    }

    #[test]
    fn test_restart_from_listener_drops_rest_of_batch() {
        let scheduler = ManualScheduler::new();
        let config = TypingConfig::default().with_char_interval(ms(10));
        let animator = Rc::new(
            TypingAnimator::new("ab", config, Rc::new(scheduler.clone())).unwrap(),
        );
        let seen = Rc::new(RefCell::new(Vec::new()));

        let weak = Rc::downgrade(&animator);
        animator.subscribe(move |event| {
            if event == &TypingEvent::Revealed("ab".to_string()) {
                if let Some(animator) = weak.upgrade() {
                    animator.restart("xyz").unwrap();
                }
            }
        });
        let sink = seen.clone();
        let weak = Rc::downgrade(&animator);
        animator.subscribe(move |event| {
            if let (TypingEvent::Completed { .. }, Some(animator)) = (event, weak.upgrade()) {
                sink.borrow_mut().push(animator.revealed());
            }
        });

        animator.start().unwrap();
        scheduler.advance(ms(20));
        // "ab" completed the first run, but the restart already replaced it
        assert!(seen.borrow().is_empty());
        assert_eq!(animator.revealed(), "");

        scheduler.advance(ms(30));
        assert_eq!(*seen.borrow(), vec!["xyz".to_string()]);
    }

    #[test]
    fn test_dispose_from_listener_stops_dispatch() {
        let scheduler = ManualScheduler::new();
        let config = TypingConfig::default()
            .with_char_interval(ms(10))
            .with_repeat(ms(10));
        let animator = Rc::new(
            TypingAnimator::new("abc", config, Rc::new(scheduler.clone())).unwrap(),
        );
        let weak = Rc::downgrade(&animator);
        animator.subscribe(move |event| {
            if event == &TypingEvent::Revealed("a".to_string()) {
                if let Some(animator) = weak.upgrade() {
                    animator.dispose();
                }
            }
        });
        let later = Rc::new(RefCell::new(Vec::new()));
        let sink = later.clone();
        animator.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        animator.start().unwrap();
        scheduler.advance(ms(1000));

        assert_eq!(*later.borrow(), vec![TypingEvent::Started { cycle: 1 }]);
        assert!(animator.is_disposed());
        assert_eq!(animator.revealed(), "a");
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_paused_before_start_waits_for_resume() {
        let config = TypingConfig::default()
            .with_initial_delay(ms(100))
            .with_char_interval(ms(10));
        let (animator, scheduler, recorded) = animator("ok", config);
        animator.pause();
        animator.start().unwrap();
        assert_eq!(scheduler.pending(), 0);

        scheduler.advance(ms(500));
        assert_eq!(animator.phase(), Phase::Idle);
        assert!(recorded.borrow().is_empty());

        animator.resume().unwrap();
        scheduler.advance(ms(99));
        assert_eq!(animator.phase(), Phase::Idle);
        scheduler.advance(ms(1));
        assert_eq!(animator.phase(), Phase::Typing);
        scheduler.advance(ms(20));
        assert_eq!(animator.revealed(), "ok");
        assert_eq!(completions(&recorded), vec![(620, 1)]);
    }

    #[test]
    fn test_started_marks_each_cycle() {
        let config = TypingConfig::default()
            .with_initial_delay(ms(5))
            .with_char_interval(ms(10))
            .with_repeat(ms(50));
        let (animator, scheduler, recorded) = animator("x", config);
        animator.start().unwrap();
        scheduler.advance(ms(150));

        let started: Vec<(u64, u64)> = recorded
            .borrow()
            .iter()
            .filter_map(|(t, e)| match e {
                TypingEvent::Started { cycle } => Some((t.as_millis() as u64, *cycle)),
                _ => None,
            })
            .collect();
        // x@15, done; reset @65, x@75; reset @125
        assert_eq!(started, vec![(5, 1), (65, 2), (125, 3)]);
    }

    #[test]
    fn test_queued_text_waits_for_next_cycle() {
        let config = TypingConfig::default()
            .with_char_interval(ms(10))
            .with_repeat(ms(100));
        let (animator, scheduler, recorded) = animator("ab", config);
        animator.start().unwrap();
        scheduler.advance(ms(10));
        animator.queue_text("cd").unwrap();

        scheduler.advance(ms(10));
        assert_eq!(animator.revealed(), "ab");
        scheduler.advance(ms(99));
        assert_eq!(animator.revealed(), "ab");

        scheduler.advance(ms(21));
        assert_eq!(animator.revealed(), "cd");
        assert_eq!(completions(&recorded), vec![(20, 1), (140, 2)]);

        animator.dispose();
        assert_eq!(animator.queue_text("ef"), Err(MotionError::Disposed));
    }
}
