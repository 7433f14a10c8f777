use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use super::scheduler::{Scheduler, TimerHandle};
use super::{require_positive, MotionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPhase {
    Showing(usize),
    Fading(usize),
}

impl RotationPhase {
    pub fn index(self) -> usize {
        match self {
            Self::Showing(i) | Self::Fading(i) => i,
        }
    }

    pub fn is_fading(self) -> bool {
        matches!(self, Self::Fading(_))
    }
}

struct Rotation {
    len: usize,
    hold: Duration,
    fade: Duration,
    phase: RotationPhase,
    timer: Option<TimerHandle>,
    listeners: Vec<Rc<dyn Fn(RotationPhase)>>,
    live: bool,
}

impl Rotation {
    fn advance(&mut self) -> Duration {
        match self.phase {
            RotationPhase::Showing(i) => {
                self.phase = RotationPhase::Fading(i);
                self.fade
            }
            RotationPhase::Fading(i) => {
                self.phase = RotationPhase::Showing((i + 1) % self.len);
                self.hold
            }
        }
    }
}

/// Cycles through a fixed list of texts: each one is shown for `hold`, then
/// fades out for `fade` before the next one appears.
pub struct TextRotator {
    texts: Vec<String>,
    state: Rc<RefCell<Rotation>>,
    scheduler: Rc<dyn Scheduler>,
}

impl TextRotator {
    pub fn new(
        texts: Vec<String>,
        hold: Duration,
        fade: Duration,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, MotionError> {
        if texts.is_empty() {
            return Err(MotionError::InvalidParameter {
                name: "texts",
                reason: "at least one text is required".to_string(),
            });
        }
        require_positive("hold", hold)?;
        require_positive("fade", fade)?;
        let state = Rotation {
            len: texts.len(),
            hold,
            fade,
            phase: RotationPhase::Showing(0),
            timer: None,
            listeners: Vec::new(),
            live: true,
        };
        Ok(Self {
            texts,
            state: Rc::new(RefCell::new(state)),
            scheduler,
        })
    }

    pub fn subscribe(&self, listener: impl Fn(RotationPhase) + 'static) {
        self.state.borrow_mut().listeners.push(Rc::new(listener));
    }

    pub fn start(&self) -> Result<(), MotionError> {
        let mut state = self.state.borrow_mut();
        if !state.live {
            return Err(MotionError::Disposed);
        }
        let hold = state.hold;
        state.timer = Some(arm(
            Rc::downgrade(&self.state),
            self.scheduler.clone(),
            hold,
        ));
        Ok(())
    }

    pub fn dispose(&self) {
        let mut state = self.state.borrow_mut();
        state.live = false;
        if let Some(timer) = state.timer.take() {
            timer.cancel();
        }
        state.listeners.clear();
    }

    pub fn phase(&self) -> RotationPhase {
        self.state.borrow().phase
    }

    pub fn current(&self) -> &str {
        &self.texts[self.phase().index()]
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }
}

impl Drop for TextRotator {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn arm(state: Weak<RefCell<Rotation>>, scheduler: Rc<dyn Scheduler>, delay: Duration) -> TimerHandle {
    let next = scheduler.clone();
    scheduler.schedule(delay, Box::new(move || tick(state, next)))
}

fn tick(state: Weak<RefCell<Rotation>>, scheduler: Rc<dyn Scheduler>) {
    let Some(rc) = state.upgrade() else {
        return;
    };
    let (phase, listeners) = {
        let Ok(mut rotation) = rc.try_borrow_mut() else {
            return;
        };
        if !rotation.live {
            return;
        }
        let delay = rotation.advance();
        rotation.timer = Some(arm(Rc::downgrade(&rc), scheduler, delay));
        (rotation.phase, rotation.listeners.clone())
    };
    for listener in listeners {
        // a listener may dispose the rotator
        if !rc.borrow().live {
            return;
        }
        listener(phase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ManualScheduler;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn rotator(texts: &[&str]) -> (TextRotator, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let rotator = TextRotator::new(
            texts.iter().map(|s| s.to_string()).collect(),
            ms(3000),
            ms(500),
            Rc::new(scheduler.clone()),
        )
        .unwrap();
        (rotator, scheduler)
    }

    #[test]
    fn test_cycles_through_texts() {
        let (rotator, scheduler) = rotator(&["one", "two", "three"]);
        rotator.start().unwrap();
        assert_eq!(rotator.current(), "one");

        scheduler.advance(ms(3000));
        assert_eq!(rotator.phase(), RotationPhase::Fading(0));
        assert_eq!(rotator.current(), "one");

        scheduler.advance(ms(500));
        assert_eq!(rotator.phase(), RotationPhase::Showing(1));
        assert_eq!(rotator.current(), "two");

        scheduler.advance(ms(7000));
        assert_eq!(rotator.phase(), RotationPhase::Showing(0));
    }

    #[test]
    fn test_listeners_see_each_phase() {
        let (rotator, scheduler) = rotator(&["a", "b"]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        rotator.subscribe(move |phase| sink.borrow_mut().push(phase));
        rotator.start().unwrap();
        scheduler.advance(ms(7000));
        assert_eq!(
            *seen.borrow(),
            vec![
                RotationPhase::Fading(0),
                RotationPhase::Showing(1),
                RotationPhase::Fading(1),
                RotationPhase::Showing(0),
            ]
        );
    }

    #[test]
    fn test_dispose_stops_rotation() {
        let (rotator, scheduler) = rotator(&["a", "b"]);
        rotator.start().unwrap();
        rotator.dispose();
        assert_eq!(scheduler.pending(), 0);
        scheduler.advance(ms(10_000));
        assert_eq!(rotator.phase(), RotationPhase::Showing(0));
        assert_eq!(rotator.start(), Err(MotionError::Disposed));
    }

    #[test]
    fn test_dispose_from_listener_skips_remaining_listeners() {
        let scheduler = ManualScheduler::new();
        let rotator = Rc::new(
            TextRotator::new(
                vec!["a".to_string(), "b".to_string()],
                ms(100),
                ms(10),
                Rc::new(scheduler.clone()),
            )
            .unwrap(),
        );
        let weak = Rc::downgrade(&rotator);
        rotator.subscribe(move |_| {
            if let Some(rotator) = weak.upgrade() {
                rotator.dispose();
            }
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        rotator.subscribe(move |phase| sink.borrow_mut().push(phase));

        rotator.start().unwrap();
        scheduler.advance(ms(1000));
        assert!(seen.borrow().is_empty());
        assert_eq!(rotator.phase(), RotationPhase::Fading(0));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_rejects_empty_list() {
        let scheduler: Rc<dyn Scheduler> = Rc::new(ManualScheduler::new());
        let result = TextRotator::new(Vec::new(), ms(10), ms(10), scheduler);
        assert!(matches!(
            result,
            Err(MotionError::InvalidParameter { name: "texts", .. })
        ));
    }
}
