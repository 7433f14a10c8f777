//! Character-grid background that keeps re-randomising a few cells.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use rand::{rngs::SmallRng, Rng, SeedableRng};

use super::scheduler::{Scheduler, TimerHandle};
use super::{require_positive, MotionError};

pub const MATRIX_CHARSET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,./<>?";

/// A `rows` x `cols` grid of glyphs drawn from [`MATRIX_CHARSET`].
pub struct MatrixGrid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
    charset: Vec<char>,
    rng: SmallRng,
}

impl MatrixGrid {
    pub fn new(rows: usize, cols: usize, seed: u64) -> Result<Self, MotionError> {
        if rows == 0 || cols == 0 {
            return Err(MotionError::InvalidParameter {
                name: "grid",
                reason: format!("{rows}x{cols} has no cells"),
            });
        }
        let charset: Vec<char> = MATRIX_CHARSET.chars().collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        let cells = (0..rows * cols)
            .map(|_| charset[rng.random_range(0..charset.len())])
            .collect();
        Ok(Self {
            rows,
            cols,
            cells,
            charset,
            rng,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    pub fn line(&self, row: usize) -> String {
        self.cells
            .chunks(self.cols)
            .nth(row)
            .map(|cells| cells.iter().collect())
            .unwrap_or_default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|cells| cells.iter().collect())
            .collect()
    }

    /// Continues from a new seed. The current glyphs stay.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Redraws `count` random cells. The same cell may be picked twice.
    pub fn scramble(&mut self, count: usize) {
        for _ in 0..count {
            let cell = self.rng.random_range(0..self.cells.len());
            self.cells[cell] = self.charset[self.rng.random_range(0..self.charset.len())];
        }
    }
}

type Listener = Rc<dyn Fn(&[String])>;

struct Rain {
    grid: MatrixGrid,
    interval: Duration,
    per_tick: usize,
    timer: Option<TimerHandle>,
    listeners: Vec<Listener>,
    live: bool,
}

/// Scrambles `per_tick` cells of a [`MatrixGrid`] every `interval`.
pub struct MatrixRain {
    state: Rc<RefCell<Rain>>,
    scheduler: Rc<dyn Scheduler>,
}

impl MatrixRain {
    pub fn new(
        grid: MatrixGrid,
        interval: Duration,
        per_tick: usize,
        scheduler: Rc<dyn Scheduler>,
    ) -> Result<Self, MotionError> {
        require_positive("interval", interval)?;
        let state = Rain {
            grid,
            interval,
            per_tick,
            timer: None,
            listeners: Vec::new(),
            live: true,
        };
        Ok(Self {
            state: Rc::new(RefCell::new(state)),
            scheduler,
        })
    }

    /// Listeners receive the grid's lines after each scramble.
    pub fn subscribe(&self, listener: impl Fn(&[String]) + 'static) {
        self.state.borrow_mut().listeners.push(Rc::new(listener));
    }

    pub fn reseed(&self, seed: u64) {
        self.state.borrow_mut().grid.reseed(seed);
    }

    pub fn start(&self) -> Result<(), MotionError> {
        let mut state = self.state.borrow_mut();
        if !state.live {
            return Err(MotionError::Disposed);
        }
        let interval = state.interval;
        state.timer = Some(arm(
            Rc::downgrade(&self.state),
            self.scheduler.clone(),
            interval,
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

    pub fn lines(&self) -> Vec<String> {
        self.state.borrow().grid.lines()
    }
}

impl Drop for MatrixRain {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn arm(state: Weak<RefCell<Rain>>, scheduler: Rc<dyn Scheduler>, delay: Duration) -> TimerHandle {
    let next = scheduler.clone();
    scheduler.schedule(delay, Box::new(move || tick(state, next)))
}

fn tick(state: Weak<RefCell<Rain>>, scheduler: Rc<dyn Scheduler>) {
    let Some(rc) = state.upgrade() else {
        return;
    };
    let (lines, listeners) = {
        let Ok(mut rain) = rc.try_borrow_mut() else {
            return;
        };
        if !rain.live {
            return;
        }
        let count = rain.per_tick;
        rain.grid.scramble(count);
        let interval = rain.interval;
        rain.timer = Some(arm(Rc::downgrade(&rc), scheduler, interval));
        (rain.grid.lines(), rain.listeners.clone())
    };
    for listener in listeners {
        // a listener may dispose the rain
        if !rc.borrow().live {
            return;
        }
        listener(&lines);
    }
}
