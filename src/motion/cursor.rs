use std::cell::Cell;
use std::rc::Rc;

/// Where the native cursor style lives (the document body in the browser).
pub trait CursorStyleHost {
    fn hide_native(&self);
    fn restore_native(&self);
}

thread_local! {
    static ACTIVE_LEASES: Cell<usize> = const { Cell::new(0) };
}

/// Keeps the native cursor hidden while at least one lease is alive.
///
/// The first lease hides it, the last one dropped restores it.
pub struct CursorLease {
    host: Rc<dyn CursorStyleHost>,
}

impl CursorLease {
    pub fn acquire(host: Rc<dyn CursorStyleHost>) -> Self {
        let previous = ACTIVE_LEASES.with(|count| {
            let previous = count.get();
            count.set(previous + 1);
            previous
        });
        if previous == 0 {
            host.hide_native();
        }
        Self { host }
    }

    pub fn active() -> usize {
        ACTIVE_LEASES.with(Cell::get)
    }
}

impl Drop for CursorLease {
    fn drop(&mut self) {
        let remaining = ACTIVE_LEASES.with(|count| {
            let remaining = count.get().saturating_sub(1);
            count.set(remaining);
            remaining
        });
        if remaining == 0 {
            self.host.restore_native();
        }
    }
}

pub fn is_clickable_tag(tag: &str) -> bool {
    tag.eq_ignore_ascii_case("a") || tag.eq_ignore_ascii_case("button")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorShape {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl CursorShape {
    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub over_clickable: bool,
    pub pressed: bool,
    pub visible: bool,
}

impl PointerState {
    pub fn moved(&mut self, x: f64, y: f64, over_clickable: bool) {
        self.x = x;
        self.y = y;
        self.over_clickable = over_clickable;
        self.visible = true;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn opacity(&self) -> f64 {
        if self.visible {
            1.0
        } else {
            0.0
        }
    }

    /// The large ring trailing the pointer.
    pub fn ring(&self) -> CursorShape {
        let scale = if self.pressed {
            0.8
        } else if self.over_clickable {
            1.5
        } else {
            1.0
        };
        CursorShape {
            x: self.x - 16.0,
            y: self.y - 16.0,
            scale,
            opacity: self.opacity(),
        }
    }

    /// The small dot at the pointer position.
    pub fn dot(&self) -> CursorShape {
        CursorShape {
            x: self.x - 4.0,
            y: self.y - 4.0,
            scale: if self.pressed { 1.5 } else { 1.0 },
            opacity: self.opacity(),
        }
    }
}
