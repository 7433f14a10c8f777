pub mod cursor;
pub mod matrix;
pub mod rotating;
pub mod scheduler;
pub mod typing;
pub mod visibility;

pub use cursor::{is_clickable_tag, CursorLease, CursorShape, CursorStyleHost, PointerState};
pub use matrix::{MatrixGrid, MatrixRain, MATRIX_CHARSET};
pub use rotating::{RotationPhase, TextRotator};
#[cfg(feature = "hydrate")]
pub use scheduler::BrowserScheduler;
pub use scheduler::{ManualScheduler, Scheduler, Task, TimerHandle};
pub use typing::{Phase, TypingAnimator, TypingConfig, TypingEvent};
pub use visibility::{Observation, VisibilityChange, VisibilityOptions, VisibilityTracker};

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("invalid {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("animation has been disposed")]
    Disposed,
}

pub(crate) fn require_positive(name: &'static str, value: Duration) -> Result<(), MotionError> {
    if value.is_zero() {
        return Err(MotionError::InvalidParameter {
            name,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}
