use super::MotionError;

/// A live platform observation that can be torn down.
pub trait Observation {
    fn disconnect(&mut self);
}

impl<F: FnMut()> Observation for F {
    fn disconnect(&mut self) {
        self()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub freeze_once_visible: bool,
    pub root_margin: String,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            freeze_once_visible: true,
            root_margin: "0px".to_string(),
        }
    }
}

impl VisibilityOptions {
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_freeze_once_visible(mut self, freeze: bool) -> Self {
        self.freeze_once_visible = freeze;
        self
    }

    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(MotionError::InvalidParameter {
                name: "threshold",
                reason: format!("{} is outside [0, 1]", self.threshold),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Unchanged,
    Changed(bool),
    /// Became visible and stopped observing.
    Froze,
    Ignored,
}

/// Tracks whether one element is in view.
///
/// Holds at most one [`Observation`] and releases it when frozen, detached or
/// dropped.
pub struct VisibilityTracker {
    options: VisibilityOptions,
    visible: bool,
    frozen: bool,
    observation: Option<Box<dyn Observation>>,
}

impl VisibilityTracker {
    pub fn new(options: VisibilityOptions) -> Result<Self, MotionError> {
        options.validate()?;
        Ok(Self {
            options,
            visible: false,
            frozen: false,
            observation: None,
        })
    }

    pub fn options(&self) -> &VisibilityOptions {
        &self.options
    }

    /// Takes ownership of the platform observation for this element.
    ///
    /// A frozen tracker releases it straight away.
    pub fn attach(&mut self, observation: impl Observation + 'static) {
        if self.observation.is_some() {
            log::warn!("replacing an existing visibility observation");
        }
        self.release();
        self.observation = Some(Box::new(observation));
        if self.frozen {
            self.release();
        }
    }

    pub fn observe_ratio(&mut self, ratio: f64) -> VisibilityChange {
        if self.frozen {
            return VisibilityChange::Ignored;
        }
        let visible = ratio >= self.options.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        if visible && self.options.freeze_once_visible {
            self.frozen = true;
            self.release();
            return VisibilityChange::Froze;
        }
        if changed {
            VisibilityChange::Changed(visible)
        } else {
            VisibilityChange::Unchanged
        }
    }

    /// No intersection observation on this platform. Content stays shown.
    pub fn capability_missing(&mut self) {
        log::debug!("intersection observation unavailable, showing content");
        self.release();
        self.visible = true;
        self.frozen = true;
    }

    pub fn detach(&mut self) {
        self.release();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    fn release(&mut self) {
        if let Some(mut observation) = self.observation.take() {
            observation.disconnect();
        }
    }
}

impl Drop for VisibilityTracker {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_observation() -> (Rc<Cell<u32>>, impl Observation) {
        let disconnects = Rc::new(Cell::new(0));
        let count = disconnects.clone();
        (disconnects, move || count.set(count.get() + 1))
    }

    fn make_tracker(threshold: f64, freeze: bool) -> VisibilityTracker {
        VisibilityTracker::new(
            VisibilityOptions::default()
                .with_threshold(threshold)
                .with_freeze_once_visible(freeze),
        )
        .unwrap()
    }

    #[test]
    fn test_visible_iff_ratio_reaches_threshold() {
        for t in [0.0, 0.1, 0.25, 0.5, 0.99, 1.0] {
            let mut tracker = make_tracker(t, false);
            for r in [0.0, 0.05, 0.1, 0.3, 0.5, 0.75, 1.0] {
                tracker.observe_ratio(r);
                assert_eq!(tracker.is_visible(), r >= t, "threshold {t}, ratio {r}");
            }
        }
    }

    #[test]
    fn test_reports_changes() {
        let mut tracker = make_tracker(0.5, false);
        assert_eq!(tracker.observe_ratio(0.2), VisibilityChange::Unchanged);
        assert_eq!(tracker.observe_ratio(0.6), VisibilityChange::Changed(true));
        assert_eq!(tracker.observe_ratio(0.9), VisibilityChange::Unchanged);
        assert_eq!(tracker.observe_ratio(0.1), VisibilityChange::Changed(false));
    }

    #[test]
    fn test_freeze_keeps_visible_and_releases_observation() {
        let (disconnects, observation) = counting_observation();
        let mut tracker = make_tracker(0.2, true);
        tracker.attach(observation);

        assert_eq!(tracker.observe_ratio(0.1), VisibilityChange::Unchanged);
        assert!(tracker.is_observing());

        assert_eq!(tracker.observe_ratio(0.3), VisibilityChange::Froze);
        assert!(tracker.is_frozen());
        assert!(!tracker.is_observing());
        assert_eq!(disconnects.get(), 1);

        assert_eq!(tracker.observe_ratio(0.0), VisibilityChange::Ignored);
        assert!(tracker.is_visible());
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_drop_and_detach_release_once() {
        let (disconnects, observation) = counting_observation();
        let mut tracker = make_tracker(0.1, false);
        tracker.attach(observation);
        tracker.detach();
        assert_eq!(disconnects.get(), 1);
        drop(tracker);
        assert_eq!(disconnects.get(), 1);

        let (disconnects, observation) = counting_observation();
        let mut tracker = make_tracker(0.1, false);
        tracker.attach(observation);
        drop(tracker);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_attach_replaces_previous_observation() {
        let (first, a) = counting_observation();
        let (second, b) = counting_observation();
        let mut tracker = make_tracker(0.1, false);
        tracker.attach(a);
        tracker.attach(b);
        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 0);
    }

    #[test]
    fn test_attach_after_freeze_releases_immediately() {
        let mut tracker = make_tracker(0.1, true);
        assert_eq!(tracker.observe_ratio(0.5), VisibilityChange::Froze);

        let (disconnects, observation) = counting_observation();
        tracker.attach(observation);
        assert_eq!(disconnects.get(), 1);
        assert!(!tracker.is_observing());
        assert!(tracker.is_visible());

        drop(tracker);
        assert_eq!(disconnects.get(), 1);
    }

    #[test]
    fn test_attach_after_missing_capability_releases_immediately() {
        let mut tracker = make_tracker(0.5, true);
        tracker.capability_missing();
        let (disconnects, observation) = counting_observation();
        tracker.attach(observation);
        assert_eq!(disconnects.get(), 1);
        assert!(!tracker.is_observing());
    }

    #[test]
    fn test_missing_capability_fails_open() {
        let mut tracker = make_tracker(0.5, false);
        tracker.capability_missing();
        assert!(tracker.is_visible());
        assert_eq!(tracker.observe_ratio(0.0), VisibilityChange::Ignored);
        assert!(tracker.is_visible());
    }

    #[test]
    fn test_rejects_threshold_out_of_range() {
        for t in [-0.1, 1.5, f64::NAN] {
            let result = VisibilityTracker::new(VisibilityOptions::default().with_threshold(t));
            assert!(matches!(
                result,
                Err(MotionError::InvalidParameter { name: "threshold", .. })
            ));
        }
    }
}
