//! Outbound control pacing.
//!
//! Steering is sampled every frame but sent on its own cadence: at most one
//! message per `interval_ms`, skipped when neither the heading (beyond the
//! deadband) nor boost changed, and re-sent after `keepalive_ms` of silence.

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use crate::config::ViewConfig;
use crate::input::ControlSignal;
use crate::math::normalize_angle;

#[derive(Debug, Clone)]
pub struct ControlThrottle {
    interval_ms: f64,
    keepalive_ms: f64,
    angle_deadband: f64,
    last_sent_ms: Option<f64>,
    last_sent: Option<ControlSignal>,
}

impl Default for ControlThrottle {
    fn default() -> Self {
        Self::from(&ViewConfig::default())
    }
}

impl From<&ViewConfig> for ControlThrottle {
    fn from(cfg: &ViewConfig) -> Self {
        Self::new(cfg.control_interval_ms, cfg.control_keepalive_ms, cfg.control_angle_deadband)
    }
}

impl ControlThrottle {
    #[must_use]
    pub fn new(interval_ms: f64, keepalive_ms: f64, angle_deadband: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            keepalive_ms: keepalive_ms.max(0.0),
            angle_deadband: angle_deadband.abs(),
            last_sent_ms: None,
            last_sent: None,
        }
    }

    /// Decide whether `signal` should go out at `now_ms`.
    ///
    /// Returns the signal to send, or `None` to stay quiet this frame. The first
    /// signal after construction or [`Self::reset`] is always sent.
    pub fn poll(&mut self, now_ms: f64, signal: ControlSignal) -> Option<ControlSignal> {
        let (Some(last_ms), Some(last)) = (self.last_sent_ms, self.last_sent) else {
            return self.mark_sent(now_ms, signal);
        };
        let elapsed = now_ms - last_ms;
        if elapsed < self.interval_ms {
            return None;
        }
        let turned = normalize_angle(signal.angle - last.angle).abs() > self.angle_deadband;
        let boost_toggled = signal.is_boosting != last.is_boosting;
        if turned || boost_toggled || elapsed >= self.keepalive_ms {
            return self.mark_sent(now_ms, signal);
        }
        None
    }

    /// Forget what was sent, so the next poll sends unconditionally.
    pub fn reset(&mut self) {
        self.last_sent_ms = None;
        self.last_sent = None;
    }

    #[must_use]
    pub fn last_sent(&self) -> Option<ControlSignal> {
        self.last_sent
    }

    fn mark_sent(&mut self, now_ms: f64, signal: ControlSignal) -> Option<ControlSignal> {
        self.last_sent_ms = Some(now_ms);
        self.last_sent = Some(signal);
        Some(signal)
    }
}
