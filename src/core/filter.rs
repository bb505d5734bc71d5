//! OneEuro adaptive low-pass filter
//!
//! Removes detector jitter from a scalar coordinate stream while staying
//! responsive during fast motion: low cutoff at rest, higher cutoff as the
//! smoothed derivative grows. Two instances drive the x/y cursor axes.

use std::f64::consts::PI;

use crate::{FILTER_BETA, FILTER_D_CUTOFF, FILTER_MIN_CUTOFF};

/// First-order exponential low-pass
#[derive(Debug, Clone)]
struct LowPassFilter {
    last: f64,
}

impl LowPassFilter {
    fn new(initial: f64) -> Self {
        Self { last: initial }
    }

    fn filter(&mut self, value: f64, alpha: f64) -> f64 {
        self.last = alpha * value + (1.0 - alpha) * self.last;
        self.last
    }

    fn last_value(&self) -> f64 {
        self.last
    }
}

/// Smoothing state carried between samples
#[derive(Debug, Clone)]
struct FilterState {
    value: LowPassFilter,
    derivative: LowPassFilter,
    last_t: f64,
}

/// Adaptive one-euro filter over a timestamped scalar signal
#[derive(Debug, Clone)]
pub struct OneEuroFilter {
    min_cutoff: f64,
    beta: f64,
    d_cutoff: f64,
    state: Option<FilterState>,
}

impl OneEuroFilter {
    /// Filter with explicit tuning. Low `min_cutoff`/`beta` favor stability
    /// over latency.
    pub fn new(min_cutoff: f64, beta: f64) -> Self {
        Self {
            min_cutoff,
            beta,
            d_cutoff: FILTER_D_CUTOFF,
            state: None,
        }
    }

    /// Smoothing coefficient for a cutoff frequency over an elapsed interval
    fn alpha(cutoff: f64, dt: f64) -> f64 {
        if dt <= 0.0 {
            return 1.0;
        }
        let tau = 1.0 / (2.0 * PI * cutoff);
        1.0 / (1.0 + tau / dt)
    }

    /// Smooth one sample taken at time `t` (seconds).
    ///
    /// The first sample initializes the filter and passes through unchanged.
    /// A non-advancing timestamp returns the previous smoothed value without
    /// touching state.
    pub fn filter(&mut self, value: f64, t: f64) -> f64 {
        let state = match &mut self.state {
            None => {
                self.state = Some(FilterState {
                    value: LowPassFilter::new(value),
                    derivative: LowPassFilter::new(0.0),
                    last_t: t,
                });
                return value;
            }
            Some(state) => state,
        };

        let dt = t - state.last_t;
        if dt <= 0.0 {
            return state.value.last_value();
        }
        state.last_t = t;

        let raw_derivative = (value - state.value.last_value()) / dt;
        let ad = Self::alpha(self.d_cutoff, dt);
        let dx = state.derivative.filter(raw_derivative, ad);

        let cutoff = self.min_cutoff + self.beta * dx.abs();
        let a = Self::alpha(cutoff, dt);
        state.value.filter(value, a)
    }

    /// Drop smoothing history; the next sample passes through unchanged
    pub fn reset(&mut self) {
        self.state = None;
    }
}

impl Default for OneEuroFilter {
    fn default() -> Self {
        Self::new(FILTER_MIN_CUTOFF, FILTER_BETA)
    }
}
