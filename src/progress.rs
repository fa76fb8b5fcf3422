use crate::config::{SpringConfig, MAX_FRAME_DELTA_MS, SPRING_STEP_MS};

/// Fraction of the scrollable range already scrolled, clamped to `[0, 1]`.
///
/// Pages shorter than the viewport have nothing to scroll and report 0.
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range.is_nan() || range <= 0.0 || scroll_y.is_nan() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Damped spring used to animate the progress bar towards the latest scroll
/// fraction. Only ever drives presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Moves the target. Returns `true` if the spring now needs stepping.
    pub fn set_target(&mut self, target: f64) -> bool {
        self.target = target;
        !self.is_at_rest()
    }

    pub fn is_at_rest(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Advances the simulation by `delta_ms` and returns the new value.
    pub fn step(&mut self, delta_ms: f64) -> f64 {
        if self.is_at_rest() {
            return self.value;
        }
        let delta_ms = delta_ms.clamp(0.0, MAX_FRAME_DELTA_MS);
        let steps = (delta_ms / SPRING_STEP_MS).ceil() as usize;
        let h = delta_ms / steps.max(1) as f64 / 1000.0;

        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.config;

        for _ in 0..steps {
            let displacement = self.value - self.target;
            let accel = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += accel * h;
            self.value += self.velocity * h;

            if (self.value - self.target).abs() < rest_delta && self.velocity.abs() < rest_speed {
                self.value = self.target;
                self.velocity = 0.0;
                break;
            }
        }
        self.value
    }
}
