//! Orbiting icons around the hero illustration.
//!
//! The server renders each [`Orbit`] at its starting angle together with the
//! signed angular velocity and the animation phase; `site.js` integrates the
//! motion from there and handles pointer drags.

/// Static description of one orbit ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSpec {
    /// Ring radius in CSS pixels.
    pub radius: f64,
    /// Seconds per full revolution.
    pub period_secs: f64,
    /// Starting angle in degrees.
    pub initial_angle: f64,
    /// Counter-clockwise when true.
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    spec: OrbitSpec,
    /// Degrees, normalised to `[0, 360)`.
    angle: f64,
}

impl Orbit {
    pub fn new(spec: OrbitSpec) -> Self {
        Self {
            spec,
            angle: normalize_degrees(spec.initial_angle),
        }
    }

    pub fn spec(&self) -> &OrbitSpec {
        &self.spec
    }

    /// Signed angular velocity in degrees per second.
    pub fn angular_velocity(&self) -> f64 {
        if self.spec.period_secs <= 0.0 {
            return 0.0;
        }
        let speed = 360.0 / self.spec.period_secs;
        if self.spec.reverse {
            -speed
        } else {
            speed
        }
    }

    /// Icon offset from the orbit centre, `(r cos θ, r sin θ)`.
    pub fn position(&self) -> (f64, f64) {
        let radians = self.angle.to_radians();
        (
            self.spec.radius * radians.cos(),
            self.spec.radius * radians.sin(),
        )
    }

    /// Negative `animation-delay` that starts a linear spin at the current
    /// angle. Multiplying by the negated velocity recovers the angle.
    pub fn animation_phase_secs(&self) -> f64 {
        if self.spec.period_secs <= 0.0 {
            return 0.0;
        }
        let fraction = if self.spec.reverse {
            (360.0 - self.angle) % 360.0 / 360.0
        } else {
            self.angle / 360.0
        };
        -(fraction * self.spec.period_secs)
    }
}

fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}
