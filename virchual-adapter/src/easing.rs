/// A CSS `<easing-function>`, sampled on the host side for headless playback.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CssEasing {
    Linear,
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl CssEasing {
    pub const EASE: Self = Self::bezier(0.25, 0.1, 0.25, 1.0);
    pub const EASE_IN: Self = Self::bezier(0.42, 0.0, 1.0, 1.0);
    pub const EASE_OUT: Self = Self::bezier(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: Self = Self::bezier(0.42, 0.0, 0.58, 1.0);

    const fn bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Parses a keyword (`ease-out`, ...) or a `cubic-bezier(x1, y1, x2, y2)` function.
    ///
    /// Returns `None` for anything else, including `steps()`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "linear" => Some(Self::Linear),
            "ease" => Some(Self::EASE),
            "ease-in" => Some(Self::EASE_IN),
            "ease-out" => Some(Self::EASE_OUT),
            "ease-in-out" => Some(Self::EASE_IN_OUT),
            other => {
                let args = other.strip_prefix("cubic-bezier(")?.strip_suffix(')')?;
                let mut values = args.split(',').map(|v| v.trim().parse::<f32>());
                let mut next = || values.next()?.ok();
                let (x1, y1, x2, y2) = (next()?, next()?, next()?, next()?);
                if values.next().is_some() || !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2)
                {
                    return None;
                }
                Some(Self::bezier(x1, y1, x2, y2))
            }
        }
    }

    /// Maps linear progress `t` (clamped to `[0, 1]`) to eased progress.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let u = solve_curve_x(t, x1, x2);
                curve(u, y1, y2)
            }
        }
    }
}

impl Default for CssEasing {
    fn default() -> Self {
        Self::EASE
    }
}

/// One axis of a cubic Bézier from (0, 0) to (1, 1).
fn curve(u: f32, p1: f32, p2: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    ((a * u + b) * u + c) * u
}

fn curve_slope(u: f32, p1: f32, p2: f32) -> f32 {
    let c = 3.0 * p1;
    let b = 3.0 * (p2 - p1) - c;
    let a = 1.0 - c - b;
    (3.0 * a * u + 2.0 * b) * u + c
}

/// Finds the curve parameter whose x equals `x`.
fn solve_curve_x(x: f32, x1: f32, x2: f32) -> f32 {
    const EPSILON: f32 = 1e-5;

    let mut u = x;
    for _ in 0..8 {
        let err = curve(u, x1, x2) - x;
        if err.abs() < EPSILON {
            return u;
        }
        let slope = curve_slope(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u -= err / slope;
    }

    // Newton stalled on a flat segment; x(u) is monotonic for x1, x2 in [0, 1].
    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    u = x;
    for _ in 0..32 {
        let cx = curve(u, x1, x2);
        if (cx - x).abs() < EPSILON {
            break;
        }
        if cx < x {
            lo = u;
        } else {
            hi = u;
        }
        u = (lo + hi) / 2.0;
    }
    u
}
