use virchual::Host;

use crate::CssEasing;

/// A parsed single-property CSS `transition` shorthand, e.g. `transform 200ms ease-out`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionSpec {
    pub property: String,
    pub duration_ms: f64,
    pub easing: CssEasing,
}

impl TransitionSpec {
    /// Parses `<property> <duration> [<easing>]`. Durations take `ms` or `s`.
    ///
    /// Returns `None` for an empty value (no transition) or anything unparseable.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let (property, rest) = value.split_once(char::is_whitespace)?;
        let rest = rest.trim_start();
        let (duration, easing) = rest
            .split_once(char::is_whitespace)
            .unwrap_or((rest, ""));
        let duration_ms = parse_duration_ms(duration)?;
        let easing = match easing.trim() {
            "" => CssEasing::default(),
            easing => CssEasing::parse(easing)?,
        };
        Some(Self {
            property: property.to_string(),
            duration_ms,
            easing,
        })
    }
}

fn parse_duration_ms(s: &str) -> Option<f64> {
    let ms = if let Some(v) = s.strip_suffix("ms") {
        v.parse::<f64>().ok()?
    } else {
        s.strip_suffix('s')?.parse::<f64>().ok()? * 1000.0
    };
    (ms.is_finite() && ms >= 0.0).then_some(ms)
}

/// A host that reports the transitions it has been asked to start.
///
/// Headless hosts have no compositor to fire `transitionend`; [`crate::Player`] drains these
/// and plays them on a [`TransitionDriver`].
pub trait TransitionSource: Host {
    /// Drains `(node, transition value)` pairs recorded since the last call.
    fn take_started_transitions(&mut self) -> Vec<(Self::Node, String)>;
}

/// A transition in flight on one node.
#[derive(Clone, Debug, PartialEq)]
pub struct Running<N> {
    pub node: N,
    pub spec: TransitionSpec,
    pub start_ms: f64,
}

impl<N> Running<N> {
    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.spec.duration_ms
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.spec.duration_ms <= 0.0 {
            return 1.0;
        }
        let t = ((now_ms - self.start_ms) / self.spec.duration_ms).clamp(0.0, 1.0);
        self.spec.easing.sample(t as f32)
    }
}

/// Clock-driven stand-in for a browser's transition engine.
///
/// Starting a transition on a node that already runs one replaces it, like re-assigning the
/// `transition` style does.
#[derive(Clone, Debug)]
pub struct TransitionDriver<N> {
    running: Vec<Running<N>>,
}

impl<N> Default for TransitionDriver<N> {
    fn default() -> Self {
        Self {
            running: Vec::new(),
        }
    }
}

impl<N: Clone + PartialEq> TransitionDriver<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self, node: N, spec: TransitionSpec, now_ms: f64) {
        self.running.retain(|r| r.node != node);
        self.running.push(Running {
            node,
            spec,
            start_ms: now_ms,
        });
    }

    pub fn cancel(&mut self, node: &N) -> bool {
        let before = self.running.len();
        self.running.retain(|r| &r.node != node);
        self.running.len() != before
    }

    pub fn is_running(&self, node: &N) -> bool {
        self.running.iter().any(|r| &r.node == node)
    }

    pub fn running(&self) -> &[Running<N>] {
        &self.running
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    pub fn progress(&self, node: &N, now_ms: f64) -> Option<f32> {
        self.running
            .iter()
            .find(|r| &r.node == node)
            .map(|r| r.progress(now_ms))
    }

    /// Removes and returns the nodes whose transition has ended, in start order.
    pub fn poll(&mut self, now_ms: f64) -> Vec<N> {
        let mut ended = Vec::new();
        self.running.retain(|r| {
            let done = r.is_done(now_ms);
            if done {
                ended.push(r.node.clone());
            }
            !done
        });
        ended
    }
}
