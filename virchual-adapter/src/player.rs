use virchual::{Virchual, VirchualOptions};

use crate::{TransitionDriver, TransitionSource, TransitionSpec};

/// Drives a [`Virchual`] over a host without a compositor.
///
/// The host records the transitions the engine starts; the player plays them on a
/// [`TransitionDriver`] and reports their ends back, so a carousel can run against
/// [`crate::MemoryHost`] with nothing but a clock.
///
/// Adapters drive it by calling `tick(now_ms)` each frame. Transitions started between two ticks
/// start at the later one, the way a browser starts them on the next frame.
#[derive(Debug)]
pub struct Player<H: TransitionSource> {
    v: Virchual<H>,
    driver: TransitionDriver<H::Node>,
}

impl<H: TransitionSource> Player<H> {
    pub fn new(host: H, options: VirchualOptions) -> Result<Self, virchual::Error> {
        Ok(Self::from_virchual(Virchual::new(host, options)?))
    }

    pub fn from_virchual(v: Virchual<H>) -> Self {
        Self {
            v,
            driver: TransitionDriver::new(),
        }
    }

    pub fn virchual(&self) -> &Virchual<H> {
        &self.v
    }

    pub fn virchual_mut(&mut self) -> &mut Virchual<H> {
        &mut self.v
    }

    pub fn into_virchual(self) -> Virchual<H> {
        self.v
    }

    pub fn driver(&self) -> &TransitionDriver<H::Node> {
        &self.driver
    }

    pub fn is_animating(&self) -> bool {
        !self.driver.is_empty() || self.v.is_busy()
    }

    pub fn mount(&mut self) {
        self.v.mount();
    }

    pub fn next(&mut self) -> bool {
        self.v.next()
    }

    pub fn prev(&mut self) -> bool {
        self.v.prev()
    }

    /// Advances the clock.
    ///
    /// Returns the nodes whose transition ended during this tick.
    pub fn tick(&mut self, now_ms: f64) -> Vec<H::Node> {
        self.adopt_started(now_ms);

        let ended = self.driver.poll(now_ms);
        if !ended.is_empty() {
            vtrace!(count = ended.len(), now_ms, "transitions ended");
        }
        for node in &ended {
            self.v.on_transition_end(node);
        }
        self.v.tick(now_ms);
        // Completing a move restyles slides.
        self.adopt_started(now_ms);
        ended
    }

    /// Runs until the engine is idle and no transition is in flight, stepping `frame_ms`.
    ///
    /// Returns the clock after the last tick. Gives up after `max_frames`.
    pub fn settle(&mut self, mut now_ms: f64, frame_ms: f64, max_frames: usize) -> f64 {
        for _ in 0..max_frames {
            if !self.is_animating() {
                break;
            }
            now_ms += frame_ms;
            self.tick(now_ms);
        }
        now_ms
    }

    fn adopt_started(&mut self, now_ms: f64) {
        let started = self.v.host_mut().take_started_transitions();
        for (node, value) in started {
            match TransitionSpec::parse(&value) {
                Some(spec) => self.driver.start(node, spec, now_ms),
                None => {
                    vwarn!(value = %value, "unparseable transition, ending it immediately");
                    self.driver.cancel(&node);
                    self.v.on_transition_end(&node);
                }
            }
        }
    }
}
