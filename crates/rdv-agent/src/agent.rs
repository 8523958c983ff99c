//! Per-agent leg state and the planning transition.

use rdv_core::AgentRng;
use rdv_field::Body;

/// Travel speed along the line.  Every leg runs at exactly this speed.
pub const SPEED: f64 = 1.0;

/// A leg counts as finished once `elapsed` is this close to `leg_duration`.
pub const LEG_COMPLETE_EPS: f64 = 1e-9;

/// One random-walk searcher on the line.
///
/// The agent is always mid-leg: construction plans the first leg, and the
/// driver calls [`plan_leg`][Self::plan_leg] again whenever
/// [`leg_complete`][Self::leg_complete] reports `true`.
///
/// Targets are anchored to the fixed `origin`, while leg duration and
/// velocity are measured from the current `position`.  Successive legs may
/// therefore pass back through the origin.
#[derive(Clone, Debug)]
pub struct Agent {
    origin:        f64,
    position:      f64,
    /// Number of legs planned so far.
    cycle:         u32,
    target:        f64,
    leg_duration:  f64,
    velocity:      f64,
    /// Time spent on the current leg, in `[0, leg_duration]`.
    elapsed:       f64,
    search_radius: f64,
}

impl Agent {
    /// Place an agent at `start` (which becomes its origin) and plan its
    /// first leg.
    pub fn new(start: f64, rng: &mut AgentRng) -> Self {
        let mut agent = Self {
            origin:        start,
            position:      start,
            cycle:         0,
            target:        start,
            leg_duration:  0.0,
            velocity:      0.0,
            elapsed:       0.0,
            search_radius: 0.0,
        };
        agent.plan_leg(rng);
        agent
    }

    /// Begin the next leg.
    ///
    /// The radius uses the cycle count *before* it is incremented, so the
    /// first leg has radius 1, the second 2, then 4, and so on.
    pub fn plan_leg(&mut self, rng: &mut AgentRng) {
        self.search_radius = 2f64.powi(self.cycle as i32);
        let direction = rng.direction();
        self.target = self.origin + direction * self.search_radius;

        let offset = self.target - self.position;
        self.leg_duration = offset.abs() / SPEED;
        self.velocity = offset / self.leg_duration;
        self.elapsed = 0.0;
        self.cycle += 1;
    }

    /// Move along the current leg for `dt` time units.
    ///
    /// The driver never advances past the end of a leg; `dt` is at most
    /// [`remaining`][Self::remaining].
    #[inline]
    pub fn advance(&mut self, dt: f64) {
        self.position += self.velocity * dt;
        self.elapsed += dt;
    }

    /// Time left on the current leg.
    #[inline]
    pub fn remaining(&self) -> f64 {
        self.leg_duration - self.elapsed
    }

    #[inline]
    pub fn leg_complete(&self) -> bool {
        (self.leg_duration - self.elapsed).abs() < LEG_COMPLETE_EPS
    }

    /// Read-only snapshot for the interaction solver.
    #[inline]
    pub fn body(&self) -> Body {
        Body::new(self.position, self.velocity, self.cycle)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline] pub fn origin(&self)        -> f64 { self.origin }
    #[inline] pub fn position(&self)      -> f64 { self.position }
    #[inline] pub fn cycle(&self)         -> u32 { self.cycle }
    #[inline] pub fn target(&self)        -> f64 { self.target }
    #[inline] pub fn leg_duration(&self)  -> f64 { self.leg_duration }
    #[inline] pub fn velocity(&self)      -> f64 { self.velocity }
    #[inline] pub fn elapsed(&self)       -> f64 { self.elapsed }
    #[inline] pub fn search_radius(&self) -> f64 { self.search_radius }
}
