//! Lifecycle controller: owns the session and runs the frame loop.

use lumen_core::{AnimationKind, AnimationSettings, Bounds, CompositeMode, Surface};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, trace, warn};

use crate::scheduler::{FrameHandle, FrameScheduler, ManualScheduler};
use crate::session::{Session, StepOutcome};

/// Whether a frame loop is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running(AnimationKind),
}

/// Starts, switches and ticks animations.
///
/// At most one session is live. While it is, exactly one frame is pending
/// with the scheduler; ticks never overlap because the next frame is only
/// requested at the end of the current one.
#[derive(Debug)]
pub struct Controller<S> {
    scheduler: S,
    pending: Option<FrameHandle>,
    session: Option<Session>,
    bounds: Bounds,
    settings: AnimationSettings,
    rng: SmallRng,
}

impl<S: FrameScheduler> Controller<S> {
    /// Create an idle controller. A `seed` makes every run identical.
    pub fn new(scheduler: S, settings: AnimationSettings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            scheduler,
            pending: None,
            session: None,
            bounds: Bounds::default(),
            settings,
            rng,
        }
    }

    pub fn state(&self) -> LoopState {
        match &self.session {
            Some(session) => LoopState::Running(session.kind()),
            None => LoopState::Idle,
        }
    }

    /// Kind of the live session, if any.
    pub fn kind(&self) -> Option<AnimationKind> {
        self.session.as_ref().map(Session::kind)
    }

    /// Number of live entities; zero when idle.
    pub fn population(&self) -> usize {
        self.session.as_ref().map_or(0, Session::len)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Replace whatever is running with a fresh session of `kind`.
    pub fn start<T: Surface + ?Sized>(&mut self, kind: AnimationKind, surface: &mut T) {
        surface.set_composite(CompositeMode::SourceOver);
        self.bounds = surface.bounds();

        let session = Session::start(kind, surface, &self.settings, &mut self.rng);
        debug!(
            kind = %kind,
            population = session.len(),
            width = self.bounds.width,
            height = self.bounds.height,
            "starting animation"
        );
        self.session = Some(session);

        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.pending = Some(self.scheduler.request_frame());
    }

    /// Start the kind named by `tag`. Unknown tags are ignored.
    pub fn start_named<T: Surface + ?Sized>(&mut self, tag: &str, surface: &mut T) {
        match tag.parse::<AnimationKind>() {
            Ok(kind) => self.start(kind, surface),
            Err(err) => warn!(%err, "ignoring start request"),
        }
    }

    /// Start a randomly chosen kind, unless a firework is still exploding.
    ///
    /// The choice is uniform over all kinds and may repeat the current one.
    pub fn generate<T: Surface + ?Sized>(&mut self, surface: &mut T) {
        if let Some(session) = &self.session {
            if session.kind() == AnimationKind::Fireworks && !session.is_empty() {
                debug!("fireworks still exploding, ignoring generate");
                return;
            }
        }
        let kind = AnimationKind::ALL[self.rng.gen_range(0..AnimationKind::ALL.len())];
        self.start(kind, surface);
    }

    /// Pick up new surface dimensions. A running animation restarts from
    /// scratch at the new size.
    pub fn resize<T: Surface + ?Sized>(&mut self, surface: &mut T) {
        self.bounds = surface.bounds();
        debug!(
            width = self.bounds.width,
            height = self.bounds.height,
            "surface resized"
        );
        if let Some(kind) = self.kind() {
            self.start(kind, surface);
        }
    }

    /// Run the tick for `handle`. Frames that are no longer pending are
    /// ignored.
    pub fn on_frame<T: Surface + ?Sized>(&mut self, handle: FrameHandle, surface: &mut T) {
        if self.pending != Some(handle) {
            trace!(frame = handle.id(), "ignoring stale frame");
            return;
        }
        self.pending = None;
        self.scheduler.frame_fired(handle);

        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.step(surface, self.bounds, &self.settings, &mut self.rng) {
            StepOutcome::Continue => {
                self.pending = Some(self.scheduler.request_frame());
            }
            StepOutcome::Finished => {
                debug!(kind = %session.kind(), "animation finished");
                self.session = None;
            }
        }
    }
}

impl Controller<ManualScheduler> {
    /// Run the pending frame, if any. Returns whether a tick ran.
    pub fn run_pending<T: Surface + ?Sized>(&mut self, surface: &mut T) -> bool {
        match self.scheduler.take_pending() {
            Some(handle) => {
                self.on_frame(handle, surface);
                true
            }
            None => false,
        }
    }
}
