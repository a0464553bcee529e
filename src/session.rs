//! The frame loop: input, one render pass, present, throttle.

use std::time::{Duration, Instant};

use crate::geom::Rect;
use crate::input::{Command, InputSource};
use crate::render::{DrawTarget, PresentSink, Renderer};
use crate::tileset::TileSource;
use crate::view::Camera;

/// Whether the loop should keep going after a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Run another frame
    Continue,
    /// A quit command arrived; stop before the next pass
    Quit,
}

/// Owns the camera and renderer and runs one frame at a time.
///
/// The camera is the only mutable state shared between the input step and
/// the render step; both happen on the calling thread.
pub struct Session<'a, S, T>
where
    S: TileSource,
    T: DrawTarget<Image = S::Image>,
{
    camera: Camera,
    renderer: Renderer<'a, S, T>,
    velocity: i32,
    pending: Vec<Command>,
}

impl<'a, S, T> Session<'a, S, T>
where
    S: TileSource,
    T: DrawTarget<Image = S::Image>,
{
    /// Creates a session. `velocity` is the pixel length of one move step.
    pub fn new(camera: Camera, renderer: Renderer<'a, S, T>, velocity: i32) -> Self {
        Session {
            camera,
            renderer,
            velocity,
            pending: Vec::new(),
        }
    }

    /// Current camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The renderer.
    pub fn renderer(&self) -> &Renderer<'a, S, T> {
        &self.renderer
    }

    /// The renderer, mutably.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, S, T> {
        &mut self.renderer
    }

    /// Applies one command to the camera.
    pub fn apply(&mut self, cmd: Command) -> FrameOutcome {
        match cmd {
            Command::Move(dir) => {
                self.camera.step(dir, self.velocity);
                FrameOutcome::Continue
            }
            Command::Quit => FrameOutcome::Quit,
        }
    }

    /// One frame without an overlay.
    pub fn frame<I, P>(&mut self, input: &mut I, sink: &mut P) -> FrameOutcome
    where
        I: InputSource,
        P: PresentSink,
    {
        self.frame_with(input, sink, |_, _| Vec::new())
    }

    /// One frame: drain input, render if needed, let `overlay` draw on top,
    /// present whatever changed.
    ///
    /// A quit command stops the frame before the render pass; commands after
    /// it in the same poll are dropped.
    pub fn frame_with<I, P, F>(&mut self, input: &mut I, sink: &mut P, overlay: F) -> FrameOutcome
    where
        I: InputSource,
        P: PresentSink,
        F: FnOnce(&mut T, &Camera) -> Vec<Rect>,
    {
        let mut pending = std::mem::take(&mut self.pending);
        pending.clear();
        input.poll(&mut pending);

        let mut outcome = FrameOutcome::Continue;
        for &cmd in &pending {
            if self.apply(cmd) == FrameOutcome::Quit {
                outcome = FrameOutcome::Quit;
                break;
            }
        }
        self.pending = pending;

        if outcome == FrameOutcome::Quit {
            tracing::info!("Quit requested at camera {:?}", self.camera.position());
            return outcome;
        }

        let mut regions = self.renderer.render(&mut self.camera);
        regions.extend(overlay(self.renderer.target_mut(), &self.camera));
        if !regions.is_empty() {
            sink.present(&regions);
        }
        FrameOutcome::Continue
    }
}

/// Sleeps away whatever is left of a fixed frame budget.
#[derive(Debug)]
pub struct Throttle {
    budget: Duration,
    last: Option<Instant>,
}

impl Throttle {
    /// Targets `fps` frames per second.
    pub fn new(fps: u32) -> Self {
        Throttle {
            budget: Duration::from_secs(1) / fps.max(1),
            last: None,
        }
    }

    /// Length of one frame.
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Time still to wait after a frame that took `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Blocks until the current frame has used its budget.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if let Some(last) = self.last {
            let rest = self.remaining(now - last);
            if !rest.is_zero() {
                std::thread::sleep(rest);
            }
        }
        self.last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn throttle_budget_for_120_fps() {
        let t = Throttle::new(120);
        assert_eq!(t.budget(), Duration::from_nanos(8_333_333));
        assert_eq!(t.remaining(Duration::from_millis(3)), Duration::from_nanos(5_333_333));
        assert_eq!(t.remaining(Duration::from_millis(20)), Duration::ZERO);
    }

    #[test]
    fn zero_fps_does_not_divide_by_zero() {
        assert_eq!(Throttle::new(0).budget(), Duration::from_secs(1));
    }
}
