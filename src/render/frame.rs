//! The frame loop.
//!
//! The loop only talks to the window and GPU through the [`Surface`], [`Program`] and
//! [`Drawable`] traits, which [`App`], [`ShaderProgram`] and [`Mesh`] implement.

use crate::abs::{App, Mesh, ShaderProgram};

/// The window side of a frame: close flag, clearing, events and presentation.
pub trait Surface {
    /// Whether the window has been asked to close.
    fn should_close(&self) -> bool;

    /// Clears the color and depth buffers.
    fn clear(&self);

    /// Processes pending window events.
    fn poll_events(&mut self);

    /// Presents the rendered frame.
    fn swap_buffers(&self);
}

/// A linked program that is bound before drawing.
pub trait Program {
    fn bind(&self);
}

/// Something that issues one draw call.
pub trait Drawable {
    fn draw(&self);
}

impl Surface for App {
    fn should_close(&self) -> bool {
        App::should_close(self)
    }

    fn clear(&self) {
        App::clear(self);
    }

    fn poll_events(&mut self) {
        App::poll_events(self);
    }

    fn swap_buffers(&self) {
        App::swap_buffers(self);
    }
}

impl Program for ShaderProgram {
    fn bind(&self) {
        self.use_program();
    }
}

impl Drawable for Mesh {
    fn draw(&self) {
        Mesh::draw(self);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Closed,
}

/// Owns the program and the meshes for as long as frames are being drawn.
pub struct FrameLoop<P, D> {
    program: P,
    meshes: Vec<D>,
    state: LoopState,
    frames: u64,
}

impl<P: Program, D: Drawable> FrameLoop<P, D> {
    /// Creates a running loop. Meshes are drawn in the order given.
    pub fn new(program: P, meshes: Vec<D>) -> Self {
        Self {
            program,
            meshes,
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs one iteration.
    ///
    /// The close flag is checked before anything is drawn; once it has been seen the loop is
    /// `Closed` for good and further calls do nothing.
    pub fn step<S: Surface>(&mut self, surface: &mut S) -> LoopState {
        if self.state == LoopState::Closed {
            return LoopState::Closed;
        }

        if surface.should_close() {
            log::info!("window closed after {} frames", self.frames);
            self.state = LoopState::Closed;
            return LoopState::Closed;
        }

        surface.clear();
        self.program.bind();
        for mesh in &self.meshes {
            mesh.draw();
        }

        surface.poll_events();
        surface.swap_buffers();
        self.frames += 1;

        LoopState::Running
    }

    /// Steps until the window closes, then releases the program and meshes. Returns the number
    /// of frames drawn.
    pub fn run<S: Surface>(mut self, surface: &mut S) -> u64 {
        while self.step(surface) == LoopState::Running {}
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Call {
        Clear,
        Bind,
        Draw(usize),
        Poll,
        Swap,
    }

    type Log = Rc<RefCell<Vec<Call>>>;

    /// Raises its close flag during the `close_after`-th poll.
    struct FakeSurface {
        log: Log,
        polls: usize,
        close_after: usize,
        closed: bool,
    }

    impl FakeSurface {
        fn new(log: &Log, close_after: usize) -> Self {
            Self {
                log: Rc::clone(log),
                polls: 0,
                close_after,
                closed: close_after == 0,
            }
        }
    }

    impl Surface for FakeSurface {
        fn should_close(&self) -> bool {
            self.closed
        }

        fn clear(&self) {
            self.log.borrow_mut().push(Call::Clear);
        }

        fn poll_events(&mut self) {
            self.log.borrow_mut().push(Call::Poll);
            self.polls += 1;
            if self.polls >= self.close_after {
                self.closed = true;
            }
        }

        fn swap_buffers(&self) {
            self.log.borrow_mut().push(Call::Swap);
        }
    }

    struct FakeProgram(Log);

    impl Program for FakeProgram {
        fn bind(&self) {
            self.0.borrow_mut().push(Call::Bind);
        }
    }

    struct FakeMesh(Log, usize);

    impl Drawable for FakeMesh {
        fn draw(&self) {
            self.0.borrow_mut().push(Call::Draw(self.1));
        }
    }

    fn frame_loop(log: &Log) -> FrameLoop<FakeProgram, FakeMesh> {
        FrameLoop::new(
            FakeProgram(Rc::clone(log)),
            vec![FakeMesh(Rc::clone(log), 0), FakeMesh(Rc::clone(log), 1)],
        )
    }

    #[test]
    fn test_frame_order() {
        let log = Log::default();
        let mut surface = FakeSurface::new(&log, 1);

        let frames = frame_loop(&log).run(&mut surface);

        assert_eq!(frames, 1);
        assert_eq!(
            *log.borrow(),
            vec![
                Call::Clear,
                Call::Bind,
                Call::Draw(0),
                Call::Draw(1),
                Call::Poll,
                Call::Swap
            ]
        );
    }

    #[test]
    fn test_one_draw_per_mesh_per_frame() {
        let log = Log::default();
        let mut surface = FakeSurface::new(&log, 3);

        let frames = frame_loop(&log).run(&mut surface);
        assert_eq!(frames, 3);

        let draws: Vec<usize> = log
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Draw(index) => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(draws, vec![0, 1, 0, 1, 0, 1]);
    }

    #[test]
    fn test_closed_before_first_frame() {
        let log = Log::default();
        let mut surface = FakeSurface::new(&log, 0);

        let frames = frame_loop(&log).run(&mut surface);

        assert_eq!(frames, 0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_no_draws_after_close() {
        let log = Log::default();
        let mut surface = FakeSurface::new(&log, 2);
        let mut running = frame_loop(&log);

        assert_eq!(running.step(&mut surface), LoopState::Running);
        assert_eq!(running.step(&mut surface), LoopState::Running);
        assert!(surface.should_close());

        let calls_at_close = log.borrow().len();
        assert_eq!(running.step(&mut surface), LoopState::Closed);
        assert_eq!(running.step(&mut surface), LoopState::Closed);

        assert_eq!(running.state(), LoopState::Closed);
        assert_eq!(running.frames(), 2);
        assert_eq!(log.borrow().len(), calls_at_close);
        assert_eq!(log.borrow().last(), Some(&Call::Swap));
    }
}
