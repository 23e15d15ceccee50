//! SDL2 and OpenGL application management.
//!
//! This module defines the [`App`] struct which encapsulates the SDL2 window and the OpenGL
//! context it owns, along with the [`WindowConfig`] used to request them.

use std::{fmt, sync::Arc};

use glow::HasContext;

use crate::error::Error;

/// An OpenGL `major.minor` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlVersion {
    pub major: u8,
    pub minor: u8,
}

impl GlVersion {
    pub const fn new(major: u8, minor: u8) -> Self {
        Self { major, minor }
    }

    /// Reads the leading `major.minor` of a `GL_VERSION` string such as `"4.1 Metal - 83.1"` or
    /// `"4.6.0 NVIDIA 535.104.05"`. OpenGL ES strings are rejected.
    pub fn parse(version: &str) -> Option<Self> {
        let version = version.trim();
        if version.starts_with("OpenGL ES") {
            return None;
        }

        let number = version.split_whitespace().next()?;
        let mut parts = number.split('.');
        let major = parts.next()?.parse().ok()?;
        let minor = parts.next()?.parse().ok()?;
        Some(Self { major, minor })
    }
}

impl fmt::Display for GlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Everything needed to open the window and request its context.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub version: GlVersion,
    pub forward_compatible: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "OpenGL Triangles".to_string(),
            width: 500,
            height: 500,
            version: GlVersion::new(4, 1),
            forward_compatible: true,
        }
    }
}

/// The [`App`] struct encapsulates the SDL2 and OpenGL context.
///
/// The context is current on the thread that created the [`App`]; the SDL2 handles are neither
/// `Send` nor `Sync`, so it can't leave that thread.
pub struct App {
    pub gl: Arc<glow::Context>,
    pub gl_context: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    pub event_pump: sdl2::EventPump,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl: sdl2::Sdl,
    should_close: bool,
}

impl App {
    /// Opens a fixed-size window and makes a core profile context of the requested version
    /// current on this thread.
    ///
    /// Fails if the driver hands back anything older than requested or a non-core context.
    pub fn new(config: &WindowConfig) -> Result<Self, Error> {
        let sdl = sdl2::init().map_err(Error::Init)?;
        let video_subsystem = sdl.video().map_err(Error::Init)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(sdl2::video::GLProfile::Core);
        gl_attr.set_context_version(config.version.major, config.version.minor);
        if config.forward_compatible {
            gl_attr.set_context_flags().forward_compatible().set();
        }

        let window = video_subsystem
            .window(&config.title, config.width, config.height)
            .opengl()
            .position_centered()
            .build()?;
        let gl_context = window.gl_create_context().map_err(Error::Context)?;
        window.gl_make_current(&gl_context).map_err(Error::Context)?;

        let gl = unsafe {
            glow::Context::from_loader_function(|s| {
                video_subsystem.gl_get_proc_address(s) as *const _
            })
        };
        check_context(&gl, config.version)?;

        let event_pump = sdl.event_pump().map_err(Error::Init)?;

        Ok(Self {
            gl: Arc::new(gl),
            gl_context,
            window,
            event_pump,
            video_subsystem,
            sdl,
            should_close: false,
        })
    }

    /// Whether the user has asked for the window to close.
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Drains pending window events, raising the close flag on a quit or close request.
    pub fn poll_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            match event {
                sdl2::event::Event::Quit { .. }
                | sdl2::event::Event::Window {
                    win_event: sdl2::event::WindowEvent::Close,
                    ..
                } => {
                    log::debug!("close requested");
                    self.should_close = true;
                }
                _ => {}
            }
        }
    }

    /// Clears the color and depth buffers.
    pub fn clear(&self) {
        unsafe {
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    pub fn swap_buffers(&self) {
        self.window.gl_swap_window();
    }
}

/// Logs what the driver gave us and rejects anything below `required` or outside the core profile.
fn check_context(gl: &glow::Context, required: GlVersion) -> Result<(), Error> {
    let (version, glsl, profile_mask) = unsafe {
        (
            gl.get_parameter_string(glow::VERSION),
            gl.get_parameter_string(glow::SHADING_LANGUAGE_VERSION),
            gl.get_parameter_i32(glow::CONTEXT_PROFILE_MASK),
        )
    };
    log::info!("OpenGL version {version}, GLSL {glsl}");

    verify_context(&version, profile_mask, required)
}

/// Accepts a `GL_VERSION` string and `GL_CONTEXT_PROFILE_MASK` only if they describe a desktop
/// core context of at least `required`.
fn verify_context(version: &str, profile_mask: i32, required: GlVersion) -> Result<(), Error> {
    match GlVersion::parse(version) {
        Some(found) if found >= required => {}
        _ => {
            return Err(Error::UnsupportedVersion {
                required,
                found: version.to_string(),
            });
        }
    }

    if (profile_mask as u32) & glow::CONTEXT_CORE_PROFILE_BIT == 0 {
        return Err(Error::NotCoreProfile);
    }

    Ok(())
}
