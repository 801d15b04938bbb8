use std::fmt;
use std::num::NonZeroU32;
use std::time::Instant;

use color_eyre::eyre::{Report, Result, eyre};
use glium::glutin::config::{Config as GlConfigHandle, ConfigTemplateBuilder};
use glium::glutin::display::GetGlDisplay;
use glium::glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile};
use glium::glutin::prelude::*;
use glium::glutin::surface::{SurfaceAttributesBuilder, WindowSurface};
use glium::{Api, Display, Surface, Version};
use glutin_winit::DisplayBuilder;
use log::{debug, error, info};
use raw_window_handle::HasWindowHandle;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::KeyCode;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::application::Application;
use crate::colors::{self, ColorExt};
use crate::config::Config;
use crate::input::Input;

/// Every lesson's shaders are written against `#version 330 core`.
pub const REQUIRED_OPENGL: GlRequirement = GlRequirement { major: 3, minor: 3 };

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GlRequirement {
    pub major: u8,
    pub minor: u8,
}

impl GlRequirement {
    pub fn satisfied_by(&self, version: &Version) -> bool {
        let Version(api, major, minor) = *version;

        api == Api::Gl && (major, minor) >= (self.major, self.minor)
    }

    /// The context version and profile to ask the driver for.
    pub fn context_api(&self) -> (ContextApi, GlProfile) {
        let version = glium::glutin::context::Version::new(self.major, self.minor);

        (ContextApi::OpenGl(Some(version)), GlProfile::Core)
    }

    pub fn check(&self, version: &Version) -> Result<(), ContextError> {
        if self.satisfied_by(version) {
            Ok(())
        } else {
            Err(ContextError::UnsupportedVersion {
                required: *self,
                found: *version,
            })
        }
    }
}

#[derive(Debug)]
pub enum ContextError {
    NoWindow,
    ZeroSizedWindow(PhysicalSize<u32>),
    UnsupportedVersion {
        required: GlRequirement,
        found: Version,
    },
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "The window could not be created"),
            Self::ZeroSizedWindow(size) => write!(
                f,
                "The window has a zero sized surface ({}x{})",
                size.width, size.height
            ),
            Self::UnsupportedVersion { required, found } => write!(
                f,
                "OpenGL {}.{} is required but the context provides {:?} {}.{}",
                required.major, required.minor, found.0, found.1, found.2
            ),
        }
    }
}

impl std::error::Error for ContextError {}

fn surface_size(size: PhysicalSize<u32>) -> Result<(NonZeroU32, NonZeroU32), ContextError> {
    match (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) {
        (Some(width), Some(height)) => Ok((width, height)),
        _ => Err(ContextError::ZeroSizedWindow(size)),
    }
}

fn pick_config(configs: Box<dyn Iterator<Item = GlConfigHandle> + '_>) -> GlConfigHandle {
    configs
        .reduce(|accum, config| {
            if config.num_samples() > accum.num_samples() {
                config
            } else {
                accum
            }
        })
        // glutin reports an error instead of calling the picker when nothing matches
        .expect("glutin offered no OpenGL configs")
}

/// Creates the window and a current OpenGL context of `requirement`'s version, core profile.
pub fn build_display(
    event_loop: &ActiveEventLoop,
    window_attributes: WindowAttributes,
    requirement: GlRequirement,
) -> Result<(Window, Display<WindowSurface>)> {
    let (window, gl_config) = DisplayBuilder::new()
        .with_window_attributes(Some(window_attributes))
        .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
        .map_err(|error| eyre!("Failed to create the window: {}", error))?;

    let window = window.ok_or(ContextError::NoWindow)?;
    let raw_window_handle = window.window_handle()?.as_raw();

    let (context_api, profile) = requirement.context_api();
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(context_api)
        .with_profile(profile)
        .build(Some(raw_window_handle));

    let gl_display = gl_config.display();
    let not_current_context =
        unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

    let (width, height) = surface_size(window.inner_size())?;
    let surface_attributes =
        SurfaceAttributesBuilder::<WindowSurface>::new().build(raw_window_handle, width, height);
    let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes)? };

    let context = not_current_context.make_current(&surface)?;
    let display = Display::from_context_surface(context, surface)?;

    Ok((window, display))
}

/// Drives a lesson from winit's event loop.
pub struct OpenGLContext<A: Application> {
    // Declared first so the lesson's GPU objects go before the display
    application: Option<A>,
    display: Option<Display<WindowSurface>>,
    window: Option<Window>,
    config: Config,
    input: Input,
    started: Instant,
    error: Option<Report>,
}

impl<A: Application> OpenGLContext<A> {
    pub fn new(config: Config) -> Self {
        Self {
            application: None,
            display: None,
            window: None,
            config,
            input: Input::new(),
            started: Instant::now(),
            error: None,
        }
    }

    /// The error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<Report> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, report: Report) {
        error!("{}", report);

        if self.error.is_none() {
            self.error = Some(report);
        }

        event_loop.exit();
    }

    fn create(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let (window, display) = build_display(
            event_loop,
            self.config.window_attributes(A::TITLE),
            REQUIRED_OPENGL,
        )?;

        info!("OpenGL vendor: {}", display.get_opengl_vendor_string());
        info!("OpenGL renderer: {}", display.get_opengl_renderer_string());
        info!("OpenGL version: {}", display.get_opengl_version_string());
        debug!("OpenGL profile: {:?}", display.get_opengl_profile());

        REQUIRED_OPENGL.check(display.get_opengl_version())?;

        let application = A::new(&window, &display, &self.config)?;

        self.window = Some(window);
        self.display = Some(display);
        self.application = Some(application);
        self.started = Instant::now();

        Ok(())
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        if self.input.key_down(KeyCode::Escape) {
            info!("Escape key pressed!");
            event_loop.exit();
            return Ok(());
        }

        let (Some(display), Some(application)) = (self.display.as_ref(), self.application.as_mut())
        else {
            return Ok(());
        };

        application.update(&self.input, self.started.elapsed());

        let mut frame = display.draw();
        let (red, green, blue, alpha) = colors::BACKGROUND.to_rgba_components_tuple();
        frame.clear_color(red, green, blue, alpha);

        let rendered = application.render(&mut frame);
        // A frame has to be finished even when drawing failed
        frame.finish()?;
        rendered?;

        self.input.reset_internal_state();

        Ok(())
    }
}

impl<A: Application> ApplicationHandler for OpenGLContext<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(report) = self.create(event_loop) {
            self.fail(event_loop, report);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(Window::id) != Some(window_id) {
            return;
        }

        self.input.process_window_event(&event);

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(display) = self.display.as_ref() {
                    display.resize((new_size.width, new_size.height));
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(report) = self.redraw(event_loop) {
                    self.fail(event_loop, report);
                }
            }
            _ => (),
        };
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        info!("Releasing GPU objects");

        self.application = None;
        self.display = None;
        self.window = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_required_and_newer_desktop_versions() {
        assert!(REQUIRED_OPENGL.satisfied_by(&Version(Api::Gl, 3, 3)));
        assert!(REQUIRED_OPENGL.satisfied_by(&Version(Api::Gl, 4, 1)));
        assert!(REQUIRED_OPENGL.satisfied_by(&Version(Api::Gl, 4, 0)));
    }

    #[test]
    fn rejects_older_versions() {
        assert!(!REQUIRED_OPENGL.satisfied_by(&Version(Api::Gl, 3, 2)));
        assert!(!REQUIRED_OPENGL.satisfied_by(&Version(Api::Gl, 2, 1)));
    }

    #[test]
    fn rejects_embedded_profiles() {
        assert!(!REQUIRED_OPENGL.satisfied_by(&Version(Api::GlEs, 3, 3)));
    }

    #[test]
    fn requests_core_profile_of_required_version() {
        let (context_api, profile) = REQUIRED_OPENGL.context_api();

        assert_eq!(
            context_api,
            ContextApi::OpenGl(Some(glium::glutin::context::Version::new(3, 3)))
        );
        assert_eq!(profile, GlProfile::Core);
    }

    #[test]
    fn surface_size_accepts_visible_window() {
        let (width, height) = surface_size(PhysicalSize::new(800, 600)).unwrap();

        assert_eq!((width.get(), height.get()), (800, 600));
    }

    #[test]
    fn surface_size_rejects_zero_dimensions() {
        for size in [PhysicalSize::new(0, 600), PhysicalSize::new(800, 0)] {
            let error = surface_size(size).unwrap_err();

            assert!(matches!(error, ContextError::ZeroSizedWindow(found) if found == size));
        }
    }

    #[test]
    fn check_reports_found_version() {
        let error = REQUIRED_OPENGL
            .check(&Version(Api::Gl, 2, 1))
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "OpenGL 3.3 is required but the context provides Gl 2.1"
        );
    }
}
