use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window as WinitWindow, WindowId},
};

use higgs_pixel::cli::Cli;
use higgs_pixel::core::{PresentOutcome, RenderSession, SurfaceRenderer, Trigger};
use higgs_pixel::descriptor::ImageDescriptor;
use higgs_pixel::math::{parse_color, Rgba};
use higgs_pixel::window::Window;

/// Viewer state: one session per process, window and presenter created on resume
struct App {
    session: RenderSession,
    title: String,
    initial_size: (u32, u32),
    background: Rgba,
    window: Option<Window>,
    renderer: Option<SurfaceRenderer>,
}

impl App {
    fn new(cli: &Cli, descriptor: ImageDescriptor, background: Rgba) -> Self {
        Self {
            title: descriptor.title(&cli.app_name),
            session: RenderSession::new(descriptor),
            initial_size: (cli.width, cli.height),
            background,
            window: None,
            renderer: None,
        }
    }

    /// Run a pass against the current viewport and schedule presentation
    fn render(&mut self, event_loop: &ActiveEventLoop, trigger: Trigger) {
        let Some(window) = &self.window else {
            return;
        };

        if let Err(e) = self.session.render(window.metrics(), trigger) {
            error!("Render error: {}", e);
            event_loop.exit();
            return;
        }
        window.request_redraw();
    }

    fn present(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.present(self.session.canvas()) {
            Ok(PresentOutcome::Presented) => {}
            // reconfigured surface needs another frame
            Ok(PresentOutcome::Skipped) => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(e) => {
                error!("Present error: {}", e);
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            WinitWindow::default_attributes()
                .with_title(self.title.as_str())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.initial_size.0,
                    self.initial_size.1,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match SurfaceRenderer::new(window.clone(), self.background) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize surface renderer: {}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(Window::new(window));
        self.renderer = Some(renderer);
        self.render(event_loop, Trigger::Load);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
                self.render(event_loop, Trigger::Resize);
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                self.render(event_loop, Trigger::ScaleFactorChanged);
            }
            WindowEvent::RedrawRequested => self.present(event_loop),
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let descriptor = ImageDescriptor::load(&cli.token)
        .with_context(|| format!("Failed to load token {}", cli.token.display()))?;
    let background = parse_color(&cli.background).context("Invalid --background color")?;

    info!(
        "{}: {}x{} pixels, {} colors",
        descriptor.title(&cli.app_name),
        descriptor.width,
        descriptor.height,
        descriptor.colors.len()
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(&cli, descriptor, background);
    event_loop.run_app(&mut app)?;

    Ok(())
}
