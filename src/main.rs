//! Fly-through demo.
//!
//! Opens a window, grabs the cursor and feeds raw mouse motion plus the
//! bound movement keys into a [`Camera3D`]. The view-projection matrix is
//! logged at debug level (`RUST_LOG=debug`). Escape quits.
//!
//! Usage: `vantage [options.toml]`

use std::path::Path;

use vantage::camera::Camera3D;
use vantage::input::{InputEvent, InputState};
use vantage::options::Options;
use vantage::util::frame_clock::FrameClock;
use vantage::CameraError;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

/// Frames between view-projection log lines.
const LOG_INTERVAL: u64 = 60;

struct FlyApp {
    window: Option<Window>,
    options: Options,
    camera: Camera3D,
    input: InputState,
    clock: FrameClock,
    frame: u64,
}

impl FlyApp {
    fn new(options: Options) -> Result<Self, CameraError> {
        let camera = Camera3D::from_options(&options.camera, 1.0)?;
        let input = InputState::with_bindings(options.keybindings.clone());
        Ok(Self {
            window: None,
            options,
            camera,
            input,
            clock: FrameClock::new(),
            frame: 0,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        if let Err(e) = self.camera.adjust_to_viewport(width, height) {
            log::warn!("Ignoring resize: {e}");
        }
    }

    fn step(&mut self) {
        let dt = self.clock.tick();
        self.camera.fly(dt, &self.input, &self.options.camera);
        self.input.end_frame();

        let view_proj = self.camera.view_projection();
        if self.frame % LOG_INTERVAL == 0 {
            log::debug!(
                "frame {} ({:.0} fps) pos {:?} view_proj {:?}",
                self.frame,
                self.clock.fps(),
                self.camera.transform().pos(),
                view_proj
            );
        }
        self.frame += 1;
    }
}

fn grab_cursor(window: &Window) {
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Locked)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
    if let Err(e) = grabbed {
        log::warn!("Cursor grab unavailable: {e}");
    }
    window.set_cursor_visible(false);
}

impl ApplicationHandler for FlyApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        let attrs = Window::default_attributes().with_title("Vantage");
        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                self.resize(size.width, size.height);
                grab_cursor(&window);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(input) = InputEvent::from_window_event(&event) {
            self.input.handle_event(&input);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
            }

            WindowEvent::Focused(true) => {
                if let Some(window) = &self.window {
                    grab_cursor(window);
                }
            }

            WindowEvent::RedrawRequested => {
                self.step();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(input) = InputEvent::from_device_event(&event) {
            self.input.handle_event(&input);
        }
    }
}

fn main() -> Result<(), CameraError> {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => {
            let options = Options::load(Path::new(&path))?;
            log::info!("Loaded options from '{path}'");
            options
        }
        None => Options::default(),
    };

    let event_loop =
        EventLoop::new().map_err(|e| CameraError::Viewer(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = FlyApp::new(options)?;
    event_loop
        .run_app(&mut app)
        .map_err(|e| CameraError::Viewer(e.to_string()))
}
