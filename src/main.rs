//! Snowball Sandbox
//!
//! Drop a pile of snowballs into a box, then pop them all before the clock runs out.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use sandbox2d::config::AppConfig;
use sandbox2d::input::{InputAction, InputMapper};
use sandbox2d::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use sandbox2d::{GameState, Sandbox};
use sandbox2d_core::DrawList;
use sandbox2d_input::InputTracker;

/// Main application state
struct App {
    config: AppConfig,
    window: Option<WindowSystem>,
    render: Option<RenderSystem>,
    simulation: SimulationSystem,
    sandbox: Sandbox,
    input: InputTracker,
    /// Shapes recorded by the last frame
    draw_list: DrawList,
}

impl App {
    fn new(config: AppConfig, sandbox: Sandbox) -> Self {
        Self {
            simulation: SimulationSystem::new(config.game.target_fps),
            config,
            window: None,
            render: None,
            sandbox,
            input: InputTracker::new(),
            draw_list: DrawList::new(),
        }
    }

    /// Latch input, update the game, step, draw and render
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let state = self.simulation.update(&mut self.sandbox, &mut self.input);

        self.draw_list.clear();
        self.sandbox.draw(&mut self.draw_list);
        self.render_frame(event_loop);

        self.input.end_frame();

        if let Some(window) = &self.window {
            window.update_title(
                state,
                self.sandbox.game().snowballs_left(),
                self.config.game.target_fps,
            );
        }

        if state == GameState::Lost {
            event_loop.exit();
        }
    }

    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(render) = &mut self.render else {
            return;
        };

        match render.render_frame(&self.draw_list) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => render.recover_surface(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("{}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        };

        let render = RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            (self.config.window.width, self.config.window.height),
            self.config.window.vsync,
        );
        match render {
            Ok(render) => self.render = Some(render),
            Err(e) => {
                log::error!("{}", e);
                event_loop.exit();
                return;
            }
        }

        self.window = Some(window);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(render) = &mut self.render {
                    render.resize(physical_size.width, physical_size.height);
                    log::debug!("Surface resized to {:?}", render.size());
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if InputMapper::map_keyboard(key, event.state) == Some(InputAction::Exit) {
                        event_loop.exit();
                        return;
                    }
                    self.input.process_keyboard(key, event.state);
                }
            }

            WindowEvent::RedrawRequested => {
                self.render_frame(event_loop);
            }

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.accumulate_mouse_motion(delta.0, delta.1);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() && self.simulation.frame_due(std::time::Instant::now()) {
            self.run_frame(event_loop);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.simulation.next_frame()));
    }
}

fn main() {
    let config = AppConfig::load().unwrap_or_else(|e| {
        eprintln!("{}. Using defaults.", e);
        AppConfig::default()
    });

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    log::info!("Starting Snowball Sandbox");
    log::info!("Controls: D = pop snowball, Enter = start game, Escape = quit");

    let sandbox = match Sandbox::new(&config, &mut rand::rng()) {
        Ok(sandbox) => sandbox,
        Err(e) => {
            log::error!("Failed to build arena: {}", e);
            std::process::exit(1);
        }
    };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(config, sandbox);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
    }
    log::info!("Done!");
}
