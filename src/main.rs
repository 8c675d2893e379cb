use branchwork::canvas::PixelCanvas;
use branchwork::config::AppConfig;
use branchwork::constants::{BACKGROUND_COLOR, FPS_UPDATE_INTERVAL_SECS};
use branchwork::frame_clock::{FpsCounter, FrameClock};
use branchwork::input::{Command, InputState};
use branchwork::renderer::Renderer;
use branchwork::simulation::GrowthEngine;
use branchwork::view::ViewTransform;
use std::{sync::Arc, time::Instant};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

// --- Main Function ---
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let app_config = AppConfig::default();
    app_config.validate()?;

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title(app_config.window.title.as_str())
            .with_inner_size(PhysicalSize::new(
                app_config.window.width,
                app_config.window.height,
            ))
            .build(&event_loop)?,
    );
    let mut renderer = pollster::block_on(Renderer::new(window.clone()))?;
    let mut canvas = PixelCanvas::new(renderer.size.width, renderer.size.height, BACKGROUND_COLOR);
    let mut engine = GrowthEngine::new(app_config.simulation.clone());
    let mut view = ViewTransform::new(app_config.view);
    let mut input = InputState::new();

    let now = Instant::now();
    let mut frame_clock = FrameClock::new(app_config.window.frames_per_second, now);
    let mut fps_counter = FpsCounter::new(FPS_UPDATE_INTERVAL_SECS, now);
    log::info!(
        "Starting at {} fps ({:?} per frame), {}x{} window",
        app_config.window.frames_per_second,
        frame_clock.interval(),
        renderer.size.width,
        renderer.size.height
    );

    event_loop.run(move |event, elwt: &EventLoopWindowTarget<()>| {
        let mut command = None;
        match event {
            Event::AboutToWait => {
                let now = Instant::now();
                if frame_clock.is_due(now) {
                    frame_clock.advance(now);
                    engine.tick();
                    window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(frame_clock.deadline()));
            }
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => command = Some(Command::Quit),
                WindowEvent::Resized(physical_size) => {
                    renderer.resize(physical_size);
                    canvas.resize(renderer.size.width, renderer.size.height);
                    // Resizing wipes the canvas without touching the view
                    engine.invalidate_views();
                }
                WindowEvent::ScaleFactorChanged { .. } => {
                    let new_inner_size = window.inner_size();
                    renderer.resize(new_inner_size);
                    canvas.resize(renderer.size.width, renderer.size.height);
                    engine.invalidate_views();
                }
                WindowEvent::CursorMoved { position, .. } => input.on_cursor_moved(position),
                WindowEvent::CursorLeft { .. } => input.on_cursor_left(),
                WindowEvent::MouseInput { state, button, .. } => {
                    command = input.on_mouse_button(button, state);
                }
                WindowEvent::MouseWheel { delta, .. } => command = input.on_mouse_wheel(delta),
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if key_event.state == ElementState::Pressed && !key_event.repeat {
                        if let PhysicalKey::Code(code) = key_event.physical_key {
                            command = input.on_key_pressed(code);
                        }
                    }
                }
                WindowEvent::RedrawRequested => {
                    if view.take_clear_request() {
                        canvas.clear();
                    }
                    engine.render(&mut canvas, &view);
                    match renderer.render(&canvas) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            renderer.reconfigure()
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("WGPU Error: OutOfMemory");
                            elwt.exit();
                        }
                        Err(e) => log::warn!("WGPU Error: {:?}", e),
                    }

                    if fps_counter.frame(Instant::now()) {
                        let stats = engine.stats();
                        let paused_text = if engine.is_paused() { " [PAUSED]" } else { "" };
                        window.set_title(&format!(
                            "{} - Organisms: {} (alive {}) - Tick: {} - FPS: {:.1}{}",
                            app_config.window.title,
                            stats.total,
                            stats.alive,
                            engine.ticks(),
                            fps_counter.fps(),
                            paused_text
                        ));
                    }
                }
                _ => {}
            },
            _ => {}
        }

        match command {
            Some(Command::ZoomIn) => {
                view.zoom_in();
            }
            Some(Command::ZoomOut) => {
                view.zoom_out();
            }
            Some(Command::Pan(delta)) => {
                view.pan_by(delta.x, delta.y);
            }
            Some(Command::ResetView) => {
                view.reset_view();
            }
            Some(Command::Reset) => {
                engine.reset();
                view.request_clear();
            }
            Some(Command::TogglePause) => engine.toggle_pause(),
            Some(Command::Quit) => elwt.exit(),
            None => {}
        }
    })?;
    Ok(())
}
