//! Main GUI application loop.

use crate::controllers::explorer::{ExplorerCommand, ExplorerController};
use crate::controllers::ports::frame_presenter::FramePresenterPort;
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::fractals::mandelbrot::config::MAX_ITERATIONS;
use crate::presenters::pixels::presenter::PixelsPresenter;
use log::{debug, error, info};
use rand::Rng;
use std::time::Instant;
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowBuilder},
};

const WINDOW_TITLE: &str = "Mandelbrot";
const WINDOW_WIDTH: u32 = 1000;
const WINDOW_HEIGHT: u32 = 800;

/// Applies a command and pushes the resulting frame to the presenter. A
/// command that produced no frame leaves the window contents alone.
fn apply_command<R: Rng, P: FramePresenterPort>(
    controller: &mut ExplorerController<R>,
    presenter: &mut P,
    window: &Window,
    command: ExplorerCommand,
) {
    let start = Instant::now();

    if let Some(frame) = controller.handle(command) {
        debug!("rendered {:?} in {:?}", command, start.elapsed());
        presenter.present(&frame);
        window.request_redraw();
    }
}

/// Runs the explorer window. Does not return until the window closes.
pub fn run_gui() {
    let event_loop = EventLoop::new().expect("Failed to create event loop");

    // Leak the window to get a 'static reference for pixels. The inner size
    // is requested in physical pixels so the raster maps 1:1 onto it.
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false)
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let raster = RasterSize::new(WINDOW_WIDTH, WINDOW_HEIGHT).expect("window raster is valid");
    let mut presenter = PixelsPresenter::new(window, raster);
    let mut controller = ExplorerController::new(raster, rand::rng(), MAX_ITERATIONS)
        .expect("explorer configuration is valid");

    info!(
        "starting explorer: raster {}x{}, max iterations {}",
        WINDOW_WIDTH, WINDOW_HEIGHT, MAX_ITERATIONS
    );

    let start = Instant::now();
    let frame = controller.initial_frame();
    debug!("initial render in {:?}", start.elapsed());
    presenter.present(&frame);
    window.request_redraw();

    let mut cursor = Point { x: 0, y: 0 };

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            let Event::WindowEvent { event, window_id } = event else {
                return;
            };
            if window_id != window.id() {
                return;
            }

            match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = presenter.render() {
                        error!("render error: {err}");
                        elwt.exit();
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    // Casts saturate; a position outside the raster is
                    // rejected by the zoom path, not here.
                    cursor = Point {
                        x: position.x as u32,
                        y: position.y as u32,
                    };
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    apply_command(
                        &mut controller,
                        &mut presenter,
                        window,
                        ExplorerCommand::ZoomAt(cursor),
                    );
                }
                WindowEvent::KeyboardInput { event, .. }
                    if event.state == ElementState::Pressed && !event.repeat =>
                {
                    match event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) => elwt.exit(),
                        PhysicalKey::Code(KeyCode::Space) => {
                            apply_command(
                                &mut controller,
                                &mut presenter,
                                window,
                                ExplorerCommand::ResetView,
                            );
                        }
                        PhysicalKey::Code(KeyCode::KeyC) => {
                            apply_command(
                                &mut controller,
                                &mut presenter,
                                window,
                                ExplorerCommand::RegeneratePalette,
                            );
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
