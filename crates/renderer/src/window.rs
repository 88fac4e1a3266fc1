//! Windowed host for the particle field.

use std::sync::Arc;

use anyhow::{Context, Result};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use fieldconfig::FieldConfig;

use crate::field::ParticleField;

/// Opens a transparent window and runs the field until the window closes.
pub fn run_preview(config: &FieldConfig, surface_size: (u32, u32)) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("driftpaper")
            .with_inner_size(PhysicalSize::new(surface_size.0, surface_size.1))
            .with_transparent(true)
            .build(&event_loop)
            .context("failed to create preview window")?,
    );

    let initial_size = window.inner_size();
    let mut field = ParticleField::new(window.as_ref(), initial_size, config)?;

    let loop_window = Arc::clone(&window);
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == loop_window.id() => {
                match event {
                    WindowEvent::Resized(new_size) => field.resize(new_size),
                    WindowEvent::CursorMoved { position, .. } => {
                        field.pointer_moved(position.x, position.y);
                    }
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = field.frame() {
                            tracing::error!(error = %err, "render failed, closing preview");
                            elwt.exit();
                        }
                    }
                    WindowEvent::CloseRequested | WindowEvent::Destroyed => {
                        field.teardown();
                        elwt.exit();
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                elwt.set_control_flow(ControlFlow::Wait);
                loop_window.request_redraw();
            }
            _ => {}
        })
        .context("event loop terminated abnormally")?;

    Ok(())
}
