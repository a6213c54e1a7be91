//! Windowed backend: winit window, glutin GL context, event loop.
//!
//! Everything here is fatal-on-failure: if the window, the GL display or
//! the symbol loader cannot be brought up there is nothing to fall back
//! to, so errors propagate straight out of `run`.

use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{anyhow, Context as _, Result};
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::SwapInterval;
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasRawWindowHandle;
use tracing::{debug, info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::WindowBuilder;

use crate::render::Renderer;
use crate::state::Easel;
use crate::{theme, ui};

/// Bring up the window and GL state, then run the main loop until the
/// state asks to quit.
pub fn run(mut easel: Easel) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    // Saved geometry comes from Resized events, which report physical
    // pixels; the window has to be rebuilt in the same unit or a HiDPI
    // scale factor doubles the size on every launch.
    let window_builder = WindowBuilder::new().with_title("easel").with_inner_size(
        PhysicalSize::new(easel.settings.window_width, easel.settings.window_height),
    );

    let template = ConfigTemplateBuilder::new().with_alpha_size(8);
    let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

    let (window, gl_config) = display_builder
        .build(&event_loop, template, pick_gl_config)
        .map_err(|e| anyhow!("failed to create window and GL display: {e}"))?;
    let window = window.context("display builder produced no window")?;
    debug!(samples = gl_config.num_samples(), "GL config picked");

    let raw_window_handle = window.raw_window_handle();
    let gl_display = gl_config.display();

    // 3.3 core, the baseline the shaders target.
    let context_attributes = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .build(Some(raw_window_handle));

    let not_current = unsafe {
        gl_display
            .create_context(&gl_config, &context_attributes)
            .context("failed to create GL context")?
    };

    let attrs = window.build_surface_attributes(Default::default());
    let surface = unsafe {
        gl_display
            .create_window_surface(&gl_config, &attrs)
            .context("failed to create window surface")?
    };
    let context = not_current
        .make_current(&surface)
        .context("failed to make GL context current")?;

    if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
        warn!(error = %e, "vsync unavailable");
    }

    let gl = Arc::new(unsafe {
        glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
    });

    let mut renderer = Renderer::new(gl.clone())?;

    let mut egui_glow = egui_glow::winit::EguiGlow::new(&event_loop, gl, None, None);
    theme::apply(&egui_glow.egui_ctx);

    info!("entering main loop");

    let mut modifiers = ModifiersState::default();

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent { event, .. } => {
                let response = egui_glow.on_window_event(&window, &event);

                match event {
                    WindowEvent::CloseRequested => easel.request_quit(),

                    WindowEvent::Resized(size) => {
                        if let (Some(w), Some(h)) =
                            (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
                        {
                            surface.resize(&context, w, h);
                            renderer.resize(size.width, size.height);
                            easel.note_resize(size.width, size.height);
                        }
                    }

                    WindowEvent::ModifiersChanged(new_mods) => {
                        modifiers = new_mods.state();
                    }

                    WindowEvent::KeyboardInput {
                        event: key_event, ..
                    } if !response.consumed => {
                        easel.handle_key(&key_event, modifiers);
                    }

                    WindowEvent::RedrawRequested => {
                        let shader_ok = renderer.has_program();
                        egui_glow.run(&window, |ctx| {
                            let out =
                                ui::draw(ctx, &mut easel, &mut renderer.clear_color, shader_ok);
                            if out.quit {
                                easel.request_quit();
                            }
                        });

                        // Scene first, overlay on top, then present.
                        renderer.draw(&easel.settings);
                        egui_glow.paint(&window);

                        if let Err(e) = surface.swap_buffers(&context) {
                            warn!(error = %e, "buffer swap failed");
                        }
                    }

                    _ => {}
                }

                if response.repaint {
                    window.request_redraw();
                }
            }

            // Continuous redraw; vsync paces the loop.
            Event::AboutToWait => window.request_redraw(),

            Event::LoopExiting => {
                egui_glow.destroy();
                renderer.destroy();
            }

            _ => {}
        }

        if easel.should_quit() {
            elwt.exit();
        }
    })?;

    Ok(())
}

/// Prefer the config with the most MSAA samples.
fn pick_gl_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, candidate| {
            if candidate.num_samples() > best.num_samples() {
                candidate
            } else {
                best
            }
        })
        .expect("no GL configs offered by the display")
}
