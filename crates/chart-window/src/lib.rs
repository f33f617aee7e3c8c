// File: crates/chart-window/src/lib.rs
// Summary: Shows a chart in a winit window by blitting chart-core RGBA output through softbuffer.
// Blocks the calling thread until the window is closed.

use std::num::NonZeroU32;

use chart_core::{shaper_for, Chart, ChartError, RenderOptions, Result, TextShaper};
use tracing::{debug, info};
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

/// Open a window showing `chart` at the size in `opts` and wait until the user closes it
/// (window close button or Escape). The chart is re-rendered at the window size on every redraw.
pub fn show(chart: &Chart, opts: &RenderOptions) -> Result<()> {
    let mut event_loop = new_event_loop()?;

    let title = if chart.config().title.is_empty() { "Chart" } else { chart.config().title.as_str() };
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(winit::dpi::LogicalSize::new(opts.width as f64, opts.height as f64))
        .build(&event_loop)
        .map_err(|e| backend(format!("failed to create window: {e}")))?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| backend(format!("softbuffer context: {e}")))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| backend(format!("softbuffer surface: {e}")))?;

    let shaper = shaper_for(opts);
    info!(title, "chart window open; close it to continue");
    let mut failure: Option<ChartError> = None;

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input: KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                    ..
                } => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(_) => window.request_redraw(),
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                let size = window.inner_size();
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = blit(chart, opts, shaper.as_ref(), &mut surface, w, h) {
                    failure = Some(e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    match failure {
        Some(e) => Err(e),
        None => {
            info!("chart window closed");
            Ok(())
        }
    }
}

/// Create the event loop, or fail with `Backend` when no display is reachable.
fn new_event_loop() -> Result<EventLoop<()>> {
    if !display_configured() {
        return Err(backend("no display available for the chart window (DISPLAY and WAYLAND_DISPLAY unset)"));
    }

    // winit panics instead of returning an error when the display cannot be opened;
    // keep that panic off stderr while it is turned into an error.
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    let event_loop = std::panic::catch_unwind(EventLoop::new);
    std::panic::set_hook(hook);
    event_loop.map_err(|_| backend("no display available for the chart window"))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn display_configured() -> bool {
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn display_configured() -> bool {
    true
}

fn blit(
    chart: &Chart,
    opts: &RenderOptions,
    shaper: Option<&TextShaper>,
    surface: &mut softbuffer::Surface,
    w: NonZeroU32,
    h: NonZeroU32,
) -> Result<()> {
    let frame_opts = opts.with_size(w.get() as i32, h.get() as i32);
    let (rgba, _, _, _) = chart.render_to_rgba8_with(&frame_opts, shaper)?;
    surface.resize(w, h).map_err(|e| backend(format!("resize: {e}")))?;
    let mut frame = surface.buffer_mut().map_err(|e| backend(format!("frame: {e}")))?;
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = pack_xrgb(px);
    }
    frame.present().map_err(|e| backend(format!("present: {e}")))?;
    debug!(width = w.get(), height = h.get(), "frame presented");
    Ok(())
}

/// Pack one RGBA pixel into softbuffer's `0RGB` word.
pub fn pack_xrgb(px: &[u8]) -> u32 {
    ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32
}

fn backend(msg: impl Into<String>) -> ChartError {
    ChartError::Backend(msg.into())
}
