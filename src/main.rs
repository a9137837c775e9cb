#[macro_use] extern crate clap;
#[macro_use] extern crate lazy_static;
#[macro_use] extern crate tracing;

#[macro_use]
pub mod graphics;
pub mod app;
pub mod error;
pub mod interface;

use std::process;
use std::rc::Rc;

use glutin::{
    dpi::LogicalSize,
    event::{
        Event,
        WindowEvent
    },
    event_loop::{
        ControlFlow,
        EventLoop
    },
    window::WindowBuilder,
    Api,
    ContextBuilder,
    GlProfile,
    GlRequest
};
use tracing_subscriber::EnvFilter;

use self::app::Scene;
use self::error::AppError;
use self::graphics::gl_types::Gl;
use self::graphics::opengl::NativeGl;
use self::interface::cli::Config;

fn run(config: Config) -> Result<(), AppError> {
    let events = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));
    let win_context = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (3, 3)))
        .with_gl_profile(GlProfile::Core)
        .with_vsync(config.vsync)
        .build_windowed(window, &events)?;

    let win_context = unsafe { win_context.make_current() }.map_err(|(_, e)| e)?;

    let native = NativeGl::load_with(|s| win_context.get_proc_address(s) as *const _);
    let gl: Rc<dyn Gl> = Rc::new(native);
    match gl.get_string(gl::VERSION) {
        Some(version) => info!("OpenGL {}", version),
        None => warn!("Driver did not report a GL version"),
    }

    // Held in an Option so it can be dropped while the context is still current
    let mut scene = Some(Scene::new(gl, &config.shader)?);
    let size = win_context.window().inner_size();
    if let Some(scene) = &scene {
        scene.resize(size.width, size.height);
    }

    events.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    win_context.resize(size);
                    if let Some(scene) = &scene {
                        scene.resize(size.width, size.height);
                    }
                },
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                _ => {}
            },

            Event::MainEventsCleared => win_context.window().request_redraw(),

            Event::RedrawRequested(_) => {
                if let Some(scene) = scene.as_mut() {
                    scene.render();
                }

                if let Err(e) = win_context.swap_buffers() {
                    error!("Failed to swap buffers: {}", e);
                    *control_flow = ControlFlow::Exit;
                }
            },

            Event::LoopDestroyed => {
                scene.take();
                debug!("Released GL objects");
            },

            _ => {}
        }
    })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let result = Config::from_args()
        .map_err(AppError::from)
        .and_then(run);

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
