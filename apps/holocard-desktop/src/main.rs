mod state;

use anyhow::{Context, Result};
use clap::Parser;
use egui::Context as EguiContext;
use glam::{UVec2, Vec2};
use holocard_assets::{PLACEHOLDER_COLOR, TextureAsset, glow, load_texture_or_placeholder};
use holocard_config::HolocardConfig;
use holocard_input::PointerButton;
use holocard_render::{MountState, RenderSettings, Teardown};
use holocard_render_wgpu::{CardRenderer, ShowcaseTextures, SurfaceTarget};
use holocard_scene::Showcase;
use state::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Pixels of trackpad scroll treated as one wheel notch.
const PIXELS_PER_LINE: f64 = 100.0;

#[derive(Parser)]
#[command(name = "holocard-desktop", about = "Interactive 3D card viewer")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image for the front of the card, overrides the configuration
    #[arg(long)]
    texture: Option<PathBuf>,
}

/// GPU resources, created once the window exists.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: CardRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

impl Gpu {
    fn new(
        event_loop: &ActiveEventLoop,
        settings: &RenderSettings,
        showcase: &Showcase,
        textures: ShowcaseTextures<'_>,
        egui_ctx: &EguiContext,
    ) -> Result<Self> {
        let attrs = Window::default_attributes()
            .with_title("holocard")
            .with_inner_size(PhysicalSize::new(1280u32, 720))
            .with_transparent(settings.transparent);
        let window = Arc::new(event_loop.create_window(attrs).context("create window")?);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance
            .create_surface(window.clone())
            .context("create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no compatible GPU adapter")?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("holocard_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("create device")?;

        let size = window.inner_size();
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or(caps.formats.first())
            .copied()
            .context("surface reports no formats")?;
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .find(|m| {
                settings.transparent
                    && matches!(
                        m,
                        wgpu::CompositeAlphaMode::PreMultiplied
                            | wgpu::CompositeAlphaMode::PostMultiplied
                    )
            })
            .or(caps.alpha_modes.first())
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let supports_alpha = !matches!(
            alpha_mode,
            wgpu::CompositeAlphaMode::Opaque | wgpu::CompositeAlphaMode::Auto
        );

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: if settings.vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let renderer = CardRenderer::new(
            &device,
            &queue,
            SurfaceTarget {
                format,
                width: config.width,
                height: config.height,
                supports_alpha,
            },
            settings,
            showcase,
            textures,
        );

        let egui_winit = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, format, None, 1, false);

        tracing::info!(
            backend = adapter.get_info().backend.to_str(),
            ?alpha_mode,
            "GPU initialized"
        );

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width.max(1);
        self.config.height = height.max(1);
        self.surface.configure(&self.device, &self.config);
        self.renderer
            .resize(&self.device, self.config.width, self.config.height);
    }

    fn render(&mut self, state: &mut AppState, egui_ctx: &EguiContext) {
        let output = match self.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer.render(
            &self.device,
            &self.queue,
            &view,
            &state.camera,
            &state.showcase.scene,
        );

        let raw_input = self.egui_winit.take_egui_input(&self.window);
        let full_output = egui_ctx.run(raw_input, |ctx| state.draw_ui(ctx));
        self.egui_winit
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = egui_ctx.tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.config.width, self.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.device, &self.queue, *id, image_delta);
        }
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("egui_encoder"),
            });
        self.egui_renderer.update_buffers(
            &self.device,
            &self.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        output.present();
    }

    fn dispose(self) {
        self.renderer.dispose();
    }
}

struct App {
    config: HolocardConfig,
    card_texture: TextureAsset,
    glow_texture: TextureAsset,
    state: AppState,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
}

impl App {
    fn new(config: HolocardConfig, card_texture: TextureAsset, glow_texture: TextureAsset) -> Self {
        let state = AppState::new(&config, UVec2::new(1280, 720));
        Self {
            config,
            card_texture,
            glow_texture,
            state,
            gpu: None,
            egui_ctx: EguiContext::default(),
        }
    }

    /// Unmount the widget; GPU resources are released on the first call only.
    fn teardown(&mut self) {
        match self.state.unmount() {
            Teardown::Dispose => {
                if let Some(gpu) = self.gpu.take() {
                    gpu.dispose();
                }
            }
            Teardown::AlreadyDisposed | Teardown::NotMounted => {}
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() || self.state.mount.state() != MountState::Unmounted {
            return;
        }

        let textures = ShowcaseTextures {
            card: &self.card_texture,
            glow: &self.glow_texture,
        };
        match Gpu::new(
            event_loop,
            &self.config.render,
            &self.state.showcase,
            textures,
            &self.egui_ctx,
        ) {
            Ok(gpu) => {
                let size = gpu.window.inner_size();
                self.state.mount.mount();
                self.state.resize(UVec2::new(size.width, size.height));
                gpu.window.request_redraw();
                self.gpu = Some(gpu);
            }
            Err(e) => {
                tracing::error!("failed to initialize graphics: {e:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gpu) = &mut self.gpu {
            let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
            if response.consumed && self.state.show_inspector {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                self.teardown();
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size.width, new_size.height);
                }
                self.state
                    .resize(UVec2::new(new_size.width, new_size.height));
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match key {
                KeyCode::F1 => {
                    self.state.show_inspector = !self.state.show_inspector;
                }
                KeyCode::Escape => {
                    self.teardown();
                    event_loop.exit();
                }
                _ => {}
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.state
                    .cursor_moved(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::CursorEntered { .. } => self.state.cursor_entered(),
            WindowEvent::CursorLeft { .. } => self.state.cursor_left(),
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Left => PointerButton::Primary,
                    MouseButton::Right => PointerButton::Secondary,
                    _ => PointerButton::Other,
                };
                self.state.button(button, state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(p) => (p.y / PIXELS_PER_LINE) as f32,
                };
                self.state.wheel(lines);
            }
            WindowEvent::RedrawRequested => {
                if !self.state.frame() {
                    return;
                }
                if let Some(gpu) = &mut self.gpu {
                    gpu.render(&mut self.state, &self.egui_ctx);
                    gpu.window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            if self.state.mount.is_running() {
                gpu.window.request_redraw();
            }
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    tracing::info!("holocard-desktop starting");

    let mut config = HolocardConfig::load_or_default(cli.config.as_deref())?;
    if let Some(texture) = cli.texture {
        config.scene.card.texture = texture;
    }

    let card_texture = load_texture_or_placeholder(&config.scene.card.texture, PLACEHOLDER_COLOR);
    let glow_params = &config.scene.glow;
    let glow_texture = glow::radial_gradient(
        glow_params.texture_size,
        glow_params.inner_radius,
        glow_params.outer_radius,
        &glow_params.stops(),
    )
    .context("generate glow texture")?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, card_texture, glow_texture);
    event_loop.run_app(&mut app)?;

    tracing::info!(frames = app.state.mount.frames(), "holocard-desktop exited");
    Ok(())
}
