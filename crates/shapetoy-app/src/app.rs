//! Core application state and lifecycle.

use kurbo::{Point, Size, Vec2};
use peniko::Color;
use shapetoy_core::{CanvasConfig, PointerEvent, Shape, shapes_from_json};
use shapetoy_render::{RenderContext, RenderResult, Renderer, RendererError, VelloRenderer, VelloSurface};
use std::path::Path;
use std::sync::Arc;
use vello::util::RenderSurface;
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::event_handler::EventHandler;
use crate::shell::{EditorState, Shell};
use crate::ui::render_ui;

/// Space kept free right of and below the canvas.
const CANVAS_MARGIN: Vec2 = Vec2::new(260.0, 30.0);

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Top-left of the canvas in logical window pixels.
    pub canvas_origin: Point,
    pub background_color: Color,
    pub canvas: CanvasConfig,
    /// Shapes on the canvas at startup.
    pub initial_shapes: Vec<Shape>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Shape Toy".to_string(),
            width: 1000,
            height: 560,
            canvas_origin: Point::new(210.0, 30.0),
            background_color: Color::from_rgba8(240, 240, 240, 255),
            canvas: CanvasConfig::default(),
            initial_shapes: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Seed the canvas from a JSON array of shape records.
    ///
    /// A file that cannot be read or parsed is logged and leaves the
    /// canvas empty.
    pub fn with_scene(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| shapes_from_json(&json).map_err(|e| e.to_string()));
        match loaded {
            Ok(shapes) => {
                log::info!("Loaded {} shapes from {}", shapes.len(), path.display());
                self.initial_shapes = shapes;
            }
            Err(e) => log::error!("Failed to load scene {}: {e}", path.display()),
        }
        self
    }
}

/// Runtime state for the application.
struct AppState {
    // Windowing
    window: Arc<Window>,
    surface: RenderSurface<'static>,

    // Rendering
    vello_renderer: vello::Renderer,
    shape_renderer: VelloRenderer,
    texture_blitter: vello::wgpu::util::TextureBlitter,

    // egui
    egui_ctx: egui::Context,
    egui_state: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,

    // Editor
    shell: Shell<VelloSurface>,
    event_handler: EventHandler,
    config: AppConfig,
}

impl AppState {
    fn render_context(&self) -> RenderContext {
        RenderContext {
            canvas_size: self.config.canvas.size,
            ..RenderContext::new(Size::new(
                self.surface.config.width as f64,
                self.surface.config.height as f64,
            ))
        }
        .with_scale_factor(self.window.scale_factor())
        .with_canvas_origin(self.config.canvas_origin)
        .with_background(self.config.background_color)
    }

    /// Feed a pointer event to the editor and repaint if anything changed.
    fn dispatch_pointer(&mut self, event: Option<PointerEvent>) {
        let Some(event) = event else {
            return;
        };
        log::trace!("Pointer event: {event:?}");
        self.shell.handle_pointer(event);
        // Hover changes repaint without touching editor state.
        self.window.request_redraw();
    }

    /// Run the UI, compose the frame and present it.
    fn redraw(&mut self, render_cx: &vello::util::RenderContext) -> RenderResult<()> {
        let egui_input = self.egui_state.take_egui_input(&self.window);
        let mut ui_action = None;
        let editor_state = self.shell.state();
        let egui_output = self.egui_ctx.run(egui_input, |ctx| {
            ui_action = render_ui(ctx, editor_state);
        });
        self.egui_state
            .handle_platform_output(&self.window, egui_output.platform_output);

        if let Some(action) = ui_action {
            log::debug!("UI action: {action:?}");
            if self.shell.apply_ui_action(action) {
                self.window.request_redraw();
            }
        }

        let egui_primitives = self
            .egui_ctx
            .tessellate(egui_output.shapes, egui_output.pixels_per_point);

        let render_ctx = self.render_context();
        let Some(layers) = self.shell.canvas().layers() else {
            return Err(RendererError::RenderFailed("canvas is not mounted".to_string()));
        };
        self.shape_renderer.build_scene(&render_ctx, layers);

        let device_handle = &render_cx.devices[self.surface.dev_id];
        let device = &device_handle.device;
        let queue = &device_handle.queue;

        let surface_texture = self
            .surface
            .surface
            .get_current_texture()
            .map_err(|e| RendererError::Surface(e.to_string()))?;

        let width = self.surface.config.width;
        let height = self.surface.config.height;

        let params = RenderParams {
            base_color: self.shape_renderer.background_color(&render_ctx),
            width,
            height,
            antialiasing_method: AaConfig::Area,
        };

        // Vello needs a storage-capable Rgba8Unorm target; the surface may be Bgra8.
        let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
            label: Some("vello render texture"),
            size: vello::wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: vello::wgpu::TextureDimension::D2,
            format: vello::wgpu::TextureFormat::Rgba8Unorm,
            usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                | vello::wgpu::TextureUsages::COPY_SRC
                | vello::wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let render_texture_view =
            render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

        self.vello_renderer
            .render_to_texture(
                device,
                queue,
                self.shape_renderer.scene(),
                &render_texture_view,
                &params,
            )
            .map_err(|e| RendererError::RenderFailed(format!("{e:?}")))?;

        let surface_view = surface_texture
            .texture
            .create_view(&vello::wgpu::TextureViewDescriptor::default());

        {
            let mut blit_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("blit encoder"),
                });
            self.texture_blitter
                .copy(device, &mut blit_encoder, &render_texture_view, &surface_view);
            queue.submit(std::iter::once(blit_encoder.finish()));
        }

        for (id, image_delta) in &egui_output.textures_delta.set {
            self.egui_renderer.update_texture(device, queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: egui_output.pixels_per_point,
        };

        {
            let mut egui_encoder =
                device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                    label: Some("egui encoder"),
                });
            self.egui_renderer.update_buffers(
                device,
                queue,
                &mut egui_encoder,
                &egui_primitives,
                &screen_descriptor,
            );

            let render_pass = egui_encoder.begin_render_pass(&vello::wgpu::RenderPassDescriptor {
                label: Some("egui render pass"),
                color_attachments: &[Some(vello::wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: vello::wgpu::Operations {
                        load: vello::wgpu::LoadOp::Load,
                        store: vello::wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // egui-wgpu wants a 'static pass.
            let mut render_pass = render_pass.forget_lifetime();
            self.egui_renderer
                .render(&mut render_pass, &egui_primitives, &screen_descriptor);
            drop(render_pass);

            queue.submit(std::iter::once(egui_encoder.finish()));
        }

        for id in &egui_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }
        surface_texture.present();

        if egui_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero())
        {
            self.window.request_redraw();
        }
        Ok(())
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    state: Option<AppState>,
    render_cx: Option<vello::util::RenderContext>,
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
        }
    }

    /// Run the application.
    pub async fn run() {
        Self::run_with_config(AppConfig::default()).await;
    }

    /// Run the application with a custom configuration.
    pub async fn run_with_config(config: AppConfig) {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let mut app = App::with_config(config);
        event_loop.run_app(&mut app).expect("Event loop error");
    }

    /// Create the window, GPU surface and editor.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> RenderResult<()> {
        let canvas_extent = RenderContext::new(Size::ZERO)
            .with_canvas_origin(self.config.canvas_origin)
            .required_size(CANVAS_MARGIN);
        let width = (self.config.width as f64).max(canvas_extent.width);
        let height = (self.config.height as f64).max(canvas_extent.height);

        let window_attrs = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(width, height))
            .with_min_inner_size(LogicalSize::new(canvas_extent.width, canvas_extent.height));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .map_err(|e| RendererError::InitFailed(e.to_string()))?,
        );

        let size = window.inner_size();
        let (surface_width, surface_height) = if size.width == 0 || size.height == 0 {
            (self.config.width, self.config.height)
        } else {
            (size.width, size.height)
        };
        log::info!("Surface size: {surface_width}x{surface_height}");

        let render_cx = self
            .render_cx
            .get_or_insert_with(vello::util::RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            surface_width,
            surface_height,
            PresentMode::AutoVsync,
        ))
        .map_err(|e| RendererError::Surface(e.to_string()))?;

        let device = &render_cx.devices[surface.dev_id].device;
        let vello_renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(format!("{e:?}")))?;
        let texture_blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(
            device,
            surface.config.format,
            egui_wgpu::RendererOptions::default(),
        );

        let shape_renderer = VelloRenderer::new();
        let layers = shape_renderer.create_layers(self.config.canvas.size);
        let state = EditorState::with_shapes(self.config.initial_shapes.clone());
        let shell = Shell::with_state(state, self.config.canvas, layers);

        log::info!(
            "Shape Toy initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            vello_renderer,
            shape_renderer,
            texture_blitter,
            egui_ctx,
            egui_state,
            egui_renderer,
            shell,
            event_handler: EventHandler::new(),
            config: self.config.clone(),
        });

        window.request_redraw();
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");
        if let Err(e) = self.init(event_loop) {
            log::error!("Failed to start: {e}");
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        // Let egui process the event first
        let egui_response = state.egui_state.on_window_event(&state.window, &event);
        if egui_response.repaint {
            state.window.request_redraw();
        }
        let egui_wants_pointer = egui_response.consumed
            || state.egui_ctx.is_pointer_over_area()
            || state.egui_ctx.wants_pointer_input();

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                if let Err(e) = state.redraw(render_cx) {
                    log::warn!("Frame skipped: {e}");
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let event = if egui_wants_pointer {
                    state.event_handler.cursor_left()
                } else {
                    let render_ctx = state.render_context();
                    let point = render_ctx.window_to_canvas(Point::new(position.x, position.y));
                    state
                        .event_handler
                        .cursor_moved(point, render_ctx.contains(point))
                };
                state.dispatch_pointer(event);
            }

            WindowEvent::CursorLeft { .. } => {
                let event = state.event_handler.cursor_left();
                state.dispatch_pointer(event);
            }

            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if egui_wants_pointer {
                    return;
                }
                let event = state.event_handler.button_pressed();
                state.dispatch_pointer(event);
            }

            // Releases always reach the canvas so a drag cannot get stuck.
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button: MouseButton::Left,
                ..
            } => {
                let event = state.event_handler.button_released();
                state.dispatch_pointer(event);
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                state.event_handler.modifiers_changed(modifiers.state());
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_starts_empty() {
        let config = AppConfig::default();
        assert!(config.initial_shapes.is_empty());
        assert_eq!(config.title, "Shape Toy");
    }

    #[test]
    fn test_missing_scene_file_leaves_canvas_empty() {
        let config = AppConfig::default().with_scene("/nonexistent/shapetoy-scene.json");
        assert!(config.initial_shapes.is_empty());
    }

    #[test]
    fn test_scene_file_seeds_shapes() {
        let path = std::env::temp_dir().join(format!("shapetoy-scene-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"type":"circle","centerX":200,"centerY":200,"color":"blue","radius":30}]"#,
        )
        .unwrap();

        let config = AppConfig::default().with_scene(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.initial_shapes.len(), 1);
        assert_eq!(config.initial_shapes[0].center(), Point::new(200.0, 200.0));
    }
}
