// src/main.rs
use nannou::prelude::*;
use nannou::winit::event::{DeviceEvent, ElementState};
use nannou::winit::window::CursorIcon;

use gridpan::{
    config::Config,
    controllers::PointerReleaseHub,
    draw::{DrawSurface, TextureSurface},
    models::PanPhase,
    views::GridPanWidget,
};

struct Model {
    widget: GridPanWidget<TextureSurface>,
    // every pointer release in the process goes through here
    release_hub: PointerReleaseHub,
    background: Rgb<f32>,
    last_phase: PanPhase,
}

fn main() {
    nannou::app(model).event(event).update(update).exit(exit).run();
}

fn model(app: &App) -> Model {
    // Load config, falling back to defaults so the grid always shows
    let loaded = Config::load();
    let level = loaded
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("{}; using default settings", e);
        Config::default()
    });

    // Create window
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .mouse_moved(mouse_moved)
        .mouse_released(mouse_released)
        .build()
        .expect("Failed to create window");
    let window = app.window(window_id).expect("Window closed during setup");

    let surface = TextureSurface::new(&window);
    let spec = config
        .grid_spec(surface.pixel_density())
        .expect("Invalid grid settings");
    let style = config.grid_style().expect("Invalid grid style");
    let background = config
        .background_color()
        .expect("Invalid background color");

    // The grid is rendered exactly once, here
    let mut widget = GridPanWidget::new(spec, style, surface);
    widget.set_offset_observer(|offset| {
        log::trace!("Grid offset now ({:.1}, {:.1})", offset.x, offset.y);
    });

    let mut release_hub = PointerReleaseHub::new();
    widget
        .initialize(&mut release_hub)
        .expect("Failed to render the grid");

    window.set_cursor_icon(CursorIcon::Grab);

    Model {
        widget,
        release_hub,
        background,
        last_phase: PanPhase::Idle,
    }
}

// ******************************* Pointer input *******************************

fn mouse_pressed(app: &App, model: &mut Model, _button: MouseButton) {
    model.widget.pointer_pressed(app.mouse.position());
}

fn mouse_moved(_app: &App, model: &mut Model, position: Point2) {
    model.widget.pointer_moved(position);
}

fn mouse_released(_app: &App, model: &mut Model, _button: MouseButton) {
    model.release_hub.dispatch();
}

// Raw device releases arrive even when the pointer has left the window
fn event(_app: &App, model: &mut Model, event: Event) {
    if let Event::DeviceEvent(
        _,
        DeviceEvent::Button {
            state: ElementState::Released,
            ..
        },
    ) = event
    {
        model.release_hub.dispatch();
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let phase = model.widget.phase();
    if phase == model.last_phase {
        return;
    }
    model.last_phase = phase;

    let icon = match phase {
        PanPhase::Idle => CursorIcon::Grab,
        PanPhase::Dragging => CursorIcon::Grabbing,
    };
    app.main_window().set_cursor_icon(icon);
}

// Draws the pre-rendered grid texture translated by the pan offset
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    if let Some(texture) = model.widget.surface().texture() {
        let rect = model.widget.display_rect();
        draw.texture(texture).xy(rect.xy()).wh(rect.wh());
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to draw frame: {:?}", e);
    }
}

fn exit(_app: &App, mut model: Model) {
    model.widget.dispose(&mut model.release_hub);
    log::info!(
        "Exiting with grid offset ({:.1}, {:.1})",
        model.widget.offset().x,
        model.widget.offset().y
    );
}
