use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::clickeffect::ClickEffect;
use crate::components::mapposition::MapPosition;
use crate::components::ttl::Ttl;
use crate::components::widget::{Active, Opacity, PanelMember, Slider, Toggle, Widget, WidgetRole};
use crate::components::zindex::ZIndex;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::cursorsprite::CursorSprite;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::InputState;
use crate::resources::worldsignals::WorldSignals;

const BACKGROUND: Color = Color::new(18, 20, 26, 255);
const TEXT: Color = Color::new(235, 235, 235, 255);
const ACCENT: Color = Color::new(255, 214, 102, 255);
const FONT_SIZE: i32 = 20;

/// Widget snapshot taken before drawing so the world is not borrowed while
/// the draw handle is alive.
struct WidgetDraw {
    widget: Widget,
    alpha: f32,
    z: i32,
    toggle: Option<Toggle>,
    slider: Option<Slider>,
}

/// Scale a color's alpha by `alpha` in `[0, 1]`.
fn with_alpha(color: Color, alpha: f32) -> Color {
    let a = (color.a as f32 * alpha.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, a)
}

/// Visible widgets in draw order, with the panel opacity folded in.
fn collect_widgets(world: &mut World) -> Vec<WidgetDraw> {
    let mut panels = world.query::<(&Active, &Opacity)>();
    let mut q = world.query::<(
        &Widget,
        &Active,
        &Opacity,
        Option<&ZIndex>,
        Option<&PanelMember>,
        Option<&Toggle>,
        Option<&Slider>,
    )>();
    let world: &World = world;

    let mut to_draw: Vec<WidgetDraw> = q
        .iter(world)
        .filter(|(_, active, ..)| active.0)
        .filter_map(|(widget, _, opacity, z, member, toggle, slider)| {
            let mut alpha = opacity.0;
            if let Some(PanelMember(panel)) = member {
                let (panel_active, panel_opacity) = panels.get(world, *panel).ok()?;
                if !panel_active.0 {
                    return None;
                }
                alpha *= panel_opacity.0;
            }
            Some(WidgetDraw {
                widget: widget.clone(),
                alpha,
                z: z.map(|z| z.0).unwrap_or(0),
                toggle: toggle.copied(),
                slider: slider.copied(),
            })
        })
        .collect();

    to_draw.sort_by_key(|w| w.z);
    to_draw
}

fn draw_widget<D: RaylibDraw>(d: &mut D, item: &WidgetDraw) {
    let widget = &item.widget;
    let rect = widget.rect;
    let text = with_alpha(TEXT, item.alpha);

    match widget.role {
        WidgetRole::Overlay => {
            d.draw_rectangle_rec(rect, with_alpha(widget.color, item.alpha));
        }
        WidgetRole::SettingsPanel | WidgetRole::AboutPanel => {
            d.draw_rectangle_rec(rect, with_alpha(widget.color, item.alpha));
            d.draw_rectangle_lines_ex(rect, 2.0, with_alpha(ACCENT, item.alpha));
            // Title on the first line, the rest as body text
            let mut lines = widget.label.lines();
            if let Some(title) = lines.next() {
                d.draw_text(
                    title,
                    (rect.x + 20.0) as i32,
                    (rect.y + 16.0) as i32,
                    FONT_SIZE + 8,
                    with_alpha(ACCENT, item.alpha),
                );
            }
            for (i, line) in lines.enumerate() {
                d.draw_text(
                    line,
                    (rect.x + 20.0) as i32,
                    (rect.y + 64.0) as i32 + i as i32 * (FONT_SIZE + 6),
                    FONT_SIZE,
                    text,
                );
            }
        }
        _ if item.toggle.is_some() => {
            let on = item.toggle.map(|t| t.on).unwrap_or(false);
            let bx = Rectangle {
                x: rect.x,
                y: rect.y,
                width: rect.height,
                height: rect.height,
            };
            d.draw_rectangle_lines_ex(bx, 2.0, text);
            if on {
                let inset = rect.height * 0.25;
                d.draw_rectangle_rec(
                    Rectangle {
                        x: bx.x + inset,
                        y: bx.y + inset,
                        width: bx.width - 2.0 * inset,
                        height: bx.height - 2.0 * inset,
                    },
                    with_alpha(ACCENT, item.alpha),
                );
            }
            d.draw_text(
                &widget.label,
                (rect.x + rect.height + 12.0) as i32,
                (rect.y + (rect.height - FONT_SIZE as f32) * 0.5) as i32,
                FONT_SIZE,
                text,
            );
        }
        _ if item.slider.is_some() => {
            let Some(slider) = item.slider else {
                return;
            };
            let track_y = rect.y + rect.height * 0.5;
            d.draw_line_ex(
                Vector2 {
                    x: rect.x,
                    y: track_y,
                },
                Vector2 {
                    x: rect.x + rect.width,
                    y: track_y,
                },
                4.0,
                with_alpha(widget.color, item.alpha),
            );
            let knob = Vector2 {
                x: rect.x + rect.width * slider.fraction(),
                y: track_y,
            };
            d.draw_circle_v(knob, rect.height * 0.4, with_alpha(ACCENT, item.alpha));
            let label = format!("{}: {:.2}", widget.label, slider.value);
            d.draw_text(
                &label,
                rect.x as i32,
                (rect.y - FONT_SIZE as f32 - 4.0) as i32,
                FONT_SIZE,
                text,
            );
        }
        _ => {
            d.draw_rectangle_rec(rect, with_alpha(widget.color, item.alpha));
            d.draw_rectangle_lines_ex(rect, 2.0, with_alpha(ACCENT, item.alpha));
            let width = measure_text(&widget.label, FONT_SIZE) as f32;
            d.draw_text(
                &widget.label,
                (rect.x + (rect.width - width) * 0.5) as i32,
                (rect.y + (rect.height - FONT_SIZE as f32) * 0.5) as i32,
                FONT_SIZE,
                text,
            );
        }
    }
}

/// Draw click effects in camera space: sparks expanding and fading out.
fn draw_click_effects(world: &mut World, d2: &mut RaylibMode2D<RaylibDrawHandle>) {
    let mut q = world.query::<(&ClickEffect, &MapPosition, &Ttl, Option<&ZIndex>)>();
    let mut effects: Vec<(&ClickEffect, Vector2, f32, i32)> = q
        .iter(world)
        .map(|(fx, pos, ttl, z)| (fx, pos.pos, ttl.remaining, z.map(|z| z.0).unwrap_or(0)))
        .collect();
    effects.sort_by_key(|(.., z)| *z);

    for (fx, center, remaining, _z) in effects {
        let t = fx.progress(remaining);
        let color = with_alpha(fx.color, 1.0 - t);
        let inner = fx.radius * t * 0.5;
        let outer = fx.radius * t;
        if fx.sparks.is_empty() {
            d2.draw_circle_lines(center.x as i32, center.y as i32, outer, color);
            continue;
        }
        for angle in fx.sparks.iter() {
            let (sin, cos) = angle.sin_cos();
            d2.draw_line_ex(
                Vector2 {
                    x: center.x + cos * inner,
                    y: center.y + sin * inner,
                },
                Vector2 {
                    x: center.x + cos * outer,
                    y: center.y + sin * outer,
                },
                2.0,
                color,
            );
        }
    }
}

/// Exclusive render system.
///
/// Takes the raylib handles out of the world for the duration of the frame,
/// draws the menu widgets in z order, the click effects through the camera,
/// and finally the cursor sprite on top.
pub fn render_system(world: &mut World) {
    let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
        return;
    };
    let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
        world.insert_non_send_resource(rl);
        return;
    };

    let widgets = collect_widgets(world);
    let camera = world.get_resource::<Camera2DRes>().map(|c| c.0);
    let pointer = world.resource::<InputState>().pointer;
    let scene = match world.get_resource::<GameState>().map(|s| s.get().clone()) {
        Some(GameStates::InScene) => world
            .get_resource::<WorldSignals>()
            .and_then(|s| s.get_string("scene").cloned()),
        _ => None,
    };
    let cursor = world.remove_non_send_resource::<CursorSprite>();

    {
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);

        if let Some(title) = &scene {
            let size = FONT_SIZE * 2;
            let x = (d.get_screen_width() - measure_text(title, size)) / 2;
            let y = (d.get_screen_height() - size) / 2;
            d.draw_text(title, x, y, size, TEXT);
        }

        // The overlay sits on the highest z and covers everything below it,
        // click effects included.
        let (below, overlay): (Vec<&WidgetDraw>, Vec<&WidgetDraw>) = widgets
            .iter()
            .partition(|w| w.widget.role != WidgetRole::Overlay);

        for item in below {
            draw_widget(&mut d, item);
        }

        if let Some(cam) = camera {
            let mut d2 = d.begin_mode2D(cam);
            draw_click_effects(world, &mut d2);
        }

        for item in overlay {
            draw_widget(&mut d, item);
        }

        if let Some(cursor) = &cursor {
            d.draw_texture_v(&cursor.texture, cursor.draw_origin(pointer), Color::WHITE);
        }
    }

    if let Some(cursor) = cursor {
        world.insert_non_send_resource(cursor);
    }
    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
}
