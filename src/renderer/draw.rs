//! Field and play rendering
//!
//! Draws one frame per call in a fixed order: field, players, disc.

use std::f32::consts::TAU;

use glam::Vec2;

use super::surface::Surface;
use crate::consts::{DISC_OFFSET, PLAYER_RADIUS};
use crate::settings::Settings;
use crate::sim::{Path, Play};

/// Size the surface, fill the grass, and stroke the lines
pub fn draw_field(surface: &mut dyn Surface, settings: &Settings) {
    let field = &settings.field;
    let (width, height) = field.canvas_size();
    let field_w = field.px(field.field_width);
    let endzone = field.px(field.endzone_depth);
    let playing = field.px(field.playing_field_length);
    let brick = field.px(field.brick_depth);

    surface.set_size(width, height);
    surface.set_fill_style(&settings.palette.grass);
    surface.fill_rect(0.0, 0.0, width, height);

    surface.set_stroke_style(&settings.palette.lines);
    surface.stroke_rect(field.margin, field.margin, field_w, field.px(field.field_length()));
    surface.stroke_rect(field.margin, field.margin, field_w, endzone);
    surface.stroke_rect(
        field.margin,
        field.margin + endzone + playing,
        field_w,
        endzone,
    );

    // Brick marks
    surface.stroke_rect(field_w / 2.0, endzone + brick, 1.0, 1.0);
    surface.stroke_rect(field_w / 2.0, endzone + playing - brick, 1.0, 1.0);
}

/// Polyline through every destination already passed, ending at `current`
fn draw_trail(surface: &mut dyn Surface, settings: &Settings, path: &Path, now: f32, current: Vec2) {
    let field = &settings.field;
    surface.set_stroke_style(&settings.palette.trail);
    surface.begin_path();
    for (i, d) in path.iter().take_while(|d| d.t < now).enumerate() {
        if i == 0 {
            surface.move_to(field.px(d.x), field.px(d.y));
        } else {
            surface.line_to(field.px(d.x), field.px(d.y));
        }
    }
    surface.line_to(field.px(current.x), field.px(current.y));
    surface.stroke();
}

fn draw_circle(surface: &mut dyn Surface, center: Vec2, radius: f32, fill: &str, outline: &str) {
    surface.set_stroke_style(outline);
    surface.set_fill_style(fill);
    surface.begin_path();
    surface.arc(center.x, center.y, radius, 0.0, TAU);
    surface.close_path();
    surface.fill();
    surface.stroke();
}

/// Draw the play at its current time
pub fn draw_play(surface: &mut dyn Surface, play: &Play) {
    let settings = &play.settings;
    let field = &settings.field;
    let palette = &settings.palette;
    let now = play.current_time();
    let radius = field.px(PLAYER_RADIUS);

    draw_field(surface, settings);

    for player in &play.offence.players {
        let pos = player.path.position(now);
        if settings.show_lines {
            draw_trail(surface, settings, &player.path, now, pos);
        }
        draw_circle(
            surface,
            pos * field.scale_factor,
            radius,
            &palette.player_fill,
            &palette.player_outline,
        );
    }

    if settings.show_defence {
        for player in &play.defence.players {
            let pos = player.path.position(now);
            draw_circle(
                surface,
                pos * field.scale_factor,
                radius,
                &palette.defence_fill,
                &palette.player_outline,
            );
        }
    }

    // Offset so the disc sits beside its holder rather than on top
    let disc = play.disc.position(now) + Vec2::new(DISC_OFFSET, -DISC_OFFSET);
    draw_circle(
        surface,
        disc * field.scale_factor,
        radius,
        &palette.disc,
        &palette.disc,
    );
}
