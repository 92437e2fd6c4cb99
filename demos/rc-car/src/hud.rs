use glam::Vec2;
use rc_engine::{RectInstance, RenderBuffer, SpriteInstance};

pub const BATTERY_WIDTH: f32 = 100.0;
pub const BATTERY_HEIGHT: f32 = 20.0;
/// Gap between the gauge and the right window edge.
pub const BATTERY_MARGIN: f32 = 100.0;
pub const BATTERY_Y: f32 = 10.0;
pub const BATTERY_ICON: &str = "battery";

const BLACK: [u8; 4] = [0, 0, 0, 255];
const GREEN: [u8; 4] = [0, 0xff, 0, 255];
const YELLOW: [u8; 4] = [0xff, 0xff, 0, 255];
const RED: [u8; 4] = [0xff, 0, 0, 255];

/// Gauge colour band: green above 30%, yellow above 10%, red otherwise.
pub fn battery_color(level: f32) -> [u8; 4] {
    if level > 30.0 {
        GREEN
    } else if level > 10.0 {
        YELLOW
    } else {
        RED
    }
}

/// Push the battery gauge: black frame, filled bar, icon to its left.
pub fn draw_battery(buffer: &mut RenderBuffer, level: f32, window_width: f32, icon_size: Vec2) {
    let x = window_width - BATTERY_WIDTH - BATTERY_MARGIN;
    let y = BATTERY_Y;
    let level = level.clamp(0.0, 100.0);

    buffer.push_rect(RectInstance {
        x: x - 1.0,
        y: y - 1.0,
        width: BATTERY_WIDTH + 2.0,
        height: BATTERY_HEIGHT + 2.0,
        color: BLACK,
    });

    let fill = BATTERY_WIDTH / 100.0 * level;
    if fill > 0.0 {
        buffer.push_rect(RectInstance {
            x,
            y,
            width: fill,
            height: BATTERY_HEIGHT,
            color: battery_color(level),
        });
    }

    // Icon top-left sits at (x - 25, y + 5).
    buffer.push_sprite(SpriteInstance {
        sprite: BATTERY_ICON.to_string(),
        x: x - 25.0 + icon_size.x / 2.0,
        y: y + 5.0 + icon_size.y / 2.0,
        width: icon_size.x,
        height: icon_size.y,
        rotation: 0.0,
        alpha: 1.0,
    });
}
