use glam::Vec2;
use rc_engine::{
    EngineContext, Entity, Game, GameConfig, KeyboardState, RenderContext, SpriteComponent,
};

use crate::car::{Car, CarParams};
use crate::controls::{KeyBindings, DEFAULT_BINDINGS};
use crate::hud::{self, BATTERY_ICON};

pub const CAR_SPRITE: &str = "car";
const CAR_TAG: &str = "car";

// Used when the manifest does not list the sprite.
const CAR_SIZE: Vec2 = Vec2::new(50.0, 25.0);
const ICON_SIZE: Vec2 = Vec2::new(16.0, 12.0);

/// The RC car demo: one car, one battery gauge.
pub struct RcCar {
    car: Car,
    bindings: KeyBindings,
}

impl RcCar {
    pub fn new() -> Self {
        Self::with_params(CarParams::default())
    }

    pub fn with_params(params: CarParams) -> Self {
        Self {
            car: Car::new(params),
            bindings: DEFAULT_BINDINGS,
        }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    fn sync_car_entity(&self, ctx: &mut EngineContext) {
        let Some(entity) = ctx.scene.find_by_tag_mut(CAR_TAG) else {
            return;
        };
        entity.pos = self.car.position();
        entity.rotation = self.car.heading().to_radians();
    }
}

impl Default for RcCar {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for RcCar {
    fn config(&self) -> GameConfig {
        GameConfig {
            caption: String::from("RC Car"),
            window_width: 1280,
            window_height: 720,
            tick_rate: 60,
            pixels_per_unit: 32.0,
            clear_color: [50, 50, 50],
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let size = ctx.sprites.size(CAR_SPRITE).unwrap_or(CAR_SIZE);
        let id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(id)
                .with_tag(CAR_TAG)
                .with_pos(self.car.position())
                .with_rotation(self.car.heading().to_radians())
                .with_size(size)
                .with_sprite(SpriteComponent::named(CAR_SPRITE)),
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, keys: &KeyboardState, dt: f32) {
        let input = self.bindings.snapshot(keys);
        for effect in self.car.command(&input, dt) {
            log::debug!(
                "audio cue {:?} at battery {:.1}%",
                effect,
                self.car.get_battery_level()
            );
            ctx.emit_sound(effect.into());
        }
        self.sync_car_entity(ctx);
    }

    fn render(&self, ctx: &mut RenderContext) {
        let icon_size = ctx.sprites.size(BATTERY_ICON).unwrap_or(ICON_SIZE);
        hud::draw_battery(
            ctx.render_buffer,
            self.car.get_battery_level(),
            ctx.config.window_width as f32,
            icon_size,
        );
    }
}
