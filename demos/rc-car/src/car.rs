//! Kinematic model of the RC car.
//!
//! Heading is in degrees, 0 pointing along +x, growing counter-clockwise on
//! screen (a left turn). Screen Y grows downward, so the forward vector for
//! heading `h` is `(cos h, -sin h)`.

use glam::Vec2;
use crate::audio_effect::AudioEffect;

/// Full battery, in percent.
pub const FULL_BATTERY: f32 = 100.0;

/// Tunable constants of the car.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarParams {
    /// Forward acceleration while throttling (units/s²).
    pub acceleration: f32,
    /// Deceleration while braking against the direction of travel (units/s²).
    pub brake_deceleration: f32,
    /// Acceleration in reverse once stopped with brake held (units/s²).
    pub reverse_acceleration: f32,
    /// Coasting deceleration toward rest with no input (units/s²).
    pub drag: f32,
    /// Top forward speed (units/s).
    pub max_speed: f32,
    /// Top reverse speed, as a positive magnitude (units/s).
    pub max_reverse_speed: f32,
    /// Turn rate at top speed (degrees/s). Scales linearly with speed.
    pub turn_rate: f32,
    /// Battery drain while powered on (percent/s).
    pub idle_drain: f32,
    /// Extra battery drain at full throttle (percent/s).
    pub throttle_drain: f32,
    /// Low-battery warning level (percent).
    pub low_battery_threshold: f32,
}

impl Default for CarParams {
    fn default() -> Self {
        Self {
            acceleration: 4.0,
            brake_deceleration: 8.0,
            reverse_acceleration: 3.0,
            drag: 2.0,
            max_speed: 8.0,
            max_reverse_speed: 3.0,
            turn_rate: 180.0,
            idle_drain: 0.05,
            throttle_drain: 1.5,
            low_battery_threshold: 10.0,
        }
    }
}

/// Controls sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub accelerate: bool,
    pub brake: bool,
    pub steer_left: bool,
    pub steer_right: bool,
    pub horn: bool,
}

impl InputSnapshot {
    /// +1 for left, -1 for right, 0 for neither or both.
    fn steer(&self) -> f32 {
        match (self.steer_left, self.steer_right) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }

    fn throttle(&self) -> f32 {
        if self.accelerate || self.brake {
            1.0
        } else {
            0.0
        }
    }
}

/// Kinematic and battery state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleState {
    /// World units.
    pub position: Vec2,
    /// Degrees in [0, 360).
    pub heading: f32,
    /// Signed: forward positive, reverse negative.
    pub speed: f32,
    /// Percent in [0, 100].
    pub battery: f32,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
            speed: 0.0,
            battery: FULL_BATTERY,
        }
    }
}

pub struct Car {
    params: CarParams,
    state: VehicleState,
    horn_held: bool,
}

impl Car {
    /// A car at the origin, heading 0, at rest, fully charged.
    pub fn new(params: CarParams) -> Self {
        Self::with_state(params, VehicleState::default())
    }

    /// A car starting from an arbitrary state. Out-of-range values are brought
    /// back inside the invariants.
    pub fn with_state(params: CarParams, state: VehicleState) -> Self {
        let state = VehicleState {
            position: state.position,
            heading: wrap_degrees(state.heading),
            speed: state.speed.clamp(-params.max_reverse_speed, params.max_speed),
            battery: state.battery.clamp(0.0, FULL_BATTERY),
        };
        Self {
            params,
            state,
            horn_held: false,
        }
    }

    /// Advance the car by `dt` seconds under `input`.
    ///
    /// Returns the audio cues raised this tick; each fires once per crossing.
    /// Negative or non-finite `dt` counts as zero, and zero elapsed time
    /// changes nothing.
    pub fn command(&mut self, input: &InputSnapshot, dt: f32) -> impl Iterator<Item = AudioEffect> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        if dt == 0.0 {
            return [None, None, None, None].into_iter().flatten();
        }

        let before = self.state;

        self.state.speed = self.next_speed(input, dt);

        let drain = (self.params.idle_drain + self.params.throttle_drain * input.throttle()) * dt;
        self.state.battery = (self.state.battery - drain).clamp(0.0, FULL_BATTERY);
        if self.state.battery == 0.0 {
            self.state.speed = 0.0;
        }

        let speed_ratio = if self.params.max_speed > 0.0 {
            self.state.speed / self.params.max_speed
        } else {
            0.0
        };
        let turn = input.steer() * self.params.turn_rate * speed_ratio * dt;
        self.state.heading = wrap_degrees(self.state.heading + turn);

        self.state.position += heading_vector(self.state.heading) * self.state.speed * dt;

        let engine_start = (before.speed == 0.0 && input.accelerate && self.state.speed > 0.0)
            .then_some(AudioEffect::EngineStart);
        let horn = (input.horn && !self.horn_held && self.state.battery > 0.0).then_some(AudioEffect::Horn);
        let threshold = self.params.low_battery_threshold;
        let low = (before.battery > threshold && self.state.battery <= threshold && self.state.battery > 0.0)
            .then_some(AudioEffect::LowBattery);
        let empty = (before.battery > 0.0 && self.state.battery == 0.0).then_some(AudioEffect::BatteryEmpty);
        self.horn_held = input.horn;

        [engine_start, horn, low, empty].into_iter().flatten()
    }

    fn next_speed(&self, input: &InputSnapshot, dt: f32) -> f32 {
        let p = &self.params;
        let v = self.state.speed;
        let v = match (input.accelerate, input.brake) {
            (true, false) if v < 0.0 => (v + p.brake_deceleration * dt).min(0.0),
            (true, false) => v + p.acceleration * dt,
            (false, true) if v > 0.0 => (v - p.brake_deceleration * dt).max(0.0),
            (false, true) => v - p.reverse_acceleration * dt,
            _ if v > 0.0 => (v - p.drag * dt).max(0.0),
            _ => (v + p.drag * dt).min(0.0),
        };
        v.clamp(-p.max_reverse_speed, p.max_speed)
    }

    /// Current battery percentage (0–100).
    pub fn get_battery_level(&self) -> f32 {
        self.state.battery
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    /// Heading in degrees, [0, 360).
    pub fn heading(&self) -> f32 {
        self.state.heading
    }

    pub fn speed(&self) -> f32 {
        self.state.speed
    }

    pub fn state(&self) -> &VehicleState {
        &self.state
    }

    pub fn params(&self) -> &CarParams {
        &self.params
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new(CarParams::default())
    }
}

/// Unit forward vector for a heading in degrees (screen space, Y down).
pub fn heading_vector(heading: f32) -> Vec2 {
    let rad = heading.to_radians();
    Vec2::new(rad.cos(), -rad.sin())
}

/// Wrap an angle in degrees into [0, 360).
pub fn wrap_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACCEL: InputSnapshot = InputSnapshot {
        accelerate: true,
        brake: false,
        steer_left: false,
        steer_right: false,
        horn: false,
    };

    fn drive(car: &mut Car, input: InputSnapshot, dt: f32) -> Vec<AudioEffect> {
        car.command(&input, dt).collect()
    }

    #[test]
    fn starts_at_origin_with_full_battery() {
        let car = Car::default();
        assert_eq!(car.position(), Vec2::ZERO);
        assert_eq!(car.heading(), 0.0);
        assert_eq!(car.speed(), 0.0);
        assert_eq!(car.get_battery_level(), 100.0);
    }

    #[test]
    fn accelerating_straight_moves_along_x() {
        let mut car = Car::default();
        let mut last_x = car.position().x;
        let mut last_battery = car.get_battery_level();
        for _ in 0..5 {
            drive(&mut car, ACCEL, 1.0);
            assert!(car.position().x > last_x);
            assert!(car.get_battery_level() < last_battery);
            assert_eq!(car.heading(), 0.0);
            assert_eq!(car.position().y, 0.0);
            last_x = car.position().x;
            last_battery = car.get_battery_level();
        }
        assert_eq!(car.speed(), car.params().max_speed);
    }

    #[test]
    fn zero_dt_changes_nothing() {
        let mut car = Car::default();
        drive(&mut car, ACCEL, 0.5);
        let before = *car.state();
        let inputs = [
            ACCEL,
            InputSnapshot { brake: true, steer_right: true, ..Default::default() },
            InputSnapshot { horn: true, steer_left: true, ..Default::default() },
            InputSnapshot::default(),
        ];
        for input in inputs {
            assert!(drive(&mut car, input, 0.0).is_empty());
            assert_eq!(*car.state(), before);
        }
    }

    #[test]
    fn negative_dt_is_treated_as_zero() {
        let mut car = Car::default();
        let before = *car.state();
        assert!(drive(&mut car, ACCEL, -0.5).is_empty());
        assert!(drive(&mut car, ACCEL, f32::NEG_INFINITY).is_empty());
        assert_eq!(*car.state(), before);
    }

    #[test]
    fn steering_left_turns_heading_up_while_moving() {
        let mut car = Car::default();
        let input = InputSnapshot { steer_left: true, ..ACCEL };
        let mut last = car.heading();
        for _ in 0..10 {
            drive(&mut car, input, 0.1);
            assert!(car.speed() > 0.0);
            assert!(car.heading() > last, "heading {} did not grow past {}", car.heading(), last);
            last = car.heading();
        }
        // Nose turned counter-clockwise: moving up-screen.
        assert!(car.position().y < 0.0);
    }

    #[test]
    fn steering_at_rest_does_not_turn() {
        let mut car = Car::default();
        let input = InputSnapshot { steer_left: true, ..Default::default() };
        for _ in 0..5 {
            drive(&mut car, input, 0.5);
            assert_eq!(car.heading(), 0.0);
            assert_eq!(car.speed(), 0.0);
            assert_eq!(car.position(), Vec2::ZERO);
        }
    }

    #[test]
    fn steering_right_wraps_below_zero() {
        let mut car = Car::default();
        drive(&mut car, ACCEL, 2.0);
        drive(&mut car, InputSnapshot { steer_right: true, ..ACCEL }, 0.05);
        assert!(car.heading() > 300.0 && car.heading() < 360.0, "heading {}", car.heading());
    }

    #[test]
    fn heading_stays_canonical_under_long_turns() {
        let mut car = Car::default();
        for i in 0..500 {
            let input = InputSnapshot {
                steer_left: i % 7 != 0,
                steer_right: i % 7 == 0,
                ..ACCEL
            };
            drive(&mut car, input, 0.1);
            assert!((0.0..360.0).contains(&car.heading()), "heading {}", car.heading());
        }
    }

    #[test]
    fn horn_follows_engine_start_in_the_same_tick() {
        let mut car = Car::default();
        let input = InputSnapshot { horn: true, ..ACCEL };
        assert_eq!(
            drive(&mut car, input, 0.1),
            vec![AudioEffect::EngineStart, AudioEffect::Horn]
        );
    }

    #[test]
    fn zero_max_speed_keeps_heading_canonical() {
        let params = CarParams {
            max_speed: 0.0,
            ..CarParams::default()
        };
        let mut car = Car::new(params);
        drive(&mut car, InputSnapshot::default(), 0.1);
        assert_eq!(car.heading(), 0.0);

        let input = InputSnapshot {
            steer_left: true,
            ..ACCEL
        };
        drive(&mut car, input, 0.1);
        assert_eq!(car.heading(), 0.0);
        assert_eq!(car.speed(), 0.0);
    }

    #[test]
    fn speed_is_bounded_both_ways() {
        let mut car = Car::default();
        for _ in 0..20 {
            drive(&mut car, ACCEL, 1.0);
        }
        assert_eq!(car.speed(), car.params().max_speed);

        let reverse = InputSnapshot { brake: true, ..Default::default() };
        for _ in 0..20 {
            drive(&mut car, reverse, 1.0);
        }
        assert_eq!(car.speed(), -car.params().max_reverse_speed);
    }

    #[test]
    fn brake_stops_before_reversing() {
        let mut car = Car::default();
        drive(&mut car, ACCEL, 1.0);
        assert_eq!(car.speed(), 4.0);
        drive(&mut car, InputSnapshot { brake: true, ..Default::default() }, 1.0);
        assert_eq!(car.speed(), 0.0);
        drive(&mut car, InputSnapshot { brake: true, ..Default::default() }, 0.5);
        assert!(car.speed() < 0.0);
    }

    #[test]
    fn coasting_decays_to_rest_without_overshoot() {
        let mut car = Car::default();
        drive(&mut car, ACCEL, 1.0);
        for _ in 0..10 {
            drive(&mut car, InputSnapshot::default(), 0.5);
            assert!(car.speed() >= 0.0);
        }
        assert_eq!(car.speed(), 0.0);
    }

    #[test]
    fn battery_stays_in_range_and_never_rises() {
        let mut car = Car::default();
        let mut last = car.get_battery_level();
        for i in 0..400u32 {
            let input = InputSnapshot {
                accelerate: i % 3 != 0,
                brake: i % 5 == 0,
                steer_left: i % 2 == 0,
                steer_right: i % 11 == 0,
                horn: i % 13 == 0,
            };
            drive(&mut car, input, (i % 4) as f32 * 0.4);
            let level = car.get_battery_level();
            assert!((0.0..=100.0).contains(&level));
            assert!(level <= last);
            last = level;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn empty_battery_stops_the_car() {
        let mut car = Car::default();
        let mut ticks = 0;
        while car.get_battery_level() > 0.0 {
            drive(&mut car, ACCEL, 1.0);
            ticks += 1;
            assert!(ticks < 1_000, "battery never drained");
        }
        assert_eq!(car.get_battery_level(), 0.0);
        assert_eq!(car.speed(), 0.0);

        let parked = car.position();
        drive(&mut car, ACCEL, 1.0);
        assert_eq!(car.speed(), 0.0);
        assert_eq!(car.position(), parked);
        assert_eq!(car.get_battery_level(), 0.0);
    }

    #[test]
    fn draining_tick_does_not_move_the_car() {
        let params = CarParams::default();
        let mut car = Car::with_state(
            params,
            VehicleState { speed: 5.0, battery: 0.5, ..VehicleState::default() },
        );
        let effects = drive(&mut car, ACCEL, 1.0);
        assert_eq!(car.position(), Vec2::ZERO);
        assert_eq!(car.speed(), 0.0);
        assert_eq!(effects, vec![AudioEffect::BatteryEmpty]);
    }

    #[test]
    fn engine_start_fires_once_per_departure() {
        let mut car = Car::default();
        assert_eq!(drive(&mut car, ACCEL, 0.1), vec![AudioEffect::EngineStart]);
        assert!(drive(&mut car, ACCEL, 0.1).is_empty());
        assert!(drive(&mut car, ACCEL, 0.1).is_empty());

        // Coast back to rest, then pull away again.
        for _ in 0..10 {
            drive(&mut car, InputSnapshot::default(), 0.5);
        }
        assert_eq!(car.speed(), 0.0);
        assert_eq!(drive(&mut car, ACCEL, 0.1), vec![AudioEffect::EngineStart]);
    }

    #[test]
    fn low_battery_fires_once_when_crossing() {
        let mut car = Car::with_state(
            CarParams::default(),
            VehicleState { battery: 10.5, ..VehicleState::default() },
        );
        let mut lows = 0;
        for _ in 0..5 {
            lows += drive(&mut car, ACCEL, 0.2)
                .into_iter()
                .filter(|e| *e == AudioEffect::LowBattery)
                .count();
        }
        assert!(car.get_battery_level() < 10.0);
        assert_eq!(lows, 1);
    }

    #[test]
    fn battery_empty_fires_once() {
        let mut car = Car::with_state(
            CarParams::default(),
            VehicleState { battery: 1.0, ..VehicleState::default() },
        );
        let mut empties = 0;
        for _ in 0..5 {
            empties += drive(&mut car, ACCEL, 1.0)
                .into_iter()
                .filter(|e| *e == AudioEffect::BatteryEmpty)
                .count();
        }
        assert_eq!(empties, 1);
    }

    #[test]
    fn horn_sounds_on_press_not_while_held() {
        let mut car = Car::default();
        let honk = InputSnapshot { horn: true, ..Default::default() };
        assert_eq!(drive(&mut car, honk, 0.1), vec![AudioEffect::Horn]);
        assert!(drive(&mut car, honk, 0.1).is_empty());
        drive(&mut car, InputSnapshot::default(), 0.1);
        assert_eq!(drive(&mut car, honk, 0.1), vec![AudioEffect::Horn]);
    }

    #[test]
    fn with_state_enforces_invariants() {
        let car = Car::with_state(
            CarParams::default(),
            VehicleState { position: Vec2::ZERO, heading: -90.0, speed: 50.0, battery: 150.0 },
        );
        assert_eq!(car.heading(), 270.0);
        assert_eq!(car.speed(), 8.0);
        assert_eq!(car.get_battery_level(), 100.0);
    }

    #[test]
    fn wrap_degrees_handles_edges() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-30.0), 330.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        assert!(wrap_degrees(-1e-7) < 360.0);
    }

    #[test]
    fn heading_vector_points_up_screen_at_ninety() {
        let v = heading_vector(90.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y + 1.0).abs() < 1e-6);
    }
}
