use approx::assert_relative_eq;
use flightmodel::components::{Aircraft, ControlInput, SurfaceRole};
use nalgebra::Vector3;

use crate::common::{
    assert_aircraft_valid, assert_vector_eq, trainer_at_rest, trainer_in_flight,
    weightless_trainer_in_flight, CRUISE_ALTITUDE,
};

const DT: f64 = 1.0 / 120.0;

fn torque_with(controls: ControlInput) -> Vector3<f64> {
    let mut aircraft = weightless_trainer_in_flight();
    aircraft.set_controls(controls);
    aircraft.accumulate_forces();
    aircraft.rigid_body.net_torque()
}

#[test]
fn test_at_rest_net_force_is_thrust() {
    let mut aircraft = trainer_at_rest();
    aircraft.set_throttle(0.5);
    aircraft.accumulate_forces();

    let expected = Vector3::new(aircraft.engine.thrust * 0.5, 0.0, 0.0);
    assert_vector_eq(&aircraft.rigid_body.net_force(), &expected, 1e-9);
    assert_vector_eq(&aircraft.rigid_body.net_torque(), &Vector3::zeros(), 1e-9);
}

#[test]
fn test_symmetric_flight_has_no_roll_or_yaw_torque() {
    let torque = torque_with(ControlInput::neutral());
    assert_relative_eq!(torque.x, 0.0, epsilon = 1e-6);
    assert_relative_eq!(torque.y, 0.0, epsilon = 1e-6);
}

#[test]
fn test_neutral_controls_leave_surfaces_undeflected() {
    let mut aircraft = weightless_trainer_in_flight();
    aircraft.accumulate_forces();
    for surface in aircraft.surfaces() {
        assert_eq!(surface.deflection, 0.0);
        assert_eq!(surface.effective_normal(), surface.normal());
    }
}

#[test]
fn test_control_mapping_deflections() {
    let mut aircraft = weightless_trainer_in_flight();
    aircraft.set_controls(ControlInput::new(0.5, -1.0, 0.4));
    aircraft.apply_controls();

    let deflection = |aircraft: &Aircraft, role| {
        aircraft
            .surface(role)
            .map(|s| s.deflection)
            .expect("role present")
    };
    assert_relative_eq!(deflection(&aircraft, SurfaceRole::LeftAileron), 7.5);
    assert_relative_eq!(deflection(&aircraft, SurfaceRole::RightAileron), -7.5);
    assert_relative_eq!(deflection(&aircraft, SurfaceRole::Elevator), -2.0);
    assert_relative_eq!(deflection(&aircraft, SurfaceRole::Rudder), -5.0);
}

#[test]
fn test_roll_input_produces_roll_torque() {
    let neutral = torque_with(ControlInput::neutral());
    let rolled = torque_with(ControlInput::new(1.0, 0.0, 0.0));
    assert!(rolled.x > neutral.x + 1.0, "roll torque {}", rolled.x);

    let opposite = torque_with(ControlInput::new(-1.0, 0.0, 0.0));
    assert_relative_eq!(opposite.x, -rolled.x, epsilon = 1e-6, max_relative = 1e-9);
}

#[test]
fn test_pitch_input_produces_nose_up_torque() {
    let neutral = torque_with(ControlInput::neutral());
    let pitched = torque_with(ControlInput::new(0.0, 0.0, 1.0));
    assert!(pitched.z > neutral.z, "{} <= {}", pitched.z, neutral.z);
}

#[test]
fn test_yaw_input_produces_yaw_torque() {
    let neutral = torque_with(ControlInput::neutral());
    let yawed = torque_with(ControlInput::new(0.0, 1.0, 0.0));
    assert!(yawed.y > neutral.y + 1.0, "yaw torque {}", yawed.y);
}

#[test]
fn test_identical_aircraft_step_identically() {
    let mut a = trainer_in_flight();
    let mut b = trainer_in_flight();
    for aircraft in [&mut a, &mut b] {
        aircraft.set_throttle(0.8);
        aircraft.set_controls(ControlInput::new(0.1, -0.2, 0.3));
    }

    for _ in 0..240 {
        a.update(DT);
        b.update(DT);
    }

    assert_eq!(a.rigid_body.position, b.rigid_body.position);
    assert_eq!(a.rigid_body.velocity, b.rigid_body.velocity);
    assert_eq!(a.rigid_body.orientation, b.rigid_body.orientation);
}

#[test]
fn test_one_second_of_cruise_stays_finite() {
    let mut aircraft = trainer_in_flight();
    aircraft.set_throttle(0.5);

    for _ in 0..120 {
        aircraft.update(DT);
    }

    assert_aircraft_valid(&aircraft);
    assert_relative_eq!(aircraft.elapsed(), 1.0, epsilon = 1e-9);
    assert!(aircraft.rigid_body.position.x > 50.0);
    assert!((aircraft.rigid_body.position.y - CRUISE_ALTITUDE).abs() < 100.0);
}

#[test]
fn test_full_throttle_accelerates_more_than_idle() {
    let run = |throttle: f64| {
        let mut aircraft = weightless_trainer_in_flight();
        aircraft.set_throttle(throttle);
        for _ in 0..60 {
            aircraft.update(DT);
        }
        aircraft.rigid_body.speed()
    };
    assert!(run(1.0) > run(0.0));
}

#[test]
fn test_gravity_pulls_a_dropped_aircraft_down() {
    let mut aircraft = trainer_at_rest();
    aircraft.set_throttle(0.0);
    aircraft.rigid_body.position.y = CRUISE_ALTITUDE;

    aircraft.update(DT);
    assert!(aircraft.rigid_body.velocity.y < 0.0);
    assert!(aircraft.rigid_body.position.y < CRUISE_ALTITUDE);
}

#[test]
fn test_zero_dt_round_trip() {
    let mut aircraft = trainer_in_flight();
    aircraft.rigid_body.angular_velocity = Vector3::new(0.1, 0.05, -0.02);
    aircraft.set_controls(ControlInput::new(1.0, 1.0, 1.0));
    let before = aircraft.pose();
    let omega = aircraft.rigid_body.angular_velocity;

    for _ in 0..10 {
        aircraft.update(0.0);
    }

    assert_eq!(aircraft.pose(), before);
    assert_eq!(aircraft.rigid_body.angular_velocity, omega);
    assert_eq!(aircraft.rigid_body.net_force(), Vector3::zeros());
}

#[test]
fn test_pose_mirrors_rigid_body() {
    let mut aircraft = trainer_in_flight();
    aircraft.update(DT);
    let pose = aircraft.pose();
    assert_eq!(pose.position, aircraft.rigid_body.position);
    assert_eq!(pose.orientation, aircraft.rigid_body.orientation);
    assert_eq!(pose.velocity, aircraft.rigid_body.velocity);
}
