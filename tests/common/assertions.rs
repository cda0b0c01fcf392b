use approx::assert_relative_eq;
use flightmodel::components::{Aircraft, RigidBody};
use nalgebra::Vector3;

/// Assert that every state vector of a rigid body is finite
#[track_caller]
pub fn assert_rigid_body_valid(body: &RigidBody) {
    assert!(
        body.position.iter().all(|x| x.is_finite()),
        "Position is not finite: {:?}",
        body.position
    );
    assert!(
        body.velocity.iter().all(|x| x.is_finite()),
        "Velocity is not finite: {:?}",
        body.velocity
    );
    assert!(
        body.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity is not finite: {:?}",
        body.angular_velocity
    );
    assert_relative_eq!(body.orientation.quaternion().norm(), 1.0, epsilon = 1e-9);
}

/// Assert that an aircraft's body is valid and its throttle is in range
#[track_caller]
pub fn assert_aircraft_valid(aircraft: &Aircraft) {
    assert_rigid_body_valid(&aircraft.rigid_body);
    assert!(
        (0.0..=1.0).contains(&aircraft.throttle()),
        "Throttle out of range: {}",
        aircraft.throttle()
    );
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
