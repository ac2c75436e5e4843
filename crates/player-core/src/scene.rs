//! Scene-side state shared with the web frontend: model placement per
//! viewport width, the camera and damped orbit controls.
//!
//! These types avoid platform-specific APIs so they can be tested on the
//! host. The web frontend turns them into matrices each frame.

use crate::constants::*;
use glam::{Mat4, Quat, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Model scale and position for a viewport width bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub scale: f32,
    pub position: Vec3,
}

impl Placement {
    pub fn for_viewport_width(width: f32) -> Self {
        if width < NARROW_VIEWPORT_MAX {
            Self {
                scale: NARROW_MODEL_SCALE,
                position: Vec3::new(MODEL_OFFSET_X, NARROW_MODEL_LIFT, 0.0),
            }
        } else if width < MEDIUM_VIEWPORT_MAX {
            Self {
                scale: MEDIUM_MODEL_SCALE,
                position: Vec3::new(MODEL_OFFSET_X, 0.0, 0.0),
            }
        } else {
            Self {
                scale: WIDE_MODEL_SCALE,
                position: Vec3::new(MODEL_OFFSET_X, 0.0, 0.0),
            }
        }
    }

    /// Model matrix; the model is turned to face the camera.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            Quat::from_rotation_y(std::f32::consts::PI),
            self.position,
        )
    }
}

const POLAR_EPS: f32 = 1e-6;

/// Damped orbit around a target point.
///
/// Pointer deltas and wheel steps accumulate into pending rotation / dolly and
/// are applied by [`OrbitControls::update`], once per frame. Rotation decays
/// by the damping factor each update so motion glides to a stop.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar: f32,
    pub rotate_speed: f32,
    radius: f32,
    theta: f32, // azimuth around +Y, 0 looks down -Z from +Z
    phi: f32,   // polar angle from +Y
    pending_theta: f32,
    pending_phi: f32,
    pending_scale: f32,
}

impl Default for OrbitControls {
    fn default() -> Self {
        let mut controls = Self::looking_at(Vec3::from(CAMERA_EYE), Vec3::from(CAMERA_TARGET));
        controls.update();
        controls
    }
}

impl OrbitControls {
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let theta = offset.x.atan2(offset.z);
        let phi = if radius > 0.0 {
            (offset.y / radius).clamp(-1.0, 1.0).acos()
        } else {
            std::f32::consts::FRAC_PI_2
        };
        Self {
            target,
            damping: ORBIT_DAMPING,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
            max_polar: ORBIT_MAX_POLAR,
            rotate_speed: 1.0,
            radius,
            theta,
            phi,
            pending_theta: 0.0,
            pending_phi: 0.0,
            pending_scale: 1.0,
        }
    }

    pub fn distance(&self) -> f32 {
        self.radius
    }

    pub fn polar_angle(&self) -> f32 {
        self.phi
    }

    pub fn azimuth(&self) -> f32 {
        self.theta
    }

    /// Queue a rotation from a pointer drag of `dx`, `dy` pixels on a
    /// viewport `viewport_height` pixels tall. A drag across the full height
    /// turns the camera once around.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let tau = std::f32::consts::TAU;
        self.pending_theta -= tau * dx / h * self.rotate_speed;
        self.pending_phi -= tau * dy / h * self.rotate_speed;
    }

    /// Queue a dolly from a wheel event. Negative `delta_y` moves closer.
    pub fn dolly(&mut self, delta_y: f32) {
        if delta_y < 0.0 {
            self.pending_scale *= ORBIT_ZOOM_STEP;
        } else if delta_y > 0.0 {
            self.pending_scale /= ORBIT_ZOOM_STEP;
        }
    }

    /// Apply pending motion with damping and clamp angle and distance.
    /// Returns the camera eye position.
    pub fn update(&mut self) -> Vec3 {
        self.theta += self.pending_theta * self.damping;
        self.phi += self.pending_phi * self.damping;
        self.phi = self.phi.clamp(POLAR_EPS, self.max_polar);

        self.radius =
            (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);

        self.pending_theta *= 1.0 - self.damping;
        self.pending_phi *= 1.0 - self.damping;
        self.pending_scale = 1.0;
        self.eye()
    }

    pub fn eye(&self) -> Vec3 {
        let sin_phi = self.phi.sin();
        self.target
            + Vec3::new(
                self.radius * sin_phi * self.theta.sin(),
                self.radius * self.phi.cos(),
                self.radius * sin_phi * self.theta.cos(),
            )
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

/// Light setup matching the page: soft white ambient plus one directional key.
#[derive(Clone, Copy, Debug)]
pub struct Lighting {
    pub ambient: f32,
    pub directional: f32,
    /// Direction the light travels towards the origin, normalized.
    pub direction: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: AMBIENT_INTENSITY,
            directional: DIRECTIONAL_INTENSITY,
            direction: -Vec3::from(DIRECTIONAL_POSITION).normalize(),
        }
    }
}
