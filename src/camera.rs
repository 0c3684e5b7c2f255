use glam::{Mat4, Vec3};

use crate::viewport::Viewport;

pub const DEFAULT_FOV_Y_DEG: f32 = 45.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Hand-tuned vantage point shared by all scene variants
const DEFAULT_POSITION: Vec3 = Vec3::new(15.0, 16.0, 13.0);

/// Perspective camera looking at a fixed target
///
/// Created once at initialization; only the aspect ratio changes afterwards,
/// driven by the resize handler.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_deg: f32,
    pub near: f32,
    pub far: f32,
    aspect: f32,
}

impl Camera {
    /// Camera at the default vantage point, aimed at the scene origin
    pub fn new(viewport: Viewport) -> Self {
        Self {
            position: DEFAULT_POSITION,
            target: Vec3::ZERO,
            fov_y_deg: DEFAULT_FOV_Y_DEG,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            aspect: viewport.aspect(),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Recompute the projection aspect ratio; called by the resize handler
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Aim the camera at a new target
    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(w: u32, h: u32) -> Viewport {
        Viewport::new(w, h).unwrap()
    }

    #[test]
    fn test_new_uses_viewport_aspect() {
        let camera = Camera::new(viewport(800, 600));
        assert_eq!(camera.aspect(), 800.0 / 600.0);
    }

    #[test]
    fn test_new_default_projection_parameters() {
        let camera = Camera::new(viewport(800, 600));
        assert_eq!(camera.fov_y_deg, 45.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn test_new_looks_at_origin() {
        let camera = Camera::new(viewport(800, 600));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.position, Vec3::new(15.0, 16.0, 13.0));
    }

    #[test]
    fn test_set_aspect() {
        let mut camera = Camera::new(viewport(800, 600));
        camera.set_aspect(1024.0 / 768.0);
        assert_eq!(camera.aspect(), 1024.0 / 768.0);
    }

    #[test]
    fn test_forward_points_at_target() {
        let camera = Camera::new(viewport(800, 600));
        let expected = (Vec3::ZERO - Vec3::new(15.0, 16.0, 13.0)).normalize();
        assert!((camera.forward() - expected).length() < 1e-6);
    }

    #[test]
    fn test_view_matrix_maps_target_in_front() {
        let camera = Camera::new(viewport(800, 600));
        let target_view = camera.view_matrix().transform_point3(camera.target);
        // Right-handed view space looks down -Z
        assert!(target_view.z < 0.0);
    }

    #[test]
    fn test_view_projection_is_finite() {
        let camera = Camera::new(viewport(1920, 1080));
        let vp = camera.view_projection();
        for value in vp.to_cols_array() {
            assert!(value.is_finite());
        }
    }
}
