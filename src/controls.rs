use std::ops::RangeInclusive;

pub const ROTATION_SPEED_RANGE: RangeInclusive<f32> = -0.01..=0.01;
pub const OPACITY_RANGE: RangeInclusive<f32> = 0.1..=1.0;

/// Live-editable scene parameters, sampled by the render step each frame
///
/// The control panel writes these; nothing is pushed into the scene. The
/// render step reads whatever the current values are, so an edit takes
/// effect on the very next frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    pub rotation_speed: f32,
    pub opacity: f32,
    pub color: [f32; 3],
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            rotation_speed: 0.005,
            opacity: 0.6,
            color: [1.0, 0.0, 0.0],
        }
    }
}

impl ControlState {
    pub fn set_rotation_speed(&mut self, value: f32) {
        self.rotation_speed = value.clamp(*ROTATION_SPEED_RANGE.start(), *ROTATION_SPEED_RANGE.end());
    }

    pub fn set_opacity(&mut self, value: f32) {
        self.opacity = value.clamp(*OPACITY_RANGE.start(), *OPACITY_RANGE.end());
    }

    /// Re-apply the declared ranges after direct field edits (the panel
    /// binds the fields to widgets, then calls this)
    pub fn clamp_to_ranges(&mut self) {
        self.set_rotation_speed(self.rotation_speed);
        self.set_opacity(self.opacity);
        for channel in &mut self.color {
            *channel = channel.clamp(0.0, 1.0);
        }
    }
}
