use anyhow::{ensure, Result};

/// Viewport - pixel dimensions of the display area used for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Viewport {
    /// Create a viewport, rejecting degenerate dimensions
    pub fn new(width: u32, height: u32) -> Result<Self> {
        ensure!(
            width > 0 && height > 0,
            "viewport dimensions must be non-zero, got {}x{}",
            width,
            height
        );
        Ok(Self { width, height })
    }

    /// Width / height ratio used for the camera projection
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_dimensions() {
        let vp = Viewport::new(800, 600).unwrap();
        assert_eq!(vp.width, 800);
        assert_eq!(vp.height, 600);
    }

    #[test]
    fn test_new_rejects_zero_width() {
        assert!(Viewport::new(0, 600).is_err());
    }

    #[test]
    fn test_new_rejects_zero_height() {
        assert!(Viewport::new(800, 0).is_err());
    }

    #[test]
    fn test_aspect_ratio() {
        let vp = Viewport::new(800, 600).unwrap();
        assert_eq!(vp.aspect(), 800.0 / 600.0);
    }

    #[test]
    fn test_aspect_ratio_widescreen() {
        let vp = Viewport::new(1920, 1080).unwrap();
        assert_eq!(vp.aspect(), 1920.0 / 1080.0);
    }

    #[test]
    fn test_pixel_count() {
        let vp = Viewport::new(640, 480).unwrap();
        assert_eq!(vp.pixel_count(), 307200);
    }

    #[test]
    fn test_copy_semantics() {
        let vp1 = Viewport::new(1024, 768).unwrap();
        let vp2 = vp1;
        assert_eq!(vp1, vp2);
        assert_eq!(vp1.aspect(), vp2.aspect());
    }

    #[test]
    fn test_various_common_resolutions() {
        let resolutions = [(640, 480), (800, 600), (1024, 768), (1920, 1080)];

        for (width, height) in resolutions {
            let vp = Viewport::new(width, height).unwrap();
            assert_eq!(vp.aspect(), width as f32 / height as f32);
        }
    }
}
