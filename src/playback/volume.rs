/// Volume slider state. Visibility is session-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeControl {
    visible: bool,
    level: f64,
}

impl VolumeControl {
    pub fn new(level: f64) -> Self {
        Self {
            visible: false,
            level: level.clamp(0.0, 1.0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Playback volume in `[0, 1]`.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Slider position in `[0, 100]`.
    pub fn slider_value(&self) -> f64 {
        self.level * 100.0
    }

    /// Apply a raw slider input. Returns the new playback volume, or `None` if the input is not a number.
    pub fn set_from_slider(&mut self, raw: &str) -> Option<f64> {
        let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
        self.level = (value / 100.0).clamp(0.0, 1.0);
        Some(self.level)
    }
}
