/// Format seconds as `M:SS`, truncating fractions. Minutes are not padded.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Seek-slider state derived from one time-update.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub percent: f64,
    pub elapsed: String,
    /// `None` until the media reports a usable duration.
    pub total: Option<String>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            percent: 0.0,
            elapsed: format_time(0.0),
            total: None,
        }
    }
}

impl Progress {
    pub fn from_media(current_time: f64, duration: f64) -> Self {
        let known = has_duration(duration);
        let percent = if known {
            (current_time / duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            percent,
            elapsed: format_time(current_time),
            total: known.then(|| format_time(duration)),
        }
    }

    pub fn total_label(&self) -> &str {
        self.total.as_deref().unwrap_or("0:00")
    }
}

fn has_duration(duration: f64) -> bool {
    duration.is_finite() && duration > 0.0
}

/// Horizontal two-stop gradient, filled with `accent` up to `percent`.
pub fn slider_gradient(percent: f64, accent: &str, rest: &str) -> String {
    format!("linear-gradient(90deg, {accent} {percent}%, {rest} {percent}%)")
}

/// Playback position for a seek-slider value in `[0, 100]`.
pub fn seek_target(value: f64, duration: f64) -> Option<f64> {
    if !value.is_finite() || !has_duration(duration) {
        return None;
    }
    Some(value.clamp(0.0, 100.0) / 100.0 * duration)
}
