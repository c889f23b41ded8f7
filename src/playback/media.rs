/// The host media primitive the transport drives.
///
/// Every call is fire-and-forget: loading and seeking complete asynchronously
/// on the platform side and report back through media events.
pub trait MediaElement {
    fn set_source(&mut self, uri: &str);
    fn play(&mut self);
    fn pause(&mut self);
    fn is_paused(&self) -> bool;
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// NaN until metadata for the current source has loaded.
    fn duration(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
}

/// In-memory media used where no audio element exists (desktop renderer).
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Debug, Clone, PartialEq)]
pub struct DetachedMedia {
    source: Option<String>,
    paused: bool,
    current_time: f64,
    duration: f64,
    volume: f64,
}

impl Default for DetachedMedia {
    fn default() -> Self {
        Self {
            source: None,
            paused: true,
            current_time: 0.0,
            duration: f64::NAN,
            volume: 1.0,
        }
    }
}

#[cfg(test)]
impl DetachedMedia {
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

impl MediaElement for DetachedMedia {
    fn set_source(&mut self, uri: &str) {
        self.source = Some(uri.to_string());
        self.current_time = 0.0;
        self.duration = f64::NAN;
    }

    fn play(&mut self) {
        self.paused = false;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::MediaElement;

    /// Records every call so tests can assert on what the transport asked for.
    #[derive(Debug, Clone)]
    pub(crate) struct FakeMedia {
        pub sources: Vec<String>,
        pub play_calls: usize,
        pub paused: bool,
        pub current_time: f64,
        pub duration: f64,
        pub volume: f64,
        pub reject_play: bool,
    }

    impl Default for FakeMedia {
        fn default() -> Self {
            Self {
                sources: Vec::new(),
                play_calls: 0,
                paused: true,
                current_time: 0.0,
                duration: f64::NAN,
                volume: 1.0,
                reject_play: false,
            }
        }
    }

    impl FakeMedia {
        pub(crate) fn last_source(&self) -> Option<&str> {
            self.sources.last().map(String::as_str)
        }
    }

    impl MediaElement for FakeMedia {
        fn set_source(&mut self, uri: &str) {
            self.sources.push(uri.to_string());
            self.current_time = 0.0;
        }

        fn play(&mut self) {
            self.play_calls += 1;
            if !self.reject_play {
                self.paused = false;
            }
        }

        fn pause(&mut self) {
            self.paused = true;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn current_time(&self) -> f64 {
            self.current_time
        }

        fn set_current_time(&mut self, seconds: f64) {
            self.current_time = seconds;
        }

        fn duration(&self) -> f64 {
            self.duration
        }

        fn set_volume(&mut self, volume: f64) {
            self.volume = volume;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_media_resets_position_on_new_source() {
        let mut media = DetachedMedia::default();
        media.set_current_time(42.0);
        media.set_source("a.mp3");
        assert_eq!(media.source(), Some("a.mp3"));
        assert_eq!(media.current_time(), 0.0);
        assert!(media.duration().is_nan());
        assert!(media.is_paused());
    }
}
