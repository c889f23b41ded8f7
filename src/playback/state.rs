use crate::error::PlayerError;
use crate::settings::EndedShuffle;
use rand::Rng;

/// Whether the media is currently playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Paused,
    Playing,
}

/// How the player picks the next track, derived from the shuffle and repeat flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMode {
    Sequential,
    Shuffle,
    Repeat,
    RepeatShuffle,
}

/// What the transport must do with the media after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Load the track at this index and play it.
    Load(usize),
    /// Reload the current track and play it from the start.
    Restart(usize),
}

impl Step {
    #[cfg(test)]
    pub fn index(self) -> usize {
        match self {
            Step::Load(index) | Step::Restart(index) => index,
        }
    }
}

/// Which track is current and how selection advances.
///
/// `current_index` always points into the original list, never into a
/// filtered view. Every transition takes the playlist length and returns
/// `None` on an empty playlist without touching the state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaybackState {
    current_index: usize,
    shuffle: bool,
    repeat: bool,
    status: Status,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_shuffling(&self) -> bool {
        self.shuffle
    }

    pub fn is_repeating(&self) -> bool {
        self.repeat
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == Status::Playing
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    pub fn mode(&self) -> PlaybackMode {
        match (self.repeat, self.shuffle) {
            (false, false) => PlaybackMode::Sequential,
            (false, true) => PlaybackMode::Shuffle,
            (true, false) => PlaybackMode::Repeat,
            (true, true) => PlaybackMode::RepeatShuffle,
        }
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    /// Next button. Shuffle never lands on the current track when there is another one.
    pub fn next<R: Rng + ?Sized>(&mut self, len: usize, rng: &mut R) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = match self.mode() {
            PlaybackMode::Shuffle | PlaybackMode::RepeatShuffle => {
                random_other_index(len, self.current_index, rng)
            }
            PlaybackMode::Sequential | PlaybackMode::Repeat => (self.current_index + 1) % len,
        };
        Some(self.go_to(index))
    }

    /// Previous button. Always sequential, shuffle is ignored.
    pub fn previous(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = if self.current_index > 0 {
            self.current_index - 1
        } else {
            len - 1
        };
        Some(self.go_to(index))
    }

    /// Natural end of the current track. Repeat wins over shuffle.
    pub fn ended<R: Rng + ?Sized>(
        &mut self,
        len: usize,
        policy: EndedShuffle,
        rng: &mut R,
    ) -> Option<Step> {
        if len == 0 {
            return None;
        }
        let step = match self.mode() {
            PlaybackMode::Repeat | PlaybackMode::RepeatShuffle => {
                Step::Restart(self.go_to(self.current_index))
            }
            PlaybackMode::Shuffle => {
                let index = match policy {
                    EndedShuffle::AllowRepeat => rng.gen_range(0..len),
                    EndedShuffle::AvoidRepeat => random_other_index(len, self.current_index, rng),
                };
                Step::Load(self.go_to(index))
            }
            PlaybackMode::Sequential => Step::Load(self.go_to((self.current_index + 1) % len)),
        };
        Some(step)
    }

    /// Row activation. `index` must already be resolved to the original list.
    pub fn select(&mut self, index: usize, len: usize) -> Result<usize, PlayerError> {
        if len == 0 {
            return Err(PlayerError::EmptyPlaylist);
        }
        if index >= len {
            return Err(PlayerError::IndexOutOfRange { index, len });
        }
        Ok(self.go_to(index))
    }

    fn go_to(&mut self, index: usize) -> usize {
        self.current_index = index;
        self.status = Status::Playing;
        index
    }
}

/// Uniform pick from `[0, len)` excluding `current`. With a single track it returns `current`.
pub fn random_other_index<R: Rng + ?Sized>(len: usize, current: usize, rng: &mut R) -> usize {
    if len <= 1 {
        return current;
    }
    let pick = rng.gen_range(0..len - 1);
    if pick >= current {
        pick + 1
    } else {
        pick
    }
}
