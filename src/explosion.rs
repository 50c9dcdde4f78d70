/// Player explosion animation.
///
/// While `Exploding` the player can neither be hurt nor steered. The state
/// only knows about frame indices; pacing (how many ticks per frame) is the
/// caller's business.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExplosionState {
    #[default]
    Normal,
    Exploding { frame: u32 },
}

impl ExplosionState {
    pub fn is_exploding(&self) -> bool {
        matches!(self, Self::Exploding { .. })
    }

    /// Current animation frame, 0 when not exploding.
    pub fn frame(&self) -> u32 {
        match self {
            Self::Normal => 0,
            Self::Exploding { frame } => *frame,
        }
    }

    /// Start the animation. Returns `false` if it was already running.
    pub fn trigger(&mut self) -> bool {
        if self.is_exploding() {
            return false;
        }
        *self = Self::Exploding { frame: 0 };
        true
    }

    /// Step one frame. Returns `true` on the step that finishes the
    /// animation, i.e. once the frame index reaches `frame_count`.
    pub fn advance(&mut self, frame_count: u32) -> bool {
        match self {
            Self::Normal => false,
            Self::Exploding { frame } => {
                *frame += 1;
                if *frame >= frame_count {
                    *self = Self::Normal;
                    true
                } else {
                    false
                }
            }
        }
    }
}
