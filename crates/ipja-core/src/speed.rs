//! Animation playback speed.

/// How fast the animation clock advances relative to wall time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to wall-clock elapsed time.
    pub fn factor(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Medium => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Medium,
            AnimationSpeed::Medium => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }

    /// Lowercase name used in the config file.
    pub fn as_name(self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Medium => "medium",
            AnimationSpeed::Fast => "fast",
        }
    }

    /// Parse a config-file name back into a speed.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "slow" => Some(AnimationSpeed::Slow),
            "medium" => Some(AnimationSpeed::Medium),
            "fast" => Some(AnimationSpeed::Fast),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for speed in [
            AnimationSpeed::Slow,
            AnimationSpeed::Medium,
            AnimationSpeed::Fast,
        ] {
            assert_eq!(AnimationSpeed::from_name(speed.as_name()), Some(speed));
        }
        assert_eq!(AnimationSpeed::from_name("warp"), None);
    }

    #[test]
    fn cycling_visits_all_speeds() {
        let start = AnimationSpeed::Slow;
        assert_eq!(start.next().next().next(), start);
    }
}
