//! Scene selection.

/// The available animation scenes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SceneKind {
    /// Morphing point cloud cycling through glyph shapes.
    #[default]
    Convergence,
    /// Central core with orbiting hub nodes and satellites.
    Orbit,
    /// Full-screen fluid color-wave field.
    Fluid,
}

impl SceneKind {
    /// Cycle to the next scene.
    pub fn next(self) -> Self {
        match self {
            SceneKind::Convergence => SceneKind::Orbit,
            SceneKind::Orbit => SceneKind::Fluid,
            SceneKind::Fluid => SceneKind::Convergence,
        }
    }

    /// Lowercase name used in the config file.
    pub fn as_name(self) -> &'static str {
        match self {
            SceneKind::Convergence => "convergence",
            SceneKind::Orbit => "orbit",
            SceneKind::Fluid => "fluid",
        }
    }

    /// Parse a config-file name back into a scene.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "convergence" => Some(SceneKind::Convergence),
            "orbit" => Some(SceneKind::Orbit),
            "fluid" => Some(SceneKind::Fluid),
            _ => None,
        }
    }

    /// Human-readable label for the status line.
    pub fn label(self) -> &'static str {
        match self {
            SceneKind::Convergence => "Convergence",
            SceneKind::Orbit => "Orbit",
            SceneKind::Fluid => "Fluid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for scene in [SceneKind::Convergence, SceneKind::Orbit, SceneKind::Fluid] {
            assert_eq!(SceneKind::from_name(scene.as_name()), Some(scene));
        }
        assert_eq!(SceneKind::from_name("plasma"), None);
    }

    #[test]
    fn cycling_visits_all_scenes() {
        let start = SceneKind::Convergence;
        assert_eq!(start.next().next().next(), start);
    }
}
