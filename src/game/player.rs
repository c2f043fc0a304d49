/// How a side is controlled: by keyboard input, or by an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerMode {
    Manual,
    Automatic,
}

impl PlayerMode {
    /// Get the other control mode.
    pub fn toggled(self) -> PlayerMode {
        match self {
            PlayerMode::Manual => PlayerMode::Automatic,
            PlayerMode::Automatic => PlayerMode::Manual,
        }
    }

    /// Get the mode name for display.
    pub fn name(self) -> &'static str {
        match self {
            PlayerMode::Manual => "manual",
            PlayerMode::Automatic => "automatic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled() {
        assert_eq!(PlayerMode::Manual.toggled(), PlayerMode::Automatic);
        assert_eq!(PlayerMode::Automatic.toggled(), PlayerMode::Manual);
    }

    #[test]
    fn test_mode_name() {
        assert_eq!(PlayerMode::Manual.name(), "manual");
        assert_eq!(PlayerMode::Automatic.name(), "automatic");
    }
}
