#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlayState {
    #[default]
    Paused,
    Playing,
}

impl PlayState {
    pub fn toggled(self) -> Self {
        match self {
            PlayState::Paused => PlayState::Playing,
            PlayState::Playing => PlayState::Paused,
        }
    }

    pub fn is_playing(self) -> bool {
        self == PlayState::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused_and_alternates() {
        let s = PlayState::default();
        assert!(!s.is_playing());
        assert!(s.toggled().is_playing());
        assert_eq!(s.toggled().toggled(), PlayState::Paused);
    }
}
