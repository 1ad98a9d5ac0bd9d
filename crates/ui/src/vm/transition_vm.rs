use quiz_core::Level;

/// Interstitial shown when a new level begins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelTransitionVm {
    pub number: u8,
    pub title: String,
    pub name: String,
    pub description: String,
}

impl From<&Level> for LevelTransitionVm {
    fn from(level: &Level) -> Self {
        Self {
            number: level.number().value(),
            title: format!("Level {}", level.number()),
            name: level.name().to_owned(),
            description: level.description().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::test_support::content;

    #[test]
    fn maps_level_metadata() {
        let content = content();
        let vm = LevelTransitionVm::from(content.level_at(2).unwrap());
        assert_eq!(vm.number, 3);
        assert_eq!(vm.title, "Level 3");
        assert_eq!(vm.name, "Name 3");
        assert_eq!(vm.description, "Description 3");
    }
}
