//! Presentation categories derived from raw API records.

use api::{Mission, Reward};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub fn from_points(points: i64) -> Self {
        match points {
            p if p <= 10 => Difficulty::Easy,
            p if p <= 15 => Difficulty::Medium,
            p if p <= 25 => Difficulty::Hard,
            _ => Difficulty::Extreme,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
            Difficulty::Extreme => "Extremo",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Difficulty::Easy => "difficulty easy",
            Difficulty::Medium => "difficulty medium",
            Difficulty::Hard => "difficulty hard",
            Difficulty::Extreme => "difficulty extreme",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissionStatus {
    Active,
    Completed,
}

impl MissionStatus {
    pub fn of(mission: &Mission) -> Self {
        if mission.is_active {
            MissionStatus::Active
        } else {
            MissionStatus::Completed
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardCategory {
    Experiences,
    Food,
    Learning,
    Entertainment,
    Wellness,
}

impl RewardCategory {
    pub const ALL: [RewardCategory; 5] = [
        RewardCategory::Experiences,
        RewardCategory::Food,
        RewardCategory::Learning,
        RewardCategory::Entertainment,
        RewardCategory::Wellness,
    ];

    /// Keyword match on the lowercased reward name; unmatched names fall back
    /// to experiences.
    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| name.contains(w));
        if has(&["folga", "home office", "férias", "experiência"]) {
            RewardCategory::Experiences
        } else if has(&["café", "almoço", "jantar", "food"]) {
            RewardCategory::Food
        } else if has(&["curso", "livro", "treinamento", "workshop"]) {
            RewardCategory::Learning
        } else if has(&["cinema", "show", "streaming", "ingresso"]) {
            RewardCategory::Entertainment
        } else if has(&["massagem", "spa", "saúde", "academia"]) {
            RewardCategory::Wellness
        } else {
            RewardCategory::Experiences
        }
    }

    pub fn of(reward: &Reward) -> Self {
        Self::from_name(&reward.name)
    }

    pub fn key(&self) -> &'static str {
        match self {
            RewardCategory::Experiences => "experiences",
            RewardCategory::Food => "food",
            RewardCategory::Learning => "learning",
            RewardCategory::Entertainment => "entertainment",
            RewardCategory::Wellness => "wellness",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RewardCategory::Experiences => "Experiências",
            RewardCategory::Food => "Alimentação",
            RewardCategory::Learning => "Aprendizado",
            RewardCategory::Entertainment => "Entretenimento",
            RewardCategory::Wellness => "Bem-estar",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_boundaries() {
        assert_eq!(Difficulty::from_points(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_points(10), Difficulty::Easy);
        assert_eq!(Difficulty::from_points(11), Difficulty::Medium);
        assert_eq!(Difficulty::from_points(15), Difficulty::Medium);
        assert_eq!(Difficulty::from_points(16), Difficulty::Hard);
        assert_eq!(Difficulty::from_points(25), Difficulty::Hard);
        assert_eq!(Difficulty::from_points(26), Difficulty::Extreme);
        assert_eq!(Difficulty::from_points(26).label(), "Extremo");
    }

    #[test]
    fn test_reward_category_keywords() {
        assert_eq!(RewardCategory::from_name("Day off: Folga"), RewardCategory::Experiences);
        assert_eq!(RewardCategory::from_name("Vale Almoço"), RewardCategory::Food);
        assert_eq!(RewardCategory::from_name("Curso de Rust"), RewardCategory::Learning);
        assert_eq!(RewardCategory::from_name("Ingresso de CINEMA"), RewardCategory::Entertainment);
        assert_eq!(RewardCategory::from_name("Sessão de massagem"), RewardCategory::Wellness);
        assert_eq!(RewardCategory::from_name("Caneca"), RewardCategory::Experiences);
    }

    #[test]
    fn test_category_first_match_wins() {
        // "home office" is checked before "café"
        assert_eq!(
            RewardCategory::from_name("Kit home office com café"),
            RewardCategory::Experiences
        );
    }

    #[test]
    fn test_category_key_roundtrip() {
        for category in RewardCategory::ALL {
            assert_eq!(RewardCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(RewardCategory::from_key("all"), None);
    }
}
