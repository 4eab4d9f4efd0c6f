//! Tutorial content types and the static tutorial list.

use crate::error::CommerceError;
use crate::ids::TutorialId;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Difficulty tier, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Label shown on the difficulty badge.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Начальный",
            Difficulty::Intermediate => "Средний",
            Difficulty::Advanced => "Продвинутый",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" | "начальный" => Ok(Difficulty::Beginner),
            "intermediate" | "средний" => Ok(Difficulty::Intermediate),
            "advanced" | "продвинутый" => Ok(Difficulty::Advanced),
            _ => Err(CommerceError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// Tutorial format. Videos carry a duration label, articles a read-time label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TutorialKind {
    Video { duration: &'static str },
    Article { read_time: &'static str },
}

impl TutorialKind {
    /// Machine name of the kind ("video" or "article").
    pub fn as_str(&self) -> &'static str {
        match self {
            TutorialKind::Video { .. } => "video",
            TutorialKind::Article { .. } => "article",
        }
    }

    /// The duration or read-time label, whichever this kind carries.
    pub fn length_label(&self) -> &'static str {
        match *self {
            TutorialKind::Video { duration } => duration,
            TutorialKind::Article { read_time } => read_time,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, TutorialKind::Video { .. })
    }
}

/// A static educational content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tutorial {
    pub id: TutorialId,
    pub title: &'static str,
    #[serde(flatten)]
    pub kind: TutorialKind,
    pub description: &'static str,
    pub difficulty: Difficulty,
}

static TUTORIALS: [Tutorial; 6] = [
    Tutorial {
        id: TutorialId::new(1),
        title: "Спиннинговая ловля для начинающих",
        kind: TutorialKind::Video { duration: "15 мин" },
        description: "Основы спиннинговой рыбалки: выбор удилища, техника заброса и проводки",
        difficulty: Difficulty::Beginner,
    },
    Tutorial {
        id: TutorialId::new(2),
        title: "Как правильно вязать рыболовные узлы",
        kind: TutorialKind::Article { read_time: "8 мин" },
        description: "Подробное руководство по самым надёжным рыболовным узлам",
        difficulty: Difficulty::Beginner,
    },
    Tutorial {
        id: TutorialId::new(3),
        title: "Ловля щуки на джиг",
        kind: TutorialKind::Video { duration: "22 мин" },
        description: "Продвинутая техника джиговой ловли хищника в различных условиях",
        difficulty: Difficulty::Advanced,
    },
    Tutorial {
        id: TutorialId::new(4),
        title: "Секреты поплавочной рыбалки",
        kind: TutorialKind::Article { read_time: "12 мин" },
        description: "Тонкости настройки снасти и выбора прикормки для мирной рыбы",
        difficulty: Difficulty::Intermediate,
    },
    Tutorial {
        id: TutorialId::new(5),
        title: "Ловля на фидер: от А до Я",
        kind: TutorialKind::Video { duration: "28 мин" },
        description: "Полный гид по фидерной ловле: снасти, монтажи, техника",
        difficulty: Difficulty::Intermediate,
    },
    Tutorial {
        id: TutorialId::new(6),
        title: "Зимняя рыбалка: первый лёд",
        kind: TutorialKind::Article { read_time: "10 мин" },
        description: "Безопасность и эффективные методы ловли в начале зимнего сезона",
        difficulty: Difficulty::Beginner,
    },
];

/// All tutorials in display order.
pub fn tutorials() -> &'static [Tutorial] {
    &TUTORIALS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_label_matches_kind() {
        for t in tutorials() {
            match t.kind {
                TutorialKind::Video { duration } => assert_eq!(t.kind.length_label(), duration),
                TutorialKind::Article { read_time } => {
                    assert_eq!(t.kind.length_label(), read_time)
                }
            }
        }
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
    }

    #[test]
    fn test_difficulty_from_label() {
        assert_eq!("Средний".parse::<Difficulty>(), Ok(Difficulty::Intermediate));
        assert_eq!("advanced".parse::<Difficulty>(), Ok(Difficulty::Advanced));
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_tutorial_serializes_kind_inline() {
        let json = serde_json::to_value(tutorials()[0]).unwrap();
        assert_eq!(json["type"], "video");
        assert_eq!(json["duration"], "15 мин");
        assert!(json.get("read_time").is_none());
    }
}
