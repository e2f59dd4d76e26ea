use serde::{Deserialize, Serialize};

/// Self-assessed skill proficiency, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum SkillLevel {
    #[serde(rename = "Beginner", alias = "Начинающий")]
    Beginner,
    #[default]
    #[serde(rename = "Intermediate", alias = "Средний")]
    Intermediate,
    #[serde(rename = "Advanced", alias = "Продвинутый")]
    Advanced,
    #[serde(rename = "Expert", alias = "Эксперт")]
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub const MAX_RANK: u8 = 4;

    /// 1-based position on the scale (beginner = 1, expert = 4).
    pub fn rank(self) -> u8 {
        match self {
            SkillLevel::Beginner => 1,
            SkillLevel::Intermediate => 2,
            SkillLevel::Advanced => 3,
            SkillLevel::Expert => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SkillCategory {
    #[default]
    #[serde(rename = "Technical", alias = "Технические")]
    Technical,
    #[serde(rename = "Soft Skills", alias = "Мягкие навыки")]
    Soft,
    #[serde(rename = "Programming Languages", alias = "Языки программирования")]
    ProgrammingLanguage,
    #[serde(rename = "Tools", alias = "Инструменты")]
    Tools,
    #[serde(rename = "Other", alias = "Другое")]
    Other,
}

impl SkillCategory {
    /// Declaration order; skill listings group by category in this order.
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::ProgrammingLanguage,
        SkillCategory::Tools,
        SkillCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SkillCategory::Technical => "Technical",
            SkillCategory::Soft => "Soft Skills",
            SkillCategory::ProgrammingLanguage => "Programming Languages",
            SkillCategory::Tools => "Tools",
            SkillCategory::Other => "Other",
        }
    }
}

/// Spoken-language proficiency, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LanguageLevel {
    #[serde(rename = "Basic", alias = "Базовый")]
    Basic,
    #[default]
    #[serde(rename = "Intermediate", alias = "Средний")]
    Intermediate,
    #[serde(rename = "Advanced", alias = "Продвинутый")]
    Advanced,
    #[serde(rename = "Native", alias = "Родной")]
    Native,
}

impl LanguageLevel {
    pub const ALL: [LanguageLevel; 4] = [
        LanguageLevel::Basic,
        LanguageLevel::Intermediate,
        LanguageLevel::Advanced,
        LanguageLevel::Native,
    ];

    pub const MAX_RANK: u8 = 4;

    /// 1-based position on the scale (basic = 1, native = 4).
    pub fn rank(self) -> u8 {
        match self {
            LanguageLevel::Basic => 1,
            LanguageLevel::Intermediate => 2,
            LanguageLevel::Advanced => 3,
            LanguageLevel::Native => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LanguageLevel::Basic => "Basic",
            LanguageLevel::Intermediate => "Intermediate",
            LanguageLevel::Advanced => "Advanced",
            LanguageLevel::Native => "Native",
        }
    }
}
