//! Persona - Expert role that shapes the system prompt

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// Expert persona selectable by the user
///
/// The table is fixed at compile time; order follows [`Persona::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Persona {
    #[default]
    #[serde(rename = "A")]
    EnglishTeacher,
    #[serde(rename = "B")]
    MarketingConsultant,
}

impl Persona {
    /// All personas in display order
    pub const ALL: [Persona; 2] = [Persona::EnglishTeacher, Persona::MarketingConsultant];

    /// Short selection key ("A" / "B")
    pub fn key(&self) -> &'static str {
        match self {
            Persona::EnglishTeacher => "A",
            Persona::MarketingConsultant => "B",
        }
    }

    /// Label shown next to the radio button
    pub fn label(&self) -> &'static str {
        match self {
            Persona::EnglishTeacher => "A：英語教師",
            Persona::MarketingConsultant => "B：マーケティングコンサルタント",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Persona::EnglishTeacher => "english-teacher",
            Persona::MarketingConsultant => "marketing-consultant",
        }
    }

    /// Role instruction injected into the system prompt
    pub fn instruction(&self) -> &'static str {
        match self {
            Persona::EnglishTeacher => concat!(
                "あなたは経験豊富な英語教師です。",
                "わかりやすい説明とシンプルな例文を用いて解説してください。",
                "ユーザーが日本語で入力した場合は日本語で説明しつつ、短い英語例文も示してください。",
            ),
            Persona::MarketingConsultant => concat!(
                "あなたはマーケティングの専門コンサルタントです。",
                "実用的で、段階的に実行できるアドバイスを簡潔に提供してください。",
            ),
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Persona {
    type Err = DomainError;

    /// Accepts the key, the full label, or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Persona::ALL
            .into_iter()
            .find(|p| {
                p.key().eq_ignore_ascii_case(needle)
                    || p.label() == needle
                    || p.slug().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| DomainError::UnknownPersona(s.to_string()))
    }
}
