//! Prompt - System template filled with a persona instruction
//!
//! Pure domain entity without infrastructure dependencies.

use crate::domain::entities::ChatMessage;
use crate::domain::value_objects::Persona;

/// System prompt template. `{role_instructions}` is replaced by the persona instruction.
pub const SYSTEM_TEMPLATE: &str = "あなたは以下の役割を持って回答します。\n\
役割: {role_instructions}\n\
制約条件:\n\
- 回答は簡潔で具体的にしてください。\n\
- 手順を求められた場合は番号付きリストで示してください。\n\
- 不明な場合は短く確認質問をしてください。\n";

const ROLE_SLOT: &str = "{role_instructions}";

/// One prompt, built fresh for every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub persona_instruction: String,
    pub user_text: String,
}

impl PromptRequest {
    pub fn new(persona: Persona, user_text: impl Into<String>) -> Self {
        Self {
            persona_instruction: persona.instruction().to_string(),
            user_text: user_text.into(),
        }
    }

    /// Rendered system message
    pub fn system_prompt(&self) -> String {
        SYSTEM_TEMPLATE.replacen(ROLE_SLOT, &self.persona_instruction, 1)
    }

    /// System message followed by the user text, verbatim
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.system_prompt()),
            ChatMessage::user(self.user_text.clone()),
        ]
    }
}
