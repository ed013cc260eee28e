// src/core/config.rs
mod store;

pub use store::{CONFIG_FILE_NAME, load_config, save_config};

use serde::{Deserialize, Serialize};

use crate::models::{CharacterClass, ReplacementPolicy};

/// The active replacement policy for every character class.
///
/// One independent policy per class, all defaulting to `Off`. Missing keys
/// in the persisted form fall back to the default, so classes added in
/// later versions stay `Off` for users with an older config file. Unknown
/// keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub square_brackets: ReplacementPolicy,
    pub number_sign: ReplacementPolicy,
    pub caret: ReplacementPolicy,
    pub pipe: ReplacementPolicy,
    pub colon: ReplacementPolicy,
    pub asterisk: ReplacementPolicy,
    pub question_mark: ReplacementPolicy,
    pub double_quote: ReplacementPolicy,
    pub angle_brackets: ReplacementPolicy,
}

impl Config {
    #[must_use]
    pub const fn get(&self, class: CharacterClass) -> ReplacementPolicy {
        match class {
            CharacterClass::SquareBrackets => self.square_brackets,
            CharacterClass::NumberSign => self.number_sign,
            CharacterClass::Caret => self.caret,
            CharacterClass::Pipe => self.pipe,
            CharacterClass::Colon => self.colon,
            CharacterClass::Asterisk => self.asterisk,
            CharacterClass::QuestionMark => self.question_mark,
            CharacterClass::DoubleQuote => self.double_quote,
            CharacterClass::AngleBrackets => self.angle_brackets,
        }
    }

    pub fn set(&mut self, class: CharacterClass, policy: ReplacementPolicy) {
        match class {
            CharacterClass::SquareBrackets => self.square_brackets = policy,
            CharacterClass::NumberSign => self.number_sign = policy,
            CharacterClass::Caret => self.caret = policy,
            CharacterClass::Pipe => self.pipe = policy,
            CharacterClass::Colon => self.colon = policy,
            CharacterClass::Asterisk => self.asterisk = policy,
            CharacterClass::QuestionMark => self.question_mark = policy,
            CharacterClass::DoubleQuote => self.double_quote = policy,
            CharacterClass::AngleBrackets => self.angle_brackets = policy,
        }
    }
}
