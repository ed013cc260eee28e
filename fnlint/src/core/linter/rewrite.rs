// src/core/linter/rewrite.rs
use crate::core::config::Config;
use crate::models::{CharacterClass, ReplacementPolicy};

/// Rewrites a base filename according to the configured replacement
/// policies.
///
/// Classes are applied in their fixed order, each non-`Off` class
/// replacing every occurrence of each of its characters in the working
/// string before the next class runs. Later classes therefore see text
/// introduced by earlier replacements. Pure and total: a name with no
/// troublesome characters (or an all-`Off` config) comes back unchanged,
/// and a name consisting only of stripped characters comes back empty.
#[must_use]
pub fn rewrite(base_name: &str, config: &Config) -> String {
    let mut name = base_name.to_owned();

    for class in CharacterClass::ALL {
        let policy = config.get(class);
        if policy == ReplacementPolicy::Off {
            continue;
        }
        for &c in class.chars() {
            name = name.replace(c, policy.replacement());
        }
    }

    name
}
