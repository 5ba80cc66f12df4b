//! Regex-driven expansion of placeholders and brace escapes

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::language::LanguageDescriptor;

/// A placeholder marker recognised inside a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{h}`: the human-readable language name
    Human,
    /// `{l}`: the CMake token in lowercase
    Lower,
    /// `{u}`: the CMake token in uppercase
    Upper,
}

impl Placeholder {
    /// Every placeholder, in marker order
    pub const ALL: [Placeholder; 3] = [Placeholder::Human, Placeholder::Lower, Placeholder::Upper];

    /// The marker as it appears in template text
    pub fn marker(self) -> &'static str {
        match self {
            Placeholder::Human => "{h}",
            Placeholder::Lower => "{l}",
            Placeholder::Upper => "{u}",
        }
    }

    /// Placeholder for the letter between the braces of a marker
    fn from_letter(letter: &str) -> Option<Placeholder> {
        match letter {
            "h" => Some(Placeholder::Human),
            "l" => Some(Placeholder::Lower),
            "u" => Some(Placeholder::Upper),
            _ => None,
        }
    }
}

/// Escapes come first in the alternation so they win at the same offset
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{|\}\}|\{([hlu])\}").unwrap())
}

/// Expand every placeholder in `template` using `descriptor`
///
/// Doubled braces are checked before markers, so `{{h}}` produces the
/// literal text `{h}`. Braces that match neither are copied unchanged.
pub fn render(template: &str, descriptor: &LanguageDescriptor) -> String {
    token_pattern()
        .replace_all(template, |caps: &Captures| -> Cow<'static, str> {
            match caps.get(1).and_then(|m| Placeholder::from_letter(m.as_str())) {
                Some(placeholder) => descriptor.view(placeholder),
                None if &caps[0] == "{{" => Cow::Borrowed("{"),
                None => Cow::Borrowed("}"),
            }
        })
        .into_owned()
}
