//! Language selectors and the identifiers derived from them
//!
//! Each supported language maps to a [`LanguageDescriptor`] holding a
//! display name and the token CMake uses for the language (`C`, `CXX`).

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::GenerateError;
use crate::template::Placeholder;

/// A language whose compiler can be probed for attribute support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    /// The C language (`c`)
    #[value(name = "c")]
    C,
    /// The C++ language (`c++`)
    #[value(name = "c++")]
    Cxx,
}

impl Language {
    /// All supported languages, in selector order
    pub const ALL: [Language; 2] = [Language::C, Language::Cxx];

    /// The command-line spelling of this language
    pub fn selector(self) -> &'static str {
        match self {
            Language::C => "c",
            Language::Cxx => "c++",
        }
    }

    /// The identifiers substituted into templates for this language
    pub fn descriptor(self) -> LanguageDescriptor {
        match self {
            Language::C => LanguageDescriptor::new("C", "C"),
            Language::Cxx => LanguageDescriptor::new("C++", "CXX"),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for Language {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.selector() == s)
            .ok_or_else(|| GenerateError::UnknownLanguage(s.to_string()))
    }
}

/// Display name and CMake token for one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDescriptor {
    human: &'static str,
    token: &'static str,
}

impl LanguageDescriptor {
    /// Create a descriptor from a display name and a CMake token
    pub const fn new(human: &'static str, token: &'static str) -> Self {
        Self { human, token }
    }

    /// Display name, e.g. `C++`
    pub fn human(&self) -> &'static str {
        self.human
    }

    /// CMake token as given, e.g. `CXX`
    pub fn token(&self) -> &'static str {
        self.token
    }

    /// CMake token in lowercase, e.g. `cxx`
    pub fn lower(&self) -> String {
        self.token.to_ascii_lowercase()
    }

    /// CMake token in uppercase, e.g. `CXX`
    pub fn upper(&self) -> String {
        self.token.to_ascii_uppercase()
    }

    /// The text a placeholder expands to for this language
    pub fn view(&self, placeholder: Placeholder) -> Cow<'static, str> {
        match placeholder {
            Placeholder::Human => Cow::Borrowed(self.human),
            Placeholder::Lower => Cow::Owned(self.lower()),
            Placeholder::Upper => Cow::Owned(self.upper()),
        }
    }
}
