//! CMake attribute check generator
//!
//! Renders CMake modules that test whether the C or C++ compiler supports a
//! given source attribute such as `alloc_size`.
//!
//! # Example
//!
//! ```rust
//! use cmake_attribute_gen::{render, Language};
//!
//! let module = render(Language::C);
//! assert!(module.contains("include(CheckCSourceCompiles)"));
//! assert!(module.contains("function(ru_check_c_attribute attrib)"));
//! ```

pub mod cmake;
pub mod error;
pub mod language;
pub mod template;

pub use cmake::{render_check_attribute_module, write_check_attribute_module};
pub use error::GenerateError;
pub use language::{Language, LanguageDescriptor};

/// Render the check-attribute module for `lang`
///
/// Shorthand for [`cmake::render_check_attribute_module`].
pub fn render(lang: Language) -> String {
    render_check_attribute_module(lang)
}
