//! Placeholder substitution for module templates
//!
//! Templates are plain text with three placeholder markers, each expanding
//! to one view of a [`LanguageDescriptor`](crate::LanguageDescriptor):
//!
//! ```text
//! {h}   human-readable name       C++
//! {l}   lowercase CMake token     cxx
//! {u}   uppercase CMake token     CXX
//! ```
//!
//! Literal braces are written doubled: `{{` renders as `{` and `}}` as `}`.
//! A brace that is neither doubled nor part of a marker is copied through
//! unchanged, so rendering never fails.
//!
//! # Example
//!
//! ```rust
//! use cmake_attribute_gen::{template, Language};
//!
//! let text = template::render("set(${{{u}_FLAGS}} \"{h}\")", &Language::Cxx.descriptor());
//! assert_eq!(text, "set(${CXX_FLAGS} \"C++\")");
//! ```

mod engine;

pub use engine::{render, Placeholder};
