//! CMake module that checks compiler support for a source attribute
//!
//! The rendered module defines two functions for one language:
//!
//! - `ru_get_<lang>_attribute_test_name(result attrib)` computes the cache
//!   variable name `HAVE_<LANG>_ATTRIBUTE_<ATTRIB>`.
//! - `ru_check_<lang>_attribute(attrib CODE <code>)` compiles `<code>` with
//!   attribute warnings promoted to errors and stores the result in that
//!   cache variable.
//!
//! It expects `Check<LANG>SourceCompiles` and `RuAdd<LANG>Flag` to be on the
//! CMake module path.

use std::io::Write;

use tracing::debug;

use crate::error::GenerateError;
use crate::language::Language;
use crate::template;

/// Template for the check-attribute module, see [`template`] for the syntax
pub const CHECK_ATTRIBUTE_TEMPLATE: &str = r#"# Copyright 2019 Google Inc
#
# Redistribution and use in source and binary forms, with or without
# modification, are permitted provided that the following conditions are met:
#
# 1. Redistributions of source code must retain the above copyright notice, this
#    list of conditions and the following disclaimer.
#
# 2. Redistributions in binary form must reproduce the above copyright notice,
#    this list of conditions and the following disclaimer in the documentation
#    and/or other materials provided with the distribution.
#
# 3. Neither the name of Google Inc. nor the names of its contributors may be
#    used to endorse or promote products derived from this software without
#    specific prior written permission.
#
# THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND
# ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED
# WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
# DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
# FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
# DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
# SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
# CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
# OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
# OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

include(Check{u}SourceCompiles)
include(RuAdd{u}Flag)

function(ru_get_{l}_attribute_test_name result attrib)
    string(TOUPPER "HAVE_{u}_ATTRIBUTE_${{attrib}}" name)
    set("${{result}}" "${{name}}" PARENT_SCOPE)
endfunction()

# Check if the {h} compiler supports a given attribute.
#
#   ru_check_{l}_attribute(<attrib> CODE <code>)
#
# Test if the {h} compiler supports <attrib>, and store
# the test result in internal cache variable HAVE_{u}_ATTRIBUTE_${{attrib_name}},
# where attrib_name is the result of converting "${{attrib}}"
# to uppercase and sanitizing it into a legal CMake variable name.
#
# The test respects the same global variables as check_{l}_source_compiles.
#
# Before checking if the compiler supports the attribute, the function
# first checks if the compiler supports the flags
# "-Werror=ignored-attribute" and "-Werror=unknown-attributes" with
# ru_check_{l}_flag, and adds each supported flag to
# CMAKE_REQUIRED_FLAGS at function-scope.
#
# Example:
#
#     If the compiler supports the "alloc_size" attribute, then
#
#         ru_check_{l}_attribute(alloc_size
#             CODE
#                 [=[
#                 void *f(int n) __attribute__((alloc_size(1)));
#                 void *g(int m, int n) __attribute__((alloc_size(1, 2)));
#                 int main(void) {{ return 0; }}
#                 ]=]
#         )
#
#     will set the cache variable
#
#         HAVE_{u}_ATTRIBUTE_ALLOC_SIZE:INTERNAL=1
#
#     Otherwise, it will set
#
#         HAVE_{u}_ATTRIBUTE_ALLOC_SIZE:INTERNAL=
#
function(ru_check_{l}_attribute attrib)
    cmake_parse_arguments(
        PARSE_ARGV 1
        "ARG" # prefix
        "" # options
        "CODE" # one-value-keywords
        "" # multi-value-keywords
    )

    if(NOT ARG_CODE)
        message(FATAL_ERROR "in ru_check_{l}_attribute: CODE keyword argument is missing")
    endif()

    if(ARG_UNPARSED_ARGUMENTS)
        message(FATAL_ERROR "in ru_check_{l}_attribute: found unknown arguments: ${{ARG_UNPARSED_ARGUMENTS}}")
    endif()

    ru_check_{l}_flag("-Werror=ignored-attributes")
    if(HAVE_{u}_FLAG_WERROR_IGNORED_ATTRIBUTES)
        string(APPEND CMAKE_REQUIRED_FLAGS " -Werror=ignored-attributes")
    endif()

    ru_check_{l}_flag("-Werror=unknown-attributes")
    if(HAVE_{u}_FLAG_WERROR_UNKNOWN_ATTRIBUTES)
        string(APPEND CMAKE_REQUIRED_FLAGS " -Werror=unknown-attributes")
    endif()

    ru_get_{l}_attribute_test_name(test_name "${{attrib}}")

    # Replace the messages from check_{l}_source_compiles with custom,
    # more helpful messages. But mimic the style of the original messages.
    set(CMAKE_REQUIRED_QUIET ON)
    set(msg "Performing Test ${{test_name}} for {h} attribute \"${{attrib}}\"")

    message(STATUS "${{msg}}")
    check_{l}_source_compiles("${{ARG_CODE}}" ${{test_name}})

    if(${{test_name}})
        message(STATUS "${{msg}} - Success")
    else()
        message(STATUS "${{msg}} - Failed")
    endif()
endfunction()
"#;

/// Render the check-attribute module for `lang`
///
/// # Example
///
/// ```rust
/// use cmake_attribute_gen::{cmake, Language};
///
/// let module = cmake::render_check_attribute_module(Language::Cxx);
/// assert!(module.contains("function(ru_check_cxx_attribute attrib)"));
/// ```
pub fn render_check_attribute_module(lang: Language) -> String {
    let descriptor = lang.descriptor();
    debug!(
        lang = %lang,
        human = descriptor.human(),
        token = descriptor.token(),
        "rendering check-attribute module"
    );
    template::render(CHECK_ATTRIBUTE_TEMPLATE, &descriptor)
}

/// Render the check-attribute module for `lang` and write it to `out`
pub fn write_check_attribute_module<W: Write>(
    lang: Language,
    out: &mut W,
) -> Result<(), GenerateError> {
    let module = render_check_attribute_module(lang);
    out.write_all(module.as_bytes())?;
    out.flush()?;
    debug!(bytes = module.len(), "module written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Placeholder;

    fn function_definitions(module: &str) -> Vec<&str> {
        module
            .lines()
            .filter(|line| line.starts_with("function("))
            .collect()
    }

    #[test]
    fn test_c_module_identifiers() {
        let module = render_check_attribute_module(Language::C);
        assert!(module.contains("include(CheckCSourceCompiles)"));
        assert!(module.contains("include(RuAddCFlag)"));
        assert!(module.contains("ru_check_c_attribute"));
        assert!(module.contains("HAVE_C_ATTRIBUTE_"));
        assert!(module.contains("check_c_source_compiles(\"${ARG_CODE}\" ${test_name})"));
        assert!(module.contains("for C attribute \\\"${attrib}\\\""));
    }

    #[test]
    fn test_cxx_module_identifiers() {
        let module = render_check_attribute_module(Language::Cxx);
        assert!(module.contains("include(CheckCXXSourceCompiles)"));
        assert!(module.contains("include(RuAddCXXFlag)"));
        assert!(module.contains("ru_check_cxx_attribute"));
        assert!(module.contains("HAVE_CXX_ATTRIBUTE_"));
        assert!(module.contains("ru_check_cxx_flag(\"-Werror=ignored-attributes\")"));
        assert!(module.contains("for C++ attribute"));
    }

    #[test]
    fn test_cxx_module_has_no_c_identifiers() {
        let module = render_check_attribute_module(Language::Cxx);
        assert!(!module.contains("ru_check_c_attribute"));
        assert!(!module.contains("HAVE_C_ATTRIBUTE_"));
    }

    #[test]
    fn test_two_function_definitions() {
        for lang in Language::ALL {
            let module = render_check_attribute_module(lang);
            let lower = lang.descriptor().lower();
            assert_eq!(
                function_definitions(&module),
                vec![
                    format!("function(ru_get_{}_attribute_test_name result attrib)", lower),
                    format!("function(ru_check_{}_attribute attrib)", lower),
                ]
            );
            assert_eq!(module.matches("endfunction()").count(), 2);
        }
    }

    #[test]
    fn test_no_unresolved_markers() {
        for lang in Language::ALL {
            let module = render_check_attribute_module(lang);
            for placeholder in Placeholder::ALL {
                assert!(
                    !module.contains(placeholder.marker()),
                    "{} left in {} module",
                    placeholder.marker(),
                    lang
                );
            }
            assert!(!module.contains("{{"));
            assert!(!module.contains("}}"));
        }
    }

    #[test]
    fn test_braces_unescaped() {
        let module = render_check_attribute_module(Language::C);
        assert!(module.contains("set(\"${result}\" \"${name}\" PARENT_SCOPE)"));
        assert!(module.contains("int main(void) { return 0; }"));
    }

    #[test]
    fn test_render_is_deterministic() {
        for lang in Language::ALL {
            assert_eq!(
                render_check_attribute_module(lang),
                render_check_attribute_module(lang)
            );
        }
    }

    #[test]
    fn test_module_layout() {
        let module = render_check_attribute_module(Language::C);
        assert!(module.starts_with("# Copyright 2019 Google Inc\n"));
        assert!(module.ends_with("endfunction()\n"));
        assert!(!module.ends_with("\n\n"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_io_error() {
        let result = write_check_attribute_module(Language::C, &mut ClosedPipe);
        match result {
            Err(GenerateError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_matches_render() {
        let mut buf = Vec::new();
        write_check_attribute_module(Language::Cxx, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            render_check_attribute_module(Language::Cxx)
        );
    }
}
