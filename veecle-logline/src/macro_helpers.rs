//! Helpers used by the logging macros, not part of the public API.

/// Reduces the type name of a function item declared inside a function body to the name of the
/// enclosing function.
///
/// `type_name` yields paths like `app::worker::run::here` or, inside closures and async blocks,
/// `app::worker::run::{{closure}}::here`.
#[doc(hidden)]
pub fn enclosing_function(name: &'static str) -> &'static str {
    let mut name = name.strip_suffix("::here").unwrap_or(name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name.rsplit("::").next().unwrap_or(name)
}
