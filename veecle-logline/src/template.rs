//! Message templates with positional `{}` placeholders.
//!
//! A template is plain text in which every unescaped `{}` pair is replaced by the next value, in
//! call order. `{{` and `}}` produce a literal `{` and `}`. There are no named or indexed
//! placeholders and no format specifiers.
//!
//! `{{` is consumed whole, a third `{` starts over. Closing braces chain instead: every `}`
//! right after a `}`, including the one ending a placeholder, is literal, so `{}}}` renders the
//! value followed by `}}`.
//!
//! Validation and substitution share the same scanner, so the number of placeholders counted by
//! [`placeholder_count`] is exactly the number of values [`render`] consumes.
//!
//! # Examples
//!
//! ```rust
//! use veecle_logline::template::{self, Template};
//!
//! assert_eq!(template::placeholder_count("{} of {} ({{done}})"), 2);
//! assert_eq!(template::render("{} of {}", &["3", "7"]).unwrap(), "3 of 7");
//!
//! const PROGRESS: Template<'static> = Template::checked("{} of {} ({{done}})", 2);
//! assert_eq!(PROGRESS.render(&["7", "7"]).unwrap(), "7 of 7 ({done})");
//! ```

use crate::error::{FormatError, TemplateError};

/// A brace seen in the previous position whose meaning depends on the next character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Pending {
    Nothing,
    Open,
    Close,
    /// A `}` that was already emitted or closed a placeholder; a following `}` is still literal.
    Closed,
}

impl Pending {
    /// The literal brace to emit when no following character completes the pending one.
    const fn flush(self) -> Option<char> {
        match self {
            Pending::Nothing | Pending::Closed => None,
            Pending::Open => Some('{'),
            Pending::Close => Some('}'),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Action {
    /// Keep the current brace pending.
    Hold,
    /// Emit the current character unchanged.
    Copy,
    /// Emit an escaped literal brace.
    Literal(char),
    /// Emit the next value.
    Placeholder,
}

#[derive(Copy, Clone, Debug)]
struct Transition {
    /// A previously pending brace that turned out to be literal, emitted before `action`.
    flush: Option<char>,
    action: Action,
    pending: Pending,
}

const fn step(pending: Pending, current: char) -> Transition {
    match (pending, current) {
        // `{{` is consumed whole so a third `{` starts fresh.
        (Pending::Open, '{') => Transition {
            flush: None,
            action: Action::Literal('{'),
            pending: Pending::Nothing,
        },
        // Closing braces chain: every `}` after a `}` is literal.
        (Pending::Close | Pending::Closed, '}') => Transition {
            flush: None,
            action: Action::Literal('}'),
            pending: Pending::Closed,
        },
        (Pending::Open, '}') => Transition {
            flush: None,
            action: Action::Placeholder,
            pending: Pending::Closed,
        },
        (_, '{') => Transition {
            flush: pending.flush(),
            action: Action::Hold,
            pending: Pending::Open,
        },
        (_, '}') => Transition {
            flush: pending.flush(),
            action: Action::Hold,
            pending: Pending::Close,
        },
        (_, _) => Transition {
            flush: pending.flush(),
            action: Action::Copy,
            pending: Pending::Nothing,
        },
    }
}

/// Counts the unescaped `{}` placeholders in `template`.
///
/// Escaped braces (`{{`, `}}`) and lone braces are not placeholders.
pub const fn placeholder_count(template: &str) -> usize {
    // Braces are ASCII, so scanning bytes finds the same placeholders as scanning chars.
    let bytes = template.as_bytes();
    let mut pending = Pending::Nothing;
    let mut count = 0;
    let mut index = 0;
    while index < bytes.len() {
        let transition = step(pending, bytes[index] as char);
        if let Action::Placeholder = transition.action {
            count += 1;
        }
        pending = transition.pending;
        index += 1;
    }
    count
}

/// Returns whether `template` has exactly `argument_count` placeholders.
pub const fn validate(template: &str, argument_count: usize) -> bool {
    placeholder_count(template) == argument_count
}

/// Substitutes `values` into `template` in order.
///
/// Values beyond the last placeholder are ignored. Callers are expected to have checked the
/// template with [`validate`] first; running out of values is reported as
/// [`FormatError::MissingArgument`].
pub fn render<S>(template: &str, values: &[S]) -> Result<String, FormatError>
where
    S: AsRef<str>,
{
    let capacity = template.len() + values.iter().map(|value| value.as_ref().len()).sum::<usize>();
    let mut output = String::with_capacity(capacity);
    let mut pending = Pending::Nothing;
    let mut next = 0;

    for current in template.chars() {
        let transition = step(pending, current);
        pending = transition.pending;

        if let Some(brace) = transition.flush {
            output.push(brace);
        }

        match transition.action {
            Action::Hold => {}
            Action::Copy => output.push(current),
            Action::Literal(brace) => output.push(brace),
            Action::Placeholder => {
                let value = values.get(next).ok_or(FormatError::MissingArgument {
                    index: next,
                    available: values.len(),
                })?;
                output.push_str(value.as_ref());
                next += 1;
            }
        }
    }

    if let Some(brace) = pending.flush() {
        output.push(brace);
    }

    Ok(output)
}

/// A template whose placeholder count has been checked against an argument count.
///
/// Build one with [`Template::new`] at runtime or with [`Template::checked`] in a `const` item to
/// have the compiler reject a mismatch. The logging macros do the latter for every call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Template<'a> {
    text: &'a str,
    placeholders: usize,
}

impl<'a> Template<'a> {
    /// Checks that `text` has exactly `arguments` placeholders.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use veecle_logline::template::Template;
    /// use veecle_logline::TemplateError;
    ///
    /// assert!(Template::new("{} -> {}", 2).is_ok());
    /// assert_eq!(
    ///     Template::new("{} -> {}", 1),
    ///     Err(TemplateError::ArgumentCountMismatch { placeholders: 2, arguments: 1 }),
    /// );
    /// ```
    pub fn new(text: &'a str, arguments: usize) -> Result<Self, TemplateError> {
        let placeholders = placeholder_count(text);
        if placeholders != arguments {
            return Err(TemplateError::ArgumentCountMismatch {
                placeholders,
                arguments,
            });
        }
        Ok(Self { text, placeholders })
    }

    /// `const` counterpart of [`Template::new`].
    ///
    /// # Panics
    ///
    /// Panics if the counts differ. When evaluated in a `const` item this is a compile error:
    ///
    /// ```rust,compile_fail
    /// use veecle_logline::template::Template;
    ///
    /// const BROKEN: Template<'static> = Template::checked("{} and {}", 1);
    /// # let _ = BROKEN;
    /// ```
    pub const fn checked(text: &'a str, arguments: usize) -> Self {
        let placeholders = placeholder_count(text);
        assert!(
            placeholders == arguments,
            "template placeholder count does not match the number of arguments"
        );
        Self { text, placeholders }
    }

    /// The raw template text.
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The number of placeholders, equal to the argument count this template was checked with.
    pub const fn placeholders(&self) -> usize {
        self.placeholders
    }

    /// Substitutes `values` into this template, see [`render`].
    pub fn render<S>(&self, values: &[S]) -> Result<String, FormatError>
    where
        S: AsRef<str>,
    {
        render(self.text, values)
    }
}
