//! Conversion of arbitrary values into the text substituted for template placeholders.
//!
//! A value can offer several ways of becoming text. The closed set of ways is [`Capability`], and
//! the first one that applies, in [`Capability::PRECEDENCE`] order, decides the output:
//!
//! 1. [`Text`](Capability::Text): the value already is text and is used as-is.
//! 2. [`Convert`](Capability::Convert): a standard lossless conversion into a `String`.
//! 3. [`Cast`](Capability::Cast): an explicit, possibly lossy, conversion (paths, OS strings).
//! 4. [`Numeric`](Capability::Numeric): decimal representation of a number.
//! 5. [`Accessor`](Capability::Accessor): a "to string" method of the value.
//! 6. [`Append`](Capability::Append): appending the value into an empty buffer.
//!
//! Types opt in by implementing [`Loggable`], declaring their capabilities in
//! [`Loggable::CAPABILITIES`] and overriding the matching hooks. A type that does not implement
//! [`Loggable`], or declares no capability at all, is rejected at compile time by [`render`].
//!
//! Values of foreign types can be wrapped with [`display`] (accessor, through
//! [`Display`](core::fmt::Display)) or [`debug`] (append, through [`Debug`](core::fmt::Debug)).
//!
//! # Examples
//!
//! ```rust
//! use veecle_logline::value::{self, Capabilities, Capability, Loggable};
//!
//! struct Celsius(f64);
//!
//! impl Loggable for Celsius {
//!     const CAPABILITIES: Capabilities = Capabilities::NUMERIC.union(Capabilities::ACCESSOR);
//!
//!     fn numeric_text(&self) -> Option<String> {
//!         Some(self.0.to_string())
//!     }
//!
//!     fn text_accessor(&self) -> Option<String> {
//!         Some(format!("{} °C", self.0))
//!     }
//! }
//!
//! // Numeric comes before the accessor.
//! assert_eq!(value::render(&Celsius(21.5)), "21.5");
//! assert_eq!(value::resolve(&Celsius(21.5)).unwrap().0, Capability::Numeric);
//!
//! assert_eq!(value::render(&std::path::Path::new("/tmp/x")), "/tmp/x");
//! assert_eq!(value::render(&value::debug(&Some(3))), "Some(3)");
//! ```
//!
//! Types without any capability do not compile:
//!
//! ```rust,compile_fail
//! use veecle_logline::value::{self, Capabilities, Loggable};
//!
//! struct Opaque;
//!
//! impl Loggable for Opaque {
//!     const CAPABILITIES: Capabilities = Capabilities::empty();
//! }
//!
//! value::render(&Opaque);
//! ```

use core::fmt::{self, Write};
use core::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use core::time::Duration;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;

bitflags::bitflags! {
    /// The set of [`Capability`]s a [`Loggable`] type declares.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// See [`Capability::Text`].
        const TEXT = 1 << 0;
        /// See [`Capability::Convert`].
        const CONVERT = 1 << 1;
        /// See [`Capability::Cast`].
        const CAST = 1 << 2;
        /// See [`Capability::Numeric`].
        const NUMERIC = 1 << 3;
        /// See [`Capability::Accessor`].
        const ACCESSOR = 1 << 4;
        /// See [`Capability::Append`].
        const APPEND = 1 << 5;
    }
}

/// One way of turning a value into text.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    /// The value is text already, [`Loggable::as_text`].
    Text,
    /// Standard conversion into a `String`, [`Loggable::convert_to_text`].
    Convert,
    /// Explicit conversion into a `String`, [`Loggable::cast_to_text`].
    Cast,
    /// Decimal representation of a number, [`Loggable::numeric_text`].
    Numeric,
    /// The value's own "to string" method, [`Loggable::text_accessor`].
    Accessor,
    /// Appending into a text buffer, [`Loggable::append_to`].
    Append,
}

impl Capability {
    /// Resolution order, earlier entries win.
    pub const PRECEDENCE: [Capability; 6] = [
        Capability::Text,
        Capability::Convert,
        Capability::Cast,
        Capability::Numeric,
        Capability::Accessor,
        Capability::Append,
    ];

    /// The flag declaring this capability.
    pub const fn flag(self) -> Capabilities {
        match self {
            Capability::Text => Capabilities::TEXT,
            Capability::Convert => Capabilities::CONVERT,
            Capability::Cast => Capabilities::CAST,
            Capability::Numeric => Capabilities::NUMERIC,
            Capability::Accessor => Capabilities::ACCESSOR,
            Capability::Append => Capabilities::APPEND,
        }
    }
}

/// A value that can be substituted into a template placeholder.
///
/// Implementors declare the capabilities they offer and override the corresponding hooks. Hooks
/// of undeclared capabilities are never called. A declared hook returning `None` (or `false` for
/// [`append_to`](Self::append_to)) passes resolution on to the next declared capability.
pub trait Loggable {
    /// The capabilities this type offers.
    const CAPABILITIES: Capabilities;

    /// Returns the value itself when it already is text.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Converts the value into text through a standard conversion.
    fn convert_to_text(&self) -> Option<String> {
        None
    }

    /// Converts the value into text through an explicit conversion.
    fn cast_to_text(&self) -> Option<String> {
        None
    }

    /// Returns the decimal representation of a numeric value.
    fn numeric_text(&self) -> Option<String> {
        None
    }

    /// Calls the value's own "to string" method.
    fn text_accessor(&self) -> Option<String> {
        None
    }

    /// Appends the value to `buffer`, returning whether anything was appended.
    fn append_to(&self, buffer: &mut String) -> bool {
        let _ = buffer;
        false
    }
}

/// Finds the first applicable capability of `value` and returns it with the produced text.
///
/// Returns `None` only when every declared hook declined.
pub fn resolve<T>(value: &T) -> Option<(Capability, Cow<'_, str>)>
where
    T: Loggable + ?Sized,
{
    for capability in Capability::PRECEDENCE {
        if !T::CAPABILITIES.contains(capability.flag()) {
            continue;
        }

        let text = match capability {
            Capability::Text => value.as_text().map(Cow::Borrowed),
            Capability::Convert => value.convert_to_text().map(Cow::Owned),
            Capability::Cast => value.cast_to_text().map(Cow::Owned),
            Capability::Numeric => value.numeric_text().map(Cow::Owned),
            Capability::Accessor => value.text_accessor().map(Cow::Owned),
            Capability::Append => {
                let mut buffer = String::new();
                value.append_to(&mut buffer).then_some(Cow::Owned(buffer))
            }
        };

        if let Some(text) = text {
            return Some((capability, text));
        }
    }

    None
}

/// Renders `value` as text, see the [module documentation](self) for the rules.
///
/// A value whose declared hooks all decline renders as an empty string.
pub fn render<T>(value: &T) -> Cow<'_, str>
where
    T: Loggable + ?Sized,
{
    const {
        assert!(
            !T::CAPABILITIES.is_empty(),
            "type is not loggable: it declares no text conversion capability"
        );
    }

    match resolve(value) {
        Some((_, text)) => text,
        None => {
            tracing::debug!(
                value_type = core::any::type_name::<T>(),
                "every declared capability declined, value renders as an empty string"
            );
            Cow::Borrowed("")
        }
    }
}

/// Adapter rendering a [`Display`](fmt::Display) value through its [`ToString`] accessor.
#[derive(Copy, Clone, Debug)]
pub struct Displayed<'a, T: ?Sized>(pub &'a T);

/// Wraps `value` so it renders through [`Display`](fmt::Display).
pub fn display<T>(value: &T) -> Displayed<'_, T>
where
    T: fmt::Display + ?Sized,
{
    Displayed(value)
}

impl<T> Loggable for Displayed<'_, T>
where
    T: fmt::Display + ?Sized,
{
    const CAPABILITIES: Capabilities = Capabilities::ACCESSOR;

    fn text_accessor(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Adapter rendering a [`Debug`](fmt::Debug) value by appending it into a buffer.
#[derive(Copy, Clone, Debug)]
pub struct Debugged<'a, T: ?Sized>(pub &'a T);

/// Wraps `value` so it renders through [`Debug`](fmt::Debug).
pub fn debug<T>(value: &T) -> Debugged<'_, T>
where
    T: fmt::Debug + ?Sized,
{
    Debugged(value)
}

impl<T> Loggable for Debugged<'_, T>
where
    T: fmt::Debug + ?Sized,
{
    const CAPABILITIES: Capabilities = Capabilities::APPEND;

    fn append_to(&self, buffer: &mut String) -> bool {
        write!(buffer, "{:?}", self.0).is_ok()
    }
}

macro_rules! impl_forwarding {
    ($($container:ty),* $(,)?) => {
        $(
            impl<T> Loggable for $container
            where
                T: Loggable + ?Sized,
            {
                const CAPABILITIES: Capabilities = T::CAPABILITIES;

                fn as_text(&self) -> Option<&str> {
                    (**self).as_text()
                }

                fn convert_to_text(&self) -> Option<String> {
                    (**self).convert_to_text()
                }

                fn cast_to_text(&self) -> Option<String> {
                    (**self).cast_to_text()
                }

                fn numeric_text(&self) -> Option<String> {
                    (**self).numeric_text()
                }

                fn text_accessor(&self) -> Option<String> {
                    (**self).text_accessor()
                }

                fn append_to(&self, buffer: &mut String) -> bool {
                    (**self).append_to(buffer)
                }
            }
        )*
    };
}

impl_forwarding!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl Loggable for str {
    const CAPABILITIES: Capabilities = Capabilities::TEXT;

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Loggable for String {
    const CAPABILITIES: Capabilities = Capabilities::TEXT;

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Loggable for Cow<'_, str> {
    const CAPABILITIES: Capabilities = Capabilities::TEXT;

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Loggable for char {
    const CAPABILITIES: Capabilities = Capabilities::CONVERT;

    fn convert_to_text(&self) -> Option<String> {
        Some(String::from(*self))
    }
}

impl Loggable for fmt::Arguments<'_> {
    const CAPABILITIES: Capabilities = Capabilities::CONVERT;

    fn convert_to_text(&self) -> Option<String> {
        Some(std::fmt::format(*self))
    }
}

macro_rules! impl_cast {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                const CAPABILITIES: Capabilities = Capabilities::CAST;

                fn cast_to_text(&self) -> Option<String> {
                    Some(self.to_string_lossy().into_owned())
                }
            }
        )*
    };
}

impl_cast!(Path, PathBuf, OsStr, OsString);

macro_rules! impl_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                const CAPABILITIES: Capabilities = Capabilities::NUMERIC;

                fn numeric_text(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_numeric!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

macro_rules! impl_accessor {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                const CAPABILITIES: Capabilities = Capabilities::ACCESSOR;

                fn text_accessor(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_accessor!(bool, IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr);

impl Loggable for Duration {
    const CAPABILITIES: Capabilities = Capabilities::APPEND;

    fn append_to(&self, buffer: &mut String) -> bool {
        write!(buffer, "{self:?}").is_ok()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::borrow::Cow;
    use std::ffi::OsStr;
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::{Path, PathBuf};
    use std::sync::Arc;
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::{Capabilities, Capability, Loggable, debug, display, render, resolve};

    fn resolved<T: Loggable + ?Sized>(value: &T) -> (Capability, String) {
        let (capability, text) = resolve(value).expect("value should resolve");
        (capability, text.into_owned())
    }

    /// Offers every capability, each producing a distinct text.
    struct Everything;

    impl Loggable for Everything {
        const CAPABILITIES: Capabilities = Capabilities::all();

        fn as_text(&self) -> Option<&str> {
            Some("text")
        }

        fn convert_to_text(&self) -> Option<String> {
            Some("convert".into())
        }

        fn cast_to_text(&self) -> Option<String> {
            Some("cast".into())
        }

        fn numeric_text(&self) -> Option<String> {
            Some("numeric".into())
        }

        fn text_accessor(&self) -> Option<String> {
            Some("accessor".into())
        }

        fn append_to(&self, buffer: &mut String) -> bool {
            buffer.push_str("append");
            true
        }
    }

    /// Declares a subset of the capabilities while offering every hook of [`Everything`].
    macro_rules! partial {
        ($name:ident, $flags:expr) => {
            struct $name;

            impl Loggable for $name {
                const CAPABILITIES: Capabilities = $flags;

                fn as_text(&self) -> Option<&str> {
                    Everything.as_text()
                }

                fn convert_to_text(&self) -> Option<String> {
                    Everything.convert_to_text()
                }

                fn cast_to_text(&self) -> Option<String> {
                    Everything.cast_to_text()
                }

                fn numeric_text(&self) -> Option<String> {
                    Everything.numeric_text()
                }

                fn text_accessor(&self) -> Option<String> {
                    Everything.text_accessor()
                }

                fn append_to(&self, buffer: &mut String) -> bool {
                    Everything.append_to(buffer)
                }
            }
        };
    }

    partial!(
        WithoutText,
        Capabilities::all().difference(Capabilities::TEXT)
    );
    partial!(
        FromCast,
        Capabilities::CAST
            .union(Capabilities::NUMERIC)
            .union(Capabilities::ACCESSOR)
            .union(Capabilities::APPEND)
    );
    partial!(
        FromNumeric,
        Capabilities::NUMERIC
            .union(Capabilities::ACCESSOR)
            .union(Capabilities::APPEND)
    );
    partial!(
        FromAccessor,
        Capabilities::ACCESSOR.union(Capabilities::APPEND)
    );
    partial!(AppendOnly, Capabilities::APPEND);

    #[test]
    fn precedence_order_is_authoritative() {
        assert_eq!(resolved(&Everything), (Capability::Text, "text".into()));
        assert_eq!(
            resolved(&WithoutText),
            (Capability::Convert, "convert".into())
        );
        assert_eq!(resolved(&FromCast), (Capability::Cast, "cast".into()));
        assert_eq!(
            resolved(&FromNumeric),
            (Capability::Numeric, "numeric".into())
        );
        assert_eq!(
            resolved(&FromAccessor),
            (Capability::Accessor, "accessor".into())
        );
        assert_eq!(resolved(&AppendOnly), (Capability::Append, "append".into()));
    }

    #[test]
    fn precedence_matches_flag_order() {
        let flags: Vec<Capabilities> = Capability::PRECEDENCE
            .iter()
            .map(|capability| capability.flag())
            .collect();
        let mut sorted = flags.clone();
        sorted.sort_by_key(Capabilities::bits);
        assert_eq!(flags, sorted);
        assert_eq!(
            flags
                .iter()
                .fold(Capabilities::empty(), |all, flag| all.union(*flag)),
            Capabilities::all()
        );
    }

    /// A measurement whose numeric text differs from its accessor text.
    struct Meters(f64);

    impl Loggable for Meters {
        const CAPABILITIES: Capabilities = Capabilities::NUMERIC.union(Capabilities::ACCESSOR);

        fn numeric_text(&self) -> Option<String> {
            Some(self.0.to_string())
        }

        fn text_accessor(&self) -> Option<String> {
            Some(format!("{} meters", self.0))
        }
    }

    #[test]
    fn numeric_wins_over_accessor() {
        assert_eq!(render(&Meters(2.5)), "2.5");
        assert_eq!(resolved(&Meters(2.5)).0, Capability::Numeric);
    }

    /// Declares text first but only sometimes has it.
    struct MaybeName(Option<&'static str>);

    impl Loggable for MaybeName {
        const CAPABILITIES: Capabilities = Capabilities::TEXT.union(Capabilities::ACCESSOR);

        fn as_text(&self) -> Option<&str> {
            self.0
        }

        fn text_accessor(&self) -> Option<String> {
            Some("<anonymous>".into())
        }
    }

    #[test]
    fn declined_capability_falls_through() {
        assert_eq!(resolved(&MaybeName(Some("ada"))), (Capability::Text, "ada".into()));
        assert_eq!(
            resolved(&MaybeName(None)),
            (Capability::Accessor, "<anonymous>".into())
        );
    }

    /// Declares a capability without overriding its hook.
    struct Silent;

    impl Loggable for Silent {
        const CAPABILITIES: Capabilities = Capabilities::APPEND;
    }

    #[test]
    #[traced_test]
    fn all_hooks_declining_renders_empty() {
        assert!(resolve(&Silent).is_none());
        assert_eq!(render(&Silent), "");
        assert!(logs_contain("value renders as an empty string"));
        assert!(logs_contain("Silent"));
    }

    #[test]
    fn undeclared_hooks_are_ignored() {
        struct Undeclared;

        impl Loggable for Undeclared {
            const CAPABILITIES: Capabilities = Capabilities::ACCESSOR;

            fn as_text(&self) -> Option<&str> {
                Some("never used")
            }

            fn text_accessor(&self) -> Option<String> {
                Some("accessor".into())
            }
        }

        assert_eq!(resolved(&Undeclared), (Capability::Accessor, "accessor".into()));
    }

    #[test]
    fn std_types() {
        assert_eq!(resolved("hello"), (Capability::Text, "hello".into()));
        assert_eq!(
            resolved(&String::from("owned")),
            (Capability::Text, "owned".into())
        );
        assert_eq!(
            resolved(&Cow::Borrowed("cow")),
            (Capability::Text, "cow".into())
        );
        assert_eq!(resolved(&'x'), (Capability::Convert, "x".into()));
        assert_eq!(
            resolved(&format_args!("arguments")),
            (Capability::Convert, "arguments".into())
        );
        assert_eq!(
            resolved(Path::new("/var/log")),
            (Capability::Cast, "/var/log".into())
        );
        assert_eq!(
            resolved(&PathBuf::from("relative/file.log")),
            (Capability::Cast, "relative/file.log".into())
        );
        assert_eq!(resolved(OsStr::new("os")), (Capability::Cast, "os".into()));
        assert_eq!(resolved(&42u8), (Capability::Numeric, "42".into()));
        assert_eq!(resolved(&-7i64), (Capability::Numeric, "-7".into()));
        assert_eq!(resolved(&u128::MAX), (Capability::Numeric, u128::MAX.to_string()));
        assert_eq!(resolved(&2.5f64), (Capability::Numeric, "2.5".into()));
        assert_eq!(resolved(&true), (Capability::Accessor, "true".into()));
        assert_eq!(
            resolved(&IpAddr::V4(Ipv4Addr::LOCALHOST)),
            (Capability::Accessor, "127.0.0.1".into())
        );
        assert_eq!(
            resolved(&Duration::from_millis(1500)),
            (Capability::Append, "1.5s".into())
        );
    }

    #[test]
    fn smart_pointers_forward() {
        assert_eq!(resolved(&Box::new(5u16)), (Capability::Numeric, "5".into()));
        assert_eq!(
            resolved(&Arc::<str>::from("shared")),
            (Capability::Text, "shared".into())
        );
        assert_eq!(resolved(&&&"deep"), (Capability::Text, "deep".into()));
    }

    #[test]
    fn text_is_borrowed() {
        let text = String::from("borrowed");
        assert!(matches!(render(&text), Cow::Borrowed("borrowed")));
    }

    #[test]
    fn adapters() {
        #[derive(Debug)]
        struct Point {
            x: i32,
            y: i32,
        }

        impl std::fmt::Display for Point {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "({}, {})", self.x, self.y)
            }
        }

        let point = Point { x: 1, y: -2 };
        assert_eq!(
            resolved(&display(&point)),
            (Capability::Accessor, "(1, -2)".into())
        );
        assert_eq!(
            resolved(&debug(&point)),
            (Capability::Append, "Point { x: 1, y: -2 }".into())
        );
    }
}
