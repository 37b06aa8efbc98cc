//! Declarative shape machinery shared by every ElastiCache record.
//!
//! ElastiCache shapes are bags of optional members. Each record is declared
//! once with [`elasticache_shape!`](crate::elasticache_shape), which derives the
//! struct, its fluent builders, serde support and the `{Name: value}` rendering
//! from a single member table. Closed string sets are declared with
//! [`elasticache_enum!`](crate::elasticache_enum).
//!
//! Members are public `Option` fields: reading a field is the getter, assigning
//! it is the setter, and `None` means "unset" (omitted on the wire) as opposed
//! to any concrete zero, empty or `false` value.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Timestamp members such as `CacheClusterCreateTime`.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Metadata exposed by every record declared with `elasticache_shape!`.
pub trait Shape:
    fmt::Debug + fmt::Display + Clone + Default + PartialEq + Eq + Hash + Render
{
    /// The API shape name, e.g. `ReplicationGroup`.
    const SHAPE_NAME: &'static str;

    /// Wire member names in declaration order.
    const MEMBER_NAMES: &'static [&'static str];
}

/// Renders a member value inside a record's `{Name: value}` string.
///
/// Implemented for every member type: scalars, timestamps, lists, and the
/// records and enums generated by this crate's macros.
pub trait Render {
    /// Writes this value's rendering to `f`.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Render for String {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Render for i32 {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Render for bool {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Render for Timestamp {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true))
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

/// A double-precision member (e.g. `SlotMigration.ProgressPercentage`).
///
/// Equality and hashing use the bit pattern with a canonical NaN, so `NaN`
/// equals itself and `0.0` differs from `-0.0`. This keeps records containing
/// doubles `Eq + Hash`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Double(pub f64);

impl Double {
    /// Returns the wrapped value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    fn bits(self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Double {}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Render for Double {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Writes the `{Name: value, Name: value}` rendering, skipping unset members.
pub struct MemberList<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl fmt::Debug for MemberList<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberList")
            .field("empty", &self.empty)
            .finish_non_exhaustive()
    }
}

impl<'a, 'b> MemberList<'a, 'b> {
    /// Opens the member list.
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    /// Writes `name: value` if the member is set.
    pub fn entry<T: Render>(&mut self, name: &str, value: Option<&T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };
        if !self.empty {
            self.f.write_str(", ")?;
        }
        self.empty = false;
        self.f.write_str(name)?;
        self.f.write_str(": ")?;
        value.render(self.f)
    }

    /// Closes the member list.
    pub fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

/// Declares an ElastiCache record from a member table.
///
/// Each member line reads `"WireName" field: Type => with_field;`. A type in
/// brackets (`[Tag]`) declares a list member, which also takes an `extend_`
/// method name: `"Tags" tags: [Tag] => with_tags, extend_tags;`.
///
/// The generated struct has one public `Option` field per member and derives
/// `Debug`, `Clone`, `Default`, `PartialEq`, `Eq`, `Hash` and serde support
/// (wire names, unset members skipped). It also gets:
///
/// - `with_*` for every member, which sets it and returns the record;
/// - for list members, `with_*` replaces the list with a copy of any iterable,
///   and `extend_*` appends to it, creating the list on first use;
/// - `Display`, rendering set members as `{Name: value, ...}`;
/// - [`Shape`](crate::shape::Shape) metadata and `From<&Self>` (a clone), so
///   lists of records can be copied from borrowed slices.
///
/// # Examples
///
/// ```
/// use ruststack_elasticache_model::elasticache_shape;
///
/// elasticache_shape! {
///     /// A cache endpoint.
///     pub struct Endpoint {
///         "Address" address: String => with_address;
///         "Port" port: i32 => with_port;
///         "Aliases" aliases: [String] => with_aliases, extend_aliases;
///     }
/// }
///
/// let endpoint = Endpoint::default()
///     .with_address("cache.example.com")
///     .extend_aliases(["a"])
///     .extend_aliases(["b"]);
///
/// assert_eq!(endpoint.address.as_deref(), Some("cache.example.com"));
/// assert_eq!(endpoint.port, None);
/// assert_eq!(endpoint.to_string(), "{Address: cache.example.com, Aliases: [a, b]}");
/// ```
#[macro_export]
macro_rules! elasticache_shape {
    (@ty [$inner:ty]) => {
        ::std::vec::Vec<$inner>
    };
    (@ty $ty:ty) => {
        $ty
    };

    (@with $wire:literal, $field:ident, $with:ident, $extend:ident, [$inner:ty]) => {
        #[doc = concat!("Replaces `", $wire, "` with a copy of `input`.")]
        #[must_use]
        pub fn $with<I>(mut self, input: I) -> Self
        where
            I: ::std::iter::IntoIterator,
            I::Item: ::std::convert::Into<$inner>,
        {
            self.$field = ::std::option::Option::Some(
                input.into_iter().map(::std::convert::Into::into).collect(),
            );
            self
        }

        #[doc = concat!("Appends `input` to `", $wire, "`, creating the list if it is unset.")]
        #[must_use]
        pub fn $extend<I>(mut self, input: I) -> Self
        where
            I: ::std::iter::IntoIterator,
            I::Item: ::std::convert::Into<$inner>,
        {
            self.$field
                .get_or_insert_with(::std::vec::Vec::new)
                .extend(input.into_iter().map(::std::convert::Into::into));
            self
        }
    };
    (@with $wire:literal, $field:ident, $with:ident, $ty:ty) => {
        #[doc = concat!("Sets `", $wire, "` and returns the record.")]
        #[must_use]
        pub fn $with(mut self, input: impl ::std::convert::Into<$ty>) -> Self {
            self.$field = ::std::option::Option::Some(input.into());
            self
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $wire:literal $field:ident : $kind:tt => $with:ident $(, $extend:ident)? ;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Default, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize,
        )]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                pub $field: ::std::option::Option<$crate::elasticache_shape!(@ty $kind)>,
            )*
        }

        impl $name {
            $(
                $crate::elasticache_shape!(@with $wire, $field, $with, $($extend,)? $kind);
            )*
        }

        impl $crate::shape::Shape for $name {
            const SHAPE_NAME: &'static str = stringify!($name);
            const MEMBER_NAMES: &'static [&'static str] = &[$($wire),*];
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut members = $crate::shape::MemberList::new(f)?;
                $( members.entry($wire, self.$field.as_ref())?; )*
                members.finish()
            }
        }

        impl $crate::shape::Render for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl ::std::convert::From<&$name> for $name {
            fn from(value: &$name) -> Self {
                value.clone()
            }
        }
    };
}

/// Declares a closed ElastiCache string set.
///
/// The generated enum has one variant per documented value and an
/// `Unknown(String)` fallback, so any string is accepted without validation and
/// converting from the wire string is equivalent to naming the variant.
///
/// # Examples
///
/// ```
/// use ruststack_elasticache_model::elasticache_enum;
///
/// elasticache_enum! {
///     /// Placement mode.
///     pub enum Placement {
///         /// One zone.
///         Single => "single",
///         /// Many zones.
///         Spread => "spread",
///     }
/// }
///
/// assert_eq!(Placement::from("spread"), Placement::Spread);
/// assert_eq!(Placement::from("SPREAD").as_str(), "SPREAD");
/// assert!(!Placement::from("SPREAD").is_known());
/// ```
#[macro_export]
macro_rules! elasticache_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            /// A value outside the documented set, kept verbatim.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Documented wire values, in declaration order.
            pub const VALUES: &'static [&'static str] = &[$($wire),*];

            /// Returns the wire string for this value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )*
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Returns `true` if the wire string is one of [`Self::VALUES`].
            #[must_use]
            pub fn is_known(&self) -> bool {
                Self::VALUES.contains(&self.as_str())
            }
        }

        // Equality follows the wire string, so `Unknown("x")` equals the
        // documented variant whose wire value is "x".
        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.as_str(), state);
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => Self::$variant, )*
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                match Self::from(value.as_str()) {
                    Self::Unknown(_) => Self::Unknown(value),
                    known => known,
                }
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::shape::Render for $name {
            fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }
    };
}
