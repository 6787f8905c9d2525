/// Implements [`std::fmt::Display`] for a newtype, assuming that the inner type implements Display.
macro_rules! impl_display {
    ($newtype: ty) => {
        impl std::fmt::Display for $newtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}
pub(crate) use impl_display;

/// Implements [`std::convert::From`]
macro_rules! impl_from {
    ($newtype: ty; $inner: ty) => {
        impl std::convert::From<$inner> for $newtype {
            fn from(value: $inner) -> Self {
                Self(value.into())
            }
        }
    };
}
pub(crate) use impl_from;

/// Implements [`std::convert::Into`]
macro_rules! impl_into {
    ($newtype: ty; $inner: ty) => {
        impl std::convert::From<$newtype> for $inner {
            fn from(value: $newtype) -> Self {
                value.0.into()
            }
        }
    };
}
pub(crate) use impl_into;

/// Implements [`std::str::FromStr`], [`AsRef<str>`], `as_str`, [`std::fmt::Display`] and the
/// `String`/`&str` conversions for a newtype wrapping an externally assigned `String` identifier.
///
/// Identifiers are opaque to this workspace, so parsing never fails.
macro_rules! impls_for_string_newtype {
    ($newtype: ty) => {
        impl $newtype {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::str::FromStr for $newtype {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }

        impl AsRef<str> for $newtype {
            fn as_ref(&self) -> &str {
                self.0.as_ref()
            }
        }

        $crate::macros::impl_display!($newtype);
        $crate::macros::impl_from!($newtype; String);
        $crate::macros::impl_from!($newtype; &str);
        $crate::macros::impl_into!($newtype; String);
    };
}
pub(crate) use impls_for_string_newtype;
