//! Helper macros for generating port error and business error enums.

/// Generate a `thiserror` enum with snake-case constructors per variant.
///
/// Field constructors accept `impl Into<T>` so callers can pass `&str` for
/// `String` fields.
macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[allow(dead_code, reason = "constructors are generated for every variant")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        $crate::domain::macros::define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[allow(dead_code, reason = "constructors are generated for every variant")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        $crate::domain::macros::define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                $crate::domain::macros::define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

/// Generate a closed business failure enum for one use case.
///
/// Expands to a [`define_port_error!`] enum plus a
/// [`BusinessError`](crate::domain::BusinessError) implementation whose
/// `name()` is the variant identifier. The enum is never `#[non_exhaustive]`,
/// so renderers matching on it fail to compile when a variant is added.
macro_rules! define_business_error {
    (@pattern $name:ident $variant:ident { $($field:ident),* }) => {
        $name::$variant { .. }
    };

    (@pattern $name:ident $variant:ident) => {
        $name::$variant
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $crate::domain::macros::define_port_error! {
            $(#[$outer])*
            pub enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant $( { $($field : $ty),* } )? => $message
                ),*
            }
        }

        impl $crate::domain::BusinessError for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(
                        $crate::domain::macros::define_business_error!(
                            @pattern $name $variant $( { $($field),* } )?
                        ) => stringify!($variant),
                    )*
                }
            }
        }
    };
}

pub(crate) use define_business_error;
pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use crate::domain::BusinessError;

    define_port_error! {
        pub enum ExamplePortError {
            Foo { message: String } => "foo: {message}",
            Bar { count: u32 } => "bar: {count}",
            Baz { message: String, count: u32 } => "baz: {message} ({count})",
        }
    }

    define_business_error! {
        pub enum ExampleFailure {
            Rejected => "request rejected",
            Missing { key: String } => "missing entry: {key}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = ExamplePortError::foo("hello");
        assert_eq!(err.to_string(), "foo: hello");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = ExamplePortError::bar(42_u32);
        assert_eq!(err.to_string(), "bar: 42");
    }

    #[test]
    fn constructors_support_mixed_fields() {
        let err = ExamplePortError::baz("hello", 42_u32);
        assert_eq!(err.to_string(), "baz: hello (42)");
    }

    #[test]
    fn business_errors_report_variant_names() {
        assert_eq!(ExampleFailure::rejected().name(), "Rejected");
        assert_eq!(ExampleFailure::missing("k").name(), "Missing");
    }

    #[test]
    fn business_error_messages_follow_display() {
        assert_eq!(ExampleFailure::missing("k").message(), "missing entry: k");
        assert_eq!(ExampleFailure::rejected().message(), "request rejected");
    }
}
