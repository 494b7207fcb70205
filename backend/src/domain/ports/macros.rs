//! Helper macro for declaring port error enums.
//!
//! Each variant gets a `thiserror` message and a snake_case constructor whose
//! parameters accept `impl Into<T>`, so adapters can write
//! `UserLookupError::connection("pool exhausted")`.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
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
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ProbeError {
            Unreachable => "probe unreachable",
            Refused { host: String } => "probe refused by {host}",
            Throttled { host: String, retry_after: u32 } => "{host} throttled, retry in {retry_after}s",
        }
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(ProbeError::unreachable(), ProbeError::Unreachable);
        assert_eq!(ProbeError::unreachable().to_string(), "probe unreachable");
    }

    #[test]
    fn string_fields_accept_str() {
        let err = ProbeError::refused("db-1");
        assert_eq!(err.to_string(), "probe refused by db-1");
    }

    #[test]
    fn mixed_fields_keep_their_types() {
        let err = ProbeError::throttled("db-2", 5_u32);
        assert_eq!(
            err,
            ProbeError::Throttled {
                host: "db-2".to_owned(),
                retry_after: 5
            }
        );
        assert_eq!(err.to_string(), "db-2 throttled, retry in 5s");
    }
}
