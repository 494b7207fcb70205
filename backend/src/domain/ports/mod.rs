//! Domain ports for the hexagonal boundary.
//!
//! - [`UniquenessOracle`] is driven: persistence adapters answer "does a
//!   stored user already use this value?".
//! - [`RegistrationValidation`] is driving: inbound adapters call it without
//!   knowing which oracle backs it.

mod macros;
pub(crate) use macros::define_port_error;

mod registration_validation;
mod uniqueness_oracle;

#[cfg(test)]
pub use registration_validation::MockRegistrationValidation;
pub use registration_validation::RegistrationValidation;
#[cfg(test)]
pub use uniqueness_oracle::MockUniquenessOracle;
pub use uniqueness_oracle::{FixtureUniquenessOracle, UniquenessOracle, UserLookupError};
