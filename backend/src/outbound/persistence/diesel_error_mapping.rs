//! Translates pool and Diesel failures into [`UserLookupError`].
//!
//! Messages returned to the domain are fixed strings; driver detail is only
//! logged at debug level since it can echo query parameters.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserLookupError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> UserLookupError {
    let (summary, message) = match error {
        PoolError::Checkout { message } => ("no database connection available", message),
        PoolError::Build { message } => ("database pool unavailable", message),
    };
    debug!(%message, "user lookup pool failure");
    UserLookupError::connection(summary)
}

pub(crate) fn map_diesel_error(error: DieselError) -> UserLookupError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel user lookup failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel user lookup failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            UserLookupError::connection("database connection error")
        }
        DieselError::QueryBuilderError(_) => UserLookupError::query("database query error"),
        _ => UserLookupError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Info(&'static str);

    impl diesel::result::DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            self.0
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, message: &'static str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info(message)))
    }

    #[rstest]
    #[case(PoolError::checkout("timed out waiting"), "no database connection available")]
    #[case(PoolError::build("refused"), "database pool unavailable")]
    fn pool_errors_become_connection_errors(#[case] error: PoolError, #[case] message: &str) {
        assert_eq!(map_pool_error(error), UserLookupError::connection(message));
    }

    #[rstest]
    fn closed_connections_are_connection_errors() {
        let mapped = map_diesel_error(database_error(
            DatabaseErrorKind::ClosedConnection,
            "server closed the connection",
        ));
        assert_eq!(mapped, UserLookupError::connection("database connection error"));
    }

    #[rstest]
    fn driver_detail_does_not_reach_the_domain() {
        let mapped = map_diesel_error(database_error(
            DatabaseErrorKind::Unknown,
            "relation \"users\" does not exist near 'john@example.com'",
        ));
        assert_eq!(mapped, UserLookupError::query("database error"));
        assert!(!mapped.to_string().contains("john@example.com"));
    }

    #[rstest]
    fn not_found_is_still_a_query_error() {
        assert_eq!(
            map_diesel_error(DieselError::NotFound),
            UserLookupError::query("database error")
        );
    }
}
