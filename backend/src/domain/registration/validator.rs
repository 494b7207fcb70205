//! The `validate` operation: ordered field rules with optional duplicate
//! lookups.

use tracing::{debug, info};

use crate::domain::ports::UniquenessOracle;

use super::{
    AcceptedRegistration, EmailAddress, Field, LookupUnavailable, Password, RegistrationRequest,
    Rejection, RejectionReason, Username, ValidationOutcome,
};

type RuleResult<T> = Result<Result<T, Rejection>, LookupUnavailable>;

/// Validate a registration request.
///
/// Fields are checked in order: username, email, password. Within a field the
/// syntactic checks run first, then the duplicate lookup when `oracle` is
/// supplied. The first rejection stops all further checking, including any
/// remaining lookups. Without an oracle duplicate checks are skipped.
///
/// Lookups are issued sequentially and nothing is held between them. An
/// oracle failure is returned as [`LookupUnavailable`] and never treated as
/// "not a duplicate".
///
/// # Examples
/// ```
/// use registration::domain::{RegistrationRequest, validate};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let request = RegistrationRequest::new("john_doe", "john@example.com", "SecurePass1!");
/// let outcome = validate(&request, None).await.unwrap();
/// assert!(outcome.is_accepted());
/// # });
/// ```
pub async fn validate(
    request: &RegistrationRequest,
    oracle: Option<&dyn UniquenessOracle>,
) -> Result<ValidationOutcome, LookupUnavailable> {
    let outcome = match apply_rules(request, oracle).await? {
        Ok(accepted) => {
            info!(username = %accepted.username(), "registration input accepted");
            ValidationOutcome::Accepted(accepted)
        }
        Err(rejection) => {
            debug!(
                field = rejection.field().as_str(),
                reason = rejection.reason().code(),
                "registration input rejected"
            );
            ValidationOutcome::Rejected(rejection)
        }
    };
    Ok(outcome)
}

async fn apply_rules(
    request: &RegistrationRequest,
    oracle: Option<&dyn UniquenessOracle>,
) -> RuleResult<AcceptedRegistration> {
    let username = match check_username(request.username(), oracle).await? {
        Ok(username) => username,
        Err(rejection) => return Ok(Err(rejection)),
    };
    let email = match check_email(request.email(), oracle).await? {
        Ok(email) => email,
        Err(rejection) => return Ok(Err(rejection)),
    };
    let password = match Password::parse(request.password()) {
        Ok(password) => password,
        Err(reason) => return Ok(Err(Rejection::new(Field::Password, reason))),
    };

    Ok(Ok(AcceptedRegistration::new(username, email, password)))
}

async fn check_username(raw: &str, oracle: Option<&dyn UniquenessOracle>) -> RuleResult<Username> {
    let username = match Username::parse(raw) {
        Ok(username) => username,
        Err(reason) => return Ok(Err(Rejection::new(Field::Username, reason))),
    };

    if let Some(oracle) = oracle {
        let taken = oracle
            .exists_by_username(&username)
            .await
            .map_err(|source| LookupUnavailable::new(Field::Username, source))?;
        if taken {
            return Ok(Err(duplicate(Field::Username)));
        }
    }

    Ok(Ok(username))
}

async fn check_email(raw: &str, oracle: Option<&dyn UniquenessOracle>) -> RuleResult<EmailAddress> {
    let email = match EmailAddress::parse(raw) {
        Ok(email) => email,
        Err(reason) => return Ok(Err(Rejection::new(Field::Email, reason))),
    };

    if let Some(oracle) = oracle {
        let taken = oracle
            .exists_by_email(&email)
            .await
            .map_err(|source| LookupUnavailable::new(Field::Email, source))?;
        if taken {
            return Ok(Err(duplicate(Field::Email)));
        }
    }

    Ok(Ok(email))
}

const fn duplicate(field: Field) -> Rejection {
    Rejection::new(field, RejectionReason::Duplicate)
}
