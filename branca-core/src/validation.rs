//! Checks run against a token after it has been authenticated.

use std::sync::Arc;

use crate::BrancaError;

pub trait Validate {
    /// The validation to perform on the authenticated token timestamp
    fn validate(&self, timestamp: u32) -> Result<(), BrancaError>;

    /// Extend the validation with another validation.
    fn then<V>(self, other: V) -> ValidateThen<Self, V>
    where
        Self: Sized,
        V: Validate,
    {
        ValidateThen(self, other)
    }
}

/// Accepts any authentic token, regardless of age.
pub struct NoValidation(());

impl NoValidation {
    pub fn dangerous_no_validation() -> Self {
        NoValidation(())
    }
}

impl Validate for NoValidation {
    fn validate(&self, _: u32) -> Result<(), BrancaError> {
        Ok(())
    }
}

/// Rejects tokens older than `ttl` seconds.
///
/// A token is expired once `timestamp + ttl` is strictly before `now`.
#[derive(Clone, Copy, Debug)]
pub struct Ttl {
    ttl: u32,
    now: u64,
}

impl Ttl {
    pub fn valid_now(ttl: u32) -> Self {
        Self::valid_at(ttl, now())
    }

    pub fn valid_at(ttl: u32, now: u64) -> Self {
        Self { ttl, now }
    }
}

impl Validate for Ttl {
    fn validate(&self, timestamp: u32) -> Result<(), BrancaError> {
        let expiry = timestamp as u64 + self.ttl as u64;
        if expiry < self.now {
            tracing::debug!(timestamp, ttl = self.ttl, now = self.now, "token expired");
            return Err(BrancaError::Expired);
        }
        Ok(())
    }
}

/// The current unix time, in seconds.
pub fn now() -> u64 {
    // the clock is never before the epoch in practice
    jiff::Timestamp::now().as_second().max(0) as u64
}

/// Two validations run in sequence. See [`Validate::then`].
pub struct ValidateThen<T, U>(T, U);

impl<T: Validate, U: Validate> Validate for ValidateThen<T, U> {
    fn validate(&self, timestamp: u32) -> Result<(), BrancaError> {
        self.0.validate(timestamp)?;
        self.1.validate(timestamp)
    }
}

impl<T: Validate> Validate for Option<T> {
    fn validate(&self, timestamp: u32) -> Result<(), BrancaError> {
        match self {
            Some(v) => v.validate(timestamp),
            None => Ok(()),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    fn validate(&self, timestamp: u32) -> Result<(), BrancaError> {
        <[T]>::validate(self, timestamp)
    }
}

impl<T: Validate> Validate for [T] {
    fn validate(&self, timestamp: u32) -> Result<(), BrancaError> {
        for v in self {
            T::validate(v, timestamp)?;
        }
        Ok(())
    }
}

impl<T: Validate + ?Sized> Validate for &T {
    fn validate(&self, timestamp: u32) -> Result<(), BrancaError> {
        T::validate(self, timestamp)
    }
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self, timestamp: u32) -> Result<(), BrancaError> {
        T::validate(self, timestamp)
    }
}

impl<T: Validate + ?Sized> Validate for Arc<T> {
    fn validate(&self, timestamp: u32) -> Result<(), BrancaError> {
        T::validate(self, timestamp)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{NoValidation, Ttl, Validate};
    use crate::BrancaError;

    const T: u32 = 123206400;

    #[test]
    fn ttl_boundary() {
        assert!(Ttl::valid_at(3600, T as u64).validate(T).is_ok());
        assert!(Ttl::valid_at(3600, T as u64 + 3600).validate(T).is_ok());
        assert!(matches!(
            Ttl::valid_at(3600, T as u64 + 3601).validate(T),
            Err(BrancaError::Expired)
        ));
    }

    #[test]
    fn ttl_zero() {
        assert!(Ttl::valid_at(0, T as u64).validate(T).is_ok());
        assert!(matches!(
            Ttl::valid_at(0, T as u64 + 1).validate(T),
            Err(BrancaError::Expired)
        ));
    }

    #[test]
    fn ttl_does_not_overflow() {
        let ttl = Ttl::valid_at(u32::MAX, u32::MAX as u64 + 10);
        assert!(ttl.validate(u32::MAX).is_ok());
    }

    #[test]
    fn combinators() {
        let expired = Ttl::valid_at(10, T as u64 + 11);

        assert!(None::<Ttl>.validate(T).is_ok());
        assert!(Some(expired).validate(T).is_err());
        assert!(NoValidation::dangerous_no_validation().validate(0).is_ok());

        let chain = NoValidation::dangerous_no_validation().then(expired);
        assert!(matches!(chain.validate(T), Err(BrancaError::Expired)));

        let all = vec![Ttl::valid_at(100, T as u64 + 50), expired];
        assert!(all.validate(T).is_err());
        assert!(all[..1].validate(T).is_ok());

        let boxed: Box<dyn Validate> = Box::new(expired);
        assert!(boxed.validate(T).is_err());

        let shared: Arc<dyn Validate> = Arc::new(expired);
        assert!(shared.validate(T).is_err());
    }
}
