use hub_core::model::UserId;
use uuid::Uuid;

/// Supplies the opaque, stable identity used to namespace persisted
/// progress.
///
/// `None` means "not signed in yet"; the progress store treats that as "no
/// progress available", never as an error.
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<UserId>;
}

/// Anonymous identity: a uuid minted at construction, or restored from a
/// previously issued id so progress survives restarts.
#[derive(Clone, Debug)]
pub struct AnonymousIdentity {
    user: UserId,
}

impl AnonymousIdentity {
    /// Mints a fresh anonymous identity.
    #[must_use]
    pub fn sign_in() -> Self {
        Self {
            user: UserId::new(format!("anon-{}", Uuid::new_v4())),
        }
    }

    /// Restores an identity issued earlier (e.g. from config or env).
    #[must_use]
    pub fn restore(user: UserId) -> Self {
        Self { user }
    }
}

impl IdentityProvider for AnonymousIdentity {
    fn current_user(&self) -> Option<UserId> {
        Some(self.user.clone())
    }
}

/// Identity provider with nobody signed in. Used in tests and for the
/// window between startup and sign-in.
#[derive(Clone, Copy, Debug, Default)]
pub struct SignedOutIdentity;

impl IdentityProvider for SignedOutIdentity {
    fn current_user(&self) -> Option<UserId> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_identity_is_stable_across_reads() {
        let identity = AnonymousIdentity::sign_in();
        assert_eq!(identity.current_user(), identity.current_user());
    }

    #[test]
    fn distinct_sign_ins_get_distinct_ids() {
        let a = AnonymousIdentity::sign_in();
        let b = AnonymousIdentity::sign_in();
        assert_ne!(a.current_user(), b.current_user());
    }

    #[test]
    fn restored_identity_keeps_the_given_id() {
        let identity = AnonymousIdentity::restore(UserId::new("carried-over"));
        assert_eq!(identity.current_user(), Some(UserId::new("carried-over")));
    }

    #[test]
    fn signed_out_identity_has_no_user() {
        assert_eq!(SignedOutIdentity.current_user(), None);
    }
}
