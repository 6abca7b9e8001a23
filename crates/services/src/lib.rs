#![forbid(unsafe_code)]

pub mod error;
pub mod identity;
pub mod progress_store;

pub use error::ProgressStoreError;
pub use identity::{AnonymousIdentity, IdentityProvider, SignedOutIdentity};
pub use progress_store::{ProgressEvent, ProgressStore, Subscription};
