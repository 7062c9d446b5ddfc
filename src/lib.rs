//! Shared string constants for the cloud portal's provisioning surfaces.
//!
//! The portal assembles command invocations and rendered output for an
//! external infrastructure-provisioning tool. The string fragments those
//! surfaces agree on live here, in one place:
//!
//! - [`chars`]: delimiter and punctuation fragments
//! - [`action`]: the provisioning lifecycle tokens, plus the typed
//!   [`Action`] enum over them
//!
//! Everything is a `'static` literal or a fieldless enum; the crate holds
//! no runtime state.

pub mod action;
pub mod chars;
pub mod error;

pub use action::Action;
pub use error::ConstantsError;
