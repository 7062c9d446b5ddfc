//! Provisioning lifecycle action tokens.
//!
//! The portal hands these tokens to the external provisioning tool
//! verbatim. The `&str` constants are the wire values; [`Action`] is the
//! typed surface defined over them, so the two cannot drift apart.

use crate::error::ConstantsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const INIT: &str = "init";
pub const APPLY: &str = "apply";
pub const DESTROY: &str = "destroy";

/// A provisioning lifecycle step understood by the external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Init,
    Apply,
    Destroy,
}

impl Action {
    /// Every action, in lifecycle order.
    pub const ALL: [Action; 3] = [Action::Init, Action::Apply, Action::Destroy];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Init => INIT,
            Action::Apply => APPLY,
            Action::Destroy => DESTROY,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ConstantsError;

    /// Exact-match parse. Case variants and surrounding whitespace are
    /// rejected, never coerced.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            INIT => Ok(Action::Init),
            APPLY => Ok(Action::Apply),
            DESTROY => Ok(Action::Destroy),
            other => Err(ConstantsError::UnknownAction(other.to_string())),
        }
    }
}
