use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity the relay assigns to a connection when it is accepted.
///
/// Generated ids are v4 UUID text, but the type carries any string so that
/// client-supplied ids (a `to` target, a `presence-check` argument) compare
/// against the registry without a parse step. An id the relay never issued
/// is simply a lookup miss.
#[derive(Debug, Serialize, Deserialize, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct PeerId(pub String);

impl PeerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for PeerId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PeerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
