//! Evaluation status

use std::fmt;

/// Result of evaluating a step or a whole plan.
///
/// Every step runs synchronously, so there is no "still running" value yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

impl From<bool> for Status {
    fn from(ok: bool) -> Self {
        if ok {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Success => write!(f, "success"),
            Status::Failure => write!(f, "failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bool() {
        assert_eq!(Status::from(true), Status::Success);
        assert_eq!(Status::from(false), Status::Failure);
        assert!(Status::Success.is_success());
        assert!(!Status::Failure.is_success());
    }
}
