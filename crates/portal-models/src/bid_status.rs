//! Bid status state machine.
//!
//! A bid starts out `pending`. The job owner either accepts or rejects
//! it, and an accepted bid can later be marked complete. `reject` and
//! `complete` are terminal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status of a bid on a posted job.
///
/// Serialized as the lowercase label that is also stored in the
/// `status` field of the bid document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BidStatus {
    /// Bid has been placed and awaits a decision
    #[default]
    Pending,
    /// Job owner accepted the bid
    Accept,
    /// Bid was rejected or cancelled
    Reject,
    /// Accepted bid was completed
    Complete,
}

/// Attempted a status change the state machine does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal bid status transition: {from} -> {to}")]
pub struct TransitionError {
    pub from: BidStatus,
    pub to: BidStatus,
}

impl BidStatus {
    /// Get string representation of the status.
    ///
    /// These labels are what the optional status sort orders by, so the
    /// sort is lexicographic: accept < complete < pending < reject.
    pub fn as_str(&self) -> &'static str {
        match self {
            BidStatus::Pending => "pending",
            BidStatus::Accept => "accept",
            BidStatus::Reject => "reject",
            BidStatus::Complete => "complete",
        }
    }

    /// Check if this is a terminal state (no further transitions).
    pub fn is_terminal(&self) -> bool {
        matches!(self, BidStatus::Reject | BidStatus::Complete)
    }

    /// Check whether the state machine permits moving to `target`.
    ///
    /// Legal transitions: pending -> accept, pending -> reject,
    /// accept -> complete. Everything else is refused.
    pub fn can_transition_to(&self, target: BidStatus) -> bool {
        matches!(
            (self, target),
            (BidStatus::Pending, BidStatus::Accept)
                | (BidStatus::Pending, BidStatus::Reject)
                | (BidStatus::Accept, BidStatus::Complete)
        )
    }

    /// Validate a transition, returning the target status on success.
    pub fn transition_to(&self, target: BidStatus) -> Result<BidStatus, TransitionError> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(TransitionError {
                from: *self,
                to: target,
            })
        }
    }
}

impl std::fmt::Display for BidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_status_is_pending() {
        assert_eq!(BidStatus::default(), BidStatus::Pending);
        assert!(!BidStatus::Pending.is_terminal());
    }

    #[test]
    fn test_legal_transitions() {
        assert!(BidStatus::Pending.can_transition_to(BidStatus::Accept));
        assert!(BidStatus::Pending.can_transition_to(BidStatus::Reject));
        assert!(BidStatus::Accept.can_transition_to(BidStatus::Complete));
    }

    #[test]
    fn test_illegal_transitions_refused() {
        // pending cannot skip straight to complete
        assert!(!BidStatus::Pending.can_transition_to(BidStatus::Complete));
        // terminal states accept nothing
        for target in [
            BidStatus::Pending,
            BidStatus::Accept,
            BidStatus::Reject,
            BidStatus::Complete,
        ] {
            assert!(!BidStatus::Reject.can_transition_to(target));
            assert!(!BidStatus::Complete.can_transition_to(target));
        }
        // no transition is reversible
        assert!(!BidStatus::Accept.can_transition_to(BidStatus::Pending));
        assert!(!BidStatus::Accept.can_transition_to(BidStatus::Reject));
    }

    #[test]
    fn test_transition_error_names_both_states() {
        let err = BidStatus::Complete
            .transition_to(BidStatus::Pending)
            .unwrap_err();
        assert_eq!(err.from, BidStatus::Complete);
        assert_eq!(err.to, BidStatus::Pending);
        assert_eq!(
            err.to_string(),
            "illegal bid status transition: complete -> pending"
        );
    }

    #[test]
    fn test_status_labels_sort_lexicographically() {
        // The status sort orders by the stored label, not by lifecycle
        // order. Pin that down so nobody "fixes" it silently.
        let mut labels = vec![
            BidStatus::Pending.as_str(),
            BidStatus::Reject.as_str(),
            BidStatus::Accept.as_str(),
            BidStatus::Complete.as_str(),
        ];
        labels.sort();
        assert_eq!(labels, vec!["accept", "complete", "pending", "reject"]);
    }

    #[test]
    fn test_serde_labels_match_as_str() {
        for status in [
            BidStatus::Pending,
            BidStatus::Accept,
            BidStatus::Reject,
            BidStatus::Complete,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: BidStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }
}
