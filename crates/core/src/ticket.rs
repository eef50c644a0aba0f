//! Ticket status vocabulary, transition rules, and field validation.
//!
//! The transition table is deliberately strict: only the listed edges are
//! allowed, and anything else is rejected. In particular a ticket cannot jump
//! from `open` straight to `resolved`; it has to pass through `in_progress`.

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Initial status for a newly created ticket.
pub const STATUS_OPEN: &str = "open";
/// An agent is actively working the ticket.
pub const STATUS_IN_PROGRESS: &str = "in_progress";
/// Waiting on the customer or a third party.
pub const STATUS_PENDING: &str = "pending";
/// The underlying issue has been addressed.
pub const STATUS_RESOLVED: &str = "resolved";
/// The ticket is closed; no further work is expected.
pub const STATUS_CLOSED: &str = "closed";

/// All valid ticket statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_OPEN,
    STATUS_IN_PROGRESS,
    STATUS_PENDING,
    STATUS_RESOLVED,
    STATUS_CLOSED,
];

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Maximum length for the ticket subject (characters).
pub const MAX_SUBJECT_LENGTH: usize = 200;

/// Maximum length for the ticket description (characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Status transitions
// ---------------------------------------------------------------------------

/// Returns the set of statuses that `from_status` may transition to.
///
/// Transition rules:
/// - `open`        -> `in_progress`
/// - `in_progress` -> `resolved`
/// - `resolved`    -> `closed`
///
/// `pending` and `closed` are terminal for the purposes of the validator, and
/// unknown statuses have no outgoing edges.
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_OPEN => &[STATUS_IN_PROGRESS],
        STATUS_IN_PROGRESS => &[STATUS_RESOLVED],
        STATUS_RESOLVED => &[STATUS_CLOSED],
        _ => &[],
    }
}

/// Check whether the edge `current -> next` is an allowed transition.
pub fn can_transition(current: &str, next: &str) -> bool {
    valid_transitions(current).contains(&next)
}

/// Validate that a status transition from `current` to `next` is allowed.
pub fn validate_transition(current: &str, next: &str) -> Result<(), CoreError> {
    if can_transition(current, next) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition(format!(
            "Cannot transition ticket from '{}' to '{}'. Allowed transitions: {:?}",
            current,
            next,
            valid_transitions(current)
        )))
    }
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid ticket status '{}'. Must be one of: {:?}",
            status, VALID_STATUSES
        )))
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// Validate the ticket subject: required, non-blank, bounded length.
pub fn validate_subject(subject: &str) -> Result<(), CoreError> {
    if subject.trim().is_empty() {
        return Err(CoreError::Validation("Subject must not be empty".into()));
    }
    if subject.len() > MAX_SUBJECT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Subject exceeds maximum length of {} characters (got {})",
            MAX_SUBJECT_LENGTH,
            subject.len()
        )));
    }
    Ok(())
}

/// Validate the description length. An empty description is allowed.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {} characters (got {})",
            MAX_DESCRIPTION_LENGTH,
            description.len()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Ticket numbers
// ---------------------------------------------------------------------------

/// Generate a human-readable ticket number: `TKT-YYYYMMDD-NNNNNN`.
///
/// The date component comes from `now` (UTC); the suffix is a random six-digit
/// number. Uniqueness is enforced by the `uq_tickets_number` constraint at the
/// store layer, so a collision surfaces as a retryable insert error rather
/// than a corrupted lookup.
pub fn generate_ticket_number(now: Timestamp) -> String {
    use rand::Rng;
    let suffix: u32 = rand::rng().random_range(0..1_000_000);
    format!("TKT-{}-{:06}", now.format("%Y%m%d"), suffix)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_statuses_are_valid() {
        for s in VALID_STATUSES {
            assert!(validate_status(s).is_ok(), "status '{s}' should be valid");
        }
    }

    #[test]
    fn unknown_status_is_invalid() {
        assert!(validate_status("reopened").is_err());
        assert!(validate_status("").is_err());
        assert!(validate_status("OPEN").is_err());
    }

    #[test]
    fn open_can_only_move_to_in_progress() {
        assert!(can_transition(STATUS_OPEN, STATUS_IN_PROGRESS));
        assert!(!can_transition(STATUS_OPEN, STATUS_RESOLVED));
        assert!(!can_transition(STATUS_OPEN, STATUS_CLOSED));
        assert!(!can_transition(STATUS_OPEN, STATUS_PENDING));
    }

    #[test]
    fn in_progress_can_only_move_to_resolved() {
        assert!(can_transition(STATUS_IN_PROGRESS, STATUS_RESOLVED));
        assert!(!can_transition(STATUS_IN_PROGRESS, STATUS_OPEN));
        assert!(!can_transition(STATUS_IN_PROGRESS, STATUS_CLOSED));
    }

    #[test]
    fn resolved_can_only_move_to_closed() {
        assert!(can_transition(STATUS_RESOLVED, STATUS_CLOSED));
        assert!(!can_transition(STATUS_RESOLVED, STATUS_IN_PROGRESS));
        assert!(!can_transition(STATUS_RESOLVED, STATUS_OPEN));
    }

    #[test]
    fn terminal_statuses_have_no_outgoing_edges() {
        for next in VALID_STATUSES {
            assert!(!can_transition(STATUS_CLOSED, next));
            assert!(!can_transition(STATUS_PENDING, next));
        }
    }

    #[test]
    fn self_transitions_are_rejected() {
        for s in VALID_STATUSES {
            assert!(!can_transition(s, s), "'{s}' -> '{s}' must be rejected");
        }
    }

    #[test]
    fn invalid_transition_error_carries_the_edge() {
        let err = validate_transition(STATUS_OPEN, STATUS_RESOLVED).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'open'"));
        assert!(msg.contains("'resolved'"));
    }

    #[test]
    fn blank_subject_is_rejected() {
        assert!(validate_subject("").is_err());
        assert!(validate_subject("   ").is_err());
        assert!(validate_subject("Printer on fire").is_ok());
    }

    #[test]
    fn overlong_subject_is_rejected() {
        let subject = "a".repeat(MAX_SUBJECT_LENGTH + 1);
        assert!(validate_subject(&subject).is_err());
        let subject = "a".repeat(MAX_SUBJECT_LENGTH);
        assert!(validate_subject(&subject).is_ok());
    }

    #[test]
    fn empty_description_is_allowed() {
        assert!(validate_description("").is_ok());
    }

    #[test]
    fn overlong_description_is_rejected() {
        let desc = "a".repeat(MAX_DESCRIPTION_LENGTH + 1);
        assert!(validate_description(&desc).is_err());
    }

    #[test]
    fn ticket_number_has_expected_shape() {
        let now = chrono::DateTime::parse_from_rfc3339("2026-03-14T09:26:53Z")
            .unwrap()
            .with_timezone(&chrono::Utc);
        let number = generate_ticket_number(now);

        assert!(number.starts_with("TKT-20260314-"), "got {number}");
        let suffix = number.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), 6);
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }
}
