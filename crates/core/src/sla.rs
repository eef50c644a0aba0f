//! Priority vocabulary and SLA deadline computation.
//!
//! The SLA deadline is a pure function of priority and creation time. It is
//! fixed when the ticket is created and never recomputed, regardless of later
//! status changes.

use chrono::Duration;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Priority constants
// ---------------------------------------------------------------------------

pub const PRIORITY_LOW: &str = "low";
pub const PRIORITY_MEDIUM: &str = "medium";
pub const PRIORITY_HIGH: &str = "high";
pub const PRIORITY_CRITICAL: &str = "critical";

/// All valid ticket priorities, in ascending order of urgency.
pub const VALID_PRIORITIES: &[&str] = &[
    PRIORITY_LOW,
    PRIORITY_MEDIUM,
    PRIORITY_HIGH,
    PRIORITY_CRITICAL,
];

/// Width of the "critical" urgency window before the deadline.
pub const CRITICAL_WINDOW_HOURS: i64 = 2;

/// Validate that a priority string is one of the known priorities.
pub fn validate_priority(priority: &str) -> Result<(), CoreError> {
    if VALID_PRIORITIES.contains(&priority) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid ticket priority '{}'. Must be one of: {:?}",
            priority, VALID_PRIORITIES
        )))
    }
}

// ---------------------------------------------------------------------------
// Deadline computation
// ---------------------------------------------------------------------------

/// Hours allowed to address a ticket of the given priority.
///
/// Returns `None` for unknown priorities; callers validate the priority
/// before computing a deadline.
pub fn sla_hours(priority: &str) -> Option<i64> {
    match priority {
        PRIORITY_CRITICAL => Some(2),
        PRIORITY_HIGH => Some(8),
        PRIORITY_MEDIUM => Some(24),
        PRIORITY_LOW => Some(72),
        _ => None,
    }
}

/// Compute the SLA deadline for a ticket created at `created_at`.
pub fn compute_deadline(priority: &str, created_at: Timestamp) -> Result<Timestamp, CoreError> {
    let hours = sla_hours(priority).ok_or_else(|| {
        CoreError::Validation(format!(
            "Invalid ticket priority '{}'. Must be one of: {:?}",
            priority, VALID_PRIORITIES
        ))
    })?;
    Ok(created_at + Duration::hours(hours))
}

// ---------------------------------------------------------------------------
// Urgency classification
// ---------------------------------------------------------------------------

/// Derived urgency bucket for a ticket's SLA deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    /// The deadline has already passed.
    Overdue,
    /// The deadline is less than [`CRITICAL_WINDOW_HOURS`] away.
    Critical,
    /// The deadline is comfortably in the future.
    Normal,
}

/// Classify how urgent a deadline is relative to `now`.
pub fn classify_urgency(deadline: Timestamp, now: Timestamp) -> Urgency {
    if deadline < now {
        Urgency::Overdue
    } else if deadline - now < Duration::hours(CRITICAL_WINDOW_HOURS) {
        Urgency::Critical
    } else {
        Urgency::Normal
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
