use chrono::{NaiveDate, NaiveTime};

use crate::modules::time_entries::core::decision::DecideError;
use crate::modules::time_entries::core::policy::OverlapScope;
use crate::modules::time_entries::core::time_entry::TimeEntry;

/// Half-open interval test: `[a_start, a_end)` and `[b_start, b_end)` share an instant.
/// Touching boundaries do not overlap.
pub fn intervals_overlap(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// The window a new or edited entry wants to occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// The entry being edited, which must not collide with itself.
    pub exclude_time_entry_id: Option<i64>,
}

impl Candidate {
    pub fn of(entry: &TimeEntry) -> Self {
        Self {
            employee_id: entry.employee_id,
            date: entry.date,
            start_time: entry.start_time,
            end_time: entry.end_time,
            exclude_time_entry_id: Some(entry.id),
        }
    }
}

/// Rejects the candidate when any timed entry of the same employee overlaps it.
///
/// A candidate without both times is accepted; the check runs again once the
/// end time is known.
pub fn check_no_overlap<'a>(
    existing: impl IntoIterator<Item = &'a TimeEntry>,
    candidate: &Candidate,
    scope: OverlapScope,
) -> Result<(), DecideError> {
    let Some((start, end)) = candidate.start_time.zip(candidate.end_time) else {
        return Ok(());
    };

    let conflict = existing
        .into_iter()
        .filter(|entry| entry.employee_id == candidate.employee_id)
        .filter(|entry| Some(entry.id) != candidate.exclude_time_entry_id)
        .filter(|entry| match scope {
            OverlapScope::SameDay => entry.date == candidate.date,
            OverlapScope::AnyDay => true,
        })
        .find(|entry| {
            entry
                .interval()
                .is_some_and(|(other_start, other_end)| {
                    intervals_overlap(other_start, other_end, start, end)
                })
        });

    match conflict {
        Some(entry) => Err(DecideError::Overlap {
            conflicting_time_entry_id: entry.id,
        }),
        None => Ok(()),
    }
}
