use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::time_entries::core::decision::DecideError;
use crate::modules::time_entries::core::time_entry::TimeEntry;

/// Inclusive calendar range; an open end is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Submitted entries are locked unless the caller explicitly overrides.
pub fn ensure_mutable(entry: &TimeEntry, override_lock: bool) -> Result<(), DecideError> {
    if entry.submitted && !override_lock {
        return Err(DecideError::LockedEntry {
            time_entry_id: entry.id,
        });
    }
    Ok(())
}

pub fn is_eligible_for_submission(entry: &TimeEntry, employee_id: i64, range: &DateRange) -> bool {
    entry.employee_id == employee_id
        && entry.end_time.is_some()
        && !entry.submitted
        && range.contains(entry.date)
}

/// Locks every eligible entry and returns only the ones that changed, so a
/// second run over the same entries returns nothing.
pub fn submit_entries(
    entries: impl IntoIterator<Item = TimeEntry>,
    employee_id: i64,
    range: &DateRange,
    now: DateTime<Utc>,
) -> Vec<TimeEntry> {
    entries
        .into_iter()
        .filter(|entry| is_eligible_for_submission(entry, employee_id, range))
        .map(|mut entry| {
            entry.mark_submitted(now);
            entry
        })
        .collect()
}

#[cfg(test)]
mod submission_tests {
    use super::*;
    use crate::tests::fixtures::time_entries::{at, day, make_time_entry};
    use rstest::{fixture, rstest};

    #[fixture]
    fn entries() -> Vec<TimeEntry> {
        let mut other_day = make_time_entry(3, 7, Some(at(8, 0)), Some(at(9, 0)));
        other_day.date = day().succ_opt().unwrap();
        vec![
            make_time_entry(1, 7, Some(at(8, 0)), Some(at(12, 0))),
            make_time_entry(2, 7, Some(at(13, 0)), None),
            other_day,
            make_time_entry(4, 8, Some(at(8, 0)), Some(at(12, 0))),
        ]
    }

    #[rstest]
    fn it_should_lock_timed_entries_of_the_employee(entries: Vec<TimeEntry>) {
        let now = Utc::now();
        let submitted = submit_entries(entries, 7, &DateRange::default(), now);
        let ids: Vec<i64> = submitted.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(submitted.iter().all(|entry| entry.submitted));
        assert!(submitted.iter().all(|entry| entry.submitted_at == Some(now)));
    }

    #[rstest]
    fn it_should_respect_the_date_range(entries: Vec<TimeEntry>) {
        let range = DateRange {
            from: Some(day()),
            to: Some(day()),
        };
        let submitted = submit_entries(entries, 7, &range, Utc::now());
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].id, 1);
    }

    #[rstest]
    fn it_should_converge_to_nothing_on_a_second_run(entries: Vec<TimeEntry>) {
        let now = Utc::now();
        let first = submit_entries(entries.clone(), 7, &DateRange::default(), now);
        let after_first: Vec<TimeEntry> = entries
            .into_iter()
            .map(|entry| {
                first
                    .iter()
                    .find(|submitted| submitted.id == entry.id)
                    .cloned()
                    .unwrap_or(entry)
            })
            .collect();
        let second = submit_entries(after_first, 7, &DateRange::default(), now);
        assert!(second.is_empty());
    }

    #[rstest]
    fn it_should_lock_submitted_entries_unless_overridden() {
        let mut entry = make_time_entry(1, 7, Some(at(8, 0)), Some(at(12, 0)));
        assert_eq!(ensure_mutable(&entry, false), Ok(()));

        entry.mark_submitted(Utc::now());
        assert_eq!(
            ensure_mutable(&entry, false),
            Err(DecideError::LockedEntry { time_entry_id: 1 })
        );
        assert_eq!(ensure_mutable(&entry, true), Ok(()));
    }

    #[rstest]
    #[case(None, None, true)]
    #[case(Some(day()), None, true)]
    #[case(None, Some(day()), true)]
    #[case(day().succ_opt(), None, false)]
    #[case(None, day().pred_opt(), false)]
    fn it_should_include_both_ends_of_the_range(
        #[case] from: Option<NaiveDate>,
        #[case] to: Option<NaiveDate>,
        #[case] expected: bool,
    ) {
        assert_eq!(DateRange { from, to }.contains(day()), expected);
    }
}
