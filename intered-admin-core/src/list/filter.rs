//! Composite filter predicate: free-text search AND facets AND same-day date.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Facets};

/// Which calendar a timestamp's "day" is computed in for the date filter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    /// Calendar day in UTC
    #[default]
    Utc,
    /// Calendar day in the machine's local timezone
    Local,
    /// Calendar day at a fixed offset east of UTC
    Fixed { offset_minutes: i32 },
}

impl DayBoundary {
    /// Calendar date of `ts` under this boundary.
    #[must_use]
    pub fn day_of(self, ts: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Utc => ts.date_naive(),
            Self::Local => ts.with_timezone(&Local).date_naive(),
            Self::Fixed { offset_minutes } => offset_minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt)
                .map_or_else(|| ts.date_naive(), |tz| ts.with_timezone(&tz).date_naive()),
        }
    }
}

/// Per-page filter state.
#[derive(Debug, Clone)]
pub struct FilterState<E: Entity> {
    /// Case-insensitive substring query, empty matches everything
    pub search: String,
    pub facets: E::Facets,
    /// Same-calendar-day filter
    pub date: Option<NaiveDate>,
    pub day_boundary: DayBoundary,
}

impl<E: Entity> Default for FilterState<E> {
    fn default() -> Self {
        Self {
            search: String::new(),
            facets: E::Facets::default(),
            date: None,
            day_boundary: DayBoundary::default(),
        }
    }
}

impl<E: Entity> FilterState<E> {
    #[must_use]
    pub fn with_day_boundary(day_boundary: DayBoundary) -> Self {
        Self {
            day_boundary,
            ..Self::default()
        }
    }

    /// True when no predicate is active, i.e. the filter is the identity.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.search.is_empty() && self.facets.is_unset() && self.date.is_none()
    }

    /// Resets search, facets and date. The day boundary is configuration and stays.
    pub fn clear(&mut self) {
        self.search.clear();
        self.facets.clear();
        self.date = None;
    }

    #[must_use]
    pub fn matches(&self, entity: &E) -> bool {
        Predicate::new(self).matches(entity)
    }

    /// Ordered subsequence of `records` for which every active predicate holds.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [E]) -> Vec<&'a E> {
        let predicate = Predicate::new(self);
        records.iter().filter(|e| predicate.matches(e)).collect()
    }

    /// Positions in `records` of the matching rows, in order.
    #[must_use]
    pub fn matching_indices(&self, records: &[E]) -> Vec<usize> {
        let predicate = Predicate::new(self);
        records
            .iter()
            .enumerate()
            .filter_map(|(i, e)| predicate.matches(e).then_some(i))
            .collect()
    }
}

/// Filter state with the query lowercased once.
struct Predicate<'f, E: Entity> {
    query: String,
    filter: &'f FilterState<E>,
}

impl<'f, E: Entity> Predicate<'f, E> {
    fn new(filter: &'f FilterState<E>) -> Self {
        Self {
            query: filter.search.to_lowercase(),
            filter,
        }
    }

    fn matches(&self, entity: &E) -> bool {
        self.matches_search(entity) && self.filter.facets.matches(entity) && self.matches_date(entity)
    }

    fn matches_search(&self, entity: &E) -> bool {
        self.query.is_empty()
            || entity
                .searchable_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&self.query))
    }

    fn matches_date(&self, entity: &E) -> bool {
        let Some(date) = self.filter.date else {
            return true;
        };
        // an undated record can never be on the selected day
        entity
            .filter_timestamp()
            .is_some_and(|ts| self.filter.day_boundary.day_of(ts) == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::datetime::ts;

    #[test]
    fn day_boundary_shifts_late_utc_timestamps() {
        let late = ts("2023-05-01T22:30:00Z");
        let may1 = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        let may2 = NaiveDate::from_ymd_opt(2023, 5, 2).unwrap();

        assert_eq!(DayBoundary::Utc.day_of(late), may1);
        // IST is +05:30
        assert_eq!(DayBoundary::Fixed { offset_minutes: 330 }.day_of(late), may2);
        assert_eq!(DayBoundary::Fixed { offset_minutes: -300 }.day_of(late), may1);
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let late = ts("2023-05-01T22:30:00Z");
        let boundary = DayBoundary::Fixed {
            offset_minutes: 100 * 60,
        };
        assert_eq!(boundary.day_of(late), late.date_naive());
    }

    #[test]
    fn overflowing_offset_falls_back_to_utc() {
        let late = ts("2023-05-01T22:30:00Z");
        let boundary: DayBoundary =
            serde_json::from_str(r#"{"fixed":{"offset_minutes":40000000}}"#).unwrap();
        assert_eq!(boundary.day_of(late), late.date_naive());
        let boundary = DayBoundary::Fixed {
            offset_minutes: i32::MIN,
        };
        assert_eq!(boundary.day_of(late), late.date_naive());
    }

    #[test]
    fn day_boundary_config_format() {
        let json = serde_json::to_string(&DayBoundary::Fixed { offset_minutes: 330 }).unwrap();
        assert_eq!(json, r#"{"fixed":{"offset_minutes":330}}"#);
        let utc: DayBoundary = serde_json::from_str(r#""utc""#).unwrap();
        assert_eq!(utc, DayBoundary::Utc);
    }
}
