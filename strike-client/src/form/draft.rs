//! Booking draft and its validation pipeline

use crate::error::ValidationError;
use shared::models::BookingRequest;

/// Players allowed on one lane
pub const PLAYERS_PER_LANE: u32 = 4;

/// Smallest accepted shoe size
pub const MIN_SHOE_SIZE: f64 = 20.0;

/// Largest accepted shoe size
pub const MAX_SHOE_SIZE: f64 = 60.0;

/// Mutable form data before submission.
///
/// Shoe sizes are kept as typed text; parsing happens in [`validate`].
///
/// [`validate`]: BookingDraft::validate
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    date: String,
    time: String,
    lane_count: u32,
    party_size: u32,
    shoe_sizes: Vec<String>,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            date: String::new(),
            time: String::new(),
            lane_count: 1,
            party_size: 1,
            shoe_sizes: vec![String::new()],
        }
    }
}

impl BookingDraft {
    /// Build a draft from raw field values.
    ///
    /// The shoe list is taken as-is, even when its length disagrees with
    /// `party_size`; [`validate`](Self::validate) reports that.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        lane_count: u32,
        party_size: u32,
        shoe_sizes: Vec<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            lane_count,
            party_size,
            shoe_sizes,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn lane_count(&self) -> u32 {
        self.lane_count
    }

    pub fn party_size(&self) -> u32 {
        self.party_size
    }

    pub fn shoe_sizes(&self) -> &[String] {
        &self.shoe_sizes
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.date = date.into();
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.time = time.into();
    }

    pub fn set_lane_count(&mut self, lanes: u32) {
        self.lane_count = lanes;
    }

    /// Change the number of players and resize the shoe list to match.
    ///
    /// Counts below 1 are ignored. Shrinking drops entries from the end,
    /// growing appends empty entries; entries that survive are untouched.
    pub fn change_party_size(&mut self, people: u32) {
        if people < 1 {
            return;
        }
        self.party_size = people;
        self.shoe_sizes.resize(people as usize, String::new());
    }

    /// Replace the shoe size at `index`. Out of range indices are ignored.
    pub fn change_shoe_size(&mut self, index: usize, value: impl Into<String>) {
        if let Some(slot) = self.shoe_sizes.get_mut(index) {
            *slot = value.into();
        }
    }

    /// Combined local datetime sent as `when`
    pub fn when(&self) -> String {
        format!("{}T{}", self.date, self.time)
    }

    /// Run the validation pipeline.
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// date/time present, shoe count, empty shoe entry, numeric shoe entry,
    /// shoe range, lane capacity.
    pub fn validate(&self) -> Result<BookingRequest, ValidationError> {
        if self.date.is_empty() || self.time.is_empty() {
            return Err(ValidationError::MissingDateTime);
        }

        let shoes = self.validate_shoes()?;

        if u64::from(self.party_size) > u64::from(self.lane_count) * u64::from(PLAYERS_PER_LANE) {
            return Err(ValidationError::LaneCapacity {
                people: self.party_size,
                lanes: self.lane_count,
            });
        }

        Ok(BookingRequest {
            when: self.when(),
            lanes: self.lane_count,
            people: self.party_size,
            shoes,
        })
    }

    fn validate_shoes(&self) -> Result<Vec<f64>, ValidationError> {
        let expected = self.party_size;

        if self.shoe_sizes.len() != expected as usize {
            return Err(ValidationError::ShoeCountMismatch { expected });
        }

        if self.shoe_sizes.iter().any(|s| s.trim().is_empty()) {
            return Err(ValidationError::EmptyShoeSize { expected });
        }

        let sizes = self
            .shoe_sizes
            .iter()
            .map(|s| parse_shoe_size(s))
            .collect::<Option<Vec<_>>>()
            .ok_or(ValidationError::InvalidShoeSize)?;

        if sizes
            .iter()
            .any(|size| !(MIN_SHOE_SIZE..=MAX_SHOE_SIZE).contains(size))
        {
            return Err(ValidationError::ShoeSizeOutOfRange);
        }

        Ok(sizes)
    }
}

fn parse_shoe_size(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoes(sizes: &[&str]) -> Vec<String> {
        sizes.iter().map(|s| s.to_string()).collect()
    }

    fn draft(lanes: u32, people: u32, sizes: &[&str]) -> BookingDraft {
        BookingDraft::new("2025-11-11", "18:00", lanes, people, shoes(sizes))
    }

    #[test]
    fn test_default_draft() {
        let draft = BookingDraft::default();
        assert_eq!(draft.lane_count(), 1);
        assert_eq!(draft.party_size(), 1);
        assert_eq!(draft.shoe_sizes(), &[String::new()]);
    }

    #[test]
    fn test_party_size_resize_keeps_prefix() {
        let mut draft = BookingDraft::default();
        draft.change_shoe_size(0, "42");

        for (new_size, expected) in [
            (3, vec!["42", "", ""]),
            (5, vec!["42", "", "", "", ""]),
            (2, vec!["42", ""]),
            (1, vec!["42"]),
        ] {
            draft.change_party_size(new_size);
            assert_eq!(draft.party_size(), new_size);
            assert_eq!(draft.shoe_sizes(), shoes(&expected).as_slice());
        }
    }

    #[test]
    fn test_party_size_below_one_ignored() {
        let mut draft = BookingDraft::default();
        draft.change_party_size(2);
        draft.change_party_size(0);
        assert_eq!(draft.party_size(), 2);
        assert_eq!(draft.shoe_sizes().len(), 2);
    }

    #[test]
    fn test_change_shoe_size_only_touches_index() {
        let mut draft = draft(1, 3, &["38", "39", "40"]);
        draft.change_shoe_size(1, "abc");
        draft.change_shoe_size(7, "41");
        assert_eq!(draft.shoe_sizes(), shoes(&["38", "abc", "40"]).as_slice());
    }

    #[test]
    fn test_missing_date_or_time() {
        let mut d = draft(1, 1, &["42"]);
        d.set_date("");
        assert_eq!(d.validate(), Err(ValidationError::MissingDateTime));

        let mut d = draft(1, 1, &["42"]);
        d.set_time("");
        assert_eq!(d.validate(), Err(ValidationError::MissingDateTime));
    }

    #[test]
    fn test_count_mismatch_wins_over_other_shoe_errors() {
        assert_eq!(
            draft(1, 3, &["25", "30"]).validate(),
            Err(ValidationError::ShoeCountMismatch { expected: 3 })
        );
        assert_eq!(
            draft(1, 3, &["", "x"]).validate(),
            Err(ValidationError::ShoeCountMismatch { expected: 3 })
        );
    }

    #[test]
    fn test_empty_before_invalid_number() {
        assert_eq!(
            draft(1, 3, &["abc", "  ", "42"]).validate(),
            Err(ValidationError::EmptyShoeSize { expected: 3 })
        );
    }

    #[test]
    fn test_invalid_number_before_range() {
        assert_eq!(
            draft(1, 2, &["70", "forty"]).validate(),
            Err(ValidationError::InvalidShoeSize)
        );
        assert_eq!(
            draft(1, 2, &["NaN", "40"]).validate(),
            Err(ValidationError::InvalidShoeSize)
        );
        assert_eq!(
            draft(1, 1, &["inf"]).validate(),
            Err(ValidationError::InvalidShoeSize)
        );
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            draft(1, 3, &["19", "70", "45"]).validate(),
            Err(ValidationError::ShoeSizeOutOfRange)
        );
    }

    #[test]
    fn test_range_is_inclusive() {
        let request = draft(1, 2, &["20", " 60 "]).validate().unwrap();
        assert_eq!(request.shoes, vec![20.0, 60.0]);
    }

    #[test]
    fn test_capacity_checked_after_valid_shoes() {
        assert_eq!(
            draft(1, 5, &["40", "41", "42", "43", "44"]).validate(),
            Err(ValidationError::LaneCapacity { people: 5, lanes: 1 })
        );
        assert!(draft(2, 5, &["40", "41", "42", "43", "44"]).validate().is_ok());
    }

    #[test]
    fn test_zero_lanes_hits_capacity() {
        assert_eq!(
            draft(0, 1, &["40"]).validate(),
            Err(ValidationError::LaneCapacity { people: 1, lanes: 0 })
        );
    }

    #[test]
    fn test_valid_request() {
        let request = draft(1, 2, &["42", "43.5"]).validate().unwrap();
        assert_eq!(
            request,
            BookingRequest {
                when: "2025-11-11T18:00".into(),
                lanes: 1,
                people: 2,
                shoes: vec![42.0, 43.5],
            }
        );
    }
}
