//! Small helpers shared by reducers.

use std::cmp::Ordering;

use crate::model::Timestamped;

/// Sort newest `createdAt` first.
///
/// Stable; records without a timestamp keep their relative order and go
/// after every dated record.
pub fn sort_newest_first<T: Timestamped>(items: &mut [T]) {
    items.sort_by(|a, b| match (a.created_at(), b.created_at()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    struct Stamp(u32, Option<DateTime<Utc>>);

    impl Timestamped for Stamp {
        fn created_at(&self) -> Option<DateTime<Utc>> {
            self.1
        }
    }

    fn day(d: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0).unwrap())
    }

    #[test]
    fn newest_first_undated_last() {
        let mut items = vec![
            Stamp(1, None),
            Stamp(2, day(3)),
            Stamp(3, day(9)),
            Stamp(4, None),
            Stamp(5, day(1)),
        ];
        sort_newest_first(&mut items);
        let order: Vec<u32> = items.iter().map(|s| s.0).collect();
        assert_eq!(order, vec![3, 2, 5, 1, 4]);
    }
}
