use bigdecimal::{BigDecimal, Zero};
use std::cmp::Ordering;

/// Anything carrying a signed amount that can be split into credits and debits.
pub trait SignedEntry {
    fn entry_id(&self) -> i32;
    fn entry_amount(&self) -> &BigDecimal;
}

pub fn is_credit(amount: &BigDecimal) -> bool {
    *amount >= BigDecimal::zero()
}

// Larger magnitudes first, equal magnitudes by ascending id.
fn by_magnitude<T: SignedEntry>(a: &T, b: &T) -> Ordering {
    b.entry_amount()
        .abs()
        .cmp(&a.entry_amount().abs())
        .then_with(|| a.entry_id().cmp(&b.entry_id()))
}

/// Credits (`amount >= 0`) followed by debits, each group sorted by
/// descending absolute amount.
pub fn credits_then_debits<T: SignedEntry>(entries: Vec<T>) -> Vec<T> {
    let (mut credits, mut debits): (Vec<T>, Vec<T>) = entries
        .into_iter()
        .partition(|entry| is_credit(entry.entry_amount()));

    credits.sort_by(by_magnitude);
    debits.sort_by(by_magnitude);

    credits.extend(debits);
    credits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Entry(i32, BigDecimal);

    impl SignedEntry for Entry {
        fn entry_id(&self) -> i32 {
            self.0
        }

        fn entry_amount(&self) -> &BigDecimal {
            &self.1
        }
    }

    fn entries(raw: &[(i32, i64)]) -> Vec<Entry> {
        raw.iter()
            .map(|(id, amount)| Entry(*id, BigDecimal::from(*amount)))
            .collect()
    }

    fn ids(sorted: &[Entry]) -> Vec<i32> {
        sorted.iter().map(|e| e.0).collect()
    }

    #[test]
    fn credits_come_before_debits() {
        let sorted = credits_then_debits(entries(&[(1, -10), (2, 5), (3, -300), (4, 1)]));
        assert_eq!(ids(&sorted), vec![2, 4, 3, 1]);
    }

    #[test]
    fn zero_is_a_credit() {
        assert!(is_credit(&BigDecimal::zero()));
        let sorted = credits_then_debits(entries(&[(1, -1), (2, 0)]));
        assert_eq!(ids(&sorted), vec![2, 1]);
    }

    #[test]
    fn groups_are_sorted_by_descending_magnitude() {
        let sorted = credits_then_debits(entries(&[
            (1, 20),
            (2, -5),
            (3, 300),
            (4, -1000),
            (5, 45),
            (6, -60),
        ]));
        assert_eq!(ids(&sorted), vec![3, 5, 1, 4, 6, 2]);
    }

    #[test]
    fn equal_magnitudes_fall_back_to_ascending_id() {
        let sorted = credits_then_debits(entries(&[(9, 50), (3, 50), (7, -50), (2, -50), (5, 50)]));
        assert_eq!(ids(&sorted), vec![3, 5, 9, 2, 7]);
    }

    #[test]
    fn decimal_amounts_are_compared_exactly() {
        let sorted = credits_then_debits(vec![
            Entry(1, "10.05".parse().unwrap()),
            Entry(2, "10.5".parse().unwrap()),
            Entry(3, "10.50".parse().unwrap()),
        ]);
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn empty_input_stays_empty() {
        let sorted: Vec<Entry> = credits_then_debits(Vec::new());
        assert!(sorted.is_empty());
    }
}
