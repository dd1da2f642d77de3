use crate::operations::db_types::{OperationRecord, OperationStatus};
use crate::utils::month::month_completion;
use crate::utils::ordering::is_credit;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Checked-only figure next to the figure once pending entries land.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryFigures {
    pub current: BigDecimal,
    pub forecast: BigDecimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthSummary {
    pub credit: SummaryFigures,
    pub debit: SummaryFigures,
    pub balance: SummaryFigures,
    /// Percentage of the month elapsed, 0..=100
    pub completion: u32,
}

#[derive(Debug, Default)]
struct Totals {
    credits_checked: BigDecimal,
    credits_pending: BigDecimal,
    debits_checked: BigDecimal,
    debits_pending: BigDecimal,
}

/// Aggregates a month's operations. Callers pass only the operations of the
/// month being summarised; `today` drives the completion figure.
pub fn summarize(operations: &[OperationRecord], today: NaiveDate) -> MonthSummary {
    let mut totals = Totals::default();

    for op in operations {
        let bucket = match (is_credit(&op.amount), op.status) {
            (true, OperationStatus::Checked) => &mut totals.credits_checked,
            (true, OperationStatus::Pending) => &mut totals.credits_pending,
            (false, OperationStatus::Checked) => &mut totals.debits_checked,
            (false, OperationStatus::Pending) => &mut totals.debits_pending,
        };
        *bucket += op.amount.clone();
    }

    let Totals {
        credits_checked,
        credits_pending,
        debits_checked,
        debits_pending,
    } = totals;

    let credit_forecast = &credits_checked + &credits_pending;
    let debit_forecast = &debits_checked + &debits_pending;

    MonthSummary {
        balance: SummaryFigures {
            current: &credits_checked + &debits_checked,
            forecast: &credit_forecast + &debit_forecast,
        },
        credit: SummaryFigures {
            current: credits_checked,
            forecast: credit_forecast,
        },
        debit: SummaryFigures {
            current: debits_checked,
            forecast: debit_forecast,
        },
        completion: month_completion(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::Zero;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, d).unwrap()
    }

    fn op(id: i32, amount: &str, status: OperationStatus) -> OperationRecord {
        OperationRecord {
            id,
            label: format!("op-{}", id),
            amount: amount.parse().unwrap(),
            status,
            month: day(1),
            from_budget: false,
        }
    }

    fn dec(v: &str) -> BigDecimal {
        v.parse().unwrap()
    }

    #[test]
    fn checked_credit_and_pending_debit() {
        let ops = vec![
            op(1, "100", OperationStatus::Checked),
            op(2, "-50", OperationStatus::Pending),
        ];
        let summary = summarize(&ops, day(15));

        assert_eq!(summary.credit.current, dec("100"));
        assert_eq!(summary.credit.forecast, dec("100"));
        assert_eq!(summary.debit.current, dec("0"));
        assert_eq!(summary.debit.forecast, dec("-50"));
        assert_eq!(summary.balance.current, dec("100"));
        assert_eq!(summary.balance.forecast, dec("50"));
        assert_eq!(summary.completion, 50);
    }

    #[test]
    fn balance_is_signed_sum_of_credit_and_debit() {
        let ops = vec![
            op(1, "1200.50", OperationStatus::Checked),
            op(2, "300", OperationStatus::Pending),
            op(3, "-75.25", OperationStatus::Checked),
            op(4, "-900", OperationStatus::Checked),
            op(5, "-10", OperationStatus::Pending),
            op(6, "0", OperationStatus::Checked),
        ];
        let summary = summarize(&ops, day(3));

        assert_eq!(summary.balance.current, &summary.credit.current + &summary.debit.current);
        assert_eq!(summary.balance.forecast, &summary.credit.forecast + &summary.debit.forecast);
        assert_eq!(summary.credit.current, dec("1200.50"));
        assert_eq!(summary.credit.forecast, dec("1500.50"));
        assert_eq!(summary.debit.current, dec("-975.25"));
        assert_eq!(summary.debit.forecast, dec("-985.25"));
        assert_eq!(summary.balance.current, dec("225.25"));
        assert_eq!(summary.balance.forecast, dec("515.25"));
    }

    #[test]
    fn decimal_sums_do_not_drift() {
        let ops = vec![
            op(1, "0.1", OperationStatus::Checked),
            op(2, "0.2", OperationStatus::Checked),
        ];
        let summary = summarize(&ops, day(1));
        assert_eq!(summary.credit.current, dec("0.3"));
    }

    #[test]
    fn no_operations_is_all_zero() {
        let summary = summarize(&[], day(30));
        for figures in [&summary.credit, &summary.debit, &summary.balance] {
            assert!(figures.current.is_zero());
            assert!(figures.forecast.is_zero());
        }
        assert_eq!(summary.completion, 100);
    }

    #[test]
    fn summarising_twice_gives_the_same_result() {
        let ops = vec![
            op(1, "10", OperationStatus::Pending),
            op(2, "-4", OperationStatus::Checked),
        ];
        assert_eq!(summarize(&ops, day(9)), summarize(&ops, day(9)));
    }
}
