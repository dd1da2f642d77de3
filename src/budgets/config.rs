use chrono::NaiveDate;

#[derive(Clone, Debug)]
pub struct BudgetsConfig {
    /// Bucket transferred operations are stamped with
    pub current_month: NaiveDate,
}
