use chrono::NaiveDate;

#[derive(Clone, Debug)]
pub struct OperationsConfig {
    /// Bucket new operations are stamped with and listings match against
    pub current_month: NaiveDate,
    pub today: NaiveDate,
}
