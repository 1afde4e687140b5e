// ==========================================
// Retouch SLA Checker - SLA Evaluator
// ==========================================
// Per (record, category): no photo date, no verdict. Otherwise the
// interval runs from the photo date to the upload date when present,
// else to the reference "today" (still accruing).
// ==========================================

use crate::domain::SlaVerdict;
use crate::engine::busdays::business_days;
use chrono::NaiveDate;

pub struct SlaEvaluator;

impl SlaEvaluator {
    /// Evaluate one category for one record.
    ///
    /// Returns None when the photo date is unknown; a present upload
    /// date with an absent photo date is still a skip, never a partial
    /// evaluation.
    pub fn evaluate(
        &self,
        photo_date: Option<NaiveDate>,
        upload_date: Option<NaiveDate>,
        today: NaiveDate,
        allowance_days: i64,
    ) -> Option<SlaVerdict> {
        let photo = photo_date?;
        let end = upload_date.unwrap_or(today);
        let elapsed = business_days(photo, end);
        Some(SlaVerdict::from_elapsed(elapsed, allowance_days))
    }
}
