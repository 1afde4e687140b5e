// ==========================================
// Retouch SLA Checker - Advisory Note Generator
// ==========================================
// "Awaiting model shot": the stills were photographed, the garment
// has not been scanned out, and more than the threshold of business
// days has passed. Evaluated independently of the Stills SLA verdict
// and free to co-occur with a breach.
// ==========================================

use crate::domain::AWAITING_MODEL_SHOT;
use crate::engine::busdays::business_days;
use chrono::NaiveDate;

pub struct AdvisoryNoteGenerator;

impl AdvisoryNoteGenerator {
    pub fn evaluate(
        &self,
        stills_photo_date: Option<NaiveDate>,
        scan_out_date: Option<NaiveDate>,
        today: NaiveDate,
        threshold_days: i64,
    ) -> Option<&'static str> {
        let photo = stills_photo_date?;
        if scan_out_date.is_some() {
            return None;
        }
        if business_days(photo, today) > threshold_days {
            Some(AWAITING_MODEL_SHOT)
        } else {
            None
        }
    }
}
