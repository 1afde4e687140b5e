// ==========================================
// Retouch SLA Checker - Studio-Residency Classifier
// ==========================================
// A flat 4-branch priority list; the first matching branch wins.
// Expressed as a single ordered match so the precedence survives
// refactors.
// ==========================================

use crate::domain::ResidencyState;
use crate::engine::busdays::business_days;
use chrono::NaiveDate;

pub struct ResidencyClassifier;

impl ResidencyClassifier {
    /// Classify one record.
    ///
    /// `all_shot_fields_blank` covers all six category photo/upload
    /// fields; absent columns count as blank.
    pub fn classify(
        &self,
        scan_in: Option<NaiveDate>,
        scan_out: Option<NaiveDate>,
        all_shot_fields_blank: bool,
        today: NaiveDate,
    ) -> ResidencyState {
        match (scan_in, scan_out) {
            // 1) in and out known, never shot
            (Some(_), Some(_)) if all_shot_fields_blank => ResidencyState::ScannedOutNeverShot,
            // 2) scanned out, shot status irrelevant
            (_, Some(_)) => ResidencyState::ScannedOut,
            // 3) still in the studio
            (Some(scan_in), None) => ResidencyState::InStudio(business_days(scan_in, today)),
            // 4) nothing usable
            (None, None) => ResidencyState::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_never_shot_takes_precedence() {
        let state = ResidencyClassifier.classify(
            Some(date(2024, 1, 15)),
            Some(date(2024, 1, 19)),
            true,
            date(2024, 1, 22),
        );
        assert_eq!(state, ResidencyState::ScannedOutNeverShot);
    }

    #[test]
    fn test_scanned_out_when_any_shot_field_present() {
        let state = ResidencyClassifier.classify(
            Some(date(2024, 1, 15)),
            Some(date(2024, 1, 19)),
            false,
            date(2024, 1, 22),
        );
        assert_eq!(state, ResidencyState::ScannedOut);
    }

    #[test]
    fn test_scanned_out_even_without_scan_in() {
        let state =
            ResidencyClassifier.classify(None, Some(date(2024, 1, 19)), true, date(2024, 1, 22));
        assert_eq!(state, ResidencyState::ScannedOut);
    }

    #[test]
    fn test_in_studio_counts_business_days() {
        // Mon 15th to Mon 22nd: 5 business days
        let state =
            ResidencyClassifier.classify(Some(date(2024, 1, 15)), None, false, date(2024, 1, 22));
        assert_eq!(state, ResidencyState::InStudio(5));
    }

    #[test]
    fn test_unknown_when_no_scan_dates() {
        let state = ResidencyClassifier.classify(None, None, true, date(2024, 1, 22));
        assert_eq!(state, ResidencyState::Unknown);
    }
}
