// ==========================================
// Retouch SLA Checker - Status Aggregator
// ==========================================
// Pure roll-up of the three category flags; no other inputs.
// ==========================================

use crate::domain::LATE;

/// "LATE" when any category flag is "LATE", otherwise empty.
pub fn aggregate_status<'a, I>(flags: I) -> &'static str
where
    I: IntoIterator<Item = &'a str>,
{
    if flags.into_iter().any(|f| f == LATE) {
        LATE
    } else {
        ""
    }
}
