// ==========================================
// Retouch SLA Checker - Domain Types
// ==========================================
// Workflow categories, SLA verdicts and the
// studio-residency states.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Fixed output strings
// ==========================================
// These land verbatim in the exported table.
pub const LATE: &str = "LATE";
pub const SCANNED_OUT: &str = "SCANNED OUT";
pub const SCANNED_OUT_NEVER_SHOT: &str = "SCANNED OUT AND NEVER SHOT";
pub const AWAITING_MODEL_SHOT: &str = "Awaiting model shot";

// ==========================================
// Workflow category
// ==========================================
// Each category is an independent photography workflow with its own
// photo/upload date pair and its own SLA allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Stills,
    Model,
    Mannequin,
}

impl Category {
    /// All categories in fixed evaluation (and output-column) order.
    pub const ALL: [Category; 3] = [Category::Stills, Category::Model, Category::Mannequin];

    /// Title-case label used in the `{Category} Out of SLA` column.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Stills => "Stills",
            Category::Model => "Model",
            Category::Mannequin => "Mannequin",
        }
    }

    /// Upper-case label used in the `Day(s) out of SLA - {CATEGORY}` column.
    pub fn label_upper(&self) -> &'static str {
        match self {
            Category::Stills => "STILLS",
            Category::Model => "MODEL",
            Category::Mannequin => "MANNEQUIN",
        }
    }

    /// Name of the breach-flag output column.
    pub fn flag_column(&self) -> String {
        format!("{} Out of SLA", self.label())
    }

    /// Name of the overage output column.
    pub fn overage_column(&self) -> String {
        format!("Day(s) out of SLA - {}", self.label_upper())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// SLA verdict (per record, per category)
// ==========================================
// overage_days is already clamped to >= 0; breached iff overage > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaVerdict {
    pub breached: bool,
    pub overage_days: i64,
}

impl SlaVerdict {
    /// Build a verdict from an elapsed business-day count and an allowance.
    ///
    /// Negative elapsed counts (upload recorded before the photo date) are
    /// treated as "not yet breached": the clamp to zero happens here, after
    /// the allowance subtraction, never on the raw elapsed count.
    pub fn from_elapsed(elapsed: i64, allowance: i64) -> Self {
        let overage_days = (elapsed - allowance).max(0);
        Self {
            breached: overage_days > 0,
            overage_days,
        }
    }

    /// Text for the `{Category} Out of SLA` column.
    pub fn flag(&self) -> &'static str {
        if self.breached {
            LATE
        } else {
            ""
        }
    }
}

// ==========================================
// Studio-residency state (per record)
// ==========================================
// Ordered priority list, first hit wins. The order is load-bearing:
// a scanned-out record that was shot must classify as ScannedOut,
// never ScannedOutNeverShot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResidencyState {
    /// Scan-in and scan-out known, all six photo/upload fields blank.
    ScannedOutNeverShot,
    /// Scan-out known (shot status irrelevant).
    ScannedOut,
    /// Scan-in known, scan-out unknown; carries business days since scan-in.
    InStudio(i64),
    /// No usable scan information.
    Unknown,
}

impl fmt::Display for ResidencyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResidencyState::ScannedOutNeverShot => write!(f, "{}", SCANNED_OUT_NEVER_SHOT),
            ResidencyState::ScannedOut => write!(f, "{}", SCANNED_OUT),
            ResidencyState::InStudio(days) => write!(f, "{}", days),
            ResidencyState::Unknown => Ok(()),
        }
    }
}
