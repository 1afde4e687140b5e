// ==========================================
// Retouch SLA Checker - Engine Configuration
// ==========================================
// One immutable value passed into the engine entry point.
// The defaults mirror the production workbook layout: 21 pruned
// column letters and a 2-business-day allowance per category.
// ==========================================

use crate::domain::Category;
use serde::{Deserialize, Serialize};

// ==========================================
// CategorySpec - one workflow category
// ==========================================
// Photo/upload column names are exact, case-sensitive. The scan
// columns are heuristic; these are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub category: Category,
    pub photo_column: String,
    pub upload_column: String,
    /// SLA allowance in business days.
    pub allowance_days: i64,
}

// ==========================================
// EngineConfig
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Spreadsheet-style column letters to prune before anything else.
    /// Positional: they address the original column order of the input.
    pub pruned_columns: Vec<String>,
    /// The three workflow categories, in evaluation order.
    pub categories: Vec<CategorySpec>,
    /// Business days after the Stills photo date before the
    /// "Awaiting model shot" note fires.
    pub advisory_threshold_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pruned_columns: [
                "A", "C", "D", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "S", "X", "AB",
                "AC", "AD", "AE", "AF", "AG",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            categories: vec![
                CategorySpec {
                    category: Category::Stills,
                    photo_column: "Photo Still Date".to_string(),
                    upload_column: "Still Upload Date".to_string(),
                    allowance_days: 2,
                },
                CategorySpec {
                    category: Category::Model,
                    photo_column: "Photo Model Date".to_string(),
                    upload_column: "Model Upload Date".to_string(),
                    allowance_days: 2,
                },
                CategorySpec {
                    category: Category::Mannequin,
                    photo_column: "Photo Mannequin Date".to_string(),
                    upload_column: "Mannequin Upload Date".to_string(),
                    allowance_days: 2,
                },
            ],
            advisory_threshold_days: 2,
        }
    }
}

impl EngineConfig {
    /// The six photo/upload column names, in category order. Used by the
    /// studio-residency classifier's all-blank check.
    pub fn shot_columns(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|c| [c.photo_column.as_str(), c.upload_column.as_str()])
            .collect()
    }
}
