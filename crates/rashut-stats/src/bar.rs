//! Flat per-unit bar chart summary
//!
//! The bar chart shows task counts per organizational unit with an average
//! completion line drawn across the bars.

use serde::{Deserialize, Serialize};

/// Fill colors assigned to units by position
pub const UNIT_PALETTE: [&str; 20] = [
    "#E8F5E9", "#C8E6C9", "#A5D6A7", "#81C784", "#66BB6A", "#1565C0", "#212121", "#616161",
    "#B39DDB", "#9575CD", "#7E57C2", "#5E35B1", "#FFB3BA", "#FF8A80", "#EF5350", "#E57373",
    "#81D4FA", "#4FC3F7", "#29B6F6", "#FFC1CC",
];

/// The average line sits slightly below the scaled maximum
const AVERAGE_LINE_SCALE: f64 = 0.9;

/// One unit row as reported by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitTally {
    /// Unit name; unnamed rows carry only a stray percentage and are not drawn
    pub name: Option<String>,
    /// Tasks owned by the unit
    pub task_count: Option<u64>,
    /// Completion percentage, when reported
    pub percentage: Option<u32>,
}

impl UnitTally {
    /// Named unit
    #[must_use]
    pub fn new(name: impl Into<String>, task_count: u64, percentage: Option<u32>) -> Self {
        Self {
            name: Some(name.into()),
            task_count: Some(task_count),
            percentage,
        }
    }
}

/// A unit ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitBar {
    /// Unit name
    pub name: String,
    /// Tasks owned by the unit
    pub task_count: u64,
    /// Completion percentage, when reported
    pub percentage: Option<u32>,
    /// Fill color
    pub color: &'static str,
}

/// Bar chart data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartSummary {
    /// Drawable units in input order
    pub units: Vec<UnitBar>,
    /// Sum of task counts
    pub total_tasks: u64,
    /// Rounded mean of the reported percentages
    pub average_percentage: u32,
    /// Y position of the average line, in task-count units
    pub average_line: f64,
}

impl BarChartSummary {
    /// Summarize unit rows, skipping unnamed ones
    #[must_use]
    pub fn from_units(rows: &[UnitTally]) -> Self {
        let units: Vec<UnitBar> = rows
            .iter()
            .enumerate()
            .filter_map(|(idx, row)| {
                let name = row.name.clone()?;
                Some(UnitBar {
                    name,
                    task_count: row.task_count.unwrap_or(0),
                    percentage: row.percentage,
                    color: UNIT_PALETTE[idx.min(UNIT_PALETTE.len() - 1)],
                })
            })
            .collect();

        let total_tasks = units.iter().map(|u| u.task_count).sum();
        let reported: Vec<u32> = units.iter().filter_map(|u| u.percentage).collect();
        #[allow(clippy::cast_precision_loss)]
        let mean = if reported.is_empty() {
            0.0
        } else {
            reported.iter().map(|p| f64::from(*p)).sum::<f64>() / reported.len() as f64
        };
        let max_tasks = units.iter().map(|u| u.task_count).max().unwrap_or(0);

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let average_percentage = mean.round() as u32;
        #[allow(clippy::cast_precision_loss)]
        let average_line = mean / 100.0 * max_tasks as f64 * AVERAGE_LINE_SCALE;

        Self {
            units,
            total_tasks,
            average_percentage,
            average_line,
        }
    }
}

/// Demo unit rows shipped with the dashboard for offline use
#[must_use]
pub fn demo_units() -> Vec<UnitTally> {
    let named = [
        ("ביקורת פנים", 1, None),
        ("נע\"ם", 6, None),
        ("זיהובת", 10, Some(100)),
        ("הרשאות", 10, Some(100)),
        ("חשבונת", 10, None),
        ("מס הכנסה", 18, None),
        ("מימי מקרקעין", 21, Some(61)),
        ("ייעוץ משפטי, רש, נכסים וליגיסטיקה", 23, Some(68)),
        ("תכנון", 35, Some(25)),
        ("מקצועות חשבונת וניהול סיכונים", 35, None),
        ("מקצועות", 39, Some(72)),
        ("בתי המכס", 63, Some(70)),
        ("תכנון וכלכלה", 101, None),
        ("חקירות ומודיעין", 110, Some(74)),
        ("שירות לקוחות", 124, None),
        ("ניהול המנ האנושי", 159, Some(86)),
        ("איכפ הגבירה", 176, Some(86)),
        ("שומה וביקורת", 202, Some(85)),
        ("מיילזג המכס", 219, Some(78)),
    ];

    let mut rows: Vec<UnitTally> = named
        .into_iter()
        .map(|(name, count, pct)| UnitTally::new(name, count, pct))
        .collect();
    rows.extend([74, 81, 89, 87].into_iter().map(|pct| UnitTally {
        name: None,
        task_count: None,
        percentage: Some(pct),
    }));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_summary() {
        let summary = BarChartSummary::from_units(&demo_units());

        assert_eq!(summary.units.len(), 19);
        assert_eq!(summary.total_tasks, 1362);
        // mean of the 12 reported percentages
        assert_eq!(summary.average_percentage, 75);
        assert_eq!(summary.units[0].color, UNIT_PALETTE[0]);
        assert_eq!(summary.units[18].color, UNIT_PALETTE[18]);
    }

    #[test]
    fn average_line_scales_with_largest_unit() {
        let rows = vec![
            UnitTally::new("a", 100, Some(50)),
            UnitTally::new("b", 40, None),
        ];
        let summary = BarChartSummary::from_units(&rows);

        assert_eq!(summary.average_percentage, 50);
        assert!((summary.average_line - 45.0).abs() < 1e-9);
    }

    #[test]
    fn empty_rows() {
        let summary = BarChartSummary::from_units(&[]);
        assert!(summary.units.is_empty());
        assert_eq!(summary.total_tasks, 0);
        assert_eq!(summary.average_percentage, 0);
        assert!(summary.average_line.abs() < f64::EPSILON);
    }
}
