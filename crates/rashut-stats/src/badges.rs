//! Header badges summarizing completion rates above the chart

use rashut_model::{AggregateStatistics, Percentage};
use serde::{Deserialize, Serialize};

/// Badge identity; the view key doubles as the drill-through key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BadgeKind {
    /// Average of both branch percentages
    General,
    /// Executing share of converted new work
    Converted,
    /// Authority-only completion rate
    Annual,
    /// Shared-authority mean completion
    Quarterly,
}

impl BadgeKind {
    /// All badges in display order
    pub const ALL: [BadgeKind; 4] = [
        BadgeKind::General,
        BadgeKind::Converted,
        BadgeKind::Annual,
        BadgeKind::Quarterly,
    ];

    /// Saved-view key used for drill-through
    #[must_use]
    pub const fn view_key(self) -> &'static str {
        match self {
            BadgeKind::General => "SCA",
            BadgeKind::Converted => "SDA",
            BadgeKind::Annual => "SBA",
            BadgeKind::Quarterly => "SAA",
        }
    }

    /// Display title
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            BadgeKind::General => "% ביצוע כללי",
            BadgeKind::Converted => "% ביצוע פרויקטים שהומרו",
            BadgeKind::Annual => "% ביצוע שנתי",
            BadgeKind::Quarterly => "% ביצוע שלישוני",
        }
    }
}

/// Badge values derived from one statistics snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBadges {
    /// Rounded mean of the two branch percentages
    pub general: Percentage,
    /// `None` when nothing was converted; the host keeps its previous value
    pub converted: Option<Percentage>,
    /// Authority-only branch percentage
    pub annual: Percentage,
    /// Shared-authority branch percentage
    pub quarterly: Percentage,
}

impl HeaderBadges {
    /// Derive badges from statistics
    #[must_use]
    pub fn from_statistics(stats: &AggregateStatistics) -> Self {
        let with = stats.with_shaam.percentage;
        let without = stats.without_shaam.percentage;
        let new = &stats.with_shaam.new;

        Self {
            general: Percentage::from_percent(
                (f64::from(with.value()) + f64::from(without.value())) / 2.0,
            ),
            converted: (new.converted > 0)
                .then(|| Percentage::from_ratio(new.executing, new.converted)),
            annual: without,
            quarterly: with,
        }
    }

    /// Value of one badge
    #[must_use]
    pub fn get(&self, kind: BadgeKind) -> Option<Percentage> {
        match kind {
            BadgeKind::General => Some(self.general),
            BadgeKind::Converted => self.converted,
            BadgeKind::Annual => Some(self.annual),
            BadgeKind::Quarterly => Some(self.quarterly),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::fallback_statistics;

    #[test]
    fn fallback_badges() {
        let badges = HeaderBadges::from_statistics(&fallback_statistics());

        // (80 + 77) / 2 = 78.5
        assert_eq!(badges.general, Percentage(79));
        // 242 / 286
        assert_eq!(badges.converted, Some(Percentage(85)));
        assert_eq!(badges.annual, Percentage(77));
        assert_eq!(badges.quarterly, Percentage(80));
    }

    #[test]
    fn converted_badge_absent_without_conversions() {
        let badges = HeaderBadges::from_statistics(&AggregateStatistics::default());
        assert_eq!(badges.converted, None);
        assert_eq!(badges.get(BadgeKind::Converted), None);
        assert_eq!(badges.get(BadgeKind::General), Some(Percentage::ZERO));
    }

    #[test]
    fn view_keys_are_distinct() {
        let mut keys: Vec<_> = BadgeKind::ALL.iter().map(|k| k.view_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), BadgeKind::ALL.len());
    }
}
