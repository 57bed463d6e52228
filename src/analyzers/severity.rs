use serde::Serialize;

/// Case-count thresholds separating the map color tiers.
pub const THRESHOLDS: [usize; 7] = [10, 50, 100, 200, 500, 1000, 3000];

/// Color tier for a region's case count, lightest to darkest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    Minimal,
    Low,
    Moderate,
    Elevated,
    High,
    Severe,
    Critical,
    Extreme,
}

impl Severity {
    pub const ALL: [Severity; 8] = [
        Severity::Minimal,
        Severity::Low,
        Severity::Moderate,
        Severity::Elevated,
        Severity::High,
        Severity::Severe,
        Severity::Critical,
        Severity::Extreme,
    ];

    /// Maps a case count onto the ladder.
    ///
    /// | Cases       | Tier     |
    /// |-------------|----------|
    /// | > 3000      | Extreme  |
    /// | > 1000      | Critical |
    /// | > 500       | Severe   |
    /// | > 200       | High     |
    /// | > 100       | Elevated |
    /// | > 50        | Moderate |
    /// | > 10        | Low      |
    /// | <= 10       | Minimal  |
    pub fn for_count(cases: usize) -> Self {
        match cases {
            c if c > 3000 => Severity::Extreme,
            c if c > 1000 => Severity::Critical,
            c if c > 500 => Severity::Severe,
            c if c > 200 => Severity::High,
            c if c > 100 => Severity::Elevated,
            c if c > 50 => Severity::Moderate,
            c if c > 10 => Severity::Low,
            _ => Severity::Minimal,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Severity::Minimal => "#FFEDA0",
            Severity::Low => "#FED976",
            Severity::Moderate => "#FEB24C",
            Severity::Elevated => "#FD8D3C",
            Severity::High => "#FC4E2A",
            Severity::Severe => "#E31A1C",
            Severity::Critical => "#BD0026",
            Severity::Extreme => "#800026",
        }
    }

    /// Position on the ladder, 0 for the lightest tier.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable case range, e.g. `10-50` or `3000+`.
    pub fn range_label(self) -> String {
        let i = self.index();
        match i {
            0 => format!("0-{}", THRESHOLDS[0]),
            i if i == THRESHOLDS.len() => format!("{}+", THRESHOLDS[i - 1]),
            i => format!("{}-{}", THRESHOLDS[i - 1], THRESHOLDS[i]),
        }
    }
}

/// One row of the map legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub severity: Severity,
    pub color: &'static str,
    pub label: String,
}

/// Legend rows for every tier, lightest first.
pub fn legend() -> Vec<LegendEntry> {
    Severity::ALL
        .iter()
        .map(|&severity| LegendEntry {
            severity,
            color: severity.color(),
            label: severity.range_label(),
        })
        .collect()
}
