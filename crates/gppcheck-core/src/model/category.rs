use serde::{Deserialize, Serialize};

/// Test-manager grouping of test cases.
///
/// Labels outside the known set fall back to [`TestCategory::Other`].
///
/// # Examples
/// ```
/// use gppcheck_core::model::TestCategory;
///
/// assert_eq!(TestCategory::from_label("mobility"), TestCategory::Mobility);
/// assert_eq!(TestCategory::from_label("5G_NR"), TestCategory::Other);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestCategory {
    CellSearch,
    PowerOn,
    Attach,
    Mobility,
    Performance,
    Security,
    Protocol,
    UeAnalysis,
    NetworkAnalysis,
    Other,
}

impl TestCategory {
    pub const ALL: [TestCategory; 10] = [
        TestCategory::CellSearch,
        TestCategory::PowerOn,
        TestCategory::Attach,
        TestCategory::Mobility,
        TestCategory::Performance,
        TestCategory::Security,
        TestCategory::Protocol,
        TestCategory::UeAnalysis,
        TestCategory::NetworkAnalysis,
        TestCategory::Other,
    ];

    /// Case-insensitive lookup; unknown labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(label))
            .unwrap_or(TestCategory::Other)
    }

    pub fn label(self) -> &'static str {
        match self {
            TestCategory::CellSearch => "CELL_SEARCH",
            TestCategory::PowerOn => "POWER_ON",
            TestCategory::Attach => "ATTACH",
            TestCategory::Mobility => "MOBILITY",
            TestCategory::Performance => "PERFORMANCE",
            TestCategory::Security => "SECURITY",
            TestCategory::Protocol => "PROTOCOL",
            TestCategory::UeAnalysis => "UE_ANALYSIS",
            TestCategory::NetworkAnalysis => "NETWORK_ANALYSIS",
            TestCategory::Other => "OTHER",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TestCategory::CellSearch => "Cell Search",
            TestCategory::PowerOn => "Power On",
            TestCategory::Attach => "Attach",
            TestCategory::Mobility => "Mobility",
            TestCategory::Performance => "Performance",
            TestCategory::Security => "Security",
            TestCategory::Protocol => "Protocol",
            TestCategory::UeAnalysis => "UE Analysis",
            TestCategory::NetworkAnalysis => "Network Analysis",
            TestCategory::Other => "Other",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TestCategory::CellSearch => "Cell search and synchronization procedures",
            TestCategory::PowerOn => "UE power-on and initialization procedures",
            TestCategory::Attach => "Network attachment procedures",
            TestCategory::Mobility => "Handover and mobility procedures",
            TestCategory::Performance => "Performance and throughput tests",
            TestCategory::Security => "Security and authentication tests",
            TestCategory::Protocol => "Protocol layer specific tests",
            TestCategory::UeAnalysis => "UE-specific analysis and monitoring",
            TestCategory::NetworkAnalysis => "Network analysis and monitoring",
            TestCategory::Other => "Other test categories",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TestCategory;

    #[test]
    fn labels_round_trip_through_lookup() {
        for category in TestCategory::ALL {
            assert_eq!(TestCategory::from_label(category.label()), category);
        }
    }

    #[test]
    fn unknown_and_blank_labels_fall_back_to_other() {
        assert_eq!(TestCategory::from_label(""), TestCategory::Other);
        assert_eq!(TestCategory::from_label("VoLTE"), TestCategory::Other);
        assert_eq!(TestCategory::from_label(" security "), TestCategory::Security);
    }

    #[test]
    fn serde_label_matches_label() {
        let value = serde_json::to_value(TestCategory::UeAnalysis).expect("encode");
        assert_eq!(value, TestCategory::UeAnalysis.label());
    }
}
