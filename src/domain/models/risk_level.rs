/// Ordinal danger tier of a message, highest first.
///
/// Results carry the model's label verbatim; [`RiskLevel::from_label`] is the
/// single place where a label (`매우높음`, `높음`, `보통`, `낮음`, `안전`) is
/// mapped to a tier, and [`RiskLevel::tag`] gives the ASCII tag used by
/// renderers and logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    Safe,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Maps a Korean label to a tier. Unknown labels map to [`RiskLevel::Safe`].
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "매우높음" => RiskLevel::VeryHigh,
            "높음" => RiskLevel::High,
            "보통" => RiskLevel::Medium,
            "낮음" => RiskLevel::Low,
            _ => RiskLevel::Safe,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => "매우높음",
            RiskLevel::High => "높음",
            RiskLevel::Medium => "보통",
            RiskLevel::Low => "낮음",
            RiskLevel::Safe => "안전",
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => "very_high",
            RiskLevel::High => "high",
            RiskLevel::Medium => "medium",
            RiskLevel::Low => "low",
            RiskLevel::Safe => "safe",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_maps_known_labels() {
        assert_eq!(RiskLevel::from_label("매우높음"), RiskLevel::VeryHigh);
        assert_eq!(RiskLevel::from_label("높음"), RiskLevel::High);
        assert_eq!(RiskLevel::from_label("보통"), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_label("낮음"), RiskLevel::Low);
        assert_eq!(RiskLevel::from_label("안전"), RiskLevel::Safe);
    }

    #[test]
    fn test_unknown_label_is_safe() {
        assert_eq!(RiskLevel::from_label("중간"), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_label("매우 높음"), RiskLevel::Safe);
        assert_eq!(RiskLevel::from_label(""), RiskLevel::Safe);
    }

    #[test]
    fn test_labels_round_trip_through_from_label() {
        for level in [
            RiskLevel::VeryHigh,
            RiskLevel::High,
            RiskLevel::Medium,
            RiskLevel::Low,
            RiskLevel::Safe,
        ] {
            assert_eq!(RiskLevel::from_label(level.label()), level);
        }
    }

    #[test]
    fn test_tags() {
        assert_eq!(RiskLevel::VeryHigh.tag(), "very_high");
        assert_eq!(RiskLevel::Medium.tag(), "medium");
        assert_eq!(RiskLevel::Safe.tag(), "safe");
    }

    #[test]
    fn test_ordering() {
        assert!(RiskLevel::VeryHigh > RiskLevel::High);
        assert!(RiskLevel::Low > RiskLevel::Safe);
    }
}
