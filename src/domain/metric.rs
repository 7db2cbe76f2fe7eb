//! Information-loss metric selection
//!
//! The metric steers the engine's search for a transformation with minimal
//! information loss. Only the symbolic name is handled here; the metric
//! computation lives in the engine.

use crate::domain::errors::CloakError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Information-loss metrics understood by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Metric {
    /// Average equivalence class size
    Aecs,
    /// Discernability
    Dm,
    /// Discernability, monotonic variant
    DmStar,
    /// Non-uniform entropy (monotonic)
    Entropy,
    /// Generalization height
    Height,
    /// Non-uniform entropy (non-monotonic)
    NmEntropy,
    /// Precision (monotonic)
    Prec,
    /// Precision (non-monotonic)
    NmPrec,
}

impl Metric {
    /// All recognized metric names, for help and error messages
    pub const NAMES: [&'static str; 8] = [
        "AECS", "DM", "DMSTAR", "ENTROPY", "HEIGHT", "NMENTROPY", "PREC", "NMPREC",
    ];
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Entropy
    }
}

impl FromStr for Metric {
    type Err = CloakError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AECS" => Ok(Metric::Aecs),
            "DM" => Ok(Metric::Dm),
            "DMSTAR" => Ok(Metric::DmStar),
            "ENTROPY" => Ok(Metric::Entropy),
            "HEIGHT" => Ok(Metric::Height),
            "NMENTROPY" => Ok(Metric::NmEntropy),
            "PREC" => Ok(Metric::Prec),
            "NMPREC" => Ok(Metric::NmPrec),
            other => Err(CloakError::Configuration(format!(
                "metric unknown: {other}, expected one of {:?}",
                Metric::NAMES
            ))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Aecs => "AECS",
            Metric::Dm => "DM",
            Metric::DmStar => "DMSTAR",
            Metric::Entropy => "ENTROPY",
            Metric::Height => "HEIGHT",
            Metric::NmEntropy => "NMENTROPY",
            Metric::Prec => "PREC",
            Metric::NmPrec => "NMPREC",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("AECS", Metric::Aecs)]
    #[test_case("dm", Metric::Dm)]
    #[test_case("DmStar", Metric::DmStar)]
    #[test_case(" entropy ", Metric::Entropy)]
    #[test_case("HEIGHT", Metric::Height)]
    #[test_case("nmentropy", Metric::NmEntropy)]
    #[test_case("PREC", Metric::Prec)]
    #[test_case("nmprec", Metric::NmPrec)]
    fn test_parse_case_insensitive(input: &str, expected: Metric) {
        assert_eq!(input.parse::<Metric>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "LOSS".parse::<Metric>().unwrap_err();
        assert!(err.to_string().contains("metric unknown"));
    }

    #[test]
    fn test_display_round_trip() {
        for name in Metric::NAMES {
            let metric: Metric = name.parse().unwrap();
            assert_eq!(metric.to_string(), name);
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(Metric::default(), Metric::Entropy);
    }
}
