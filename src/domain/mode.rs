use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout preset for the dashboard. Persisted between runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardMode {
    #[default]
    Studio,
    Prep,
    Training,
    World,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dashboard mode: {0}")]
pub struct UnknownMode(pub String);

impl DashboardMode {
    #[must_use]
    pub fn all() -> &'static [DashboardMode] {
        &[
            DashboardMode::Studio,
            DashboardMode::Prep,
            DashboardMode::Training,
            DashboardMode::World,
        ]
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            DashboardMode::Studio => "studio",
            DashboardMode::Prep => "prep",
            DashboardMode::Training => "training",
            DashboardMode::World => "world",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DashboardMode::Studio => "Studio Mode",
            DashboardMode::Prep => "Prep Mode",
            DashboardMode::Training => "Training Mode",
            DashboardMode::World => "World Mode",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            DashboardMode::Studio => "Full dashboard with all tools and features",
            DashboardMode::Prep => "Session-focused minimal view",
            DashboardMode::Training => "Academy front-and-center",
            DashboardMode::World => "World building tools maximized",
        }
    }

    /// The mode after this one in the cycle, wrapping back to `Studio`.
    #[must_use]
    pub fn next(&self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|m| m == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl fmt::Display for DashboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DashboardMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.key() == s)
            .ok_or_else(|| UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        let mut mode = DashboardMode::Studio;
        let mut seen = Vec::new();
        for _ in 0..4 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(
            seen,
            vec![
                DashboardMode::Prep,
                DashboardMode::Training,
                DashboardMode::World,
                DashboardMode::Studio,
            ]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("prep".parse::<DashboardMode>(), Ok(DashboardMode::Prep));
        assert_eq!(
            "Prep".parse::<DashboardMode>(),
            Err(UnknownMode("Prep".to_string()))
        );
        assert_eq!(DashboardMode::World.to_string(), "world");
    }
}
