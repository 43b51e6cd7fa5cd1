use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Secondary ordering of open tickets once emergencies have been sorted first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityRule {
    /// Tickets without an employee go after assigned ones.
    #[default]
    UnassignedLast,
    /// Tickets whose `employeeId` is literally `0` go last; `null` is never `0`.
    /// Kept for clients that relied on the historical ordering.
    LegacyZeroEmployeeId,
}

impl PriorityRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityRule::UnassignedLast => "unassigned_last",
            PriorityRule::LegacyZeroEmployeeId => "legacy_zero_employee_id",
        }
    }
}

impl fmt::Display for PriorityRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriorityRule {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unassigned_last" => Ok(PriorityRule::UnassignedLast),
            "legacy_zero_employee_id" => Ok(PriorityRule::LegacyZeroEmployeeId),
            other => Err(ModelError::Validation(format!("unknown priority rule: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        for rule in [PriorityRule::UnassignedLast, PriorityRule::LegacyZeroEmployeeId] {
            assert_eq!(rule.as_str().parse::<PriorityRule>(), Ok(rule));
        }
        assert!("zero".parse::<PriorityRule>().is_err());
    }
}
