use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::DebtSnowballError;
use crate::types::{ChartDimensions, Length};
use crate::DebtSnowballResult;

/// Colors assigned to chart segments by sorted position, wrapping around.
pub const DEFAULT_PALETTE: [&str; 9] = [
    "#3b82f6", "#8b5cf6", "#10b981", "#f59e0b", "#ef4444", "#06b6d4", "#ec4899", "#6366f1",
    "#84cc16",
];

/// Number of smallest loans highlighted as the snowball focus.
pub const DEFAULT_PRIORITY_COUNT: usize = 3;

/// Presentation parameters for a dashboard build. Every field has a default,
/// so a partial JSON/YAML document is enough to override one setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub donut: ChartDimensions,
    pub ring: ChartDimensions,
    /// Narrowest pyramid bar (the smallest loan), in percent of the row.
    pub pyramid_min_width: Length,
    /// Widest pyramid bar (the largest loan), in percent of the row.
    pub pyramid_max_width: Length,
    pub priority_count: usize,
    pub palette: Vec<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            donut: ChartDimensions::donut(),
            ring: ChartDimensions::ring(),
            pyramid_min_width: dec!(30),
            pyramid_max_width: dec!(100),
            priority_count: DEFAULT_PRIORITY_COUNT,
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> DebtSnowballResult<()> {
        self.donut.validate("donut")?;
        self.ring.validate("ring")?;
        if self.pyramid_min_width < Decimal::ZERO {
            return Err(DebtSnowballError::invalid(
                "pyramid_min_width",
                "Must not be negative",
            ));
        }
        if self.pyramid_max_width < self.pyramid_min_width {
            return Err(DebtSnowballError::invalid(
                "pyramid_max_width",
                "Must be at least pyramid_min_width",
            ));
        }
        if self.palette.is_empty() {
            return Err(DebtSnowballError::invalid(
                "palette",
                "At least one color is required",
            ));
        }
        Ok(())
    }
}
