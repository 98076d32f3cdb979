use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::DebtSnowballError;
use crate::DebtSnowballResult;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Fractions of a whole expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Lengths in chart (SVG user) units
pub type Length = Decimal;

/// Loan identifier. Issued once per session and never reused.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LoanId(pub u64);

impl fmt::Display for LoanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for LoanId {
    fn from(value: u64) -> Self {
        LoanId(value)
    }
}

/// A single outstanding debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub name: String,
    pub amount: Money,
}

impl Loan {
    pub fn new(id: impl Into<LoanId>, name: impl Into<String>, amount: Money) -> Self {
        Loan {
            id: id.into(),
            name: name.into(),
            amount,
        }
    }
}

/// Square SVG canvas holding a circular chart drawn with a stroked circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    /// Width and height of the view box
    pub size: Length,
    pub stroke_width: Length,
}

impl ChartDimensions {
    pub const fn new(size: Length, stroke_width: Length) -> Self {
        ChartDimensions { size, stroke_width }
    }

    /// The overview donut chart.
    pub const fn donut() -> Self {
        ChartDimensions::new(dec!(280), dec!(22))
    }

    /// The per-loan progress ring used for the snowball focus.
    pub const fn ring() -> Self {
        ChartDimensions::new(dec!(200), dec!(16))
    }

    pub fn radius(&self) -> Length {
        (self.size - self.stroke_width) / dec!(2)
    }

    pub fn circumference(&self) -> Length {
        dec!(2) * Decimal::PI * self.radius()
    }

    pub fn validate(&self, field: &str) -> DebtSnowballResult<()> {
        if self.size <= Decimal::ZERO {
            return Err(DebtSnowballError::invalid(field, "Chart size must be positive"));
        }
        if self.stroke_width <= Decimal::ZERO || self.stroke_width >= self.size {
            return Err(DebtSnowballError::invalid(
                field,
                "Stroke width must be positive and smaller than the chart size",
            ));
        }
        Ok(())
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        ChartDimensions::donut()
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
