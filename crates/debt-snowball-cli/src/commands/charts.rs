use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use debt_snowball_core::charts::{
    compute_chart_segments_with_palette, compute_ring_offset, priority_loans, pyramid_widths,
};
use debt_snowball_core::statistics::{compute_totals, derive_sorted_loans};
use debt_snowball_core::{ChartDimensions, DashboardConfig};

use crate::commands::LoanInputArgs;
use crate::input::loans::load_loans;

/// Arguments for pyramid bar widths
#[derive(Args)]
pub struct PyramidArgs {
    #[command(flatten)]
    pub loans: LoanInputArgs,

    /// Width of the smallest loan's bar (defaults to the configured value)
    #[arg(long)]
    pub min_width: Option<Decimal>,

    /// Width of the largest loan's bar (defaults to the configured value)
    #[arg(long)]
    pub max_width: Option<Decimal>,
}

/// Arguments for the snowball focus rings
#[derive(Args)]
pub struct PriorityArgs {
    #[command(flatten)]
    pub loans: LoanInputArgs,

    /// Number of loans to highlight (defaults to the configured value)
    #[arg(long)]
    pub count: Option<usize>,
}

/// Arguments for a single progress-ring offset
#[derive(Args)]
pub struct RingOffsetArgs {
    /// Visible fraction of the ring (0 to 1)
    #[arg(long)]
    pub percent: Decimal,

    /// Ring circumference; derived from --size/--stroke-width when omitted
    #[arg(long)]
    pub circumference: Option<Decimal>,

    /// Chart view box size
    #[arg(long, default_value = "200")]
    pub size: Decimal,

    /// Ring stroke width
    #[arg(long, default_value = "16")]
    pub stroke_width: Decimal,
}

#[derive(Debug, Serialize)]
struct RingOffsetOutput {
    percent: Decimal,
    circumference: Decimal,
    offset: Decimal,
}

/// Donut chart segments over the snowball order.
pub fn run_segments(
    args: LoanInputArgs,
    cli_config: Option<&DashboardConfig>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let loaded = load_loans(args.input.as_deref())?;
    let config = loaded.effective_config(cli_config);
    config.validate()?;

    let sorted = derive_sorted_loans(loaded.book.loans());
    let total = compute_totals(&sorted).total;
    let segments =
        compute_chart_segments_with_palette(&sorted, total, config.palette.as_slice())?;
    Ok(serde_json::to_value(segments)?)
}

pub fn run_pyramid(
    args: PyramidArgs,
    cli_config: Option<&DashboardConfig>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let loaded = load_loans(args.loans.input.as_deref())?;
    let config = loaded.effective_config(cli_config);

    let min_width = args.min_width.unwrap_or(config.pyramid_min_width);
    let max_width = args.max_width.unwrap_or(config.pyramid_max_width);
    if min_width < Decimal::ZERO || max_width < min_width {
        return Err(format!(
            "--max-width ({max_width}) must be at least --min-width ({min_width}), both non-negative"
        )
        .into());
    }

    let sorted = derive_sorted_loans(loaded.book.loans());
    let bars = pyramid_widths(&sorted, min_width, max_width);
    Ok(serde_json::to_value(bars)?)
}

pub fn run_priority(
    args: PriorityArgs,
    cli_config: Option<&DashboardConfig>,
) -> Result<Value, Box<dyn std::error::Error>> {
    let loaded = load_loans(args.loans.input.as_deref())?;
    let config = loaded.effective_config(cli_config);
    config.validate()?;

    let count = args.count.unwrap_or(config.priority_count);
    let sorted = derive_sorted_loans(loaded.book.loans());
    let total = compute_totals(&sorted).total;
    let focus = priority_loans(&sorted, total, count, &config.ring);
    Ok(serde_json::to_value(focus)?)
}

pub fn run_ring_offset(args: RingOffsetArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.percent < Decimal::ZERO || args.percent > Decimal::ONE {
        return Err("--percent must be between 0 and 1".into());
    }

    let circumference = match args.circumference {
        Some(c) => c,
        None => {
            let dims = ChartDimensions::new(args.size, args.stroke_width);
            dims.validate("ring")?;
            dims.circumference()
        }
    };

    let output = RingOffsetOutput {
        percent: args.percent,
        circumference,
        offset: compute_ring_offset(args.percent, circumference),
    };
    Ok(serde_json::to_value(output)?)
}
