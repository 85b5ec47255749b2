//! Snapshot formatting for the dashboard.
//!
//! Pure string formatting consumed by the binary entry point; no I/O and
//! no business decisions here.

use crate::core::valuation::ValuationSnapshot;

/// Formats a monetary amount as `R$ 1,234.56` with thousands grouping.
/// Negative amounts come out as `R$ -1,234.56`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("R$ {sign}{grouped}.{frac_part}")
}

/// Renders the dashboard summary block for a valuation snapshot.
#[must_use]
pub fn snapshot_summary(snapshot: &ValuationSnapshot) -> String {
    format!(
        "Active head:      {}\n\
         Herd value:       {}\n\
         Acquisition cost: {}\n\
         Gross margin:     {}\n\
         Day-labor spend:  {}\n\
         Net result:       {}",
        snapshot.active_count,
        format_currency(snapshot.herd_value),
        format_currency(snapshot.acquisition_cost),
        format_currency(snapshot.gross_margin),
        format_currency(snapshot.payroll_total),
        format_currency(snapshot.net_result),
    )
}
