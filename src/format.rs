//! Currency formatting
//!
//! Rupee display formatting for the dashboard. Formatting never fails:
//! anything that cannot be rendered as a non-negative finite amount comes
//! back as the zero string.

const ZERO: &str = "₹0.00";

/// Format an amount as `₹` with thousands separators and exactly two
/// decimal places. Non-finite or negative input yields `"₹0.00"`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() || amount < 0.0 {
        return ZERO.to_string();
    }

    let fixed = format!("{:.2}", amount);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("₹{}.{}", grouped, frac_part)
}

/// Parse free-form text and format it as currency. Unparseable input
/// yields `"₹0.00"` instead of an error.
pub fn format_inr_text(raw: &str) -> String {
    match raw.trim().parse::<f64>() {
        Ok(amount) => format_inr(amount),
        Err(_) => ZERO.to_string(),
    }
}

/// Compact Indian-unit rendering: crores above 1,00,00,000 and lakhs above
/// 1,00,000, full format below that.
pub fn format_inr_compact(amount: f64) -> String {
    if !amount.is_finite() || amount < 0.0 {
        return ZERO.to_string();
    }

    if amount >= 1e7 {
        format!("₹{:.2} Cr", amount / 1e7)
    } else if amount >= 1e5 {
        format!("₹{:.2} L", amount / 1e5)
    } else {
        format_inr(amount)
    }
}
