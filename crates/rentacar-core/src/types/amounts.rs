//! Exact XLM ↔ stroop conversion.
//!
//! All contract calls use stroops; all form input is decimal XLM text.
//! Parsing and rendering are digit-wise — no float ever touches an amount.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{DashboardError, DashboardResult};

/// Smallest indivisible unit of the native asset: 10^7 stroops = 1 XLM.
pub const STROOPS_PER_XLM: i128 = 10_000_000;

/// Fractional digits of one XLM.
const XLM_DECIMALS: u32 = 7;

/// An amount in stroops.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Stroops(pub i128);

impl Stroops {
    pub const ZERO: Stroops = Stroops(0);

    /// Whole XLM units into stroops.
    pub fn from_xlm(xlm: i128) -> DashboardResult<Stroops> {
        xlm.checked_mul(STROOPS_PER_XLM)
            .map(Stroops)
            .ok_or_else(|| DashboardError::validation("El monto es demasiado grande."))
    }

    /// Parse decimal XLM text ("12", "0.05", ".0000001") into stroops.
    ///
    /// At most 7 fractional digits; an optional leading `-`; anything else
    /// is a validation error. The previous field value is the caller's to
    /// keep on `Err`.
    pub fn parse_xlm(input: &str) -> DashboardResult<Stroops> {
        let invalid = || DashboardError::validation("Por favor ingresa un monto válido.");

        let text = input.trim();
        let (negative, text) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (whole, frac) = match text.split_once('.') {
            Some((w, f)) => (w, f),
            None => (text, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if frac.len() > XLM_DECIMALS as usize {
            return Err(DashboardError::validation(
                "El monto admite hasta 7 decimales.",
            ));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let whole: i128 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let frac_units: i128 = if frac.is_empty() {
            0
        } else {
            // At most 7 digits, cannot overflow.
            let parsed: i128 = frac.parse().map_err(|_| invalid())?;
            parsed * 10i128.pow(XLM_DECIMALS - frac.len() as u32)
        };

        let magnitude = whole
            .checked_mul(STROOPS_PER_XLM)
            .and_then(|w| w.checked_add(frac_units))
            .ok_or_else(|| DashboardError::validation("El monto es demasiado grande."))?;

        Ok(Stroops(if negative { -magnitude } else { magnitude }))
    }

    /// Rental total for a day count.
    pub fn total_for_days(&self, days: u32) -> DashboardResult<Stroops> {
        self.0
            .checked_mul(i128::from(days))
            .map(Stroops)
            .ok_or_else(|| DashboardError::validation("El monto total es demasiado grande."))
    }

    /// Canonical decimal XLM rendering with trailing zeros trimmed
    /// ("1.05", "0.0000001", "3"). Round-trips through [`Stroops::parse_xlm`].
    pub fn to_xlm_string(&self) -> String {
        let magnitude = self.0.unsigned_abs();
        let whole = magnitude / STROOPS_PER_XLM as u128;
        let frac = magnitude % STROOPS_PER_XLM as u128;
        let sign = if self.0 < 0 { "-" } else { "" };

        if frac == 0 {
            return format!("{sign}{whole}");
        }
        let mut digits = format!("{frac:07}");
        while digits.ends_with('0') {
            digits.pop();
        }
        format!("{sign}{whole}.{digits}")
    }

    /// Fixed 7-decimal rendering ("1.0500000"), the balance-label form.
    pub fn to_xlm_fixed(&self) -> String {
        let magnitude = self.0.unsigned_abs();
        let whole = magnitude / STROOPS_PER_XLM as u128;
        let frac = magnitude % STROOPS_PER_XLM as u128;
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{sign}{whole}.{frac:07}")
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Stroops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_xlm_string())
    }
}
