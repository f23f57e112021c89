//! Display units for forecast values.

/// How a physical quantity is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub symbol: &'static str,
    /// Digits after the decimal point
    pub decimals: usize,
    /// Put a space between the number and the symbol
    pub spaced: bool,
}

pub const JOULES_PER_KG: Unit = Unit::spaced("J/kg", 0);
pub const METERS_PER_SECOND: Unit = Unit::spaced("m/s", 1);
pub const METERS: Unit = Unit::spaced("m", 0);
pub const KM_PER_HOUR: Unit = Unit::spaced("km/h", 0);
pub const MILLIMETERS: Unit = Unit::spaced("mm", 1);
pub const CELSIUS: Unit = Unit::spaced("°C", 1);
pub const PERCENT: Unit = Unit::spaced("%", 0);
pub const DEGREES: Unit = Unit::compact("°", 0);

impl Unit {
    pub const fn spaced(symbol: &'static str, decimals: usize) -> Self {
        Self {
            symbol,
            decimals,
            spaced: true,
        }
    }

    pub const fn compact(symbol: &'static str, decimals: usize) -> Self {
        Self {
            symbol,
            decimals,
            spaced: false,
        }
    }

    /// Format `value` with this unit, e.g. `"750 J/kg"`.
    ///
    /// Values that round to zero print without a minus sign.
    pub fn format(&self, value: f64) -> String {
        let mut number = format!("{:.*}", self.decimals, value);
        if number.starts_with('-') && number[1..].chars().all(|c| c == '0' || c == '.') {
            number.remove(0);
        }
        let separator = if self.spaced { " " } else { "" };
        format!("{}{}{}", number, separator, self.symbol)
    }
}
