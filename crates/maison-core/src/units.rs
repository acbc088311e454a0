//! # Room-Size Units and Conversion
//!
//! `RoomSize` pairs a numeric value with its `AreaUnit`. Whichever unit the
//! user had active at submit time is the unit that gets stored — there is
//! no forced normalization to one canonical unit.
//!
//! Unit toggling mirrors the quiz input control: the value is converted
//! with a fixed factor and rounded to the nearest integer for display.
//! The round trip is lossy (400 sq ft → 37 m² → 398 sq ft).

use serde::{Deserialize, Serialize};

/// Square feet to square meters: 1 sq ft = 0.092903 m².
pub const SQFT_TO_SQM: f64 = 0.092903;

/// Square meters to square feet: 1 m² = 10.7639 sq ft.
pub const SQM_TO_SQFT: f64 = 10.7639;

/// Unit of a room-size measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AreaUnit {
    /// Imperial square feet.
    SquareFeet,
    /// Metric square meters.
    SquareMeters,
}

impl AreaUnit {
    /// The other unit (toggle target).
    pub fn other(self) -> Self {
        match self {
            Self::SquareFeet => Self::SquareMeters,
            Self::SquareMeters => Self::SquareFeet,
        }
    }

    /// Conversion factor from this unit to `to`. Identity for same-unit.
    pub fn factor_to(self, to: AreaUnit) -> f64 {
        match (self, to) {
            (Self::SquareFeet, Self::SquareMeters) => SQFT_TO_SQM,
            (Self::SquareMeters, Self::SquareFeet) => SQM_TO_SQFT,
            _ => 1.0,
        }
    }

    /// Short display label ("sq ft" / "m²").
    pub fn label(self) -> &'static str {
        match self {
            Self::SquareFeet => "sq ft",
            Self::SquareMeters => "m²",
        }
    }
}

/// A room-size value together with the unit it was entered in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomSize {
    /// The numeric room size.
    pub value: f64,
    /// The unit the value is expressed in.
    pub unit: AreaUnit,
}

impl RoomSize {
    /// Create a room size in the given unit.
    pub fn new(value: f64, unit: AreaUnit) -> Self {
        Self { value, unit }
    }

    /// The value converted to `to`, unrounded.
    pub fn converted_to(&self, to: AreaUnit) -> f64 {
        self.value * self.unit.factor_to(to)
    }

    /// Switch to the other unit, converting the value and rounding to the
    /// nearest integer.
    ///
    /// This is the display behavior of the quiz unit toggle, and it is
    /// lossy: toggling back does not necessarily restore the original
    /// value. The stored profile keeps whatever value/unit pair was active
    /// at submit time.
    pub fn toggle_unit(self) -> Self {
        let to = self.unit.other();
        Self {
            value: self.converted_to(to).round(),
            unit: to,
        }
    }
}

impl std::fmt::Display for RoomSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit.label())
    }
}
