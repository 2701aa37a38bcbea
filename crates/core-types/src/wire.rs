//! JSON representation of report figures.
//!
//! Figures are written as JSON numbers. Percentages are already rounded to two
//! places and go through `rust_decimal::serde::float` directly. Currency goes
//! through [`money`], which rounds to cents first so a derived average such as
//! `100 / 3` is reported as `33.33` instead of a long fraction.

/// Serde adapter for currency amounts: cents, as a JSON number.
pub mod money {
    use rust_decimal::{Decimal, RoundingStrategy};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let cents = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rust_decimal::serde::float::serialize(&cents, serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        rust_decimal::serde::float::deserialize(deserializer)
    }
}
