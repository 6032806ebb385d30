//! Money amounts as JSON numbers.
//!
//! `Decimal`'s own serde impl writes strings. Stored profiles carry plain
//! numbers, so optional amounts go through [`option`]: whole amounts that fit
//! an `i64` are written as integers, everything else as `f64`.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

/// Convert an `f64` to the nearest representable `Decimal`.
///
/// Magnitudes past `Decimal::MAX` clamp to `MAX`/`MIN`. Fractions finer than
/// 28 decimal places are rounded away. `None` for NaN and infinities.
pub fn from_f64_saturating(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    let bound = Decimal::MAX.to_f64().unwrap_or(f64::MAX);
    if value >= bound {
        return Some(Decimal::MAX);
    }
    if value <= -bound {
        return Some(Decimal::MIN);
    }
    let converted = Decimal::from_f64(value).unwrap_or_else(|| match value {
        v if v >= 1.0 => Decimal::MAX,
        v if v <= -1.0 => Decimal::MIN,
        _ => Decimal::ZERO,
    });
    Some(converted.normalize())
}

/// `#[serde(with = "amount::option")]` for `Option<Decimal>` fields.
pub mod option {
    use std::fmt;
    use std::str::FromStr;

    use rust_decimal::Decimal;
    use rust_decimal::prelude::ToPrimitive;
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(d) => match d.to_i64().filter(|_| d.fract().is_zero()) {
                Some(whole) => serializer.serialize_i64(whole),
                None => serializer.serialize_f64(d.to_f64().unwrap_or_default()),
            },
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(AmountVisitor)
    }

    struct AmountVisitor;

    impl<'de> Visitor<'de> for AmountVisitor {
        type Value = Option<Decimal>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number, a numeric string, or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(Decimal::from(v)))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(Decimal::from(v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            super::from_f64_saturating(v)
                .map(Some)
                .ok_or_else(|| E::custom(format!("amount is not finite: {v}")))
        }

        // Profiles written before amounts were numbers
        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Decimal::from_str(v)
                .or_else(|_| Decimal::from_scientific(v))
                .map(Some)
                .map_err(|_| E::custom(format!("invalid amount: {v:?}")))
        }
    }
}
