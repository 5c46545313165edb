//! Serde helpers for the genesis JSON encoding.

/// Serde functions for `u64` header fields encoded as `0x`-prefixed hex
/// quantity strings, accepting plain numbers on the way in.
pub mod u64_hex {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    /// Serializes a `u64` as a `0x`-prefixed hex quantity.
    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        format!("{value:#x}").serialize(serializer)
    }

    /// Deserializes a `u64` from a hex quantity string or a plain number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberOrHex {
            Int(u64),
            Hex(String),
        }
        match NumberOrHex::deserialize(deserializer)? {
            NumberOrHex::Int(value) => Ok(value),
            NumberOrHex::Hex(value) => {
                let digits = value
                    .strip_prefix("0x")
                    .ok_or_else(|| de::Error::custom("quantity must be 0x-prefixed"))?;
                u64::from_str_radix(digits, 16).map_err(de::Error::custom)
            }
        }
    }
}
