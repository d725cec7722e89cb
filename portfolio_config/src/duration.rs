use std::ops::Deref;

use serde::Deserialize;

/// A duration written as space separated `<number><unit>` parts, e.g.
/// `1m 30s` or `250ms`. Supported units are `ms`, `s`, `m`, `h` and `d`; a
/// part without unit is read as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let invalid = || <D::Error as serde::de::Error>::custom("Invalid duration");

        let s = String::deserialize(deserializer)?;
        let mut out = std::time::Duration::default();
        for part in s.split_whitespace() {
            let unit_start = part
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(part.len());
            let (value, unit) = part.split_at(unit_start);
            let value = value.parse::<u64>().map_err(|_| invalid())?;
            let millis = match unit {
                "ms" => 1,
                "" | "s" => 1000,
                "m" => 60 * 1000,
                "h" => 3600 * 1000,
                "d" => 24 * 3600 * 1000,
                _ => return Err(invalid()),
            };
            let millis = value.checked_mul(millis).ok_or_else(invalid)?;
            out = out
                .checked_add(std::time::Duration::from_millis(millis))
                .ok_or_else(invalid)?;
        }
        Ok(Self(out))
    }
}
