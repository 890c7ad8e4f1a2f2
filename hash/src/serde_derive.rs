use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use crate::{WordArray32, WordArray64};

impl Serialize for WordArray64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&self.to_hex(), serializer)
    }
}

impl<'de> Deserialize<'de> for WordArray64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: &'de str = Deserialize::deserialize(deserializer)?;
        s.parse().map_err(Error::custom)
    }
}

impl Serialize for WordArray32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Serialize::serialize(&self.to_hex(), serializer)
    }
}

impl<'de> Deserialize<'de> for WordArray32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: &'de str = Deserialize::deserialize(deserializer)?;
        s.parse().map_err(Error::custom)
    }
}
