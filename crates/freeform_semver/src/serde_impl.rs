use crate::Version;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// serialized as the full string, "1.2.3-rc.1+build"
impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        crate::parse(&s).map_err(D::Error::custom)
    }
}
