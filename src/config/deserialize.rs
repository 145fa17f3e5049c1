// ABOUTME: Custom serde deserializers for config types.
// ABOUTME: Handles Harbor API versions written as strings.

use serde::Deserialize;

use crate::registry::ApiVersion;

pub fn deserialize_api_version<'de, D>(deserializer: D) -> Result<ApiVersion, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}
