use serde::{Deserialize, Deserializer, Serialize};

/// A single public holiday as returned by the holiday API.
///
/// Only the first entry of the API response is kept; the record is never
/// mutated after it has been read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayRecord {
    pub name: String,
    /// Empty when the API omits the field or sends `null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub local_name: String,
    /// ISO calendar date (`YYYY-MM-DD`), no time component.
    pub date: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl HolidayRecord {
    pub fn new(
        name: impl Into<String>,
        local_name: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            local_name: local_name.into(),
            date: date.into(),
        }
    }

    /// The localised name, but only when it adds something to the primary name.
    pub fn distinct_local_name(&self) -> Option<&str> {
        if self.local_name.is_empty() || self.local_name == self.name {
            None
        } else {
            Some(&self.local_name)
        }
    }
}
