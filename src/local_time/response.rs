use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response record from the IPGeolocation timezone API.
///
/// The service returns a flat JSON object of time and date fields for the
/// requested location (`date`, `date_time`, `date_time_unix`, ...). No schema
/// is enforced; the record keeps whatever fields the service sent.
#[derive(Deserialize, Serialize, Debug)]
#[serde(transparent)]
pub struct TimeRecord(Map<String, Value>);

impl TimeRecord {
    /// Looks up a field by name.
    ///
    /// The name `timestamp` is an alias for `date_time_unix`. A missing field
    /// falls back to `date_time`; if that is missing too the result is the
    /// empty string.
    pub fn field(&self, name: &str) -> String {
        let name = if name == "timestamp" {
            "date_time_unix"
        } else {
            name
        };
        self.0
            .get(name)
            .or_else(|| self.0.get("date_time"))
            .map(render)
            .unwrap_or_default()
    }
}

// String values print bare; anything else keeps its JSON text (the service
// sends date_time_unix as a number).
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod test {
    use anyhow::Error;
    use serde_json::json;

    use crate::local_time::response::TimeRecord;

    fn record() -> Result<TimeRecord, Error> {
        let record = serde_json::from_value(json!({
            "date_time_unix": "1700000000",
            "date_time": "2023-11-14 12:00",
        }))?;
        Ok(record)
    }

    #[test]
    fn timestamp_is_an_alias_for_the_unix_field() -> Result<(), Error> {
        assert_eq!(record()?.field("timestamp"), "1700000000");
        Ok(())
    }

    #[test]
    fn unknown_field_falls_back_to_date_time() -> Result<(), Error> {
        assert_eq!(record()?.field("nonexistent"), "2023-11-14 12:00");
        Ok(())
    }

    #[test]
    fn known_field_is_returned_as_is() -> Result<(), Error> {
        let record: TimeRecord = serde_json::from_value(json!({
            "date": "2023-11-14",
            "date_time": "2023-11-14 12:00",
        }))?;
        assert_eq!(record.field("date"), "2023-11-14");
        Ok(())
    }

    #[test]
    fn numeric_values_keep_their_json_text() -> Result<(), Error> {
        let record: TimeRecord = serde_json::from_value(json!({
            "date_time_unix": 1700000000,
        }))?;
        assert_eq!(record.field("timestamp"), "1700000000");
        Ok(())
    }

    #[test]
    fn empty_record_yields_an_empty_value() -> Result<(), Error> {
        let record: TimeRecord = serde_json::from_value(json!({}))?;
        assert_eq!(record.field("timestamp"), "");
        Ok(())
    }
}
