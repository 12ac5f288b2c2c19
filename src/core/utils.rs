use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

/// Wire format for timestamps: RFC 3339 in UTC with millisecond precision.
pub fn datetime_to_string(datetime: DateTime<FixedOffset>) -> String {
    datetime
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
