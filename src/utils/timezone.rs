use chrono::offset::Offset;
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::consts::DATETIME_FORMAT;
use crate::error::ConfigError;

/// Zone used when showing run times to people (console, email).
/// The run log always stores UTC.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) enum Timezone {
    #[default]
    Utc,
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value else {
            return Ok(Timezone::Utc);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Utc);
        }
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| ConfigError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Utc => utc.fixed_offset(),
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    pub(crate) fn format(self, utc: DateTime<Utc>) -> String {
        self.to_fixed_offset(utc).format(DATETIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_none_returns_utc() {
        assert!(matches!(Timezone::parse(None).unwrap(), Timezone::Utc));
    }

    #[test]
    fn parse_empty_returns_utc() {
        assert!(matches!(Timezone::parse(Some("")).unwrap(), Timezone::Utc));
    }

    #[test]
    fn parse_utc_variants() {
        for raw in ["utc", "UTC", "z", "Z", "  UTC  "] {
            assert!(matches!(Timezone::parse(Some(raw)).unwrap(), Timezone::Utc), "{raw}");
        }
    }

    #[test]
    fn parse_local_string_returns_local() {
        assert!(matches!(
            Timezone::parse(Some("Local")).unwrap(),
            Timezone::Local
        ));
    }

    #[test]
    fn parse_named_timezone() {
        let tz = Timezone::parse(Some("Africa/Nairobi")).unwrap();
        assert!(matches!(tz, Timezone::Named(chrono_tz::Africa::Nairobi)));
    }

    #[test]
    fn parse_invalid_timezone_returns_error() {
        let err = Timezone::parse(Some("Mars/Olympus")).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn format_utc() {
        let utc = "2026-02-12T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(Timezone::Utc.format(utc), "2026-02-12 10:00:00 +00:00");
    }

    #[test]
    fn format_named_shifts_time() {
        let utc = "2026-06-15T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let tz = Timezone::parse(Some("America/New_York")).unwrap();
        // EDT is UTC-4 in June
        assert_eq!(tz.format(utc), "2026-06-15 08:00:00 -04:00");
    }
}
