/// Marker appended to the name of every project awaiting review
pub(crate) const REVIEW_SUFFIX: &str = " - To Be Verified";

/// Projects created less than this many hours before the run are "recent"
pub(crate) const RECENCY_WINDOW_HOURS: i64 = 24;

/// Asset type the listing is restricted to
pub(crate) const SURVEY_ASSET_TYPE: &str = "survey";

pub(crate) const DEFAULT_API_URL: &str = "https://eu.kobotoolbox.org/api/v2/assets/";

/// Title substring filter compiled into the binary; empty means no filter
pub(crate) const DEFAULT_TITLE_FILTER: &str = "";

pub(crate) const DEFAULT_LOG_FILE: &str = "kobo_verify_log.csv";

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub(crate) const DEFAULT_SMTP_PORT: u16 = 587;

/// Human-facing timestamp format: "2025-01-15 08:30:00 +00:00"
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %:z";
