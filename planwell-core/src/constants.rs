//! Fixed organisational values shared across modules.

/// Domain appended to event ids to form calendar UIDs.
pub const UID_DOMAIN: &str = "planwellfp.com";

/// How many sessions `upcoming_events` returns when the caller doesn't say.
pub const DEFAULT_UPCOMING_COUNT: usize = 3;

/// Length of one day in milliseconds, used for countdowns.
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Basic UTC form required for DTSTAMP/DTSTART/DTEND.
pub const ICS_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Maximum octets per content line before folding (RFC 5545 §3.1).
pub const ICS_LINE_LIMIT: usize = 75;

/// Location shown on every exported session.
pub const ONLINE_LOCATION: &str = "Online (Zoom link will be emailed)";
