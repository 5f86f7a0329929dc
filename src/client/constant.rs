pub const SITE_NAME: &str = "NodeManager";

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const TIMELINE_SEGMENTS: usize = 24;
/// Events requested by the uptime page; the activity feed shows a slice of these.
pub const UPTIME_EVENTS_LIMIT: u64 = 250;
pub const FORM_ALERT_MS: u32 = 5000;
pub const LOADER_ATTEMPTS: u32 = 3;

pub const TOO_MANY_REQUESTS: &str = "Too many requests, please wait.";
