//! Well-known preference keys

/// Whether amounts are shown in the alternate (fiat) currency first
pub const ALT_CURRENCY_DISPLAYED: &str = "isBtcSwapped";
pub const TOUCH_ID_ENABLED: &str = "istouchidenabled";
pub const MAX_DISPLAY_DIGITS: &str = "SETTINGS_MAX_DIGITS";
pub const DEFAULT_CURRENCY: &str = "defaultcurrency";
/// Presence of a token means push notifications were registered
pub const PUSH_TOKEN: &str = "pushToken";
