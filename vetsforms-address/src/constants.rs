//! Fixed values shared across the address form modules.

// Country handling ---------------------------------------------------------
/// Canonical machine value for the United States catalog entry.
pub const USA_VALUE: &str = "USA";
/// Display label the form stores for a United States address.
pub const USA_LABEL: &str = "United States";

// Form-state keys ----------------------------------------------------------
pub(crate) const KEY_COUNTRY: &str = "country";
pub(crate) const KEY_LIVES_ON_MILITARY_BASE: &str = "livesOnMilitaryBase";

// Path templates -----------------------------------------------------------
/// Positional placeholder substituted with a concrete array index.
pub const INDEX_PLACEHOLDER: &str = "[INDEX]";

// Field titles -------------------------------------------------------------
pub(crate) const MILITARY_CITY_TITLE: &str = "APO/FPO/DPO";

// Field constraints --------------------------------------------------------
pub(crate) const TEXT_MIN_LEN: usize = 1;
pub(crate) const TEXT_MAX_LEN: usize = 100;
pub(crate) const INTL_POSTAL_MAX_LEN: usize = 10;
pub(crate) const NON_BLANK_PATTERN: &str = "^.*\\S.*";
pub(crate) const US_POSTAL_PATTERN: &str = "(^\\d{5}$)|(^\\d{5}-\\d{4}$)";
