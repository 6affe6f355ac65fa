//! Static field metadata for the address form: field identity, titles,
//! validation constraints, and review-screen visibility.
use serde::{Deserialize, Serialize};

use crate::constants::{
    INTL_POSTAL_MAX_LEN, NON_BLANK_PATTERN, TEXT_MAX_LEN, TEXT_MIN_LEN, US_POSTAL_PATTERN,
};
use crate::form::FormState;

/// The fields making up one address record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    LivesOnMilitaryBase,
    MilitaryBaseInfo,
    Country,
    Street,
    Street2,
    City,
    State,
    Province,
    PostalCode,
    InternationalPostalCode,
}

/// Display order for the full field set.
pub const FIELD_ORDER: [AddressField; 10] = [
    AddressField::LivesOnMilitaryBase,
    AddressField::MilitaryBaseInfo,
    AddressField::Country,
    AddressField::Street,
    AddressField::Street2,
    AddressField::City,
    AddressField::State,
    AddressField::Province,
    AddressField::PostalCode,
    AddressField::InternationalPostalCode,
];

impl AddressField {
    /// Form-data key for this field.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LivesOnMilitaryBase => "livesOnMilitaryBase",
            Self::MilitaryBaseInfo => "militaryBaseInfo",
            Self::Country => "country",
            Self::Street => "street",
            Self::Street2 => "street2",
            Self::City => "city",
            Self::State => "state",
            Self::Province => "province",
            Self::PostalCode => "postalCode",
            Self::InternationalPostalCode => "internationalPostalCode",
        }
    }

    /// Default display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::LivesOnMilitaryBase => {
                "I live on a United States military base outside of the United States"
            }
            Self::MilitaryBaseInfo => "Learn more about military base addresses",
            Self::Country => "Country",
            Self::Street => "Street address",
            Self::Street2 => "Line 2",
            Self::City => "City",
            Self::State => "State",
            Self::Province => "State/Province/Region",
            Self::PostalCode => "Postal Code",
            Self::InternationalPostalCode => "International postal code",
        }
    }

    /// How the field appears on the review screen.
    #[must_use]
    pub const fn review_visibility(self) -> ReviewVisibility {
        match self {
            Self::LivesOnMilitaryBase | Self::MilitaryBaseInfo => ReviewVisibility::Hidden,
            Self::Street2 => ReviewVisibility::HiddenIfEmpty,
            _ => ReviewVisibility::Always,
        }
    }

    /// Message shown when a required value is missing.
    #[must_use]
    pub const fn required_message(self) -> Option<&'static str> {
        match self {
            Self::Street => Some("Please enter a street address"),
            Self::City => Some("Please enter a city"),
            Self::State => Some("Please enter a state"),
            Self::Province => Some("Please enter a state/province/region"),
            Self::PostalCode | Self::InternationalPostalCode => Some("Please enter a postal code"),
            _ => None,
        }
    }

    /// Message shown when a value fails its validation pattern.
    #[must_use]
    pub const fn pattern_message(self) -> Option<&'static str> {
        match self {
            Self::Street => Some("Please enter a street address that is under 100 characters"),
            Self::City => Some("Please enter a city that is under 100 characters"),
            Self::PostalCode => Some("Please enter a valid 5 digit postal code"),
            _ => None,
        }
    }

    /// Static validation constraints, when the field takes free text.
    #[must_use]
    pub const fn constraints(self) -> Option<FieldConstraints> {
        match self {
            Self::Street | Self::Street2 | Self::City => Some(FieldConstraints {
                min_length: Some(TEXT_MIN_LEN),
                max_length: Some(TEXT_MAX_LEN),
                pattern: Some(NON_BLANK_PATTERN),
            }),
            Self::PostalCode => Some(FieldConstraints {
                min_length: None,
                max_length: None,
                pattern: Some(US_POSTAL_PATTERN),
            }),
            Self::InternationalPostalCode => Some(FieldConstraints {
                min_length: None,
                max_length: Some(INTL_POSTAL_MAX_LEN),
                pattern: None,
            }),
            _ => None,
        }
    }
}

/// Review-screen visibility hint for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewVisibility {
    Always,
    Hidden,
    HiddenIfEmpty,
}

/// Length and pattern limits for a free-text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldConstraints {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<&'static str>,
}

/// The first constraint a submitted value failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    TooShort,
    TooLong,
    Pattern,
}

impl FieldConstraints {
    /// Check a submitted value against the constraints.
    #[must_use]
    pub fn check(&self, value: &str) -> Option<Violation> {
        let chars = value.chars().count();
        if self.min_length.is_some_and(|min| chars < min) {
            return Some(Violation::TooShort);
        }
        if self.max_length.is_some_and(|max| chars > max) {
            return Some(Violation::TooLong);
        }
        if self
            .pattern
            .is_some_and(|pattern| !matches_pattern(pattern, value))
        {
            return Some(Violation::Pattern);
        }
        None
    }
}

fn matches_pattern(pattern: &str, value: &str) -> bool {
    regex::Regex::new(pattern)
        .map(|re| re.is_match(value))
        .unwrap_or(false)
}

/// Field set for an address page. The military base toggle fields are
/// omitted entirely when the page does not support base addresses.
#[must_use]
pub fn address_schema(military_base_supported: bool) -> Vec<AddressField> {
    FIELD_ORDER
        .into_iter()
        .filter(|&field| {
            military_base_supported
                || !matches!(
                    field,
                    AddressField::LivesOnMilitaryBase | AddressField::MilitaryBaseInfo
                )
        })
        .collect()
}

/// Typed snapshot of one address record inside the form-state tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressRecord {
    pub country: Option<String>,
    pub street: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
    pub international_postal_code: Option<String>,
    pub lives_on_military_base: bool,
}

impl AddressRecord {
    /// Read the record at a resolved path. Missing or malformed data
    /// degrades to the default empty record.
    #[must_use]
    pub fn read(form: &FormState, path: &str) -> Self {
        form.get(path)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}
