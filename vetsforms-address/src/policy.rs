//! Dynamic per-field policy for the address form.
//!
//! Evaluation is one synchronous pass per user input event: the military
//! base override is applied to the form-state first, then every field
//! policy is derived from the settled values.
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;

use crate::constants::{
    KEY_COUNTRY, KEY_LIVES_ON_MILITARY_BASE, MILITARY_CITY_TITLE, USA_LABEL,
};
use crate::data::{AddressCatalog, Choice};
use crate::form::FormState;
use crate::path::{concrete_path, join_key};
use crate::schema::{AddressField, FIELD_ORDER};

/// Caller-injected predicate deciding whether a field is required for
/// the current form-state.
pub type RequiredFn = Rc<dyn Fn(&FormState, Option<usize>) -> bool>;

/// Required hooks for the fields whose requiredness is owned by the form
/// page rather than the address rules (yes/no gates, checkboxes in
/// other chapters, and so on).
#[derive(Clone, Default)]
pub struct RequiredHooks {
    pub country: Option<RequiredFn>,
    pub street: Option<RequiredFn>,
    pub city: Option<RequiredFn>,
    pub postal_code: Option<RequiredFn>,
}

impl RequiredHooks {
    /// Use one predicate for every caller-driven field.
    #[must_use]
    pub fn uniform<F>(predicate: F) -> Self
    where
        F: Fn(&FormState, Option<usize>) -> bool + 'static,
    {
        let shared: RequiredFn = Rc::new(predicate);
        Self {
            country: Some(Rc::clone(&shared)),
            street: Some(Rc::clone(&shared)),
            city: Some(Rc::clone(&shared)),
            postal_code: Some(shared),
        }
    }

    /// Mark every caller-driven field required unconditionally.
    #[must_use]
    pub fn always() -> Self {
        Self::uniform(|_, _| true)
    }
}

fn hook_required(hook: Option<&RequiredFn>, form: &FormState, index: Option<usize>) -> bool {
    hook.is_some_and(|predicate| predicate(form, index))
}

/// Static, per-form-page configuration for one address record.
#[derive(Clone)]
pub struct PolicyConfig {
    /// Whether the page offers the military base checkbox at all.
    pub military_base_supported: bool,
    /// Path template locating the record in form-state; may carry an
    /// `[INDEX]` placeholder for array contexts.
    pub field_path: String,
    /// Caller-owned required predicates.
    pub required: RequiredHooks,
}

impl PolicyConfig {
    #[must_use]
    pub fn new(field_path: impl Into<String>, military_base_supported: bool) -> Self {
        Self {
            military_base_supported,
            field_path: field_path.into(),
            required: RequiredHooks::default(),
        }
    }

    /// Attach caller required hooks.
    #[must_use]
    pub fn with_required(mut self, required: RequiredHooks) -> Self {
        self.required = required;
        self
    }
}

/// Computed render/validation policy for one field. Built fresh on every
/// evaluation pass and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldPolicy {
    pub required: bool,
    pub hidden: bool,
    pub disabled: bool,
    /// Display title for the current pass; the city field switches to
    /// the military label while a base address is active.
    pub title: &'static str,
    /// Enumerated choices, when the field renders as a selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Choice>>,
}

impl FieldPolicy {
    fn shown(title: &'static str) -> Self {
        Self {
            required: false,
            hidden: false,
            disabled: false,
            title,
            choices: None,
        }
    }
}

/// Per-field policies for one address record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressPolicySet {
    pub lives_on_military_base: FieldPolicy,
    pub military_base_info: FieldPolicy,
    pub country: FieldPolicy,
    pub street: FieldPolicy,
    pub street2: FieldPolicy,
    pub city: FieldPolicy,
    pub state: FieldPolicy,
    pub province: FieldPolicy,
    pub postal_code: FieldPolicy,
    pub international_postal_code: FieldPolicy,
}

impl AddressPolicySet {
    /// Policy for a single field.
    #[must_use]
    pub fn get(&self, field: AddressField) -> &FieldPolicy {
        match field {
            AddressField::LivesOnMilitaryBase => &self.lives_on_military_base,
            AddressField::MilitaryBaseInfo => &self.military_base_info,
            AddressField::Country => &self.country,
            AddressField::Street => &self.street,
            AddressField::Street2 => &self.street2,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::Province => &self.province,
            AddressField::PostalCode => &self.postal_code,
            AddressField::InternationalPostalCode => &self.international_postal_code,
        }
    }

    /// Iterate fields with their policies in display order.
    pub fn iter(&self) -> impl Iterator<Item = (AddressField, &FieldPolicy)> {
        FIELD_ORDER.into_iter().map(|field| (field, self.get(field)))
    }
}

/// Computes the full per-field policy set for one address record.
///
/// The evaluator is pure except for the documented military base
/// override: see [`AddressPolicyEvaluator::evaluate`].
pub struct AddressPolicyEvaluator<'a> {
    catalog: &'a AddressCatalog,
    config: PolicyConfig,
}

impl<'a> AddressPolicyEvaluator<'a> {
    #[must_use]
    pub fn new(catalog: &'a AddressCatalog, config: PolicyConfig) -> Self {
        Self { catalog, config }
    }

    /// Evaluator over the shared built-in catalog.
    #[must_use]
    pub fn with_default_catalog(config: PolicyConfig) -> AddressPolicyEvaluator<'static> {
        AddressPolicyEvaluator {
            catalog: AddressCatalog::default_catalog(),
            config,
        }
    }

    /// Evaluate every field policy against the current form-state.
    ///
    /// Runs as one ordered pass. When base addresses are supported and
    /// the record's flag is set, the country value is first forced to
    /// "United States" in `form` (a write-through the caller keeps), and
    /// only then are the dependent field policies derived. An absent
    /// country and "United States" both select domestic rules.
    /// Re-running on a settled form-state yields an identical set.
    pub fn evaluate(&self, form: &mut FormState, index: Option<usize>) -> AddressPolicySet {
        let record_path = concrete_path(&self.config.field_path, index);
        let country_path = join_key(&record_path, KEY_COUNTRY);
        let supported = self.config.military_base_supported;
        let on_base =
            supported && form.get_flag(&join_key(&record_path, KEY_LIVES_ON_MILITARY_BASE));

        if on_base {
            form.set(&country_path, Value::String(USA_LABEL.to_string()));
        }

        let domestic = form
            .get_str(&country_path)
            .is_none_or(|name| name == USA_LABEL);
        let foreign = !domestic && !on_base;
        let hooks = &self.config.required;

        let mut lives_on_military_base =
            FieldPolicy::shown(AddressField::LivesOnMilitaryBase.title());
        lives_on_military_base.hidden = !supported;

        let mut military_base_info = FieldPolicy::shown(AddressField::MilitaryBaseInfo.title());
        military_base_info.hidden = !supported;

        let mut country = FieldPolicy::shown(AddressField::Country.title());
        country.required = hook_required(hooks.country.as_ref(), form, index);
        country.disabled = on_base;
        country.choices = Some(if on_base {
            self.catalog.united_states_only()
        } else {
            self.catalog.countries.clone()
        });

        let mut street = FieldPolicy::shown(AddressField::Street.title());
        street.required = hook_required(hooks.street.as_ref(), form, index);

        let street2 = FieldPolicy::shown(AddressField::Street2.title());

        let mut city = FieldPolicy::shown(if on_base {
            MILITARY_CITY_TITLE
        } else {
            AddressField::City.title()
        });
        city.required = hook_required(hooks.city.as_ref(), form, index);
        city.choices = on_base.then(|| self.catalog.military_city_choices());

        let mut state = FieldPolicy::shown(AddressField::State.title());
        state.required = domestic || on_base;
        state.hidden = foreign;
        state.choices = Some(if on_base {
            self.catalog.military_states.clone()
        } else {
            self.catalog.states.clone()
        });

        let mut province = FieldPolicy::shown(AddressField::Province.title());
        province.required = foreign;
        province.hidden = on_base || domestic;

        let mut postal_code = FieldPolicy::shown(AddressField::PostalCode.title());
        postal_code.required = hook_required(hooks.postal_code.as_ref(), form, index);
        postal_code.hidden = foreign;

        let mut international_postal_code =
            FieldPolicy::shown(AddressField::InternationalPostalCode.title());
        international_postal_code.required = !domestic;
        international_postal_code.hidden = on_base || domestic;

        AddressPolicySet {
            lives_on_military_base,
            military_base_info,
            country,
            street,
            street2,
            city,
            state,
            province,
            postal_code,
            international_postal_code,
        }
    }
}
