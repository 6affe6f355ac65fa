use serde_json::json;
use vetsforms_address::{
    AddressCatalog, AddressPolicyEvaluator, FormState, PolicyConfig, RequiredHooks, USA_LABEL,
};

fn evaluator(path: &str, military_base_supported: bool) -> AddressPolicyEvaluator<'static> {
    AddressPolicyEvaluator::with_default_catalog(PolicyConfig::new(path, military_base_supported))
}

#[test]
fn absent_and_us_country_follow_domestic_rules() {
    let catalog = AddressCatalog::default_catalog();
    for record in [json!({}), json!({ "country": USA_LABEL })] {
        let mut form = FormState::new(json!({ "address": record }));
        let policies = evaluator("address", false).evaluate(&mut form, None);

        assert!(policies.state.required);
        assert!(!policies.state.hidden);
        assert!(!policies.province.required);
        assert!(policies.province.hidden);
        assert!(!policies.postal_code.hidden);
        assert!(policies.international_postal_code.hidden);
        assert!(!policies.international_postal_code.required);
        assert_eq!(policies.state.choices.as_deref(), Some(catalog.states.as_slice()));
        assert_eq!(
            policies.country.choices.as_deref(),
            Some(catalog.countries.as_slice())
        );
    }
}

#[test]
fn foreign_country_switches_to_province_and_international_postal() {
    let mut form = FormState::new(json!({
        "address": { "country": "Canada", "livesOnMilitaryBase": false }
    }));
    let policies = evaluator("address", true).evaluate(&mut form, None);

    assert!(policies.state.hidden);
    assert!(!policies.state.required);
    assert!(policies.province.required);
    assert!(!policies.province.hidden);
    assert!(policies.postal_code.hidden);
    assert!(policies.international_postal_code.required);
    assert!(!policies.international_postal_code.hidden);
}

#[test]
fn military_base_forces_a_domestic_address() {
    let catalog = AddressCatalog::default_catalog();
    let mut form = FormState::new(json!({
        "address": { "country": "Canada", "livesOnMilitaryBase": true }
    }));
    let policies = evaluator("address", true).evaluate(&mut form, None);

    // The override writes through to the caller's form-state.
    assert_eq!(form.get_str("address.country"), Some(USA_LABEL));

    assert!(policies.state.required);
    assert!(!policies.state.hidden);
    assert_eq!(
        policies.state.choices.as_deref(),
        Some(catalog.military_states.as_slice())
    );
    assert!(policies.province.hidden);
    assert!(!policies.province.required);
    assert!(policies.international_postal_code.hidden);
    assert!(!policies.postal_code.hidden);

    assert!(policies.country.disabled);
    let country_choices = policies.country.choices.as_deref().unwrap();
    assert_eq!(country_choices.len(), 1);
    assert_eq!(country_choices[0].label, USA_LABEL);

    assert_eq!(policies.city.title, "APO/FPO/DPO");
    let city_choices = policies.city.choices.as_deref().unwrap();
    let cities: Vec<_> = city_choices.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(cities, vec!["APO", "FPO", "DPO"]);
}

#[test]
fn settled_form_state_evaluates_identically_twice() {
    let mut form = FormState::new(json!({
        "address": { "country": "Canada", "livesOnMilitaryBase": true }
    }));
    let evaluator = evaluator("address", true);
    let first = evaluator.evaluate(&mut form, None);
    let settled = form.clone();
    let second = evaluator.evaluate(&mut form, None);

    assert_eq!(first, second);
    assert_eq!(form, settled, "second pass must not mutate further");
}

#[test]
fn array_elements_evaluate_independently() {
    let mut form = FormState::new(json!({
        "dependents": [
            { "address": { "country": USA_LABEL } },
            { "address": { "country": "Canada" } }
        ]
    }));
    let evaluator = evaluator("dependents[INDEX].address", true);

    let domestic = evaluator.evaluate(&mut form, Some(0));
    assert!(domestic.state.required);
    assert!(domestic.province.hidden);

    let foreign = evaluator.evaluate(&mut form, Some(1));
    assert!(foreign.state.hidden);
    assert!(foreign.province.required);
    assert!(foreign.international_postal_code.required);
}

#[test]
fn missing_record_path_reads_as_an_empty_record() {
    let mut form = FormState::new(json!({}));
    let policies = evaluator("veteran.mailingAddress", false).evaluate(&mut form, None);

    assert!(policies.state.required);
    assert!(!policies.postal_code.hidden);
    assert!(policies.province.hidden);
    assert_eq!(form, FormState::new(json!({})), "no override, no writes");
}

#[test]
fn unsupported_pages_treat_the_base_feature_as_fully_disabled() {
    let catalog = AddressCatalog::default_catalog();
    // Stale flag left behind by a page that did support base addresses.
    let mut form = FormState::new(json!({
        "address": { "country": "Canada", "livesOnMilitaryBase": true }
    }));
    let policies = evaluator("address", false).evaluate(&mut form, None);

    assert!(policies.lives_on_military_base.hidden);
    assert!(!policies.lives_on_military_base.required);
    assert!(policies.military_base_info.hidden);
    assert_eq!(form.get_str("address.country"), Some("Canada"));
    assert!(policies.state.hidden);
    assert!(policies.province.required);
    assert_eq!(policies.state.choices.as_deref(), Some(catalog.states.as_slice()));
}

#[test]
fn toggle_fields_show_only_when_the_page_supports_them() {
    let mut form = FormState::new(json!({ "address": {} }));
    let shown = evaluator("address", true).evaluate(&mut form, None);
    assert!(!shown.lives_on_military_base.hidden);
    assert!(!shown.military_base_info.hidden);
    assert!(!shown.lives_on_military_base.required);
}

#[test]
fn nested_records_resolve_through_their_full_path() {
    let mut form = FormState::new(json!({
        "veteran": {
            "contact": {
                "address": { "country": "Mexico" }
            }
        }
    }));
    let hooks = RequiredHooks::always();
    let evaluator = AddressPolicyEvaluator::with_default_catalog(
        PolicyConfig::new("veteran.contact.address", true).with_required(hooks),
    );
    let policies = evaluator.evaluate(&mut form, None);

    assert!(policies.country.required);
    assert!(policies.street.required);
    assert!(policies.province.required);
    assert!(policies.state.hidden);
}
