//! Vetsforms Address Engine
//!
//! Platform-agnostic address-form logic for the vetsforms benefits
//! portal. This crate computes per-field display and validation policy
//! from the live form-state without UI or platform-specific dependencies.

pub mod constants;
pub mod data;
pub mod form;
pub mod path;
pub mod policy;
pub mod schema;

// Re-export commonly used types
pub use constants::{INDEX_PLACEHOLDER, USA_LABEL, USA_VALUE};
pub use data::{AddressCatalog, CatalogError, Choice};
pub use form::FormState;
pub use path::{PathSegment, concrete_path, insert_array_index, join_key, parse_path};
pub use policy::{
    AddressPolicyEvaluator, AddressPolicySet, FieldPolicy, PolicyConfig, RequiredFn, RequiredHooks,
};
pub use schema::{
    AddressField, AddressRecord, FIELD_ORDER, FieldConstraints, ReviewVisibility, Violation,
    address_schema,
};
