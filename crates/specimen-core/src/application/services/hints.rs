//! Hint resolver reading the [`DocHint`] carried on each field descriptor.
//!
//! Descriptors built by `#[derive(Describe)]` or loaded from a manifest carry
//! their hints inline, so this is the resolver most callers want.
//!
//! [`DocHint`]: crate::domain::DocHint

use crate::application::ports::HintResolver;
use crate::domain::FieldDescriptor;

#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptorHints;

impl HintResolver for DescriptorHints {
    fn has_param_hint(&self, field: &FieldDescriptor) -> bool {
        field.hint().param.is_some()
    }

    fn param_hint_value(&self, field: &FieldDescriptor) -> String {
        field.hint().param.clone().unwrap_or_default()
    }

    fn has_response_hint(&self, field: &FieldDescriptor) -> bool {
        field.hint().response.is_some()
    }

    fn response_hint_value(&self, field: &FieldDescriptor) -> String {
        field
            .hint()
            .response
            .as_ref()
            .map(|r| r.value.clone())
            .unwrap_or_default()
    }

    fn response_hint_example(&self, field: &FieldDescriptor) -> String {
        field
            .hint()
            .response
            .as_ref()
            .and_then(|r| r.example.clone())
            .unwrap_or_default()
    }
}
