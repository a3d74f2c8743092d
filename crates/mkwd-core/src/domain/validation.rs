use crate::domain::{
    entities::{Template, TreeNode},
    error::DomainError,
};

/// Centralized domain validation.
///
/// Entities own their rules; this is the single entry point the application
/// layer calls so it never has to know which entity checks what.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_template(template: &Template) -> Result<(), DomainError> {
        template.validate()
    }

    pub fn validate_tree(tree: &TreeNode) -> Result<(), DomainError> {
        tree.validate()
    }
}
