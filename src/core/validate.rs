use crate::domain::model::{AnnotatedType, TypeKind, ValidationResult, Visibility};

pub const MSG_ONLY_CLASSES: &str = "only classes can be annotated with Log";
pub const MSG_ONLY_PUBLIC: &str = "only public classes can be annotated with Log";

/// Structural eligibility check. Rules run in order and the first failure
/// wins; anything that is a non-private class passes.
pub fn validate(candidate: &AnnotatedType) -> ValidationResult {
    if candidate.kind != TypeKind::Class {
        return ValidationResult::Rejected {
            reason: MSG_ONLY_CLASSES.to_string(),
        };
    }

    if candidate.visibility == Visibility::Private {
        return ValidationResult::Rejected {
            reason: MSG_ONLY_PUBLIC.to_string(),
        };
    }

    ValidationResult::Accepted
}
