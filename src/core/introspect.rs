use crate::domain::model::{AnnotatedType, FieldDescriptor};

/// Extracts the instance-level fields declared directly on the type, in
/// declaration order. Static and compiler-generated members are skipped;
/// a type with no fields yields an empty sequence, which is legal.
pub fn fields(candidate: &AnnotatedType) -> Vec<FieldDescriptor> {
    candidate
        .members
        .iter()
        .filter(|member| !member.is_static && !member.synthetic)
        .enumerate()
        .map(|(index, member)| FieldDescriptor {
            name: member.name.clone(),
            index,
        })
        .collect()
}
