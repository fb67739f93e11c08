use crate::domain::model::{FieldDescriptor, FormatExpression};

/// Name of the single parameter of the generated `log` method. Every
/// synthesized argument expression reads a field off this parameter.
pub const PARAM_NAME: &str = "args";

/// Builds the `name - %s ` template and the matching `args.<name>` argument
/// list from the field sequence. Deterministic: the same fields always
/// produce the same expression.
///
/// A literal `%` inside a field name is doubled so the placeholder count
/// stays equal to the field count once the template reaches the formatter.
pub fn synthesize(fields: &[FieldDescriptor]) -> FormatExpression {
    let mut template = String::new();
    let mut args = Vec::with_capacity(fields.len());

    for field in fields {
        template.push_str(&field.name.replace('%', "%%"));
        template.push_str(" - %s ");
        args.push(format!("{}.{}", PARAM_NAME, field.name));
    }

    FormatExpression { template, args }
}
