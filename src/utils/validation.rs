use crate::utils::error::{GenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// Reserved words cannot be used as type, field or package segment names.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

pub fn validate_java_identifier(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Identifier cannot be empty".to_string(),
        });
    }

    let mut chars = value.chars();
    let first = chars.next().unwrap_or('\0');
    if !is_identifier_start(first) || !chars.all(is_identifier_part) {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Not a valid Java identifier".to_string(),
        });
    }

    if JAVA_KEYWORDS.contains(&value) {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Identifier is a reserved Java keyword".to_string(),
        });
    }

    Ok(())
}

/// Validates a dotted package name. The empty string is legal and means the
/// default (unnamed) package.
pub fn validate_package_name(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Ok(());
    }

    for segment in value.split('.') {
        validate_java_identifier(field_name, segment).map_err(|_| {
            GenError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.to_string(),
                reason: format!("Package segment '{}' is not a valid identifier", segment),
            }
        })?;
    }

    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
