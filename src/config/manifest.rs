use crate::domain::model::{AnnotatedType, MemberDescriptor, TypeKind, Visibility};
use crate::utils::error::{GenError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One round's worth of candidate type declarations, as handed over by the
/// host build. This is the adapter between whatever toolchain discovered the
/// marked types and the toolchain-agnostic core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundManifest {
    pub generator: Option<GeneratorConfig>,
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub log_facility: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    #[serde(default)]
    pub package: String,
    pub kind: TypeKind,
    #[serde(default = "default_visibility")]
    pub visibility: Visibility,
    #[serde(default)]
    pub fields: Vec<FieldEntry>,
}

fn default_visibility() -> Visibility {
    Visibility::Public
}

/// Field entries are either a bare name (an instance field) or a table with
/// static/synthetic flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default, rename = "static")]
        is_static: bool,
        #[serde(default)]
        synthetic: bool,
    },
}

impl FieldEntry {
    fn name(&self) -> &str {
        match self {
            FieldEntry::Name(name) => name,
            FieldEntry::Detailed { name, .. } => name,
        }
    }

    fn to_member(&self) -> MemberDescriptor {
        match self {
            FieldEntry::Name(name) => MemberDescriptor::instance(name.clone()),
            FieldEntry::Detailed {
                name,
                is_static,
                synthetic,
            } => MemberDescriptor {
                name: name.clone(),
                is_static: *is_static,
                synthetic: *synthetic,
            },
        }
    }
}

impl RoundManifest {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GenError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let manifest: RoundManifest = toml::from_str(&processed_content)?;
        Ok(manifest)
    }

    /// Replaces `${VAR_NAME}` references with environment values; unknown
    /// variables are left in place.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn log_facility(&self) -> Option<&str> {
        self.generator
            .as_ref()
            .and_then(|g| g.log_facility.as_deref())
    }

    /// Converts the declarations into the candidate set the driver consumes,
    /// preserving manifest order.
    pub fn candidates(&self) -> Vec<AnnotatedType> {
        self.types
            .iter()
            .map(|decl| AnnotatedType {
                name: decl.name.clone(),
                package: decl.package.clone(),
                kind: decl.kind,
                visibility: decl.visibility,
                members: decl.fields.iter().map(FieldEntry::to_member).collect(),
            })
            .collect()
    }
}

impl Validate for RoundManifest {
    fn validate(&self) -> Result<()> {
        if let Some(facility) = self.log_facility() {
            validation::validate_non_empty_string("generator.log_facility", facility)?;
        }

        for decl in &self.types {
            validation::validate_java_identifier("types.name", &decl.name)?;
            validation::validate_package_name("types.package", &decl.package)?;
            for field in &decl.fields {
                validation::validate_java_identifier("types.fields", field.name())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_manifest() {
        let manifest = RoundManifest::from_toml_str(
            r#"
[[types]]
name = "User"
package = "com.example.awesomelogger"
kind = "class"
fields = ["firstName", "lastName", "city"]
"#,
        )
        .unwrap();

        assert!(manifest.validate().is_ok());
        let candidates = manifest.candidates();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "User");
        assert_eq!(candidates[0].visibility, Visibility::Public);
        assert_eq!(candidates[0].members.len(), 3);
        assert!(!candidates[0].members[0].is_static);
    }

    #[test]
    fn test_parse_detailed_field_entries() {
        let manifest = RoundManifest::from_toml_str(
            r#"
[[types]]
name = "Session"
package = "com.example.app"
kind = "class"
visibility = "package"
fields = [
  "token",
  { name = "INSTANCES", static = true },
  { name = "this$0", synthetic = true },
]
"#,
        )
        .unwrap();

        let candidates = manifest.candidates();
        assert_eq!(candidates[0].visibility, Visibility::PackagePrivate);
        assert_eq!(candidates[0].members.len(), 3);
        assert!(candidates[0].members[1].is_static);
        assert!(candidates[0].members[2].synthetic);
    }

    #[test]
    fn test_log_facility_override() {
        let manifest = RoundManifest::from_toml_str(
            r#"
[generator]
log_facility = "timber.log.Timber"

[[types]]
name = "User"
kind = "class"
"#,
        )
        .unwrap();

        assert_eq!(manifest.log_facility(), Some("timber.log.Timber"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LOGGEN_TEST_PKG", "com.example.env");
        let manifest = RoundManifest::from_toml_str(
            r#"
[[types]]
name = "User"
package = "${LOGGEN_TEST_PKG}"
kind = "class"
"#,
        )
        .unwrap();

        assert_eq!(manifest.types[0].package, "com.example.env");
    }

    #[test]
    fn test_invalid_field_name_rejected_by_validation() {
        let manifest = RoundManifest::from_toml_str(
            r#"
[[types]]
name = "User"
package = "com.example.app"
kind = "class"
fields = ["first-name"]
"#,
        )
        .unwrap();

        assert!(manifest.validate().is_err());
    }

    #[test]
    fn test_unknown_kind_fails_to_parse() {
        let result = RoundManifest::from_toml_str(
            r#"
[[types]]
name = "User"
kind = "record"
"#,
        );
        assert!(result.is_err());
    }
}
