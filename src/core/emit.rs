use crate::domain::model::{AnnotatedType, FormatExpression, GeneratedUnit};

/// Suffix appended to the originating type's simple name.
pub const CLASS_SUFFIX: &str = "_Log";
/// Name of the generated static method.
pub const METHOD_NAME: &str = "log";
/// Log facility used when neither the manifest nor the CLI overrides it.
/// Fully qualified so the generated file needs no import lines.
pub const DEFAULT_LOG_FACILITY: &str = "android.util.Log";

const INDENT: &str = "  ";

// Small structured code model. Generated source is rendered from this tree
// instead of pasted together from raw strings, so unusual characters in type
// or field names cannot break out of a string literal.

#[derive(Debug, Clone)]
enum Expr {
    /// Java string literal; escaped on render.
    Str(String),
    /// Identifier or field-access expression, rendered verbatim.
    Name(String),
    /// Static call: `target.method(args...)`.
    Call {
        target: String,
        method: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    fn render(&self, out: &mut String) {
        match self {
            Expr::Str(text) => {
                out.push('"');
                out.push_str(&escape_java_string(text));
                out.push('"');
            }
            Expr::Name(name) => out.push_str(name),
            Expr::Call {
                target,
                method,
                args,
            } => {
                out.push_str(target);
                out.push('.');
                out.push_str(method);
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    arg.render(out);
                }
                out.push(')');
            }
        }
    }
}

#[derive(Debug, Clone)]
struct MethodSpec {
    modifiers: &'static str,
    return_type: &'static str,
    name: String,
    // (type, name) pairs
    params: Vec<(String, String)>,
    statements: Vec<Expr>,
}

impl MethodSpec {
    fn render(&self, out: &mut String) {
        out.push_str(INDENT);
        out.push_str(self.modifiers);
        out.push(' ');
        out.push_str(self.return_type);
        out.push(' ');
        out.push_str(&self.name);
        out.push('(');
        for (i, (param_type, param_name)) in self.params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(param_type);
            out.push(' ');
            out.push_str(param_name);
        }
        out.push_str(") {\n");
        for statement in &self.statements {
            out.push_str(INDENT);
            out.push_str(INDENT);
            statement.render(out);
            out.push_str(";\n");
        }
        out.push_str(INDENT);
        out.push_str("}\n");
    }
}

#[derive(Debug, Clone)]
struct TypeSpec {
    modifiers: &'static str,
    name: String,
    methods: Vec<MethodSpec>,
}

#[derive(Debug, Clone)]
struct JavaFile {
    package: String,
    type_spec: TypeSpec,
}

impl JavaFile {
    fn render(&self) -> String {
        let mut out = String::new();
        if !self.package.is_empty() {
            out.push_str("package ");
            out.push_str(&self.package);
            out.push_str(";\n\n");
        }
        out.push_str(self.type_spec.modifiers);
        out.push_str(" class ");
        out.push_str(&self.type_spec.name);
        out.push_str(" {\n");
        for method in &self.type_spec.methods {
            method.render(&mut out);
        }
        out.push_str("}\n");
        out
    }
}

fn escape_java_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                escaped.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}

/// Assembles the companion unit for one accepted candidate:
///
/// ```text
/// package <pkg>;
///
/// public final class <Name>_Log {
///   public static void log(<Name> args) {
///     <facility>.d("<Name>", String.format("<template>", <args...>));
///   }
/// }
/// ```
pub fn emit(candidate: &AnnotatedType, expr: &FormatExpression, facility: &str) -> GeneratedUnit {
    let mut format_args = Vec::with_capacity(expr.args.len() + 1);
    format_args.push(Expr::Str(expr.template.clone()));
    format_args.extend(expr.args.iter().cloned().map(Expr::Name));

    let message = Expr::Call {
        target: "String".to_string(),
        method: "format".to_string(),
        args: format_args,
    };

    let log_call = Expr::Call {
        target: facility.to_string(),
        method: "d".to_string(),
        args: vec![Expr::Str(candidate.name.clone()), message],
    };

    let method = MethodSpec {
        modifiers: "public static",
        return_type: "void",
        name: METHOD_NAME.to_string(),
        params: vec![(
            candidate.name.clone(),
            crate::core::format::PARAM_NAME.to_string(),
        )],
        statements: vec![log_call],
    };

    let type_name = format!("{}{}", candidate.name, CLASS_SUFFIX);
    let file = JavaFile {
        package: candidate.package.clone(),
        type_spec: TypeSpec {
            modifiers: "public final",
            name: type_name.clone(),
            methods: vec![method],
        },
    };

    GeneratedUnit {
        package: candidate.package.clone(),
        file_name: format!("{}.java", type_name),
        type_name,
        content: file.render(),
    }
}
