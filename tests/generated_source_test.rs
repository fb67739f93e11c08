use loggen::{
    process, AnnotatedType, MemberDescriptor, RoundOutcome, TypeKind, Visibility,
    DEFAULT_LOG_FACILITY,
};

fn public_class(name: &str, package: &str, fields: &[&str]) -> AnnotatedType {
    AnnotatedType {
        name: name.to_string(),
        package: package.to_string(),
        kind: TypeKind::Class,
        visibility: Visibility::Public,
        members: fields
            .iter()
            .map(|f| MemberDescriptor::instance(*f))
            .collect(),
    }
}

fn units_of(outcome: RoundOutcome) -> Vec<loggen::GeneratedUnit> {
    match outcome {
        RoundOutcome::Completed { units } => units,
        RoundOutcome::Aborted { diagnostic } => panic!("round aborted: {}", diagnostic),
    }
}

#[test]
fn test_user_scenario_produces_exact_source() {
    let candidates = vec![public_class(
        "User",
        "com.example.awesomelogger",
        &["firstName", "lastName", "city"],
    )];

    let units = units_of(process(&candidates, DEFAULT_LOG_FACILITY));
    assert_eq!(units.len(), 1);

    let unit = &units[0];
    assert_eq!(unit.type_name, "User_Log");
    assert_eq!(unit.file_name, "User_Log.java");

    let expected = "\
package com.example.awesomelogger;

public final class User_Log {
  public static void log(User args) {
    android.util.Log.d(\"User\", String.format(\"firstName - %s lastName - %s city - %s \", args.firstName, args.lastName, args.city));
  }
}
";
    assert_eq!(unit.content, expected);
}

#[test]
fn test_zero_field_class_produces_empty_format_call() {
    let candidates = vec![public_class("Empty", "com.example.app", &[])];

    let units = units_of(process(&candidates, DEFAULT_LOG_FACILITY));
    assert!(units[0]
        .content
        .contains("android.util.Log.d(\"Empty\", String.format(\"\"));"));
}

#[test]
fn test_placeholder_count_tracks_field_count() {
    for n in [0usize, 1, 2, 5, 12] {
        let names: Vec<String> = (0..n).map(|i| format!("field{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(|s| s.as_str()).collect();
        let candidates = vec![public_class("Wide", "com.example.app", &refs)];

        let units = units_of(process(&candidates, DEFAULT_LOG_FACILITY));
        let content = &units[0].content;

        assert_eq!(content.matches("%s").count(), n);
        assert_eq!(content.matches("args.field").count(), n);
    }
}

#[test]
fn test_fixed_names_in_generated_unit() {
    let candidates = vec![public_class("Order", "shop", &["id"])];
    let units = units_of(process(&candidates, DEFAULT_LOG_FACILITY));

    let content = &units[0].content;
    assert!(content.contains("public final class Order_Log {"));
    assert!(content.contains("public static void log(Order args) {"));
}

#[test]
fn test_generation_is_byte_identical_across_runs() {
    let candidates = vec![
        public_class("User", "com.example.app", &["firstName", "lastName"]),
        public_class("Order", "com.example.app", &["id", "total"]),
    ];

    let first = units_of(process(&candidates, DEFAULT_LOG_FACILITY));
    let second = units_of(process(&candidates, DEFAULT_LOG_FACILITY));

    assert_eq!(first, second);
}

#[test]
fn test_hostile_field_names_stay_inside_the_string_literal() {
    // Quotes, backslashes and percent signs must not break the generated
    // literal or change the placeholder count.
    let candidates = vec![public_class(
        "Odd",
        "com.example.app",
        &["plain", "with\"quote", "with\\slash", "with%rate"],
    )];

    let units = units_of(process(&candidates, DEFAULT_LOG_FACILITY));
    let content = &units[0].content;

    assert!(content.contains("with\\\"quote"));
    assert!(content.contains("with\\\\slash"));
    assert!(content.contains("with%%rate - %s "));
    // Four fields, four live placeholders once escaped percents are removed.
    assert_eq!(content.replace("%%", "").matches("%s").count(), 4);
}
