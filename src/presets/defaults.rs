// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Built-in presets written to the config file on first run
//!
//! Filters run once per item of the listing and are expected to either pass the
//! item through or drop it (`select(...)`). Selects produce the comma-separated
//! fields that end up inside the result array.

/// Name of the macro used when no filter or select invocation is given
pub const SENTINEL_MACRO: &str = "all";

/// Invocation text of the sentinel macro
pub const SENTINEL_INVOCATION: &str = "all()";

/// Seed data for the three preset dictionaries
#[derive(Debug, Clone, Copy)]
pub struct BuiltinPresets {
    pub filters: &'static [(&'static str, &'static str)],
    pub selects: &'static [(&'static str, &'static str)],
    pub shorts: &'static [(&'static str, &'static str)],
}

pub const BUILTIN_PRESETS: BuiltinPresets = BuiltinPresets {
    filters: BUILTIN_FILTERS,
    selects: BUILTIN_SELECTS,
    shorts: BUILTIN_SHORTS,
};

const BUILTIN_FILTERS: &[(&str, &str)] = &[
    ("all", "."),
    ("podsForImage", r#"select(any($containers.image; test("$1")))"#),
    ("podsForName", r#"select($name | test("$1"))"#),
    ("podsForLabel", "select($labels.$1 == $2)"),
    (
        "podsForMountPath",
        "select(any($containers.volumeMounts[]?.mountPath; . == $1))",
    ),
    (
        "podsForReadinessProbe",
        "select(any($containers.readinessProbe.httpGet; .path == $1 and .port == $2))",
    ),
    (
        "servicesForTargetPort",
        "select(any($ports.targetPort; . == $1))",
    ),
    ("servicesForPort", "select(any($ports.port; . == $1))"),
    ("servicesForSelector", "select(.spec.selector.$1 == $2)"),
    (
        "roleByResourceName",
        "select(any(.rules[]?.resourceNames[]?; . == $1))",
    ),
    ("inNamespace", r#"select($namespace == "$1")"#),
    ("ofKind", r#"select(.kind == "$1")"#),
];

const BUILTIN_SELECTS: &[(&str, &str)] = &[
    ("all", "."),
    ("name", "$name"),
    ("namespaced", "$namespace, $name"),
    ("images", "$name, [$containers.image]"),
    ("labels", "$name, $labels"),
    ("phase", "$name, .status.phase"),
    ("ports", "$name, [$ports.port]"),
    ("field", "$1"),
    ("fields", "$1, $2"),
];

const BUILTIN_SHORTS: &[(&str, &str)] = &[
    ("containers", ".spec.containers[]?"),
    ("labels", ".metadata.labels"),
    ("name", ".metadata.name"),
    ("namespace", ".metadata.namespace"),
    ("ports", ".spec.ports[]?"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(entries: &[(&str, &str)]) {
        let names: HashSet<_> = entries.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn test_builtin_names_are_unique() {
        assert_unique(BUILTIN_PRESETS.filters);
        assert_unique(BUILTIN_PRESETS.selects);
        assert_unique(BUILTIN_PRESETS.shorts);
    }

    #[test]
    fn test_sentinel_exists_in_both_dictionaries() {
        assert!(
            BUILTIN_PRESETS
                .filters
                .iter()
                .any(|(name, _)| *name == SENTINEL_MACRO)
        );
        assert!(
            BUILTIN_PRESETS
                .selects
                .iter()
                .any(|(name, _)| *name == SENTINEL_MACRO)
        );
        assert_eq!(SENTINEL_INVOCATION, format!("{}()", SENTINEL_MACRO));
    }

    #[test]
    fn test_shorts_used_at_most_once_per_template() {
        // Shorts are substituted once per template, a second use would leak
        // the raw `$short` token into the query.
        for (_, template) in BUILTIN_PRESETS
            .filters
            .iter()
            .chain(BUILTIN_PRESETS.selects.iter())
        {
            for (short, _) in BUILTIN_PRESETS.shorts {
                let token = format!("${}", short);
                let uses = template
                    .match_indices(&token)
                    .filter(|(idx, _)| {
                        let rest = &template[idx + token.len()..];
                        !rest.starts_with(|c: char| c.is_ascii_alphanumeric())
                    })
                    .count();
                assert!(uses <= 1, "{} used twice in {}", token, template);
            }
        }
    }
}
