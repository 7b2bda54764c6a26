//! Per-file import resolution and name spelling.
//!
//! Every name a file references is written by its simple name when that is
//! unambiguous, and fully qualified otherwise.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use bridge_ir::{well_known, QualifiedName, TypeRef};
use rustc_hash::FxHashSet;

/// Kotlin hard keywords; identifiers spelled like these need backticks.
const HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Escape an identifier that collides with a hard keyword.
pub(super) fn escape(ident: &str) -> Cow<'_, str> {
    if HARD_KEYWORDS.contains(&ident) {
        Cow::Owned(format!("`{ident}`"))
    } else {
        Cow::Borrowed(ident)
    }
}

/// Escape every segment of a dotted path.
pub(super) fn escape_path(path: &str) -> String {
    path.split('.')
        .map(escape)
        .collect::<Vec<_>>()
        .join(".")
}

/// How each referenced name is spelled in one file.
pub(super) struct ImportTable {
    imports: BTreeSet<QualifiedName>,
    /// Names that must be written fully qualified.
    inline: FxHashSet<QualifiedName>,
}

impl ImportTable {
    /// Resolve `referenced` for a file in `package` declaring `declared`.
    ///
    /// Per simple name, at most one qualified name may be spelled short. The
    /// declared type claims its own simple name first, then a same-package
    /// type, then a `kotlin` type (implicitly imported). Otherwise a simple
    /// name referenced by exactly one type is imported. Everything else is
    /// written in full.
    pub(super) fn build(
        package: &str,
        declared: &QualifiedName,
        referenced: &BTreeSet<QualifiedName>,
    ) -> Self {
        let mut by_simple: BTreeMap<&str, Vec<&QualifiedName>> = BTreeMap::new();
        for name in referenced {
            by_simple.entry(name.simple()).or_default().push(name);
        }

        let mut table = ImportTable {
            imports: BTreeSet::new(),
            inline: FxHashSet::default(),
        };
        for (simple, names) in by_simple {
            let owner = if simple == declared.simple() {
                Some(declared)
            } else {
                names
                    .iter()
                    .copied()
                    .find(|n| n.is_in_package(package))
                    .or_else(|| {
                        names
                            .iter()
                            .copied()
                            .find(|n| n.is_in_package(well_known::KOTLIN_PACKAGE))
                    })
            };

            match owner {
                Some(owner) => {
                    table
                        .inline
                        .extend(names.iter().filter(|n| **n != owner).map(|n| (*n).clone()));
                }
                None => match names.as_slice() {
                    [only] if !only.package().is_empty() => {
                        table.imports.insert((*only).clone());
                    }
                    [_] => {}
                    _ => table.inline.extend(names.iter().map(|n| (*n).clone())),
                },
            }
        }
        table
    }

    /// Import lines, sorted.
    pub(super) fn imports(&self) -> impl Iterator<Item = &QualifiedName> {
        self.imports.iter()
    }

    /// Spelling of a name in this file.
    pub(super) fn name(&self, name: &QualifiedName) -> String {
        if self.inline.contains(name) {
            escape_path(&name.to_string())
        } else {
            escape(name.simple()).into_owned()
        }
    }

    /// Spelling of a type in this file.
    pub(super) fn type_ref(&self, ty: &TypeRef) -> String {
        let mut out = self.name(&ty.name);
        if !ty.args.is_empty() {
            let args: Vec<String> = ty.args.iter().map(|a| self.type_ref(a)).collect();
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        if ty.nullable {
            out.push('?');
        }
        out
    }
}
