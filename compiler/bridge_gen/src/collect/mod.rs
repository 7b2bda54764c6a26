//! Member collection.
//!
//! A generated declaration mirrors every reachable member of the original,
//! including members inherited from supertypes in the same batch. Supertypes
//! outside the batch are opaque and contribute nothing.

use bridge_ir::{
    DeclarationSet, DeclarationSignature, MemberSignature, PropertySignature, QualifiedName,
    SignatureKey,
};
use rustc_hash::FxHashSet;

/// Reachable members of a declaration and its in-batch supertypes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectedMembers<'a> {
    pub functions: Vec<&'a MemberSignature>,
    pub properties: Vec<&'a PropertySignature>,
}

/// Collect members of `decl` and its in-batch supertypes.
///
/// Own members come first, then each supertype depth-first in declaration
/// order. Functions are de-duplicated by [`SignatureKey`] and properties by
/// name; the first occurrence wins, so an override shadows the member it
/// overrides. Only public and internal members are collected.
pub fn collect_members<'a>(
    decl: &'a DeclarationSignature,
    set: &'a DeclarationSet,
) -> CollectedMembers<'a> {
    collect_members_except(decl, set, |_| false)
}

/// Like [`collect_members`], but direct supertypes for which `inherited`
/// holds are not entered: their members reach the result through
/// inheritance. Deeper supertypes are still flattened when they are only
/// reachable through a supertype that is entered.
pub fn collect_members_except<'a>(
    decl: &'a DeclarationSignature,
    set: &'a DeclarationSet,
    inherited: impl Fn(&QualifiedName) -> bool,
) -> CollectedMembers<'a> {
    let mut collector = Collector {
        set,
        visited: FxHashSet::default(),
        keys: FxHashSet::default(),
        property_names: FxHashSet::default(),
        out: CollectedMembers::default(),
    };
    collector.visited.insert(&decl.name);
    collector.own_members(decl);
    for supertype in decl.supertypes.iter().filter(|s| !inherited(*s)) {
        if let Some(parent) = set.get(supertype) {
            collector.visit(parent);
        }
    }
    collector.out
}

struct Collector<'a> {
    set: &'a DeclarationSet,
    visited: FxHashSet<&'a QualifiedName>,
    keys: FxHashSet<SignatureKey>,
    property_names: FxHashSet<&'a str>,
    out: CollectedMembers<'a>,
}

impl<'a> Collector<'a> {
    fn visit(&mut self, decl: &'a DeclarationSignature) {
        // Guards against cyclic class hierarchies, which the interface sort
        // never sees.
        if !self.visited.insert(&decl.name) {
            return;
        }

        self.own_members(decl);
        for supertype in &decl.supertypes {
            if let Some(parent) = self.set.get(supertype) {
                self.visit(parent);
            }
        }
    }

    fn own_members(&mut self, decl: &'a DeclarationSignature) {
        for member in &decl.members {
            if member.visibility.is_reachable() && self.keys.insert(member.key()) {
                self.out.functions.push(member);
            }
        }
        for property in &decl.properties {
            if property.visibility.is_reachable() && self.property_names.insert(&property.name) {
                self.out.properties.push(property);
            }
        }
    }
}
