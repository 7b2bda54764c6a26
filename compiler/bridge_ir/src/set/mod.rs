//! The batch of declarations one generation pass works on.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{DeclarationSignature, QualifiedName};

/// Two declarations in one batch share a qualified name.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct DuplicateDeclaration {
    pub name: QualifiedName,
}

impl fmt::Display for DuplicateDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "declaration `{}` appears more than once", self.name)
    }
}

impl std::error::Error for DuplicateDeclaration {}

/// All declarations handed over by the extractor for one pass.
///
/// Keeps input order (used as the tie-break for every ordering decision the
/// generator makes) plus a name index for supertype lookups. Unannotated
/// declarations are kept too: their members are flattened into generated
/// types that inherit from them.
#[derive(Clone, Debug, Default)]
pub struct DeclarationSet {
    declarations: Vec<DeclarationSignature>,
    index: FxHashMap<QualifiedName, usize>,
}

impl DeclarationSet {
    /// Build a batch, rejecting duplicate qualified names.
    pub fn new(declarations: Vec<DeclarationSignature>) -> Result<Self, DuplicateDeclaration> {
        let mut index = FxHashMap::default();
        for (i, decl) in declarations.iter().enumerate() {
            if index.insert(decl.name.clone(), i).is_some() {
                return Err(DuplicateDeclaration {
                    name: decl.name.clone(),
                });
            }
        }
        Ok(DeclarationSet {
            declarations,
            index,
        })
    }

    /// Look up a declaration by qualified name.
    pub fn get(&self, name: &QualifiedName) -> Option<&DeclarationSignature> {
        self.index.get(name).map(|&i| &self.declarations[i])
    }

    pub fn contains(&self, name: &QualifiedName) -> bool {
        self.index.contains_key(name)
    }

    /// All declarations in input order.
    pub fn iter(&self) -> impl Iterator<Item = &DeclarationSignature> {
        self.declarations.iter()
    }

    /// Declarations marked for interface generation, in input order.
    pub fn interface_targets(&self) -> impl Iterator<Item = &DeclarationSignature> {
        self.iter()
            .filter(|d| d.annotations.native_interface.is_some())
    }

    /// Declarations marked for class generation, in input order.
    pub fn class_targets(&self) -> impl Iterator<Item = &DeclarationSignature> {
        self.iter().filter(|d| d.annotations.native_class.is_some())
    }

    /// Declarations exported as scope providers, in input order.
    pub fn scope_providers(&self) -> impl Iterator<Item = &DeclarationSignature> {
        self.iter()
            .filter(|d| d.annotations.exported_scope_provider)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
