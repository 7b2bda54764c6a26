//! Inheritance ordering for interface generation.
//!
//! A generated interface can only extend generated supertypes that already
//! exist, so interface targets are processed supertype-first.

use std::collections::VecDeque;

use bridge_ir::{DeclarationSignature, QualifiedName};
use rustc_hash::FxHashMap;

use crate::GenProblem;

/// Order declarations so every one appears after its in-batch supertypes.
///
/// Edges run from a declared supertype to its subtype and only count when
/// both ends are in `declarations`; supertypes outside the slice are ignored.
/// Ready nodes are taken in input order, so identical input always yields
/// the same order.
///
/// Returns [`GenProblem::InheritanceCycle`] naming every declaration that
/// could not be ordered (sorted by name) if the graph has a cycle.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = declarations.len()))]
pub fn topological_order<'a>(
    declarations: &[&'a DeclarationSignature],
) -> Result<Vec<&'a DeclarationSignature>, GenProblem> {
    let index: FxHashMap<&QualifiedName, usize> = declarations
        .iter()
        .enumerate()
        .map(|(i, decl)| (&decl.name, i))
        .collect();

    // in_degree[i]: in-batch supertypes of i not yet emitted.
    // dependents[j]: subtypes of j, in input order.
    let mut in_degree = vec![0usize; declarations.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); declarations.len()];
    for (i, decl) in declarations.iter().enumerate() {
        for supertype in &decl.supertypes {
            if let Some(&j) = index.get(supertype) {
                in_degree[i] += 1;
                dependents[j].push(i);
            }
        }
    }

    let mut queue: VecDeque<usize> = (0..declarations.len())
        .filter(|&i| in_degree[i] == 0)
        .collect();
    let mut order = Vec::with_capacity(declarations.len());

    while let Some(node) = queue.pop_front() {
        order.push(declarations[node]);
        for &dep in &dependents[node] {
            in_degree[dep] -= 1;
            if in_degree[dep] == 0 {
                queue.push_back(dep);
            }
        }
    }

    if order.len() == declarations.len() {
        tracing::debug!(
            order = ?order.iter().map(|d| d.name.to_string()).collect::<Vec<_>>(),
            "inheritance order"
        );
        Ok(order)
    } else {
        let mut members: Vec<QualifiedName> = in_degree
            .iter()
            .enumerate()
            .filter(|&(_, &degree)| degree > 0)
            .map(|(i, _)| declarations[i].name.clone())
            .collect();
        members.sort();
        Err(GenProblem::InheritanceCycle { members })
    }
}
