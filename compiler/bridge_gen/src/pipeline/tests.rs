use super::*;
use bridge_ir::{DeclarationSignature, MemberSignature, TypeRef};
use pretty_assertions::assert_eq;

fn q(name: &str) -> QualifiedName {
    QualifiedName::parse(name)
}

fn run(decls: Vec<DeclarationSignature>) -> Result<GeneratedModel, GenProblem> {
    let set = DeclarationSet::new(decls)?;
    generate_model(&set, &GenConfig::default())
}

#[test]
fn test_empty_batch() {
    assert_eq!(run(Vec::new()), Ok(GeneratedModel::default()));
}

#[test]
fn test_model_contains_every_stage() {
    let model = run(vec![
        DeclarationSignature::class("app.Main")
            .with_supertype("bridgegen.runtime.ScopeProvider")
            .annotate_scope_provider(),
        DeclarationSignature::interface("app.I")
            .with_member(MemberSignature::new("f", Some(TypeRef::parse("kotlin.Int"))))
            .annotate_native_interface(None),
        DeclarationSignature::class("app.C")
            .with_supertype("app.I")
            .with_member(MemberSignature::new("f", Some(TypeRef::parse("kotlin.Int"))))
            .annotate_native_class(None, Some(q("app.Main"))),
    ])
    .unwrap_or_default();

    assert_eq!(model.file_count(), 3);
    assert!(model.interface(&q("app.I")).is_some());
    assert!(model.class(&q("app.C")).is_some());
    assert!(model.class(&q("app.I")).is_none());
}

#[test]
fn test_class_and_interface_named_alike() {
    let result = run(vec![
        DeclarationSignature::class("app.Repo").annotate_native_class(Some("Api"), None),
        DeclarationSignature::interface("app.Service").annotate_native_interface(Some("Api")),
    ]);
    assert_eq!(
        result,
        Err(GenProblem::DuplicateOutput {
            name: q("app.Api"),
            first: q("app.Service"),
            second: q("app.Repo"),
        })
    );
}

#[test]
fn test_output_shadowing_existing_declaration() {
    let result = run(vec![
        DeclarationSignature::class("app.Repo").annotate_native_class(None, None),
        DeclarationSignature::class("app.RepoNative"),
    ]);
    assert!(matches!(
        result,
        Err(GenProblem::DuplicateOutput { ref name, .. }) if *name == q("app.RepoNative")
    ));
}

#[test]
fn test_generate_renders_all_files() {
    let set = DeclarationSet::new(vec![DeclarationSignature::class("app.Repo")
        .annotate_native_class(None, None)
        .annotate_native_interface(None)])
    .unwrap_or_default();
    let output = generate(&set, &GenConfig::default()).unwrap_or_default();
    let names: Vec<&str> = output.files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["RepoNativeProtocol", "RepoNative"]);
}

#[test]
fn test_first_failure_aborts_batch() {
    let result = run(vec![
        DeclarationSignature::interface("app.Ok").annotate_native_interface(None),
        DeclarationSignature::class("app.Bad").annotate_native_class(None, Some(q("app.Missing"))),
    ]);
    assert!(matches!(result, Err(GenProblem::UnknownScopeProvider { .. })));
}
