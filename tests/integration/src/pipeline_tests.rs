//! Whole pipeline: selection, check, ignore file, filter, fix and reports.

use meta_check::{
    AutoFixer, CheckOptions, Checker, DeclaredTargetType, FilterOptions, FixOptions, Glob,
    SequentialGuidGenerator, StrategySelector, TargetType, filter, load_ignored_globs,
};
use meta_fs::{ProjectLayout, validate_root_dir};
use meta_report::{render_check, render_fix};
use meta_test_utils::project::TestProject;
use pretty_assertions::assert_eq;

#[test]
fn test_project_pipeline_with_ignore_file() {
    let mut project = TestProject::unity_project();
    project.asset_with_meta("Assets/Scripts/Player.cs");
    project.meta("Assets/Scripts");
    project.asset("Assets/Generated/Proto.cs");
    project.meta("Assets/Generated");
    project.asset("Assets/Scripts/Enemy.cs");
    project.file(".meta-check-ignore", "# generated code\nAssets/Generated/**\n");
    project.stage_all();

    let root = validate_root_dir(project.root()).unwrap();
    assert_eq!(
        ProjectLayout::detect(&root).unwrap().target_type,
        TargetType::ProjectRoot
    );

    let (lister, target_type) = StrategySelector::default()
        .select(&root, DeclaredTargetType::Auto)
        .unwrap();
    assert_eq!(target_type, TargetType::ProjectRoot);

    let result = Checker::with_lister(lister)
        .check(&root, &CheckOptions::default())
        .unwrap();
    let ignored_globs = load_ignored_globs(None, &root).unwrap();
    let filtered = filter(
        &result,
        &FilterOptions {
            ignored_globs,
            root_dir: root.clone(),
            ..Default::default()
        },
        &root,
    );

    assert_eq!(render_check(&filtered), "missing Assets/Scripts/Enemy.cs.meta\n");

    let report = AutoFixer::new(Box::new(SequentialGuidGenerator::new(0xabc)))
        .fix(
            &filtered,
            &FixOptions {
                root_dir: root.clone(),
                allowed_globs: vec![Glob::new("Assets/**").unwrap()],
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(render_fix(&report), "created Assets/Scripts/Enemy.cs.meta\n");
    assert!(
        project
            .read("Assets/Scripts/Enemy.cs.meta")
            .contains("guid: 00000000000000000000000000000abc\n")
    );
}

#[test]
fn test_companion_of_ignored_directory_is_kept() {
    // The directory is a listed path even when every file below it is ignored
    let project = TestProject::upm_package();
    project.asset("Generated/Proto.cs");
    project.meta("Generated");

    let result = Checker::new()
        .check(project.root(), &CheckOptions::default())
        .unwrap();
    assert!(result.dangling_meta.is_empty());

    let options = FilterOptions {
        ignored_globs: vec![Glob::new("Generated/**").unwrap()],
        root_dir: project.root().to_path_buf(),
        ..Default::default()
    };
    let filtered = filter(&result, &options, project.root());
    assert!(filtered.is_empty());
}

#[test]
fn test_partial_failure_keeps_going() {
    let project = TestProject::upm_package();
    project.asset("A.cs");
    project.asset("B.cs");

    let result = Checker::new()
        .check(project.root(), &CheckOptions::default())
        .unwrap();
    assert_eq!(result.missing_meta.len(), 2);

    // Another writer creates one companion between check and fix
    project.file("A.cs.meta", "fileFormatVersion: 2\n");

    let report = AutoFixer::default()
        .fix(
            &result,
            &FixOptions {
                root_dir: project.root().to_path_buf(),
                allowed_globs: vec![Glob::new("*").unwrap()],
                ..Default::default()
            },
        )
        .unwrap();

    let created: Vec<&str> = report.created.iter().map(|p| p.as_str()).collect();
    let failed: Vec<&str> = report.failures.keys().map(|p| p.as_str()).collect();
    assert_eq!(created, vec!["B.cs.meta"]);
    assert_eq!(failed, vec!["A.cs.meta"]);
    assert_eq!(project.read("A.cs.meta"), "fileFormatVersion: 2\n");
}
