//! Checker tests against real project trees, one module per lister.

use std::collections::BTreeSet;

use meta_check::{
    CheckOptions, CheckResult, Checker, DeclaredTargetType, Error, NormalizedPath, PathLister,
    TrackedLister,
};
use meta_test_utils::git::add_gitlink;
use meta_test_utils::project::TestProject;

fn set(items: &[&str]) -> BTreeSet<NormalizedPath> {
    items.iter().map(|p| NormalizedPath::new(p)).collect()
}

fn check(project: &TestProject, options: CheckOptions) -> CheckResult {
    Checker::new().check(project.root(), &options).unwrap()
}

mod project_root {
    use super::*;
    use pretty_assertions::assert_eq;

    fn project() -> TestProject {
        let project = TestProject::unity_project();
        project.asset_with_meta("Assets/Scripts/Player.cs");
        project.meta("Assets/Scripts");
        project
    }

    #[test]
    fn test_clean_project() {
        let mut project = project();
        project.stage_all();

        assert!(check(&project, CheckOptions::default()).is_empty());
    }

    #[test]
    fn test_missing_and_dangling() {
        let mut project = project();
        project.asset("Assets/Scripts/Enemy.cs");
        project.meta("Assets/Scripts/Removed.cs");
        project.stage_all();

        let result = check(&project, CheckOptions::default());
        assert_eq!(result.missing_meta, set(&["Assets/Scripts/Enemy.cs"]));
        assert_eq!(result.dangling_meta, set(&["Assets/Scripts/Removed.cs.meta"]));
    }

    #[test]
    fn test_untracked_files_are_invisible() {
        let mut project = project();
        project.stage_all();
        project.asset("Assets/Scripts/Untracked.cs");

        assert!(check(&project, CheckOptions::default()).is_empty());
    }

    #[test]
    fn test_directories_are_synthesized() {
        let mut project = project();
        project.asset_with_meta("Assets/Art/Textures/Stone.png");
        project.stage_all();

        let result = check(&project, CheckOptions::default());
        assert_eq!(result.missing_meta, set(&["Assets/Art", "Assets/Art/Textures"]));
    }

    #[test]
    fn test_hidden_paths_are_skipped() {
        let mut project = project();
        project.asset("Assets/.hidden/Secret.cs");
        project.asset("Assets/Samples~/Demo.cs");
        project.asset("Assets/Build.tmp");
        project.stage_all();

        assert!(check(&project, CheckOptions::default()).is_empty());
    }

    #[test]
    fn test_local_packages_are_checked() {
        let mut project = project();
        project.file("Packages/manifest.json", "{}\n");
        project.file("Packages/com.example.tool/package.json", "{}\n");
        project.asset("Packages/com.example.tool/Runtime/Tool.cs");
        project.meta("Packages/com.example.tool/Runtime/Tool.cs");
        project.stage_all();

        let result = check(&project, CheckOptions::default());
        assert_eq!(
            result.missing_meta,
            set(&[
                "Packages/com.example.tool/Runtime",
                "Packages/com.example.tool/package.json",
            ])
        );
    }

    #[test]
    fn test_case_insensitive_pairing() {
        let mut project = TestProject::unity_project();
        project.asset("Assets/Foo.cs");
        project.meta("Assets/foo.cs");
        project.stage_all();

        let options = CheckOptions {
            ignore_case: true,
            ..Default::default()
        };
        assert!(check(&project, options).is_empty());
    }

    #[test]
    fn test_submodule_directory_needs_companion() {
        let mut project = project();
        project.dir("Assets/Vendor");
        project.stage_all();
        let repo = project.init_git();
        add_gitlink(repo, "Assets/Vendor");

        let options = CheckOptions {
            ignore_submodules_and_nested: true,
            ..Default::default()
        };
        let result = check(&project, options);
        assert_eq!(result.missing_meta, set(&["Assets/Vendor"]));
    }

    #[test]
    fn test_not_a_repository() {
        let project = project();

        let err = Checker::new()
            .check(project.root(), &CheckOptions::default())
            .unwrap_err();
        assert!(err.is_enumeration(), "unexpected error: {err}");
    }

    #[test]
    fn test_with_lister_skips_selection() {
        let mut project = project();
        project.asset("Assets/Scripts/Enemy.cs");
        project.stage_all();

        let lister: Box<dyn PathLister> = Box::new(TrackedLister::new(false));
        let result = Checker::with_lister(lister)
            .check(project.root(), &CheckOptions::default())
            .unwrap();
        assert_eq!(result.missing_meta, set(&["Assets/Scripts/Enemy.cs"]));
    }
}

mod subdirectory {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_package_walk() {
        let project = TestProject::upm_package();
        project.asset_with_meta("Runtime/Tool.cs");
        project.meta("Runtime");
        project.asset("Editor/ToolEditor.cs");
        project.meta("Tests");

        let result = check(&project, CheckOptions::default());
        assert_eq!(result.missing_meta, set(&["Editor", "Editor/ToolEditor.cs"]));
        assert_eq!(result.dangling_meta, set(&["Tests.meta"]));
    }

    #[test]
    fn test_walk_skips_conventions() {
        let project = TestProject::upm_package();
        project.asset("node_modules/dep/index.js");
        project.asset("Samples~/Demo.cs");
        project.asset(".github/workflow.yml");

        assert!(check(&project, CheckOptions::default()).is_empty());
    }

    #[test]
    fn test_nested_project_generated_dirs_are_skipped() {
        let project = TestProject::upm_package();
        project.dir("Sandbox/Assets");
        project.dir("Sandbox/ProjectSettings");
        project.asset("Sandbox/Library/cache.bin");
        project.meta("Sandbox");
        project.meta("Sandbox/Assets");
        project.meta("Sandbox/ProjectSettings");

        assert!(check(&project, CheckOptions::default()).is_empty());
    }

    #[test]
    fn test_nested_roots_are_not_descended_when_ignored() {
        let project = TestProject::upm_package();
        project.file("Nested/package.json", "{}\n");
        project.asset("Nested/Inner.cs");

        let options = CheckOptions {
            ignore_submodules_and_nested: true,
            ..Default::default()
        };
        let result = check(&project, options);
        assert_eq!(result.missing_meta, set(&["Nested"]));

        let result = check(&project, CheckOptions::default());
        assert_eq!(
            result.missing_meta,
            set(&["Nested", "Nested/Inner.cs", "Nested/package.json"])
        );
    }

    #[test]
    fn test_explicit_subdirectory_without_markers() {
        let project = TestProject::new();
        project.asset("Foo.cs");

        let options = CheckOptions {
            target_type: DeclaredTargetType::ProjectSubdirectory,
            ..Default::default()
        };
        assert_eq!(check(&project, options).missing_meta, set(&["Foo.cs"]));
    }

    #[test]
    fn test_auto_without_markers_is_ambiguous() {
        let project = TestProject::new();

        let err = Checker::new()
            .check(project.root(), &CheckOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::AmbiguousTarget { .. }));
    }

    #[test]
    fn test_root_must_be_directory() {
        let project = TestProject::new();
        project.asset("Foo.cs");

        let err = Checker::new()
            .check(&project.path("Foo.cs"), &CheckOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::RootNotDirectory { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_skipped() {
        let project = TestProject::upm_package();
        project.asset_with_meta("Runtime/Tool.cs");
        project.meta("Runtime");
        std::os::unix::fs::symlink(project.path("Runtime"), project.path("Runtime/Loop")).unwrap();

        assert!(check(&project, CheckOptions::default()).is_empty());
    }
}
