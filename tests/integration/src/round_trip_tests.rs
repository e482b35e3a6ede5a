//! Round-trip scenarios: check, fix, check again.
//!
//! Every scenario runs against a package (directory walk) and against a
//! git-tracked project root (index listing).

use std::collections::BTreeSet;
use std::path::Path;

use meta_check::{
    AutoFixer, CheckOptions, CheckResult, Checker, FilterOptions, FixOptions, Glob,
    NormalizedPath, SequentialGuidGenerator, filter,
};
use meta_test_utils::project::TestProject;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Clone, Copy)]
enum Layout {
    Package,
    Project,
}

/// A tree plus the prefix its assets live under.
struct Scenario {
    project: TestProject,
    layout: Layout,
}

impl Scenario {
    fn new(layout: Layout) -> Self {
        let project = match layout {
            Layout::Package => TestProject::upm_package(),
            Layout::Project => TestProject::unity_project(),
        };
        Self { project, layout }
    }

    fn rel(&self, path: &str) -> String {
        match self.layout {
            Layout::Package => path.to_string(),
            Layout::Project => format!("Assets/{path}"),
        }
    }

    fn asset(&self, path: &str) {
        self.project.asset(&self.rel(path));
    }

    fn meta(&self, path: &str) {
        self.project.meta(&self.rel(path));
    }

    fn set(&self, items: &[&str]) -> BTreeSet<NormalizedPath> {
        items.iter().map(|p| NormalizedPath::new(self.rel(p))).collect()
    }

    /// Stage the tree for the index lister; the walk needs nothing.
    fn sync(&mut self) {
        if let Layout::Project = self.layout {
            self.project.stage_all();
        }
    }

    fn check(&mut self, ignore_case: bool) -> CheckResult {
        self.sync();
        let options = CheckOptions {
            ignore_case,
            ..Default::default()
        };
        Checker::new().check(self.project.root(), &options).unwrap()
    }

    fn fix(&self, result: &CheckResult, dry_run: bool) {
        let options = FixOptions {
            dry_run,
            root_dir: self.project.root().to_path_buf(),
            allowed_globs: vec![Glob::new("**").unwrap()],
            ignore_case: false,
        };
        let fixer = AutoFixer::new(Box::new(SequentialGuidGenerator::new(1)));
        let report = fixer.fix(result, &options).unwrap();
        assert!(report.failures.is_empty(), "failures: {:?}", report.failures);
    }
}

#[rstest]
fn test_missing_round_trip(#[values(Layout::Package, Layout::Project)] layout: Layout) {
    let mut scenario = Scenario::new(layout);
    scenario.asset("A.cs");
    scenario.asset("B.cs");
    scenario.meta("A.cs");

    let before = scenario.check(false);
    assert_eq!(before.missing_meta, scenario.set(&["B.cs"]));
    assert!(before.dangling_meta.is_empty());

    scenario.fix(&before, false);

    let after = scenario.check(false);
    assert!(after.missing_meta.is_empty());
    scenario.project.assert_file_exists(&scenario.rel("B.cs.meta"));
}

#[rstest]
fn test_removal_round_trip(#[values(Layout::Package, Layout::Project)] layout: Layout) {
    let mut scenario = Scenario::new(layout);
    scenario.asset("A.cs");
    scenario.meta("A.cs");
    scenario.meta("Stale.cs");

    let before = scenario.check(false);
    assert_eq!(before.dangling_meta, scenario.set(&["Stale.cs.meta"]));

    scenario.fix(&before, false);

    let after = scenario.check(false);
    assert!(after.dangling_meta.is_empty());
    scenario.project.assert_file_not_exists(&scenario.rel("Stale.cs.meta"));
}

#[rstest]
fn test_dry_run_changes_nothing(#[values(Layout::Package, Layout::Project)] layout: Layout) {
    let mut scenario = Scenario::new(layout);
    scenario.asset("A.cs");
    scenario.asset("B.cs");
    scenario.meta("A.cs");
    scenario.meta("Stale.cs");

    let before = scenario.check(false);
    scenario.fix(&before, true);
    let after = scenario.check(false);

    assert_eq!(before, after);
    scenario.project.assert_file_not_exists(&scenario.rel("B.cs.meta"));
    scenario.project.assert_file_exists(&scenario.rel("Stale.cs.meta"));
}

#[rstest]
fn test_case_insensitive_pairing(#[values(Layout::Package, Layout::Project)] layout: Layout) {
    let mut scenario = Scenario::new(layout);
    scenario.asset("Foo.cs");
    scenario.meta("foo.cs");

    assert!(scenario.check(true).is_empty());

    let exact = scenario.check(false);
    assert_eq!(exact.missing_meta, scenario.set(&["Foo.cs"]));
    assert_eq!(exact.dangling_meta, scenario.set(&["foo.cs.meta"]));
}

#[rstest]
fn test_glob_filtering(#[values(Layout::Package, Layout::Project)] layout: Layout) {
    let mut scenario = Scenario::new(layout);
    scenario.asset("Generated/A.cs");
    scenario.asset("Generated/Deep/B.cs");
    scenario.meta("Generated/Old.cs");
    scenario.asset("Scripts/C.cs");
    scenario.meta("Scripts");

    let result = scenario.check(false);
    let options = FilterOptions {
        ignored_globs: vec![Glob::new(&scenario.rel("Generated/**")).unwrap()],
        root_dir: scenario.project.root().to_path_buf(),
        ..Default::default()
    };
    let filtered = filter(&result, &options, Path::new(scenario.project.root()));

    assert_eq!(filtered.missing_meta, scenario.set(&["Generated", "Scripts/C.cs"]));
    assert!(filtered.dangling_meta.is_empty());
}
