//! Submodule removal sequencing tests
//!
//! Driven entirely through `MockSystem`: scripted git results exercise the
//! tolerance policy (which steps warn and continue, which abort) without
//! touching a real repository.

use std::path::Path;
use xgit::error::XgitError;
use xgit::operations::submodule::SubmoduleRemover;
use xgit::system::{CommandOutput, MockSystem, System as _};

const STATUS_LINE: &str = " 4a5b6c7d8e9f vendor/lib (heads/main)\n";

/// A repository where vendor/lib is registered, indexed and materialized
fn healthy_repo() -> MockSystem {
    MockSystem::new()
        .with_current_dir("/repo")
        .with_file("/repo/.gitmodules", b"[submodule \"vendor/lib\"]\n")
        .with_dir("/repo/vendor/lib")
        .with_dir("/repo/.git/modules/vendor/lib")
        .on_git(&["rev-parse", "--is-inside-work-tree"], CommandOutput::ok("true\n"))
        .on_git(
            &["submodule", "status", "--", "vendor/lib"],
            CommandOutput::ok(STATUS_LINE),
        )
        .on_git(
            &["config", "-f", ".gitmodules", "--remove-section", "submodule.vendor/lib"],
            CommandOutput::ok(""),
        )
        .on_git(
            &["config", "--remove-section", "submodule.vendor/lib"],
            CommandOutput::ok(""),
        )
        .on_git(&["rm", "--cached", "vendor/lib"], CommandOutput::ok("rm 'vendor/lib'\n"))
        .on_git(&["add", ".gitmodules"], CommandOutput::ok(""))
}

#[test]
fn full_removal_clears_all_facets() {
    let system = healthy_repo();
    let remover = SubmoduleRemover::new(&system).unwrap();

    remover.remove("vendor/lib").unwrap();

    // Config sections, index entry, working tree and leftover metadata
    assert!(system.invoked_with(&["config", "-f", ".gitmodules", "--remove-section"]));
    assert!(system.invoked_with(&["config", "--remove-section", "submodule.vendor/lib"]));
    assert!(system.invoked_with(&["rm", "--cached", "vendor/lib"]));
    assert!(!system.exists(Path::new("/repo/vendor/lib")));
    assert!(!system.exists(Path::new("/repo/.git/modules/vendor/lib")));
    assert!(system.invoked_with(&["add", ".gitmodules"]));
}

#[test]
fn unregistered_path_aborts_before_any_mutation() {
    let system = MockSystem::new()
        .with_current_dir("/repo")
        .with_dir("/repo/vendor/typo")
        .on_git(&["rev-parse", "--is-inside-work-tree"], CommandOutput::ok("true\n"))
        .on_git(
            &["submodule", "status", "--", "vendor/typo"],
            CommandOutput::failed(1, "error: pathspec 'vendor/typo' did not match\n"),
        );
    let remover = SubmoduleRemover::new(&system).unwrap();

    let err = remover.remove("vendor/typo").unwrap_err();
    let xgit_err = err.downcast_ref::<XgitError>().unwrap();
    assert_eq!(xgit_err.exit_code(), 2);
    assert!(err.to_string().contains("not a registered submodule"));

    // Nothing destructive ran and the directory is untouched
    assert!(!system.invoked_with(&["config"]));
    assert!(!system.invoked_with(&["rm"]));
    assert!(system.exists(Path::new("/repo/vendor/typo")));
}

#[test]
fn plain_file_at_path_is_not_a_submodule() {
    // `git submodule status -- <path>` exits zero but prints nothing when the
    // path is tracked as a regular file
    let system = MockSystem::new()
        .with_current_dir("/repo")
        .on_git(&["rev-parse", "--is-inside-work-tree"], CommandOutput::ok("true\n"))
        .on_git(&["submodule", "status", "--", "src/main.rs"], CommandOutput::ok(""));
    let remover = SubmoduleRemover::new(&system).unwrap();

    let err = remover.remove("src/main.rs").unwrap_err();
    assert!(err.to_string().contains("not a registered submodule"));
}

#[test]
fn outside_work_tree_is_fatal() {
    let system = MockSystem::new()
        .with_current_dir("/somewhere")
        .on_git(
            &["rev-parse", "--is-inside-work-tree"],
            CommandOutput::failed(128, "fatal: not a git repository\n"),
        );
    let remover = SubmoduleRemover::new(&system).unwrap();

    let err = remover.remove("vendor/lib").unwrap_err();
    let xgit_err = err.downcast_ref::<XgitError>().unwrap();
    assert_eq!(xgit_err.exit_code(), 2);
    assert_eq!(system.invocations().len(), 1);
}

#[test]
fn missing_gitmodules_is_tolerated() {
    // No .gitmodules file: that step and the final staging are skipped, the
    // rest of the sequence still runs
    let system = MockSystem::new()
        .with_current_dir("/repo")
        .with_dir("/repo/vendor/lib")
        .on_git(&["rev-parse", "--is-inside-work-tree"], CommandOutput::ok("true\n"))
        .on_git(
            &["submodule", "status", "--", "vendor/lib"],
            CommandOutput::ok(STATUS_LINE),
        )
        .on_git(
            &["config", "--remove-section", "submodule.vendor/lib"],
            CommandOutput::ok(""),
        )
        .on_git(&["rm", "--cached", "vendor/lib"], CommandOutput::ok(""));
    let remover = SubmoduleRemover::new(&system).unwrap();

    remover.remove("vendor/lib").unwrap();

    assert!(!system.invoked_with(&["config", "-f"]));
    assert!(!system.invoked_with(&["add", ".gitmodules"]));
    assert!(!system.exists(Path::new("/repo/vendor/lib")));
}

#[test]
fn failed_config_section_removal_is_tolerated() {
    let system = MockSystem::new()
        .with_current_dir("/repo")
        .with_file("/repo/.gitmodules", b"[submodule \"vendor/lib\"]\n")
        .with_dir("/repo/vendor/lib")
        .on_git(&["rev-parse", "--is-inside-work-tree"], CommandOutput::ok("true\n"))
        .on_git(
            &["submodule", "status", "--", "vendor/lib"],
            CommandOutput::ok(STATUS_LINE),
        )
        .on_git(
            &["config", "-f", ".gitmodules", "--remove-section", "submodule.vendor/lib"],
            CommandOutput::ok(""),
        )
        .on_git(
            &["config", "--remove-section", "submodule.vendor/lib"],
            CommandOutput::failed(128, "fatal: no such section: submodule.vendor/lib\n"),
        )
        .on_git(&["rm", "--cached", "vendor/lib"], CommandOutput::ok(""))
        .on_git(&["add", ".gitmodules"], CommandOutput::ok(""));

    let remover = SubmoduleRemover::new(&system).unwrap();
    remover.remove("vendor/lib").unwrap();

    // The half-registered state was repaired anyway
    assert!(system.invoked_with(&["rm", "--cached", "vendor/lib"]));
    assert!(!system.exists(Path::new("/repo/vendor/lib")));
}

#[test]
fn failed_index_removal_aborts_without_touching_work_tree() {
    let system = MockSystem::new()
        .with_current_dir("/repo")
        .with_file("/repo/.gitmodules", b"[submodule \"vendor/lib\"]\n")
        .with_dir("/repo/vendor/lib")
        .on_git(&["rev-parse", "--is-inside-work-tree"], CommandOutput::ok("true\n"))
        .on_git(
            &["submodule", "status", "--", "vendor/lib"],
            CommandOutput::ok(STATUS_LINE),
        )
        .on_git(
            &["config", "-f", ".gitmodules", "--remove-section", "submodule.vendor/lib"],
            CommandOutput::ok(""),
        )
        .on_git(
            &["config", "--remove-section", "submodule.vendor/lib"],
            CommandOutput::ok(""),
        )
        .on_git(
            &["rm", "--cached", "vendor/lib"],
            CommandOutput::failed(128, "fatal: index lock held\n"),
        );
    let remover = SubmoduleRemover::new(&system).unwrap();

    let err = remover.remove("vendor/lib").unwrap_err();
    let xgit_err = err.downcast_ref::<XgitError>().unwrap();
    assert_eq!(xgit_err.exit_code(), 4);
    assert!(err.to_string().contains("index lock held"));

    // No rollback of the config edits, but nothing past the failure ran
    assert!(system.exists(Path::new("/repo/vendor/lib")));
    assert!(!system.invoked_with(&["add", ".gitmodules"]));
}

#[test]
fn list_mode_only_reads() {
    let system = MockSystem::new()
        .with_current_dir("/repo")
        .on_git(&["rev-parse", "--is-inside-work-tree"], CommandOutput::ok("true\n"))
        .on_git(&["submodule", "status"], CommandOutput::ok(STATUS_LINE));
    let remover = SubmoduleRemover::new(&system).unwrap();

    remover.list().unwrap();

    let invocations = system.invocations();
    assert_eq!(invocations.len(), 2);
    assert_eq!(invocations[1].args, vec!["submodule", "status"]);
}

#[test]
fn list_mode_outside_work_tree_reports_not_a_repo() {
    let system = MockSystem::new()
        .with_current_dir("/somewhere")
        .on_git(
            &["rev-parse", "--is-inside-work-tree"],
            CommandOutput::failed(128, "fatal: not a git repository\n"),
        );
    let remover = SubmoduleRemover::new(&system).unwrap();

    let err = remover.list().unwrap_err();
    assert!(err.to_string().contains("Not a git repository"));
}
