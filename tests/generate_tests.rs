//! Generate command integration tests using the real depfold binary

mod common;

use common::{TWO_PACKAGE_RECIPE, TestProject};
use predicates::prelude::*;

#[test]
fn test_generate_merges_two_packages() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/a.h", "lib/liba.a"]);
    project.create_package("B", &["include/sub/b.hpp", "lib/libb.so"]);

    project
        .depfold()
        .args(["generate", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated slang-common/1.0"))
        .stdout(predicate::str::contains("2 dependencies, 4 files"));

    assert_eq!(
        project.files_under("generators"),
        vec![
            "include/a.h",
            "include/sub/b.hpp",
            "lib/liba.a",
            "lib/libb.so"
        ]
    );
    assert_eq!(project.read_file("generators/lib/libb.so"), "B:lib/libb.so");
}

#[test]
fn test_generate_debug_only_package() {
    let project = TestProject::new();
    project.write_recipe(
        "name: dbg\nversion: '1'\nrequires:\n  - name: X\n    path: deps/X\n",
    );
    project.create_package("X", &["debug/include/x.h"]);

    project
        .depfold()
        .args(["generate", "--no-progress"])
        .assert()
        .success();

    assert!(project.file_exists("generators/debug/include/x.h"));
    assert!(!project.file_exists("generators/include/x.h"));
}

#[test]
fn test_generate_every_artifact_kind() {
    let project = TestProject::new();
    project.write_recipe(
        "name: all\nversion: '1'\nrequires:\n  - name: zlib\n    path: deps/zlib\n",
    );
    project.create_package(
        "zlib",
        &[
            "include/zlib.h",
            "include/zconf.h.in",
            "lib/zlib.lib",
            "lib/libz.dylib",
            "lib/pkgconfig/zlib.pc",
            "bin/zlib1.dll",
            "bin/minigzip.exe",
            "debug/lib/zlibd.lib",
            "debug/bin/zlibd1.dll",
            "share/doc/README",
        ],
    );

    project
        .depfold()
        .args(["generate", "--no-progress"])
        .assert()
        .success();

    assert_eq!(
        project.files_under("generators"),
        vec![
            "bin/zlib1.dll",
            "debug/bin/zlibd1.dll",
            "debug/lib/zlibd.lib",
            "include/zlib.h",
            "lib/libz.dylib",
            "lib/zlib.lib",
        ]
    );
}

#[test]
fn test_generate_twice_is_identical() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/a.h", "lib/liba.a", "debug/lib/liba.a"]);
    project.create_package("B", &["include/sub/b.hpp", "bin/b.dll"]);

    project.depfold().args(["generate", "--no-progress"]).assert().success();
    let first = project.snapshot("generators");

    project.depfold().args(["generate", "--no-progress"]).assert().success();
    let second = project.snapshot("generators");

    assert_eq!(first, second);
}

#[test]
fn test_generate_removes_stale_output() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/a.h"]);
    project.create_package("B", &["lib/libb.a"]);
    project.write_file("generators/lib/libgone.a", "stale");
    project.write_file("generators/debug/include/gone.h", "stale");

    project.depfold().args(["generate", "--no-progress"]).assert().success();

    assert!(!project.file_exists("generators/lib/libgone.a"));
    assert!(!project.file_exists("generators/debug"));
    assert!(project.file_exists("generators/lib/libb.a"));
}

#[test]
fn test_generate_package_without_lib_directory() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/a.h"]);
    project.create_package("B", &["lib/libb.a"]);

    project.depfold().args(["generate", "--no-progress"]).assert().success();

    assert_eq!(project.files_under("generators/lib"), vec!["libb.a"]);
}

#[test]
fn test_generate_missing_package_folder_contributes_nothing() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/a.h"]);

    project
        .depfold()
        .args(["generate", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 dependencies, 1 file"));

    assert!(project.file_exists("generators/lib"));
    assert!(project.file_exists("generators/include/a.h"));
}

#[test]
fn test_generate_flattened_collision_keeps_last() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["lib/libcommon.a"]);
    project.create_package("B", &["lib/libcommon.a"]);

    project
        .depfold()
        .args(["generate", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 file replaced"));

    assert_eq!(
        project.read_file("generators/lib/libcommon.a"),
        "B:lib/libcommon.a"
    );
}

#[test]
fn test_generate_output_flag() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/a.h"]);
    project.create_package("B", &["lib/libb.a"]);

    project
        .depfold()
        .args(["generate", "--no-progress", "-o", "build/deps"])
        .assert()
        .success();

    assert!(project.file_exists("build/deps/include/a.h"));
    assert!(!project.file_exists("generators"));
}

#[test]
fn test_generate_output_from_env() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/a.h"]);
    project.create_package("B", &[]);

    project
        .depfold()
        .env("DEPFOLD_OUTPUT", "from-env")
        .args(["generate", "--no-progress"])
        .assert()
        .success();

    assert!(project.file_exists("from-env/include/a.h"));
}

#[test]
fn test_generate_output_from_recipe_is_relative_to_recipe() {
    let project = TestProject::new();
    project.write_file(
        "pkg/depfold.yaml",
        "name: x\nversion: '1'\noutput: out\nrequires:\n  - name: A\n    path: ../deps/A\n",
    );
    project.create_package("A", &["include/a.h"]);

    project
        .depfold()
        .args(["-r", "pkg/depfold.yaml", "generate", "--no-progress"])
        .assert()
        .success();

    assert!(project.file_exists("pkg/out/include/a.h"));
}

#[test]
fn test_generate_dep_override_replaces_folder() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/a.h"]);
    project.create_package("B", &["lib/libb.a"]);
    project.write_file("elsewhere/B/lib/libother.a", "other");

    project
        .depfold()
        .args(["generate", "--no-progress", "--dep", "B=elsewhere/B"])
        .assert()
        .success();

    assert_eq!(project.files_under("generators/lib"), vec!["libother.a"]);
}

#[test]
fn test_generate_dep_override_supplies_missing_path() {
    let project = TestProject::new();
    project.write_recipe("name: x\nversion: '1'\nrequires:\n  - boost/1.87.0\n");
    project.write_file("opt/boost/include/boost/version.hpp", "v");

    project
        .depfold()
        .args(["generate", "--no-progress", "--dep", "boost=opt/boost"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 dependency, 1 file"));

    assert!(project.file_exists("generators/include/boost/version.hpp"));
}

#[test]
fn test_generate_dep_override_adds_package() {
    let project = TestProject::new();
    project.write_recipe("name: x\nversion: '1'\n");
    project.write_file("fmt/include/fmt/core.h", "fmt");

    project
        .depfold()
        .args(["generate", "--no-progress", "--dep", "fmt/10.2=fmt"])
        .assert()
        .success();

    assert!(project.file_exists("generators/include/fmt/core.h"));
}

#[test]
fn test_generate_quiet_prints_nothing() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/a.h"]);
    project.create_package("B", &[]);

    project
        .depfold()
        .args(["-q", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert!(project.file_exists("generators/include/a.h"));
}

#[test]
fn test_generate_verbose_logs_dependencies() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/a.h"]);
    project.create_package("B", &[]);

    project
        .depfold()
        .args(["-v", "generate", "--no-progress"])
        .assert()
        .success()
        .stderr(predicate::str::contains("folded dependency"))
        .stderr(predicate::str::contains("A/1.0"));
}

#[test]
fn test_generate_uppercase_extensions() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["include/Win.H", "lib/ZLIB.LIB", "bin/ZLIB1.DLL"]);
    project.create_package("B", &[]);

    project
        .depfold()
        .args(["generate", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 dependencies, 3 files"));

    assert!(project.file_exists("generators/include/Win.H"));
    assert!(project.file_exists("generators/lib/ZLIB.LIB"));
    assert!(project.file_exists("generators/bin/ZLIB1.DLL"));
}

#[test]
fn test_generate_same_name_within_one_package() {
    let project = TestProject::new();
    project.write_recipe(TWO_PACKAGE_RECIPE);
    project.create_package("A", &["lib/x64/libz.a", "lib/x86/libz.a"]);
    project.create_package("B", &[]);

    project
        .depfold()
        .args(["generate", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("later dependency").not())
        .stdout(predicate::str::contains("1 file replaced by a same-named file of the same dependency"));
}
