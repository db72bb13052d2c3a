//! End-to-end tests over a fake framework checkout on disk.

use std::fs;
use std::path::Path;

use picobuild::env::BuildEnv;
use picobuild::module::register_all;
use picobuild::sources;

/// Lay out a minimal framework tree with the directories the catalog expects.
fn create_mock_framework(root: &Path) {
    let dirs = [
        "sdk/lib/at_tok",
        "library/dap",
        "library/wiring/include",
        "library/wiring/src",
        "library/VFS",
        "library/hal_tft",
    ];
    for dir in dirs {
        fs::create_dir_all(root.join(dir)).unwrap();
    }

    fs::write(root.join("sdk/lib/at_tok/at_tok.c"), "").unwrap();
    fs::write(root.join("sdk/lib/at_tok/at_tok.h"), "").unwrap();
    fs::write(root.join("library/dap/DAP_RUN.c"), "").unwrap();
    fs::write(root.join("library/wiring/src/wiring_digital.c"), "").unwrap();
    fs::write(root.join("library/wiring/src/Wire.cpp"), "").unwrap();
    fs::write(root.join("library/wiring/include/Wire.h"), "").unwrap();
    fs::write(root.join("library/VFS/VFS.c"), "").unwrap();
    fs::write(root.join("library/VFS/VFS.h"), "").unwrap();
    fs::write(root.join("library/hal_tft/hal_tft.c"), "").unwrap();
}

#[test]
fn registered_groups_resolve_to_real_units() {
    let root = tempfile::tempdir().unwrap();
    create_mock_framework(root.path());

    let mut env = BuildEnv::new(root.path(), "sdk");
    register_all(&mut env).unwrap();

    for group in &env.source_groups {
        let units = sources::collect_units(&group.dir).unwrap();
        assert!(
            !units.is_empty(),
            "group {} found no units under {}",
            group.target,
            group.dir.display()
        );
    }

    // Headers never count as units.
    let at_tok = &env.source_groups[0];
    let units = sources::collect_units(&at_tok.dir).unwrap();
    assert_eq!(units, vec![root.path().join("sdk/lib/at_tok/at_tok.c")]);
}

#[test]
fn every_include_path_exists_in_mock_framework() {
    let root = tempfile::tempdir().unwrap();
    create_mock_framework(root.path());

    let mut env = BuildEnv::new(root.path(), "sdk");
    register_all(&mut env).unwrap();

    for dir in &env.cpp_path {
        assert!(dir.is_dir(), "include path {} missing", dir.display());
    }
}

#[test]
fn registration_succeeds_on_missing_tree_and_discovery_fails_later() {
    // The registrar performs no existence checks; the error surfaces when
    // the framework walks the registered directory.
    let root = tempfile::tempdir().unwrap();

    let mut env = BuildEnv::new(root.path(), "sdk");
    register_all(&mut env).unwrap();

    assert_eq!(env.source_groups.len(), 5);
    assert!(sources::collect_units(&env.source_groups[0].dir).is_err());
}
