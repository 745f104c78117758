// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

#[rstest]
fn test_sha256_hex() {
    assert_eq!(
        sha256_hex(""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[rstest]
fn test_stepname_is_name_plus_short_hash() {
    let step = stepname("docker", "");
    assert_eq!(step, "docker_e3b0c442");
    assert_eq!(stepname("docker", "echo hi"), stepname("docker", "echo hi"));
    assert_ne!(stepname("docker", "echo hi"), stepname("docker", "echo ho"));
}

#[rstest]
fn test_script_filename() {
    let name = script_filename("docker_e3b0c442", "", ".sh");
    assert_eq!(
        name,
        "docker_e3b0c442_e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855.sh"
    );
}

#[rstest]
fn test_materialize_writes_content_with_newline() {
    let tmp = TempDir::new().unwrap();
    let script = materialize(tmp.path(), "innermost", "innermost_1", "#!/bin/bash\ntrue", ".sh")
        .unwrap();

    assert!(script.path.is_absolute());
    assert_eq!(script.wrapper, "innermost");
    assert_eq!(script.stepname, "innermost_1");
    assert_eq!(
        std::fs::read_to_string(&script.path).unwrap(),
        "#!/bin/bash\ntrue\n"
    );
}

#[rstest]
fn test_materialize_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let first = materialize(tmp.path(), "w", "w_1", "body", ".sh").unwrap();
    let second = materialize(tmp.path(), "w", "w_1", "body", ".sh").unwrap();

    assert_eq!(first, second);
    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[rstest]
fn test_materialize_into_missing_dir_fails() {
    let tmp = TempDir::new().unwrap();
    let err = materialize(&tmp.path().join("missing"), "w", "w_1", "body", ".sh").unwrap_err();
    assert!(matches!(err, crate::Error::WriteFailed { .. }));
}
