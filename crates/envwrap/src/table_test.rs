// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

#[rstest]
fn test_parse_multi_document_spec() {
    let yaml = r##"
name: innermost
header: "#!/bin/sh"
---
name: docker
header: "#!/bin/bash"
prefix: "docker run --rm -i ubuntu bash <<'EOF'\n"
suffix: "\nEOF"
---
name: ssh
executor: "ssh host bash < {script}"
file_suffix: .bash
"##;
    let table = WrapperTable::from_yaml(yaml).expect("Should parse spec");
    assert_eq!(table.len(), 3);
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["innermost", "docker", "ssh"]);

    let ssh = table.get("ssh").unwrap();
    assert_eq!(ssh.file_suffix(), ".bash");
    assert_eq!(
        ssh.executor_command("/x.bash", "ssh_1").unwrap(),
        "ssh host bash < /x.bash"
    );
    assert!(table.source_path.is_none());
}

#[rstest]
fn test_empty_spec_and_empty_documents() {
    assert!(WrapperTable::from_yaml("").unwrap().is_empty());

    let table = WrapperTable::from_yaml("name: a\n---\n---\nname: b\n").unwrap();
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[rstest]
fn test_unknown_field_rejected() {
    let err = WrapperTable::from_yaml("name: a\nheadr: '#!/bin/sh'\n").unwrap_err();
    assert!(matches!(err, crate::Error::InvalidYaml { .. }));
}

#[rstest]
fn test_missing_name_rejected() {
    let err = WrapperTable::from_yaml("header: '#!/bin/sh'\n").unwrap_err();
    assert!(matches!(err, crate::Error::InvalidYaml { .. }));
}

#[rstest]
fn test_invalid_yaml_rejected() {
    let err = WrapperTable::from_yaml("name: [unclosed\n").unwrap_err();
    assert!(matches!(err, crate::Error::InvalidYaml { .. }));
}

#[rstest]
fn test_duplicate_name_rejected() {
    let err = WrapperTable::from_yaml("name: a\n---\nname: a\n").unwrap_err();
    assert!(matches!(err, crate::Error::DuplicateWrapper(ref n) if n == "a"));
}

#[rstest]
fn test_bad_placeholder_rejected_at_load() {
    let err = WrapperTable::from_yaml("name: a\nheader: 'echo {script}'\n").unwrap_err();
    assert!(matches!(err, crate::Error::InvalidTemplate { field: "header", .. }));
}

#[rstest]
fn test_ensure_innermost_adds_default() {
    let mut table = WrapperTable::from_yaml("name: docker\n").unwrap();
    assert!(!table.contains(INNERMOST));

    table.ensure_innermost().unwrap();
    assert!(table.is_implicit(INNERMOST));
    assert!(!table.is_implicit("docker"));
    let innermost = table.get(INNERMOST).unwrap();
    assert_eq!(innermost.render("true", "s").unwrap(), "#!/bin/bash\ntrue\n");
}

#[rstest]
fn test_ensure_innermost_keeps_user_definition() {
    let table = WrapperTable::from_yaml("name: innermost\nheader: '#!/bin/zsh'\n")
        .unwrap()
        .with_innermost()
        .unwrap();
    assert_eq!(table.len(), 1);
    assert!(!table.is_implicit(INNERMOST));
    let innermost = table.get(INNERMOST).unwrap();
    assert!(innermost.render("true", "s").unwrap().starts_with("#!/bin/zsh"));
}

#[rstest]
fn test_resolve_unknown_lists_available() {
    let table = WrapperTable::from_yaml("name: docker\n---\nname: ssh\n").unwrap();
    match table.resolve("dokker").unwrap_err() {
        crate::Error::UnknownWrapper { name, available } => {
            assert_eq!(name, "dokker");
            assert_eq!(available, vec!["docker", "ssh"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
fn test_load_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("wrappers.yaml");
    std::fs::write(&path, "name: docker\n").unwrap();

    let table = WrapperTable::load(&path).unwrap();
    assert!(table.contains("docker"));
    assert_eq!(table.source_path.as_deref(), Some(path.as_path()));
}

#[rstest]
fn test_load_missing_file() {
    let tmp = TempDir::new().unwrap();
    let err = WrapperTable::load(tmp.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, crate::Error::ReadFailed { .. }));
}
