// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use tempfile::TempDir;

use super::*;

fn init(path: &std::path::Path, force: bool, shebang: &str) -> CmdInit {
    CmdInit {
        path: path.to_path_buf(),
        force,
        shebang: shebang.to_string(),
    }
}

#[rstest]
fn test_generated_spec_loads() {
    let tmp = TempDir::new().unwrap();
    assert_eq!(init(tmp.path(), false, "#!/bin/bash").run().unwrap(), 0);

    let table = envwrap::WrapperTable::load(tmp.path().join(envwrap::ENVWRAP_FILENAME))
        .expect("Generated spec should load");
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["innermost", "timed"]);

    let timed = table.get("timed").unwrap();
    assert_eq!(timed.render("ls", "t").unwrap(), "#!/bin/bash\ntime ls\n");
}

#[rstest]
fn test_custom_shebang_is_quoted() {
    let tmp = TempDir::new().unwrap();
    init(tmp.path(), false, "#!/usr/bin/env -S bash \"-eu\"")
        .run()
        .unwrap();

    let table =
        envwrap::WrapperTable::load(tmp.path().join(envwrap::ENVWRAP_FILENAME)).unwrap();
    let innermost = table.get(envwrap::INNERMOST).unwrap();
    assert!(
        innermost
            .render("true", "s")
            .unwrap()
            .starts_with("#!/usr/bin/env -S bash \"-eu\"\n")
    );
}

#[rstest]
fn test_existing_file_requires_force() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(envwrap::ENVWRAP_FILENAME);
    std::fs::write(&path, "name: mine\n").unwrap();

    assert!(init(tmp.path(), false, "#!/bin/bash").run().is_err());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "name: mine\n");

    init(tmp.path(), true, "#!/bin/bash").run().unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().contains("name: timed"));
}
