// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
fn test_no_directives() {
    let d = parse_directives("echo hi");
    assert!(d.names.is_empty());
    assert_eq!(d.body, "echo hi");
}

#[rstest]
fn test_stacked_directives() {
    let d = parse_directives("#WRAP(docker)#WRAP(ssh)echo hi");
    assert_eq!(d.names, vec!["docker", "ssh"]);
    assert_eq!(d.body, "echo hi");
}

#[rstest]
fn test_directives_on_separate_lines() {
    let d = parse_directives("  #WRAP(docker)\n\t#WRAP(ssh)\necho hi\n");
    assert_eq!(d.names, vec!["docker", "ssh"]);
    assert_eq!(d.body, "\necho hi\n");
}

#[rstest]
fn test_trailing_text_on_directive_line_is_kept() {
    let d = parse_directives("#WRAP(docker) # run in a container\necho hi");
    assert_eq!(d.names, vec!["docker"]);
    assert_eq!(d.body, " # run in a container\necho hi");
}

#[rstest]
fn test_repeated_names_are_kept() {
    let d = parse_directives("#WRAP(a)#WRAP(a)x");
    assert_eq!(d.names, vec!["a", "a"]);
}

#[rstest]
#[case::missing_paren("#WRAP(docker echo hi")]
#[case::lowercase("#wrap(docker)echo hi")]
#[case::dashed_name("#WRAP(my-wrapper)echo hi")]
#[case::empty_name("#WRAP()echo hi")]
#[case::not_at_start("echo #WRAP(docker)")]
fn test_malformed_directives_are_code(#[case] code: &str) {
    let d = parse_directives(code);
    assert!(d.names.is_empty());
    assert_eq!(d.body, code);
}

#[rstest]
fn test_parsing_stops_at_first_non_directive() {
    let d = parse_directives("#WRAP(a)echo\n#WRAP(b)");
    assert_eq!(d.names, vec!["a"]);
    assert_eq!(d.body, "echo\n#WRAP(b)");
}

#[rstest]
#[case("docker", true)]
#[case("Step_2", true)]
#[case("my-wrapper", false)]
#[case("", false)]
fn test_is_valid_name(#[case] name: &str, #[case] valid: bool) {
    assert_eq!(is_valid_name(name), valid);
}
