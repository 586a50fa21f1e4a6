use std::io::Write;

fn run(args: &[&str]) -> (i32, String, String) {
    let mut argv = vec!["bjsim"];
    argv.extend_from_slice(args);
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = bjsim_cli::run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn complete_table() -> String {
    let mut body = String::from("[pairs]\n");
    for key in 2..=11 {
        body.push_str(&format!("{key} = {{ 2 = \"split\", 8 = \"hit\" }}\n"));
    }
    body.push_str("[ace]\n");
    for key in 2..=11 {
        body.push_str(&format!("{key} = \"stand\"\n"));
    }
    body.push_str("[other]\n");
    for key in 4..=21 {
        let action = if key < 17 { "hit" } else { "stand" };
        body.push_str(&format!("{key} = \"{action}\"\n"));
    }
    body
}

#[test]
fn builtin_tables_are_reported_complete() {
    for strategy in ["basic", "basic-alt"] {
        let (code, out, err) = run(&["table", "--strategy", strategy]);
        assert_eq!(code, 0, "stderr={err}");
        assert!(out.contains(&format!("Table: {strategy} (built-in)")));
        assert!(out.contains("pairs: 10 entries"));
        assert!(out.contains("ace: 10 entries"));
        assert!(out.contains("other: 18 entries"));
        assert!(out.contains("Complete: yes"));
    }
}

#[test]
fn default_is_the_basic_table() {
    let (code, out, _) = run(&["table"]);
    assert_eq!(code, 0);
    assert!(out.contains("Table: basic (built-in)"));
}

#[test]
fn custom_table_is_checked() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(complete_table().as_bytes()).unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let (code, out, err) = run(&["table", "--table", &path]);
    assert_eq!(code, 0, "stderr={err}");
    assert!(out.contains(&format!("Table: {path}")));
    assert!(out.contains("Complete: yes"));
}

#[test]
fn incomplete_table_names_the_gap() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    // ladder starts at 3, so dealer 2 has no entry
    let body = complete_table().replace("\n4 = \"hit\"\n", "\n4 = { 3 = \"hit\" }\n");
    file.write_all(body.as_bytes()).unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let (code, out, err) = run(&["table", "--table", &path]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("Incomplete strategy table"), "stderr={err}");
    assert!(err.contains("No other table entry for key 4 against dealer 2"), "stderr={err}");
}

#[test]
fn unusable_requests_fail() {
    let (code, _, err) = run(&["table", "--strategy", "simple"]);
    assert_eq!(code, 2);
    assert!(err.contains("does not use a table"));

    let (code, _, err) = run(&["table", "--strategy", "counting"]);
    assert_eq!(code, 2);
    assert!(err.contains("unknown strategy: counting"), "stderr={err}");

    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"[pairs]\nten = \"stand\"\n").unwrap();
    let path = file.path().to_string_lossy().into_owned();
    let (code, _, err) = run(&["table", "--table", &path]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid key"), "stderr={err}");
}

#[test]
fn split_outside_pairs_is_not_reported_complete() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    let body = complete_table().replace("\n16 = \"hit\"\n", "\n16 = { 2 = \"hit\", 7 = \"split\" }\n");
    file.write_all(body.as_bytes()).unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let (code, out, err) = run(&["table", "--table", &path]);
    assert_eq!(code, 2);
    assert!(!out.contains("Complete: yes"));
    assert!(err.contains("Split is not allowed in the other table (key 16)"), "stderr={err}");
}
