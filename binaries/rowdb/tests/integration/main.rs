use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rowdb"))
        .args(args)
        .env_remove("ROWDB_MAX_PAGES")
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // the process may exit before reading everything
    let _ = child.stdin.take().unwrap().write_all(input.as_bytes());

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn insert_and_query() {
    let output = run(
        &[],
        "insert 1 alice alice@example.com\n\
         select\n\
         .exit\n",
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "db> Executed.\n\
         db> (1, alice, alice@example.com)\n\
         Executed.\n\
         db> "
    );
}

#[test]
fn errors_do_not_end_the_session() {
    let output = run(
        &[],
        "insert foo bar baz\n\
         hello\n\
         .help\n\
         .exit\n",
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "db> Syntax error. Could not parse statement.\n\
         db> Unrecognized keyword at start of 'hello'.\n\
         db> Unrecognized command '.help'\n\
         db> "
    );
}

#[test]
fn closed_input_exits_with_failure() {
    let output = run(&[], "select\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).ends_with("Error reading input\n"));
}

#[test]
fn table_capacity_from_the_command_line() {
    let mut input = String::new();
    for id in 0..15 {
        input.push_str(&format!("insert {} u{} u{}@example.com\n", id, id, id));
    }
    input.push_str(".exit\n");

    let output = run(&["--max-pages", "1"], &input);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).ends_with("db> Error: Table full.\ndb> "));
}

#[test]
fn invalid_page_count() {
    let output = run(&["-p", "0"], ".exit\n");

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid page count `0`"));
}
