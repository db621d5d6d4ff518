//! Tests for the read-dispatch-print loop.

use contacts_cli::app::{Session, SessionEnd, SessionOptions};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn run(script: &str) -> (SessionEnd, String) {
    let mut session = Session::new(SessionOptions::default());
    let mut output = Vec::new();
    let end = session
        .run(&mut Cursor::new(script.as_bytes()), &mut output)
        .unwrap();
    (end, String::from_utf8(output).unwrap())
}

#[test]
fn test_full_transcript() {
    let (end, out) = run("hello\n\
         add Mike 111\n\
         add Mike 222\n\
         add Ann 555\n\
         change Ann 555 999\n\
         show all\n\
         phone Nobody\n\
         good bye\n");

    assert_eq!(end, SessionEnd::Terminated);
    assert_eq!(
        out,
        ">>>How can I help you?\n\
         >>>Contact Mike: 111 add success\n\
         >>>phone 222 add to contact Mike\n\
         >>>Contact Ann: 555 add success\n\
         >>>old phone 555 change to 999\n\
         >>>Mike: 111, 222\nAnn: 999\n\
         >>>Contact 'Nobody' not found.\n\
         >>>Good bye!\n"
    );
}

#[test]
fn test_no_input_read_after_exit() {
    let mut session = Session::default();
    let mut input = Cursor::new("exit\nadd Late 1\n".as_bytes());
    let mut output = Vec::new();

    let end = session.run(&mut input, &mut output).unwrap();

    assert_eq!(end, SessionEnd::Terminated);
    assert_eq!(input.position(), "exit\n".len() as u64);
    assert!(session.book().is_empty());
}

#[test]
fn test_empty_input_closes_session() {
    let (end, out) = run("");
    assert_eq!(end, SessionEnd::InputClosed);
    assert_eq!(out, ">>>\n");
}
