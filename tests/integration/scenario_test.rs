//! End-to-end command scenarios against a single session.

use contacts_cli::app::{InputResult, Session};

fn reply(session: &mut Session, line: &str) -> String {
    session.handle_input(line).unwrap().text().to_string()
}

#[test]
fn test_readd_lists_both_numbers_in_order() {
    let mut session = Session::default();
    reply(&mut session, "add Mike 111");
    reply(&mut session, "add Mike 222");

    assert_eq!(
        reply(&mut session, "phone Mike"),
        "The phone number(s) for 'Mike' is/are: 111, 222."
    );
}

#[test]
fn test_change_then_lookup_shows_only_new_number() {
    let mut session = Session::default();
    reply(&mut session, "add Ann 555");
    assert_eq!(
        reply(&mut session, "change Ann 555 999"),
        "old phone 555 change to 999"
    );

    assert_eq!(
        reply(&mut session, "phone Ann"),
        "The phone number(s) for 'Ann' is/are: 999."
    );
}

#[test]
fn test_duplicate_phone_second_message_differs() {
    let mut session = Session::default();
    let first = reply(&mut session, "add Bob 42");
    let second = reply(&mut session, "add Bob 42");

    assert_eq!(first, "Contact Bob: 42 add success");
    assert_eq!(second, "42 present in phones of contact Bob");
    assert_eq!(session.book().get("Bob").unwrap().phones().len(), 1);
}

#[test]
fn test_change_on_missing_contact() {
    let mut session = Session::default();
    assert_eq!(
        reply(&mut session, "change Ghost 1 2"),
        "No contact Ghost in address book"
    );
    assert!(session.book().is_empty());
}

#[test]
fn test_change_with_absent_old_phone_leaves_phones() {
    let mut session = Session::default();
    reply(&mut session, "add Ann 555");

    assert_eq!(
        reply(&mut session, "change Ann 000 999"),
        "000 not present in phones of contact Ann"
    );
    assert_eq!(session.book().get("Ann").unwrap().phones_display(), "555");
}

#[test]
fn test_uppercase_keyword_dispatches_identically() {
    let mut upper = Session::default();
    let mut lower = Session::default();

    assert_eq!(
        reply(&mut upper, "ADD John 12345"),
        "Contact John: 12345 add success"
    );
    assert_eq!(
        reply(&mut lower, "add John 12345"),
        "Contact John: 12345 add success"
    );
    assert_eq!(upper.book().to_string(), lower.book().to_string());
}

#[test]
fn test_unknown_input_is_rejected_without_mutation() {
    let mut session = Session::default();
    reply(&mut session, "add Ann 1");

    assert_eq!(
        reply(&mut session, "frobnicate"),
        "Invalid command. Please try again."
    );
    assert_eq!(session.book().to_string(), "Ann: 1");
}

#[test]
fn test_missing_arguments_are_replies_not_failures() {
    let mut session = Session::default();

    for line in ["add", "add Solo", "change Ann", "change Ann 1", "phone"] {
        let result = session.handle_input(line).unwrap();
        assert!(
            result.text().starts_with("Missing argument"),
            "{line}: {}",
            result.text()
        );
    }
    assert!(session.book().is_empty());
}

#[test]
fn test_phone_for_unknown_contact() {
    let mut session = Session::default();
    assert_eq!(
        reply(&mut session, "phone Nobody"),
        "Contact 'Nobody' not found."
    );
}

#[test]
fn test_every_exit_keyword_ends_session() {
    for line in ["good bye", "close", "exit", "CLOSE"] {
        let mut session = Session::default();
        assert_eq!(
            session.handle_input(line).unwrap(),
            InputResult::Exit("Good bye!".to_string())
        );
    }
}

#[test]
fn test_show_all_lists_contacts_in_insertion_order() {
    let mut session = Session::default();
    assert_eq!(reply(&mut session, "show all"), "");

    reply(&mut session, "add Zed 9");
    reply(&mut session, "add Amy 1");
    reply(&mut session, "add Zed 8");

    assert_eq!(reply(&mut session, "show all"), "Zed: 9, 8\nAmy: 1");
}

#[test]
fn test_change_cannot_duplicate_a_phone() {
    let mut session = Session::default();
    reply(&mut session, "add Ann 1");
    reply(&mut session, "add Ann 2");

    assert_eq!(
        reply(&mut session, "change Ann 1 2"),
        "2 present in phones of contact Ann"
    );
    assert_eq!(session.book().get("Ann").unwrap().phones_display(), "1, 2");
}
