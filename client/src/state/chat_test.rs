use super::*;

fn reply(text: &str, sources: Option<&[&str]>) -> ChatReply {
    ChatReply {
        response: text.to_owned(),
        sources: sources.map(|s| s.iter().map(|u| (*u).to_owned()).collect()),
    }
}

fn failed() -> SendError {
    SendError::SendFailed("connection refused".to_owned())
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.history().is_empty());
    assert!(state.draft().is_empty());
    assert!(!state.is_pending());
    assert!(!state.can_send());
}

#[test]
fn update_draft_replaces_text() {
    let mut state = ChatState::default();
    state.update_draft("Io");
    state.update_draft("Europa");
    assert_eq!(state.draft(), "Europa");
    assert!(state.history().is_empty());
}

// =============================================================
// begin_send
// =============================================================

#[test]
fn begin_send_appends_one_user_message_before_reply() {
    let mut state = ChatState::default();
    state.update_draft("  Does Europa have water?  ");

    let payload = state.begin_send();

    assert_eq!(payload.as_deref(), Some("Does Europa have water?"));
    assert_eq!(state.history().len(), 1);
    assert!(state.history()[0].is_user());
    assert_eq!(state.history()[0].text(), "  Does Europa have water?  ");
    assert!(state.is_pending());
}

#[test]
fn begin_send_blank_draft_is_noop() {
    for draft in ["", "   ", "\n\t "] {
        let mut state = ChatState::default();
        state.update_draft(draft);
        assert!(state.begin_send().is_none());
        assert!(state.history().is_empty());
        assert!(!state.is_pending());
        assert_eq!(state.draft(), draft);
    }
}

#[test]
fn begin_send_while_pending_is_noop() {
    let mut state = ChatState::default();
    state.update_draft("first");
    assert!(state.begin_send().is_some());

    state.update_draft("second");
    assert!(!state.can_send());
    assert!(state.begin_send().is_none());
    assert_eq!(state.history().len(), 1);
    assert!(state.is_pending());
}

// =============================================================
// finish_send
// =============================================================

#[test]
fn finish_send_success_appends_bot_message_with_source() {
    let mut state = ChatState::default();
    state.update_draft("Tell me about Europa");
    state.begin_send();

    let result = state.finish_send(Ok(reply(
        "Europa has a subsurface ocean",
        Some(&["https://example.com/europa"]),
    )));

    assert!(result.is_ok());
    assert_eq!(state.history().len(), 2);
    let bot = &state.history()[1];
    assert!(!bot.is_user());
    assert_eq!(bot.text(), "Europa has a subsurface ocean");
    assert_eq!(bot.sources(), ["https://example.com/europa".to_owned()]);
    assert!(bot.has_sources());
    assert!(state.draft().is_empty());
    assert!(!state.is_pending());
}

#[test]
fn finish_send_success_without_sources_has_no_links() {
    let mut state = ChatState::default();
    state.update_draft("Tell me about Callisto");
    state.begin_send();

    state.finish_send(Ok(reply("Callisto is heavily cratered", None))).unwrap();

    let bot = &state.history()[1];
    assert!(bot.sources().is_empty());
    assert!(!bot.has_sources());
}

#[test]
fn finish_send_success_with_empty_sources_has_no_links() {
    let mut state = ChatState::default();
    state.update_draft("Tell me about Amalthea");
    state.begin_send();

    state.finish_send(Ok(reply("Amalthea is red", Some(&[])))).unwrap();

    assert!(!state.history()[1].has_sources());
}

#[test]
fn finish_send_failure_keeps_user_message_and_draft() {
    let mut state = ChatState::default();
    state.update_draft("Is Io volcanic?");
    state.begin_send();

    let result = state.finish_send(Err(failed()));

    assert_eq!(result, Err(failed()));
    assert_eq!(state.history().len(), 1);
    assert!(state.history()[0].is_user());
    assert_eq!(state.draft(), "Is Io volcanic?");
    assert!(!state.is_pending());
}

#[test]
fn failed_send_can_be_retried() {
    let mut state = ChatState::default();
    state.update_draft("Is Io volcanic?");
    state.begin_send();
    state.finish_send(Err(failed())).unwrap_err();

    assert!(state.can_send());
    assert_eq!(state.begin_send().as_deref(), Some("Is Io volcanic?"));
    assert_eq!(state.history().len(), 2);
}

#[test]
fn sources_keep_backend_order() {
    let mut state = ChatState::default();
    state.update_draft("Sources?");
    state.begin_send();
    state
        .finish_send(Ok(reply("answer", Some(&["https://c.test", "https://a.test", "https://b.test"]))))
        .unwrap();

    let urls: Vec<&str> = state.history()[1].sources().iter().map(String::as_str).collect();
    assert_eq!(urls, ["https://c.test", "https://a.test", "https://b.test"]);
}

// =============================================================
// Ordering
// =============================================================

#[test]
fn history_preserves_insertion_order() {
    for n in 0..6 {
        let mut state = ChatState::default();
        for i in 0..n {
            state.update_draft(format!("question {i}"));
            state.begin_send();
            state.finish_send(Ok(reply(&format!("answer {i}"), None))).unwrap();
        }

        let texts: Vec<&str> = state.history().iter().map(Message::text).collect();
        let expected: Vec<String> = (0..n)
            .flat_map(|i| [format!("question {i}"), format!("answer {i}")])
            .collect();
        assert_eq!(texts, expected);
        assert_eq!(state.history().len(), 2 * n);
    }
}

// =============================================================
// Message
// =============================================================

#[test]
fn user_message_has_no_sources() {
    let msg = Message::user("hello");
    assert!(msg.is_user());
    assert!(!msg.has_sources());
}
