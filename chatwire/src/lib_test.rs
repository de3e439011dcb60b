use super::*;

#[test]
fn request_serializes_message_field() {
    let body = encode_request(&ChatRequest::new("hi there")).expect("encode");
    assert_eq!(body, r#"{"message":"hi there"}"#);
}

#[test]
fn request_missing_message_decodes_as_empty() {
    let req: ChatRequest = serde_json::from_str("{}").expect("decode");
    assert!(req.message.is_empty());
}

#[test]
fn reply_type_maps_known_tags() {
    assert_eq!(ReplyType::from("pdf".to_owned()), ReplyType::Pdf);
    assert_eq!(ReplyType::from("gemini".to_owned()), ReplyType::Gemini);
    assert_eq!(ReplyType::from("error".to_owned()), ReplyType::Error);
    assert_eq!(ReplyType::from("banana".to_owned()), ReplyType::Unknown("banana".to_owned()));
}

#[test]
fn reply_type_tags_are_case_sensitive() {
    assert_eq!(ReplyType::from("Gemini".to_owned()), ReplyType::Unknown("Gemini".to_owned()));
}

#[test]
fn gemini_reply_serializes_without_message() {
    let value = serde_json::to_value(ChatReply::gemini("<p>hi</p>")).expect("encode");
    assert_eq!(value, serde_json::json!({ "reply_type": "gemini", "reply": "<p>hi</p>" }));
}

#[test]
fn error_reply_serializes_without_reply() {
    let value = serde_json::to_value(ChatReply::error("boom")).expect("encode");
    assert_eq!(value, serde_json::json!({ "reply_type": "error", "message": "boom" }));
}

#[test]
fn decode_gemini_reply_is_answer() {
    let reply = decode_reply(r#"{"reply_type":"gemini","reply":"<b>x</b>"}"#).expect("decode");
    assert_eq!(reply.outcome(), ReplyOutcome::Answer("<b>x</b>".to_owned()));
}

#[test]
fn decode_pdf_reply_is_answer() {
    let reply = decode_reply(r#"{"reply_type":"pdf","reply":"page 3"}"#).expect("decode");
    assert_eq!(reply.outcome(), ReplyOutcome::Answer("page 3".to_owned()));
}

#[test]
fn answer_without_reply_is_unexpected() {
    let reply = decode_reply(r#"{"reply_type":"gemini"}"#).expect("decode");
    assert_eq!(reply.outcome(), ReplyOutcome::Unexpected);
}

#[test]
fn error_reply_carries_message() {
    let reply = decode_reply(r#"{"reply_type":"error","message":"nope"}"#).expect("decode");
    assert_eq!(reply.outcome(), ReplyOutcome::ServerError(Some("nope".to_owned())));
}

#[test]
fn error_reply_empty_message_is_none() {
    let reply = decode_reply(r#"{"reply_type":"error","message":""}"#).expect("decode");
    assert_eq!(reply.outcome(), ReplyOutcome::ServerError(None));
}

#[test]
fn unknown_tag_is_unexpected() {
    let reply = decode_reply(r#"{"reply_type":"banana","reply":"secret"}"#).expect("decode");
    assert_eq!(reply.reply_type, ReplyType::Unknown("banana".to_owned()));
    assert_eq!(reply.outcome(), ReplyOutcome::Unexpected);
}

#[test]
fn missing_tag_is_unexpected() {
    let reply = decode_reply(r#"{"reply":"x"}"#).expect("decode");
    assert_eq!(reply.outcome(), ReplyOutcome::Unexpected);
}

#[test]
fn non_string_tag_is_unexpected() {
    let reply = decode_reply(r#"{"reply_type":7,"reply":"x"}"#).expect("decode");
    assert_eq!(reply.reply_type, ReplyType::Unknown("7".to_owned()));
    assert_eq!(reply.outcome(), ReplyOutcome::Unexpected);
}

#[test]
fn non_object_json_is_unexpected() {
    for body in ["null", "[1,2]", "\"gemini\"", "42"] {
        let reply = decode_reply(body).expect("decode");
        assert_eq!(reply.outcome(), ReplyOutcome::Unexpected, "body {body}");
    }
}

#[test]
fn non_json_body_errors() {
    assert!(matches!(decode_reply("<html>502</html>"), Err(WireError::Json(_))));
}
