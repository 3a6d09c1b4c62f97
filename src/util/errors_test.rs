use super::*;

#[test]
fn custom_message_wins() {
    let err = ClientError::Http { status: 400, message: "This time slot is already booked".to_owned() };
    assert_eq!(error_toast_message(&err, Some("Could not book")), "Could not book");
}

#[test]
fn error_message_used_without_override() {
    let err = ClientError::Http { status: 400, message: "This time slot is already booked".to_owned() };
    assert_eq!(error_toast_message(&err, None), "This time slot is already booked");
    assert_eq!(error_toast_message(&err, Some("")), "This time slot is already booked");
}

#[test]
fn blank_error_falls_back_to_generic() {
    let err = ClientError::Network(String::new());
    assert_eq!(error_toast_message(&err, None), GENERIC_ERROR_MESSAGE);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn handle_error_is_callable_natively() {
    handle_error(&ClientError::Network("offline".to_owned()), None);
}
