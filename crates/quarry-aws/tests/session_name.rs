use quarry_aws::session::{MAX_SESSION_NAME_LENGTH, sanitize_session_name};

fn is_valid_session_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '=' | ',' | '.' | '@' | '-')
}

#[test]
fn valid_name_passes_through() {
    assert_eq!(sanitize_session_name("deploy@agent-7"), "deploy@agent-7");
    assert_eq!(sanitize_session_name("a+b=c,d.e"), "a+b=c,d.e");
}

#[test]
fn invalid_characters_become_underscores() {
    assert_eq!(sanitize_session_name("build agent #7"), "build_agent__7");
    assert_eq!(sanitize_session_name("release/2.0 (rc)"), "release_2.0__rc_");
}

#[test]
fn output_stays_inside_charset_and_length_bound() {
    let inputs = [
        "",
        "plain",
        "spaces and slashes / \\",
        "unicode \u{65e5}\u{672c}\u{8a9e} name",
        &"x".repeat(500),
        "!@#$%^&*()",
    ];
    for input in inputs {
        let sanitized = sanitize_session_name(input);
        assert!(sanitized.chars().all(is_valid_session_char), "input {input:?}");
        assert!(sanitized.len() <= MAX_SESSION_NAME_LENGTH, "input {input:?}");
    }
}

#[test]
fn sanitization_is_idempotent() {
    let inputs = ["build agent #7", "ok-name", "\u{65e5}\u{672c}", &"y z".repeat(100)];
    for input in inputs {
        let once = sanitize_session_name(input);
        assert_eq!(sanitize_session_name(&once), once, "input {input:?}");
    }
}

#[test]
fn long_names_truncate_to_the_limit() {
    let long = "a".repeat(200);
    assert_eq!(sanitize_session_name(&long), "a".repeat(MAX_SESSION_NAME_LENGTH));
}

#[test]
fn non_ascii_maps_to_one_underscore_per_character() {
    assert_eq!(sanitize_session_name("\u{65e5}\u{672c}"), "__");
}
