use snipstash_cli::CliError;
use snipstash_templates::TemplateError;

#[test]
fn test_template_error_names_action_and_cause() {
    let err = CliError::template(
        "create template",
        TemplateError::DuplicateName("hello".to_string()),
    );
    let message = err.user_message();
    assert!(message.starts_with("Could not create template: "));
    assert!(message.contains("'hello' already exists"));
    assert!(message.contains("Choose another name"));
}

#[test]
fn test_not_found_suggests_list() {
    let err = CliError::template("edit template", TemplateError::NotFound("abc".to_string()));
    assert!(err.user_message().contains("snip list"));
}

#[test]
fn test_unknown_template_suggests_search() {
    let err = CliError::UnknownTemplate("forr".to_string());
    assert!(err.user_message().contains("snip search forr"));
}

#[test]
fn test_invalid_argument_display() {
    let err = CliError::invalid_argument("bad value");
    assert_eq!(err.to_string(), "Invalid argument: bad value");
    assert!(err.user_message().contains("snip --help"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "stdin closed");
    let err: CliError = io.into();
    assert!(err.user_message().contains("stdin closed"));
}

#[test]
fn test_technical_details_is_debug() {
    let err = CliError::Config("no home".to_string());
    assert!(err.technical_details().contains("Config"));
}
