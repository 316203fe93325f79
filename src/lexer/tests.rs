#[cfg(test)]
use super::*;

#[test]
fn test_blank_and_comment_lines_are_ignored() {
    assert_eq!(classify("", 1), Ok(Line::Ignore));
    assert_eq!(classify("    \t ", 1), Ok(Line::Ignore));
    assert_eq!(classify("# a comment -> {", 1), Ok(Line::Ignore));
    assert_eq!(classify("   # indented comment", 1), Ok(Line::Ignore));
}

#[test]
fn test_constant_definition() {
    assert_eq!(
        classify("  def NUM := 23  ", 1),
        Ok(Line::ConstDef { name: "NUM", value: "23" })
    );
    assert_eq!(
        classify("def _Greeting:=hello world", 1),
        Ok(Line::ConstDef { name: "_Greeting", value: "hello world" })
    );
}

#[test]
fn test_constant_definition_errors() {
    for line in ["def INVALID_CONSTANT :=", "def lower := 1", "def 9LIVES := 9", "def NAME 1"] {
        match classify(line, 7) {
            Err(CdclError::SyntaxError { line: no, text, code, .. }) => {
                assert_eq!(no, 7);
                assert_eq!(text, line);
                assert_eq!(code, Some(101));
            }
            other => panic!("expected syntax error for {:?}, got {:?}", line, other),
        }
    }
}

#[test]
fn test_def_prefix_requires_whitespace() {
    assert_eq!(
        classify("define -> yes.", 1),
        Ok(Line::Entry { key: "define", value: "yes" })
    );
    assert_eq!(classify("def", 1), Ok(Line::Unrecognized));
}

#[test]
fn test_braces() {
    assert_eq!(classify("{", 1), Ok(Line::OpenAnonymous));
    assert_eq!(classify("  }  ", 1), Ok(Line::Close));
    assert_eq!(classify("database -> {", 1), Ok(Line::OpenNamed { key: "database" }));
    assert_eq!(classify("db_2->{", 1), Ok(Line::OpenNamed { key: "db_2" }));
}

#[test]
fn test_entries() {
    assert_eq!(classify("user -> admin.", 1), Ok(Line::Entry { key: "user", value: "admin" }));
    assert_eq!(classify("port->8080.", 1), Ok(Line::Entry { key: "port", value: "8080" }));
    assert_eq!(
        classify("value -> @[NUM].", 1),
        Ok(Line::Entry { key: "value", value: "@[NUM]" })
    );
    // Only the final period terminates the value.
    assert_eq!(
        classify("host -> example.com.", 1),
        Ok(Line::Entry { key: "host", value: "example.com" })
    );
}

#[test]
fn test_malformed_entries() {
    for line in ["user -> admin", "-> admin.", "bad key -> x.", "user -> two words.", "user -> ."] {
        match classify(line, 3) {
            Err(CdclError::SyntaxError { code: Some(102), line: 3, .. }) => {}
            other => panic!("expected entry error for {:?}, got {:?}", line, other),
        }
    }
}

#[test]
fn test_unrecognized_line() {
    assert_eq!(classify("just some words", 1), Ok(Line::Unrecognized));
    assert_eq!(classify("{ }", 1), Ok(Line::Unrecognized));
}
