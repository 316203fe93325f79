use crate::lexer::{self, Line};

/// Find the source line assigning the final segment of `path`, tracking
/// named scopes so `server.port` prefers a `port` inside `server -> {`.
///
/// Returns `(line_number, trimmed_line)`, or `(0, "<key not found>")`.
pub(super) fn find_config_line(path: &str, raw_content: &str) -> (usize, String) {
    let segments: Vec<&str> = path.split('.').collect();
    let last = segments.last().copied().unwrap_or(path);
    let mut scope: Vec<Option<&str>> = Vec::new();
    let mut fallback: Option<(usize, String)> = None;

    for (idx, raw) in raw_content.lines().enumerate() {
        let (key, opened) = match lexer::classify(raw, idx + 1) {
            Ok(Line::OpenNamed { key }) => {
                scope.push(Some(key));
                (key, true)
            }
            Ok(Line::OpenAnonymous) => {
                scope.push(None);
                continue;
            }
            Ok(Line::Close) => {
                scope.pop();
                continue;
            }
            Ok(Line::Entry { key, .. }) => (key, false),
            _ => continue,
        };

        if key != last {
            continue;
        }

        let mut full: Vec<&str> = scope.iter().flatten().copied().collect();
        // An opened block is already on the scope stack.
        if !opened {
            full.push(key);
        }

        if full == segments {
            return (idx + 1, raw.trim().to_string());
        }
        if fallback.is_none() {
            fallback = Some((idx + 1, raw.trim().to_string()));
        }
    }

    fallback.unwrap_or((0, "<key not found>".into()))
}
