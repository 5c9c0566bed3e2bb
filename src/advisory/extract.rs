//! Locating a JSON object inside free-form model output

/// Return the first balanced `{ ... }` span in `text`
///
/// Models often wrap their answer in prose or code fences. Scanning starts at
/// the first opening brace and tracks nesting depth, ignoring braces inside
/// string literals, so multi-line objects are found intact. Returns `None`
/// when there is no opening brace or it is never closed.
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let candidate = text.get(start..)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in candidate.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return candidate.get(..=offset);
                }
            }
            _ => {}
        }
    }

    None
}
