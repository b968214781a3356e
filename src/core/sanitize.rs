// src/core/sanitize.rs

/// Collapse runs of whitespace into one space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop characters that break the tag template or Audacity's label import:
/// asterisks, double quotes and apostrophes.
pub fn clean_tag_value(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '*' | '"' | '\'')).collect()
}

/// File stem from free text: spaces become underscores, path separators and
/// other characters most filesystems reject are dropped.
pub fn sanitize_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for ch in name.chars() {
        match ch {
            ' ' => out.push('_'),
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => {}
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out.trim_matches(|c| c == '_' || c == '.').to_string()
}

/// Cut at the first `(`, dropping trailing whitespace. `"Title (Remaster)"` → `"Title"`.
pub fn strip_paren_suffix(s: &str) -> &str {
    match s.find('(') {
        Some(i) => s[..i].trim_end(),
        None => s,
    }
}
