/// Converts a field identifier into its human-readable form.
///
/// The identifier is split at lower-to-upper case transitions, at
/// letter-to-digit transitions, and at `_`/`-`; the words are lowercased,
/// joined with single spaces, and only the first character is capitalized.
/// `dateOfBirth` becomes `Date of birth`.
pub fn humanize_label(identifier: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut previous: Option<char> = None;

    for ch in identifier.chars() {
        if ch == '_' || ch == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous = None;
            continue;
        }
        if let Some(prev) = previous {
            let case_boundary = prev.is_lowercase() && ch.is_uppercase();
            let digit_boundary = prev.is_alphabetic() && ch.is_ascii_digit();
            if (case_boundary || digit_boundary) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
        previous = Some(ch);
    }
    if !current.is_empty() {
        words.push(current);
    }

    let joined = words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let mut chars = joined.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
