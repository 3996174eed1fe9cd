//! Human-readable titles derived from path segments.

/// Turn a slug segment into a display title.
///
/// Hyphens become spaces and the first character of every word is
/// uppercased. A "word" starts at any alphanumeric or `_` character that
/// does not follow another one, so `v2.0-notes` becomes `V2.0 Notes`.
///
/// # Examples
/// ```ignore
/// assert_eq!(title_from_slug("success-stories"), "Success Stories");
/// assert_eq!(title_from_slug("calculators"), "Calculators");
/// ```
pub fn title_from_slug(slug: &str) -> String {
    let mut title = String::with_capacity(slug.len());
    let mut prev_is_word = false;

    for c in slug.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            title.extend(c.to_uppercase());
        } else {
            title.push(c);
        }
        prev_is_word = is_word;
    }

    title
}
