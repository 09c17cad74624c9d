//! Card-name derivation from wiki page titles.

/// Base card name for a page title.
///
/// Cuts the title at the first `(` (and any whitespace before it), then
/// removes the first `@`. Titles without a parenthetical pass through.
///
/// ```rust
/// use tcgplayer_prices::card_name::card_name;
/// assert_eq!(card_name("Tragoedia (card)"), "Tragoedia");
/// assert_eq!(card_name("Dark Magician"), "Dark Magician");
/// ```
pub fn card_name(title: &str) -> String {
    let base = match title.find('(') {
        Some(idx) => title[..idx].trim_end(),
        None => title,
    };
    base.replacen('@', "", 1)
}

/// Base card name for a URL-form page name (`Dark_Magician_(anime)`).
pub fn card_name_from_page_name(page_name: &str) -> String {
    card_name(&page_name.replace('_', " "))
}
