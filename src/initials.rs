/// Badge text for a participant: the first letter of the first two
/// `.`/`_`/`-` separated fragments of the local part, uppercased.
/// Falls back to the first two characters of the local part when no
/// fragment survives (e.g. `"___@x.com"`).
pub fn initials(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();

    let from_fragments: String = local
        .split(['.', '_', '-'])
        .filter(|frag| !frag.is_empty())
        .take(2)
        .filter_map(|frag| frag.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if !from_fragments.is_empty() {
        return from_fragments;
    }
    local.chars().take(2).flat_map(char::to_uppercase).collect()
}
