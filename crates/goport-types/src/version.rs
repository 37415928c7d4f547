/// Split a tag into its prefix and the version proper.
///
/// Only a leading `v` directly followed by a digit counts as a prefix:
/// `v1.5.0` gives `("v", "1.5.0")`, while `2.5.0`, `0.5-alpha` and branch names
/// have no prefix.
pub fn split_version_prefix(version: &str) -> (&str, &str) {
    let mut chars = version.chars();
    match (chars.next(), chars.next()) {
        (Some('v'), Some(c)) if c.is_ascii_digit() => version.split_at(1),
        _ => ("", version),
    }
}
