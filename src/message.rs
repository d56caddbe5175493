/// Build the message text: greeting first, then the name.
#[must_use]
pub fn compose(name: &str, greeting: &str) -> String {
    format!("{greeting}, {name}")
}
