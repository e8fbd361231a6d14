/// Splits a newline-delimited name listing.
///
/// Every segment is kept, so an empty body yields a single empty name and a
/// trailing newline yields a trailing empty name.
pub fn split_names(body: &str) -> Vec<String> {
    body.split('\n').map(str::to_string).collect()
}
