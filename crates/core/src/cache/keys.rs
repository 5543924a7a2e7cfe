use uuid::Uuid;

/// Returns the cache key for a single product.
///
/// The key is the identifier's canonical form (lower-case, hyphenated), so
/// any spelling of the same UUID in a request path hits the same entry.
///
/// # Examples
///
/// ```
/// use restclean_core::cache::product_key;
/// use uuid::Uuid;
///
/// let id = Uuid::parse_str("6BA7B810-9DAD-11D1-80B4-00C04FD430C8").unwrap();
/// assert_eq!(product_key(id), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
/// ```
pub fn product_key(id: Uuid) -> String {
    id.hyphenated().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_key_is_canonical() {
        let upper = Uuid::parse_str("6BA7B810-9DAD-11D1-80B4-00C04FD430C8").unwrap();
        let simple = Uuid::parse_str("6ba7b8109dad11d180b400c04fd430c8").unwrap();

        assert_eq!(product_key(upper), product_key(simple));
        assert_eq!(product_key(upper), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    }
}
