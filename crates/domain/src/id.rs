//! ID generation utilities.
//!
//! Relay entity ids carry their creation time: `req-<millis>-<random>`,
//! `folder-<millis>-<random>`, `col-<millis>`. Two ids minted within the
//! same millisecond differ only in the random suffix; the collision
//! probability is accepted.

use rand::Rng;

fn epoch_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn random_suffix() -> u32 {
    rand::rng().random_range(0..1_000_000_000)
}

/// Generates a new request id.
#[must_use]
pub fn generate_request_id() -> String {
    format!("req-{}-{}", epoch_millis(), random_suffix())
}

/// Generates a new synthetic folder id.
///
/// Folders are not first-class entities; this id is only a flat grouping
/// tag attached to imported requests.
#[must_use]
pub fn generate_folder_id() -> String {
    format!("folder-{}-{}", epoch_millis(), random_suffix())
}

/// Generates a new collection id.
#[must_use]
pub fn generate_collection_id() -> String {
    format!("col-{}", epoch_millis())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_id_format() {
        let id = generate_request_id();
        assert!(id.starts_with("req-"));
        let parts: Vec<&str> = id.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert!(parts[2].parse::<u32>().is_ok());
    }

    #[test]
    fn test_folder_id_format() {
        let id = generate_folder_id();
        assert!(id.starts_with("folder-"));
    }

    #[test]
    fn test_collection_id_format() {
        let id = generate_collection_id();
        assert!(id.starts_with("col-"));
        assert!(id["col-".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_request_id_uniqueness() {
        let id1 = generate_request_id();
        let id2 = generate_request_id();
        assert_ne!(id1, id2);
    }
}
