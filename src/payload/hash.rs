//! Pure helpers for payload generation: validation, digest and interleave.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{AppError, Result};

/// Separator placed between interleaved elements.
pub const OUTPUT_SEPARATOR: &str = ", ";

#[derive(Serialize)]
struct CanonicalInput<'a> {
    list1: &'a [String],
    list2: &'a [String],
}

/// Rejects empty lists and lists of different lengths.
pub fn validate_lists(list1: &[String], list2: &[String]) -> Result<()> {
    if list1.is_empty() {
        return Err(AppError::Validation("list1 must not be empty".to_string()));
    }
    if list2.is_empty() {
        return Err(AppError::Validation("list2 must not be empty".to_string()));
    }
    if list1.len() != list2.len() {
        return Err(AppError::Validation(format!(
            "list1 and list2 must have the same length (got {} and {})",
            list1.len(),
            list2.len()
        )));
    }
    Ok(())
}

/// SHA-256 of `{"list1":[..],"list2":[..]}` in compact JSON, as lowercase hex.
pub fn compute_input_hash(list1: &[String], list2: &[String]) -> Result<String> {
    let canonical = serde_json::to_vec(&CanonicalInput { list1, list2 })?;
    let digest = Sha256::digest(&canonical);
    Ok(format!("{digest:x}"))
}

/// Alternates elements of both lists and joins them with [`OUTPUT_SEPARATOR`].
///
/// Callers guarantee equal lengths; extra trailing elements would be dropped.
pub fn interleave<S: AsRef<str>>(list1: &[S], list2: &[S]) -> String {
    list1
        .iter()
        .zip(list2)
        .flat_map(|(a, b)| [a.as_ref(), b.as_ref()])
        .collect::<Vec<_>>()
        .join(OUTPUT_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_interleave_basic() {
        assert_eq!(interleave(&["A", "B", "C"], &["X", "Y", "Z"]), "A, X, B, Y, C, Z");
    }

    #[test]
    fn test_interleave_single_element() {
        assert_eq!(interleave(&["ONE"], &["TWO"]), "ONE, TWO");
    }

    #[test]
    fn test_interleave_keeps_inner_spaces() {
        assert_eq!(
            interleave(&["hello world"], &["foo bar"]),
            "hello world, foo bar"
        );
    }

    #[test]
    fn test_hash_deterministic() {
        let a = compute_input_hash(&strings(&["a", "b"]), &strings(&["x", "y"])).unwrap();
        let b = compute_input_hash(&strings(&["a", "b"]), &strings(&["x", "y"])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_different_inputs() {
        let a = compute_input_hash(&strings(&["a", "b"]), &strings(&["x", "y"])).unwrap();
        let b = compute_input_hash(&strings(&["a", "b"]), &strings(&["x", "z"])).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_hash_order_and_list_identity_matter() {
        let base = compute_input_hash(&strings(&["a", "b"]), &strings(&["x", "y"])).unwrap();
        let reordered =
            compute_input_hash(&strings(&["b", "a"]), &strings(&["x", "y"])).unwrap();
        let swapped = compute_input_hash(&strings(&["x", "y"]), &strings(&["a", "b"])).unwrap();
        assert_ne!(base, reordered);
        assert_ne!(base, swapped);
    }

    #[test]
    fn test_hash_element_boundaries_matter() {
        let joined = compute_input_hash(&strings(&["ab"]), &strings(&["c"])).unwrap();
        let split = compute_input_hash(&strings(&["a"]), &strings(&["bc"])).unwrap();
        assert_ne!(joined, split);
    }

    #[test]
    fn test_hash_is_sha256_hex() {
        let hash = compute_input_hash(&strings(&["test"]), &strings(&["test"])).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }

    #[test]
    fn test_validate_lists() {
        assert!(validate_lists(&strings(&["a"]), &strings(&["b"])).is_ok());
        assert!(matches!(
            validate_lists(&[], &[]),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_lists(&strings(&["a"]), &[]),
            Err(AppError::Validation(_))
        ));
        let err = validate_lists(&strings(&["a"]), &strings(&["a", "b"])).unwrap_err();
        assert!(err.to_string().contains("same length"));
    }
}
