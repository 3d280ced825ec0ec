//! Client-side identifier generation.
//!
//! Reference numbers let the applicant quote something stable before the
//! backend assigns its own application id. Transaction ids tag the
//! simulated payment record.

use rand::Rng;

/// Unambiguous uppercase alphabet (no 0/O, 1/I).
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Application reference number, generated once per wizard visit.
///
/// Format: `FD-XXXXXX`.
pub fn new_reference() -> String {
    format!("FD-{}", random_code(6))
}

/// Simulated payment transaction id.
///
/// Format: `TXN-XXXXXXXXXX`.
pub fn new_transaction_id() -> String {
    format!("TXN-{}", random_code(10))
}

fn random_code(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_has_expected_shape() {
        let reference = new_reference();
        assert_eq!(reference.len(), 9);
        assert!(reference.starts_with("FD-"));
        assert!(reference[3..].bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn transaction_id_has_expected_shape() {
        let txn = new_transaction_id();
        assert_eq!(txn.len(), 14);
        assert!(txn.starts_with("TXN-"));
        assert!(txn[4..].bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn codes_avoid_ambiguous_characters() {
        for _ in 0..50 {
            let reference = new_reference();
            assert!(!reference[3..].contains(['0', 'O', '1', 'I']));
        }
    }
}
