//! Symbol frequency analysis.

/// Count symbol occurrences over the input.
///
/// Returns one `(symbol, count)` entry per symbol that actually appears,
/// in ascending symbol order. The entry order only matters for the
/// deterministic seeding of the tree builder; the counts themselves are
/// order-independent.
pub fn symbol_frequencies(input: &[u8]) -> Vec<(u8, u64)> {
    let mut counts = [0u64; 256];
    for &byte in input {
        counts[byte as usize] += 1;
    }

    counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(symbol, &count)| (symbol as u8, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(symbol_frequencies(&[]).is_empty());
    }

    #[test]
    fn test_counts() {
        let freqs = symbol_frequencies(b"abracadabra");
        assert_eq!(
            freqs,
            vec![(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)]
        );
    }

    #[test]
    fn test_no_zero_entries() {
        let freqs = symbol_frequencies(&[0x00, 0xFF]);
        assert_eq!(freqs, vec![(0x00, 1), (0xFF, 1)]);
    }

    #[test]
    fn test_all_symbols() {
        let input: Vec<u8> = (0..=255).collect();
        let freqs = symbol_frequencies(&input);
        assert_eq!(freqs.len(), 256);
        assert!(freqs.iter().all(|&(_, count)| count == 1));
    }
}
