//! Known Polygon token contracts and their short symbols.

/// Contract address to token symbol, applied in this order.
pub const KNOWN_TOKENS: [(&str, &str); 5] = [
    ("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270", "wMatic"),
    ("0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619", "wEth"),
    ("0x385Eeac5cB85A38A9a07A70c73e0a3271CfB54A7", "ghst"),
    ("0xB5C064F955D8e7F38fE0460C556a72987494eE17", "quick"),
    ("0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174", "usdc"),
];

/// Replaces every known address in `line` with its symbol.
///
/// Matching is literal and case-sensitive. Returns the rewritten line and the
/// number of addresses that were replaced.
pub fn substitute_symbols(line: &str) -> (String, usize) {
    let mut out = line.to_string();
    let mut replaced = 0;

    for (address, symbol) in KNOWN_TOKENS {
        let hits = out.matches(address).count();
        if hits > 0 {
            out = out.replace(address, symbol);
            replaced += hits;
        }
    }

    (out, replaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_address_maps_to_its_symbol() {
        for (address, symbol) in KNOWN_TOKENS {
            let (out, n) = substitute_symbols(&format!("swap {} done\n", address));
            assert_eq!(out, format!("swap {} done\n", symbol));
            assert_eq!(n, 1);
        }
    }

    #[test]
    fn test_line_without_addresses_is_unchanged() {
        let line = "deposit 100 - 0xdeadbeef into vault\n";
        let (out, n) = substitute_symbols(line);
        assert_eq!(out, line);
        assert_eq!(n, 0);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let lower = "0x2791bca1f2de4661ed88a30c99a7a9449aa84174";
        let (out, n) = substitute_symbols(lower);
        assert_eq!(out, lower);
        assert_eq!(n, 0);
    }

    #[test]
    fn test_multiple_occurrences_are_counted() {
        let line = "0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619 -> \
                    0x2791Bca1f2de4661ED88A30C99A7a9449Aa84174 -> \
                    0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619";
        let (out, n) = substitute_symbols(line);
        assert_eq!(out, "wEth -> usdc -> wEth");
        assert_eq!(n, 3);
    }
}
