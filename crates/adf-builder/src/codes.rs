//! ISO code tables consulted by validation rules
//!
//! Both tables are sorted so membership is a binary search.

/// Active ISO 4217 alphabetic currency codes
pub const ISO_4217: &[&str] = &[
    "AED", "AFN", "ALL", "AMD", "ANG", "AOA", "ARS", "AUD", "AWG", "AZN",
    "BAM", "BBD", "BDT", "BGN", "BHD", "BIF", "BMD", "BND", "BOB", "BOV",
    "BRL", "BSD", "BTN", "BWP", "BYN", "BZD", "CAD", "CDF", "CHE", "CHF",
    "CHW", "CLF", "CLP", "CNY", "COP", "COU", "CRC", "CUC", "CUP", "CVE",
    "CZK", "DJF", "DKK", "DOP", "DZD", "EGP", "ERN", "ETB", "EUR", "FJD",
    "FKP", "GBP", "GEL", "GHS", "GIP", "GMD", "GNF", "GTQ", "GYD", "HKD",
    "HNL", "HTG", "HUF", "IDR", "ILS", "INR", "IQD", "IRR", "ISK", "JMD",
    "JOD", "JPY", "KES", "KGS", "KHR", "KMF", "KPW", "KRW", "KWD", "KYD",
    "KZT", "LAK", "LBP", "LKR", "LRD", "LSL", "LYD", "MAD", "MDL", "MGA",
    "MKD", "MMK", "MNT", "MOP", "MRU", "MUR", "MVR", "MWK", "MXN", "MXV",
    "MYR", "MZN", "NAD", "NGN", "NIO", "NOK", "NPR", "NZD", "OMR", "PAB",
    "PEN", "PGK", "PHP", "PKR", "PLN", "PYG", "QAR", "RON", "RSD", "RUB",
    "RWF", "SAR", "SBD", "SCR", "SDG", "SEK", "SGD", "SHP", "SLE", "SLL",
    "SOS", "SRD", "SSP", "STN", "SVC", "SYP", "SZL", "THB", "TJS", "TMT",
    "TND", "TOP", "TRY", "TTD", "TWD", "TZS", "UAH", "UGX", "USD", "USN",
    "UYI", "UYU", "UYW", "UZS", "VED", "VES", "VND", "VUV", "WST", "XAF",
    "XAG", "XAU", "XBA", "XBB", "XBC", "XBD", "XCD", "XCG", "XDR", "XOF",
    "XPD", "XPF", "XPT", "XSU", "XTS", "XUA", "XXX", "YER", "ZAR", "ZMW",
    "ZWG", "ZWL",
];

/// Common ISO 3166-1 alpha-2 country codes (a subset, not the full registry)
pub const ISO_3166_ALPHA2: &[&str] = &[
    "AU", "BE", "BR", "CA", "CH", "CN", "DE", "DK", "ES", "FI", "FR", "GB", "GR",
    "IN", "IT", "JP", "KR", "MX", "NL", "NO", "NZ", "RU", "SE", "US", "ZA",
];

/// Returns true if `code` is an ISO 4217 alphabetic code. Codes are upper case; matching is exact.
pub fn is_currency_code(code: &str) -> bool {
    ISO_4217.binary_search(&code).is_ok()
}

/// Returns true if `code` is a known ISO 3166-1 alpha-2 code, ignoring case
pub fn is_country_code(code: &str) -> bool {
    let upper = code.trim().to_ascii_uppercase();
    ISO_3166_ALPHA2.binary_search(&upper.as_str()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        assert!(ISO_4217.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(ISO_3166_ALPHA2.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_currency_lookup() {
        for code in ["USD", "EUR", "GBP", "JPY", "CAD", "MXN"] {
            assert!(is_currency_code(code), "{code} should be valid");
        }
        for code in ["XYZ", "usd", "US", "DOLLARS", ""] {
            assert!(!is_currency_code(code), "{code} should be invalid");
        }
    }

    #[test]
    fn test_country_lookup() {
        for code in ["US", "CA", "MX", "GB", "DE", "FR", "JP", "CN", "AU", "NZ", "us"] {
            assert!(is_country_code(code), "{code} should be valid");
        }
        for code in ["XX", "USA", "ZZ", ""] {
            assert!(!is_country_code(code), "{code} should be invalid");
        }
    }
}
