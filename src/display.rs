pub const ADDRESS_PREFIX_LEN: usize = 10;
pub const ADDRESS_SUFFIX_LEN: usize = 4;

/// Masks a private key for display. `${VAR}` references are shown as-is.
pub fn format_private_key(key: &str) -> String {
    if key.starts_with("${") {
        return key.to_string();
    }
    let chars: Vec<char> = key.chars().collect();
    let head: String = chars.iter().take(ADDRESS_PREFIX_LEN).collect();
    let tail: String = chars[chars.len().saturating_sub(ADDRESS_SUFFIX_LEN)..].iter().collect();
    format!("{head}...{tail}")
}

/// Shortens an address to `prefix...suffix` when it is longer than both.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }
    let head: String = chars[..prefix_len].iter().collect();
    let tail: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{head}...{tail}")
}

pub fn format_address_default(address: &str) -> String {
    format_address(address, ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN)
}
