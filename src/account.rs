/// A wallet account as seen by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub address: String,
    pub display_name: String,
}

impl Account {
    pub fn new(address: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            display_name: display_name.into(),
        }
    }

    /// Builds an account from a public key, shortening it to `GABC…WXYZ` form.
    pub fn from_public_key(public_key: &str, display_chars: usize) -> Self {
        Self::new(public_key, shorten(public_key, display_chars))
    }
}

fn shorten(key: &str, keep: usize) -> String {
    let chars: Vec<char> = key.chars().collect();
    if keep == 0 || chars.len() <= keep.saturating_mul(2).saturating_add(1) {
        return key.to_owned();
    }
    let head: String = chars[..keep].iter().collect();
    let tail: String = chars[chars.len() - keep..].iter().collect();
    format!("{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "GCKFBEIYTKP6RQ2KBXWVHSB5ZXJ3ZRNN5BK2OB2FH6ULMMXYNSPZ5EYW";

    #[test]
    fn long_keys_are_shortened() {
        let account = Account::from_public_key(KEY, 4);
        assert_eq!(account.display_name, "GCKF…5EYW");
        assert_eq!(account.address, KEY);
    }

    #[test]
    fn short_names_are_kept() {
        assert_eq!(Account::from_public_key("alice.eth", 4).display_name, "alice.eth");
        assert_eq!(Account::from_public_key(KEY, 0).display_name, KEY);
    }

    #[test]
    fn huge_widths_keep_the_whole_key() {
        assert_eq!(Account::from_public_key(KEY, usize::MAX).display_name, KEY);

        let raw = format!(r#"{{ "display_chars": {} }}"#, usize::MAX);
        let config = crate::WalletConfig::from_json(&raw).unwrap();
        let account = Account::from_public_key(KEY, config.display_chars);
        assert_eq!(account.display_name, KEY);
    }
}
