//! Multibase-prefixed encoding adapters.

use async_trait::async_trait;

use hashlink_core::{Encoding, TransformError};

/// Base58 with the Bitcoin alphabet, multibase prefix `z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base58Btc;

impl Base58Btc {
    pub const PREFIX: char = 'z';
}

#[async_trait]
impl Encoding for Base58Btc {
    fn prefix(&self) -> char {
        Self::PREFIX
    }

    async fn encode(&self, data: &[u8]) -> Result<String, TransformError> {
        let mut out = String::with_capacity(1 + data.len() * 138 / 100 + 1);
        out.push(Self::PREFIX);
        out.push_str(&bs58::encode(data).into_string());
        Ok(out)
    }

    async fn decode(&self, text: &str) -> Result<Vec<u8>, TransformError> {
        let body = strip_prefix(text, Self::PREFIX)?;
        bs58::decode(body)
            .into_vec()
            .map_err(|e| TransformError::InvalidInput(e.to_string()))
    }
}

/// RFC 4648 base32, lowercase, no padding, multibase prefix `b`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32;

impl Base32 {
    pub const PREFIX: char = 'b';
}

#[async_trait]
impl Encoding for Base32 {
    fn prefix(&self) -> char {
        Self::PREFIX
    }

    async fn encode(&self, data: &[u8]) -> Result<String, TransformError> {
        Ok(format!("{}{}", Self::PREFIX, base32_encode(data)))
    }

    async fn decode(&self, text: &str) -> Result<Vec<u8>, TransformError> {
        base32_decode(strip_prefix(text, Self::PREFIX)?)
    }
}

fn strip_prefix(text: &str, prefix: char) -> Result<&str, TransformError> {
    text.strip_prefix(prefix).ok_or_else(|| {
        TransformError::InvalidInput(format!("expected multibase prefix '{prefix}'"))
    })
}

const BASE32_ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

fn base32_encode(data: &[u8]) -> String {
    let mut result = String::with_capacity((data.len() * 8 + 4) / 5);
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for &byte in data {
        buffer = (buffer << 8) | (byte as u64);
        bits_in_buffer += 8;

        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let index = ((buffer >> bits_in_buffer) & 0x1f) as usize;
            result.push(BASE32_ALPHABET[index] as char);
        }
    }

    if bits_in_buffer > 0 {
        let index = ((buffer << (5 - bits_in_buffer)) & 0x1f) as usize;
        result.push(BASE32_ALPHABET[index] as char);
    }

    result
}

fn base32_decode(text: &str) -> Result<Vec<u8>, TransformError> {
    let mut result = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for c in text.bytes() {
        let value = BASE32_ALPHABET
            .iter()
            .position(|&a| a == c)
            .ok_or_else(|| {
                TransformError::InvalidInput(format!("invalid base32 character {:?}", c as char))
            })?;

        buffer = (buffer << 5) | value as u64;
        bits_in_buffer += 5;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push((buffer >> bits_in_buffer) as u8);
        }
    }

    // Leftover bits are padding and must be zero.
    if bits_in_buffer >= 5 || buffer & ((1 << bits_in_buffer) - 1) != 0 {
        return Err(TransformError::InvalidInput("non-canonical base32 tail".into()));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[tokio::test]
    async fn test_base58_known_vector() {
        let bytes =
            hex::decode("12207f83b1657ff1fc53b92dc18148a1d65dfc2d4b1fa3d677284addd200126d9069")
                .unwrap();
        let encoded = Base58Btc.encode(&bytes).await.unwrap();
        assert_eq!(encoded, "zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e");
        assert_eq!(Base58Btc.decode(&encoded).await.unwrap(), bytes);
    }

    #[tokio::test]
    async fn test_base58_leading_zeros() {
        let encoded = Base58Btc.encode(&[0, 0, 1]).await.unwrap();
        assert_eq!(encoded, "z112");
        assert_eq!(Base58Btc.decode(&encoded).await.unwrap(), vec![0, 0, 1]);
    }

    #[tokio::test]
    async fn test_decode_requires_prefix() {
        assert!(Base58Btc.decode("QmWvQx").await.is_err());
        assert!(Base32.decode("zmzxw6").await.is_err());
        // '0' is not in the base58 alphabet
        assert!(Base58Btc.decode("z0").await.is_err());
    }

    #[test]
    fn test_base32_rfc4648_vectors() {
        assert_eq!(base32_encode(b""), "");
        assert_eq!(base32_encode(b"f"), "my");
        assert_eq!(base32_encode(b"fo"), "mzxq");
        assert_eq!(base32_encode(b"foo"), "mzxw6");
        assert_eq!(base32_encode(b"foob"), "mzxw6yq");
        assert_eq!(base32_encode(b"fooba"), "mzxw6ytb");
        assert_eq!(base32_encode(b"foobar"), "mzxw6ytboi");
    }

    #[test]
    fn test_base32_rejects_bad_input() {
        assert!(base32_decode("MZXW6").is_err());
        assert!(base32_decode("m1").is_err());
        // "mz" leaves non-zero padding bits
        assert!(base32_decode("mz").is_err());
    }

    proptest! {
        #[test]
        fn test_base32_inverse(data in prop::collection::vec(any::<u8>(), 0..128)) {
            let encoded = base32_encode(&data);
            prop_assert_eq!(base32_decode(&encoded).unwrap(), data);
        }
    }
}
