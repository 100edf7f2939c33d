//! Process-wide default instance.
//!
//! Built lazily on first use with every bundled transform registered, and
//! never modified afterwards. Tests and callers with special algorithm needs
//! should build their own [`Hashlink`] instead.

use std::sync::OnceLock;

use hashlink_core::Result;

use crate::hashlink::{DecodedHashlink, Hashlink};
use crate::options::CreateOptions;

static DEFAULT: OnceLock<Hashlink> = OnceLock::new();

/// The shared default instance.
pub fn default_instance() -> Result<&'static Hashlink> {
    if let Some(hashlink) = DEFAULT.get() {
        return Ok(hashlink);
    }

    // A concurrent initializer may win the race; its instance is identical.
    let hashlink = Hashlink::bundled()?;
    Ok(DEFAULT.get_or_init(|| hashlink))
}

/// [`Hashlink::create`] on the default instance.
pub async fn create(options: CreateOptions) -> Result<String> {
    default_instance()?.create(options).await
}

/// [`Hashlink::verify`] on the default instance.
pub async fn verify(data: &[u8], hashlink: &str) -> Result<bool> {
    default_instance()?.verify(data, hashlink).await
}

/// [`Hashlink::decode`] on the default instance.
pub async fn decode(hashlink: &str) -> Result<DecodedHashlink> {
    default_instance()?.decode(hashlink).await
}
