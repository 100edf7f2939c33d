//! Golden hashlinks for cross-implementation verification.
//!
//! Every implementation must produce these exact identifiers for
//! "Hello World!" and `https://example.com/hw.txt`.

use hashlink_rs::transforms::{Base58Btc, Blake2b64, Sha2_256};
use hashlink_rs::{CreateOptions, Hashlink, Transform};

const DATA: &[u8] = b"Hello World!";
const URL: &str = "https://example.com/hw.txt";

const SHA2_256_DIGEST: &str = "zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e";
const BLAKE2B_64_DIGEST: &str = "zm9YZiJ7LARpE6oz";
const URL_METADATA: &str = "z3TSgXTuaHxY2tsArhUreJ4ixgw9NW7DYuQ9QTPQyLHy";
const URL_CONTENT_TYPE_METADATA: &str =
    "zCwPSdabLuj3jue1qYujzunnKwpL4myKdyeqySyFhnzZ8qdfW3bb6W8dVdRu";

fn instance(digest_name: &str, digest: Transform) -> Hashlink {
    let mut hl = Hashlink::new();
    hl.register(digest_name, digest).unwrap();
    hl.register("mb-base58-btc", Transform::encoding(Base58Btc))
        .unwrap();
    hl
}

async fn check_algorithm(digest_name: &str, digest: Transform, digest_segment: &str) {
    let hl = instance(digest_name, digest);
    let base = || CreateOptions::new(DATA).transforms(digest_name, "mb-base58-btc");

    let plain = hl.create(base()).await.unwrap();
    assert_eq!(plain, format!("hl:{digest_segment}"));

    let with_url = hl.create(base().url(URL)).await.unwrap();
    assert_eq!(with_url, format!("hl:{digest_segment}:{URL_METADATA}"));

    let with_meta = hl
        .create(base().url(URL).content_type("text/plain"))
        .await
        .unwrap();
    assert_eq!(
        with_meta,
        format!("hl:{digest_segment}:{URL_CONTENT_TYPE_METADATA}")
    );
}

#[tokio::test]
async fn test_sha2_256_vectors() {
    check_algorithm("mh-sha2-256", Transform::digest(Sha2_256), SHA2_256_DIGEST).await;
}

#[tokio::test]
async fn test_blake2b_64_vectors() {
    check_algorithm("mh-blake2b-64", Transform::digest(Blake2b64), BLAKE2B_64_DIGEST).await;
}

#[tokio::test]
async fn test_default_instance_vectors() {
    let plain = hashlink_rs::create(CreateOptions::new(DATA)).await.unwrap();
    assert_eq!(plain, format!("hl:{SHA2_256_DIGEST}"));

    let with_url = hashlink_rs::create(CreateOptions::new(DATA).url(URL))
        .await
        .unwrap();
    assert_eq!(with_url, format!("hl:{SHA2_256_DIGEST}:{URL_METADATA}"));

    let with_meta = hashlink_rs::create(
        CreateOptions::new(DATA)
            .url(URL)
            .meta("content-type", hashlink_rs::MetaValue::Text("text/plain".into())),
    )
    .await
    .unwrap();
    assert_eq!(
        with_meta,
        format!("hl:{SHA2_256_DIGEST}:{URL_CONTENT_TYPE_METADATA}")
    );
}

#[tokio::test]
async fn test_golden_vectors_verify() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let ids = [
        format!("hl:{SHA2_256_DIGEST}"),
        format!("hl:{BLAKE2B_64_DIGEST}:{URL_METADATA}"),
        format!("hl:{SHA2_256_DIGEST}:{URL_CONTENT_TYPE_METADATA}"),
    ];

    for id in &ids {
        assert!(hashlink_rs::verify(DATA, id).await.unwrap(), "{id}");
        assert!(!hashlink_rs::verify(b"Hello World?", id).await.unwrap(), "{id}");
    }
}
