//! Asset naming and addressing.
//!
//! Everything here is string and path construction. Nothing checks that a file or
//! object exists, and filenames are expected to come from the generators below,
//! never from the client.

use std::io;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;

/// Bytes of randomness behind every generated asset name.
const ASSET_NAME_ENTROPY_BYTES: usize = 32;

/// Maps a media type to a file extension.
///
/// `"image/png"` gives `".png"`. Anything that does not split into exactly two
/// `/`-separated parts gives `".bin"`. The subtype is not checked against known
/// formats.
pub fn media_type_to_ext(media_type: &str) -> String {
    let parts: Vec<&str> = media_type.split('/').collect();
    if parts.len() != 2 {
        return ".bin".to_string();
    }
    format!(".{}", parts[1])
}

/// Path of an asset under the assets root.
pub fn asset_disk_path(assets_root: &Path, asset_path: &str) -> PathBuf {
    assets_root.join(asset_path)
}

/// URL under which the API serves a local asset.
pub fn asset_url(host: &str, port: u16, asset_path: &str) -> String {
    format!("http://{}:{}/assets/{}", host, port, asset_path)
}

/// Public URL of an object in the remote bucket.
pub fn remote_url(bucket: &str, store_host: &str, key: &str) -> String {
    format!("http://{}.{}/{}", bucket, store_host, key)
}

/// Creates the assets root and any missing parents. Succeeds if it already exists.
pub async fn ensure_assets_dir(assets_root: &Path) -> io::Result<()> {
    tokio::fs::create_dir_all(assets_root).await
}

fn random_bytes() -> [u8; ASSET_NAME_ENTROPY_BYTES] {
    let mut buf = [0u8; ASSET_NAME_ENTROPY_BYTES];
    rand::rng().fill_bytes(&mut buf);
    buf
}

/// URL-safe base64 name for a thumbnail, e.g. `Zm9v...YmFy.png`.
pub fn thumbnail_filename(media_type: &str) -> String {
    format!(
        "{}{}",
        URL_SAFE_NO_PAD.encode(random_bytes()),
        media_type_to_ext(media_type)
    )
}

/// Hex name for a video, e.g. `3f9a...c1.mp4`.
pub fn video_filename(media_type: &str) -> String {
    format!("{}{}", hex::encode(random_bytes()), media_type_to_ext(media_type))
}

/// Remote key for a video: the classification label as a path prefix.
pub fn video_object_key(classification: &str, filename: &str) -> String {
    format!("{}/{}", classification, filename)
}
