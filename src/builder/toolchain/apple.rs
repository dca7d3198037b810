//! Apple SDK discovery.

use super::Prober;

/// Query the SDK root with `xcrun --show-sdk-path -sdk <sdk>`.
pub fn sdk_path(prober: &dyn Prober, sdk: &str) -> Option<String> {
    let path = prober.query("xcrun", &["--show-sdk-path", "-sdk", sdk]);
    if path.is_none() {
        tracing::warn!("could not determine the `{}` SDK path; omitting -isysroot", sdk);
    }
    path
}
