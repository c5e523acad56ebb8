/// Animal picture fetching
///
/// Downloads a picture and verifies it decodes before it ever reaches the
/// display region. The whole operation runs under a single timeout, so per
/// fetch exactly one of {success, failure, timeout} wins and the losing
/// paths simply never produce a completion.

use std::time::Duration;
use thiserror::Error;
use tokio::task;

/// Ways a picture load can fail. Payloads are owned strings so results
/// stay cloneable as message data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("timed out after {0} seconds")]
    TimedOut(u64),
}

/// Fetch and decode a picture, giving up after `timeout`.
///
/// Returns the raw encoded bytes on success; decoding is only used to
/// validate that the body really is an image.
pub async fn fetch_image(url: String, timeout: Duration) -> Result<Vec<u8>, FetchError> {
    match tokio::time::timeout(timeout, fetch_and_decode(url)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::TimedOut(timeout.as_secs())),
    }
}

async fn fetch_and_decode(url: String) -> Result<Vec<u8>, FetchError> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?
        .to_vec();

    // Spawn blocking because decoding is CPU-intensive
    let (bytes, width, height) = task::spawn_blocking(move || {
        let (width, height) = decode_check(&bytes)?;
        Ok::<_, FetchError>((bytes, width, height))
    })
    .await
    .map_err(|e| FetchError::Request(format!("task join error: {e}")))??;

    tracing::info!("fetched picture ({width}x{height}, {} bytes)", bytes.len());
    Ok(bytes)
}

/// Verify the body decodes as an image; returns its dimensions
fn decode_check(bytes: &[u8]) -> Result<(u32, u32), FetchError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok((decoded.width(), decoded.height()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_fail_the_decode_check() {
        let result = decode_check(b"definitely not an image");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn valid_png_passes_the_decode_check() {
        // 1x1 white pixel, encoded in-process so the fixture can't rot
        let mut bytes = Vec::new();
        image::RgbImage::from_pixel(1, 1, image::Rgb([255, 255, 255]))
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();

        assert_eq!(decode_check(&bytes).unwrap(), (1, 1));
    }

    #[tokio::test]
    async fn malformed_url_is_a_request_error() {
        let result = fetch_image("not a url".to_string(), Duration::from_secs(5)).await;
        assert!(matches!(result, Err(FetchError::Request(_))));
    }

    #[tokio::test]
    async fn expired_timer_wins_over_a_slow_fetch() {
        // TEST-NET-1 address never answers; the zero timeout fires first
        let result = fetch_image("http://192.0.2.1/pic.jpg".to_string(), Duration::ZERO).await;
        assert_eq!(result, Err(FetchError::TimedOut(0)));
    }
}
