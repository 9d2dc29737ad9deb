//! Remote wallpaper retrieval
//!
//! Every call goes to the network. Nothing is cached between calls.

use crate::error::FetchError;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::borrow::Cow;
use std::io::Cursor;
use std::time::Duration;

/// Raw bytes of a fetched wallpaper plus the decoded image.
pub struct FetchedImage {
    pub bytes: Vec<u8>,
    pub image: DynamicImage,
}

impl FetchedImage {
    /// Decode `bytes`, keeping them for later writes.
    pub fn decode(bytes: Vec<u8>) -> Result<Self, FetchError> {
        let image = image::load_from_memory(&bytes)?;
        Ok(Self { bytes, image })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// JPEG bytes for a `.jpg` file. JPEG input is passed through untouched.
    pub fn jpeg_bytes(&self) -> Result<Cow<'_, [u8]>, FetchError> {
        if matches!(image::guess_format(&self.bytes), Ok(ImageFormat::Jpeg)) {
            return Ok(Cow::Borrowed(&self.bytes));
        }
        let mut out = Cursor::new(Vec::new());
        self.image
            .to_rgb8()
            .write_to(&mut out, ImageFormat::Jpeg)
            .map_err(FetchError::Encode)?;
        Ok(Cow::Owned(out.into_inner()))
    }
}

/// Anything that can turn a wallpaper URL into image bytes.
pub trait ImageSource {
    fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError>;
}

/// Blocking HTTP fetcher. No retries; failures surface immediately.
pub struct ImageFetcher {
    client: reqwest::blocking::Client,
}

impl ImageFetcher {
    /// Create a fetcher with the given connect and overall timeouts.
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .user_agent(format!("wallbrowse/{}", env!("CARGO_PKG_VERSION")))
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("falling back to default HTTP client: {}", e);
                reqwest::blocking::Client::new()
            });
        Self::with_client(client)
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl ImageSource for ImageFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedImage, FetchError> {
        tracing::debug!(url, "fetching wallpaper");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, %status, "wallpaper fetch rejected");
            return Err(FetchError::Status(status));
        }

        let bytes = response.bytes()?.to_vec();
        let fetched = FetchedImage::decode(bytes)?;
        tracing::debug!(url, size = fetched.bytes.len(), "wallpaper fetched");
        Ok(fetched)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::{Cursor, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Encode a tiny PNG for serving and fake sources.
    pub(crate) fn png_bytes() -> Vec<u8> {
        let img = image::RgbImage::from_fn(4, 3, |x, _| image::Rgb([x as u8 * 60, 0, 200]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    /// Serve exactly one HTTP response on a local port and return its URL.
    fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");

        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while let Ok(n) = stream.read(&mut buf) {
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();
        });

        format!("http://{}/wallpaper.png", addr)
    }

    fn local_fetcher() -> ImageFetcher {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("client");
        ImageFetcher::with_client(client)
    }

    #[test]
    fn fetch_returns_bytes_and_decoded_image() {
        let body = png_bytes();
        let url = serve_once("200 OK", body.clone());

        let fetched = local_fetcher().fetch(&url).expect("fetch");
        assert_eq!(fetched.bytes, body);
        assert_eq!(fetched.dimensions(), (4, 3));
    }

    #[test]
    fn non_success_status_is_reported() {
        let url = serve_once("404 Not Found", b"missing".to_vec());

        match local_fetcher().fetch(&url) {
            Err(FetchError::Status(status)) => assert_eq!(status.as_u16(), 404),
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("404 must not succeed"),
        }
    }

    #[test]
    fn non_image_body_is_a_decode_error() {
        let url = serve_once("200 OK", b"<html>not an image</html>".to_vec());

        assert!(matches!(
            local_fetcher().fetch(&url),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn unreachable_host_is_a_request_error() {
        // Bind then drop to get a port with nothing listening.
        let port = TcpListener::bind("127.0.0.1:0")
            .and_then(|l| l.local_addr())
            .expect("bind")
            .port();
        let url = format!("http://127.0.0.1:{port}/x.png");

        assert!(matches!(
            local_fetcher().fetch(&url),
            Err(FetchError::Request(_))
        ));
    }

    #[test]
    fn png_is_reencoded_for_jpg_files() {
        let fetched = FetchedImage::decode(png_bytes()).expect("decode");

        let jpeg = fetched.jpeg_bytes().expect("encode");
        assert!(matches!(jpeg, Cow::Owned(_)));
        assert_eq!(image::guess_format(&jpeg).expect("format"), ImageFormat::Jpeg);
        assert_eq!(image::load_from_memory(&jpeg).expect("reload").dimensions(), (4, 3));
    }

    #[test]
    fn jpeg_passes_through_unchanged() {
        let png = FetchedImage::decode(png_bytes()).expect("decode");
        let original = png.jpeg_bytes().expect("encode").into_owned();

        let fetched = FetchedImage::decode(original.clone()).expect("decode jpeg");
        let jpeg = fetched.jpeg_bytes().expect("pass through");
        assert!(matches!(jpeg, Cow::Borrowed(_)));
        assert_eq!(jpeg.as_ref(), original.as_slice());
    }
}
