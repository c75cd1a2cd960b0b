use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The embeddable representation of a selected file: a base64 data URI,
/// treated as opaque everywhere downstream.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EncodedImage {
    pub payload: String,
    pub filename: String,
}

/// The file-encoding collaborator. Encoding runs off the reducer; the
/// result comes back through the form's completion action.
#[async_trait]
pub trait FileEncoder: Send + Sync {
    async fn encode(&self, path: &Path) -> Result<EncodedImage, String>;
}

/// Production encoder: reads the file from disk and wraps the bytes
/// into a `data:<mime>;base64,...` URI.
#[derive(Default)]
pub struct Base64Encoder;

#[async_trait]
impl FileEncoder for Base64Encoder {
    async fn encode(&self, path: &Path) -> Result<EncodedImage, String> {
        let Some(mime) = mime_for(path) else {
            return Err(format!("Unsupported file type: {}", path.display()));
        };
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| format!("Could not read {}: {e:?}", path.display()))?;

        use base64::{engine::general_purpose, Engine as _};
        let encoded = general_purpose::STANDARD.encode(bytes);

        let filename = path
            .file_name()
            .and_then(|e| e.to_str().map(|e| e.to_string()))
            .unwrap_or("unknown".to_string());

        Ok(EncodedImage {
            payload: format!("data:{mime};base64,{encoded}"),
            filename,
        })
    }
}

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension().and_then(|e| e.to_str())?;
    match ext.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn encodes_a_file_into_a_data_uri() {
        let path = std::env::temp_dir().join("postdesk-encoding-test.png");
        std::fs::write(&path, [137u8, 80, 78, 71]).unwrap();

        let image = Base64Encoder.encode(&path).await.unwrap();
        assert!(image.payload.starts_with("data:image/png;base64,"));
        assert_eq!(image.filename, "postdesk-encoding-test.png");

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn rejects_unsupported_extensions() {
        let path = std::env::temp_dir().join("postdesk-encoding-test.txt");
        std::fs::write(&path, b"hello").unwrap();

        let result = Base64Encoder.encode(&path).await;
        assert!(result.is_err());

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn reports_missing_files_as_errors() {
        let path = std::env::temp_dir().join("postdesk-does-not-exist.png");
        let result = Base64Encoder.encode(&path).await;
        assert!(result.unwrap_err().contains("Could not read"));
    }
}
