use std::path::PathBuf;
use std::string::FromUtf8Error;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A file shuttled over the bridge
///
/// The host reads and writes raw bytes; they cross the bridge base64
/// encoded next to the path they came from (or should be written to).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcFile {
    pub path: PathBuf,
    pub file: Base64File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Base64File {
    pub unencoded_size: usize,
    pub base64: String,
}

#[derive(Debug, Error)]
pub enum FileError {
    #[error("base64 decode failed: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("file is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}

impl Base64File {
    /// Encode raw bytes for a `save` payload
    pub fn encode(bytes: &[u8]) -> Self {
        Self {
            unencoded_size: bytes.len(),
            base64: STANDARD.encode(bytes),
        }
    }

    /// Decode into raw bytes, pre-allocating `unencoded_size`
    pub fn decode(self) -> Result<Vec<u8>, FileError> {
        let mut bytes = Vec::with_capacity(self.unencoded_size);
        STANDARD.decode_vec(self.base64, &mut bytes)?;
        Ok(bytes)
    }

    /// Decode a text file (database files are UTF-8)
    pub fn into_string(self) -> Result<String, FileError> {
        Ok(String::from_utf8(self.decode()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_inverse() {
        let bytes = b"\x00\x01save data\xff";
        let encoded = Base64File::encode(bytes);
        assert_eq!(encoded.unencoded_size, bytes.len());
        assert_eq!(encoded.decode().unwrap(), bytes);
    }

    #[test]
    fn test_into_string() {
        let encoded = Base64File::encode("plot_db contents".as_bytes());
        assert_eq!(encoded.into_string().unwrap(), "plot_db contents");
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let file = Base64File {
            unencoded_size: 4,
            base64: String::from("not base64!"),
        };
        assert!(matches!(file.decode(), Err(FileError::Decode(_))));
    }

    #[test]
    fn test_rpc_file_wire_shape() {
        let file = RpcFile {
            path: PathBuf::from("a.sav"),
            file: Base64File {
                unencoded_size: 1024,
                base64: String::from("AAAA"),
            },
        };
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "path": "a.sav",
                "file": { "unencoded_size": 1024, "base64": "AAAA" }
            })
        );
    }
}
