//! `multipart/form-data` decoding

use super::FormData;
use crate::entry::FileHandle;
use crate::error::Result;
use bytes::Bytes;
use futures_util::stream;

/// Decode a buffered multipart body into form entries
///
/// Parts with a filename become files; all other parts are read as text.
/// Part order is preserved.
pub async fn decode_multipart(content_type: &str, body: Bytes) -> Result<FormData> {
    let boundary = multer::parse_boundary(content_type)?;
    let body = stream::once(async move { Ok::<Bytes, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(body, boundary);

    let mut form = FormData::new();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().map(|mime| mime.to_string());
                let data = field.bytes().await?;
                form.append(name, FileHandle::new(file_name, content_type, data));
            }
            None => {
                let text = field.text().await?;
                form.append(name, text);
            }
        }
    }

    tracing::trace!(parts = form.len(), "Decoded multipart body");
    Ok(form)
}
