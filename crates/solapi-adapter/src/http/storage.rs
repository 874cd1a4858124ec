/*
[INPUT]:  Local file paths, file type, list filters
[OUTPUT]: Stored file metadata and file listings
[POS]:    HTTP layer - storage endpoints (base64 upload, listing)
[UPDATE]: When adding storage endpoints or changing upload encoding
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use tracing::debug;

use crate::http::{Result, SolapiClient, SolapiError};
use crate::types::{File, FileList, FileListQuery, UploadFileBody, UploadFileRequest};

const FILES_RESOURCE: &str = "storage/v1/files";

impl SolapiClient {
    /// Upload a local file
    ///
    /// POST storage/v1/files
    /// The file is read before any request is made; contents travel base64-encoded.
    pub async fn upload_file(&self, req: UploadFileRequest) -> Result<File> {
        let content = tokio::fs::read(&req.path)
            .await
            .map_err(|source| SolapiError::File {
                path: req.path.clone(),
                source,
            })?;
        debug!(path = %req.path.display(), bytes = content.len(), "uploading file");

        let body = UploadFileBody {
            file: BASE64.encode(&content),
            file_type: req.file_type,
            name: req.name,
            link: req.link,
        };
        self.post(FILES_RESOURCE, &body).await
    }

    /// List stored files
    ///
    /// GET storage/v1/files?type={type}&startKey={startKey}&limit={limit}
    pub async fn get_file_list(&self, query: &FileListQuery) -> Result<FileList> {
        self.get(FILES_RESOURCE, query).await
    }
}
