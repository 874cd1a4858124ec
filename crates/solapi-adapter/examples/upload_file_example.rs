/*
[INPUT]:  SOLAPI_* environment variables, local image path from CLI args
[OUTPUT]: Uploaded file id and current MMS file listing
[POS]:    Examples - storage upload + listing
[UPDATE]: When storage endpoints change
*/

use solapi_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: upload an MMS image
///
/// Usage: upload_file_example <path-to-jpg>
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: upload_file_example <path-to-jpg>");
        return;
    };

    let client = match SolapiClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let request = UploadFileRequest::new(&path, FileType::Mms);
    match client.upload_file(request).await {
        Ok(file) => println!("✓ uploaded {} as {}", path, file.file_id),
        Err(e) => {
            eprintln!("Upload failed: {}", e);
            return;
        }
    }

    let query = FileListQuery {
        file_type: Some(FileType::Mms),
        ..FileListQuery::default()
    };
    match client.get_file_list(&query).await {
        Ok(list) => println!("{} MMS file(s) stored", list.file_list.len()),
        Err(e) => eprintln!("Listing failed: {}", e),
    }
}
