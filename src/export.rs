use crate::error::SketchResult;

/// File name used for exported images unless configured otherwise
pub const DEFAULT_EXPORT_NAME: &str = "image.png";

/// Somewhere an exported image can be handed to the user
pub trait DownloadTarget {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> SketchResult<()>;
}

/// Writes downloads into a directory on disk
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileDownload {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileDownload {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DownloadTarget for FileDownload {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> SketchResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes)?;
        log::info!("Saved {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

/// Triggers a browser download through a temporary `<a download>` link
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Default)]
pub struct BrowserDownload;

#[cfg(target_arch = "wasm32")]
impl DownloadTarget for BrowserDownload {
    fn deliver(&mut self, file_name: &str, bytes: &[u8]) -> SketchResult<()> {
        use crate::error::SketchError;
        use wasm_bindgen::JsCast;

        let js_err = |e: wasm_bindgen::JsValue| SketchError::Download(format!("{e:?}"));

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SketchError::Download("no document".to_owned()))?;

        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("image/png");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let link = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| SketchError::Download("not an anchor element".to_owned()))?;
        link.set_href(&url);
        link.set_download(file_name);
        link.click();

        web_sys::Url::revoke_object_url(&url).ok();
        log::info!("Downloaded {} ({} bytes)", file_name, bytes.len());
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_file_download_writes_bytes() {
        let dir = std::env::temp_dir().join(format!("eframe_sketch_export_{}", std::process::id()));
        let mut target = FileDownload::new(&dir);
        target.deliver(DEFAULT_EXPORT_NAME, b"png bytes").unwrap();

        let written = std::fs::read(dir.join(DEFAULT_EXPORT_NAME)).unwrap();
        assert_eq!(written, b"png bytes");
        std::fs::remove_dir_all(&dir).ok();
    }
}
