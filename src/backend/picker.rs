use super::FilePicker;
use iced::futures::future::{BoxFuture, FutureExt};
use std::path::PathBuf;

const EBOOK_EXTENSIONS: [&str; 5] = ["epub", "mobi", "azw3", "azw", "pdf"];

/// Native open dialog filtered to ebook files.
pub struct DialogFilePicker;

impl FilePicker for DialogFilePicker {
    fn pick_file(&self) -> BoxFuture<'static, Option<PathBuf>> {
        async {
            rfd::AsyncFileDialog::new()
                .set_title("Select a book")
                .add_filter("Ebooks", &EBOOK_EXTENSIONS)
                .add_filter("All files", &["*"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        }
        .boxed()
    }
}
