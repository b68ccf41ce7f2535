use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Succeeded,
    Failed,
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UploadStatus::Idle => return write!(f, ""),
            UploadStatus::Uploading => return write!(f, "Uploading..."),
            UploadStatus::Succeeded => return write!(f, "File uploaded and processed!"),
            UploadStatus::Failed => return write!(f, "Upload failed."),
        }
    }
}
