use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Raw text storage behind the YAML config and stats files.
pub trait ContentProvider {
    fn get_content(&self) -> Result<Option<String>, String>;
    fn set_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentProvider {
    file_path: PathBuf,
}

impl FileContentProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ContentProvider for FileContentProvider {
    fn get_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }

    fn set_content(&self, content: &str) -> Result<(), String> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }
        std::fs::write(&self.file_path, content)
            .map_err(|e| format!("Failed to write {}: {}", self.file_path.display(), e))
    }
}

#[derive(Default)]
pub struct MemoryContentProvider {
    content: Mutex<Option<String>>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
        }
    }
}

impl ContentProvider for MemoryContentProvider {
    fn get_content(&self) -> Result<Option<String>, String> {
        let guard = self
            .content
            .lock()
            .map_err(|_| "Memory content lock poisoned".to_string())?;
        Ok(guard.clone())
    }

    fn set_content(&self, content: &str) -> Result<(), String> {
        let mut guard = self
            .content
            .lock()
            .map_err(|_| "Memory content lock poisoned".to_string())?;
        *guard = Some(content.to_string());
        Ok(())
    }
}
