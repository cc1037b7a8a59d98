//! 文件读写适配：按字节读取（宽松 UTF-8 解码），整体覆盖写入

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    NotFound(PathBuf, io::Error),
    Io(PathBuf, io::Error),
}

impl FileError {
    fn classify(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf(), err),
            _ => FileError::Io(path.to_path_buf(), err),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FileError::NotFound(p, _) | FileError::Io(p, _) => p,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FileError::NotFound(..))
    }
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::NotFound(_, e) | FileError::Io(_, e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::NotFound(_, e) | FileError::Io(_, e) => Some(e),
        }
    }
}

/// 读取整个文件；非法 UTF-8 序列替换为 U+FFFD，不会因编码失败
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| FileError::classify(path, e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// 逐块写入（避免整文拷贝），返回写入的字节数
pub fn write_with<F>(path: &Path, write: F) -> Result<usize>
where
    F: FnOnce(&mut CountingWriter<fs::File>) -> io::Result<()>,
{
    let file = fs::File::create(path).map_err(|e| FileError::classify(path, e))?;
    let mut writer = CountingWriter::new(file);
    write(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| FileError::classify(path, e))?;
    Ok(writer.written())
}

/// 创建空文件（已存在则截断）
pub fn create_empty(path: &Path) -> Result<()> {
    fs::File::create(path)
        .map(|_| ())
        .map_err(|e| FileError::classify(path, e))
}

pub struct CountingWriter<W> {
    inner: W,
    written: usize,
}

impl<W: Write> CountingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
