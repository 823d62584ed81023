use std::path::{Path, PathBuf};

use crate::error::{Error, IoError};

use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncWriteExt},
};

/// Opens `path` and reads it to the end.
pub async fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>, Error> {
    let mut file = File::open(path)
        .await
        .map_err(|error| IoError::File(error.kind()))?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .await
        .map_err(|error| IoError::Reader(error.kind()))?;

    Ok(buffer)
}

/// Destination of the rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    File(PathBuf),
}

impl Sink {
    pub fn new(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Sink::File(path.to_path_buf()),
            None => Sink::Stdout,
        }
    }

    pub async fn write(&self, bytes: &[u8]) -> Result<(), Error> {
        match self {
            Sink::Stdout => {
                let mut stdout = tokio::io::stdout();
                stdout
                    .write_all(bytes)
                    .await
                    .map_err(|error| IoError::Writer(error.kind()))?;
                stdout
                    .flush()
                    .await
                    .map_err(|error| IoError::Writer(error.kind()))?;
            }
            Sink::File(path) => {
                tokio::fs::write(path, bytes)
                    .await
                    .map_err(|error| IoError::File(error.kind()))?;
            }
        }

        Ok(())
    }
}
