//! Checksum calculation for exported files

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Calculate SHA-256 checksum and size of a file, streaming its content
pub fn calculate_file_checksum(path: &Path) -> io::Result<(String, u64)> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 64 * 1024];
    let mut size = 0u64;

    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
        size += read as u64;
    }

    Ok((format!("{:x}", hasher.finalize()), size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_checksum() {
        let file = NamedTempFile::new().unwrap();
        let (checksum, size) = calculate_file_checksum(file.path()).unwrap();
        assert_eq!(
            checksum,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(size, 0);
    }

    #[test]
    fn test_file_checksum_size() {
        let content = b"; FBX 7.4.0 project file\n";
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();

        let (checksum, size) = calculate_file_checksum(file.path()).unwrap();
        assert_eq!(checksum.len(), 64);
        assert_ne!(
            checksum,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(size, content.len() as u64);
    }

    #[test]
    fn test_file_checksum_missing_file() {
        assert!(calculate_file_checksum(Path::new("missing.fbx")).is_err());
    }
}
