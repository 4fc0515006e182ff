use md5::{Digest, Md5};
use uuid::Uuid;

/// Derive the stable identifier of a repository from its path ("owner/name").
///
/// The identifier is the MD5 digest of the path bytes rendered as 32 lowercase
/// hex characters without dashes.
pub fn repo_path_to_uuid(path: &str) -> String {
    let digest = Md5::digest(path.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest);
    Uuid::from_bytes(bytes).simple().to_string()
}
