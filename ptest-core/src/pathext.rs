//! File-system probes backing the file test predicates.

use std::fs::Metadata;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// Predicates on paths beyond what `std::path::Path` exposes, built on
/// stat(2) and access(2). A stat failure of any kind reads as "no".
pub(crate) trait PathExt {
    /// Whether the current process may read the file.
    fn readable(&self) -> bool;
    /// Whether the current process may write the file.
    fn writable(&self) -> bool;
    /// Whether the current process may execute (or search) the file.
    fn executable(&self) -> bool;
    /// Whether the path names an existing block device.
    fn is_block_device(&self) -> bool;
    /// Whether the path names an existing character device.
    fn is_char_device(&self) -> bool;
    /// Whether the path names an existing FIFO.
    fn is_fifo(&self) -> bool;
    /// Whether the path names an existing socket.
    fn is_socket(&self) -> bool;
    /// Whether the path names an existing file with the setgid bit set.
    fn is_setgid(&self) -> bool;
    /// Whether the path names an existing file with the setuid bit set.
    fn is_setuid(&self) -> bool;
    /// Whether the path names an existing file with the sticky bit set.
    fn has_sticky_bit(&self) -> bool;
    /// Whether the path names an existing file modified since it was last read.
    fn modified_since_read(&self) -> bool;
    /// The file's device and inode numbers, if it exists.
    fn device_and_inode(&self) -> Option<(u64, u64)>;
    /// The file's modification time as nanoseconds since the epoch, if it
    /// exists.
    fn modified_nanos(&self) -> Option<i128>;
}

impl PathExt for Path {
    fn readable(&self) -> bool {
        nix::unistd::access(self, nix::unistd::AccessFlags::R_OK).is_ok()
    }

    fn writable(&self) -> bool {
        nix::unistd::access(self, nix::unistd::AccessFlags::W_OK).is_ok()
    }

    fn executable(&self) -> bool {
        nix::unistd::access(self, nix::unistd::AccessFlags::X_OK).is_ok()
    }

    fn is_block_device(&self) -> bool {
        stat(self).is_some_and(|md| md.file_type().is_block_device())
    }

    fn is_char_device(&self) -> bool {
        stat(self).is_some_and(|md| md.file_type().is_char_device())
    }

    fn is_fifo(&self) -> bool {
        stat(self).is_some_and(|md| md.file_type().is_fifo())
    }

    fn is_socket(&self) -> bool {
        stat(self).is_some_and(|md| md.file_type().is_socket())
    }

    fn is_setgid(&self) -> bool {
        stat(self).is_some_and(|md| md.mode() & S_ISGID != 0)
    }

    fn is_setuid(&self) -> bool {
        stat(self).is_some_and(|md| md.mode() & S_ISUID != 0)
    }

    fn has_sticky_bit(&self) -> bool {
        stat(self).is_some_and(|md| md.mode() & S_ISVTX != 0)
    }

    fn modified_since_read(&self) -> bool {
        stat(self).is_some_and(|md| {
            (md.mtime(), md.mtime_nsec()) > (md.atime(), md.atime_nsec())
        })
    }

    fn device_and_inode(&self) -> Option<(u64, u64)> {
        stat(self).map(|md| (md.dev(), md.ino()))
    }

    fn modified_nanos(&self) -> Option<i128> {
        stat(self).map(|md| i128::from(md.mtime()) * 1_000_000_000 + i128::from(md.mtime_nsec()))
    }
}

fn stat(path: &Path) -> Option<Metadata> {
    path.metadata().ok()
}
