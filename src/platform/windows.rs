use std::path::PathBuf;
use winapi::um::fileapi::GetDriveTypeW;

// Drive type code from the Windows API meaning "removable media".
const DRIVE_REMOVABLE: u32 = 2;

pub(crate) fn removable_drive_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();

    for letter in b'A'..=b'Z' {
        let root = format!("{}:\\", letter as char);
        let root_wide: Vec<u16> = root.encode_utf16().chain(std::iter::once(0)).collect();

        let drive_type = unsafe { GetDriveTypeW(root_wide.as_ptr()) };
        if drive_type == DRIVE_REMOVABLE {
            roots.push(PathBuf::from(root));
        }
    }

    roots
}
