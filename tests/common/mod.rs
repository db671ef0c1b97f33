//! Shared helpers for integration tests

use std::io::Cursor;

/// Build a `.tar.xz` archive in memory with the given root directory
pub fn tar_xz_archive(root: &str, files: &[(&str, &[u8])]) -> Vec<u8> {
    let encoder = xz2::write::XzEncoder::new(Vec::new(), 6);
    let mut builder = tar::Builder::new(encoder);

    for (name, content) in files {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o755);
        header.set_cksum();
        builder
            .append_data(&mut header, format!("{root}/{name}"), *content)
            .unwrap();
    }

    builder.into_inner().unwrap().finish().unwrap()
}

/// Build a `.zip` archive in memory with the given root directory
pub fn zip_archive(root: &str, files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();

    for (name, content) in files {
        writer.start_file(format!("{root}/{name}"), options).unwrap();
        std::io::Write::write_all(&mut writer, content).unwrap();
    }

    writer.finish().unwrap().into_inner()
}
