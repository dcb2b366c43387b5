//! In-memory readers for the compressed bulk-download payloads.

use std::io::{Cursor, Read};

use flate2::read::GzDecoder;
use tracing::debug;
use zip::ZipArchive;

use crate::error::ReactomeError;

/// Member names of a gzip-compressed tar archive, in archive order.
pub(crate) fn tar_gz_member_names(data: &[u8]) -> Result<Vec<String>, ReactomeError> {
    let decoder = GzDecoder::new(data);
    let mut archive = tar::Archive::new(decoder);
    let mut names = Vec::new();
    for entry in archive
        .entries()
        .map_err(|err| ReactomeError::Archive(err.to_string()))?
    {
        let entry = entry.map_err(|err| ReactomeError::Archive(err.to_string()))?;
        let path = entry
            .path()
            .map_err(|err| ReactomeError::Archive(err.to_string()))?;
        names.push(path.to_string_lossy().into_owned());
    }
    debug!(members = names.len(), "listed tar archive members");
    Ok(names)
}

/// Decoded text lines of every zip member, one list per member, in archive
/// order. Single pass over the buffer; directory entries are skipped.
pub(crate) fn zip_member_lines(data: &[u8]) -> Result<Vec<Vec<String>>, ReactomeError> {
    let mut archive =
        ZipArchive::new(Cursor::new(data)).map_err(|err| ReactomeError::Archive(err.to_string()))?;
    let mut members = Vec::new();
    for index in 0..archive.len() {
        let mut file = archive
            .by_index(index)
            .map_err(|err| ReactomeError::Archive(err.to_string()))?;
        if file.is_dir() {
            continue;
        }
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|err| ReactomeError::Archive(err.to_string()))?;
        let text = String::from_utf8_lossy(&contents);
        members.push(text.lines().map(|line| line.to_string()).collect());
    }
    debug!(members = members.len(), "read zip archive members");
    Ok(members)
}

/// Tab-split fields of each line of the first zip member only.
pub(crate) fn zip_first_member_fields(data: &[u8]) -> Result<Vec<Vec<String>>, ReactomeError> {
    let first = zip_member_lines(data)?
        .into_iter()
        .next()
        .ok_or_else(|| ReactomeError::Archive("zip archive has no members".to_string()))?;
    Ok(first
        .iter()
        .map(|line| line.split('\t').map(|field| field.to_string()).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use zip::write::SimpleFileOptions;

    use super::*;

    fn tar_gz_with(members: &[(&str, &str)]) -> Vec<u8> {
        let encoder = GzEncoder::new(Vec::new(), Compression::default());
        let mut builder = tar::Builder::new(encoder);
        for (name, content) in members {
            let mut header = tar::Header::new_gnu();
            header.set_size(content.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder
                .append_data(&mut header, name, content.as_bytes())
                .unwrap();
        }
        builder.into_inner().unwrap().finish().unwrap()
    }

    fn zip_with(members: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in members {
            writer
                .start_file(name.to_string(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn tar_member_names_in_order() {
        let data = tar_gz_with(&[("R-HSA-1.sbgn", "a"), ("R-HSA-2.sbgn", "b")]);
        let names = tar_gz_member_names(&data).unwrap();
        assert_eq!(names, vec!["R-HSA-1.sbgn", "R-HSA-2.sbgn"]);
    }

    #[test]
    fn tar_rejects_garbage() {
        let err = tar_gz_member_names(b"not a tarball").unwrap_err();
        assert_matches!(err, ReactomeError::Archive(_));
    }

    #[test]
    fn zip_lines_per_member() {
        let data = zip_with(&[("first.txt", "a\nb\n"), ("second.txt", "c\n")]);
        let members = zip_member_lines(&data).unwrap();
        assert_eq!(members, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn first_member_fields_ignores_later_members() {
        let data = zip_with(&[("first.gmt", "x\ty\tz\n"), ("second.gmt", "ignored\n")]);
        let fields = zip_first_member_fields(&data).unwrap();
        assert_eq!(fields, vec![vec!["x", "y", "z"]]);
    }

    #[test]
    fn empty_zip_is_an_error() {
        let data = zip_with(&[]);
        let err = zip_first_member_fields(&data).unwrap_err();
        assert_matches!(err, ReactomeError::Archive(_));
    }
}
