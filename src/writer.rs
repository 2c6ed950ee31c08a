use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

use crate::errors::SelectError;
use crate::record::Record;

const INDENT: &[u8] = b"    ";

// Pretty printer with 4-space indent that keeps the output pure ASCII:
// anything outside ASCII becomes a lowercase \uXXXX escape (surrogate pairs
// above the BMP). Layout is delegated to PrettyFormatter.
struct AsciiPretty<'a> {
    inner: PrettyFormatter<'a>,
}

impl<'a> AsciiPretty<'a> {
    fn new() -> Self {
        AsciiPretty {
            inner: PrettyFormatter::with_indent(INDENT),
        }
    }
}

impl Formatter for AsciiPretty<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.begin_array(w)
    }

    fn end_array<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.end_array(w)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_array_value(w, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.end_array_value(w)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.begin_object(w)
    }

    fn end_object<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.end_object(w)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, w: &mut W, first: bool) -> io::Result<()> {
        self.inner.begin_object_key(w, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(w)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, w: &mut W) -> io::Result<()> {
        self.inner.end_object_value(w)
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, w: &mut W, fragment: &str) -> io::Result<()> {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            w.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(w, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        w.write_all(fragment[start..].as_bytes())
    }
}

fn serialize_into<W: Write>(writer: W, records: &[Record]) -> serde_json::Result<()> {
    let mut ser = Serializer::with_formatter(writer, AsciiPretty::new());
    records.serialize(&mut ser)
}

// Render records exactly as `write_records` lays them out on disk
pub fn to_json_string(records: &[Record]) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    serialize_into(&mut buf, records)?;
    // output is pure ASCII, so bytes map 1:1 onto chars
    Ok(buf.into_iter().map(char::from).collect())
}

/// Write `records` to `path` as a 4-space indented JSON array, replacing any
/// existing content. Each object carries exactly the fields set on its record.
pub fn write_records(path: &Path, records: &[Record]) -> Result<(), SelectError> {
    let io_err = |source| SelectError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serialize_into(&mut writer, records).map_err(|source| SelectError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn empty_sequence_is_empty_array() {
        assert_eq!(to_json_string(&[]).unwrap(), "[]");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        write_records(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn four_space_layout() {
        let recs = vec![Record::tagged("Hi\n\n###\n\n", &["Clickbait", "Potentially Unsafe"])];
        let expected = concat!(
            "[\n",
            "    {\n",
            "        \"prompt\": \"Hi\\n\\n###\\n\\n\",\n",
            "        \"tags\": [\n",
            "            \"Clickbait\",\n",
            "            \"Potentially Unsafe\"\n",
            "        ]\n",
            "    }\n",
            "]"
        );
        assert_eq!(to_json_string(&recs).unwrap(), expected);
    }

    #[test]
    fn non_ascii_is_escaped() {
        let recs = vec![Record::completed("a – b 😀", &["é"])];
        let out = to_json_string(&recs).unwrap();
        assert!(out.is_ascii());
        assert!(out.contains(r#""a \u2013 b \ud83d\ude00""#));
        assert!(out.contains(r#""\u00e9""#));

        let back: Vec<Record> = serde_json::from_str(&out).unwrap();
        assert_eq!(back, recs);
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale content that is much longer than the new document").unwrap();

        write_records(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("out.json");
        match write_records(&path, &[]) {
            Err(SelectError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
