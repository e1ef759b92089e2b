// Array Emitter
//
// Writes the generated C header:
//
//     #ifndef <name>_
//     #define <name>_
//     static unsigned char <name>[<len>]={<b0>,<b1>,...,};
//     #endif
//
// Every byte is printed in decimal followed by a comma, the last one
// included. Bytes appear in file order with no escaping.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{EmbedError, EmbedResult};
use crate::guard::header_guard;
use crate::{log_debug, log_info};

/// Write the header for `bytes` under the array name `name`
///
/// `name` is written byte for byte, with no escaping or validation.
pub fn write_header<W: Write>(out: &mut W, name: &[u8], bytes: &[u8]) -> io::Result<()> {
    let guard = header_guard(name);

    out.write_all(b"#ifndef ")?;
    out.write_all(&guard)?;
    out.write_all(b"\n#define ")?;
    out.write_all(&guard)?;
    out.write_all(b"\nstatic unsigned char ")?;
    out.write_all(name)?;
    write!(out, "[{}]={{", bytes.len())?;
    for byte in bytes {
        write!(out, "{},", byte)?;
    }
    out.write_all(b"};\n#endif\n")
}

/// Create (or truncate) `path` and write the header into it
pub fn emit_file(path: &Path, name: &[u8], bytes: &[u8]) -> EmbedResult<()> {
    let file = File::create(path).map_err(|source| EmbedError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    log_debug!("emit", "opened {} for writing", path.display());

    let write_err = |source| EmbedError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut out = BufWriter::new(file);
    write_header(&mut out, name, bytes).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    log_info!(
        "emit",
        "wrote {}[{}] to {}",
        String::from_utf8_lossy(name),
        bytes.len(),
        path.display()
    );
    Ok(())
}

/// Recover the array name and bytes from text in exactly the emitted format
///
/// Returns `None` when the guard lines don't match the name, the declared
/// length disagrees with the entry count, or an entry isn't a decimal byte.
pub fn parse_header(text: &str) -> Option<(String, Vec<u8>)> {
    let mut lines = text.split('\n');

    let ifndef = lines.next()?.strip_prefix("#ifndef ")?;
    let define = lines.next()?.strip_prefix("#define ")?;
    let decl = lines.next()?.strip_prefix("static unsigned char ")?;
    if lines.next()? != "#endif" || lines.next()? != "" || lines.next().is_some() {
        return None;
    }

    let (name, rest) = decl.split_once('[')?;
    let (len, rest) = rest.split_once("]={")?;
    let body = rest.strip_suffix("};")?;

    let guard = header_guard(name.as_bytes());
    if ifndef.as_bytes() != guard || define.as_bytes() != guard {
        return None;
    }

    let bytes = if body.is_empty() {
        Vec::new()
    } else {
        body.strip_suffix(',')?
            .split(',')
            .map(parse_decimal_byte)
            .collect::<Option<Vec<u8>>>()?
    };

    if len.parse::<usize>().ok()? != bytes.len() {
        return None;
    }

    Some((name.to_string(), bytes))
}

fn parse_decimal_byte(entry: &str) -> Option<u8> {
    if entry.is_empty() || !entry.bytes().all(|c| c.is_ascii_digit()) {
        return None;
    }
    entry.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use indoc::indoc;

    fn render_header(name: &str, bytes: &[u8]) -> String {
        let mut out = Vec::new();
        write_header(&mut out, name.as_bytes(), bytes).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_header() {
        let text = render_header("logo", &[0, 1, 127, 128, 255]);
        assert_eq!(
            text,
            indoc! {"
                #ifndef logo_
                #define logo_
                static unsigned char logo[5]={0,1,127,128,255,};
                #endif
            "}
        );
    }

    #[test]
    fn test_render_empty() {
        let text = render_header("X", &[]);
        assert_eq!(
            text,
            indoc! {"
                #ifndef X_
                #define X_
                static unsigned char X[0]={};
                #endif
            "}
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let data: Vec<u8> = (0..=255).rev().collect();
        assert_eq!(render_header("table", &data), render_header("table", &data));
    }

    #[test]
    fn test_every_byte_value_round_trips() {
        let mut data: Vec<u8> = (0..=255).collect();
        data.extend_from_slice(&[0, 0, 10, 13, 0]);

        let text = render_header("all_bytes", &data);
        assert_matches!(
            parse_header(&text),
            Some((name, bytes)) => {
                assert_eq!(name, "all_bytes");
                assert_eq!(bytes, data);
            }
        );
    }

    #[test]
    fn test_entry_count_matches_length() {
        let data = vec![7u8; 1000];
        let text = render_header("sevens", &data);

        let decl = text.lines().nth(2).unwrap();
        let body = decl.split_once('{').unwrap().1;
        assert_eq!(body.matches(',').count(), data.len());
        assert!(decl.starts_with("static unsigned char sevens[1000]={"));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        // guard doesn't match name
        let text = "#ifndef a_\n#define a_\nstatic unsigned char b[1]={1,};\n#endif\n";
        assert_eq!(parse_header(text), None);

        // declared length disagrees
        let text = "#ifndef a_\n#define a_\nstatic unsigned char a[2]={1,};\n#endif\n";
        assert_eq!(parse_header(text), None);

        // out of range
        let text = "#ifndef a_\n#define a_\nstatic unsigned char a[1]={256,};\n#endif\n";
        assert_eq!(parse_header(text), None);

        // missing trailing comma
        let text = "#ifndef a_\n#define a_\nstatic unsigned char a[1]={1};\n#endif\n";
        assert_eq!(parse_header(text), None);

        // missing final newline
        let text = "#ifndef a_\n#define a_\nstatic unsigned char a[1]={1,};\n#endif";
        assert_eq!(parse_header(text), None);
    }

    #[test]
    fn test_name_bytes_written_verbatim() {
        let mut out = Vec::new();
        write_header(&mut out, b"odd\xff", &[1]).unwrap();
        assert_eq!(
            out,
            b"#ifndef odd\xff_\n#define odd\xff_\nstatic unsigned char odd\xff[1]={1,};\n#endif\n"
        );
    }

    #[test]
    fn test_emit_file_truncates_existing_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.h");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        emit_file(&path, b"blob", b"ab").unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, render_header("blob", b"ab"));
    }

    #[test]
    fn test_emit_file_unopenable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("blob.h");

        let err = emit_file(&path, b"blob", b"ab").unwrap_err();
        assert_matches!(&err, EmbedError::CreateOutput { path: p, .. } => assert_eq!(p, &path));
        assert_eq!(err.to_string(), format!("Could not open {} for writing", path.display()));
    }
}
