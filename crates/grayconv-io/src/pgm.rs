use std::path::Path;

use grayconv_image::{GrayImage, ImageSize};

use crate::error::IoError;

/// The format marker on the first line.
pub const MAGIC: &str = "P5";

/// The only supported maximum sample value.
pub const MAX_VALUE: &str = "255";

/// Read a text PGM image from a file.
///
/// # Arguments
///
/// * `file_path` - The path to the image file.
///
/// # Returns
///
/// A grayscale image.
///
/// # Errors
///
/// If the file does not exist, can not be read, or is malformed, an error is returned.
pub fn read_image_pgm(file_path: impl AsRef<Path>) -> Result<GrayImage, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    decode_image_pgm(&bytes)
}

/// Write a grayscale image to a file in the text PGM layout.
///
/// # Arguments
///
/// * `file_path` - The path to the image file.
/// * `image` - The image to write.
pub fn write_image_pgm(file_path: impl AsRef<Path>, image: &GrayImage) -> Result<(), IoError> {
    std::fs::write(file_path, encode_image_pgm(image))?;
    Ok(())
}

/// Decode a grayscale image from text PGM bytes.
///
/// The expected layout is the `P5` marker line, a `width height` line, the
/// `255` maximum value line, and then `height` lines of `width` whitespace
/// separated samples. Anything after the last row is ignored.
///
/// # Errors
///
/// If the data does not follow the layout, an error is returned and no image
/// is built.
///
/// # Examples
///
/// ```
/// use grayconv_io::pgm::decode_image_pgm;
///
/// let image = decode_image_pgm(b"P5\n2 2\n255\n1 2\n3 4\n").unwrap();
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.as_slice(), &[1, 2, 3, 4]);
/// ```
pub fn decode_image_pgm(bytes: &[u8]) -> Result<GrayImage, IoError> {
    let text = std::str::from_utf8(bytes)?;
    let mut lines = text.lines();
    // line numbers are 1-based
    let mut next_line = |line_no: usize| lines.next().ok_or(IoError::UnexpectedEof(line_no));

    let magic = next_line(1)?;
    if magic.trim_end() != MAGIC {
        return Err(IoError::InvalidMagic(magic.to_string()));
    }

    let dims = next_line(2)?;
    let size = parse_dimensions(dims)?;

    let max_value = next_line(3)?;
    if max_value.trim() != MAX_VALUE {
        return Err(IoError::InvalidMaxValue(max_value.to_string()));
    }

    // every sample takes at least one byte of input
    let mut data = Vec::with_capacity((size.width * size.height).min(bytes.len()));
    for row in 0..size.height {
        let line = next_line(row + 4)?;
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != size.width {
            return Err(IoError::InvalidRowLength {
                row,
                expected: size.width,
                found: tokens.len(),
            });
        }

        for (col, token) in tokens.into_iter().enumerate() {
            let sample = token.parse::<u8>().map_err(|_| IoError::InvalidSample {
                row,
                col,
                token: token.to_string(),
            })?;
            data.push(sample);
        }
    }

    log::debug!("decoded pgm image of {}", size);

    Ok(GrayImage::new(size, data)?)
}

/// Encode a grayscale image into text PGM bytes.
///
/// Each row is written on its own line with single spaces between samples.
pub fn encode_image_pgm(image: &GrayImage) -> Vec<u8> {
    let mut out = format!(
        "{MAGIC}\n{} {}\n{MAX_VALUE}\n",
        image.width(),
        image.height()
    );

    for row in image.as_slice().chunks_exact(image.width()) {
        let line = row
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }

    out.into_bytes()
}

fn parse_dimensions(line: &str) -> Result<ImageSize, IoError> {
    let invalid = || IoError::InvalidDimensions(line.to_string());

    let values = line
        .split_whitespace()
        .map(|token| token.parse::<usize>().map_err(|_| invalid()))
        .collect::<Result<Vec<_>, _>>()?;

    match values.as_slice() {
        &[width, height] if width > 0 && height > 0 => {
            width.checked_mul(height).ok_or_else(invalid)?;
            Ok(ImageSize { width, height })
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pgm() -> Result<(), IoError> {
        let image = decode_image_pgm(b"P5\n3 2\n255\n0 1 255\n10  20\t30\n")?;
        assert_eq!(image.width(), 3);
        assert_eq!(image.height(), 2);
        assert_eq!(image.as_slice(), &[0, 1, 255, 10, 20, 30]);
        Ok(())
    }

    #[test]
    fn test_decode_pgm_crlf_and_trailing_content() -> Result<(), IoError> {
        let image = decode_image_pgm(b"P5\r\n2 1\r\n255\r\n7 8 \r\n\r\n# ignored\n")?;
        assert_eq!(image.as_slice(), &[7, 8]);
        Ok(())
    }

    #[test]
    fn test_encode_pgm() -> Result<(), IoError> {
        let image = GrayImage::new([3, 2].into(), vec![0, 1, 255, 10, 20, 30])?;
        let bytes = encode_image_pgm(&image);
        assert_eq!(bytes, b"P5\n3 2\n255\n0 1 255\n10 20 30\n".to_vec());
        Ok(())
    }

    #[test]
    fn test_encode_decode_pgm() -> Result<(), IoError> {
        let data = (0..=255u8).chain(0..=43u8).collect::<Vec<_>>();
        let image = GrayImage::new([20, 15].into(), data)?;
        let decoded = decode_image_pgm(&encode_image_pgm(&image))?;
        assert_eq!(decoded, image);
        Ok(())
    }

    #[test]
    fn test_decode_invalid_magic() {
        let res = decode_image_pgm(b"P2\n1 1\n255\n0\n");
        assert!(matches!(res, Err(IoError::InvalidMagic(m)) if m == "P2"));
    }

    #[test]
    fn test_decode_invalid_dimensions() {
        for dims in ["a b", "3", "3 2 1", "0 2", "3 -2", ""] {
            let text = format!("P5\n{dims}\n255\n");
            let res = decode_image_pgm(text.as_bytes());
            assert!(
                matches!(res, Err(IoError::InvalidDimensions(_))),
                "{dims:?}: {res:?}"
            );
        }
    }

    #[test]
    fn test_decode_invalid_max_value() {
        let res = decode_image_pgm(b"P5\n1 1\n65535\n0\n");
        assert!(matches!(res, Err(IoError::InvalidMaxValue(_))));
    }

    #[test]
    fn test_decode_invalid_row_length() {
        let res = decode_image_pgm(b"P5\n3 2\n255\n1 2 3\n4 5\n");
        assert!(matches!(
            res,
            Err(IoError::InvalidRowLength {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_decode_invalid_sample() {
        for token in ["256", "-1", "x", "1.5"] {
            let text = format!("P5\n2 1\n255\n0 {token}\n");
            let res = decode_image_pgm(text.as_bytes());
            assert!(
                matches!(&res, Err(IoError::InvalidSample { row: 0, col: 1, token: t }) if t == token),
                "{token}: {res:?}"
            );
        }
    }

    #[test]
    fn test_decode_truncated() {
        assert!(matches!(decode_image_pgm(b""), Err(IoError::UnexpectedEof(1))));
        assert!(matches!(
            decode_image_pgm(b"P5\n"),
            Err(IoError::UnexpectedEof(2))
        ));
        assert!(matches!(
            decode_image_pgm(b"P5\n2 2\n"),
            Err(IoError::UnexpectedEof(3))
        ));
        assert!(matches!(
            decode_image_pgm(b"P5\n2 2\n255\n1 2\n"),
            Err(IoError::UnexpectedEof(5))
        ));
    }

    #[test]
    fn test_decode_huge_dimensions_truncated() {
        assert!(matches!(
            decode_image_pgm(b"P5\n2 4611686018427387904\n255\n"),
            Err(IoError::UnexpectedEof(4))
        ));
    }

    #[test]
    fn test_decode_invalid_text() {
        let res = decode_image_pgm(&[0xff, 0xfe, b'\n']);
        assert!(matches!(res, Err(IoError::InvalidText(_))));
    }
}
