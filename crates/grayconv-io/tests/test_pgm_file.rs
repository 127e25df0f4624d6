use grayconv_image::GrayImage;
use grayconv_io::pgm::{read_image_pgm, write_image_pgm};
use grayconv_io::IoError;

#[test]
fn test_write_read_pgm() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("ramp.pgm");

    let data = (0..64u8).map(|v| v * 4).collect();
    let image = GrayImage::new([8, 8].into(), data)?;
    write_image_pgm(&file_path, &image)?;

    let decoded = read_image_pgm(&file_path)?;
    assert_eq!(decoded.size(), image.size());
    assert_eq!(decoded.as_slice(), image.as_slice());
    Ok(())
}

#[test]
fn test_read_missing_file() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("missing.pgm");

    let res = read_image_pgm(&file_path);
    assert!(matches!(res, Err(IoError::FileDoesNotExist(p)) if p == file_path));
    Ok(())
}

#[test]
fn test_read_malformed_file() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("bad.pgm");
    std::fs::write(&file_path, "P5\nwide tall\n255\n")?;

    let res = read_image_pgm(&file_path);
    assert!(matches!(res, Err(IoError::InvalidDimensions(_))));
    Ok(())
}

#[test]
fn test_write_to_missing_directory() -> Result<(), IoError> {
    let tmp_dir = tempfile::tempdir()?;
    let file_path = tmp_dir.path().join("nope").join("out.pgm");

    let image = GrayImage::from_size_val([2, 2].into(), 1)?;
    let res = write_image_pgm(&file_path, &image);
    assert!(matches!(res, Err(IoError::FileError(_))));
    Ok(())
}
