use std::cell::Cell;

use chanfilter::filter::{
    apply_green_channel_filter, apply_green_channel_filter_with, green_channel_filter,
    FilterConfig, FilterError,
};
use chanfilter::image::{Image, ImageSize};
use chanfilter::io::{read_image_any_bgr8, write_image_any_bgr8, IoError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn gradient(width: usize, height: usize) -> Result<Image<u8, 3>, Box<dyn std::error::Error>> {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / width.max(1)) as u8);
            data.push(((x + y) * 13 % 256) as u8);
            data.push((y * 255 / height.max(1)) as u8);
        }
    }
    Ok(Image::new(ImageSize { width, height }, data)?)
}

#[test]
fn filter_png_to_png() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("input.png");
    let output = tmp_dir.path().join("output.png");

    let image = gradient(32, 24)?;
    write_image_any_bgr8(&input, &image)?;

    let report = apply_green_channel_filter(&input, &output)?;
    assert_eq!(
        report.input_size,
        ImageSize {
            width: 32,
            height: 24
        }
    );
    assert_eq!(report.output_path, output);
    assert!(output.exists());

    // PNG is lossless so the file holds exactly the masked samples
    let written = read_image_any_bgr8(&output)?;
    assert_eq!(written.as_image(), &green_channel_filter(&image)?);

    for pixel in written.as_slice().chunks_exact(3) {
        assert_eq!(pixel[0], 0);
        assert_eq!(pixel[2], 0);
    }

    Ok(())
}

#[test]
fn filter_to_bmp_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("input.png");
    let output = tmp_dir.path().join("output.bmp");

    let image = gradient(5, 3)?;
    write_image_any_bgr8(&input, &image)?;
    apply_green_channel_filter(&input, &output)?;

    let written = read_image_any_bgr8(&output)?;
    assert_eq!(written.as_image(), &green_channel_filter(&image)?);

    Ok(())
}

#[test]
fn filter_jpeg_input() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("input.jpg");
    let output = tmp_dir.path().join("output.png");

    write_image_any_bgr8(&input, &gradient(16, 16)?)?;
    let report = apply_green_channel_filter(&input, &output)?;

    let decoded = read_image_any_bgr8(&input)?;
    let written = read_image_any_bgr8(&output)?;
    assert_eq!(written.size(), report.input_size);

    let green_in = decoded.channel(1)?;
    let green_out = written.channel(1)?;
    assert_eq!(green_out, green_in);
    assert!(written.channel(0)?.as_slice().iter().all(|&v| v == 0));
    assert!(written.channel(2)?.as_slice().iter().all(|&v| v == 0));

    Ok(())
}

#[test]
fn filter_output_is_a_fixed_point() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("input.png");
    let first = tmp_dir.path().join("first.png");
    let second = tmp_dir.path().join("second.png");

    write_image_any_bgr8(&input, &gradient(10, 10)?)?;
    apply_green_channel_filter(&input, &first)?;
    apply_green_channel_filter(&first, &second)?;

    assert_eq!(
        read_image_any_bgr8(&first)?.as_image(),
        read_image_any_bgr8(&second)?.as_image()
    );

    Ok(())
}

#[test]
fn missing_input_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("deepSpace_5_new.png");
    let output = tmp_dir.path().join("resultado3.png");

    let res = apply_green_channel_filter(&input, &output);
    assert!(matches!(
        res,
        Err(FilterError::Load {
            source: IoError::FileDoesNotExist(_),
            ..
        })
    ));
    assert!(!output.exists());

    Ok(())
}

#[test]
fn undecodable_input_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("input.png");
    let output = tmp_dir.path().join("output.png");
    std::fs::write(&input, b"\x89PNG but truncated")?;

    let res = apply_green_channel_filter(&input, &output);
    assert!(matches!(res, Err(FilterError::Load { .. })));
    assert!(!output.exists());

    Ok(())
}

#[test]
fn unknown_output_extension_is_unexpected() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("input.png");
    let output = tmp_dir.path().join("output.nope");
    write_image_any_bgr8(&input, &gradient(2, 2)?)?;

    let res = apply_green_channel_filter(&input, &output);
    match res {
        Err(FilterError::Unexpected(err)) => {
            assert!(err.to_string().contains("output.nope"), "{err}");
            // the typed io error stays reachable behind the boxed source
            assert!(matches!(
                err.downcast_ref::<IoError>(),
                Some(IoError::InvalidFileExtension(_))
            ));
        }
        other => panic!("expected an unexpected failure, got {other:?}"),
    }
    assert!(!output.exists());

    Ok(())
}

#[test]
fn loaded_callback_runs_before_save_failure() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let input = tmp_dir.path().join("input.png");
    // a directory cannot be overwritten by the encoder
    let output = tmp_dir.path().join("output.png");
    std::fs::create_dir(&output)?;
    write_image_any_bgr8(&input, &gradient(4, 3)?)?;

    let loaded = Cell::new(None);
    let res = apply_green_channel_filter_with(&input, &output, |path, size| {
        assert_eq!(path, input.as_path());
        loaded.set(Some(size));
    });

    assert!(matches!(res, Err(FilterError::Unexpected(_))));
    assert_eq!(
        loaded.get(),
        Some(ImageSize {
            width: 4,
            height: 3
        })
    );
    assert!(output.is_dir());

    Ok(())
}

#[test]
fn loaded_callback_skipped_on_load_failure() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let config = FilterConfig {
        input_path: tmp_dir.path().join("missing.png"),
        output_path: tmp_dir.path().join("out.png"),
    };

    let called = Cell::new(false);
    let res = config.run_with(|_, _| called.set(true));

    assert!(matches!(res, Err(FilterError::Load { .. })));
    assert!(!called.get());

    Ok(())
}

#[test]
fn config_runs_with_custom_paths() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let tmp_dir = tempfile::tempdir()?;
    let config = FilterConfig {
        input_path: tmp_dir.path().join("in.png"),
        output_path: tmp_dir.path().join("out.png"),
    };
    write_image_any_bgr8(&config.input_path, &gradient(3, 1)?)?;

    let report = config.run()?;
    assert_eq!(report.output_path, config.output_path);
    assert!(config.output_path.exists());

    Ok(())
}
