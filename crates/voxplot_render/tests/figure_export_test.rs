//! Integration test for figure layout and PNG export.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use voxplot_core::{build_point_cloud, PipelineParams, Volume, VolumeLayout};
use voxplot_render::{
    render_main_figure, render_multi_view, write_png, Pixel, RenderStyle, ViewConfig,
};

fn temp_png_path(tag: &str) -> std::path::PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("test_voxplot_{tag}_{id}.png"))
}

fn png_size(bytes: &[u8]) -> (u32, u32) {
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    (
        u32::from_be_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]),
        u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]),
    )
}

fn cube_cloud(nz: usize) -> voxplot_core::PointCloud {
    let volume = Volume::filled([6, 6, nz, 1], 1.0).unwrap();
    let params = PipelineParams { sampling_ratio: 0.5, ..Default::default() };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    build_point_cloud(&volume, VolumeLayout::ChannelLast, &params, &mut rng).unwrap()
}

#[test]
fn test_main_figure_height_tracks_slices() {
    for nz in [1, 3, 8] {
        let fig = render_main_figure(&cube_cloud(nz), &RenderStyle::default(), 75).unwrap();
        assert_eq!(fig.pixel_size(), (750, 150 * nz as u32), "nz = {nz}");
    }
}

#[test]
fn test_points_are_visible_in_main_figure() {
    let cloud = cube_cloud(4);
    let fig = render_main_figure(&cloud, &RenderStyle::default(), 75).unwrap();
    assert_eq!(fig.points_drawn(), cloud.len());

    // Magma at 1.0 is a light yellow, never pure white or black
    let colored = fig
        .canvas
        .pixels()
        .iter()
        .filter(|&&p| p != Pixel::WHITE && p != Pixel::BLACK)
        .count();
    assert!(colored > 0);
}

#[test]
fn test_side_columns_stay_blank() {
    let fig = render_main_figure(&cube_cloud(4), &RenderStyle::default(), 75).unwrap();
    let (w, h) = fig.pixel_size();
    for y in 0..h {
        for x in 0..w / 5 - 1 {
            assert_eq!(fig.canvas.get(x, y), Some(Pixel::WHITE));
        }
    }
}

#[test]
fn test_multi_view_png_written() {
    let fig = render_multi_view(&cube_cloud(6), &ViewConfig::default(), &RenderStyle::default(), 75).unwrap();
    let path = temp_png_path("multi");
    write_png(&path, &fig).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(png_size(&bytes), (900, 900));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_existing_file_is_overwritten() {
    let path = temp_png_path("overwrite");
    std::fs::write(&path, b"not a png").unwrap();

    let fig = render_main_figure(&cube_cloud(2), &RenderStyle::default(), 20).unwrap();
    write_png(&path, &fig).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(png_size(&bytes), (200, 80));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let path = std::env::temp_dir()
        .join("voxplot_no_such_dir_for_tests")
        .join("out.png");
    let fig = render_main_figure(&cube_cloud(1), &RenderStyle::default(), 10).unwrap();
    let err = write_png(&path, &fig).unwrap_err();
    assert!(matches!(err, voxplot_render::RenderError::Io(_)));
}
