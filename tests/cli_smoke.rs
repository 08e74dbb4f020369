use std::path::PathBuf;

#[test]
fn cli_render_writes_track() {
    let dir = PathBuf::from("target").join("cli_smoke");
    let frames = dir.join("frames");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&frames).unwrap();

    for (name, value) in [("frame_000.png", 255u8), ("frame_001.png", 0u8)] {
        image::GrayImage::from_pixel(1440, 9, image::Luma([value]))
            .save(frames.join(name))
            .unwrap();
    }

    let project_path = dir.join("project.json");
    std::fs::write(
        &project_path,
        r#"{ "frames_dir": "frames", "hori_res": 1440 }"#,
    )
    .unwrap();

    let out_path = dir.join("out.bed");
    let status = std::process::Command::new(env!("CARGO_BIN_EXE_bedframe"))
        .args(["render", "--in"])
        .arg(&project_path)
        .arg("--out")
        .arg(&out_path)
        .status()
        .unwrap();

    assert!(status.success());
    let out = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "chr22 0 1600 bad_apple 1000 . 0 1600 0 1 1600 0");
    // All-background frame: sentinels only.
    assert!(lines[1].ends_with("2 1,1 0,1441"));
    // All-foreground frame: one full-width run between the sentinels.
    assert!(lines[2].ends_with("3 1,1440,1 0,1,1441"));
}

#[test]
fn cli_frame_writes_single_frame_fragment() {
    let dir = PathBuf::from("target").join("cli_smoke_frame");
    let frames = dir.join("frames");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&frames).unwrap();

    image::GrayImage::from_pixel(1440, 9, image::Luma([0u8]))
        .save(frames.join("frame_000.png"))
        .unwrap();

    let project_path = dir.join("project.json");
    std::fs::write(
        &project_path,
        r#"{ "frames_dir": "frames", "hori_res": 1440 }"#,
    )
    .unwrap();

    let out_path = dir.join("frame.bed");
    let status = std::process::Command::new(env!("CARGO_BIN_EXE_bedframe"))
        .args(["frame", "--in"])
        .arg(&project_path)
        .args(["--frame", "0", "--out"])
        .arg(&out_path)
        .status()
        .unwrap();

    assert!(status.success());
    let out = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        out,
        "chr22 3119 4561 bad_apple 1000 . 3119 4561 0 3 1,1440,1 0,1,1441\n"
    );
}
