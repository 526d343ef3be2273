use std::env;
use std::path::PathBuf;

fn main() {
    // Use pkg-config to find FFmpeg libraries
    let avformat = pkg_config::probe_library("libavformat").expect(
        "libavformat not found. Install FFmpeg development libraries:\n\
         Ubuntu/Debian: sudo apt install libavformat-dev libavcodec-dev libavutil-dev\n\
         Fedora: sudo dnf install ffmpeg-devel\n\
         macOS: brew install ffmpeg",
    );
    let avcodec = pkg_config::probe_library("libavcodec").expect("libavcodec not found");
    let avutil = pkg_config::probe_library("libavutil").expect("libavutil not found");

    let include_paths: Vec<PathBuf> = avformat
        .include_paths
        .iter()
        .chain(avcodec.include_paths.iter())
        .chain(avutil.include_paths.iter())
        .cloned()
        .collect();

    // Only the stable open entry points are bound. The removed
    // av_open_input_file must never show up here.
    let mut builder = bindgen::Builder::default()
        .header_contents(
            "wrapper.h",
            r#"
            #include <libavcodec/avcodec.h>
            #include <libavformat/avformat.h>
            #include <libavutil/avutil.h>
            #include <libavutil/error.h>
            "#,
        )
        // Parser lifecycle
        .allowlist_function("av_parser_init")
        .allowlist_function("av_parser_close")
        // Format context lifecycle
        .allowlist_function("avformat_alloc_context")
        .allowlist_function("avformat_free_context")
        .allowlist_function("avformat_open_input")
        .allowlist_function("avformat_close_input")
        // Diagnostics
        .allowlist_function("av_strerror")
        .allowlist_function("avcodec_get_name")
        .allowlist_function("avcodec_descriptor_get_by_name")
        .allowlist_function("avformat_version")
        .allowlist_function("avcodec_version")
        .allowlist_type("AVCodecParserContext")
        .allowlist_type("AVFormatContext")
        .allowlist_type("AVInputFormat")
        .allowlist_type("AVCodecID")
        .allowlist_type("AVCodecDescriptor")
        .allowlist_var("AV_TIME_BASE")
        .derive_debug(true)
        .derive_default(true)
        .layout_tests(false);

    for path in &include_paths {
        builder = builder.clang_arg(format!("-I{}", path.display()));
    }

    let bindings = builder.generate().expect("Failed to generate bindings");

    let out_path = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    bindings
        .write_to_file(out_path.join("bindings.rs"))
        .expect("Failed to write bindings");

    println!("cargo:rerun-if-changed=build.rs");
}
