// Host-side checks of the bundled WGSL.

use neuro_core::POST_WGSL;

/// Field names of a WGSL struct, in declaration order.
fn struct_fields(src: &str, name: &str) -> Vec<String> {
    let head = format!("struct {name} {{");
    let start = src.find(&head).expect("struct present") + head.len();
    let end = start + src[start..].find('}').expect("struct closed");
    src[start..end]
        .split(',')
        .filter_map(|f| f.split(':').next())
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

#[test]
fn post_uniforms_hold_only_what_the_passes_read() {
    let fields = struct_fields(POST_WGSL, "PostUniforms");
    assert_eq!(
        fields,
        ["resolution", "_pad", "blur_dir", "bloom_strength", "threshold"]
    );
    for f in ["resolution", "blur_dir", "bloom_strength", "threshold"] {
        assert!(
            POST_WGSL.contains(&format!("pu.{f}")),
            "pu.{f} is never read"
        );
    }
}
