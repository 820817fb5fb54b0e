//! 3D scene rendering: camera and light uniforms plus the triangle and
//! wireframe pipelines.

mod scene_renderer;

pub use scene_renderer::{FrameScene, SceneRenderer};

#[cfg(test)]
mod tests {
    fn validate(name: &str, source: &str) {
        let module = naga::front::wgsl::parse_str(source)
            .unwrap_or_else(|e| panic!("{name}: {}", e.emit_to_string(source)));
        let _ = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        )
        .validate(&module)
        .unwrap_or_else(|e| panic!("{name}: {e:?}"));

        for entry in ["vs_main", "fs_main"] {
            assert!(
                module.entry_points.iter().any(|ep| ep.name == entry),
                "{name} is missing {entry}"
            );
        }
    }

    #[test]
    fn scene_shader_validates() {
        validate("scene.wgsl", include_str!("../../assets/shaders/scene.wgsl"));
    }

    #[test]
    fn hud_shader_validates() {
        validate("hud.wgsl", include_str!("../../assets/shaders/hud.wgsl"));
    }
}
