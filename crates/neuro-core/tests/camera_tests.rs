// Host-side tests for the orbit camera, hover hints and sphere mesh.

use glam::Vec3;
use neuro_core::*;

#[test]
fn default_orbit_looks_down_negative_z() {
    let orbit = OrbitCamera::default();
    assert!((orbit.eye() - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-6);
    let cam = orbit.camera(16.0 / 9.0);
    assert!((cam.fovy_radians - 75f32.to_radians()).abs() < 1e-6);
}

#[test]
fn target_projects_to_screen_center() {
    let cam = OrbitCamera::default().camera(2.0);
    let p = cam.project_to_screen(Vec3::ZERO, 800.0, 400.0).unwrap();
    assert!((p.x - 400.0).abs() < 1e-3);
    assert!((p.y - 200.0).abs() < 1e-3);
}

#[test]
fn points_above_target_project_upward() {
    let cam = OrbitCamera::default().camera(1.0);
    let p = cam
        .project_to_screen(Vec3::new(0.0, 1.5, 0.0), 500.0, 500.0)
        .unwrap();
    assert!(p.y < 250.0);
    assert!((p.x - 250.0).abs() < 1e-3);
}

#[test]
fn points_behind_camera_do_not_project() {
    let cam = OrbitCamera::default().camera(1.0);
    assert!(cam
        .project_to_screen(Vec3::new(0.0, 0.0, 10.0), 500.0, 500.0)
        .is_none());
}

#[test]
fn zoom_is_clamped() {
    let mut orbit = OrbitCamera::default();
    for _ in 0..100 {
        orbit.zoom_by_wheel(500.0);
    }
    assert_eq!(orbit.distance, 20.0);
    for _ in 0..100 {
        orbit.zoom_by_wheel(-500.0);
    }
    assert_eq!(orbit.distance, 2.0);
}

#[test]
fn drag_rotates_and_pitch_is_clamped() {
    let mut orbit = OrbitCamera::default();
    orbit.rotate_by_drag(100.0, 0.0);
    assert!(orbit.yaw < 0.0);
    orbit.rotate_by_drag(0.0, 10_000.0);
    assert!(orbit.pitch < std::f32::consts::FRAC_PI_2);
    let eye = orbit.eye();
    assert!((eye.length() - orbit.distance).abs() < 1e-4);
}

#[test]
fn pointer_maps_to_ndc() {
    assert_eq!(pointer_ndc(0.0, 0.0, 200.0, 100.0), Some([-1.0, 1.0]));
    assert_eq!(pointer_ndc(100.0, 50.0, 200.0, 100.0), Some([0.0, 0.0]));
    assert_eq!(pointer_ndc(200.0, 100.0, 200.0, 100.0), Some([1.0, -1.0]));
    assert_eq!(pointer_ndc(1.0, 1.0, 0.0, 100.0), None);
}

#[test]
fn hover_hints_at_edges() {
    assert_eq!(hover_hint([0.9, 0.0]), Some(HoverHint::HighFocus));
    assert_eq!(hover_hint([-0.9, 0.0]), Some(HoverHint::LowFocus));
    assert_eq!(hover_hint([0.0, 0.9]), Some(HoverHint::HighStress));
    assert_eq!(hover_hint([0.0, -0.9]), Some(HoverHint::LowStress));
    assert_eq!(hover_hint([0.5, 0.5]), None);
    assert_eq!(hover_hint([0.8, 0.0]), None);
    // Corners resolve to the horizontal hint.
    assert_eq!(hover_hint([0.95, 0.95]), Some(HoverHint::HighFocus));
    assert_eq!(HoverHint::LowStress.text(), "Low Stress");
}

#[test]
fn sphere_mesh_is_unit_and_indexed() {
    let mesh = SphereMesh::new(16, 8);
    assert_eq!(mesh.vertices.len(), 17 * 9);
    // Pole rows contribute one triangle per segment, the rest two.
    assert_eq!(mesh.indices.len(), (16 * 8 * 2 - 2 * 16) * 3);
    for v in &mesh.vertices {
        let len = Vec3::from(v.position).length();
        assert!((len - 1.0).abs() < 1e-5);
        assert_eq!(v.position, v.normal);
    }
    let max = mesh.vertices.len() as u16;
    assert!(mesh.indices.iter().all(|&i| i < max));
}
