use bevy::prelude::*;
use scene_viewer::console::dispatch::{CommandSubmitEvent, dispatch_commands};
use scene_viewer::engine::camera::viewport_camera::SceneCamera;
use scene_viewer::rpc::web_rpc::WebRpcInterface;

#[cfg(test)]
mod command_dispatch_tests {
    use super::*;

    /// Headless app with only the dispatch system and a camera entity.
    fn test_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<WebRpcInterface>()
            .add_event::<CommandSubmitEvent>()
            .add_systems(Update, dispatch_commands);

        let camera = app
            .world_mut()
            .spawn((SceneCamera, Transform::from_xyz(0.0, 0.0, 48.0)))
            .id();
        (app, camera)
    }

    fn submit(app: &mut App, text: &str) {
        app.world_mut().send_event(CommandSubmitEvent {
            text: text.to_string(),
        });
        app.update();
    }

    fn camera_transform(app: &App, camera: Entity) -> Transform {
        *app.world().get::<Transform>(camera).expect("camera transform")
    }

    #[test]
    fn test_teleport_command_moves_the_camera() {
        let (mut app, camera) = test_app();

        submit(&mut app, "tp 1 2 3");

        assert_eq!(camera_transform(&app, camera).translation, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_unknown_verb_leaves_pose_unchanged() {
        let (mut app, camera) = test_app();
        let before = camera_transform(&app, camera);

        submit(&mut app, "foo 1 2 3");

        assert_eq!(camera_transform(&app, camera), before);
    }

    #[test]
    fn test_empty_input_leaves_pose_unchanged() {
        let (mut app, camera) = test_app();
        let before = camera_transform(&app, camera);

        submit(&mut app, "");

        assert_eq!(camera_transform(&app, camera), before);
    }

    #[test]
    fn test_partial_command_sets_x_and_keeps_the_rest() {
        let (mut app, camera) = test_app();

        submit(&mut app, "tp 5");

        assert_eq!(camera_transform(&app, camera).translation, Vec3::new(5.0, 0.0, 48.0));
    }

    #[test]
    fn test_sentinels_preserve_fields_across_submissions() {
        let (mut app, camera) = test_app();

        submit(&mut app, "tp 1 2 3");
        submit(&mut app, "tp ~ 9 ~");

        assert_eq!(camera_transform(&app, camera).translation, Vec3::new(1.0, 9.0, 3.0));
    }

    #[test]
    fn test_malformed_number_leaves_pose_untouched() {
        let (mut app, camera) = test_app();
        let before = camera_transform(&app, camera);

        // Rejection is atomic: the parsable trailing slots must not land.
        submit(&mut app, "tp abc 2 3 4 5 6");

        assert_eq!(camera_transform(&app, camera), before);
    }
}
