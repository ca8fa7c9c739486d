use engine3d::{
    math::{Vector3, Vector4},
    render::{self, FrameUniforms, RecordingSink},
    Camera, Transform,
};

use anyhow::Context;

const FRAMES: u32 = 240;
const FRAME_DELTA: f32 = 1. / 60.;
const SPIN_SPEED: f32 = 90.; // degrees per second
const ASPECT: f32 = 800. / 600.;

fn main() -> Result<(), anyhow::Error> {
    println!("Usage:");
    println!("Run with RUST_LOG=debug to see logging output");
    println!("Run with RUST_LOG=trace to see every uniform upload");
    println!();

    env_logger::init();

    let mut app = App::new();
    for frame in 0..FRAMES {
        app.update(frame);
        app.draw_frame().with_context(|| format!("Failed to draw frame {frame}"))?;
    }
    app.report()
}

#[derive(Default)]
pub struct KeyStates {
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,
    up: bool,
    down: bool,
}

struct App {
    camera: Camera,
    objects: Vec<Transform>,
    pressed: KeyStates,
    cursor_delta: [f32; 2],
    sink: RecordingSink,
}

impl App {
    fn new() -> Self {
        let mut camera = Camera::scene_default();
        camera.set_aspect(ASPECT);

        let objects = (-2i32..=2)
            .map(|i| Transform::new(
                Vector3::from([i as f32 * 3., 0., 0.]),
                Vector3::new(1. + i.abs() as f32 * 0.25),
                Vector3::from([0., i as f32 * 30., 0.]),
            ))
            .collect();

        Self {
            camera,
            objects,
            pressed: KeyStates::default(),
            cursor_delta: [0., 0.],
            sink: RecordingSink::new(),
        }
    }

    /// Plays back a fixed input script in place of a window's events.
    fn update(&mut self, frame: u32) {
        self.pressed = KeyStates {
            forward: frame < 60,
            backward: (180..200).contains(&frame),
            left: (60..90).contains(&frame),
            right: (90..120).contains(&frame),
            up: (120..150).contains(&frame),
            down: (150..180).contains(&frame),
        };
        self.cursor_delta = if (200..220).contains(&frame) { [2., 0.] } else { [0., 0.] };

        let translation = Vector3::from([
            (self.pressed.right   as i8 - self.pressed.left     as i8) as f32,
            (self.pressed.up      as i8 - self.pressed.down     as i8) as f32,
            (self.pressed.backward as i8 - self.pressed.forward as i8) as f32,
        ]);
        if translation != Vector3::default() {
            self.camera.move_by(translation);
        }
        if self.cursor_delta != [0., 0.] {
            self.camera.rotate(Vector3::from([self.cursor_delta[1], self.cursor_delta[0], 0.]));
        }

        for transform in self.objects.iter_mut() {
            *transform.orientation_mut().y_mut() += SPIN_SPEED * FRAME_DELTA;
        }
    }

    fn draw_frame(&mut self) -> Result<(), anyhow::Error> {
        log::trace!("Drawing frame.");
        render::upload_camera(&self.camera, &mut self.sink)?;
        for transform in &self.objects {
            render::upload_model(transform, &mut self.sink)?;
        }
        Ok(())
    }

    fn report(&self) -> Result<(), anyhow::Error> {
        let last = self.objects.last().context("Scene has no objects")?;
        let uniforms = FrameUniforms::new(&self.camera, last);
        let clip = uniforms.projection * uniforms.view * uniforms.model * Vector4::from([0., 0., 0., 1.]);

        log::info!("Camera position {:?}", self.camera.position().as_slice());
        log::info!("Camera orientation {:?}", self.camera.orientation().as_slice());
        log::debug!("View {:?}", uniforms.view.as_slice());
        log::debug!("Projection {:?}", uniforms.projection.as_slice());
        log::debug!("Model {:?}", uniforms.model.as_slice());
        log::info!("Last object's origin in clip space {:?}", clip.as_slice());
        log::info!("{} uniforms set", self.sink.len());
        Ok(())
    }
}
