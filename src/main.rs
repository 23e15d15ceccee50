use gl_triangles::{
    Error,
    abs::{App, Mesh, WindowConfig},
    logging::{self, LoggingConfig},
    render::{frame::FrameLoop, geometry, shaders},
};

fn main() {
    logging::init(LoggingConfig::default());

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut app = App::new(&WindowConfig::default())?;

    let program = shaders::TRIANGLE.build(&app.gl)?;
    let meshes = vec![
        Mesh::new(&app.gl, &geometry::LEFT, 0)?,
        Mesh::new(&app.gl, &geometry::RIGHT, 1)?,
    ];

    let frames = FrameLoop::new(program, meshes).run(&mut app);
    log::info!("drew {frames} frames");

    Ok(())
}
