use std::io::Write;

use crate::commands::{CommandError, TriangulateCmd};
use log::info;
use shatter::svg::{Primitive, ShapeDescriptor};
use shatter::{flatten_shape_with_options, triangulate as triangulate_polygon};

pub fn triangulate(mut cmd: TriangulateCmd) -> Result<(), CommandError> {
    let descriptor = ShapeDescriptor::new(Primitive::Path { d: cmd.input });
    let polygon = flatten_shape_with_options(&descriptor, &cmd.options)?;
    let triangles = triangulate_polygon(&polygon)?;
    info!("Triangulated {} vertices into {} triangles.", polygon.len(), triangles.len());

    if cmd.count {
        writeln!(&mut *cmd.output, "triangles: {}", triangles.len())?;

        return Ok(());
    }

    for t in &triangles {
        writeln!(
            &mut *cmd.output,
            "({}, {}) ({}, {}) ({}, {})",
            t.a.x, t.a.y, t.b.x, t.b.y, t.c.x, t.c.y
        )?;
    }

    Ok(())
}
