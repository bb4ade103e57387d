use std::io::Write;

use crate::commands::{CommandError, FlattenCmd};
use log::info;
use shatter::path::serialize_polyline;
use shatter::svg::{extract_shape, Primitive, ShapeDescriptor};

pub fn flatten(mut cmd: FlattenCmd) -> Result<(), CommandError> {
    let descriptor = ShapeDescriptor::new(Primitive::Path { d: cmd.input });
    let shape = extract_shape(&descriptor, &cmd.options)?;
    info!("Flattened into {} vertices (closed: {}).", shape.polyline.len(), shape.is_closed());

    if cmd.count {
        writeln!(&mut *cmd.output, "vertices: {}", shape.polyline.len())?;
        writeln!(&mut *cmd.output, "closed: {}", shape.is_closed())?;

        return Ok(());
    }

    writeln!(&mut *cmd.output, "{}", serialize_polyline(&shape.polyline))?;

    Ok(())
}
