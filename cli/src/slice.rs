use std::io::Write;

use crate::commands::{CommandError, SliceCmd};
use log::{debug, info};
use shatter::algorithms::impulse::ImpulseOptions;
use shatter::path::serialize_polyline;
use shatter::svg::{Primitive, ShapeDescriptor};
use shatter::{flatten_shape_with_options, Fragment};

pub fn slice(mut cmd: SliceCmd) -> Result<(), CommandError> {
    let descriptor = ShapeDescriptor::new(Primitive::Path { d: cmd.input });
    let polygon = flatten_shape_with_options(&descriptor, &cmd.options)?;

    let (p0, p1) = cmd.line;
    debug!("Slicing {} vertices along {:?} -> {:?}.", polygon.len(), p0, p1);
    let fragment = Fragment::new(&polygon)?;
    let pieces = fragment.slash(p0, p1, &ImpulseOptions::DEFAULT, rand::random::<f64>)?;
    info!("Sliced into {} pieces.", pieces.len());

    if cmd.count {
        writeln!(&mut *cmd.output, "pieces: {}", pieces.len())?;

        return Ok(());
    }

    for piece in &pieces {
        writeln!(&mut *cmd.output, "{}", serialize_polyline(&piece.polygon().to_polyline()))?;
        if !cmd.impulses {
            continue;
        }
        if let Some(impulse) = piece.impulse() {
            writeln!(
                &mut *cmd.output,
                "  impulse at ({}, {}): ({}, {})",
                impulse.at.x, impulse.at.y, impulse.force.x, impulse.force.y
            )?;
        }
    }

    Ok(())
}
