extern crate clap;
extern crate shatter;

mod commands;
mod flatten;
mod slice;
mod triangulate;

use clap::*;
use commands::*;
use log::{debug, warn};
use shatter::math::point;
use shatter::path::FlattenOptions;
use shatter::svg::ImportOptions;

use std::fs::File;
use std::io::prelude::*;
use std::io::{stderr, stdout};
use std::process;

fn main() {
    env_logger::init();

    let matches = App::new("Shatter command-line interface")
        .version("0.1")
        .about("Flattens, slices and triangulates SVG paths")
        .subcommand(SubCommand::with_name("flatten")
            .about("Flattens a path into a polyline")
            .arg(Arg::with_name("COUNT")
                .short("c")
                .long("count")
                .help("Prints the number of vertices")
            )
        )
        .subcommand(SubCommand::with_name("slice")
            .about("Cuts a closed path along a line")
            .arg(Arg::with_name("LINE")
                .short("l")
                .long("line")
                .help("Two points of the line, as x0,y0,x1,y1")
                .value_name("LINE")
                .takes_value(true)
                .required(true)
            )
            .arg(Arg::with_name("IMPULSES")
                .long("impulses")
                .help("Prints the impulse given to each piece")
            )
            .arg(Arg::with_name("COUNT")
                .short("c")
                .long("count")
                .help("Prints the number of pieces")
            )
        )
        .subcommand(SubCommand::with_name("triangulate")
            .about("Splits a closed path into triangles")
            .arg(Arg::with_name("COUNT")
                .short("c")
                .long("count")
                .help("Prints the number of triangles")
            )
        )
        .arg(Arg::with_name("PATH")
            .value_name("PATH")
            .help("An SVG path")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("INPUT")
            .help("Sets the input file to use")
            .short("i")
            .long("input")
            .value_name("FILE")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("OUTPUT")
            .help("Sets the output file to use")
            .value_name("FILE")
            .short("o")
            .long("output")
            .takes_value(true)
            .required(false)
        )
        .arg(Arg::with_name("SEGMENTS")
            .help("Number of segments per curve (10 by default)")
            .short("s")
            .long("segments")
            .value_name("SEGMENTS")
            .takes_value(true)
        )
        .arg(Arg::with_name("ELLIPSE_SEGMENTS")
            .help("Number of segments per ellipse or circle (20 by default)")
            .long("ellipse-segments")
            .value_name("SEGMENTS")
            .takes_value(true)
        )
        .arg(Arg::with_name("SCALE")
            .help("Scales the flattened points (1 by default)")
            .long("scale")
            .value_name("SCALE")
            .takes_value(true)
        )
        .get_matches();

    let mut input = matches.value_of("PATH").unwrap_or("").to_string();

    if let Some(input_file) = matches.value_of("INPUT") {
        let read = File::open(input_file).and_then(|mut file| file.read_to_string(&mut input));
        if let Err(err) = read {
            let _ = writeln!(&mut stderr(), "Cannot read file {}: {}", input_file, err);
            process::exit(1);
        }
    }

    let mut output: Box<dyn Write> = Box::new(stdout());
    if let Some(output_file) = matches.value_of("OUTPUT") {
        match File::create(output_file) {
            Ok(file) => output = Box::new(file),
            Err(err) => {
                let _ = writeln!(&mut stderr(), "Cannot create file {}: {}", output_file, err);
                process::exit(1);
            }
        }
    }

    let options = get_import_options(&matches);
    debug!("{:?}", options);

    let result = if let Some(flatten_matches) = matches.subcommand_matches("flatten") {
        flatten::flatten(FlattenCmd {
            input,
            output,
            options,
            count: flatten_matches.is_present("COUNT"),
        })
    } else if let Some(slice_matches) = matches.subcommand_matches("slice") {
        let line = match parse_line(slice_matches.value_of("LINE").unwrap_or("")) {
            Some(line) => line,
            None => {
                let _ = writeln!(&mut stderr(), "Expected the line as x0,y0,x1,y1");
                process::exit(1);
            }
        };
        slice::slice(SliceCmd {
            input,
            output,
            options,
            line,
            impulses: slice_matches.is_present("IMPULSES"),
            count: slice_matches.is_present("COUNT"),
        })
    } else if let Some(triangulate_matches) = matches.subcommand_matches("triangulate") {
        triangulate::triangulate(TriangulateCmd {
            input,
            output,
            options,
            count: triangulate_matches.is_present("COUNT"),
        })
    } else {
        let _ = writeln!(&mut stderr(), "{}", matches.usage());
        return;
    };

    if let Err(err) = result {
        let _ = writeln!(&mut stderr(), "{}", err);
        process::exit(1);
    }
}

fn get_import_options(matches: &ArgMatches) -> ImportOptions {
    let flatten = FlattenOptions::DEFAULT
        .with_curve_segments(get_value(
            matches,
            "SEGMENTS",
            FlattenOptions::DEFAULT_CURVE_SEGMENTS,
        ))
        .with_ellipse_segments(get_value(
            matches,
            "ELLIPSE_SEGMENTS",
            FlattenOptions::DEFAULT_ELLIPSE_SEGMENTS,
        ));

    ImportOptions::DEFAULT
        .with_flatten_options(flatten)
        .with_scale(get_value(matches, "SCALE", 1.0))
}

fn get_value<T: std::str::FromStr>(matches: &ArgMatches, name: &str, default: T) -> T {
    if let Some(value) = matches.value_of(name) {
        match value.parse() {
            Ok(value) => return value,
            Err(_) => warn!("Invalid {} {:?}, using the default.", name, value),
        }
    }

    default
}

fn parse_line(src: &str) -> Option<(shatter::math::Point, shatter::math::Point)> {
    let values: Vec<f64> = src
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<std::result::Result<_, _>>()
        .ok()?;

    match values.as_slice() {
        &[x0, y0, x1, y1] => Some((point(x0, y0), point(x1, y1))),
        _ => None,
    }
}

#[test]
fn parse_line_argument() {
    assert_eq!(
        parse_line("0, 1,2,3"),
        Some((point(0.0, 1.0), point(2.0, 3.0)))
    );
    assert_eq!(parse_line("0,1,2"), None);
    assert_eq!(parse_line("a,b,c,d"), None);
}

#[test]
fn invalid_values_fall_back_to_defaults() {
    let app = App::new("test")
        .arg(Arg::with_name("SCALE").long("scale").takes_value(true))
        .arg(Arg::with_name("SEGMENTS").long("segments").takes_value(true));

    let matches = app.get_matches_from(vec!["test", "--scale", "big", "--segments", "4"]);
    assert_eq!(get_value(&matches, "SCALE", 1.0), 1.0);
    assert_eq!(get_value(&matches, "SEGMENTS", 10usize), 4);
    assert_eq!(get_value(&matches, "ELLIPSE_SEGMENTS", 20usize), 20);

    let options = get_import_options(&matches);
    assert_eq!(options.scale, 1.0);
    assert_eq!(options.flatten.curve_segments, 4);
}
