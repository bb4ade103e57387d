//! A lenient tokenizer for SVG path `d` attributes.
//!
//! Malformed input never aborts the parse: unknown command letters and commands with
//! missing operands are skipped (and reported through `log`), and parsing resumes at the
//! next command letter.

use crate::commands::{operand_count, PathCommand};
use log::warn;

/// Parses a path string into a sequence of commands.
pub fn parse_commands(src: &str) -> Vec<PathCommand> {
    let mut output = Vec::new();
    PathParser::new().parse(&mut Source::new(src.chars()), &mut output);

    output
}

// A buffered iterator of characters keeping track of line and column.
pub struct Source<Iter> {
    src: Iter,
    current: char,
    line: i32,
    col: i32,
    finished: bool,
}

impl<Iter: Iterator<Item = char>> Source<Iter> {
    pub fn new<IntoIter>(src: IntoIter) -> Self
    where
        IntoIter: IntoIterator<IntoIter = Iter>,
    {
        let mut src = src.into_iter();

        let (current, finished) = match src.next() {
            Some(c) => (c, false),
            None => (' ', true),
        };

        let line = if current == '\n' { 1 } else { 0 };

        Source {
            current,
            finished,
            src,
            line,
            col: 0,
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.finished && (self.current.is_whitespace() || self.current == ',') {
            self.advance_one();
        }
    }

    // Skips everything up to the next command letter.
    fn skip_to_command(&mut self) {
        while !self.finished && operand_count(self.current).is_none() {
            self.advance_one();
        }
    }

    fn advance_one(&mut self) {
        if self.finished {
            return;
        }
        match self.src.next() {
            Some('\n') => {
                self.current = '\n';
                self.line += 1;
                self.col = -1;
            }
            Some(c) => {
                self.current = c;
                self.col += 1;
            }
            None => {
                self.current = '~';
                self.finished = true;
            }
        }
    }

    fn starts_number(&self) -> bool {
        !self.finished && (self.current.is_ascii_digit() || matches!(self.current, '-' | '+' | '.'))
    }
}

/// A reusable context object for parsing path strings.
#[derive(Debug, Default)]
pub struct PathParser {
    float_buffer: String,
    operands: Vec<f64>,
}

impl PathParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the whole source, appending the commands to `output`.
    pub fn parse<Iter>(&mut self, src: &mut Source<Iter>, output: &mut Vec<PathCommand>)
    where
        Iter: Iterator<Item = char>,
    {
        // Operands without a command letter repeat the previous command. Move-to
        // repeats as a line-to.
        let mut implicit_cmd = None;

        src.skip_whitespace();

        while !src.finished {
            let cmd_line = src.line;
            let cmd_col = src.col;

            let cmd = if src.current.is_ascii_alphabetic() {
                let cmd = src.current;
                src.advance_one();
                cmd
            } else {
                match implicit_cmd {
                    Some(cmd) if src.starts_number() => cmd,
                    _ => {
                        warn!(
                            "Line {} Column {}: Unexpected {:?} in path data, skipping.",
                            cmd_line, cmd_col, src.current
                        );
                        src.advance_one();
                        src.skip_to_command();
                        continue;
                    }
                }
            };

            let count = match operand_count(cmd) {
                Some(count) => count,
                None => {
                    warn!(
                        "Line {} Column {}: Invalid command {:?}, skipping.",
                        cmd_line, cmd_col, cmd
                    );
                    implicit_cmd = None;
                    src.skip_to_command();
                    continue;
                }
            };

            if !self.parse_operands(cmd, count, src) {
                warn!(
                    "Line {} Column {}: Expected {} operands for command {:?}, got {}.",
                    cmd_line,
                    cmd_col,
                    count,
                    cmd,
                    self.operands.len()
                );
                implicit_cmd = None;
                src.skip_to_command();
                continue;
            }

            if let Some(command) = PathCommand::from_operands(cmd, &self.operands) {
                output.push(command);
            }

            implicit_cmd = match cmd {
                'M' => Some('L'),
                'm' => Some('l'),
                'Z' | 'z' => None,
                c => Some(c),
            };

            src.skip_whitespace();
        }
    }

    fn parse_operands(
        &mut self,
        cmd: char,
        count: usize,
        src: &mut Source<impl Iterator<Item = char>>,
    ) -> bool {
        let is_arc = cmd == 'a' || cmd == 'A';

        self.operands.clear();
        for i in 0..count {
            let value = if is_arc && (i == 3 || i == 4) {
                Self::parse_flag(src).map(|flag| if flag { 1.0 } else { 0.0 })
            } else {
                self.parse_number(src)
            };

            match value {
                Some(value) => self.operands.push(value),
                None => return false,
            }
        }

        true
    }

    fn parse_number(&mut self, src: &mut Source<impl Iterator<Item = char>>) -> Option<f64> {
        self.float_buffer.clear();

        src.skip_whitespace();

        if !src.starts_number() {
            return None;
        }

        if src.current == '-' || src.current == '+' {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        while src.current.is_ascii_digit() {
            self.float_buffer.push(src.current);
            src.advance_one();
        }

        if src.current == '.' {
            self.float_buffer.push('.');
            src.advance_one();

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        if src.current == 'e' || src.current == 'E' {
            self.float_buffer.push(src.current);
            src.advance_one();

            if src.current == '-' || src.current == '+' {
                self.float_buffer.push(src.current);
                src.advance_one();
            }

            while src.current.is_ascii_digit() {
                self.float_buffer.push(src.current);
                src.advance_one();
            }
        }

        self.float_buffer.parse::<f64>().ok()
    }

    fn parse_flag(src: &mut Source<impl Iterator<Item = char>>) -> Option<bool> {
        src.skip_whitespace();
        match src.current {
            '1' if !src.finished => {
                src.advance_one();
                Some(true)
            }
            '0' if !src.finished => {
                src.advance_one();
                Some(false)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
use crate::geom::ArcFlags;
#[cfg(test)]
use crate::math::{point, vector};

#[test]
fn empty() {
    assert!(parse_commands("").is_empty());
    assert!(parse_commands(" ,  ").is_empty());
}

#[test]
fn simple_square() {
    let commands = parse_commands("M0,0 L10,0 L10,10 Z");
    assert_eq!(
        commands,
        vec![
            PathCommand::MoveTo {
                abs: true,
                to: point(0.0, 0.0)
            },
            PathCommand::LineTo {
                abs: true,
                to: point(10.0, 0.0)
            },
            PathCommand::LineTo {
                abs: true,
                to: point(10.0, 10.0)
            },
            PathCommand::ClosePath,
        ]
    );
}

#[test]
fn implicit_repetition() {
    let commands = parse_commands("m 1 1 2 2, 3 3 c 0 0 1 1 2 2 3 3 4 4 5 5");
    let letters: Vec<char> = commands.iter().map(|cmd| cmd.letter()).collect();
    assert_eq!(letters, vec!['m', 'l', 'l', 'c', 'c']);
    assert_eq!(
        commands[4],
        PathCommand::CubicTo {
            abs: false,
            ctrl1: point(3.0, 3.0),
            ctrl2: point(4.0, 4.0),
            to: point(5.0, 5.0),
        }
    );
}

#[test]
fn separators() {
    let a = parse_commands("M 1,2 L3 4");
    let b = parse_commands("M1 2L3,4");
    let c = parse_commands("M1,,  2 ,L 3 ,, 4");
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn numbers() {
    let commands = parse_commands("M-1.5-2.5 L.5.5 L+3e2,1E-1 H-0");
    assert_eq!(
        commands,
        vec![
            PathCommand::MoveTo {
                abs: true,
                to: point(-1.5, -2.5)
            },
            PathCommand::LineTo {
                abs: true,
                to: point(0.5, 0.5)
            },
            PathCommand::LineTo {
                abs: true,
                to: point(300.0, 0.1)
            },
            PathCommand::HorizontalLineTo { abs: true, x: 0.0 },
        ]
    );
}

#[test]
fn arc_flags() {
    let commands = parse_commands("M0 0 a25,25 -30 0,1 50,-25 A 1 2 0 1110 20");
    assert_eq!(commands.len(), 3);
    assert_eq!(
        commands[1],
        PathCommand::ArcTo {
            abs: false,
            radii: vector(25.0, 25.0),
            x_rotation: -30.0,
            flags: ArcFlags {
                large_arc: false,
                sweep: true,
            },
            to: point(50.0, -25.0),
        }
    );
    assert_eq!(
        commands[2],
        PathCommand::ArcTo {
            abs: true,
            radii: vector(1.0, 2.0),
            x_rotation: 0.0,
            flags: ArcFlags {
                large_arc: true,
                sweep: true,
            },
            to: point(10.0, 20.0),
        }
    );
}

#[test]
fn invalid_commands_are_skipped() {
    let commands = parse_commands("M0 0 X 5 5 L10 0 B1 2 L10 10");
    let letters: Vec<char> = commands.iter().map(|cmd| cmd.letter()).collect();
    assert_eq!(letters, vec!['M', 'L', 'L']);
}

#[test]
fn missing_operands_are_skipped() {
    let commands = parse_commands("M0 0 L10 Q 1 1 2 L 5 5 C1");
    let letters: Vec<char> = commands.iter().map(|cmd| cmd.letter()).collect();
    assert_eq!(letters, vec!['M', 'L']);
    assert_eq!(
        commands[1],
        PathCommand::LineTo {
            abs: true,
            to: point(5.0, 5.0)
        }
    );
}

#[test]
fn leading_numbers_are_skipped() {
    let commands = parse_commands("1 2 M3 4");
    assert_eq!(
        commands,
        vec![PathCommand::MoveTo {
            abs: true,
            to: point(3.0, 4.0)
        }]
    );
}
