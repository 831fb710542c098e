//! SVG path-data parsing for slur templates
//!
//! Templates are drawn as a single open cubic path: one move command
//! followed by curve (`C`/`c`) and smooth curve (`S`/`s`) commands. Numbers
//! may be separated by commas, whitespace, or simply by the sign of the next
//! number (`10-20` is two coordinates), as the SVG grammar allows.

use thiserror::Error;

use crate::geometry::Point;
use crate::models::ControlPointPair;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathDataError {
    #[error("Path data is empty")]
    Empty,

    #[error("Path data must start with a move command, found '{0}'")]
    MissingMoveTo(char),

    #[error("Unsupported path command '{command}' at offset {offset}")]
    UnsupportedCommand { command: char, offset: usize },

    #[error("Unexpected character '{character}' at offset {offset}")]
    UnexpectedCharacter { character: char, offset: usize },

    #[error("Invalid number '{text}' at offset {offset}")]
    InvalidNumber { text: String, offset: usize },

    #[error("Command '{command}' expects coordinates in groups of {group}, found {found}")]
    CoordinateCount { command: char, group: usize, found: usize },

    #[error("Path data has no curve segment")]
    NoCurve,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Command { letter: char, offset: usize },
    Number { value: f64, first: char },
}

/// Parses template path data into the ordered `{control, point}` pairs.
///
/// The first pair holds the start point and its outgoing control; every
/// following pair holds a segment's end point and the control leading into
/// it. The outgoing control of an interior point is not kept: it is always
/// re-derived by reflecting the incoming one.
pub fn parse_path_data(d: &str) -> Result<Vec<ControlPointPair>, PathDataError> {
    let tokens = tokenize(d)?;
    let commands = group_commands(&tokens)?;

    let mut commands = commands.into_iter();
    let (letter, args) = commands.next().ok_or(PathDataError::Empty)?;
    if !matches!(letter, 'M' | 'm') {
        return Err(PathDataError::MissingMoveTo(letter));
    }
    if args.len() != 2 {
        return Err(PathDataError::CoordinateCount { command: letter, group: 2, found: args.len() });
    }

    let start = Point::new(args[0], args[1]);
    let mut current = start;
    let mut start_control: Option<Point> = None;
    let mut pairs = Vec::new();

    for (letter, args) in commands {
        let relative = letter.is_ascii_lowercase();
        let group = match letter.to_ascii_uppercase() {
            'C' => 6,
            'S' => 4,
            // Only the closing command is left; it takes no arguments.
            _ => {
                if !args.is_empty() {
                    return Err(PathDataError::CoordinateCount { command: letter, group: 0, found: args.len() });
                }
                continue;
            }
        };
        if args.is_empty() || args.len() % group != 0 {
            return Err(PathDataError::CoordinateCount { command: letter, group, found: args.len() });
        }

        for segment in args.chunks(group) {
            let resolve = |x: f64, y: f64| {
                if relative {
                    current.translate(x, y)
                } else {
                    Point::new(x, y)
                }
            };

            let (first_control, control_in, point) = if group == 6 {
                (
                    Some(resolve(segment[0], segment[1])),
                    resolve(segment[2], segment[3]),
                    resolve(segment[4], segment[5]),
                )
            } else {
                (None, resolve(segment[0], segment[1]), resolve(segment[2], segment[3]))
            };

            match start_control {
                None => {
                    // A leading smooth curve has no previous control to
                    // reflect, so its first control is the current point.
                    start_control = Some(first_control.unwrap_or(current));
                }
                Some(_) => {
                    if let Some(ignored) = first_control {
                        log::debug!(
                            "ignoring explicit control {:?}; outgoing controls are reflected",
                            ignored
                        );
                    }
                }
            }

            pairs.push(ControlPointPair::new(control_in, point));
            current = point;
        }
    }

    let start_control = start_control.ok_or(PathDataError::NoCurve)?;
    pairs.insert(0, ControlPointPair::new(start_control, start));
    Ok(pairs)
}

/// Splits the path into commands with their numeric arguments.
fn group_commands(tokens: &[Token]) -> Result<Vec<(char, Vec<f64>)>, PathDataError> {
    let mut commands: Vec<(char, Vec<f64>)> = Vec::new();

    for token in tokens {
        match token {
            Token::Command { letter, offset } => {
                if !matches!(letter, 'M' | 'm' | 'C' | 'c' | 'S' | 's' | 'Z' | 'z') {
                    return Err(PathDataError::UnsupportedCommand { command: *letter, offset: *offset });
                }
                // A template is a single open subpath: nothing may follow a
                // close, and a second move would start another subpath.
                let after_close = matches!(commands.last(), Some(('Z' | 'z', _)));
                if after_close || (matches!(letter, 'M' | 'm') && !commands.is_empty()) {
                    return Err(PathDataError::UnsupportedCommand { command: *letter, offset: *offset });
                }
                commands.push((*letter, Vec::new()));
            }
            Token::Number { value, first } => match commands.last_mut() {
                Some((_, args)) => args.push(*value),
                None => return Err(PathDataError::MissingMoveTo(*first)),
            },
        }
    }

    Ok(commands)
}

fn tokenize(d: &str) -> Result<Vec<Token>, PathDataError> {
    let chars: Vec<(usize, char)> = d.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];
        if c.is_whitespace() || c == ',' {
            i += 1;
        } else if c.is_ascii_alphabetic() && c != 'e' && c != 'E' {
            tokens.push(Token::Command { letter: c, offset });
            i += 1;
        } else if c.is_ascii_digit() || matches!(c, '+' | '-' | '.') {
            let end = scan_number(&chars, i);
            let text: String = chars[i..end].iter().map(|(_, c)| c).collect();
            let value = text
                .parse::<f64>()
                .map_err(|_| PathDataError::InvalidNumber { text: text.clone(), offset })?;
            tokens.push(Token::Number { value, first: c });
            i = end;
        } else {
            return Err(PathDataError::UnexpectedCharacter { character: c, offset });
        }
    }

    Ok(tokens)
}

/// Index one past the number starting at `start`.
///
/// A sign only belongs to the number when it comes first (or right after an
/// exponent marker), and a second decimal point starts a new number.
fn scan_number(chars: &[(usize, char)], start: usize) -> usize {
    let mut i = start;
    if matches!(chars[i].1, '+' | '-') {
        i += 1;
    }

    let mut seen_dot = false;
    while i < chars.len() {
        match chars[i].1 {
            '0'..='9' => i += 1,
            '.' if !seen_dot => {
                seen_dot = true;
                i += 1;
            }
            'e' | 'E' => {
                let mut j = i + 1;
                if j < chars.len() && matches!(chars[j].1, '+' | '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].1.is_ascii_digit() {
                    i = j;
                    while i < chars.len() && chars[i].1.is_ascii_digit() {
                        i += 1;
                    }
                }
                break;
            }
            _ => break,
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(cx: f64, cy: f64, px: f64, py: f64) -> ControlPointPair {
        ControlPointPair::new(Point::new(cx, cy), Point::new(px, py))
    }

    #[test]
    fn absolute_short_template() {
        let pairs = parse_path_data("M0,0C10,-20,90,-20,100,0").unwrap();
        assert_eq!(pairs, vec![pair(10.0, -20.0, 0.0, 0.0), pair(90.0, -20.0, 100.0, 0.0)]);
    }

    #[test]
    fn relative_curve_is_resolved_against_start() {
        let pairs = parse_path_data("M20,30c10-20,90-20,100,0").unwrap();
        assert_eq!(pairs, vec![pair(30.0, 10.0, 20.0, 30.0), pair(110.0, 10.0, 120.0, 30.0)]);
    }

    #[test]
    fn sign_and_dot_separate_numbers() {
        let pairs = parse_path_data("M.5.5C10+5-3.5-20 100 0").unwrap();
        assert_eq!(pairs[0], pair(10.0, 5.0, 0.5, 0.5));
        assert_eq!(pairs[1], pair(-3.5, -20.0, 100.0, 0.0));
    }

    #[test]
    fn exponents_are_accepted() {
        let pairs = parse_path_data("M0,0C1e1,-2e1,9E1,-20,1e2,0").unwrap();
        assert_eq!(pairs[1], pair(90.0, -20.0, 100.0, 0.0));
    }

    #[test]
    fn smooth_segments_become_tangent_pairs() {
        let pairs = parse_path_data("M0,0 C10,-20 40,-30 50,-30 S90,-20 100,0").unwrap();
        assert_eq!(
            pairs,
            vec![
                pair(10.0, -20.0, 0.0, 0.0),
                pair(40.0, -30.0, 50.0, -30.0),
                pair(90.0, -20.0, 100.0, 0.0),
            ]
        );
    }

    #[test]
    fn relative_smooth_segment_uses_previous_end() {
        let pairs = parse_path_data("m0,0c10,-20 40,-30 50,-30s40,10 50,30").unwrap();
        assert_eq!(pairs[2], pair(90.0, -20.0, 100.0, 0.0));
    }

    #[test]
    fn repeated_curve_arguments_form_segments() {
        let pairs = parse_path_data("M0,0C10,-20,40,-30,50,-30,60,-30,90,-20,100,0").unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2], pair(90.0, -20.0, 100.0, 0.0));
    }

    #[test]
    fn trailing_close_is_ignored() {
        let pairs = parse_path_data("M0,0C10,-20,90,-20,100,0z").unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn commands_after_close_are_rejected() {
        assert_eq!(
            parse_path_data("M0,0C10,-20,90,-20,100,0zc1,1,2,2,3,3"),
            Err(PathDataError::UnsupportedCommand { command: 'c', offset: 25 })
        );
        assert_eq!(
            parse_path_data("M0,0C10,-20,90,-20,100,0Z S1,1,2,2"),
            Err(PathDataError::UnsupportedCommand { command: 'S', offset: 26 })
        );
        assert_eq!(
            parse_path_data("M0,0C10,-20,90,-20,100,0zz"),
            Err(PathDataError::UnsupportedCommand { command: 'z', offset: 25 })
        );
    }

    #[test]
    fn errors() {
        assert_eq!(parse_path_data(""), Err(PathDataError::Empty));
        assert_eq!(parse_path_data("C10,-20,90,-20,100,0"), Err(PathDataError::MissingMoveTo('C')));
        assert_eq!(parse_path_data("M0,0"), Err(PathDataError::NoCurve));
        assert_eq!(parse_path_data("10,20"), Err(PathDataError::MissingMoveTo('1')));
        assert_eq!(
            parse_path_data("M0,0L10,10"),
            Err(PathDataError::UnsupportedCommand { command: 'L', offset: 4 })
        );
        assert_eq!(
            parse_path_data("M0,0C10,-20,90,-20"),
            Err(PathDataError::CoordinateCount { command: 'C', group: 6, found: 4 })
        );
        assert_eq!(
            parse_path_data("M0,0C10,-20,90,-20,100,#"),
            Err(PathDataError::UnexpectedCharacter { character: '#', offset: 23 })
        );
        assert!(matches!(parse_path_data("M0,0C-,1,2,3,4,5"), Err(PathDataError::InvalidNumber { .. })));
    }
}
