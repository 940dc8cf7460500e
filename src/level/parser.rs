//! Level text parser
//!
//! One entry per line:
//! - `x,y;T` (any order of tokens) places the hole
//! - `x,y;B` places the ball start
//! - `S` or `G` alone switch the surface to sand or ice
//! - `x,y;x,y;...` is a wall polyline, N points give N-1 segments
//!
//! Parsing never fails. Bad tokens are skipped and reported as warnings so a
//! broken line costs at most that line's geometry.

use std::fmt;

use glam::DVec2;
use serde::Serialize;

use super::model::{LevelModel, SurfaceType, WallGroup, WallSegment};

const HOLE_MARKER: &str = ";T";
const BALL_MARKER: &str = ";B";

/// What went wrong on a skipped line or token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum WarningKind {
    /// A wall token that is not two finite numbers
    MalformedPoint { token: String },
    /// Hole line without a usable `x,y` pair
    MissingHoleCoordinates,
    /// Ball start line without a usable `x,y` pair
    MissingBallStartCoordinates,
    /// Wall line that produced no segment
    EmptyWallGroup,
}

/// A recoverable problem found while parsing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    /// 1-based line number in the level text
    pub line: usize,
    pub kind: WarningKind,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::MalformedPoint { token } => {
                write!(f, "line {}: malformed point {:?}", self.line, token)
            }
            WarningKind::MissingHoleCoordinates => {
                write!(f, "line {}: hole has no coordinates", self.line)
            }
            WarningKind::MissingBallStartCoordinates => {
                write!(f, "line {}: ball start has no coordinates", self.line)
            }
            WarningKind::EmptyWallGroup => {
                write!(f, "line {}: wall line has no valid segment", self.line)
            }
        }
    }
}

/// Parser output: always a usable model, plus whatever was skipped
#[derive(Debug, Clone, Default)]
pub struct ParsedLevel {
    pub model: LevelModel,
    pub warnings: Vec<ParseWarning>,
}

impl ParsedLevel {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    fn warn(&mut self, line: usize, kind: WarningKind) {
        let warning = ParseWarning { line, kind };
        log::warn!("Level text {}", warning);
        self.warnings.push(warning);
    }
}

/// Parse level text into a level model
pub fn parse_level(text: &str) -> ParsedLevel {
    let mut parsed = ParsedLevel::default();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = index + 1;

        if line.contains(HOLE_MARKER) {
            match parse_marked_point(line, 'T') {
                Some(pos) => parsed.model.hole.position = pos,
                None => parsed.warn(line_no, WarningKind::MissingHoleCoordinates),
            }
        } else if line.contains(BALL_MARKER) {
            match parse_marked_point(line, 'B') {
                Some(pos) => parsed.model.ball_start.position = pos,
                None => parsed.warn(line_no, WarningKind::MissingBallStartCoordinates),
            }
        } else if let Some(surface) = SurfaceType::from_marker(line) {
            parsed.model.surface = surface;
        } else if line.contains(';') {
            let group = parse_wall_group(line, line_no, &mut parsed);
            if group.is_empty() {
                parsed.warn(line_no, WarningKind::EmptyWallGroup);
            } else {
                parsed.model.wall_groups.push(group);
            }
        }
    }

    log::debug!(
        "Parsed level: {} wall groups, {} walls, surface {}, {} warnings",
        parsed.model.wall_groups.len(),
        parsed.model.wall_count(),
        parsed.model.surface.as_str(),
        parsed.warnings.len()
    );

    parsed
}

/// Parse `x,y` into a point. Both values must be finite numbers.
pub fn parse_point(token: &str) -> Option<DVec2> {
    let mut parts = token.split(',');
    let x = parse_coord(parts.next()?)?;
    let y = parse_coord(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Some(DVec2::new(x, y))
}

fn parse_coord(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// First valid point on a marker line, skipping the token that holds the marker letter
fn parse_marked_point(line: &str, marker: char) -> Option<DVec2> {
    line.split(';')
        .filter(|part| !part.contains(marker))
        .find_map(parse_point)
}

fn parse_wall_group(line: &str, line_no: usize, parsed: &mut ParsedLevel) -> WallGroup {
    let points: Vec<Option<DVec2>> = line
        .split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            let point = parse_point(token);
            if point.is_none() {
                parsed.warn(
                    line_no,
                    WarningKind::MalformedPoint {
                        token: token.to_string(),
                    },
                );
            }
            point
        })
        .collect();

    // Consecutive pairs only; the last point is not joined back to the first
    points
        .windows(2)
        .filter_map(|pair| match (pair[0], pair[1]) {
            (Some(a), Some(b)) => Some(WallSegment::from_points(a, b)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polyline_without_markers() {
        let parsed = parse_level("10,10;50,10;50,50");
        assert!(parsed.is_clean());
        assert_eq!(parsed.model.wall_groups.len(), 1);
        let group = &parsed.model.wall_groups[0];
        assert_eq!(group.len(), 2);
        assert_eq!(group[0], WallSegment::new(10.0, 10.0, 50.0, 10.0));
        assert_eq!(group[1], WallSegment::new(50.0, 10.0, 50.0, 50.0));
    }

    #[test]
    fn test_visually_closed_shape_stays_open() {
        let parsed = parse_level("0,0;100,0;100,100;0,100;0,0");
        assert_eq!(parsed.model.wall_groups[0].len(), 4);

        // Square listed without repeating the first point: only three sides
        let parsed = parse_level("0,0;100,0;100,100;0,100");
        assert_eq!(parsed.model.wall_groups[0].len(), 3);
    }

    #[test]
    fn test_malformed_pair_only_group() {
        let parsed = parse_level("abc,10;50,10");
        assert!(parsed.model.wall_groups.is_empty());
        assert_eq!(
            parsed.warnings,
            vec![
                ParseWarning {
                    line: 1,
                    kind: WarningKind::MalformedPoint {
                        token: "abc,10".to_string()
                    }
                },
                ParseWarning {
                    line: 1,
                    kind: WarningKind::EmptyWallGroup
                },
            ]
        );
    }

    #[test]
    fn test_malformed_pair_drops_only_its_segments() {
        let parsed = parse_level("abc,10;50,10;50,50");
        assert_eq!(parsed.model.wall_groups.len(), 1);
        assert_eq!(
            parsed.model.wall_groups[0],
            vec![WallSegment::new(50.0, 10.0, 50.0, 50.0)]
        );

        let parsed = parse_level("0,0;10,0;x,y;20,0;30,0");
        assert_eq!(
            parsed.model.wall_groups[0],
            vec![
                WallSegment::new(0.0, 0.0, 10.0, 0.0),
                WallSegment::new(20.0, 0.0, 30.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_non_finite_and_wrong_arity_rejected() {
        assert_eq!(parse_point("1,2"), Some(DVec2::new(1.0, 2.0)));
        assert_eq!(parse_point(" 1.5 , -2 "), Some(DVec2::new(1.5, -2.0)));
        assert_eq!(parse_point("1,2,3"), None);
        assert_eq!(parse_point("1"), None);
        assert_eq!(parse_point("inf,2"), None);
        assert_eq!(parse_point("NaN,2"), None);
        assert_eq!(parse_point(","), None);
    }

    #[test]
    fn test_hole_and_ball_start() {
        let text = "
            640,360;T
            100,600;B
        ";
        let parsed = parse_level(text);
        assert!(parsed.is_clean());
        assert_eq!(parsed.model.hole.position, DVec2::new(640.0, 360.0));
        assert_eq!(parsed.model.hole.radius, 12.0);
        assert_eq!(parsed.model.ball_start.position, DVec2::new(100.0, 600.0));
        assert!(parsed.model.wall_groups.is_empty());
    }

    #[test]
    fn test_first_valid_token_on_marker_line_wins() {
        let parsed = parse_level("junk;300,200;400,100;T");
        assert_eq!(parsed.model.hole.position, DVec2::new(300.0, 200.0));
    }

    #[test]
    fn test_last_hole_line_wins() {
        let parsed = parse_level("10,10;T\n20,20;T");
        assert_eq!(parsed.model.hole.position, DVec2::new(20.0, 20.0));
    }

    #[test]
    fn test_hole_without_coordinates_keeps_default() {
        let parsed = parse_level("x,y;T");
        assert_eq!(parsed.model.hole.position, DVec2::ZERO);
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].kind, WarningKind::MissingHoleCoordinates);
    }

    #[test]
    fn test_last_ball_start_line_wins() {
        let parsed = parse_level("10,10;B\n30,40;B");
        assert_eq!(parsed.model.ball_start.position, DVec2::new(30.0, 40.0));
    }

    #[test]
    fn test_ball_start_without_coordinates_keeps_previous() {
        let parsed = parse_level("x,y;B");
        assert_eq!(parsed.model.ball_start.position, DVec2::ZERO);
        assert_eq!(
            parsed.warnings,
            vec![ParseWarning {
                line: 1,
                kind: WarningKind::MissingBallStartCoordinates
            }]
        );

        let parsed = parse_level("50,60;B\nfoo;B");
        assert_eq!(parsed.model.ball_start.position, DVec2::new(50.0, 60.0));
        assert_eq!(parsed.warnings.len(), 1);
        assert_eq!(parsed.warnings[0].line, 2);
    }

    #[test]
    fn test_surface_lines() {
        assert_eq!(parse_level("S").model.surface, SurfaceType::Sand);
        assert_eq!(parse_level("G").model.surface, SurfaceType::Ice);
        assert_eq!(parse_level("S\nG").model.surface, SurfaceType::Ice);
        assert_eq!(parse_level("  S  ").model.surface, SurfaceType::Sand);
        // Not an exact marker line: ignored
        assert_eq!(parse_level("Sand").model.surface, SurfaceType::Normal);
    }

    #[test]
    fn test_unrecognized_lines_ignored() {
        let parsed = parse_level("hello\n42\n\n   \n10,10;20,20");
        assert!(parsed.is_clean());
        assert_eq!(parsed.model.wall_groups.len(), 1);
    }

    #[test]
    fn test_empty_tokens_dropped() {
        let parsed = parse_level(";10,10;;20,10;");
        assert!(parsed.is_clean());
        assert_eq!(
            parsed.model.wall_groups[0],
            vec![WallSegment::new(10.0, 10.0, 20.0, 10.0)]
        );
    }

    #[test]
    fn test_warning_line_numbers() {
        let parsed = parse_level("0,0;10,0\n\nfoo;bar");
        assert!(parsed.warnings.iter().all(|w| w.line == 3));
        assert_eq!(parsed.warnings.len(), 3);
    }
}
