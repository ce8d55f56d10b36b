// Outline grammar: a restricted subset of SVG path data. Only `m`/`M`
// subpath starts and `z`/`Z` closes carry meaning; every other character
// never becomes a token. Coordinates accumulate onto one running cursor
// for the whole string, including across subpaths - the catalog encoding
// relies on that, so a new `m` does not reset the cursor.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::Point;

static OUTLINE_TOKENS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[mz]|-?\d*\.?\d+").expect("outline token regex"));

/// Converts a string-encoded outline into absolute points.
///
/// Never fails: unrecognized tokens are skipped and a dangling odd
/// coordinate is truncated, so malformed input degrades to fewer points
/// rather than an error.
pub fn parse_outline(outline: &str) -> Vec<Point> {
    let tokens: Vec<&str> = OUTLINE_TOKENS
        .find_iter(outline)
        .map(|m| m.as_str())
        .collect();

    let mut points = Vec::new();
    let mut cursor_x = 0.0f32;
    let mut cursor_y = 0.0f32;
    let mut index = 0;

    while index < tokens.len() {
        let command = tokens[index];
        index += 1;
        if !command.eq_ignore_ascii_case("m") {
            continue;
        }

        let Some((dx, dy)) = coordinate_pair(&tokens, index) else {
            break;
        };
        index += 2;
        cursor_x += dx;
        cursor_y += dy;
        points.push(Point {
            x: cursor_x,
            y: cursor_y,
        });

        while let Some((dx, dy)) = coordinate_pair(&tokens, index) {
            index += 2;
            cursor_x += dx;
            cursor_y += dy;
            points.push(Point {
                x: cursor_x,
                y: cursor_y,
            });
        }
    }

    points
}

// Both tokens must be numeric; a command token or end of input in either
// slot truncates the pair.
fn coordinate_pair(tokens: &[&str], index: usize) -> Option<(f32, f32)> {
    let x = tokens.get(index)?.parse::<f32>().ok()?;
    let y = tokens.get(index + 1)?.parse::<f32>().ok()?;
    Some((x, y))
}
