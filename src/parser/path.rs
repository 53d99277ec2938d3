use crate::types::PathStart;
use once_cell::sync::Lazy;
use regex::Regex;

// The standalone `d` attribute; the leading whitespace keeps `id="…"` out.
static PATH_DATA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\sd="([^"]*)""#).expect("path data pattern is valid"));

// First pair after the move-to command, both with a fractional part.
static MOVE_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\d+\.\d+),(\d+\.\d+)").expect("move pair pattern is valid")
});

static SCALE_TRANSFORM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\stransform="scale\(([^)]*)\)""#).expect("scale transform pattern is valid")
});

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").expect("number pattern is valid")
});

/// Read the starting point of a path tag and its scale factor.
///
/// Only relative move-to paths (`d="m x.x,y.y …"`) are supported. Returns
/// `None` when the tag has no path data, the data does not start with `m`,
/// the first coordinate pair does not parse, or the scaled point overflows.
pub fn decode_path(tag: &str) -> Option<PathStart> {
    let data = PATH_DATA.captures(tag)?.get(1)?.as_str();
    let rest = data.strip_prefix('m')?;
    let caps = MOVE_PAIR.captures(rest)?;
    let x = caps.get(1)?.as_str().parse::<f64>().ok()?;
    let y = caps.get(2)?.as_str().parse::<f64>().ok()?;
    let scale = extract_scale(tag);

    let start = PathStart { x, y, scale };
    let (scaled_x, scaled_y) = start.scaled();
    if !(scaled_x.is_finite() && scaled_y.is_finite()) {
        return None;
    }
    Some(start)
}

/// Scale factor from `transform="scale(…)"`, defaulting to 1.0.
///
/// A non-uniform `scale(sx,sy)` is read as its first number and applied to
/// both axes.
pub fn extract_scale(tag: &str) -> f64 {
    SCALE_TRANSFORM
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .and_then(|args| NUMBER.find(args.as_str()))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|scale| scale.is_finite())
        .unwrap_or(1.0)
}
