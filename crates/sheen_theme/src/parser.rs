//! Theme definition parser
//!
//! The definition is line oriented. Each significant line is either
//!
//! ```text
//! @define-color window_background #fafafa;
//! button:checked:hover { background-image: image(#d6d1cd); border-color: @dark_border; }
//! ```
//!
//! and produces flat `key -> Color` entries. Widget rules are keyed
//! `<selector>_<property>` with pseudo-classes put in canonical order, so
//! `button:hover:checked` and `button:checked:hover` both define
//! `button_checked_hover_*`.
//!
//! Malformed lines and declarations are skipped; parsing never fails.

use rustc_hash::FxHashMap;
use sheen_core::Color;

/// Suffix of background image keys, replaced by the gradient keys
pub(crate) const BACKGROUND_IMAGE: &str = "_background_image";
pub(crate) const GRADIENT_START: &str = "_gradient_start";
pub(crate) const GRADIENT_STOP: &str = "_gradient_stop";

/// Pseudo-classes in the order the resolver appends state suffixes
const PSEUDO_ORDER: [&str; 5] = ["checked", "backdrop", "disabled", "active", "hover"];

/// Statistics about one parse
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// `@define-color` lines accepted
    pub definitions: usize,
    /// Widget rule lines accepted
    pub rules: usize,
    /// Lines skipped as malformed
    pub skipped_lines: usize,
    /// Declarations skipped inside otherwise valid rules
    pub skipped_declarations: usize,
}

/// Result of parsing a theme definition
#[derive(Clone, Debug, Default)]
pub struct ParsedDefinition {
    pub colors: FxHashMap<String, Color>,
    pub report: ParseReport,
}

/// A parsed property value
#[derive(Clone, Copy, Debug, PartialEq)]
enum Value {
    Color(Color),
    /// Endpoints already mapped to start (top) and stop (bottom)
    Gradient { start: Color, stop: Color },
}

/// Parse a whole theme definition
pub fn parse_definition(source: &str) -> ParsedDefinition {
    let mut parsed = ParsedDefinition::default();
    let mut in_comment = false;

    for (number, raw) in source.lines().enumerate() {
        let line = strip_comments(raw, &mut in_comment);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let accepted = if let Some(rest) = line.strip_prefix("@define-color") {
            parse_define(rest, &mut parsed.colors)
        } else if line.contains('{') {
            parse_rule(line, &mut parsed.colors, &mut parsed.report)
        } else {
            false
        };

        if accepted {
            if line.starts_with('@') {
                parsed.report.definitions += 1;
            } else {
                parsed.report.rules += 1;
            }
        } else {
            parsed.report.skipped_lines += 1;
            tracing::trace!(line = number + 1, text = line, "skipping malformed theme line");
        }
    }

    tracing::debug!(
        entries = parsed.colors.len(),
        definitions = parsed.report.definitions,
        rules = parsed.report.rules,
        skipped = parsed.report.skipped_lines,
        "parsed theme definition"
    );
    parsed
}

/// Remove `/* ... */` spans (possibly spanning lines) and `//` line comments
fn strip_comments(line: &str, in_comment: &mut bool) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    loop {
        if *in_comment {
            match rest.find("*/") {
                Some(end) => {
                    rest = &rest[end + 2..];
                    *in_comment = false;
                }
                None => return out,
            }
        } else {
            match rest.find("/*") {
                Some(start) => {
                    out.push_str(&rest[..start]);
                    rest = &rest[start + 2..];
                    *in_comment = true;
                }
                None => {
                    out.push_str(rest);
                    break;
                }
            }
        }
    }

    if out.trim_start().starts_with("//") {
        out.clear();
    }
    out
}

fn parse_define(rest: &str, colors: &mut FxHashMap<String, Color>) -> bool {
    // Require whitespace between the keyword and the name
    if !rest.starts_with(char::is_whitespace) {
        return false;
    }
    let Some(body) = rest.trim().strip_suffix(';') else {
        return false;
    };
    let Some((name, value)) = body.trim().split_once(char::is_whitespace) else {
        return false;
    };
    let Some(key) = normalize_name(name) else {
        return false;
    };
    match eval_value(value.trim(), colors) {
        Some(value) => {
            store(colors, key, value);
            true
        }
        None => false,
    }
}

fn parse_rule(
    line: &str,
    colors: &mut FxHashMap<String, Color>,
    report: &mut ParseReport,
) -> bool {
    let Some((selectors, body)) = line.split_once('{') else {
        return false;
    };
    let Some(body) = body.trim_end().strip_suffix('}') else {
        return false;
    };
    if body.contains('{') || body.contains('}') {
        return false;
    }

    let mut keys = Vec::new();
    for selector in selectors.split(',') {
        match selector_key(selector) {
            Some(key) => keys.push(key),
            None => return false,
        }
    }
    if keys.is_empty() {
        return false;
    }

    for declaration in body.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let parsed = declaration.split_once(':').and_then(|(property, value)| {
            let property = normalize_name(property.trim())?;
            let value = eval_value(value.trim(), colors)?;
            Some((property, value))
        });
        match parsed {
            Some((property, value)) => {
                for key in &keys {
                    store(colors, format!("{key}_{property}"), value);
                }
            }
            None => {
                report.skipped_declarations += 1;
                tracing::trace!(declaration, "skipping malformed declaration");
            }
        }
    }
    true
}

/// Store a value, expanding gradients into their start/stop keys
fn store(colors: &mut FxHashMap<String, Color>, key: String, value: Value) {
    match value {
        Value::Color(color) => {
            colors.insert(key, color);
        }
        Value::Gradient { start, stop } => {
            let base = key.strip_suffix(BACKGROUND_IMAGE).unwrap_or(&key);
            colors.insert(format!("{base}{GRADIENT_START}"), start);
            colors.insert(format!("{base}{GRADIENT_STOP}"), stop);
        }
    }
}

/// `button.flat:hover:checked` -> `button_flat_checked_hover`
fn selector_key(selector: &str) -> Option<String> {
    let mut elements: Vec<String> = Vec::new();
    let mut pseudos: Vec<String> = Vec::new();

    for compound in selector.split(|c: char| c.is_whitespace() || c == '>') {
        if compound.is_empty() {
            continue;
        }
        let mut parts = compound.split(':');
        let element = parts.next().unwrap_or_default();
        for class in element.split('.') {
            if class.is_empty() {
                continue;
            }
            elements.push(normalize_name(class)?);
        }
        for pseudo in parts {
            let pseudo = normalize_name(pseudo)?;
            if !pseudos.contains(&pseudo) {
                pseudos.push(pseudo);
            }
        }
    }

    if elements.is_empty() {
        return None;
    }

    let rank = |pseudo: &String| {
        PSEUDO_ORDER
            .iter()
            .position(|known| *known == pseudo.as_str())
            .unwrap_or(PSEUDO_ORDER.len())
    };
    // Stable: unknown pseudo-classes keep their file order at the end.
    pseudos.sort_by_key(rank);

    let mut key = elements.join("_");
    for pseudo in pseudos {
        key.push('_');
        key.push_str(&pseudo);
    }
    Some(key)
}

/// Lower-case identifier with `-` turned into `_`
fn normalize_name(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return None;
    }
    Some(name.to_ascii_lowercase().replace('-', "_"))
}

fn eval_value(value: &str, colors: &FxHashMap<String, Color>) -> Option<Value> {
    if let Some(inner) = call(value, "linear-gradient") {
        return eval_gradient(inner, colors);
    }
    if let Some(inner) = call(value, "image") {
        return eval_color(inner.trim(), colors).map(Value::Color);
    }
    eval_color(value, colors).map(Value::Color)
}

fn eval_gradient(args: &str, colors: &FxHashMap<String, Color>) -> Option<Value> {
    let mut args = split_args(args);
    if args.is_empty() {
        return None;
    }

    let direction = args[0];
    let to_top = if direction.starts_with("to ") || direction.ends_with("deg") {
        args.remove(0);
        is_to_top(direction)
    } else {
        false
    };

    if args.len() < 2 {
        return None;
    }
    let first = eval_color(strip_stop_position(args[0]), colors)?;
    let last = eval_color(strip_stop_position(args[args.len() - 1]), colors)?;

    // "to top" paints the first color at the bottom edge.
    Some(if to_top {
        Value::Gradient {
            start: last,
            stop: first,
        }
    } else {
        Value::Gradient {
            start: first,
            stop: last,
        }
    })
}

fn is_to_top(direction: &str) -> bool {
    let direction: Vec<&str> = direction.split_whitespace().collect();
    direction == ["to", "top"] || direction == ["0deg"] || direction == ["360deg"]
}

/// `#fff 40%` -> `#fff`
fn strip_stop_position(stop: &str) -> &str {
    let stop = stop.trim();
    match stop.rsplit_once(char::is_whitespace) {
        Some((color, position))
            if position.ends_with('%') || position.ends_with("px") || position == "0" =>
        {
            color.trim()
        }
        _ => stop,
    }
}

fn eval_color(value: &str, colors: &FxHashMap<String, Color>) -> Option<Color> {
    let value = value.trim();

    if let Some(name) = value.strip_prefix('@') {
        return colors.get(&normalize_name(name)?).copied();
    }

    if let Some(inner) = call(value, "alpha") {
        let [color, factor] = two_args(inner)?;
        return Some(eval_color(color, colors)?.scale_alpha(parse_factor(factor)?));
    }
    if let Some(inner) = call(value, "shade") {
        let [color, factor] = two_args(inner)?;
        return Some(eval_color(color, colors)?.shade(parse_factor(factor)?));
    }
    if let Some(inner) = call(value, "mix") {
        let args = split_args(inner);
        if args.len() != 3 {
            return None;
        }
        let from = eval_color(args[0], colors)?;
        let to = eval_color(args[1], colors)?;
        return Some(Color::lerp(&from, &to, parse_factor(args[2])?));
    }
    if let Some(inner) = call(value, "lighter") {
        return Some(eval_color(inner, colors)?.shade(1.3));
    }
    if let Some(inner) = call(value, "darker") {
        return Some(eval_color(inner, colors)?.shade(0.7));
    }

    Color::parse(value).ok()
}

fn two_args(inner: &str) -> Option<[&str; 2]> {
    match split_args(inner).as_slice() {
        [a, b] => Some([*a, *b]),
        _ => None,
    }
}

fn parse_factor(text: &str) -> Option<f32> {
    text.trim().parse::<f32>().ok().filter(|f| f.is_finite())
}

/// Inner text of `name(...)` when the parentheses wrap the whole value
fn call<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    let rest = value.strip_prefix(name)?.trim_start();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    // Reject `a(x) b(y)` style values whose outer parens do not match.
    let mut depth = 0i32;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    (depth == 0).then_some(inner)
}

/// Split on commas that are not nested in parentheses
fn split_args(args: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in args.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                out.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    let last = args[start..].trim();
    if !last.is_empty() || !out.is_empty() {
        out.push(last);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(parsed: &ParsedDefinition, key: &str) -> Option<Color> {
        parsed.colors.get(key).copied()
    }

    #[test]
    fn test_define_color_forms() {
        let parsed = parse_definition(
            "@define-color window_background #fafafa;\n\
             @define-color shadow rgba(0, 0, 0, 0.5);\n\
             @define-color view_background @window_background;\n\
             @define-color focus-border alpha(#3584e4, 0.5);\n",
        );
        assert_eq!(
            color(&parsed, "window_background"),
            Some(Color::from_hex(0xFAFAFA))
        );
        assert_eq!(color(&parsed, "shadow"), Some(Color::rgba(0, 0, 0, 128)));
        assert_eq!(
            color(&parsed, "view_background"),
            Some(Color::from_hex(0xFAFAFA))
        );
        assert_eq!(
            color(&parsed, "focus_border"),
            Some(Color::rgba(0x35, 0x84, 0xE4, 128))
        );
        assert_eq!(parsed.report.definitions, 4);
        assert_eq!(parsed.report.skipped_lines, 0);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let parsed = parse_definition(
            "@define-color broken #zzzzzz;\n\
             @define-color missing_semicolon #ffffff\n\
             @define-colorname #ffffff;\n\
             this is not css\n\
             button { color: #000000\n\
             @define-color ok #010203;\n\
             @define-color unresolved @nowhere;\n",
        );
        assert_eq!(parsed.colors.len(), 1);
        assert_eq!(color(&parsed, "ok"), Some(Color::rgb(1, 2, 3)));
        assert_eq!(parsed.report.skipped_lines, 6);
    }

    #[test]
    fn test_widget_rule_keys() {
        let parsed = parse_definition(
            "button:hover:checked { background-image: image(#ffffff); border-color: #cdc7c2; color: #2e3436; }",
        );
        assert_eq!(
            color(&parsed, "button_checked_hover_background_image"),
            Some(Color::WHITE)
        );
        assert_eq!(
            color(&parsed, "button_checked_hover_border_color"),
            Some(Color::from_hex(0xCDC7C2))
        );
        assert_eq!(
            color(&parsed, "button_checked_hover_color"),
            Some(Color::from_hex(0x2E3436))
        );
        assert_eq!(parsed.report.rules, 1);
    }

    #[test]
    fn test_selector_normalization() {
        assert_eq!(
            selector_key("button.flat:hover").as_deref(),
            Some("button_flat_hover")
        );
        assert_eq!(
            selector_key("scrollbar slider:disabled:backdrop").as_deref(),
            Some("scrollbar_slider_backdrop_disabled")
        );
        assert_eq!(
            selector_key("header > button:hover:active").as_deref(),
            Some("header_button_active_hover")
        );
        assert_eq!(
            selector_key("tab:focus:hover").as_deref(),
            Some("tab_hover_focus")
        );
        assert_eq!(selector_key(":hover"), None);
        assert_eq!(selector_key("but$ton"), None);
    }

    #[test]
    fn test_selector_lists_apply_to_each() {
        let parsed = parse_definition("check, radio { color: #123456; }");
        assert_eq!(
            color(&parsed, "check_color"),
            Some(Color::from_hex(0x123456))
        );
        assert_eq!(
            color(&parsed, "radio_color"),
            Some(Color::from_hex(0x123456))
        );
    }

    #[test]
    fn test_bad_declaration_keeps_rest_of_rule() {
        let parsed = parse_definition("button { color: nonsense; border-color: #000000; }");
        assert_eq!(parsed.report.rules, 1);
        assert_eq!(parsed.report.skipped_declarations, 1);
        assert_eq!(color(&parsed, "button_border_color"), Some(Color::BLACK));
        assert_eq!(color(&parsed, "button_color"), None);
    }

    #[test]
    fn test_gradient_to_bottom() {
        let parsed = parse_definition(
            "button { background-image: linear-gradient(to bottom, #ffffff, #000000); }",
        );
        assert_eq!(
            color(&parsed, "button_gradient_start"),
            Some(Color::WHITE)
        );
        assert_eq!(color(&parsed, "button_gradient_stop"), Some(Color::BLACK));
        assert_eq!(color(&parsed, "button_background_image"), None);
    }

    #[test]
    fn test_gradient_to_top_inverts_endpoints() {
        let parsed = parse_definition(
            "button:hover { background-image: linear-gradient(to top, #edebe9 2px, #f6f5f4); }",
        );
        assert_eq!(
            color(&parsed, "button_hover_gradient_start"),
            Some(Color::from_hex(0xF6F5F4))
        );
        assert_eq!(
            color(&parsed, "button_hover_gradient_stop"),
            Some(Color::from_hex(0xEDEBE9))
        );
    }

    #[test]
    fn test_gradient_without_direction() {
        let parsed =
            parse_definition("@define-color headerbar linear-gradient(#111111, #222222);");
        assert_eq!(
            color(&parsed, "headerbar_gradient_start"),
            Some(Color::from_hex(0x111111))
        );
        assert_eq!(
            color(&parsed, "headerbar_gradient_stop"),
            Some(Color::from_hex(0x222222))
        );
    }

    #[test]
    fn test_comments() {
        let parsed = parse_definition(
            "/* palette\n\
             @define-color hidden #ffffff;\n\
             */ @define-color shown #000000;\n\
             // @define-color also_hidden #ffffff;\n\
             @define-color inline /* note */ #010101;\n",
        );
        assert_eq!(color(&parsed, "hidden"), None);
        assert_eq!(color(&parsed, "also_hidden"), None);
        assert_eq!(color(&parsed, "shown"), Some(Color::BLACK));
        assert_eq!(color(&parsed, "inline"), Some(Color::rgb(1, 1, 1)));
    }

    #[test]
    fn test_color_functions() {
        let parsed = parse_definition(
            "@define-color base #808080;\n\
             @define-color mixed mix(#000000, #ffffff, 0.5);\n\
             @define-color dim shade(@base, 0.5);\n\
             @define-color nested alpha(mix(@base, #ffffff, 1.0), 0.0);\n",
        );
        assert_eq!(color(&parsed, "mixed"), Some(Color::rgb(128, 128, 128)));
        assert!(color(&parsed, "dim").unwrap().r < 0x80);
        assert_eq!(color(&parsed, "nested"), Some(Color::rgba(255, 255, 255, 0)));
    }

    #[test]
    fn test_later_definitions_override() {
        let parsed = parse_definition(
            "@define-color accent #000000;\n@define-color accent #ffffff;\n",
        );
        assert_eq!(color(&parsed, "accent"), Some(Color::WHITE));
    }

    #[test]
    fn test_split_args_nested() {
        assert_eq!(
            split_args("to top, rgba(1, 2, 3, 0.5), #fff"),
            vec!["to top", "rgba(1, 2, 3, 0.5)", "#fff"]
        );
        assert!(split_args("").is_empty());
    }
}
