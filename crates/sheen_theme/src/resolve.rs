//! State-aware color resolution
//!
//! Widget colors are looked up under `<prefix><suffix>_<property>` where the
//! suffix is assembled from the interaction state in fixed tiers:
//!
//! | tier | condition                     | segment              |
//! |------|-------------------------------|----------------------|
//! | 1    | checked or sunken             | `_checked`           |
//! | 2    | inactive window and disabled  | `_backdrop_disabled` |
//! |      | inactive window               | `_backdrop`          |
//! |      | disabled                      | `_disabled`          |
//! | 3    | sunken (pressed)              | `_active`            |
//! | 4    | hovered                       | `_hover`             |
//!
//! At most one segment per tier is used. Tiers 3 and 4 only apply to
//! enabled controls, and a sunken control never takes the hover segment.
//! Theme keys such as `button_checked_active` fall back to `button_checked`
//! when the pressed look is not defined.
//!
//! While a transition is in flight the control is resolved at rest on both
//! sides of the animated flag and the two colors are blended by the
//! transition opacity. Focused outlines show the focus border throughout.

use crate::colors::ThemeColors;
use crate::ids::SemanticColorId;
use crate::palette::ColorGroup;
use crate::table::ColorTable;
use crate::variant::ThemeVariant;
use sheen_animation::AnimationMode;
use sheen_core::{Color, ColorGradient};
use std::fmt;
use std::str::FromStr;

/// Interaction flags of the control being painted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InteractionState {
    pub enabled: bool,
    /// The control's window has keyboard focus
    pub window_active: bool,
    pub sunken: bool,
    pub checked: bool,
    pub hovered: bool,
    pub has_focus: bool,
    /// Frameless button style
    pub flat: bool,
}

impl InteractionState {
    pub fn color_group(&self) -> ColorGroup {
        if !self.enabled {
            ColorGroup::Disabled
        } else if !self.window_active {
            ColorGroup::Inactive
        } else {
            ColorGroup::Active
        }
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            enabled: true,
            window_active: true,
            sunken: false,
            checked: false,
            hovered: false,
            has_focus: false,
            flat: false,
        }
    }
}

/// Everything a resolution depends on besides the theme colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorOptions {
    pub variant: ThemeVariant,
    pub state: InteractionState,
    /// Transition in flight, if any
    pub animation: Option<AnimationMode>,
    /// Progress of `animation`, `0.0` = before, `1.0` = after
    pub opacity: f32,
}

impl ColorOptions {
    pub fn new(variant: ThemeVariant, state: InteractionState) -> Self {
        Self {
            variant,
            state,
            animation: None,
            opacity: 1.0,
        }
    }

    pub fn with_animation(mut self, mode: AnimationMode, opacity: f32) -> Self {
        self.animation = Some(mode);
        self.opacity = opacity;
        self
    }

    pub fn color_group(&self) -> ColorGroup {
        self.state.color_group()
    }
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self::new(ThemeVariant::default(), InteractionState::default())
    }
}

/// Stateful widget colors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetRole {
    ButtonBackground,
    ButtonOutline,
    ButtonForeground,
    CheckBackground,
    CheckOutline,
    CheckMark,
    RadioBackground,
    RadioOutline,
    RadioMark,
    SliderHandle,
    SliderOutline,
    SliderTrough,
    SliderHighlight,
    ScrollBarSlider,
    ScrollBarTrough,
    SpinArrow,
    TabBackground,
    TabForeground,
    HeaderBackground,
    DialHandle,
    ProgressBarIndicator,
}

impl WidgetRole {
    pub const ALL: [WidgetRole; 21] = [
        WidgetRole::ButtonBackground,
        WidgetRole::ButtonOutline,
        WidgetRole::ButtonForeground,
        WidgetRole::CheckBackground,
        WidgetRole::CheckOutline,
        WidgetRole::CheckMark,
        WidgetRole::RadioBackground,
        WidgetRole::RadioOutline,
        WidgetRole::RadioMark,
        WidgetRole::SliderHandle,
        WidgetRole::SliderOutline,
        WidgetRole::SliderTrough,
        WidgetRole::SliderHighlight,
        WidgetRole::ScrollBarSlider,
        WidgetRole::ScrollBarTrough,
        WidgetRole::SpinArrow,
        WidgetRole::TabBackground,
        WidgetRole::TabForeground,
        WidgetRole::HeaderBackground,
        WidgetRole::DialHandle,
        WidgetRole::ProgressBarIndicator,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::ButtonBackground => "button-background",
            Self::ButtonOutline => "button-outline",
            Self::ButtonForeground => "button-foreground",
            Self::CheckBackground => "check-background",
            Self::CheckOutline => "check-outline",
            Self::CheckMark => "check-mark",
            Self::RadioBackground => "radio-background",
            Self::RadioOutline => "radio-outline",
            Self::RadioMark => "radio-mark",
            Self::SliderHandle => "slider-handle",
            Self::SliderOutline => "slider-outline",
            Self::SliderTrough => "slider-trough",
            Self::SliderHighlight => "slider-highlight",
            Self::ScrollBarSlider => "scrollbar-slider",
            Self::ScrollBarTrough => "scrollbar-trough",
            Self::SpinArrow => "spin-arrow",
            Self::TabBackground => "tab-background",
            Self::TabForeground => "tab-foreground",
            Self::HeaderBackground => "header-background",
            Self::DialHandle => "dial-handle",
            Self::ProgressBarIndicator => "progressbar-indicator",
        }
    }

    /// Key prefix in the color table
    pub fn prefix(self, flat: bool) -> &'static str {
        match self {
            Self::ButtonBackground | Self::ButtonOutline | Self::ButtonForeground => {
                if flat {
                    "button_flat"
                } else {
                    "button"
                }
            }
            Self::CheckBackground | Self::CheckOutline | Self::CheckMark => "check",
            Self::RadioBackground | Self::RadioOutline | Self::RadioMark => "radio",
            Self::SliderHandle | Self::SliderOutline => "slider",
            Self::SliderTrough => "trough",
            Self::SliderHighlight => "trough_highlight",
            Self::ScrollBarSlider => "scrollbar_slider",
            Self::ScrollBarTrough => "scrollbar_trough",
            Self::SpinArrow => "spinbutton",
            Self::TabBackground | Self::TabForeground => "tab",
            Self::HeaderBackground => "header_button",
            Self::DialHandle => "dial",
            Self::ProgressBarIndicator => "progressbar",
        }
    }

    /// Property part of the table key
    pub fn property(self) -> &'static str {
        match self {
            Self::ButtonBackground
            | Self::CheckBackground
            | Self::RadioBackground
            | Self::SliderHandle
            | Self::HeaderBackground
            | Self::DialHandle
            | Self::ProgressBarIndicator => "background_image",
            Self::SliderTrough
            | Self::SliderHighlight
            | Self::ScrollBarSlider
            | Self::ScrollBarTrough
            | Self::TabBackground => "background_color",
            Self::ButtonOutline | Self::CheckOutline | Self::RadioOutline | Self::SliderOutline => {
                "border_color"
            }
            Self::ButtonForeground
            | Self::CheckMark
            | Self::RadioMark
            | Self::SpinArrow
            | Self::TabForeground => "color",
        }
    }

    /// Outline roles show keyboard focus
    pub fn shows_focus(self) -> bool {
        matches!(
            self,
            Self::ButtonOutline | Self::CheckOutline | Self::RadioOutline | Self::SliderOutline
        )
    }

    /// Whether a transition of `mode` changes this role's color
    pub fn reacts_to(self, mode: AnimationMode) -> bool {
        match mode {
            AnimationMode::Enable => true,
            AnimationMode::Focus => self.shows_focus(),
            AnimationMode::Hover => !matches!(
                self,
                Self::SliderTrough | Self::SliderHighlight | Self::ProgressBarIndicator
            ),
            AnimationMode::Pressed => !matches!(
                self,
                Self::SliderTrough
                    | Self::SliderHighlight
                    | Self::ScrollBarTrough
                    | Self::TabBackground
                    | Self::TabForeground
                    | Self::ProgressBarIndicator
            ),
        }
    }
}

impl fmt::Display for WidgetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WidgetRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.id() == s)
            .ok_or_else(|| format!("unknown widget role: {s}"))
    }
}

/// What to resolve
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Plain palette color, only the color group matters
    Static(SemanticColorId),
    /// Widget color that depends on the full interaction state
    Widget(WidgetRole),
}

impl From<SemanticColorId> for ColorRole {
    fn from(id: SemanticColorId) -> Self {
        ColorRole::Static(id)
    }
}

impl From<WidgetRole> for ColorRole {
    fn from(role: WidgetRole) -> Self {
        ColorRole::Widget(role)
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorRole::Static(id) => write!(f, "{id}"),
            ColorRole::Widget(role) => write!(f, "{role}"),
        }
    }
}

impl FromStr for ColorRole {
    type Err = String;

    /// Widget role ids (`button-background`) or semantic keys (`window_background`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(role) = s.parse::<WidgetRole>() {
            return Ok(ColorRole::Widget(role));
        }
        SemanticColorId::from_key(&s.replace('-', "_"))
            .map(ColorRole::Static)
            .ok_or_else(|| format!("unknown color role: {s}"))
    }
}

/// Something the resolver can look up and blend
trait Paint: Copy {
    fn fetch(table: &ColorTable, state_key: &str, property: &str) -> Option<Self>;
    fn solid(color: Color) -> Self;
    fn mix(from: &Self, to: &Self, t: f32) -> Self;
    fn fade(self, factor: f32) -> Self;
}

impl Paint for Color {
    fn fetch(table: &ColorTable, state_key: &str, property: &str) -> Option<Self> {
        table.widget_color(state_key, property)
    }

    fn solid(color: Color) -> Self {
        color
    }

    fn mix(from: &Self, to: &Self, t: f32) -> Self {
        Color::lerp(from, to, t)
    }

    fn fade(self, factor: f32) -> Self {
        self.scale_alpha(factor)
    }
}

impl Paint for ColorGradient {
    fn fetch(table: &ColorTable, state_key: &str, property: &str) -> Option<Self> {
        if property == "background_image" {
            table.widget_gradient(state_key)
        } else {
            table
                .widget_color(state_key, property)
                .map(ColorGradient::solid)
        }
    }

    fn solid(color: Color) -> Self {
        ColorGradient::solid(color)
    }

    fn mix(from: &Self, to: &Self, t: f32) -> Self {
        ColorGradient::lerp(from, to, t)
    }

    fn fade(self, factor: f32) -> Self {
        self.scale_alpha(factor)
    }
}

/// Pure color resolution over a set of theme colors
#[derive(Clone, Copy, Debug)]
pub struct ColorResolver<'a> {
    colors: &'a ThemeColors,
}

impl<'a> ColorResolver<'a> {
    pub fn new(colors: &'a ThemeColors) -> Self {
        Self { colors }
    }

    /// Resolve a color. `None` means "do not paint this layer".
    pub fn resolve(&self, role: impl Into<ColorRole>, options: &ColorOptions) -> Option<Color> {
        match role.into() {
            ColorRole::Static(id) => self.static_color(id, options),
            ColorRole::Widget(role) => self.widget::<Color>(role, options),
        }
    }

    /// Resolve a two-stop gradient; flat colors come back as solid gradients
    pub fn resolve_gradient(
        &self,
        role: impl Into<ColorRole>,
        options: &ColorOptions,
    ) -> Option<ColorGradient> {
        match role.into() {
            ColorRole::Static(id) => self.static_color(id, options).map(ColorGradient::solid),
            ColorRole::Widget(role) => self.widget::<ColorGradient>(role, options),
        }
    }

    /// Table key a widget role reads when no transition is in flight
    pub fn state_key(role: WidgetRole, state: &InteractionState) -> String {
        format!(
            "{}{}_{}",
            role.prefix(state.flat),
            static_suffix(state),
            role.property()
        )
    }

    fn static_color(&self, id: SemanticColorId, options: &ColorOptions) -> Option<Color> {
        self.colors
            .palette(options.variant)
            .color(options.color_group(), id)
    }

    fn focus_color(&self, options: &ColorOptions) -> Option<Color> {
        self.static_color(SemanticColorId::FocusBorder, options)
    }

    fn widget<P: Paint>(&self, role: WidgetRole, options: &ColorOptions) -> Option<P> {
        let state = options.state;
        let Some(mode) = options.animation.filter(|mode| role.reacts_to(*mode)) else {
            return self.settled(role, &state, options);
        };

        // Both sides are settled colors, so a finished transition reads the
        // same as the control at rest.
        let (pre, post) = match mode {
            AnimationMode::Hover => (
                InteractionState {
                    hovered: false,
                    ..state
                },
                InteractionState {
                    hovered: true,
                    ..state
                },
            ),
            AnimationMode::Pressed => (
                InteractionState {
                    sunken: false,
                    ..state
                },
                InteractionState {
                    sunken: true,
                    ..state
                },
            ),
            AnimationMode::Focus => (
                InteractionState {
                    has_focus: false,
                    ..state
                },
                InteractionState {
                    has_focus: true,
                    ..state
                },
            ),
            AnimationMode::Enable => (
                InteractionState {
                    enabled: false,
                    ..state
                },
                InteractionState {
                    enabled: true,
                    ..state
                },
            ),
        };
        blend(
            self.settled(role, &pre, options),
            self.settled(role, &post, options),
            options.opacity,
        )
    }

    /// Color of a control at rest in `state`. A focused outline shows the
    /// focus border regardless of hover or press.
    fn settled<P: Paint>(
        &self,
        role: WidgetRole,
        state: &InteractionState,
        options: &ColorOptions,
    ) -> Option<P> {
        if role.shows_focus() && state.has_focus && state.enabled {
            if let Some(focus) = self.focus_color(options) {
                return Some(P::solid(focus));
            }
        }
        let table = self.colors.table(options.variant);
        let key = format!("{}{}", role.prefix(state.flat), static_suffix(state));
        P::fetch(table, &key, role.property())
    }
}

/// Suffix for a control at rest. Sunken controls read the checked tier
/// followed by `_active`; hover never applies to them.
fn static_suffix(state: &InteractionState) -> String {
    let mut suffix = String::new();
    if state.checked || state.sunken {
        suffix.push_str("_checked");
    }
    suffix.push_str(match (state.window_active, state.enabled) {
        (false, false) => "_backdrop_disabled",
        (false, true) => "_backdrop",
        (true, false) => "_disabled",
        (true, true) => "",
    });
    if state.enabled && state.sunken {
        suffix.push_str("_active");
    } else if state.enabled && state.hovered {
        suffix.push_str("_hover");
    }
    suffix
}

/// Blend the two sides of a transition.
///
/// The boundaries return either side untouched. In between, a side that
/// does not resolve is a layer that is not painted: no color is made up for
/// it, and the side that does resolve fades in or out by its weight.
fn blend<P: Paint>(pre: Option<P>, post: Option<P>, opacity: f32) -> Option<P> {
    if opacity.is_nan() || opacity <= 0.0 {
        return pre;
    }
    if opacity >= 1.0 {
        return post;
    }
    match (pre, post) {
        (Some(pre), Some(post)) => Some(P::mix(&pre, &post, opacity)),
        (Some(pre), None) => Some(pre.fade(1.0 - opacity)),
        (None, Some(post)) => Some(post.fade(opacity)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUTTONS: &str = "\
@define-color focus_border #3584e4;
button { background-image: image(#e0e0e0); border-color: #cdc7c2; color: #2e3436; }
button:hover { background-image: image(#ffffff); }
button:checked:active { background-image: image(#d6d1cd); }
button:checked { background-image: image(#c0bbb7); }
button:checked:hover { background-image: image(#c8c3bf); }
button:disabled { background-image: image(#faf9f8); }
button:backdrop { background-image: image(#f6f5f4); }
button:backdrop:disabled { background-image: image(#fafafa); }
button.flat { background-image: image(rgba(0, 0, 0, 0)); }
";

    fn colors(source: &str) -> ThemeColors {
        ThemeColors::builtin()
            .with_definition(ThemeVariant::Light, source)
            .unwrap()
    }

    fn resolve(colors: &ThemeColors, role: WidgetRole, options: ColorOptions) -> Option<Color> {
        colors.resolver().resolve(role, &options)
    }

    fn state() -> InteractionState {
        InteractionState::default()
    }

    #[test]
    fn test_hover_blend_halfway() {
        let colors = colors(BUTTONS);
        let options = ColorOptions::new(
            ThemeVariant::Light,
            InteractionState {
                hovered: true,
                ..state()
            },
        )
        .with_animation(AnimationMode::Hover, 0.5);
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonBackground, options),
            Some(Color::from_hex(0xF0F0F0))
        );
    }

    #[test]
    fn test_blend_boundaries() {
        let colors = colors(BUTTONS);
        let options = ColorOptions::new(ThemeVariant::Light, state());
        let at = |opacity| {
            resolve(
                &colors,
                WidgetRole::ButtonBackground,
                options.with_animation(AnimationMode::Hover, opacity),
            )
        };
        assert_eq!(at(0.0), Some(Color::from_hex(0xE0E0E0)));
        assert_eq!(at(-3.0), Some(Color::from_hex(0xE0E0E0)));
        assert_eq!(at(f32::NAN), Some(Color::from_hex(0xE0E0E0)));
        assert_eq!(at(1.0), Some(Color::WHITE));
        assert_eq!(at(7.0), Some(Color::WHITE));
    }

    #[test]
    fn test_sunken_wins_over_hover() {
        let colors = colors(BUTTONS);
        let options = ColorOptions::new(
            ThemeVariant::Light,
            InteractionState {
                sunken: true,
                hovered: true,
                ..state()
            },
        );
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonBackground, options),
            Some(Color::from_hex(0xD6D1CD))
        );
        assert_eq!(
            ColorResolver::state_key(WidgetRole::ButtonBackground, &options.state),
            "button_checked_active_background_image"
        );
    }

    #[test]
    fn test_checked_and_hovered_concatenate() {
        let colors = colors(BUTTONS);
        let options = ColorOptions::new(
            ThemeVariant::Light,
            InteractionState {
                checked: true,
                hovered: true,
                ..state()
            },
        );
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonBackground, options),
            Some(Color::from_hex(0xC8C3BF))
        );
    }

    #[test]
    fn test_backdrop_disabled_is_checked_as_compound() {
        let colors = colors(BUTTONS);
        let options = ColorOptions::new(
            ThemeVariant::Light,
            InteractionState {
                enabled: false,
                window_active: false,
                ..state()
            },
        );
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonBackground, options),
            Some(Color::from_hex(0xFAFAFA))
        );
    }

    #[test]
    fn test_disabled_ignores_hover() {
        let colors = colors(BUTTONS);
        let options = ColorOptions::new(
            ThemeVariant::Light,
            InteractionState {
                enabled: false,
                hovered: true,
                ..state()
            },
        );
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonBackground, options),
            Some(Color::from_hex(0xFAF9F8))
        );
    }

    #[test]
    fn test_pressed_transition() {
        let colors = colors(BUTTONS);
        let options = ColorOptions::new(
            ThemeVariant::Light,
            InteractionState {
                sunken: true,
                hovered: true,
                ..state()
            },
        );
        let at = |opacity| {
            resolve(
                &colors,
                WidgetRole::ButtonBackground,
                options.with_animation(AnimationMode::Pressed, opacity),
            )
        };
        assert_eq!(at(0.0), Some(Color::WHITE));
        assert_eq!(at(1.0), Some(Color::from_hex(0xD6D1CD)));
    }

    #[test]
    fn test_pressed_transition_ends_at_rest() {
        let colors = colors(BUTTONS);
        let resolver = colors.resolver();
        for sunken in [true, false] {
            let state = InteractionState {
                sunken,
                hovered: true,
                ..state()
            };
            let options = ColorOptions::new(ThemeVariant::Light, state);
            let at_rest = resolver.resolve(WidgetRole::ButtonBackground, &options);
            // Press settles at 1, release at 0.
            let settled = if sunken { 1.0 } else { 0.0 };
            let near = if sunken { 0.999 } else { 0.001 };
            let animated = |opacity| {
                resolver.resolve(
                    WidgetRole::ButtonBackground,
                    &options.with_animation(AnimationMode::Pressed, opacity),
                )
            };
            assert_eq!(animated(settled), at_rest);
            assert_eq!(animated(near), at_rest);
        }
    }

    #[test]
    fn test_settled_sunken_reads_checked_without_pressed_look() {
        let colors = colors(
            "button { color: #111111; }\nbutton:checked { color: #222222; }\nbutton:hover { color: #333333; }",
        );
        let options = ColorOptions::new(
            ThemeVariant::Light,
            InteractionState {
                sunken: true,
                hovered: true,
                ..state()
            },
        );
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonForeground, options),
            Some(Color::from_hex(0x222222))
        );
    }

    #[test]
    fn test_focus_held_through_other_transitions() {
        let colors = colors(BUTTONS);
        let focused = InteractionState {
            has_focus: true,
            hovered: true,
            ..state()
        };
        let options = ColorOptions::new(ThemeVariant::Light, focused);
        let focus_border = Some(Color::from_hex(0x3584E4));
        for mode in [AnimationMode::Hover, AnimationMode::Pressed] {
            for opacity in [0.0, 0.01, 0.5, 1.0] {
                assert_eq!(
                    resolve(
                        &colors,
                        WidgetRole::ButtonOutline,
                        options.with_animation(mode, opacity)
                    ),
                    focus_border,
                    "{mode:?} at {opacity}"
                );
            }
        }
        // Enabling fades from the disabled outline into the focus border.
        assert_eq!(
            resolve(
                &colors,
                WidgetRole::ButtonOutline,
                options.with_animation(AnimationMode::Enable, 1.0)
            ),
            focus_border
        );
    }

    #[test]
    fn test_focus() {
        let colors = colors(BUTTONS);
        let focused = ColorOptions::new(
            ThemeVariant::Light,
            InteractionState {
                has_focus: true,
                ..state()
            },
        );
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonOutline, focused),
            Some(Color::from_hex(0x3584E4))
        );
        assert_eq!(
            resolve(
                &colors,
                WidgetRole::ButtonOutline,
                focused.with_animation(AnimationMode::Focus, 0.0)
            ),
            Some(Color::from_hex(0xCDC7C2))
        );
        // Not an outline role: focus does not apply.
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonForeground, focused),
            Some(Color::from_hex(0x2E3436))
        );
    }

    #[test]
    fn test_enable_transition() {
        let colors = colors(BUTTONS);
        let options = ColorOptions::new(ThemeVariant::Light, state());
        assert_eq!(
            resolve(
                &colors,
                WidgetRole::ButtonBackground,
                options.with_animation(AnimationMode::Enable, 0.0)
            ),
            Some(Color::from_hex(0xFAF9F8))
        );
    }

    #[test]
    fn test_one_sided_blend_fades() {
        let colors = colors("@define-color focus_border #3584e4;\nbutton:hover { color: #000000; }");
        let options = ColorOptions::new(ThemeVariant::Light, state())
            .with_animation(AnimationMode::Hover, 0.25);
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonForeground, options),
            Some(Color::rgba(0, 0, 0, 64))
        );
        assert_eq!(
            resolve(
                &colors,
                WidgetRole::ButtonForeground,
                options.with_animation(AnimationMode::Hover, 0.0)
            ),
            None
        );
    }

    #[test]
    fn test_flat_prefix() {
        let colors = colors(BUTTONS);
        let options = ColorOptions::new(
            ThemeVariant::Light,
            InteractionState {
                flat: true,
                ..state()
            },
        );
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonBackground, options),
            Some(Color::TRANSPARENT)
        );
    }

    #[test]
    fn test_unrelated_mode_is_ignored() {
        let colors = colors(BUTTONS);
        let options = ColorOptions::new(ThemeVariant::Light, state())
            .with_animation(AnimationMode::Focus, 0.5);
        assert_eq!(
            resolve(&colors, WidgetRole::ButtonBackground, options),
            Some(Color::from_hex(0xE0E0E0))
        );
    }

    #[test]
    fn test_static_roles_use_color_group() {
        let colors = colors(
            "@define-color window_foreground #2e3436;\n\
             @define-color window_foreground_disabled #8b8e8f;\n",
        );
        let resolver = colors.resolver();
        let enabled = ColorOptions::new(ThemeVariant::Light, state());
        let disabled = ColorOptions::new(
            ThemeVariant::Light,
            InteractionState {
                enabled: false,
                ..state()
            },
        );
        assert_eq!(
            resolver.resolve(SemanticColorId::WindowForeground, &enabled),
            Some(Color::from_hex(0x2E3436))
        );
        assert_eq!(
            resolver.resolve(SemanticColorId::WindowForeground, &disabled),
            Some(Color::from_hex(0x8B8E8F))
        );
        assert_eq!(resolver.resolve(SemanticColorId::Shadow, &enabled), None);
    }

    #[test]
    fn test_gradient_blend() {
        let colors = colors(
            "button { background-image: linear-gradient(to top, #000000, #ffffff); }\n\
             button:hover { background-image: image(#808080); }",
        );
        let options = ColorOptions::new(ThemeVariant::Light, state());
        let resolver = colors.resolver();
        assert_eq!(
            resolver.resolve_gradient(WidgetRole::ButtonBackground, &options),
            Some(ColorGradient::new(Color::WHITE, Color::BLACK))
        );
        assert_eq!(
            resolver.resolve_gradient(
                WidgetRole::ButtonBackground,
                &options.with_animation(AnimationMode::Hover, 1.0)
            ),
            Some(ColorGradient::solid(Color::from_hex(0x808080)))
        );
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(
            "button-background".parse::<ColorRole>(),
            Ok(ColorRole::Widget(WidgetRole::ButtonBackground))
        );
        assert_eq!(
            "window-background".parse::<ColorRole>(),
            Ok(ColorRole::Static(SemanticColorId::WindowBackground))
        );
        assert!("nonsense".parse::<ColorRole>().is_err());
        for role in WidgetRole::ALL {
            assert_eq!(role.id().parse::<WidgetRole>(), Ok(role));
        }
    }
}
