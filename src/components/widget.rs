//! Menu widget components.
//!
//! Every clickable or fadeable piece of the main menu is an entity carrying a
//! [`Widget`] together with [`Active`] and [`Opacity`]. Toggles and the
//! sensitivity slider add [`Toggle`] or [`Slider`]; widgets living inside a
//! panel add [`PanelMember`] so they follow the panel's visibility.
//!
//! The [`MenuLayout`](crate::resources::menulayout::MenuLayout) resource maps
//! each [`WidgetRole`] to its entity.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::{Color, Rectangle, Vector2};

/// What a widget is for. Each role exists exactly once in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetRole {
    StartButton,
    SettingsButton,
    AboutButton,
    QuitButton,
    BackButton,
    SettingsPanel,
    AboutPanel,
    /// Full-screen overlay faded in before leaving the menu.
    Overlay,
    MasterSoundToggle,
    SoundFxToggle,
    VisualFxToggle,
    SensitivitySlider,
}

impl WidgetRole {
    /// The four buttons shown on the main menu page.
    pub const MAIN_BUTTONS: [WidgetRole; 4] = [
        WidgetRole::StartButton,
        WidgetRole::SettingsButton,
        WidgetRole::AboutButton,
        WidgetRole::QuitButton,
    ];

    /// Whether clicking this widget is meaningful.
    pub fn is_interactive(&self) -> bool {
        !matches!(
            self,
            WidgetRole::SettingsPanel | WidgetRole::AboutPanel | WidgetRole::Overlay
        )
    }
}

/// A rectangular menu element in screen space.
#[derive(Component, Clone, Debug)]
pub struct Widget {
    pub role: WidgetRole,
    pub rect: Rectangle,
    pub label: String,
    pub color: Color,
}

impl Widget {
    pub fn new(role: WidgetRole, rect: Rectangle, label: impl Into<String>) -> Self {
        Self {
            role,
            rect,
            label: label.into(),
            color: Color::new(40, 44, 52, 255),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Point-in-rectangle test, edges inclusive.
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.rect.x
            && point.x <= self.rect.x + self.rect.width
            && point.y >= self.rect.y
            && point.y <= self.rect.y + self.rect.height
    }
}

/// Whether the widget is shown and can receive clicks.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Active(pub bool);

/// Widget opacity in `[0, 1]`.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Opacity(pub f32);

impl Default for Opacity {
    fn default() -> Self {
        Opacity(1.0)
    }
}

/// On/off switch state.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toggle {
    pub on: bool,
}

/// Continuous value picked along the widget's width.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    pub value: f32,
    pub min: f32,
    pub max: f32,
}

impl Slider {
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        Self { value, min, max }
    }

    /// Map a horizontal screen coordinate inside `rect` to a slider value.
    pub fn value_at(&self, rect: &Rectangle, x: f32) -> f32 {
        if rect.width <= 0.0 {
            return self.min;
        }
        let t = ((x - rect.x) / rect.width).clamp(0.0, 1.0);
        self.min + (self.max - self.min) * t
    }

    /// Normalized knob position in `[0, 1]`. Values outside the range are
    /// drawn at the nearest end.
    pub fn fraction(&self) -> f32 {
        if self.max <= self.min {
            return 0.0;
        }
        ((self.value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Marks a widget drawn inside (and hidden with) the given panel entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct PanelMember(pub Entity);
