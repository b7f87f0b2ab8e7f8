//! Cube configuration.
//!
//! A cube is configured at construction by providing:
//! - `ColorScheme`: which color each face shows when solved
//! - `CubeConfig`: color scheme plus the default shuffle length
//!
//! Both are serde types, so configuration can be loaded from any format the
//! caller likes. Deserializing a color scheme runs the same validation as
//! [`ColorScheme::new`].

use serde::{Deserialize, Serialize};

use super::face::{Color, Face, FACE_COUNT};
use crate::error::CubeError;

/// Scramble length for casual use.
pub const DEFAULT_SHUFFLE_LENGTH: usize = 20;

/// Scramble length used by the "shuffle" button of an interactive front end.
pub const UI_SHUFFLE_LENGTH: usize = 30;

/// Solved color of every face.
///
/// Always a bijection between faces and colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FaceColors", into = "FaceColors")]
pub struct ColorScheme {
    colors: [Color; FACE_COUNT],
}

impl ColorScheme {
    /// Create a color scheme from per-face colors, indexed by [`Face::index`].
    ///
    /// Fails with [`CubeError::DuplicateColor`] if two faces share a color.
    pub fn new(colors: [Color; FACE_COUNT]) -> Result<Self, CubeError> {
        for (i, &color) in colors.iter().enumerate() {
            if let Some(j) = colors[..i].iter().position(|&c| c == color) {
                return Err(CubeError::DuplicateColor {
                    color,
                    first: Face::ALL[j],
                    second: Face::ALL[i],
                });
            }
        }
        Ok(Self { colors })
    }

    /// Solved color of a face.
    #[must_use]
    pub const fn color_of(&self, face: Face) -> Color {
        self.colors[face.index()]
    }

    /// Face whose solved color is `color`.
    #[must_use]
    pub fn face_of(&self, color: Color) -> Face {
        // Six colors, six faces, all distinct: every color is present.
        let i = self
            .colors
            .iter()
            .position(|&c| c == color)
            .unwrap_or_else(|| unreachable!("color scheme is a bijection"));
        Face::ALL[i]
    }

    /// Per-face colors, indexed by [`Face::index`].
    #[must_use]
    pub const fn colors(&self) -> [Color; FACE_COUNT] {
        self.colors
    }
}

impl Default for ColorScheme {
    /// White up, yellow down, orange left, red right, green front, blue back.
    fn default() -> Self {
        Self {
            colors: [
                Color::White,
                Color::Yellow,
                Color::Orange,
                Color::Red,
                Color::Green,
                Color::Blue,
            ],
        }
    }
}

/// Serialized form of a [`ColorScheme`]: one named field per face.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
struct FaceColors {
    up: Color,
    down: Color,
    left: Color,
    right: Color,
    front: Color,
    back: Color,
}

impl TryFrom<FaceColors> for ColorScheme {
    type Error = CubeError;

    fn try_from(value: FaceColors) -> Result<Self, Self::Error> {
        ColorScheme::new([
            value.up,
            value.down,
            value.left,
            value.right,
            value.front,
            value.back,
        ])
    }
}

impl From<ColorScheme> for FaceColors {
    fn from(scheme: ColorScheme) -> Self {
        let [up, down, left, right, front, back] = scheme.colors;
        Self {
            up,
            down,
            left,
            right,
            front,
            back,
        }
    }
}

/// Cube configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Solved color of each face.
    pub color_scheme: ColorScheme,

    /// Number of moves applied by [`Cube::shuffle_default`](crate::Cube::shuffle_default).
    pub shuffle_length: usize,

    /// Most moves [`Cube::history`](crate::Cube::history) keeps. `None` keeps
    /// every move since the last reset.
    pub history_limit: Option<usize>,
}

impl CubeConfig {
    /// Create a configuration with the default color scheme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color scheme (builder pattern).
    #[must_use]
    pub fn with_color_scheme(mut self, color_scheme: ColorScheme) -> Self {
        self.color_scheme = color_scheme;
        self
    }

    /// Set the default shuffle length (builder pattern).
    #[must_use]
    pub fn with_shuffle_length(mut self, shuffle_length: usize) -> Self {
        self.shuffle_length = shuffle_length;
        self
    }

    /// Keep only the most recent `limit` moves in the history (builder pattern).
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::default(),
            shuffle_length: DEFAULT_SHUFFLE_LENGTH,
            history_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scheme() {
        let scheme = ColorScheme::default();
        assert_eq!(scheme.color_of(Face::Up), Color::White);
        assert_eq!(scheme.color_of(Face::Down), Color::Yellow);
        assert_eq!(scheme.color_of(Face::Left), Color::Orange);
        assert_eq!(scheme.color_of(Face::Right), Color::Red);
        assert_eq!(scheme.color_of(Face::Front), Color::Green);
        assert_eq!(scheme.color_of(Face::Back), Color::Blue);
    }

    #[test]
    fn test_default_scheme_is_valid() {
        let scheme = ColorScheme::default();
        assert_eq!(ColorScheme::new(scheme.colors()), Ok(scheme));
    }

    #[test]
    fn test_face_of_inverts_color_of() {
        let scheme = ColorScheme::default();
        for face in Face::ALL {
            assert_eq!(scheme.face_of(scheme.color_of(face)), face);
        }
    }

    #[test]
    fn test_duplicate_color_rejected() {
        let result = ColorScheme::new([
            Color::White,
            Color::Yellow,
            Color::Red,
            Color::Red,
            Color::Green,
            Color::Blue,
        ]);

        assert_eq!(
            result,
            Err(CubeError::DuplicateColor {
                color: Color::Red,
                first: Face::Left,
                second: Face::Right,
            })
        );
    }

    #[test]
    fn test_scheme_serde() {
        let scheme = ColorScheme::default();
        let json = serde_json::to_string(&scheme).unwrap();
        assert!(json.contains("\"up\":\"white\""));

        let deserialized: ColorScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(scheme, deserialized);
    }

    #[test]
    fn test_scheme_serde_rejects_duplicates() {
        let json = r#"{"up":"white","down":"white","left":"orange","right":"red","front":"green","back":"blue"}"#;
        let result: Result<ColorScheme, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = CubeConfig::new();
        assert_eq!(config.shuffle_length, DEFAULT_SHUFFLE_LENGTH);
        assert_eq!(config.color_scheme, ColorScheme::default());
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn test_config_partial_json() {
        let config: CubeConfig = serde_json::from_str(r#"{"shuffle_length": 30}"#).unwrap();
        assert_eq!(config.shuffle_length, UI_SHUFFLE_LENGTH);
        assert_eq!(config.color_scheme, ColorScheme::default());
    }

    #[test]
    fn test_config_builder() {
        let scheme = ColorScheme::new([
            Color::Yellow,
            Color::White,
            Color::Red,
            Color::Orange,
            Color::Blue,
            Color::Green,
        ])
        .unwrap();
        let config = CubeConfig::new()
            .with_color_scheme(scheme)
            .with_shuffle_length(5)
            .with_history_limit(100);

        assert_eq!(config.color_scheme.color_of(Face::Up), Color::Yellow);
        assert_eq!(config.shuffle_length, 5);
        assert_eq!(config.history_limit, Some(100));
    }
}
