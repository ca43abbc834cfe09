//! Legacy material string parser
//!
//! Material specs arrive from the host as semicolon-delimited text because a
//! structured parameter type is not available there. With the default
//! [`SpecLayout::BaseColor`] layout a spec reads
//!
//! ```text
//! r;g;b;a;metallic;roughness[;texture]
//! ```
//!
//! and with [`SpecLayout::Emissive`]
//!
//! ```text
//! r;g;b;er;eg;eb;metallic;roughness[;texture]
//! ```
//!
//! Numeric tokens may carry surrounding whitespace. The texture token is kept
//! verbatim and an empty one means "no texture".

use crate::core::SpecLayout;
use super::material_spec::MaterialSpec;

/// Field delimiter of the legacy format
pub const FIELD_DELIMITER: char = ';';

/// Errors raised while parsing material strings
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterialSpecError {
    /// Not enough fields in the string
    #[error("material {index}: expected at least {expected} numeric fields, found {found}")]
    TooFewFields {
        /// Position of the spec in the input list
        index: usize,
        /// Numeric fields required by the layout
        expected: usize,
        /// Fields present
        found: usize,
    },

    /// A numeric field failed to parse
    #[error("material {index}: field {field} is not a finite number: '{token}'")]
    InvalidNumber {
        /// Position of the spec in the input list
        index: usize,
        /// Zero-based field position within the spec
        field: usize,
        /// Offending token
        token: String,
    },
}

impl MaterialSpecError {
    /// Position of the failing spec in the input list
    pub const fn index(&self) -> usize {
        match self {
            Self::TooFewFields { index, .. } | Self::InvalidNumber { index, .. } => *index,
        }
    }

    fn at(mut self, position: usize) -> Self {
        match &mut self {
            Self::TooFewFields { index, .. } | Self::InvalidNumber { index, .. } => *index = position,
        }
        self
    }
}

/// Parser for legacy material strings
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecParser {
    layout: SpecLayout,
}

impl SpecParser {
    /// Create a parser for the given layout
    pub const fn new(layout: SpecLayout) -> Self {
        Self { layout }
    }

    /// Layout this parser reads
    pub const fn layout(&self) -> SpecLayout {
        self.layout
    }

    /// Parse one material string
    ///
    /// Errors report index 0; use [`SpecParser::parse_all`] for list positions.
    pub fn parse(&self, spec: &str) -> Result<MaterialSpec, MaterialSpecError> {
        let tokens: Vec<&str> = spec.split(FIELD_DELIMITER).collect();
        let expected = self.layout.numeric_fields();
        if tokens.len() < expected {
            return Err(MaterialSpecError::TooFewFields {
                index: 0,
                expected,
                found: tokens.len(),
            });
        }

        let numbers = tokens[..expected]
            .iter()
            .enumerate()
            .map(|(field, token)| Self::parse_number(field, token))
            .collect::<Result<Vec<f32>, _>>()?;

        let material = match self.layout {
            SpecLayout::BaseColor => MaterialSpec::flat(
                [numbers[0], numbers[1], numbers[2], numbers[3]],
                numbers[4],
                numbers[5],
            ),
            SpecLayout::Emissive => MaterialSpec::flat(
                [numbers[0], numbers[1], numbers[2], 1.0],
                numbers[6],
                numbers[7],
            )
            .with_emissive([numbers[3], numbers[4], numbers[5]]),
        };

        Ok(match tokens.get(expected) {
            Some(texture) => material.with_texture(*texture),
            None => material,
        })
    }

    /// Parse an ordered list of material strings
    ///
    /// Trailing blank entries are dropped, so a list holding only blanks yields
    /// no materials. Any other failure aborts the whole list, since material
    /// indices elsewhere refer to positions in it.
    pub fn parse_all<S: AsRef<str>>(&self, specs: &[S]) -> Result<Vec<MaterialSpec>, MaterialSpecError> {
        let end = specs
            .iter()
            .rposition(|spec| !spec.as_ref().trim().is_empty())
            .map_or(0, |last| last + 1);

        let materials = specs[..end]
            .iter()
            .enumerate()
            .map(|(index, spec)| self.parse(spec.as_ref()).map_err(|e| e.at(index)))
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!("Parsed {} material spec(s) with {:?} layout", materials.len(), self.layout);
        Ok(materials)
    }

    fn parse_number(field: usize, token: &str) -> Result<f32, MaterialSpecError> {
        let invalid = || MaterialSpecError::InvalidNumber {
            index: 0,
            field,
            token: token.to_string(),
        };

        #[allow(clippy::cast_possible_truncation)]
        let value = token.trim().parse::<f64>().map_err(|_| invalid())? as f32;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(invalid())
        }
    }
}
