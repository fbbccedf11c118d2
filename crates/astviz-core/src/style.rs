//! Node shapes understood by the rendering collaborator.

use std::str::FromStr;

use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::warn;

/// Graphviz node shapes accepted in `<Category>.shape`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, IntoStaticStr, Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Shape {
    #[default]
    Box,
    Ellipse,
    Oval,
    Circle,
    Point,
    Egg,
    Triangle,
    PlainText,
    Plain,
    Diamond,
    Trapezium,
    Parallelogram,
    House,
    Pentagon,
    Hexagon,
    Septagon,
    Octagon,
    DoubleCircle,
    DoubleOctagon,
    TripleOctagon,
    InvTriangle,
    InvTrapezium,
    InvHouse,
    #[strum(to_string = "Mdiamond")]
    MDiamond,
    #[strum(to_string = "Msquare")]
    MSquare,
    #[strum(to_string = "Mcircle")]
    MCircle,
    Rect,
    Rectangle,
    Square,
    Star,
    None,
    Underline,
    Cylinder,
    Note,
    Tab,
    Folder,
    Box3d,
    Component,
    Promoter,
    Cds,
    Terminator,
    Utr,
    PrimerSite,
    RestrictionSite,
    FivePOverhang,
    ThreePOverhang,
    NOverhang,
    Assembly,
    Signature,
    Insulator,
    RiboSite,
    RnaStab,
    ProteaseSite,
    ProteinStab,
    RPromoter,
    RArrow,
    LArrow,
    LPromoter,
}

impl Shape {
    /// Shape name as emitted into DOT.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Parse a configured shape name, falling back to `box` for unknown names.
    pub fn parse_or_default(name: &str) -> Shape {
        Shape::from_str(name.trim()).unwrap_or_else(|_| {
            warn!(shape = name, "unknown node shape, using box");
            Shape::Box
        })
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_shape_names() {
        assert_eq!(Shape::Box.as_str(), "box");
        assert_eq!(Shape::InvTriangle.as_str(), "invtriangle");
        assert_eq!(Shape::DoubleOctagon.as_str(), "doubleoctagon");
        assert_eq!(Shape::MDiamond.as_str(), "Mdiamond");
        assert_eq!(Shape::FivePOverhang.as_str(), "fivepoverhang");
        assert_eq!(Shape::RArrow.as_str(), "rarrow");
    }

    #[test]
    fn test_every_shape_parses_back() {
        for shape in Shape::iter() {
            assert_eq!(Shape::from_str(shape.as_str()).unwrap(), shape);
        }
        assert_eq!(Shape::iter().count(), 58);
    }

    #[test]
    fn test_unknown_shape_falls_back_to_box() {
        assert_eq!(Shape::parse_or_default("true"), Shape::Box);
        assert_eq!(Shape::parse_or_default(" diamond "), Shape::Diamond);
        assert_eq!(Shape::parse_or_default("mdiamond"), Shape::MDiamond);
    }
}
