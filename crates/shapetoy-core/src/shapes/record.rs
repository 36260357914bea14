//! Loosely typed shape records and variant discrimination.

use super::{Circle, Rectangle, Shape, ShapeColor, ShapeError, check_dimension};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Untyped shape data as it arrives from outside the model.
///
/// The variant is decided by capability: a record with `width` and `height`
/// is a rectangle, one with `radius` is a circle, and `type` must agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    /// Existing id; a fresh one is assigned when absent or empty.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub center_x: f64,
    pub center_y: f64,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl ShapeRecord {
    /// Parse a single record from JSON.
    pub fn from_json(json: &str) -> Result<Self, ShapeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Has the extents of a rectangle.
    pub fn is_rectangle(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }

    /// Has the extent of a circle.
    pub fn is_circle(&self) -> bool {
        self.radius.is_some()
    }
}

/// Parse a JSON array of records into shapes, in array order.
///
/// Malformed JSON is an error. Records that parse but do not describe a
/// valid shape are logged and skipped.
pub fn shapes_from_json(json: &str) -> Result<Vec<Shape>, ShapeError> {
    let records: Vec<ShapeRecord> = serde_json::from_str(json)?;
    let total = records.len();
    let shapes: Vec<Shape> = records
        .into_iter()
        .filter_map(|record| match Shape::try_from(record) {
            Ok(shape) => Some(shape),
            Err(e) => {
                log::warn!("Skipping shape record: {e}");
                None
            }
        })
        .collect();
    log::debug!("Loaded {} of {total} shape records", shapes.len());
    Ok(shapes)
}

impl TryFrom<ShapeRecord> for Shape {
    type Error = ShapeError;

    fn try_from(record: ShapeRecord) -> Result<Self, Self::Error> {
        let id = match record.id.as_deref() {
            Some(raw) if !raw.is_empty() => {
                Uuid::parse_str(raw).map_err(|_| ShapeError::InvalidId(raw.to_string()))?
            }
            _ => Uuid::new_v4(),
        };
        let center = Point::new(record.center_x, record.center_y);
        let fill_color = ShapeColor::parse(&record.color)?;

        match (record.kind.as_str(), record.width, record.height, record.radius) {
            ("rectangle", Some(width), Some(height), _) => Ok(Shape::Rectangle(Rectangle::reconstruct(
                id,
                center,
                check_dimension("width", width)?,
                check_dimension("height", height)?,
                fill_color,
            ))),
            ("circle", _, _, Some(radius)) => Ok(Shape::Circle(Circle::reconstruct(
                id,
                center,
                check_dimension("radius", radius)?,
                fill_color,
            ))),
            (kind, ..) => {
                log::error!(
                    "Shape record {:?} is not a known variant (rectangle: {}, circle: {})",
                    kind,
                    record.is_rectangle(),
                    record.is_circle()
                );
                Err(ShapeError::UnrecognizedVariant(kind.to_string()))
            }
        }
    }
}

impl From<&Shape> for ShapeRecord {
    fn from(shape: &Shape) -> Self {
        let (width, height, radius) = match shape {
            Shape::Rectangle(r) => (Some(r.width), Some(r.height), None),
            Shape::Circle(c) => (None, None, Some(c.radius)),
        };
        let center = shape.center();
        Self {
            id: Some(shape.id().to_string()),
            kind: shape.kind().name().to_string(),
            center_x: center.x,
            center_y: center.y,
            color: shape.fill_color().to_hex(),
            width,
            height,
            radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    #[test]
    fn test_rectangle_record() {
        let record = ShapeRecord::from_json(
            r#"{"type":"rectangle","centerX":100,"centerY":100,"color":"red","width":50,"height":40}"#,
        )
        .unwrap();
        assert!(record.is_rectangle());

        let shape = Shape::try_from(record).unwrap();
        assert_eq!(shape.kind(), ShapeKind::Rectangle);
        assert_eq!(shape.fill_color(), ShapeColor::RED);
        assert_eq!(shape.center(), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_circle_record_keeps_id() {
        let id = Uuid::new_v4();
        let record = ShapeRecord {
            id: Some(id.to_string()),
            kind: "circle".to_string(),
            center_x: 200.0,
            center_y: 200.0,
            color: "#0000ff".to_string(),
            width: None,
            height: None,
            radius: Some(30.0),
        };
        let shape = Shape::try_from(record).unwrap();
        assert_eq!(shape.id(), id);
        assert!((shape.as_circle().unwrap().radius - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let record = ShapeRecord::from_json(
            r#"{"type":"triangle","centerX":0,"centerY":0,"color":"black","width":5,"height":5}"#,
        )
        .unwrap();
        assert!(matches!(
            Shape::try_from(record),
            Err(ShapeError::UnrecognizedVariant(kind)) if kind == "triangle"
        ));
    }

    #[test]
    fn test_kind_must_match_capability() {
        // Claims to be a circle but only carries rectangle extents.
        let record = ShapeRecord::from_json(
            r#"{"type":"circle","centerX":0,"centerY":0,"color":"black","width":5,"height":5}"#,
        )
        .unwrap();
        assert!(record.is_rectangle());
        assert!(!record.is_circle());
        assert!(matches!(
            Shape::try_from(record),
            Err(ShapeError::UnrecognizedVariant(_))
        ));
    }

    #[test]
    fn test_non_positive_dimension_is_rejected() {
        let record = ShapeRecord::from_json(
            r#"{"type":"circle","centerX":0,"centerY":0,"color":"black","radius":0}"#,
        )
        .unwrap();
        assert!(matches!(
            Shape::try_from(record),
            Err(ShapeError::InvalidDimension { field: "radius", .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            ShapeRecord::from_json("{not json"),
            Err(ShapeError::Json(_))
        ));
    }

    #[test]
    fn test_shapes_from_json_skips_invalid_records() {
        let shapes = shapes_from_json(
            r#"[
                {"type":"rectangle","centerX":100,"centerY":100,"color":"red","width":50,"height":50},
                {"type":"triangle","centerX":0,"centerY":0,"color":"black","width":5,"height":5},
                {"type":"circle","centerX":200,"centerY":200,"color":"blue","radius":30}
            ]"#,
        )
        .unwrap();

        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].kind(), ShapeKind::Rectangle);
        assert_eq!(shapes[1].kind(), ShapeKind::Circle);
        assert_ne!(shapes[0].id(), shapes[1].id());
    }

    #[test]
    fn test_shapes_from_json_rejects_non_array() {
        assert!(matches!(
            shapes_from_json(r#"{"type":"circle"}"#),
            Err(ShapeError::Json(_))
        ));
    }

    #[test]
    fn test_record_from_shape() {
        let shape: Shape = Rectangle::new(Point::new(1.0, 2.0), 3.0, 4.0)
            .with_color(ShapeColor::BLUE)
            .into();
        let record = ShapeRecord::from(&shape);
        assert_eq!(record.kind, "rectangle");
        assert_eq!(record.color, "#0000ff");
        assert_eq!(record.radius, None);

        let back = Shape::try_from(record).unwrap();
        assert_eq!(back, shape);
    }
}
