//! Declarative tree shape
//!
//! One [`NodeSpec`] row per node. Edges come from `parent`, counts from
//! `metric`, so adding a category is a single new row.

use crate::palette::ColorKey;
use rashut_model::{Branch, Category, Metric, Outcome, Phase};
use Branch::{WithShaam, WithoutShaam};
use serde::{Deserialize, Serialize};

/// Normalized chart position, both axes in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal
    pub x: f64,
    /// Vertical
    pub y: f64,
}

impl Position {
    /// New position
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// How the count is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// Digits only
    Plain,
    /// Thousands separated with commas
    Grouped,
}

/// Static description of one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSpec {
    /// Stable node identifier
    pub id: &'static str,
    /// Parent identifier; `None` only for the root
    pub parent: Option<&'static str>,
    /// Depth, root is 0
    pub level: u8,
    /// Count shown as the label
    pub metric: Metric,
    /// Display title
    pub title: &'static str,
    /// Palette entry
    pub color: ColorKey,
    /// Chart position
    pub position: Position,
    /// Branch whose completion percentage is shown as a badge
    pub badge: Option<Branch>,
    /// Label formatting
    pub label_style: LabelStyle,
    /// Saved-view key the node drills into
    pub view_key: Option<&'static str>,
}

const TITLE_NEW: &str = "חדשות";
const TITLE_CONTINUED: &str = "ממשיכות";
const TITLE_MIDYEAR: &str = "אמצע שנה";
const TITLE_CANCELLED: &str = "מבוטלות";
const TITLE_APPROVED: &str = "מאושר לביצוע";
const TITLE_CONVERTED: &str = "הומר";
const TITLE_EXECUTING: &str = "הסתיימו";

/// Prefix of the completion subtitle on branch nodes
pub const SUBTITLE_PREFIX: &str = "שיעור ביצוע: ";

/// Identifier of the root node
pub const ROOT_ID: &str = "root";

#[allow(clippy::too_many_arguments)]
const fn node(
    id: &'static str,
    parent: &'static str,
    level: u8,
    metric: Metric,
    title: &'static str,
    color: ColorKey,
    position: Position,
    view_key: Option<&'static str>,
) -> NodeSpec {
    NodeSpec {
        id,
        parent: Some(parent),
        level,
        metric,
        title,
        color,
        position,
        badge: None,
        label_style: LabelStyle::Plain,
        view_key,
    }
}

const fn branch(
    id: &'static str,
    branch: Branch,
    title: &'static str,
    x: f64,
    view_key: &'static str,
) -> NodeSpec {
    NodeSpec {
        id,
        parent: Some(ROOT_ID),
        level: 1,
        metric: Metric::Branch(branch),
        title,
        color: ColorKey::Default,
        position: Position::new(x, 24.0),
        badge: Some(branch),
        label_style: LabelStyle::Plain,
        view_key: Some(view_key),
    }
}

/// The full tree, parents before children
pub static SCHEMA: &[NodeSpec] = &[
    NodeSpec {
        id: ROOT_ID,
        parent: None,
        level: 0,
        metric: Metric::Total,
        title: "סה\"כ משימות",
        color: ColorKey::Root,
        position: Position::new(50.0, 8.0),
        badge: None,
        label_style: LabelStyle::Grouped,
        view_key: Some("A"),
    },
    branch("right-branch", WithoutShaam, "משימות רשות המיסים", 72.0, "C"),
    branch("left-branch", WithShaam, "משימות בשיתוף שע\"מ", 28.0, "B"),
    // authority-only categories
    node("right-new", "right-branch", 2, Metric::Category(WithoutShaam, Category::New), TITLE_NEW, ColorKey::New, Position::new(60.0, 42.0), Some("G")),
    node("right-continued", "right-branch", 2, Metric::Category(WithoutShaam, Category::Continued), TITLE_CONTINUED, ColorKey::Continued, Position::new(72.0, 42.0), Some("H")),
    node("right-midyear", "right-branch", 2, Metric::Category(WithoutShaam, Category::Midyear), TITLE_MIDYEAR, ColorKey::Midyear, Position::new(84.0, 42.0), Some("O")),
    node("right-cancelled", "right-branch", 2, Metric::Category(WithoutShaam, Category::Cancelled), TITLE_CANCELLED, ColorKey::Cancelled, Position::new(94.0, 42.0), Some("N")),
    // shared categories
    node("left-new", "left-branch", 2, Metric::Category(WithShaam, Category::New), TITLE_NEW, ColorKey::New, Position::new(16.0, 42.0), Some("D")),
    node("left-continued", "left-branch", 2, Metric::Category(WithShaam, Category::Continued), TITLE_CONTINUED, ColorKey::Continued, Position::new(28.0, 42.0), Some("E")),
    node("left-midyear", "left-branch", 2, Metric::Category(WithShaam, Category::Midyear), TITLE_MIDYEAR, ColorKey::Midyear, Position::new(40.0, 42.0), Some("F")),
    // drill-down of shared new work
    node("left-new-approved", "left-new", 3, Metric::Drill(Phase::New, Outcome::Approved), TITLE_APPROVED, ColorKey::Approved, Position::new(4.0, 62.0), Some("J")),
    node("left-new-converted", "left-new", 3, Metric::Drill(Phase::New, Outcome::Converted), TITLE_CONVERTED, ColorKey::Converted, Position::new(13.0, 62.0), Some("I")),
    node("left-new-cancelled", "left-new", 3, Metric::Drill(Phase::New, Outcome::Cancelled), TITLE_CANCELLED, ColorKey::Cancelled, Position::new(21.0, 62.0), Some("K")),
    // drill-down of shared mid-year work
    node("left-midyear-approved", "left-midyear", 3, Metric::Drill(Phase::Midyear, Outcome::Approved), TITLE_APPROVED, ColorKey::Approved, Position::new(31.5, 62.0), Some("M")),
    node("left-midyear-converted", "left-midyear", 3, Metric::Drill(Phase::Midyear, Outcome::Converted), TITLE_CONVERTED, ColorKey::Converted, Position::new(40.0, 62.0), Some("L")),
    node("left-midyear-cancelled", "left-midyear", 3, Metric::Drill(Phase::Midyear, Outcome::Cancelled), TITLE_CANCELLED, ColorKey::Cancelled, Position::new(47.5, 62.0), Some("P")),
    // completed converted work
    node("left-new-converted-executing", "left-new-converted", 4, Metric::Drill(Phase::New, Outcome::Executing), TITLE_EXECUTING, ColorKey::Executing, Position::new(13.0, 82.0), None),
    node("left-midyear-converted-executing", "left-midyear-converted", 4, Metric::Drill(Phase::Midyear, Outcome::Executing), TITLE_EXECUTING, ColorKey::Executing, Position::new(40.0, 82.0), None),
];

/// Schema row for a node id
#[must_use]
pub fn spec(id: &str) -> Option<&'static NodeSpec> {
    SCHEMA.iter().find(|spec| spec.id == id)
}

/// Saved-view key a hierarchy node drills into
#[must_use]
pub fn view_key(id: &str) -> Option<&'static str> {
    spec(id).and_then(|spec| spec.view_key)
}

/// Every saved-view key reachable from the tree
pub fn view_keys() -> impl Iterator<Item = &'static str> {
    SCHEMA.iter().filter_map(|spec| spec.view_key)
}
