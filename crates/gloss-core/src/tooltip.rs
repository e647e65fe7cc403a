//! Supplementary technical metadata for a glossary term.
//!
//! Tooltip data is keyed by the exact term string. Most terms have none, so a
//! failed lookup is the common case and simply renders nothing extra.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Technical explanation attached to a term
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipData {
    /// Longer technical explanation of the term
    #[serde(default)]
    pub explanation: String,

    /// Diagram to show alongside the explanation, if any
    #[serde(default)]
    pub diagram: Option<DiagramKind>,

    #[serde(default)]
    pub key_points: Vec<String>,

    #[serde(default)]
    pub examples: Vec<String>,

    /// Other glossary terms, matched exactly
    #[serde(default)]
    pub related_terms: Vec<String>,
}

impl TooltipData {
    /// True when there is nothing worth showing
    pub fn is_empty(&self) -> bool {
        self.explanation.trim().is_empty()
            && self.diagram.is_none()
            && self.key_points.is_empty()
            && self.examples.is_empty()
            && self.related_terms.is_empty()
    }
}

/// The closed set of diagrams a term can reference.
///
/// The segmentation pipeline never interprets the kind; it is handed to
/// whatever draws diagrams, keyed by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum DiagramKind {
    ProcessOverview,
    LearningTypes,
    BigDataAttributes,
    NeuralNetwork,
    DecisionTree,
    NormalDistribution,
    LinearRegression,
    ClusteringScatter,
    ConfusionMatrix,
    GradientDescent,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 10] = [
        DiagramKind::ProcessOverview,
        DiagramKind::LearningTypes,
        DiagramKind::BigDataAttributes,
        DiagramKind::NeuralNetwork,
        DiagramKind::DecisionTree,
        DiagramKind::NormalDistribution,
        DiagramKind::LinearRegression,
        DiagramKind::ClusteringScatter,
        DiagramKind::ConfusionMatrix,
        DiagramKind::GradientDescent,
    ];

    /// Stable kebab-case name used in content files
    pub fn name(self) -> &'static str {
        match self {
            DiagramKind::ProcessOverview => "process-overview",
            DiagramKind::LearningTypes => "learning-types",
            DiagramKind::BigDataAttributes => "big-data-attributes",
            DiagramKind::NeuralNetwork => "neural-network",
            DiagramKind::DecisionTree => "decision-tree",
            DiagramKind::NormalDistribution => "normal-distribution",
            DiagramKind::LinearRegression => "linear-regression",
            DiagramKind::ClusteringScatter => "clustering-scatter",
            DiagramKind::ConfusionMatrix => "confusion-matrix",
            DiagramKind::GradientDescent => "gradient-descent",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            DiagramKind::ProcessOverview => "Process overview",
            DiagramKind::LearningTypes => "Taxonomy of learning types",
            DiagramKind::BigDataAttributes => "The five attributes of big data",
            DiagramKind::NeuralNetwork => "Neural network layers",
            DiagramKind::DecisionTree => "Decision tree",
            DiagramKind::NormalDistribution => "Normal distribution curve",
            DiagramKind::LinearRegression => "Linear regression fit",
            DiagramKind::ClusteringScatter => "Clustered scatter plot",
            DiagramKind::ConfusionMatrix => "Confusion matrix",
            DiagramKind::GradientDescent => "Gradient descent path",
        }
    }
}

impl FromStr for DiagramKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        DiagramKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| Error::unknown_diagram(s))
    }
}

impl TryFrom<String> for DiagramKind {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DiagramKind> for &'static str {
    fn from(kind: DiagramKind) -> Self {
        kind.name()
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
