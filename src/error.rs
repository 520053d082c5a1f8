use crate::core::ElementCategory;
use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error(
        "group sequence too short for {category:?} collection: {supplied} group ids for {required} elements"
    )]
    GroupSequenceTooShort {
        category: ElementCategory,
        required: usize,
        supplied: usize,
    },

    #[error(
        "label sequence too short for {category:?} collection: {supplied} labels for {required} elements"
    )]
    LabelSequenceTooShort {
        category: ElementCategory,
        required: usize,
        supplied: usize,
    },

    #[error("element is not part of the bound collection")]
    ElementNotBound,

    #[error("no tooltip data registered for axes region {0:?}")]
    MissingTooltipData(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to read stylesheet {path}: {source}")]
    Stylesheet {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write document {path}: {source}")]
    DocumentWrite {
        path: String,
        source: std::io::Error,
    },
}
