use std::{error::Error, fmt};

use thiserror::Error;

use crate::FailureReport;

/// The error type translators fail with.
pub type BoxError = Box<dyn Error + Send + Sync>;

pub type MapResult<T> = Result<T, MapError>;

#[derive(Debug, Error)]
pub enum MapError {
    /// An argument was missing or unusable. Raised before anything is constructed or mapped.
    #[error("Invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },
    /// One or more translator invocations failed.
    #[error(transparent)]
    MappingFailure(#[from] MappingFailures),
}

impl MapError {
    pub(crate) fn missing(parameter: &'static str) -> Self {
        Self::InvalidArgument {
            parameter,
            reason: "value is missing".to_string(),
        }
    }

    /// Returns the name of the offending parameter if this is an [MapError::InvalidArgument].
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidArgument { parameter, .. } => Some(*parameter),
            Self::MappingFailure(_) => None,
        }
    }

    /// Returns the translator failures if this is a [MapError::MappingFailure].
    pub fn failures(&self) -> Option<&MappingFailures> {
        match self {
            Self::MappingFailure(failures) => Some(failures),
            Self::InvalidArgument { .. } => None,
        }
    }
}

/// A translator invocation that failed, and the source index it was working on.
#[derive(Debug)]
pub struct ElementFailure {
    pub index: usize,
    pub error: BoxError,
}

impl fmt::Display for ElementFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element {}: {}", self.index, self.error)
    }
}

/// The failed subset of a fan-out.
///
/// Always holds at least one failure. Failures are ordered by source index,
/// not by the order in which they completed.
#[derive(Debug)]
pub struct MappingFailures {
    /// How many mapping operations were issued.
    total: usize,
    /// How many of them failed, including any that were not kept.
    failed: usize,
    failures: Vec<ElementFailure>,
}

impl MappingFailures {
    pub(crate) fn single(index: usize, total: usize, error: BoxError) -> Self {
        Self {
            total,
            failed: 1,
            failures: vec![ElementFailure { index, error }],
        }
    }

    /// Builds the failure set from index-ordered failures.
    /// Returns `None` if nothing failed.
    pub(crate) fn collect(
        total: usize,
        mut failures: Vec<ElementFailure>,
        report: FailureReport,
    ) -> Option<Self> {
        if failures.is_empty() {
            return None;
        }

        let failed = failures.len();

        if report == FailureReport::First {
            failures.truncate(1);
        }

        Some(Self {
            total,
            failed,
            failures,
        })
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    /// The failure with the lowest source index.
    pub fn first(&self) -> &ElementFailure {
        &self.failures[0]
    }

    /// The kept failures, ordered by source index.
    pub fn iter(&self) -> impl Iterator<Item = &ElementFailure> {
        self.failures.iter()
    }

    pub fn indices(&self) -> Vec<usize> {
        self.failures.iter().map(|f| f.index).collect()
    }

    pub fn into_failures(self) -> Vec<ElementFailure> {
        self.failures
    }
}

impl fmt::Display for MappingFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} translations failed, first at {}",
            self.failed,
            self.total,
            self.first()
        )
    }
}

impl Error for MappingFailures {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.first().error.as_ref())
    }
}
