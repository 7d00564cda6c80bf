//! Upload workflow state.
//!
//! Only one analysis may be in flight at a time. While a request is
//! outstanding new uploads are refused until it resolves (success or
//! failure) or the session is reset. There is no retry and no cancellation.
//!
//! ```text
//!   Idle ──begin──▶ Analyzing ──complete──▶ Ready
//!    ▲                  │                     │
//!    │                  └──────fail──────▶ Failed
//!    └────────────────── reset ───────────────┘
//! ```

use thiserror::Error;

use crate::analysis::model::NormalizedAnalysis;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Analyzing {
        file_name: String,
    },
    Ready {
        file_name: String,
        analysis: NormalizedAnalysis,
    },
    Failed {
        file_name: String,
        message: String,
    },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("an analysis of {file_name} is already in progress")]
    Busy { file_name: String },

    #[error("no analysis is in progress")]
    NotAnalyzing,
}

#[derive(Debug, Default)]
pub struct AnalysisSession {
    state: SessionState,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.state, SessionState::Analyzing { .. })
    }

    /// The analysis of the last successful upload, if any.
    pub fn analysis(&self) -> Option<&NormalizedAnalysis> {
        match &self.state {
            SessionState::Ready { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    /// Marks `file_name` as in flight.
    ///
    /// A previous result or failure is discarded.
    pub fn begin(&mut self, file_name: impl Into<String>) -> Result<(), SessionError> {
        if let SessionState::Analyzing { file_name: current } = &self.state {
            return Err(SessionError::Busy {
                file_name: current.clone(),
            });
        }

        self.state = SessionState::Analyzing {
            file_name: file_name.into(),
        };
        Ok(())
    }

    /// Stores the analysis for the in-flight file.
    pub fn complete(
        &mut self,
        analysis: NormalizedAnalysis,
    ) -> Result<&NormalizedAnalysis, SessionError> {
        let file_name = self.take_in_flight()?;
        self.state = SessionState::Ready {
            file_name,
            analysis,
        };
        self.analysis().ok_or(SessionError::NotAnalyzing)
    }

    /// Records a terminal failure for the in-flight file.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        let file_name = self.take_in_flight()?;
        self.state = SessionState::Failed {
            file_name,
            message: message.into(),
        };
        Ok(())
    }

    /// Back to `Idle` from any state, discarding any result.
    pub fn reset(&mut self) {
        self.state = SessionState::Idle;
    }

    fn take_in_flight(&mut self) -> Result<String, SessionError> {
        match std::mem::take(&mut self.state) {
            SessionState::Analyzing { file_name } => Ok(file_name),
            other => {
                self.state = other;
                Err(SessionError::NotAnalyzing)
            }
        }
    }
}
